//! Audio Remaster Tool - 主程序入口
//!
//! 纯流程控制器，负责协调各个工具模块完成重制任务。

use audio_remaster_tool::error::{ErrorCategory, RemasterError};
use audio_remaster_tool::tools::{self, AppConfig};
use std::process;

/// 错误退出码定义
mod exit_codes {
    /// 通用错误
    pub const GENERAL_ERROR: i32 = 1;
    /// 格式/输入错误
    pub const INPUT_ERROR: i32 = 2;
    /// 解码失败
    pub const DECODING_ERROR: i32 = 3;
    /// 编码失败
    pub const ENCODING_ERROR: i32 = 4;
    /// 输出体积超限
    pub const SIZE_ERROR: i32 = 5;
}

/// 获取错误建议文本
fn get_error_suggestion(error: &RemasterError) -> &'static str {
    match ErrorCategory::from_remaster_error(error) {
        ErrorCategory::Input => {
            "检查命令行参数和设置文件，使用 --help 查看完整用法 / Check arguments and settings file, use --help for full usage"
        }
        ErrorCategory::Io => {
            "检查文件路径是否正确，文件是否存在且可读 / Check if file path is correct, file exists and is readable"
        }
        ErrorCategory::Decoding => {
            "文件可能损坏或使用不支持的音频编码 / File may be corrupted or use unsupported audio encoding"
        }
        ErrorCategory::Encoding => {
            "MP3编码器不可用，可尝试 --format wav / MP3 encoder unavailable, try --format wav"
        }
        ErrorCategory::Size => {
            "输出超过15MiB上限，可尝试 --format mp3 --bitrate 128 / Output exceeds the 15MiB limit, try --format mp3 --bitrate 128"
        }
        ErrorCategory::Other => {
            "请检查输入文件和参数设置 / Please check input file and parameter settings"
        }
    }
}

/// 错误处理和建议
fn handle_error(error: RemasterError) -> ! {
    eprintln!("[ERROR] 错误 / Error: {error}");
    eprintln!("[INFO] 建议 / Suggestion: {}", get_error_suggestion(&error));

    let exit_code = match ErrorCategory::from_remaster_error(&error) {
        ErrorCategory::Input => exit_codes::INPUT_ERROR,
        ErrorCategory::Decoding => exit_codes::DECODING_ERROR,
        ErrorCategory::Encoding => exit_codes::ENCODING_ERROR,
        ErrorCategory::Size => exit_codes::SIZE_ERROR,
        ErrorCategory::Io | ErrorCategory::Other => exit_codes::GENERAL_ERROR,
    };

    process::exit(exit_code);
}

/// 批量处理模式
fn process_batch_mode(config: &AppConfig) -> Result<(), RemasterError> {
    let audio_files = tools::scan_audio_files(&config.input_path)?;
    tools::show_scan_results(&audio_files, &config.input_path);

    if audio_files.is_empty() {
        return Ok(());
    }

    let reports = tools::process_batch(&audio_files, config);
    tools::show_batch_summary(&reports);

    Ok(())
}

/// 单文件处理模式
fn process_single_mode(config: &AppConfig) -> Result<(), RemasterError> {
    let report = tools::process_single_file(&config.input_path, config)?;
    tools::show_single_result(&report);
    Ok(())
}

/// 应用程序主逻辑（便于测试和复用）
fn run() -> Result<(), RemasterError> {
    // 1. 解析命令行参数
    let config = tools::parse_args()?;

    // 2. 显示启动信息
    tools::show_startup_info(&config);

    // 3. 根据模式选择处理方式
    let result = if config.is_batch_mode() {
        process_batch_mode(&config)
    } else {
        process_single_mode(&config)
    };

    // 4. 处理结果并返回
    match result {
        Ok(()) => {
            tools::show_completion_info(&config);
            Ok(())
        }
        Err(error) => Err(error),
    }
}

fn main() {
    if let Err(error) = run() {
        handle_error(error);
    }
}
