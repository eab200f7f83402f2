//! 命令行接口模块
//!
//! 负责命令行参数解析、设置装配和程序信息展示。

use crate::core::settings::{EnhancementSettings, OutputFormat};
use crate::error::{RemasterError, RemasterResult};
use clap::{Arg, Command};
use std::path::PathBuf;

/// 应用程序版本信息
const VERSION: &str = env!("CARGO_PKG_VERSION");
const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");

/// 应用程序配置
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// 输入文件路径（单文件模式）或扫描目录（批量模式）
    pub input_path: PathBuf,

    /// 输出文件路径（可选，默认写到输入文件旁）
    pub output_path: Option<PathBuf>,

    /// 本次运行的增强设置快照
    pub settings: EnhancementSettings,

    /// 是否显示详细信息（含进度叙事）
    pub verbose: bool,
}

impl AppConfig {
    /// 智能判断是否为批量模式（基于路径类型）
    #[inline]
    pub fn is_batch_mode(&self) -> bool {
        self.input_path.is_dir()
    }
}

/// 解析命令行参数并装配配置
///
/// 设置优先级：默认值 < `--settings` JSON文件 < 命令行开关。
pub fn parse_args() -> RemasterResult<AppConfig> {
    let matches = Command::new("audio-remaster")
        .version(VERSION)
        .about(DESCRIPTION)
        .author("MacinMeter Team")
        .arg(
            Arg::new("INPUT")
                .help("音频文件或目录路径 (支持MP3, MP4, WAV, FLAC, AAC, M4A)。如果不指定，将扫描可执行文件所在目录")
                .required(false)
                .index(1),
        )
        .arg(
            Arg::new("output")
                .long("output")
                .short('o')
                .help("输出文件路径（单文件模式）")
                .value_name("FILE"),
        )
        .arg(
            Arg::new("settings")
                .long("settings")
                .help("从JSON文件加载增强设置 (camelCase字段)")
                .value_name("FILE"),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .help("输出格式")
                .value_parser(["mp3", "wav"]),
        )
        .arg(
            Arg::new("bitrate")
                .long("bitrate")
                .help("MP3码率 (kbps)")
                .value_parser(clap::value_parser!(u32)),
        )
        .arg(
            Arg::new("no-noise-reduction")
                .long("no-noise-reduction")
                .help("关闭噪声抑制")
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("no-bass-enhancement")
                .long("no-bass-enhancement")
                .help("关闭低频增强（预留位）")
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("no-clarity-boost")
                .long("no-clarity-boost")
                .help("关闭清晰度提升")
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("no-spatial-audio")
                .long("no-spatial-audio")
                .help("关闭空间音频（预留位）")
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("显示详细处理信息")
                .action(clap::ArgAction::SetTrue),
        )
        .get_matches();

    // 确定输入路径（智能路径处理）
    let input_path = match matches.get_one::<String>("INPUT") {
        Some(input) => PathBuf::from(input),
        None => {
            // 双击启动模式：使用可执行文件所在目录
            let exe_path = std::env::current_exe().unwrap_or_else(|_| PathBuf::from("."));
            exe_path
                .parent()
                .map(|p| p.to_path_buf())
                .unwrap_or_else(|| PathBuf::from("."))
        }
    };

    // 设置装配：默认 → JSON文件 → 命令行覆盖
    let mut settings = match matches.get_one::<String>("settings") {
        Some(path) => EnhancementSettings::from_json_file(&PathBuf::from(path))?,
        None => EnhancementSettings::default(),
    };

    if let Some(format) = matches.get_one::<String>("format") {
        settings.format = match format.as_str() {
            "wav" => OutputFormat::Wav,
            _ => OutputFormat::Mp3,
        };
    }
    if let Some(bitrate) = matches.get_one::<u32>("bitrate") {
        settings.bitrate = *bitrate;
    }
    if matches.get_flag("no-noise-reduction") {
        settings.noise_reduction = false;
    }
    if matches.get_flag("no-bass-enhancement") {
        settings.bass_enhancement = false;
    }
    if matches.get_flag("no-clarity-boost") {
        settings.clarity_boost = false;
    }
    if matches.get_flag("no-spatial-audio") {
        settings.spatial_audio = false;
    }

    settings
        .validate()
        .map_err(|e| RemasterError::InvalidInput(format!("命令行设置无效: {e}")))?;

    Ok(AppConfig {
        input_path,
        output_path: matches.get_one::<String>("output").map(PathBuf::from),
        settings,
        verbose: matches.get_flag("verbose"),
    })
}

/// 显示程序启动信息
pub fn show_startup_info(config: &AppConfig) {
    println!("🎵 Audio Remaster Tool v{VERSION} 启动");
    println!("📝 {DESCRIPTION}");
    if config.verbose {
        println!(
            "   设置 / Settings: {} @ {}kbps, 噪声抑制={}, 清晰度={}",
            config.settings.format,
            config.settings.bitrate,
            config.settings.noise_reduction,
            config.settings.clarity_boost
        );
    }
    println!();
}

/// 显示程序完成信息
pub fn show_completion_info(config: &AppConfig) {
    if config.verbose {
        println!("✅ 所有任务处理完成！");
    }
}
