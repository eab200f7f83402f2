//! 文件处理模块
//!
//! 将管线编排器接到文件系统：读输入、跑管线、写输出。
//! 批量模式下每个文件独立运行，单个文件失败不影响其余文件。

use crate::audio::EncodedAudio;
use crate::error::{ErrorCategory, RemasterResult};
use crate::pipeline::progress::ProgressEvent;
use crate::pipeline::{PipelineOrchestrator, PipelineOutcome};
use crate::tools::cli::AppConfig;
use crate::tools::formatter;
use rayon::prelude::*;
use std::path::{Path, PathBuf};

/// 单文件处理报告（批量汇总用）
#[derive(Debug, Clone)]
pub struct FileReport {
    /// 输入文件
    pub file: PathBuf,
    /// 结果状态文案
    pub status: String,
    /// 输出文件路径（成功时）
    pub output_path: Option<PathBuf>,
    /// 输出体积（字节，成功时）
    pub output_size: Option<u64>,
    /// 备注（回退/拒绝原因等）
    pub note: Option<String>,
}

/// 处理单个音频文件
///
/// verbose模式下进度叙事经crossbeam有界通道送往独立打印线程，
/// 提交线程不被终端I/O阻塞。
pub fn process_single_file(path: &Path, config: &AppConfig) -> RemasterResult<FileReport> {
    let input = EncodedAudio::from_file(path)?;
    let requested_format = config.settings.format;

    let mut orchestrator = PipelineOrchestrator::new();

    // 进度打印线程（仅verbose）
    let printer = if config.verbose {
        let (sender, receiver) = crossbeam_channel::bounded::<ProgressEvent>(8);
        orchestrator.set_progress_callback(move |event| {
            // 打印线程已退出时静默丢弃
            let _ = sender.send(*event);
        });
        Some(std::thread::spawn(move || {
            for event in receiver {
                println!(
                    "[PROCESSING] {} ({:.0}%)",
                    event.stage.label(),
                    event.percent
                );
            }
        }))
    } else {
        None
    };

    let outcome = orchestrator.run(&input, &config.settings);

    // 释放编排器以关闭通道发送端，打印线程随之退出
    drop(orchestrator);
    if let Some(handle) = printer {
        let _ = handle.join();
    }

    let report = match outcome {
        PipelineOutcome::Success(processed) => {
            let output_path = match &config.output_path {
                Some(path) => path.clone(),
                None => path
                    .parent()
                    .unwrap_or_else(|| Path::new("."))
                    .join(&processed.suggested_name),
            };

            // 结果只在体积校验通过后落盘，绝不写部分输出
            std::fs::write(&output_path, &processed.bytes)?;

            let note = match processed.format {
                None => Some("解码失败，已原样透传 / decode failed, passed through".to_string()),
                Some(actual) if actual != requested_format => Some(
                    "MP3编码不可用，已回退WAV / MP3 unavailable, fell back to WAV".to_string(),
                ),
                Some(_) => None,
            };

            FileReport {
                file: path.to_path_buf(),
                status: "成功 / OK".to_string(),
                output_path: Some(output_path),
                output_size: Some(processed.size),
                note,
            }
        }
        PipelineOutcome::Rejected { reason } => FileReport {
            file: path.to_path_buf(),
            status: "已拒绝 / Rejected".to_string(),
            output_path: None,
            output_size: None,
            note: Some(reason),
        },
        PipelineOutcome::Failed { error } => return Err(error),
    };

    Ok(report)
}

/// 批量处理多个音频文件
///
/// 多文件时按文件并行（每次运行独占自己的缓冲区，天然无共享状态）；
/// 单个文件失败转为报告行，不中断整个批次。
pub fn process_batch(audio_files: &[PathBuf], config: &AppConfig) -> Vec<FileReport> {
    // 批量模式下关闭每文件的进度叙事和-o重定向，避免输出混乱
    let batch_config = AppConfig {
        verbose: false,
        output_path: None,
        ..config.clone()
    };

    let run_one = |file: &PathBuf| -> FileReport {
        match process_single_file(file, &batch_config) {
            Ok(report) => report,
            Err(error) => {
                let category = ErrorCategory::from_remaster_error(&error);
                FileReport {
                    file: file.clone(),
                    status: "失败 / Failed".to_string(),
                    output_path: None,
                    output_size: None,
                    note: Some(format!("[{}] {error}", category.display_name())),
                }
            }
        }
    };

    if audio_files.len() > 1 {
        audio_files.par_iter().map(run_one).collect()
    } else {
        audio_files.iter().map(run_one).collect()
    }
}

/// 打印单文件处理结果
pub fn show_single_result(report: &FileReport) {
    println!("{}", formatter::render_single_result(report));
}
