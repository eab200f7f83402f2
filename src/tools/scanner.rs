//! 文件扫描模块
//!
//! 负责扫描目录中的音频文件，支持对用户承诺的全部输入格式。

use crate::error::{RemasterError, RemasterResult};
use crate::tools::constants::formats::ACCEPTED_EXTENSIONS;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// 扫描目录中的音频文件（递归子目录）
pub fn scan_audio_files(dir_path: &Path) -> RemasterResult<Vec<PathBuf>> {
    if !dir_path.exists() {
        return Err(RemasterError::IoError(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            format!("目录不存在: {}", dir_path.display()),
        )));
    }

    if !dir_path.is_dir() {
        return Err(RemasterError::InvalidInput(format!(
            "路径不是目录: {}",
            dir_path.display()
        )));
    }

    let mut audio_files = Vec::new();

    for entry in WalkDir::new(dir_path).follow_links(false) {
        let entry = entry.map_err(|e| {
            RemasterError::IoError(std::io::Error::other(format!("目录遍历失败: {e}")))
        })?;

        if !entry.file_type().is_file() {
            continue;
        }

        let path = entry.path();
        if let Some(extension) = path.extension().and_then(|ext| ext.to_str()) {
            let ext_lower = extension.to_lowercase();
            if ACCEPTED_EXTENSIONS.contains(&ext_lower.as_str()) {
                audio_files.push(path.to_path_buf());
            }
        }
    }

    // 按文件名排序，保证处理顺序确定
    audio_files.sort();

    Ok(audio_files)
}

/// 显示文件扫描结果
pub fn show_scan_results(audio_files: &[PathBuf], dir_path: &Path) {
    if audio_files.is_empty() {
        println!(
            "[INFO] 未找到音频文件 / No audio files found: {}",
            dir_path.display()
        );
        println!(
            "   支持的格式 / Supported formats: {}",
            ACCEPTED_EXTENSIONS
                .iter()
                .map(|ext| ext.to_uppercase())
                .collect::<Vec<_>>()
                .join(", ")
        );
    } else {
        println!(
            "[INFO] 发现 {} 个音频文件 / Found {} audio file(s)",
            audio_files.len(),
            audio_files.len()
        );
    }
}
