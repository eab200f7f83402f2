//! 通用工具函数
//!
//! 路径/文件名处理和MIME推断的小工具集合。

use std::path::Path;

/// 提取文件名（有损转换，保证不panic）
pub fn extract_filename_lossy(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// 根据扩展名推断声明的MIME类型
pub fn mime_for_extension(extension: Option<&str>) -> String {
    match extension {
        Some("mp3") => "audio/mp3".to_string(),
        Some("wav") => "audio/wav".to_string(),
        Some("flac") => "audio/flac".to_string(),
        Some("aac") => "audio/aac".to_string(),
        Some("m4a") | Some("mp4") => "audio/mp4".to_string(),
        _ => "application/octet-stream".to_string(),
    }
}

/// 生成建议输出文件名：`remastered_<原始stem>.<扩展名>`
///
/// `new_extension`为None时表示透传路径，保留原始扩展名。
pub fn suggested_output_name(original_name: Option<&str>, new_extension: Option<&str>) -> String {
    let (stem, original_ext) = match original_name.and_then(|name| name.rsplit_once('.')) {
        Some((stem, ext)) if !stem.is_empty() => (stem, Some(ext)),
        // 点开头的名字（如".mp3"）没有可用的stem，回退占位名但保留扩展名
        Some((_, ext)) => ("output", Some(ext)),
        None => (original_name.unwrap_or("output"), None),
    };

    match new_extension.or(original_ext) {
        Some(ext) => format!("remastered_{stem}.{ext}"),
        None => format!("remastered_{stem}"),
    }
}
