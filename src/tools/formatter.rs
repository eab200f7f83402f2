//! 批量结果格式化模块
//!
//! 用表格汇总批量处理结果，附带生成时间戳。

use crate::tools::processor::FileReport;
use crate::tools::utils;
use comfy_table::{Cell, ContentArrangement, Table, presets::UTF8_FULL};

/// 渲染批量处理汇总表格
pub fn render_batch_summary(reports: &[FileReport]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            "文件 / File",
            "状态 / Status",
            "输出 / Output",
            "体积 / Size",
            "备注 / Note",
        ]);

    for report in reports {
        table.add_row(vec![
            Cell::new(utils::extract_filename_lossy(&report.file)),
            Cell::new(&report.status),
            Cell::new(
                report
                    .output_path
                    .as_deref()
                    .map(utils::extract_filename_lossy)
                    .unwrap_or_else(|| "-".to_string()),
            ),
            Cell::new(
                report
                    .output_size
                    .map(|size| format!("{size} B"))
                    .unwrap_or_else(|| "-".to_string()),
            ),
            Cell::new(report.note.as_deref().unwrap_or("-")),
        ]);
    }

    table
}

/// 渲染单文件处理结果文案
///
/// 成功产出用`[OK]`，拒绝/无产出用`[WARNING]`加状态说明。
pub fn render_single_result(report: &FileReport) -> String {
    let mut lines = Vec::new();
    match &report.output_path {
        Some(output) => lines.push(format!(
            "[OK] {} → {}",
            utils::extract_filename_lossy(&report.file),
            utils::extract_filename_lossy(output)
        )),
        None => lines.push(format!(
            "[WARNING] {} 未产出文件 / no output ({})",
            utils::extract_filename_lossy(&report.file),
            report.status
        )),
    }
    if let Some(size) = report.output_size {
        lines.push(format!("   输出体积 / Output size: {size} 字节"));
    }
    if let Some(note) = &report.note {
        lines.push(format!("   备注 / Note: {note}"));
    }
    lines.join("\n")
}

/// 打印批量处理汇总
pub fn show_batch_summary(reports: &[FileReport]) {
    let succeeded = reports.iter().filter(|r| r.output_path.is_some()).count();
    let timestamp = chrono::Local::now().format("%Y-%m-%d %H:%M:%S");

    println!();
    println!("📊 批量处理汇总 / Batch summary ({timestamp})");
    println!("{}", render_batch_summary(reports));
    println!(
        "   成功 {}/{} / Succeeded {}/{}",
        succeeded,
        reports.len(),
        succeeded,
        reports.len()
    );
}
