//! 工具模块集合
//!
//! 包含CLI、文件扫描、批量处理、格式化等工具模块，支持main.rs的流程控制。

pub mod cli;
pub mod constants;
pub mod formatter;
pub mod processor;
pub mod scanner;
pub mod utils;

// 重新导出主要的公共接口
pub use cli::{AppConfig, parse_args, show_completion_info, show_startup_info};
pub use formatter::{render_batch_summary, render_single_result, show_batch_summary};
pub use processor::{FileReport, process_batch, process_single_file, show_single_result};
pub use scanner::{scan_audio_files, show_scan_results};
