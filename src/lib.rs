//! Audio Remaster Tool
//!
//! 离线音频重制处理管线：解码 → 逐样本增强 → 确定性渲染 → 格式编码 →
//! 体积校验。
//!
//! ## 核心特性
//! - 多格式输入解码（MP3/MP4/WAV/FLAC/AAC/M4A，委托symphonia）
//! - 设置驱动的确定性逐样本增强（噪声门 + 清晰度增益 + 钳制）
//! - 逐位确定的WAV容器输出与LAME逐帧MP3编码
//! - 分级回退策略：解码失败原样透传，MP3失败替换WAV
//! - 15MiB输出体积守卫，超限整体拒绝

pub mod audio;
pub mod core;
pub mod encode;
pub mod error;
pub mod pipeline;
pub mod tools;

// 重新导出核心类型
pub use audio::{EncodedAudio, SampleBuffer};
pub use crate::core::{EnhancementSettings, OutputFormat};
pub use encode::{LameMp3Encoder, Mp3Backend};
pub use error::{DecodeError, EncodeError, ErrorCategory, RemasterError, RemasterResult};
pub use pipeline::{
    PipelineOrchestrator, PipelineOutcome, PipelineState, ProcessedAudio, ProgressEvent,
    ProgressStage,
};
