//! 管线编排层
//!
//! 状态机编排、进度叙事和输出体积守卫。

pub mod orchestrator;
pub mod progress;
pub mod size_guard;

pub use orchestrator::{PipelineOrchestrator, PipelineOutcome, PipelineState, ProcessedAudio};
pub use progress::{ProgressEvent, ProgressStage};
