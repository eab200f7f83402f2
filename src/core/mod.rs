//! 核心增强算法层
//!
//! 包含设置快照、逐样本增强变换和渲染同步边界。

pub mod enhancer;
pub mod renderer;
pub mod settings;

pub use enhancer::enhance;
pub use renderer::render;
pub use settings::{EnhancementSettings, OutputFormat};
