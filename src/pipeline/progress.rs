//! 进度阶段叙事
//!
//! 面向调用方的六个固定命名阶段。这是给用户看的叙事文案，
//! 与真实的五阶段数据流水线并非一一对应，只保证顺序与完整性，
//! 不参与正确性控制。

/// 用户可见的进度阶段（固定顺序）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProgressStage {
    Analyzing,
    NoiseReduction,
    ClarityDepth,
    DynamicRange,
    SpatialEnhancement,
    Finalizing,
}

impl ProgressStage {
    /// 全部阶段，按报告顺序
    pub const ALL: [ProgressStage; 6] = [
        ProgressStage::Analyzing,
        ProgressStage::NoiseReduction,
        ProgressStage::ClarityDepth,
        ProgressStage::DynamicRange,
        ProgressStage::SpatialEnhancement,
        ProgressStage::Finalizing,
    ];

    /// 阶段文案
    pub fn label(&self) -> &'static str {
        match self {
            ProgressStage::Analyzing => "Analyzing audio signature...",
            ProgressStage::NoiseReduction => "Applying AI noise reduction...",
            ProgressStage::ClarityDepth => "Enhancing clarity and depth...",
            ProgressStage::DynamicRange => "Optimizing dynamic range...",
            ProgressStage::SpatialEnhancement => "Applying spatial enhancement...",
            ProgressStage::Finalizing => "Finalizing remaster...",
        }
    }

    /// 该阶段完成后的总进度百分比
    pub fn percent(&self) -> f32 {
        let index = Self::ALL
            .iter()
            .position(|stage| stage == self)
            .unwrap_or(Self::ALL.len() - 1);
        (index + 1) as f32 * 100.0 / Self::ALL.len() as f32
    }
}

/// 进度事件：阶段名 + 完成百分比
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProgressEvent {
    pub stage: ProgressStage,
    pub percent: f32,
}

impl ProgressEvent {
    pub fn new(stage: ProgressStage) -> Self {
        Self {
            stage,
            percent: stage.percent(),
        }
    }
}

/// 进度回调类型
pub type ProgressCallback = Box<dyn Fn(&ProgressEvent) + Send>;
