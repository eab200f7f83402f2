//! 规范化样本缓冲区
//!
//! 管线内部的唯一PCM表示：平面（planar）f32声道序列，附带采样率元数据。
//! 缓冲区由解码器创建，被当次管线独占消费，不跨运行缓存。

use crate::error::{RemasterError, RemasterResult};

/// 规范化多声道样本缓冲区
///
/// 不变量：
/// - 所有声道序列长度一致（帧数相同）
/// - `sample_rate > 0`
/// - 至少一个声道；编码阶段按约定最多取前两个声道
///
/// 增强后的样本约束在`[-1.0, 1.0]`区间；解码器的直接输出允许瞬时越界，
/// 由增强阶段的钳制步骤收敛。
#[derive(Debug, Clone, PartialEq)]
pub struct SampleBuffer {
    sample_rate: u32,
    channels: Vec<Vec<f32>>,
}

impl SampleBuffer {
    /// 创建新的样本缓冲区（构造时即校验不变量）
    pub fn new(sample_rate: u32, channels: Vec<Vec<f32>>) -> RemasterResult<Self> {
        let buffer = Self {
            sample_rate,
            channels,
        };
        buffer.validate()?;
        Ok(buffer)
    }

    /// 校验缓冲区不变量
    pub fn validate(&self) -> RemasterResult<()> {
        if self.sample_rate == 0 {
            return Err(RemasterError::InvalidInput("采样率不能为0".to_string()));
        }
        if self.channels.is_empty() {
            return Err(RemasterError::InvalidInput("声道数不能为0".to_string()));
        }
        let frame_count = self.channels[0].len();
        if self.channels.iter().any(|ch| ch.len() != frame_count) {
            return Err(RemasterError::InvalidInput(
                "各声道样本数量不一致".to_string(),
            ));
        }
        Ok(())
    }

    /// 采样率（Hz）
    #[inline]
    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    /// 声道数量
    #[inline]
    pub fn channel_count(&self) -> u16 {
        self.channels.len() as u16
    }

    /// 每声道帧数
    #[inline]
    pub fn frame_count(&self) -> u64 {
        self.channels.first().map_or(0, |ch| ch.len() as u64)
    }

    /// 持续时长（秒）
    pub fn duration_seconds(&self) -> f64 {
        self.frame_count() as f64 / self.sample_rate as f64
    }

    /// 只读访问声道数据
    #[inline]
    pub fn channels(&self) -> &[Vec<f32>] {
        &self.channels
    }

    /// 可变访问声道数据（供增强阶段原地变换）
    #[inline]
    pub fn channels_mut(&mut self) -> &mut [Vec<f32>] {
        &mut self.channels
    }
}
