//! 样本增强引擎
//!
//! 对每个声道的每个样本独立应用设置驱动的确定性变换：
//! 1. 噪声抑制：`|s| < NOISE_FLOOR_THRESHOLD`时衰减`NOISE_ATTENUATION`倍
//! 2. 清晰度提升：固定增益`CLARITY_GAIN`
//! 3. 钳制到`[-1.0, 1.0]`
//!
//! 变换无样本间状态、与顺序无关，因此可以安全地按声道并行，
//! 并行与否不改变输出的逐字节一致性。无失败模式。

use crate::audio::SampleBuffer;
use crate::core::settings::EnhancementSettings;
use crate::tools::constants::enhancement::{
    CLARITY_GAIN, NOISE_ATTENUATION, NOISE_FLOOR_THRESHOLD,
};
use rayon::prelude::*;

/// 单样本增强变换
///
/// `bass_enhancement`和`spatial_audio`被读取但当前不参与数值计算（预留位）。
#[inline]
fn enhance_sample(sample: f32, settings: &EnhancementSettings) -> f32 {
    let mut s = sample;

    if settings.noise_reduction && s.abs() < NOISE_FLOOR_THRESHOLD {
        s *= NOISE_ATTENUATION;
    }

    if settings.clarity_boost {
        s *= CLARITY_GAIN;
    }

    s.clamp(-1.0, 1.0)
}

/// 对整个缓冲区应用增强变换（原地修改后返回）
///
/// 消费输入缓冲区，保持采样率、声道数、帧数不变。
/// 给定相同的缓冲区和设置，两次调用产出逐字节一致的结果。
pub fn enhance(mut buf: SampleBuffer, settings: &EnhancementSettings) -> SampleBuffer {
    buf.channels_mut().par_iter_mut().for_each(|channel| {
        for sample in channel.iter_mut() {
            *sample = enhance_sample(*sample, settings);
        }
    });
    buf
}
