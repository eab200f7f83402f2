//! 样本格式转换
//!
//! f32规范化样本到16位有符号PCM的统一转换规则，WAV与MP3编码器共用，
//! 保证两条输出路径的量化行为逐位一致。

use crate::audio::SampleBuffer;
use crate::tools::constants::encoding::MAX_ENCODED_CHANNELS;

/// 单样本转换：`round(clamp(s, -1, 1) * (s < 0 ? 32768 : 32767))`
///
/// 负半轴用32768做满刻度，正半轴用32767，保证-1.0映射到-32768、
/// 1.0映射到32767，不发生回绕。
#[inline]
pub fn sample_to_i16(sample: f32) -> i16 {
    let clamped = sample.clamp(-1.0, 1.0);
    let scaled = if clamped < 0.0 {
        clamped * 32768.0
    } else {
        clamped * 32767.0
    };
    scaled.round() as i16
}

/// 整声道转换为16位PCM
pub fn channel_to_i16(channel: &[f32]) -> Vec<i16> {
    channel.iter().copied().map(sample_to_i16).collect()
}

/// 缓冲区转换为交错16位PCM（帧内按声道顺序）
///
/// 按约定最多取前[`MAX_ENCODED_CHANNELS`]个声道，多余声道忽略。
pub fn interleave_i16(buf: &SampleBuffer) -> Vec<i16> {
    let channels = buf.channels();
    let used = channels.len().min(MAX_ENCODED_CHANNELS);
    let frames = buf.frame_count() as usize;

    let mut interleaved = Vec::with_capacity(frames * used);
    for frame in 0..frames {
        for channel in &channels[..used] {
            interleaved.push(sample_to_i16(channel[frame]));
        }
    }
    interleaved
}
