//! MP3编码器
//!
//! 将物化PCM缓冲区压缩为MP3比特流。编码能力抽象在[`Mp3Backend`]接口后，
//! 默认实现委托LAME；任何具备同等能力的编码库都可以替换接入，
//! 管线编排层也借此注入失败场景做回退验证。
//!
//! 输入按约定最多取两个声道（单声道复制到左右双声道），样本转换规则与
//! WAV路径共用，之后按每声道1152样本的固定帧逐帧送入编码器；各帧产出的
//! 压缩块严格按帧序拼接，最后flush吐出尾帧。

use crate::audio::SampleBuffer;
use crate::encode::pcm;
use crate::error::EncodeError;
use crate::tools::constants::encoding::MP3_FRAME_SAMPLES;
use mp3lame_encoder as lame;
use std::mem::MaybeUninit;

/// MP3编码能力接口
///
/// 对具体编码库的抽象（能力接口，而非具体依赖）。
pub trait Mp3Backend: Send + Sync {
    /// 编码为MP3字节序列
    fn encode(&self, buf: &SampleBuffer, bitrate: u32) -> Result<Vec<u8>, EncodeError>;
}

/// 默认MP3后端：LAME
pub struct LameMp3Encoder;

impl LameMp3Encoder {
    /// 码率映射（合法性已在设置校验时保证，未知值按最高档处理）
    fn map_bitrate(bitrate: u32) -> lame::Bitrate {
        match bitrate {
            128 => lame::Bitrate::Kbps128,
            _ => lame::Bitrate::Kbps320,
        }
    }
}

impl Mp3Backend for LameMp3Encoder {
    fn encode(&self, buf: &SampleBuffer, bitrate: u32) -> Result<Vec<u8>, EncodeError> {
        let channels = buf.channels();
        if channels.is_empty() {
            return Err(EncodeError::EncoderUnavailable(
                "缓冲区没有声道数据".to_string(),
            ));
        }

        // 单声道复制到左右双声道；多声道只取前两个
        let left = pcm::channel_to_i16(&channels[0]);
        let right = if channels.len() >= 2 {
            pcm::channel_to_i16(&channels[1])
        } else {
            left.clone()
        };

        let mut builder = lame::Builder::new()
            .ok_or_else(|| EncodeError::EncoderUnavailable("无法创建LAME编码器".to_string()))?;

        builder
            .set_sample_rate(buf.sample_rate())
            .map_err(|e| EncodeError::EncoderUnavailable(format!("采样率不受支持: {e:?}")))?;
        builder
            .set_num_channels(2)
            .map_err(|e| EncodeError::EncoderUnavailable(format!("声道数设置失败: {e:?}")))?;
        builder
            .set_brate(Self::map_bitrate(bitrate))
            .map_err(|e| EncodeError::EncoderUnavailable(format!("码率设置失败: {e:?}")))?;
        builder
            .set_quality(lame::Quality::Best)
            .map_err(|e| EncodeError::EncoderUnavailable(format!("质量设置失败: {e:?}")))?;

        let mut encoder = builder
            .build()
            .map_err(|e| EncodeError::EncoderUnavailable(format!("构建编码器失败: {e:?}")))?;

        // 逐帧编码：每声道1152样本为一帧，交错后为2304个样本
        let mut output = Vec::new();
        let frames = left.len();
        let mut interleaved = Vec::with_capacity(MP3_FRAME_SAMPLES * 2);

        for start in (0..frames).step_by(MP3_FRAME_SAMPLES) {
            let end = (start + MP3_FRAME_SAMPLES).min(frames);
            interleaved.clear();
            for i in start..end {
                interleaved.push(left[i]);
                interleaved.push(right[i]);
            }

            // LAME最坏情况输出：1.25 * 样本数 + 7200字节
            let capacity = (end - start) * 5 / 4 + 7200;
            let mut chunk: Vec<MaybeUninit<u8>> = vec![MaybeUninit::uninit(); capacity];

            let written = encoder
                .encode(lame::InterleavedPcm(&interleaved), &mut chunk)
                .map_err(|e| EncodeError::EncoderUnavailable(format!("MP3编码失败: {e:?}")))?;

            // 编码器已初始化前written个字节
            output.extend(chunk[..written].iter().map(|b| unsafe { b.assume_init() }));
        }

        // flush尾帧
        let mut tail: Vec<MaybeUninit<u8>> = vec![MaybeUninit::uninit(); 7200];
        let written = encoder
            .flush::<lame::FlushNoGap>(&mut tail)
            .map_err(|e| EncodeError::EncoderUnavailable(format!("MP3 flush失败: {e:?}")))?;
        output.extend(tail[..written].iter().map(|b| unsafe { b.assume_init() }));

        Ok(output)
    }
}
