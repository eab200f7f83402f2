//! WAV编码器
//!
//! 将物化PCM缓冲区序列化为规范的小端RIFF/WAVE容器：固定44字节头
//! （16字节PCM fmt子块 + data子块）后接逐帧交错的16位有符号样本。
//! 头部布局逐位确定，用于互操作性校验。对任何合法缓冲区总是成功。

use crate::audio::SampleBuffer;
use crate::encode::pcm;
use crate::error::RemasterResult;
use crate::tools::constants::encoding::{MAX_ENCODED_CHANNELS, WAV_BITS_PER_SAMPLE};
use hound::{SampleFormat, WavSpec, WavWriter};
use std::io::Cursor;

/// 编码为WAV字节序列
///
/// 相同缓冲区两次编码产出逐字节一致的结果。
pub fn encode(buf: &SampleBuffer) -> RemasterResult<Vec<u8>> {
    buf.validate()?;

    let channels = (buf.channel_count() as usize).min(MAX_ENCODED_CHANNELS) as u16;
    let spec = WavSpec {
        channels,
        sample_rate: buf.sample_rate(),
        bits_per_sample: WAV_BITS_PER_SAMPLE,
        sample_format: SampleFormat::Int,
    };

    let mut cursor = Cursor::new(Vec::new());
    {
        let mut writer = WavWriter::new(&mut cursor, spec)?;
        for sample in pcm::interleave_i16(buf) {
            writer.write_sample(sample)?;
        }
        writer.finalize()?;
    }

    Ok(cursor.into_inner())
}
