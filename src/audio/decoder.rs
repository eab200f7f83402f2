//! 音频解码器
//!
//! 将调用方提供的原始编码字节（MP3/MP4/WAV/FLAC/AAC/M4A）解码为规范化的
//! [`SampleBuffer`]。解码委托给symphonia的探测+编解码器体系，本模块不自己
//! 实现任何编解码算法。
//!
//! 纯变换，无副作用；失败时由管线编排层决定回退策略（原样透传），
//! 解码器自身不重试。

use crate::audio::SampleBuffer;
use crate::error::DecodeError;
use std::io::Cursor;
use std::sync::Arc;
use symphonia::core::audio::{AudioBufferRef, Signal};
use symphonia::core::codecs::DecoderOptions;
use symphonia::core::errors::Error as SymphoniaError;
use symphonia::core::formats::FormatOptions;
use symphonia::core::io::MediaSourceStream;
use symphonia::core::meta::MetadataOptions;
use symphonia::core::probe::Hint;

/// 调用方提交的编码音频：不透明字节序列 + 声明的文件名（容器提示）
///
/// 字节用`Arc`共享存储：克隆和喂给解码源都不复制数据本体，
/// 大输入（上游可达百MiB级）只在内存中存在一份。
#[derive(Debug, Clone)]
pub struct EncodedAudio {
    /// 原始编码字节（共享，只读）
    pub bytes: Arc<[u8]>,
    /// 声明的文件名（用于容器格式提示和输出命名）
    pub file_name: Option<String>,
}

impl EncodedAudio {
    /// 从字节和文件名创建
    pub fn new(bytes: Vec<u8>, file_name: Option<String>) -> Self {
        Self {
            bytes: bytes.into(),
            file_name,
        }
    }

    /// 从文件加载
    pub fn from_file(path: &std::path::Path) -> std::io::Result<Self> {
        let bytes = std::fs::read(path)?.into();
        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned());
        Ok(Self { bytes, file_name })
    }

    /// 声明文件名中的扩展名（小写）
    pub fn extension(&self) -> Option<String> {
        self.file_name
            .as_deref()
            .and_then(|name| name.rsplit_once('.'))
            .map(|(_, ext)| ext.to_lowercase())
    }

    /// 输入体积（字节）
    pub fn size(&self) -> u64 {
        self.bytes.len() as u64
    }
}

/// 将symphonia解码出的缓冲块追加到平面声道序列
macro_rules! append_planar {
    ($buf:expr, $channels:expr, $conv:expr) => {{
        let frames = $buf.frames();
        // 个别包的声道数可能少于轨道声明值，越界声道跳过，
        // 长度不一致最终由SampleBuffer校验拦截
        let available = $buf.spec().channels.count();
        for (idx, out) in $channels.iter_mut().enumerate().take(available) {
            out.extend($buf.chan(idx).iter().take(frames).map($conv));
        }
    }};
}

/// 解码编码字节为规范化样本缓冲区
///
/// 委托symphonia探测容器、选择音轨并逐包解码；各包样本统一转换为f32
/// 并按声道平面排列。解码器的直接输出允许瞬时超出`[-1, 1]`，由后续
/// 增强阶段钳制。
pub fn decode(input: &EncodedAudio) -> Result<SampleBuffer, DecodeError> {
    if input.bytes.is_empty() {
        return Err(DecodeError::Corrupt("输入字节为空".to_string()));
    }

    // Arc克隆只增加引用计数，解码源与调用方共享同一份字节
    let mss = MediaSourceStream::new(
        Box::new(Cursor::new(Arc::clone(&input.bytes))),
        Default::default(),
    );

    let mut hint = Hint::new();
    if let Some(ext) = input.extension() {
        hint.with_extension(&ext);
    }

    let meta_opts = MetadataOptions::default();
    let fmt_opts = FormatOptions::default();

    let probed = symphonia::default::get_probe()
        .format(&hint, mss, &fmt_opts, &meta_opts)
        .map_err(|e| DecodeError::Unsupported(format!("格式探测失败: {e}")))?;

    let mut format_reader = probed.format;

    let track = format_reader
        .tracks()
        .iter()
        .find(|t| t.codec_params.codec != symphonia::core::codecs::CODEC_TYPE_NULL)
        .ok_or_else(|| DecodeError::Unsupported("未找到音频轨道".to_string()))?;

    let track_id = track.id;
    let codec_params = &track.codec_params;

    let sample_rate = codec_params
        .sample_rate
        .ok_or_else(|| DecodeError::Corrupt("无法获取采样率信息".to_string()))?;
    let channel_count = codec_params
        .channels
        .map(|ch| ch.count())
        .ok_or_else(|| DecodeError::Corrupt("无法获取声道数信息".to_string()))?;

    if sample_rate == 0 || channel_count == 0 {
        return Err(DecodeError::Corrupt(format!(
            "无效的音频参数: {sample_rate}Hz / {channel_count}声道"
        )));
    }

    let dec_opts = DecoderOptions::default();
    let mut decoder = symphonia::default::get_codecs()
        .make(codec_params, &dec_opts)
        .map_err(|e| DecodeError::Unsupported(format!("创建解码器失败: {e}")))?;

    let mut channels: Vec<Vec<f32>> = vec![Vec::new(); channel_count];

    loop {
        let packet = match format_reader.next_packet() {
            Ok(packet) => packet,
            Err(SymphoniaError::ResetRequired) => {
                decoder.reset();
                continue;
            }
            Err(SymphoniaError::IoError(ref e))
                if e.kind() == std::io::ErrorKind::UnexpectedEof =>
            {
                break;
            }
            Err(e) => return Err(DecodeError::Corrupt(format!("读取包失败: {e}"))),
        };

        if packet.track_id() != track_id {
            continue;
        }

        match decoder.decode(&packet) {
            Ok(audio_buf) => append_decoded(&audio_buf, &mut channels),
            Err(SymphoniaError::IoError(ref e))
                if e.kind() == std::io::ErrorKind::UnexpectedEof =>
            {
                break;
            }
            // 单包损坏可跳过，解码器内部已重新同步
            Err(SymphoniaError::DecodeError(_)) => continue,
            Err(e) => return Err(DecodeError::Corrupt(format!("解码失败: {e}"))),
        }
    }

    if channels.iter().all(|ch| ch.is_empty()) {
        return Err(DecodeError::Corrupt("未解码到任何样本".to_string()));
    }

    SampleBuffer::new(sample_rate, channels)
        .map_err(|e| DecodeError::Corrupt(format!("解码输出无效: {e}")))
}

/// 将单个解码缓冲块转为f32并追加到各平面声道
fn append_decoded(audio_buf: &AudioBufferRef, channels: &mut [Vec<f32>]) {
    match audio_buf {
        AudioBufferRef::F32(buf) => append_planar!(buf, channels, |s: &f32| *s),
        AudioBufferRef::F64(buf) => append_planar!(buf, channels, |s: &f64| *s as f32),
        AudioBufferRef::S16(buf) => append_planar!(buf, channels, |s: &i16| *s as f32 / 32768.0),
        AudioBufferRef::S24(buf) => {
            append_planar!(buf, channels, |s| s.inner() as f32 / 8388608.0)
        }
        AudioBufferRef::S32(buf) => {
            append_planar!(buf, channels, |s: &i32| (*s as f64 / 2147483648.0) as f32)
        }
        AudioBufferRef::S8(buf) => append_planar!(buf, channels, |s: &i8| *s as f32 / 128.0),
        AudioBufferRef::U8(buf) => {
            append_planar!(buf, channels, |s: &u8| (*s as f32 - 128.0) / 128.0)
        }
        AudioBufferRef::U16(buf) => {
            append_planar!(buf, channels, |s: &u16| (*s as f32 - 32768.0) / 32768.0)
        }
        AudioBufferRef::U24(buf) => {
            append_planar!(buf, channels, |s| (s.inner() as f32 - 8388608.0) / 8388608.0)
        }
        AudioBufferRef::U32(buf) => {
            append_planar!(buf, channels, |s: &u32| {
                ((*s as f64 - 2147483648.0) / 2147483648.0) as f32
            })
        }
    }
}
