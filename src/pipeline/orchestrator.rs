//! 管线编排器
//!
//! 串联解码→增强→渲染→编码→体积校验五个阶段的状态机，
//! 负责失败到回退策略的映射，并向调用方报告固定的六阶段进度叙事。
//!
//! 回退策略（按优先级）：
//! 1. 解码失败 → 跳过增强/渲染，原样透传输入字节（仍受体积守卫约束）
//! 2. MP3编码失败 → 用同一渲染缓冲区替换为WAV输出
//! 3. 其他失败 → `Failed`，不产出任何输出
//!
//! 单次运行严格串行，各阶段完全消费上一阶段的输出。每次运行独占
//! 自己的缓冲区，无跨运行共享状态；`run(&mut self)`的独占借用天然
//! 禁止同一编排器上的并发重入。

use crate::audio::{self, EncodedAudio, SampleBuffer};
use crate::core::settings::{EnhancementSettings, OutputFormat};
use crate::core::{enhance, render};
use crate::encode::{LameMp3Encoder, Mp3Backend, wav};
use crate::error::RemasterError;
use crate::pipeline::progress::{ProgressCallback, ProgressEvent, ProgressStage};
use crate::pipeline::size_guard;
use crate::tools::utils;

/// 管线状态
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineState {
    Idle,
    Decoding,
    Enhancing,
    Rendering,
    Encoding,
    SizeChecking,
    Complete,
    Rejected,
    Failed,
}

/// 成功产出的音频结果
///
/// 创建后不再修改，所有权移交调用方。
#[derive(Debug, Clone)]
pub struct ProcessedAudio {
    /// 输出字节
    pub bytes: Vec<u8>,
    /// 声明的MIME类型
    pub mime: String,
    /// 输出体积（字节）
    pub size: u64,
    /// 实际产出的编码格式；解码失败透传时为None（保持原始容器）
    pub format: Option<OutputFormat>,
    /// 建议输出文件名：`remastered_<原始stem>.<扩展名>`
    pub suggested_name: String,
}

/// 管线终态结果
#[derive(Debug)]
pub enum PipelineOutcome {
    /// 成功产出
    Success(ProcessedAudio),
    /// 被拒绝（如输出超限），不产出任何文件
    Rejected { reason: String },
    /// 失败，不产出任何文件
    Failed { error: RemasterError },
}

impl PipelineOutcome {
    /// 是否为成功终态
    pub fn is_success(&self) -> bool {
        matches!(self, PipelineOutcome::Success(_))
    }
}

/// 管线编排器
///
/// 每次调用接受显式的设置快照并返回显式的结果，无进程级单例，
/// 可安全地重复运行或在不同输入上并行创建多个实例。
pub struct PipelineOrchestrator {
    mp3_backend: Box<dyn Mp3Backend>,
    progress_callback: Option<ProgressCallback>,
    state: PipelineState,
}

impl Default for PipelineOrchestrator {
    fn default() -> Self {
        Self::new()
    }
}

impl PipelineOrchestrator {
    /// 创建使用默认LAME后端的编排器
    pub fn new() -> Self {
        Self::with_mp3_backend(Box::new(LameMp3Encoder))
    }

    /// 创建使用自定义MP3后端的编排器（测试注入失败场景用）
    pub fn with_mp3_backend(mp3_backend: Box<dyn Mp3Backend>) -> Self {
        Self {
            mp3_backend,
            progress_callback: None,
            state: PipelineState::Idle,
        }
    }

    /// 设置进度回调
    pub fn set_progress_callback<F>(&mut self, callback: F)
    where
        F: Fn(&ProgressEvent) + Send + 'static,
    {
        self.progress_callback = Some(Box::new(callback));
    }

    /// 当前管线状态
    pub fn state(&self) -> PipelineState {
        self.state
    }

    fn emit(&self, stage: ProgressStage) {
        if let Some(callback) = &self.progress_callback {
            callback(&ProgressEvent::new(stage));
        }
    }

    /// 执行一次完整的管线运行
    ///
    /// 设置在入口处快照一次；运行期间外部修改不影响本次运行。
    pub fn run(
        &mut self,
        input: &EncodedAudio,
        settings: &EnhancementSettings,
    ) -> PipelineOutcome {
        let settings = settings.clone();
        if let Err(error) = settings.validate() {
            self.state = PipelineState::Failed;
            return PipelineOutcome::Failed { error };
        }

        self.state = PipelineState::Decoding;
        self.emit(ProgressStage::Analyzing);

        let buf = match audio::decode(input) {
            Ok(buf) => buf,
            Err(decode_err) => {
                // 回退策略a：解码失败，原样透传（"永不拦住用户"）
                eprintln!(
                    "[WARNING] 解码失败，原样透传输入 / Decode failed, passing input through: {decode_err}"
                );
                // 叙事阶段保持完整顺序，即使增强被跳过
                self.emit(ProgressStage::NoiseReduction);
                self.emit(ProgressStage::ClarityDepth);
                self.emit(ProgressStage::DynamicRange);
                self.emit(ProgressStage::SpatialEnhancement);

                let extension = input.extension();
                let mime = utils::mime_for_extension(extension.as_deref());
                let suggested_name =
                    utils::suggested_output_name(input.file_name.as_deref(), None);
                return self.finish(input.bytes.to_vec(), mime, None, suggested_name);
            }
        };

        self.state = PipelineState::Enhancing;
        self.emit(ProgressStage::NoiseReduction);
        let buf = enhance(buf, &settings);
        self.emit(ProgressStage::ClarityDepth);

        self.state = PipelineState::Rendering;
        self.emit(ProgressStage::DynamicRange);
        let buf = render(buf);

        self.state = PipelineState::Encoding;
        self.emit(ProgressStage::SpatialEnhancement);

        let (bytes, format) = match settings.format {
            OutputFormat::Mp3 => match self.encode_mp3_with_fallback(&buf, settings.bitrate) {
                Ok(result) => result,
                Err(error) => {
                    self.state = PipelineState::Failed;
                    return PipelineOutcome::Failed { error };
                }
            },
            OutputFormat::Wav => match wav::encode(&buf) {
                Ok(bytes) => (bytes, OutputFormat::Wav),
                Err(error) => {
                    self.state = PipelineState::Failed;
                    return PipelineOutcome::Failed { error };
                }
            },
        };
        drop(buf);

        let suggested_name =
            utils::suggested_output_name(input.file_name.as_deref(), Some(format.extension()));
        self.finish(bytes, format.mime().to_string(), Some(format), suggested_name)
    }

    /// MP3编码，失败时执行回退策略b（同一缓冲区替换为WAV）
    fn encode_mp3_with_fallback(
        &self,
        buf: &SampleBuffer,
        bitrate: u32,
    ) -> Result<(Vec<u8>, OutputFormat), RemasterError> {
        match self.mp3_backend.encode(buf, bitrate) {
            Ok(bytes) => Ok((bytes, OutputFormat::Mp3)),
            Err(encode_err) => {
                eprintln!(
                    "[WARNING] MP3编码失败，回退到WAV / MP3 encoding failed, falling back to WAV: {encode_err}"
                );
                let bytes = wav::encode(buf)?;
                Ok((bytes, OutputFormat::Wav))
            }
        }
    }

    /// 终段：体积校验 + 结果组装
    fn finish(
        &mut self,
        bytes: Vec<u8>,
        mime: String,
        format: Option<OutputFormat>,
        suggested_name: String,
    ) -> PipelineOutcome {
        self.state = PipelineState::SizeChecking;
        self.emit(ProgressStage::Finalizing);

        if let Err(error) = size_guard::check(&bytes) {
            // 超限结果整体丢弃，不交给调用方
            self.state = PipelineState::Rejected;
            return PipelineOutcome::Rejected {
                reason: format!("输出文件过大 / output too large: {error}"),
            };
        }

        let size = bytes.len() as u64;
        self.state = PipelineState::Complete;
        PipelineOutcome::Success(ProcessedAudio {
            bytes,
            mime,
            size,
            format,
            suggested_name,
        })
    }
}
