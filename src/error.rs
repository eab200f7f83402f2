//! 统一错误处理框架
//!
//! 定义重制管线的错误分类体系：解码错误与编码错误作为独立类型出现在
//! 各自阶段的契约中，顶层的[`RemasterError`]负责汇总并驱动回退策略。

use std::fmt;
use std::io;

/// 解码阶段错误
#[derive(Debug)]
pub enum DecodeError {
    /// 容器或编码格式不受支持
    Unsupported(String),

    /// 文件数据损坏，无法产出有效PCM
    Corrupt(String),
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecodeError::Unsupported(msg) => write!(f, "不支持的音频格式: {msg}"),
            DecodeError::Corrupt(msg) => write!(f, "音频数据损坏: {msg}"),
        }
    }
}

impl std::error::Error for DecodeError {}

/// 编码阶段错误
#[derive(Debug)]
pub enum EncodeError {
    /// 编码原语无法构造或中途失败
    EncoderUnavailable(String),
}

impl fmt::Display for EncodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EncodeError::EncoderUnavailable(msg) => write!(f, "编码器不可用: {msg}"),
        }
    }
}

impl std::error::Error for EncodeError {}

/// 重制管线的统一错误类型
#[derive(Debug)]
pub enum RemasterError {
    /// 输入验证错误
    InvalidInput(String),

    /// 文件I/O错误
    IoError(io::Error),

    /// 解码失败（管线层会先尝试原样透传回退）
    Decode(DecodeError),

    /// 编码失败（MP3路径会先尝试WAV回退）
    Encode(EncodeError),

    /// 输出超过体积上限
    OutputTooLarge { actual: u64, limit: u64 },

    /// 其他未预期的异常
    Unexpected(String),
}

impl fmt::Display for RemasterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RemasterError::InvalidInput(msg) => write!(f, "输入验证失败: {msg}"),
            RemasterError::IoError(err) => write!(f, "文件I/O错误: {err}"),
            RemasterError::Decode(err) => write!(f, "音频解码失败: {err}"),
            RemasterError::Encode(err) => write!(f, "音频编码失败: {err}"),
            RemasterError::OutputTooLarge { actual, limit } => {
                write!(f, "输出文件过大: {actual}字节 (上限{limit}字节)")
            }
            RemasterError::Unexpected(msg) => write!(f, "未预期的错误: {msg}"),
        }
    }
}

impl std::error::Error for RemasterError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RemasterError::IoError(err) => Some(err),
            RemasterError::Decode(err) => Some(err),
            RemasterError::Encode(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for RemasterError {
    fn from(err: io::Error) -> Self {
        RemasterError::IoError(err)
    }
}

impl From<DecodeError> for RemasterError {
    fn from(err: DecodeError) -> Self {
        RemasterError::Decode(err)
    }
}

impl From<EncodeError> for RemasterError {
    fn from(err: EncodeError) -> Self {
        RemasterError::Encode(err)
    }
}

impl From<hound::Error> for RemasterError {
    fn from(err: hound::Error) -> Self {
        RemasterError::Unexpected(format!("WAV写入错误: {err}"))
    }
}

/// 重制管线操作的标准Result类型
pub type RemasterResult<T> = Result<T, RemasterError>;

/// 错误分类（用于退出码映射和用户建议）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// 输入参数/验证错误
    Input,
    /// 文件I/O错误
    Io,
    /// 解码错误
    Decoding,
    /// 编码错误
    Encoding,
    /// 体积超限
    Size,
    /// 其他错误
    Other,
}

impl ErrorCategory {
    /// 从统一错误类型归类
    pub fn from_remaster_error(error: &RemasterError) -> Self {
        match error {
            RemasterError::InvalidInput(_) => ErrorCategory::Input,
            RemasterError::IoError(_) => ErrorCategory::Io,
            RemasterError::Decode(_) => ErrorCategory::Decoding,
            RemasterError::Encode(_) => ErrorCategory::Encoding,
            RemasterError::OutputTooLarge { .. } => ErrorCategory::Size,
            RemasterError::Unexpected(_) => ErrorCategory::Other,
        }
    }

    /// 分类的显示名称
    pub fn display_name(&self) -> &'static str {
        match self {
            ErrorCategory::Input => "输入错误 / Input",
            ErrorCategory::Io => "I/O错误 / IO",
            ErrorCategory::Decoding => "解码错误 / Decoding",
            ErrorCategory::Encoding => "编码错误 / Encoding",
            ErrorCategory::Size => "体积超限 / Size",
            ErrorCategory::Other => "其他错误 / Other",
        }
    }
}
