//! 音频输入层
//!
//! 负责编码字节到规范化样本缓冲区的转换。

pub mod buffer;
pub mod decoder;

pub use buffer::SampleBuffer;
pub use decoder::{EncodedAudio, decode};
