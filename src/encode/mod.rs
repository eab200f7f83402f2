//! 格式编码层
//!
//! 把物化PCM缓冲区序列化为输出容器。WAV与MP3共用同一套样本转换规则。

pub mod mp3;
pub mod pcm;
pub mod wav;

pub use mp3::{LameMp3Encoder, Mp3Backend};
