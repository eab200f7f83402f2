//! 离线渲染（物化）阶段
//!
//! 增强信号与编码器之间的同步边界：编码器需要一个完整、不再变化的
//! 缓冲区，而非活动信号图。来源环境用离线渲染原语把处理图压平成
//! 最终缓冲区；在本实现中信号已经是完整缓冲区，渲染退化为一次
//! 显式的所有权移交，但作为阶段保留，保证编码器的输入契约。

use crate::audio::SampleBuffer;

/// 物化最终PCM缓冲区
///
/// 精确保持采样率、声道数与帧数。
pub fn render(buf: SampleBuffer) -> SampleBuffer {
    debug_assert!(buf.validate().is_ok());
    buf
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_preserves_buffer_exactly() {
        let buf = SampleBuffer::new(48000, vec![vec![0.1, -0.2, 0.3], vec![0.0, 0.5, -0.5]])
            .unwrap();
        let before = buf.clone();
        let rendered = render(buf);
        assert_eq!(rendered, before);
    }
}
