//! 常量和默认配置集中管理
//!
//! 将所有重要常量集中定义，避免"默认值漂移"和重复定义

/// 输出限制
pub mod limits {
    /// 输出文件体积上限（字节）
    ///
    /// 超过该上限的编码结果会被整体拒绝，不产出任何文件
    pub const MAX_OUTPUT_SIZE: u64 = 15 * 1024 * 1024;
}

/// 增强系数
///
/// 这些系数来自原型实现的示意性取值，没有心理声学依据；
/// 按约定保留为具名常量，不做"校准"
pub mod enhancement {
    /// 噪声门限：绝对值低于该阈值的样本视为噪声底
    pub const NOISE_FLOOR_THRESHOLD: f32 = 0.01;

    /// 噪声衰减系数
    pub const NOISE_ATTENUATION: f32 = 0.5;

    /// 清晰度增益系数
    pub const CLARITY_GAIN: f32 = 1.1;
}

/// 编码参数
pub mod encoding {
    /// MP3编码帧大小（每声道样本数）
    ///
    /// MPEG Layer III固定为1152，编码器按该粒度逐帧压缩
    pub const MP3_FRAME_SAMPLES: usize = 1152;

    /// 支持的MP3码率（kbps）
    pub const SUPPORTED_BITRATES: &[u32] = &[128, 320];

    /// WAV输出位深度
    pub const WAV_BITS_PER_SAMPLE: u16 = 16;

    /// 编码阶段最多取用的声道数（多余声道按约定忽略）
    pub const MAX_ENCODED_CHANNELS: usize = 2;
}

/// 输入格式约定
pub mod formats {
    /// 接受的输入文件扩展名
    pub const ACCEPTED_EXTENSIONS: &[&str] = &["mp3", "mp4", "wav", "flac", "aac", "m4a"];
}
