//! 增强设置
//!
//! 每次管线运行前取一次不可变快照；运行期间外部的设置修改不影响
//! 已提交的运行。字段命名与上游配置面（camelCase JSON）保持兼容。

use crate::error::{RemasterError, RemasterResult};
use crate::tools::constants::encoding::SUPPORTED_BITRATES;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// 输出容器格式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Mp3,
    Wav,
}

impl OutputFormat {
    /// 输出文件扩展名
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Mp3 => "mp3",
            OutputFormat::Wav => "wav",
        }
    }

    /// 声明的MIME类型
    pub fn mime(&self) -> &'static str {
        match self {
            OutputFormat::Mp3 => "audio/mp3",
            OutputFormat::Wav => "audio/wav",
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.extension())
    }
}

/// 增强设置快照
///
/// `bass_enhancement`与`spatial_audio`当前对样本没有数值效果，
/// 仅作为向前兼容的配置位被接受并透传，不报错也不静默丢弃。
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EnhancementSettings {
    /// MP3码率（kbps），合法取值见[`SUPPORTED_BITRATES`]
    pub bitrate: u32,
    /// 输出格式
    pub format: OutputFormat,
    /// 噪声抑制开关
    pub noise_reduction: bool,
    /// 低频增强开关（预留位）
    pub bass_enhancement: bool,
    /// 清晰度提升开关
    pub clarity_boost: bool,
    /// 空间音频开关（预留位）
    pub spatial_audio: bool,
}

impl Default for EnhancementSettings {
    fn default() -> Self {
        Self {
            bitrate: 320,
            format: OutputFormat::Mp3,
            noise_reduction: true,
            bass_enhancement: true,
            clarity_boost: true,
            spatial_audio: true,
        }
    }
}

impl EnhancementSettings {
    /// 校验设置合法性
    pub fn validate(&self) -> RemasterResult<()> {
        if !SUPPORTED_BITRATES.contains(&self.bitrate) {
            return Err(RemasterError::InvalidInput(format!(
                "不支持的码率: {}kbps (支持: {:?})",
                self.bitrate, SUPPORTED_BITRATES
            )));
        }
        Ok(())
    }

    /// 从JSON文件加载设置
    pub fn from_json_file(path: &Path) -> RemasterResult<Self> {
        let content = std::fs::read_to_string(path)?;
        let settings: Self = serde_json::from_str(&content)
            .map_err(|e| RemasterError::InvalidInput(format!("设置文件解析失败: {e}")))?;
        settings.validate()?;
        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_settings_are_valid() {
        let settings = EnhancementSettings::default();
        assert!(settings.validate().is_ok());
        assert_eq!(settings.bitrate, 320);
        assert_eq!(settings.format, OutputFormat::Mp3);
    }

    #[test]
    fn unsupported_bitrate_is_rejected() {
        let settings = EnhancementSettings {
            bitrate: 192,
            ..Default::default()
        };
        assert!(settings.validate().is_err());
    }

    #[test]
    fn camel_case_json_round_trips() {
        let json = r#"{"bitrate":128,"format":"wav","noiseReduction":false,
                       "bassEnhancement":true,"clarityBoost":false,"spatialAudio":true}"#;
        let settings: EnhancementSettings = serde_json::from_str(json).unwrap();
        assert_eq!(settings.bitrate, 128);
        assert_eq!(settings.format, OutputFormat::Wav);
        assert!(!settings.noise_reduction);
        assert!(!settings.clarity_boost);
        assert!(settings.spatial_audio);
    }

    #[test]
    fn partial_json_falls_back_to_defaults() {
        let settings: EnhancementSettings = serde_json::from_str(r#"{"bitrate":128}"#).unwrap();
        assert_eq!(settings.bitrate, 128);
        assert_eq!(settings.format, OutputFormat::Mp3);
        assert!(settings.noise_reduction);
    }
}
