//! 增强引擎测试
//!
//! 校验逐样本变换的确定性、钳制不变量和各开关组合的数值语义。


use audio_remaster_tool::core::enhance;
use audio_remaster_tool::{EnhancementSettings, OutputFormat, SampleBuffer};
use audio_test_fixtures::sine_buffer;

/// 枚举四个布尔开关的全部16种组合
fn all_flag_combinations() -> Vec<EnhancementSettings> {
    let mut combos = Vec::new();
    for mask in 0u8..16 {
        combos.push(EnhancementSettings {
            bitrate: 320,
            format: OutputFormat::Mp3,
            noise_reduction: mask & 1 != 0,
            bass_enhancement: mask & 2 != 0,
            clarity_boost: mask & 4 != 0,
            spatial_audio: mask & 8 != 0,
        });
    }
    combos
}

/// 构造包含噪声底、常规幅度和越界样本的测试缓冲区
fn mixed_buffer() -> SampleBuffer {
    let samples = vec![
        0.0, 0.005, -0.005, 0.009, -0.009, 0.01, -0.01, 0.5, -0.5, 0.95, -0.95, 1.0, -1.0, 1.5,
        -1.5,
    ];
    SampleBuffer::new(44100, vec![samples.clone(), samples]).unwrap()
}

#[test]
fn enhancement_is_deterministic() {
    for settings in all_flag_combinations() {
        let first = enhance(mixed_buffer(), &settings);
        let second = enhance(mixed_buffer(), &settings);
        assert_eq!(
            first.channels(),
            second.channels(),
            "相同输入与设置必须产出逐字节一致的结果: {settings:?}"
        );
    }
}

#[test]
fn all_outputs_stay_within_unit_range() {
    for settings in all_flag_combinations() {
        let out = enhance(mixed_buffer(), &settings);
        for channel in out.channels() {
            for &sample in channel {
                assert!(
                    (-1.0..=1.0).contains(&sample),
                    "样本{sample}越界: {settings:?}"
                );
            }
        }
    }
}

#[test]
fn noise_gate_attenuates_quiet_samples() {
    let settings = EnhancementSettings {
        noise_reduction: true,
        clarity_boost: false,
        ..Default::default()
    };
    let buf = SampleBuffer::new(44100, vec![vec![0.005, -0.008, 0.5]]).unwrap();
    let out = enhance(buf, &settings);

    let channel = &out.channels()[0];
    assert!((channel[0] - 0.0025).abs() < 1e-7);
    assert!((channel[1] + 0.004).abs() < 1e-7);
    assert!((channel[2] - 0.5).abs() < 1e-7); // 高于噪声底不受影响
}

#[test]
fn gate_and_gain_compose_in_order() {
    let settings = EnhancementSettings {
        noise_reduction: true,
        clarity_boost: true,
        ..Default::default()
    };
    let buf = SampleBuffer::new(44100, vec![vec![0.005]]).unwrap();
    let out = enhance(buf, &settings);

    // 先衰减（×0.5）再增益（×1.1）
    assert!((out.channels()[0][0] - 0.00275).abs() < 1e-7);
}

#[test]
fn reserved_flags_have_no_numeric_effect() {
    let base = EnhancementSettings {
        noise_reduction: false,
        bass_enhancement: false,
        clarity_boost: false,
        spatial_audio: false,
        ..Default::default()
    };
    let reserved_on = EnhancementSettings {
        bass_enhancement: true,
        spatial_audio: true,
        ..base.clone()
    };

    let plain = enhance(sine_buffer(44100, 2, 2048, 0.7), &base);
    let with_reserved = enhance(sine_buffer(44100, 2, 2048, 0.7), &reserved_on);
    assert_eq!(plain.channels(), with_reserved.channels());
}

#[test]
fn enhancement_preserves_buffer_shape() {
    let settings = EnhancementSettings::default();
    let out = enhance(sine_buffer(48000, 2, 1024, 0.5), &settings);

    assert_eq!(out.sample_rate(), 48000);
    assert_eq!(out.channel_count(), 2);
    assert_eq!(out.frame_count(), 1024);
}
