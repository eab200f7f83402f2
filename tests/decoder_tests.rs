//! 解码器测试
//!
//! 用独立生成的WAV固件验证解码元数据与样本精度，
//! 并确认无法识别的输入以解码错误收场。


use audio_remaster_tool::audio::decode;
use audio_remaster_tool::{DecodeError, EncodedAudio};
use audio_test_fixtures::{encoded, garbage_bytes, wav_fixture_bytes};

#[test]
fn wav_fixture_decodes_with_correct_metadata() {
    let bytes = wav_fixture_bytes(44100, 2, 4410, 0.5);
    let buf = decode(&encoded(bytes, "fixture.wav")).unwrap();

    assert_eq!(buf.sample_rate(), 44100);
    assert_eq!(buf.channel_count(), 2);
    assert_eq!(buf.frame_count(), 4410);
}

#[test]
fn decoded_samples_match_fixture_within_quantization() {
    let bytes = wav_fixture_bytes(44100, 1, 1000, 0.5);
    let buf = decode(&encoded(bytes, "sine.wav")).unwrap();

    let channel = &buf.channels()[0];
    for (i, &sample) in channel.iter().enumerate() {
        let t = i as f32 / 44100.0;
        let expected = 0.5 * (2.0 * std::f32::consts::PI * 440.0 * t).sin();
        // 16位量化误差上限
        assert!(
            (sample - expected).abs() < 2.0 / 32768.0,
            "帧{i}: 解码值{sample}与期望{expected}偏差过大"
        );
    }
}

#[test]
fn garbage_bytes_fail_to_decode() {
    let result = decode(&encoded(garbage_bytes(4096), "noise.mp3"));
    assert!(result.is_err());
}

#[test]
fn empty_input_is_corrupt() {
    let result = decode(&EncodedAudio::new(Vec::new(), None));
    assert!(matches!(result, Err(DecodeError::Corrupt(_))));
}

#[test]
fn truncated_wav_header_fails() {
    let mut bytes = wav_fixture_bytes(44100, 1, 100, 0.5);
    bytes.truncate(20);
    let result = decode(&encoded(bytes, "truncated.wav"));
    assert!(result.is_err());
}

#[test]
fn encoded_audio_clone_shares_byte_storage() {
    // 克隆与喂给解码源都只增加引用计数，不复制字节本体
    let input = encoded(wav_fixture_bytes(44100, 1, 1000, 0.5), "shared.wav");
    let clone = input.clone();
    assert!(std::sync::Arc::ptr_eq(&input.bytes, &clone.bytes));

    // 共享存储不影响解码
    assert!(decode(&clone).is_ok());
}

#[test]
fn extension_hint_is_lowercased() {
    let input = encoded(Vec::new(), "SONG.FLAC");
    assert_eq!(input.extension().as_deref(), Some("flac"));
}
