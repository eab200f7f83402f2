//! 管线编排器测试
//!
//! 覆盖端到端成功路径、两级回退策略、体积拒绝和进度叙事的顺序保证。


use audio_remaster_tool::encode::Mp3Backend;
use audio_remaster_tool::error::EncodeError;
use audio_remaster_tool::{
    EnhancementSettings, OutputFormat, PipelineOrchestrator, PipelineOutcome, PipelineState,
    ProgressStage, SampleBuffer,
};
use audio_test_fixtures::{encoded, garbage_bytes, wav_fixture_bytes};
use std::sync::{Arc, Mutex};

/// 始终失败的MP3后端（注入回退场景）
struct FailingMp3Backend;

impl Mp3Backend for FailingMp3Backend {
    fn encode(&self, _buf: &SampleBuffer, _bitrate: u32) -> Result<Vec<u8>, EncodeError> {
        Err(EncodeError::EncoderUnavailable("注入的测试失败".to_string()))
    }
}

fn wav_settings() -> EnhancementSettings {
    EnhancementSettings {
        format: OutputFormat::Wav,
        ..Default::default()
    }
}

fn mp3_settings() -> EnhancementSettings {
    EnhancementSettings {
        format: OutputFormat::Mp3,
        ..Default::default()
    }
}

#[test]
fn wav_path_succeeds_end_to_end() {
    let input = encoded(wav_fixture_bytes(44100, 2, 4410, 0.5), "track.wav");
    let mut orchestrator = PipelineOrchestrator::new();

    match orchestrator.run(&input, &wav_settings()) {
        PipelineOutcome::Success(processed) => {
            assert_eq!(processed.format, Some(OutputFormat::Wav));
            assert_eq!(processed.mime, "audio/wav");
            assert_eq!(processed.suggested_name, "remastered_track.wav");
            assert_eq!(processed.size, processed.bytes.len() as u64);
            assert_eq!(&processed.bytes[0..4], b"RIFF");
        }
        other => panic!("期望Success，实际: {other:?}"),
    }
    assert_eq!(orchestrator.state(), PipelineState::Complete);
}

#[test]
fn mp3_path_succeeds_end_to_end() {
    let input = encoded(wav_fixture_bytes(44100, 2, 8192, 0.5), "track.wav");
    let mut orchestrator = PipelineOrchestrator::new();

    match orchestrator.run(&input, &mp3_settings()) {
        PipelineOutcome::Success(processed) => {
            assert_eq!(processed.format, Some(OutputFormat::Mp3));
            assert_eq!(processed.mime, "audio/mp3");
            assert_eq!(processed.suggested_name, "remastered_track.mp3");
            assert!(!processed.bytes.is_empty());
        }
        other => panic!("期望Success，实际: {other:?}"),
    }
}

#[test]
fn mp3_failure_falls_back_to_wav() {
    let input = encoded(wav_fixture_bytes(44100, 2, 4410, 0.5), "track.wav");
    let mut orchestrator =
        PipelineOrchestrator::with_mp3_backend(Box::new(FailingMp3Backend));

    match orchestrator.run(&input, &mp3_settings()) {
        PipelineOutcome::Success(processed) => {
            // 回退策略b：声明格式随之变为WAV
            assert_eq!(processed.format, Some(OutputFormat::Wav));
            assert_eq!(processed.mime, "audio/wav");
            assert_eq!(processed.suggested_name, "remastered_track.wav");
            assert!(!processed.bytes.is_empty());
        }
        other => panic!("MP3失败必须回退WAV而非失败，实际: {other:?}"),
    }
}

#[test]
fn decode_failure_passes_input_through_unchanged() {
    let original = garbage_bytes(4096);
    let input = encoded(original.clone(), "broken.mp3");
    let mut orchestrator = PipelineOrchestrator::new();

    match orchestrator.run(&input, &mp3_settings()) {
        PipelineOutcome::Success(processed) => {
            // 回退策略a：逐字节等于原始输入
            assert_eq!(processed.bytes, original);
            assert_eq!(processed.format, None);
            assert_eq!(processed.mime, "audio/mp3");
            assert_eq!(processed.suggested_name, "remastered_broken.mp3");
        }
        other => panic!("解码失败必须透传而非失败，实际: {other:?}"),
    }
}

#[test]
fn oversized_pass_through_is_rejected() {
    // 透传路径同样受体积守卫约束
    let input = encoded(garbage_bytes(16 * 1024 * 1024), "huge.mp3");
    let mut orchestrator = PipelineOrchestrator::new();

    match orchestrator.run(&input, &mp3_settings()) {
        PipelineOutcome::Rejected { reason } => {
            assert!(reason.contains("too large") || reason.contains("过大"));
        }
        other => panic!("期望Rejected，实际: {other:?}"),
    }
    assert_eq!(orchestrator.state(), PipelineState::Rejected);
}

#[test]
fn oversized_wav_encode_is_rejected_without_output() {
    // 8M帧单声道 → 44 + 8M*2字节 ≈ 16MiB，WAV编码超限
    let input = encoded(wav_fixture_bytes(44100, 1, 8_000_000, 0.1), "long.wav");
    let mut orchestrator = PipelineOrchestrator::new();

    let outcome = orchestrator.run(&input, &wav_settings());
    match outcome {
        PipelineOutcome::Rejected { .. } => {}
        other => panic!("期望Rejected，实际: {other:?}"),
    }
}

#[test]
fn progress_narrative_is_complete_and_ordered() {
    let events = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&events);

    let input = encoded(wav_fixture_bytes(44100, 1, 4410, 0.5), "track.wav");
    let mut orchestrator = PipelineOrchestrator::new();
    orchestrator.set_progress_callback(move |event| {
        sink.lock().unwrap().push(*event);
    });

    let outcome = orchestrator.run(&input, &wav_settings());
    assert!(outcome.is_success());

    let events = events.lock().unwrap();
    let stages: Vec<ProgressStage> = events.iter().map(|e| e.stage).collect();
    assert_eq!(stages, ProgressStage::ALL.to_vec());

    let percents: Vec<f32> = events.iter().map(|e| e.percent).collect();
    assert!(percents.windows(2).all(|w| w[0] < w[1]));
    assert!((percents.last().unwrap() - 100.0).abs() < f32::EPSILON);
}

#[test]
fn pass_through_still_reports_all_six_stages() {
    let events = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&events);

    let input = encoded(garbage_bytes(1024), "broken.aac");
    let mut orchestrator = PipelineOrchestrator::new();
    orchestrator.set_progress_callback(move |event| {
        sink.lock().unwrap().push(*event);
    });

    let outcome = orchestrator.run(&input, &mp3_settings());
    assert!(outcome.is_success());

    let stages: Vec<ProgressStage> = events.lock().unwrap().iter().map(|e| e.stage).collect();
    assert_eq!(stages, ProgressStage::ALL.to_vec());
}

#[test]
fn invalid_bitrate_fails_before_decoding() {
    let input = encoded(wav_fixture_bytes(44100, 1, 100, 0.5), "track.wav");
    let settings = EnhancementSettings {
        bitrate: 192,
        ..Default::default()
    };

    let mut orchestrator = PipelineOrchestrator::new();
    match orchestrator.run(&input, &settings) {
        PipelineOutcome::Failed { .. } => {}
        other => panic!("期望Failed，实际: {other:?}"),
    }
    assert_eq!(orchestrator.state(), PipelineState::Failed);
}

#[test]
fn repeated_runs_on_same_orchestrator_are_independent() {
    let input = encoded(wav_fixture_bytes(44100, 1, 4410, 0.5), "track.wav");
    let mut orchestrator = PipelineOrchestrator::new();

    let first = orchestrator.run(&input, &wav_settings());
    let second = orchestrator.run(&input, &wav_settings());

    match (first, second) {
        (PipelineOutcome::Success(a), PipelineOutcome::Success(b)) => {
            assert_eq!(a.bytes, b.bytes);
        }
        other => panic!("两次运行都应成功: {other:?}"),
    }
}
