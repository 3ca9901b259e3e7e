// waveshift-core/tests/convert_success_tests.rs

mod common;

use common::MockEngine;
use std::path::PathBuf;
use waveshift_core::{
    Bitrate, ConversionQueue, ConversionStatus, CoreConfig, CoreError, FileEntry, OutputFormat,
    convert_queue,
};

fn test_config() -> CoreConfig {
    let mut config = CoreConfig::new(PathBuf::from("/tmp/waveshift-test-out"));
    config.output_format = OutputFormat::Mp3;
    config.bitrate = Bitrate::Kbps128;
    config
}

#[test]
fn test_two_wav_files_to_mp3() {
    let engine = MockEngine::new();
    let config = test_config();

    let mut queue = ConversionQueue::new();
    queue.push(FileEntry::new("a.wav", b"first".to_vec()));
    queue.push(FileEntry::new("b.wav", b"second".to_vec()));

    let report = convert_queue(&engine, &config, &mut queue).unwrap();

    // Both files end completed, two handles in file order, named a.mp3/b.mp3.
    assert_eq!(queue.status("a.wav"), ConversionStatus::Completed);
    assert_eq!(queue.status("b.wav"), ConversionStatus::Completed);
    assert_eq!(queue.outputs().len(), 2);
    assert_eq!(queue.outputs()[0].output_name, "a.mp3");
    assert_eq!(queue.outputs()[1].output_name, "b.mp3");
    assert_eq!(queue.outputs()[0].source_name, "a.wav");
    assert_eq!(queue.outputs()[0].bytes, b"converted:first");

    assert!(report.all_finished);
    assert!(queue.all_finished());
    assert!(report.failures.is_empty());
    assert_eq!(report.converted.len(), 2);
    assert_eq!(report.converted[0].filename, "a.wav");
    assert_eq!(report.converted[0].output_name, "a.mp3");
    assert_eq!(report.converted[0].input_size, 5);
    assert_eq!(
        report.converted[0].output_size,
        b"converted:first".len() as u64
    );
}

#[test]
fn test_engine_receives_bitrate_and_staged_names() {
    let engine = MockEngine::new();
    let config = test_config();

    let mut queue = ConversionQueue::new();
    queue.push(FileEntry::new("take.flac", b"pcm".to_vec()));

    convert_queue(&engine, &config, &mut queue).unwrap();

    let writes = engine.write_calls();
    assert_eq!(writes.len(), 1);
    // Staged under a generated name carrying the source extension.
    assert!(writes[0].starts_with("input_"));
    assert!(writes[0].ends_with(".flac"));

    let calls = engine.transcode_calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].bitrate, Bitrate::Kbps128);
    assert_eq!(calls[0].input_name, writes[0]);
    assert!(calls[0].output_name.starts_with("output_"));
    assert!(calls[0].output_name.ends_with(".mp3"));
}

#[test]
fn test_handle_count_matches_completed_count() {
    let engine = MockEngine::new();
    let config = test_config();

    let mut queue = ConversionQueue::new();
    for name in ["a.wav", "b.ogg", "c.flac"] {
        queue.push(FileEntry::new(name, b"data".to_vec()));
    }

    convert_queue(&engine, &config, &mut queue).unwrap();
    assert_eq!(queue.outputs().len(), queue.completed_count());
    assert_eq!(queue.completed_count(), 3);
}

#[test]
fn test_empty_queue_rejected() {
    let engine = MockEngine::new();
    let config = test_config();
    let mut queue = ConversionQueue::new();

    let result = convert_queue(&engine, &config, &mut queue);
    assert!(matches!(result, Err(CoreError::NoFilesFound)));
    assert!(engine.transcode_calls().is_empty());
}
