// waveshift-cli/tests/cli_integration.rs
//
// End-to-end argument and validation checks for the waveshift binary. These
// tests exercise only the paths that fail before the ffmpeg engine is
// created, so they run on machines without ffmpeg installed.

use assert_cmd::Command;
use predicates::str::contains;
use std::error::Error;
use tempfile::tempdir;

fn waveshift_cmd() -> Command {
    Command::cargo_bin("waveshift").expect("Failed to find waveshift binary")
}

#[test]
fn test_formats_lists_fixed_sets() -> Result<(), Box<dyn Error>> {
    waveshift_cmd()
        .arg("formats")
        .assert()
        .success()
        .stdout(contains("mp3"))
        .stdout(contains("aiff"))
        .stdout(contains("128k"))
        .stdout(contains("320k"));
    Ok(())
}

#[test]
fn test_convert_requires_output_dir() -> Result<(), Box<dyn Error>> {
    waveshift_cmd()
        .arg("convert")
        .arg("a.wav")
        .assert()
        .failure();
    Ok(())
}

#[test]
fn test_convert_non_existent_input() -> Result<(), Box<dyn Error>> {
    let output_dir = tempdir()?;

    waveshift_cmd()
        .arg("convert")
        .arg("surely/this/does/not/exist/input.wav")
        .arg("--output")
        .arg(output_dir.path())
        .assert()
        .failure()
        .stderr(contains("Invalid input path"));
    Ok(())
}

#[test]
fn test_convert_rejects_unsupported_format() -> Result<(), Box<dyn Error>> {
    let input_dir = tempdir()?;
    let output_dir = tempdir()?;
    let input_file = input_dir.path().join("clip.wav");
    std::fs::write(&input_file, b"dummy content")?;

    waveshift_cmd()
        .arg("convert")
        .arg(&input_file)
        .arg("--output")
        .arg(output_dir.path())
        .arg("--format")
        .arg("mp4")
        .assert()
        .failure()
        .stderr(contains("Unsupported output format"));
    Ok(())
}

#[test]
fn test_convert_rejects_unsupported_bitrate() -> Result<(), Box<dyn Error>> {
    let input_dir = tempdir()?;
    let output_dir = tempdir()?;
    let input_file = input_dir.path().join("clip.wav");
    std::fs::write(&input_file, b"dummy content")?;

    waveshift_cmd()
        .arg("convert")
        .arg(&input_file)
        .arg("--output")
        .arg(output_dir.path())
        .arg("--bitrate")
        .arg("96k")
        .assert()
        .failure()
        .stderr(contains("Unsupported bitrate"));
    Ok(())
}

#[test]
fn test_convert_rejects_non_audio_input() -> Result<(), Box<dyn Error>> {
    let input_dir = tempdir()?;
    let output_dir = tempdir()?;
    let input_file = input_dir.path().join("notes.txt");
    std::fs::write(&input_file, b"not audio")?;

    waveshift_cmd()
        .arg("convert")
        .arg(&input_file)
        .arg("--output")
        .arg(output_dir.path())
        .assert()
        .failure()
        .stderr(contains("not a supported audio file"));
    Ok(())
}

#[test]
fn test_convert_rejects_duplicate_file_names() -> Result<(), Box<dyn Error>> {
    let dir_a = tempdir()?;
    let dir_b = tempdir()?;
    let output_dir = tempdir()?;
    let first = dir_a.path().join("clip.wav");
    let second = dir_b.path().join("clip.wav");
    std::fs::write(&first, b"one")?;
    std::fs::write(&second, b"two")?;

    waveshift_cmd()
        .arg("convert")
        .arg(&first)
        .arg(&second)
        .arg("--output")
        .arg(output_dir.path())
        .assert()
        .failure()
        .stderr(contains("Duplicate input file name"));
    Ok(())
}

// The collision check runs before the engine is constructed, so this is
// reported even on machines without ffmpeg.
#[test]
fn test_convert_rejects_matching_source_format() -> Result<(), Box<dyn Error>> {
    let input_dir = tempdir()?;
    let output_dir = tempdir()?;
    let input_file = input_dir.path().join("song.mp3");
    std::fs::write(&input_file, b"dummy content")?;

    waveshift_cmd()
        .arg("convert")
        .arg(&input_file)
        .arg("--output")
        .arg(output_dir.path())
        .arg("--format")
        .arg("mp3")
        .assert()
        .failure()
        .stderr(contains("matches the input format of 'song.mp3'"));
    Ok(())
}

#[test]
fn test_convert_empty_directory_reports_no_files() -> Result<(), Box<dyn Error>> {
    let input_dir = tempdir()?;
    let output_dir = tempdir()?;

    waveshift_cmd()
        .arg("convert")
        .arg(input_dir.path())
        .arg("--output")
        .arg(output_dir.path())
        .assert()
        .failure()
        .stderr(contains("No processable audio files found"));
    Ok(())
}
