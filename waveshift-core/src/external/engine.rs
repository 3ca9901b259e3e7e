//! Transcoding engine abstraction and the ffmpeg-backed implementation.
//!
//! The engine exposes a sandboxed, file-system-like surface: write input
//! bytes under a name, run a conversion, read output bytes back by name.
//! The driver never touches the sandbox directly, so tests can substitute an
//! in-memory fake.

use crate::config::Bitrate;
use crate::error::{
    CoreError, CoreResult, command_failed_error, command_start_error, command_wait_error,
};
use crate::external::check_dependency;
use crate::temp_files;

use ffmpeg_sidecar::command::FfmpegCommand;
use ffmpeg_sidecar::event::{FfmpegEvent, LogLevel};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A single conversion invocation: staged input name, staged output name,
/// and the audio bitrate to encode at. The output container format is
/// carried by the output name's extension.
#[derive(Debug, Clone)]
pub struct TranscodeRequest {
    pub input_name: String,
    pub output_name: String,
    pub bitrate: Bitrate,
}

/// Sandboxed transcoding capability.
///
/// Implementations own a private namespace of staged files. `write_input`
/// and `read_output` address that namespace by name; `transcode` runs one
/// blocking conversion between two staged names.
pub trait TranscodeEngine {
    /// Stages raw input bytes under `name` inside the sandbox.
    fn write_input(&self, name: &str, bytes: &[u8]) -> CoreResult<()>;

    /// Runs one conversion. Equivalent to invoking the engine with
    /// "overwrite output, input file, audio bitrate, output file".
    fn transcode(&self, request: &TranscodeRequest) -> CoreResult<()>;

    /// Reads converted bytes back by staged name.
    fn read_output(&self, name: &str) -> CoreResult<Vec<u8>>;
}

/// Production engine: shells out to ffmpeg via ffmpeg-sidecar, staging files
/// in a temporary sandbox directory.
///
/// Created once per session and reused for every file in the run; the
/// sandbox directory is removed when the engine is dropped.
pub struct FfmpegEngine {
    sandbox: TempDir,
}

impl FfmpegEngine {
    /// Creates the engine, verifying that ffmpeg is available first.
    pub fn new() -> CoreResult<Self> {
        check_dependency("ffmpeg")?;
        Ok(Self {
            sandbox: temp_files::create_sandbox_dir()?,
        })
    }

    fn sandbox_path(&self, name: &str) -> PathBuf {
        self.sandbox.path().join(name)
    }
}

impl TranscodeEngine for FfmpegEngine {
    fn write_input(&self, name: &str, bytes: &[u8]) -> CoreResult<()> {
        fs::write(self.sandbox_path(name), bytes)?;
        Ok(())
    }

    fn transcode(&self, request: &TranscodeRequest) -> CoreResult<()> {
        let input_path = self.sandbox_path(&request.input_name);
        let output_path = self.sandbox_path(&request.output_name);

        let mut cmd = FfmpegCommand::new();
        cmd.args(transcode_args(&input_path, &output_path, request.bitrate));

        log::debug!("Running conversion command: {cmd:?}");

        let mut child = cmd
            .spawn()
            .map_err(|e| command_start_error("ffmpeg", e))?;

        // Collect error output for reporting; everything else is noise here.
        let mut stderr_buffer = String::new();
        let events = child
            .iter()
            .map_err(|e| command_start_error("ffmpeg (event iterator)", e))?;
        for event in events {
            match event {
                FfmpegEvent::Log(LogLevel::Error | LogLevel::Fatal, message) => {
                    stderr_buffer.push_str(&message);
                    stderr_buffer.push('\n');
                }
                FfmpegEvent::Error(error) => {
                    stderr_buffer.push_str(&error);
                    stderr_buffer.push('\n');
                }
                _ => {}
            }
        }

        let status = child.wait().map_err(|e| command_wait_error("ffmpeg", e))?;
        if !status.success() {
            let message = if stderr_buffer.is_empty() {
                "conversion process failed".to_string()
            } else {
                stderr_buffer.trim().to_string()
            };
            log::error!("ffmpeg conversion failed: {message}");
            return Err(command_failed_error("ffmpeg", status, message));
        }

        log::debug!("Conversion finished: {}", output_path.display());
        Ok(())
    }

    fn read_output(&self, name: &str) -> CoreResult<Vec<u8>> {
        let path = self.sandbox_path(name);
        fs::read(&path).map_err(|e| {
            CoreError::PathError(format!(
                "Failed to read converted output {}: {e}",
                path.display()
            ))
        })
    }
}

/// Arguments for one conversion, in invocation order: overwrite the output
/// if it exists, input file, audio bitrate, output file.
fn transcode_args(input: &Path, output: &Path, bitrate: Bitrate) -> Vec<String> {
    vec![
        "-y".to_string(),
        "-i".to_string(),
        input.to_string_lossy().into_owned(),
        "-b:a".to_string(),
        bitrate.as_arg().to_string(),
        output.to_string_lossy().into_owned(),
    ]
}
