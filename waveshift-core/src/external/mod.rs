//! Interactions with external tools.
//!
//! This module encapsulates everything that touches the transcoding engine:
//! the [`TranscodeEngine`] capability the driver is written against, the
//! production ffmpeg implementation, and the dependency check run once before
//! a session. The trait-based design allows consumers (and tests) to inject
//! their own engine implementation.

use crate::error::{CoreError, CoreResult, command_start_error};

use std::io;
use std::process::{Command, Stdio};

/// Transcoding engine trait and the ffmpeg-backed implementation
pub mod engine;

pub use engine::{FfmpegEngine, TranscodeEngine, TranscodeRequest};

/// Checks if a required external command is available and executable.
///
/// Runs the command with `-version` and discards its output; only the fact
/// that it could be started matters.
pub fn check_dependency(cmd_name: &str) -> CoreResult<()> {
    let result = Command::new(cmd_name)
        .arg("-version")
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status();

    match result {
        Ok(_) => {
            log::debug!("Found dependency: {cmd_name}");
            Ok(())
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            log::warn!("Dependency '{cmd_name}' not found.");
            Err(CoreError::DependencyNotFound(cmd_name.to_string()))
        }
        Err(e) => {
            log::error!("Failed to start dependency check command '{cmd_name}': {e}");
            Err(command_start_error(cmd_name, e))
        }
    }
}
