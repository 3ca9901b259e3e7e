//! Configuration types for waveshift-core.
//!
//! A conversion run is configured by an output container format, an audio
//! bitrate, and the directories outputs and logs are written to. Both the
//! format and bitrate sets are fixed; anything outside them is rejected at
//! parse time rather than handed to the engine.

use crate::error::CoreError;

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// Output container formats the converter can produce.
///
/// The same set doubles as the list of recognized source extensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Mp3,
    Wav,
    Ogg,
    Aac,
    M4a,
    Flac,
    Aiff,
}

impl OutputFormat {
    /// Every selectable output format, in display order.
    pub const ALL: [OutputFormat; 7] = [
        OutputFormat::Mp3,
        OutputFormat::Wav,
        OutputFormat::Ogg,
        OutputFormat::Aac,
        OutputFormat::M4a,
        OutputFormat::Flac,
        OutputFormat::Aiff,
    ];

    /// The file extension used for output files of this format.
    #[must_use]
    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Mp3 => "mp3",
            OutputFormat::Wav => "wav",
            OutputFormat::Ogg => "ogg",
            OutputFormat::Aac => "aac",
            OutputFormat::M4a => "m4a",
            OutputFormat::Flac => "flac",
            OutputFormat::Aiff => "aiff",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl FromStr for OutputFormat {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        OutputFormat::ALL
            .iter()
            .find(|format| format.extension().eq_ignore_ascii_case(s))
            .copied()
            .ok_or_else(|| CoreError::UnsupportedFormat(s.to_string()))
    }
}

/// Audio bitrates selectable for the output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bitrate {
    Kbps128,
    Kbps192,
    Kbps256,
    Kbps320,
}

impl Bitrate {
    /// Every selectable bitrate, in display order.
    pub const ALL: [Bitrate; 4] = [
        Bitrate::Kbps128,
        Bitrate::Kbps192,
        Bitrate::Kbps256,
        Bitrate::Kbps320,
    ];

    /// The value passed to the engine's `-b:a` argument.
    #[must_use]
    pub fn as_arg(self) -> &'static str {
        match self {
            Bitrate::Kbps128 => "128k",
            Bitrate::Kbps192 => "192k",
            Bitrate::Kbps256 => "256k",
            Bitrate::Kbps320 => "320k",
        }
    }
}

impl fmt::Display for Bitrate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_arg())
    }
}

impl FromStr for Bitrate {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim_end_matches(['k', 'K']);
        Bitrate::ALL
            .iter()
            .find(|bitrate| bitrate.as_arg().trim_end_matches('k') == normalized)
            .copied()
            .ok_or_else(|| CoreError::UnsupportedBitrate(s.to_string()))
    }
}

/// Default output format when the user does not pick one.
pub const DEFAULT_OUTPUT_FORMAT: OutputFormat = OutputFormat::Mp3;

/// Default bitrate when the user does not pick one.
pub const DEFAULT_BITRATE: Bitrate = Bitrate::Kbps128;

/// Source extensions eligible for conversion (case-insensitive).
pub const SUPPORTED_EXTENSIONS: [&str; 7] = ["mp3", "wav", "ogg", "aac", "m4a", "flac", "aiff"];

/// Main configuration structure for the waveshift-core library.
///
/// Created by the consumer of the library (e.g. waveshift-cli) and passed to
/// [`crate::processing::convert_queue`] to control conversion behavior.
#[derive(Debug, Clone)]
pub struct CoreConfig {
    /// Directory where converted output files will be saved
    pub output_dir: PathBuf,

    /// Directory for run log files
    pub log_dir: PathBuf,

    /// Output container format for every file in the run
    pub output_format: OutputFormat,

    /// Audio bitrate for every file in the run
    pub bitrate: Bitrate,
}

impl CoreConfig {
    /// Creates a configuration with default format and bitrate. Logs default
    /// to a `logs` subdirectory of the output directory.
    #[must_use]
    pub fn new(output_dir: PathBuf) -> Self {
        let log_dir = output_dir.join("logs");
        Self {
            output_dir,
            log_dir,
            output_format: DEFAULT_OUTPUT_FORMAT,
            bitrate: DEFAULT_BITRATE,
        }
    }
}
