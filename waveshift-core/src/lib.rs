//! Core library for batch audio conversion using ffmpeg.
//!
//! This crate provides the conversion queue with per-file status tracking,
//! the sequential conversion driver, and the sandboxed transcoding engine
//! abstraction the driver is written against.
//!
//! ## Usage Example
//!
//! ```rust,no_run
//! use waveshift_core::{Bitrate, ConversionQueue, CoreConfig, FfmpegEngine, FileEntry, OutputFormat};
//! use std::path::{Path, PathBuf};
//!
//! let mut config = CoreConfig::new(PathBuf::from("/path/to/output"));
//! config.output_format = OutputFormat::Mp3;
//! config.bitrate = Bitrate::Kbps192;
//!
//! let mut queue = ConversionQueue::new();
//! queue.push(FileEntry::from_path(Path::new("/path/to/song.wav")).unwrap());
//!
//! let engine = FfmpegEngine::new().unwrap();
//! let report = waveshift_core::convert_queue(&engine, &config, &mut queue).unwrap();
//! println!("Converted {} file(s)", report.converted.len());
//! ```

pub mod config;
pub mod discovery;
pub mod error;
pub mod external;
pub mod processing;
pub mod queue;
pub mod temp_files;
pub mod utils;

// Re-exports for public API
pub use config::{Bitrate, CoreConfig, DEFAULT_BITRATE, DEFAULT_OUTPUT_FORMAT, OutputFormat};
pub use discovery::find_processable_files;
pub use error::{CoreError, CoreResult};
pub use external::{FfmpegEngine, TranscodeEngine, TranscodeRequest};
pub use processing::{
    ConversionFailure, ConversionSummary, RunReport, check_format_collision, convert_queue,
};
pub use queue::{ConversionQueue, ConversionStatus, FileEntry, OutputHandle};
pub use utils::{format_bytes, format_duration, format_size_change};
