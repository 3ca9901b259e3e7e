//! Utility functions for formatting and file name handling.
//!
//! This module provides general-purpose utility functions used throughout the
//! waveshift-core library: duration and byte formatting, extension inference,
//! and output name derivation.

use crate::config::{OutputFormat, SUPPORTED_EXTENSIONS};

use std::path::Path;
use std::time::Duration;

/// Checks if the given path is an audio file the converter can process.
/// Recognition is by extension only (case-insensitive).
#[must_use]
pub fn is_supported_audio_file(path: &Path) -> bool {
    path.is_file()
        && path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext_str| {
                SUPPORTED_EXTENSIONS
                    .iter()
                    .any(|supported| supported.eq_ignore_ascii_case(ext_str))
            })
            .unwrap_or(false)
}

/// Returns the lowercased extension of a file name, if it has one.
#[must_use]
pub fn infer_extension(filename: &str) -> Option<String> {
    Path::new(filename)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase)
}

/// Derives the output file name for a source file: the stem of the source
/// name with the target format's extension.
#[must_use]
pub fn derive_output_name(filename: &str, format: OutputFormat) -> String {
    match Path::new(filename).file_stem().and_then(|stem| stem.to_str()) {
        Some(stem) => format!("{stem}.{}", format.extension()),
        None => format!("{filename}.{}", format.extension()),
    }
}

/// Formats a duration as HH:MM:SS.
#[must_use]
pub fn format_duration(duration: Duration) -> String {
    let total_seconds = duration.as_secs();
    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let secs = total_seconds % 60;
    format!("{hours:02}:{minutes:02}:{secs:02}")
}

/// Formats bytes with appropriate binary units (B, KiB, MiB, GiB).
#[must_use]
pub fn format_bytes(bytes: u64) -> String {
    const KIB: f64 = 1024.0;
    const MIB: f64 = KIB * 1024.0;
    const GIB: f64 = MIB * 1024.0;

    let bytes_f64 = bytes as f64;
    if bytes_f64 >= GIB {
        format!("{:.2} GiB", bytes_f64 / GIB)
    } else if bytes_f64 >= MIB {
        format!("{:.2} MiB", bytes_f64 / MIB)
    } else if bytes_f64 >= KIB {
        format!("{:.2} KiB", bytes_f64 / KIB)
    } else {
        format!("{bytes} B")
    }
}

/// Formats the signed percentage size change from input to output
/// (e.g. "-12%", "+8%"). Returns "n/a" when the input size is zero.
#[must_use]
pub fn format_size_change(input_size: u64, output_size: u64) -> String {
    if input_size == 0 {
        return "n/a".to_string();
    }
    let delta = (output_size as i128 - input_size as i128) * 100 / input_size as i128;
    if delta > 0 {
        format!("+{delta}%")
    } else {
        format!("{delta}%")
    }
}

/// Safely extracts the file name from a path with consistent error handling.
pub fn get_filename_safe(path: &Path) -> crate::CoreResult<String> {
    Ok(path
        .file_name()
        .ok_or_else(|| {
            crate::CoreError::PathError(format!("Failed to get filename for {}", path.display()))
        })?
        .to_string_lossy()
        .to_string())
}
