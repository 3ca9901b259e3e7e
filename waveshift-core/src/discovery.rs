//! File discovery module for finding audio files to convert.
//!
//! Searches the top level of a directory for files whose extension is one of
//! the supported source formats (case-insensitive). Subdirectories are not
//! searched. Results are sorted by name so the queue order is deterministic.

use crate::config::SUPPORTED_EXTENSIONS;
use crate::error::{CoreError, CoreResult};

use std::path::{Path, PathBuf};

/// Finds audio files eligible for conversion in the specified directory.
///
/// # Returns
///
/// * `Ok(Vec<PathBuf>)` - Paths of the discovered audio files, sorted by name
/// * `Err(CoreError::NoFilesFound)` - If no supported audio files are found
pub fn find_processable_files(input_dir: &Path) -> CoreResult<Vec<PathBuf>> {
    let read_dir = std::fs::read_dir(input_dir)?;
    let mut files: Vec<PathBuf> = read_dir
        .filter_map(|entry| {
            let entry = entry.ok()?;
            let path = entry.path();

            if !path.is_file() {
                return None;
            }

            path.extension()
                .and_then(|ext| ext.to_str())
                .filter(|ext_str| {
                    SUPPORTED_EXTENSIONS
                        .iter()
                        .any(|supported| supported.eq_ignore_ascii_case(ext_str))
                })
                .map(|_| path.clone())
        })
        .collect();

    if files.is_empty() {
        Err(CoreError::NoFilesFound)
    } else {
        files.sort();
        Ok(files)
    }
}
