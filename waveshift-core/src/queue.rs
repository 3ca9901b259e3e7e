//! Conversion queue: file entries, per-file status, and output handles.
//!
//! The queue owns everything a conversion run observes and mutates: the
//! ordered file entries, the status associated with each entry by name, and
//! the output handles produced by successful conversions. Statuses are
//! mutated only by the driver; consumers read them to render progress.
//!
//! Invariants upheld here:
//! - the number of status entries never exceeds the number of file entries;
//! - an output handle exists only for entries whose status is `Completed`;
//! - removing an entry removes its status and its output handle consistently
//!   (handles are matched by source name, never by index).

use crate::error::CoreResult;
use crate::utils;

use std::collections::HashMap;
use std::fmt;
use std::path::Path;

/// Progress of a single queued file through the conversion run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConversionStatus {
    /// Queued, not yet picked up by the driver
    Idle,
    /// Raw bytes are being staged into the engine sandbox
    Loading,
    /// The engine invocation is in flight
    Converting,
    /// Output bytes were read back and wrapped into a handle
    Completed,
    /// The engine failed for this file; later files still convert
    Error,
}

impl fmt::Display for ConversionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ConversionStatus::Idle => "waiting",
            ConversionStatus::Loading => "loading",
            ConversionStatus::Converting => "converting",
            ConversionStatus::Completed => "completed",
            ConversionStatus::Error => "error",
        };
        f.write_str(label)
    }
}

/// A user-supplied audio file: its name and raw bytes.
#[derive(Debug, Clone)]
pub struct FileEntry {
    /// File name (no directory component); its extension infers the source format
    pub name: String,
    /// Raw file contents, staged into the engine sandbox by the driver
    pub bytes: Vec<u8>,
}

impl FileEntry {
    /// Creates an entry from a name and raw bytes.
    #[must_use]
    pub fn new(name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            bytes,
        }
    }

    /// Reads an entry from disk.
    pub fn from_path(path: &Path) -> CoreResult<Self> {
        let name = utils::get_filename_safe(path)?;
        let bytes = std::fs::read(path)?;
        Ok(Self { name, bytes })
    }

    /// The lowercased extension of the entry's name, if any.
    #[must_use]
    pub fn source_extension(&self) -> Option<String> {
        utils::infer_extension(&self.name)
    }

    /// Size of the raw bytes.
    #[must_use]
    pub fn size(&self) -> u64 {
        self.bytes.len() as u64
    }
}

/// Converted bytes for one source file, ready to be written out.
#[derive(Debug, Clone)]
pub struct OutputHandle {
    /// Name of the source entry this handle was produced from
    pub source_name: String,
    /// Derived output file name (source stem + target extension)
    pub output_name: String,
    /// Converted bytes read back from the engine sandbox
    pub bytes: Vec<u8>,
}

/// Ordered queue of files for one conversion run.
#[derive(Debug, Default)]
pub struct ConversionQueue {
    entries: Vec<FileEntry>,
    statuses: HashMap<String, ConversionStatus>,
    outputs: Vec<OutputHandle>,
}

impl ConversionQueue {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an entry. Adding files resets any results from a previous run.
    pub fn push(&mut self, entry: FileEntry) {
        self.statuses.clear();
        self.outputs.clear();
        self.entries.push(entry);
    }

    /// Removes the entry at `index` together with its status and output
    /// handle. Returns the removed entry, or `None` if out of range.
    pub fn remove(&mut self, index: usize) -> Option<FileEntry> {
        if index >= self.entries.len() {
            return None;
        }
        let entry = self.entries.remove(index);
        self.statuses.remove(&entry.name);
        self.outputs.retain(|handle| handle.source_name != entry.name);
        Some(entry)
    }

    #[must_use]
    pub fn entries(&self) -> &[FileEntry] {
        &self.entries
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Status of the named entry. Entries the driver has not touched are `Idle`.
    #[must_use]
    pub fn status(&self, name: &str) -> ConversionStatus {
        self.statuses
            .get(name)
            .copied()
            .unwrap_or(ConversionStatus::Idle)
    }

    /// Output handles in completion order (file order, since the driver is
    /// strictly sequential).
    #[must_use]
    pub fn outputs(&self) -> &[OutputHandle] {
        &self.outputs
    }

    /// Number of entries that reached `Completed`.
    #[must_use]
    pub fn completed_count(&self) -> usize {
        self.statuses
            .values()
            .filter(|status| **status == ConversionStatus::Completed)
            .count()
    }

    /// True iff every queued entry reached `Completed` and the queue is
    /// non-empty.
    #[must_use]
    pub fn all_finished(&self) -> bool {
        !self.entries.is_empty() && self.completed_count() == self.entries.len()
    }

    /// Sets the status of a queued entry. Names not present in the queue are
    /// ignored, which keeps the status map from outgrowing the entry list.
    pub(crate) fn set_status(&mut self, name: &str, status: ConversionStatus) {
        if self.entries.iter().any(|entry| entry.name == name) {
            self.statuses.insert(name.to_string(), status);
        }
    }

    pub(crate) fn push_output(&mut self, handle: OutputHandle) {
        self.outputs.push(handle);
    }
}
