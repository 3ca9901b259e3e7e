//! Engine sandbox directory and staged file naming.
//!
//! The transcoding engine works inside a temporary sandbox directory. This
//! module creates that directory (cleaned up on drop via the tempfile crate)
//! and generates unique staged names so queued files can never collide inside
//! the sandbox, even when two sources share a name.

use crate::error::CoreResult;

use tempfile::{Builder as TempFileBuilder, TempDir};

/// Creates the engine sandbox directory. Auto-cleaned when dropped.
pub fn create_sandbox_dir() -> CoreResult<TempDir> {
    Ok(TempFileBuilder::new().prefix("waveshift_").tempdir()?)
}

/// Returns a staged file name with a random suffix (e.g. `input_x7Ka2p.wav`).
/// Does not create the file.
#[must_use]
pub fn unique_staged_name(prefix: &str, extension: &str) -> String {
    use rand::distributions::Alphanumeric;
    use rand::{Rng, thread_rng};

    let random_suffix: String = thread_rng()
        .sample_iter(&Alphanumeric)
        .take(6)
        .map(char::from)
        .collect();

    format!("{prefix}_{random_suffix}.{extension}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unique_staged_name_shape() {
        let name = unique_staged_name("input", "wav");
        assert!(name.starts_with("input_"));
        assert!(name.ends_with(".wav"));
        assert_eq!(name.len(), "input_".len() + 6 + ".wav".len());
    }

    #[test]
    fn test_unique_staged_names_differ() {
        let first = unique_staged_name("input", "wav");
        let second = unique_staged_name("input", "wav");
        assert_ne!(first, second);
    }

    #[test]
    fn test_create_sandbox_dir() {
        let sandbox = create_sandbox_dir().unwrap();
        assert!(sandbox.path().is_dir());
        let path = sandbox.path().to_path_buf();
        drop(sandbox);
        assert!(!path.exists());
    }
}
