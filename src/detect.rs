//! Filesystem completion detector
//!
//! Classifies the contents of the download directory into completed
//! installers versus in-progress transfers. The browser writes a `.part`
//! style marker while a transfer is running, so a download counts as done
//! only when exactly one new completed file exists and no partial marker
//! remains.

use std::path::Path;

use tracing::warn;

use crate::core::error::{AppfetchError, Result};

/// Extensions of finished download artifacts
pub const COMPLETED_EXTENSIONS: [&str; 3] = ["exe", "msi", "zip"];

/// Extension the browser uses for in-progress transfers
pub const PARTIAL_EXTENSION: &str = "part";

/// Snapshot of the download directory, recomputed on every poll
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileCensus {
    /// Files with a recognized completed extension
    pub completed: usize,
    /// Files with the in-progress marker extension
    pub partial: usize,
}

/// Count completed and partial files directly inside `dir` (non-recursive).
///
/// A missing directory is created and counts as empty (first-run case). Any
/// enumeration error degrades to an empty census: the caller must never see
/// a spurious completion because the directory could not be read.
pub fn census(dir: &Path) -> FileCensus {
    match try_census(dir) {
        Ok(result) => result,
        Err(e) => {
            warn!("census of {:?} degraded to empty: {}", dir, e);
            FileCensus {
                completed: 0,
                partial: 0,
            }
        }
    }
}

fn try_census(dir: &Path) -> Result<FileCensus> {
    let empty = FileCensus {
        completed: 0,
        partial: 0,
    };

    if !dir.exists() {
        std::fs::create_dir_all(dir).map_err(|e| {
            AppfetchError::filesystem(format!("cannot create {:?}: {}", dir, e))
        })?;
        return Ok(empty);
    }

    let entries = std::fs::read_dir(dir)
        .map_err(|e| AppfetchError::filesystem(format!("cannot read {:?}: {}", dir, e)))?;

    let mut result = empty;
    for entry in entries.flatten() {
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let Some(ext) = path.extension().and_then(|e| e.to_str()) else {
            continue;
        };
        if COMPLETED_EXTENSIONS
            .iter()
            .any(|c| ext.eq_ignore_ascii_case(c))
        {
            result.completed += 1;
        } else if ext.eq_ignore_ascii_case(PARTIAL_EXTENSION) {
            result.partial += 1;
        }
    }
    Ok(result)
}

/// The sole completion predicate: exactly one new completed file has arrived
/// and no partial marker is present.
pub fn is_complete(dir: &Path, baseline: usize) -> bool {
    let current = census(dir);
    current.completed == baseline + 1 && current.partial == 0
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use tempfile::tempdir;

    fn touch(dir: &Path, name: &str) {
        File::create(dir.join(name)).unwrap();
    }

    #[test]
    fn test_missing_directory_is_created_and_empty() {
        let root = tempdir().unwrap();
        let dir = root.path().join("applications");
        assert!(!dir.exists());

        let result = census(&dir);
        assert!(dir.exists());
        assert_eq!(
            result,
            FileCensus {
                completed: 0,
                partial: 0
            }
        );
    }

    #[test]
    fn test_census_partitions_by_extension() {
        let dir = tempdir().unwrap();
        touch(dir.path(), "driver.exe");
        touch(dir.path(), "setup.MSI");
        touch(dir.path(), "bundle.zip");
        touch(dir.path(), "transfer.part");
        touch(dir.path(), "notes.txt");
        touch(dir.path(), "noextension");

        let result = census(dir.path());
        assert_eq!(result.completed, 3);
        assert_eq!(result.partial, 1);
    }

    #[test]
    fn test_census_is_not_recursive() {
        let dir = tempdir().unwrap();
        std::fs::create_dir(dir.path().join("nested")).unwrap();
        touch(&dir.path().join("nested"), "inner.exe");
        touch(dir.path(), "outer.exe");

        assert_eq!(census(dir.path()).completed, 1);
    }

    #[test]
    fn test_census_is_idempotent() {
        let dir = tempdir().unwrap();
        touch(dir.path(), "a.exe");
        touch(dir.path(), "b.part");

        assert_eq!(census(dir.path()), census(dir.path()));
    }

    #[test]
    fn test_not_complete_at_baseline() {
        let dir = tempdir().unwrap();
        touch(dir.path(), "old.exe");

        assert!(!is_complete(dir.path(), 1));
    }

    #[test]
    fn test_complete_when_one_new_file_and_no_partial() {
        // Scenario: empty directory, baseline 0, one .exe appears
        let dir = tempdir().unwrap();
        assert!(!is_complete(dir.path(), 0));

        touch(dir.path(), "installer.exe");
        assert!(is_complete(dir.path(), 0));
    }

    #[test]
    fn test_partial_file_blocks_completion() {
        // Scenario: baseline 2, a third completed file appears alongside a
        // lingering .part from an unrelated transfer
        let dir = tempdir().unwrap();
        touch(dir.path(), "one.exe");
        touch(dir.path(), "two.msi");
        touch(dir.path(), "three.zip");
        touch(dir.path(), "other.part");

        assert!(!is_complete(dir.path(), 2));

        std::fs::remove_file(dir.path().join("other.part")).unwrap();
        assert!(is_complete(dir.path(), 2));
    }

    #[test]
    fn test_two_new_files_is_not_complete() {
        let dir = tempdir().unwrap();
        touch(dir.path(), "a.exe");
        touch(dir.path(), "b.exe");

        assert!(!is_complete(dir.path(), 0));
    }
}
