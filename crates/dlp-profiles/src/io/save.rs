//! Profile store saving.

use std::fs;
use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;

use crate::error::{ProfileError, Result};
use crate::snapshot::ProfilesSnapshot;

/// Write a snapshot to a JSON file.
///
/// Uses atomic write (temp file + rename) so readers never observe a
/// partially written document.
pub(crate) fn save_profiles(snapshot: &ProfilesSnapshot, path: &Path) -> Result<()> {
    let bytes = serde_json::to_vec_pretty(snapshot)
        .map_err(|source| ProfileError::Serialization { source })?;

    // Same directory as the target so the rename never crosses filesystems
    let dir = match path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        Some(parent) => {
            fs::create_dir_all(parent).map_err(|e| ProfileError::Io {
                operation: "create directory",
                path: parent.to_path_buf(),
                source: e,
            })?;
            parent
        }
        None => Path::new("."),
    };

    // Each save gets its own temp file, so concurrent savers never share one
    let mut file = NamedTempFile::new_in(dir).map_err(|e| ProfileError::Io {
        operation: "create temporary",
        path: dir.to_path_buf(),
        source: e,
    })?;

    file.write_all(&bytes).map_err(|e| ProfileError::Io {
        operation: "write",
        path: file.path().to_path_buf(),
        source: e,
    })?;

    file.as_file().sync_all().map_err(|e| ProfileError::Io {
        operation: "sync",
        path: file.path().to_path_buf(),
        source: e,
    })?;

    file.persist(path).map_err(|e| ProfileError::AtomicWriteFailed {
        temp_path: e.file.path().to_path_buf(),
        target_path: path.to_path_buf(),
        source: e.error,
    })?;

    tracing::info!(
        profiles = snapshot.profiles.len(),
        "Saved profiles to {}",
        path.display()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;
    use tempfile::tempdir;

    #[test]
    fn test_save_creates_parent_and_leaves_no_temp_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("profiles.json");

        let snapshot = ProfilesSnapshot {
            profiles: BTreeMap::new(),
            last_update: chrono::Utc::now(),
        };
        save_profiles(&snapshot, &path).unwrap();

        assert!(path.exists());
        let entries: Vec<_> = fs::read_dir(path.parent().unwrap()).unwrap().collect();
        assert_eq!(entries.len(), 1);
    }

    #[test]
    fn test_save_keeps_target_extension() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("profiles.conf");

        let snapshot = ProfilesSnapshot {
            profiles: BTreeMap::new(),
            last_update: chrono::Utc::now(),
        };
        save_profiles(&snapshot, &path).unwrap();

        let names: Vec<_> = fs::read_dir(dir.path())
            .unwrap()
            .map(|entry| entry.unwrap().file_name().into_string().unwrap())
            .collect();
        assert_eq!(names, ["profiles.conf"]);
    }
}
