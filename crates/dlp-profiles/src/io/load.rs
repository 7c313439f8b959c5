//! Profile store loading.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use crate::error::{ProfileError, Result};
use crate::snapshot::ProfilesSnapshot;

/// Read and validate a snapshot from a JSON file.
///
/// The document must hold at least one profile, every profile needs a
/// name, and no two entries may carry the same name.
pub(crate) fn load_profiles(path: &Path) -> Result<ProfilesSnapshot> {
    let bytes = fs::read(path).map_err(|e| ProfileError::Io {
        operation: "read",
        path: path.to_path_buf(),
        source: e,
    })?;

    let snapshot: ProfilesSnapshot =
        serde_json::from_slice(&bytes).map_err(|source| ProfileError::Deserialization {
            path: path.to_path_buf(),
            source,
        })?;

    if snapshot.profiles.is_empty() {
        return Err(ProfileError::NoProfiles {
            path: path.to_path_buf(),
        });
    }

    let mut seen = HashSet::with_capacity(snapshot.profiles.len());
    for profile in snapshot.profiles.values() {
        if profile.name.is_empty() {
            return Err(ProfileError::EmptyName);
        }
        if !seen.insert(profile.name.as_str()) {
            return Err(ProfileError::DuplicateProfile {
                name: profile.name.clone(),
            });
        }
    }

    tracing::info!(
        profiles = snapshot.profiles.len(),
        "Loaded profiles from {}",
        path.display()
    );
    Ok(snapshot)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn write(dir: &Path, body: &str) -> std::path::PathBuf {
        let path = dir.join("profiles.json");
        fs::write(&path, body).unwrap();
        path
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempdir().unwrap();
        let result = load_profiles(&dir.path().join("absent.json"));
        assert!(matches!(result, Err(ProfileError::Io { operation: "read", .. })));
    }

    #[test]
    fn test_load_invalid_json() {
        let dir = tempdir().unwrap();
        let path = write(dir.path(), "{ not json");
        assert!(matches!(
            load_profiles(&path),
            Err(ProfileError::Deserialization { .. })
        ));
    }

    #[test]
    fn test_load_empty_document() {
        let dir = tempdir().unwrap();
        let path = write(dir.path(), r#"{"profiles":{}}"#);
        assert!(matches!(
            load_profiles(&path),
            Err(ProfileError::NoProfiles { .. })
        ));
    }

    #[test]
    fn test_load_duplicate_inner_names() {
        let dir = tempdir().unwrap();
        let path = write(
            dir.path(),
            r#"{"profiles":{"a":{"name":"same"},"b":{"name":"same"}}}"#,
        );
        assert!(matches!(
            load_profiles(&path),
            Err(ProfileError::DuplicateProfile { name }) if name == "same"
        ));
    }

    #[test]
    fn test_load_empty_profile_name() {
        let dir = tempdir().unwrap();
        let path = write(dir.path(), r#"{"profiles":{"a":{"name":""}}}"#);
        assert!(matches!(load_profiles(&path), Err(ProfileError::EmptyName)));
    }
}
