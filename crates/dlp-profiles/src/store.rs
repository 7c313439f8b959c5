//! The concurrent, persisted profile store.

use std::collections::{BTreeMap, HashMap};
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};

use chrono::{DateTime, Utc};

use crate::error::{ProfileError, Result};
use crate::io::{load_profiles, save_profiles};
use crate::lock;
use crate::profile::Profile;
use crate::snapshot::ProfilesSnapshot;

#[derive(Debug)]
struct StoreState {
    profiles: HashMap<String, Arc<Profile>>,
    last_update: DateTime<Utc>,
}

/// Every profile known to the process.
///
/// Lock order is always store first, then profile.
#[derive(Debug)]
pub struct Profiles {
    path: Option<PathBuf>,
    state: RwLock<StoreState>,
}

impl Default for Profiles {
    fn default() -> Self {
        Self::new()
    }
}

impl Profiles {
    /// An empty store with no backing file.
    pub fn new() -> Self {
        Self {
            path: None,
            state: RwLock::new(StoreState {
                profiles: HashMap::new(),
                last_update: Utc::now(),
            }),
        }
    }

    /// An empty store persisted at `path`.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
            ..Self::new()
        }
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn last_update(&self) -> DateTime<Utc> {
        lock::read(&self.state).last_update
    }

    /// Insert or replace a profile under its current name.
    pub fn set_profile(&self, profile: Profile) -> Result<()> {
        let name = profile.name();
        if name.is_empty() {
            return Err(ProfileError::EmptyName);
        }
        let mut state = lock::write(&self.state);
        state.profiles.insert(name, Arc::new(profile));
        state.last_update = Utc::now();
        Ok(())
    }

    pub fn get_profile(&self, name: &str) -> Option<Arc<Profile>> {
        lock::read(&self.state).profiles.get(name).cloned()
    }

    pub fn remove_profile(&self, name: &str) -> Option<Arc<Profile>> {
        let mut state = lock::write(&self.state);
        let removed = state.profiles.remove(name);
        if removed.is_some() {
            state.last_update = Utc::now();
        }
        removed
    }

    /// Rename a stored profile, moving it to its new key.
    ///
    /// Fails without changing anything when `old` is missing or `new` is
    /// empty or already taken.
    pub fn rename_profile(&self, old: &str, new: &str) -> Result<()> {
        if new.is_empty() {
            return Err(ProfileError::EmptyName);
        }
        let mut state = lock::write(&self.state);
        if old == new {
            return if state.profiles.contains_key(old) {
                Ok(())
            } else {
                Err(ProfileError::ProfileNotFound { name: old.to_owned() })
            };
        }
        if state.profiles.contains_key(new) {
            return Err(ProfileError::DuplicateProfile { name: new.to_owned() });
        }
        let profile = state
            .profiles
            .remove(old)
            .ok_or_else(|| ProfileError::ProfileNotFound { name: old.to_owned() })?;
        profile.set_name(new);
        state.profiles.insert(new.to_owned(), profile);
        state.last_update = Utc::now();
        Ok(())
    }

    pub fn count(&self) -> usize {
        lock::read(&self.state).profiles.len()
    }

    /// Profile names, sorted.
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = lock::read(&self.state).profiles.keys().cloned().collect();
        names.sort();
        names
    }

    /// A deep copy of the store, safe to serialize while others mutate it.
    pub fn snapshot(&self) -> ProfilesSnapshot {
        let state = lock::read(&self.state);
        let profiles: BTreeMap<_, _> = state
            .profiles
            .iter()
            .map(|(name, profile)| (name.clone(), profile.snapshot()))
            .collect();
        ProfilesSnapshot {
            profiles,
            last_update: state.last_update,
        }
    }

    /// The store rendered as indented JSON.
    pub fn to_json_pretty(&self) -> Result<String> {
        serde_json::to_string_pretty(&self.snapshot())
            .map_err(|source| ProfileError::Serialization { source })
    }

    /// Replace the in-memory profiles with the contents of the backing file.
    ///
    /// Nothing changes unless the whole document loads and validates.
    pub fn refresh(&self) -> Result<()> {
        let path = self.path.as_deref().ok_or(ProfileError::PathNotConfigured)?;
        let snapshot = load_profiles(path)?;

        let mut profiles = HashMap::with_capacity(snapshot.profiles.len());
        for entry in snapshot.profiles.into_values() {
            let profile = Profile::from_snapshot(entry)?;
            profiles.insert(profile.name(), Arc::new(profile));
        }

        let mut state = lock::write(&self.state);
        state.profiles = profiles;
        state.last_update = snapshot.last_update;
        tracing::debug!(profiles = state.profiles.len(), "Profile store refreshed");
        Ok(())
    }

    /// Write the store to its backing file atomically.
    pub fn save(&self) -> Result<()> {
        let path = self.path.as_deref().ok_or(ProfileError::PathNotConfigured)?;
        save_profiles(&self.snapshot(), path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::Validation;

    fn profile(name: &str, checks: &[&str]) -> Profile {
        Profile::new(
            name,
            checks.iter().map(|check| Validation::new(*check, "")).collect(),
        )
        .unwrap()
    }

    #[test]
    fn test_set_and_get_profile() {
        let store = Profiles::new();
        store.set_profile(profile("default", &["EOLCheck"])).unwrap();

        let found = store.get_profile("default").unwrap();
        assert_eq!(found.validation_names(), vec!["EOLCheck"]);
        assert!(store.get_profile("missing").is_none());
    }

    #[test]
    fn test_set_profile_replaces_existing() {
        let store = Profiles::new();
        store.set_profile(profile("default", &["EOLCheck"])).unwrap();
        store.set_profile(profile("default", &["ARKCheck"])).unwrap();

        assert_eq!(store.count(), 1);
        assert_eq!(
            store.get_profile("default").unwrap().validation_names(),
            vec!["ARKCheck"]
        );
    }

    #[test]
    fn test_names_are_sorted() {
        let store = Profiles::new();
        for name in ["test", "bucketeer", "default"] {
            store.set_profile(profile(name, &[])).unwrap();
        }
        assert_eq!(store.names(), vec!["bucketeer", "default", "test"]);
    }

    #[test]
    fn test_remove_profile() {
        let store = Profiles::new();
        store.set_profile(profile("default", &[])).unwrap();
        assert!(store.remove_profile("default").is_some());
        assert!(store.remove_profile("default").is_none());
        assert_eq!(store.count(), 0);
    }

    #[test]
    fn test_rename_profile_moves_key() {
        let store = Profiles::new();
        store.set_profile(profile("default", &["EOLCheck"])).unwrap();
        let held = store.get_profile("default").unwrap();

        store.rename_profile("default", "renamed").unwrap();

        assert!(store.get_profile("default").is_none());
        assert_eq!(held.name(), "renamed");
        assert_eq!(store.names(), vec!["renamed"]);
        let snapshot = store.snapshot();
        assert_eq!(snapshot.profiles["renamed"].name, "renamed");
    }

    #[test]
    fn test_rename_profile_rejects_collisions() {
        let store = Profiles::new();
        store.set_profile(profile("default", &[])).unwrap();
        store.set_profile(profile("test", &[])).unwrap();

        assert!(matches!(
            store.rename_profile("default", "test"),
            Err(ProfileError::DuplicateProfile { name }) if name == "test"
        ));
        assert!(matches!(
            store.rename_profile("missing", "other"),
            Err(ProfileError::ProfileNotFound { .. })
        ));
        assert!(matches!(
            store.rename_profile("default", ""),
            Err(ProfileError::EmptyName)
        ));
        assert_eq!(store.names(), vec!["default", "test"]);
        assert_eq!(store.get_profile("default").unwrap().name(), "default");
    }

    #[test]
    fn test_refresh_and_save_need_a_path() {
        let store = Profiles::new();
        assert!(matches!(store.refresh(), Err(ProfileError::PathNotConfigured)));
        assert!(matches!(store.save(), Err(ProfileError::PathNotConfigured)));
    }

    #[test]
    fn test_to_json_pretty_uses_persisted_shape() {
        let store = Profiles::new();
        store.set_profile(profile("default", &["EOLCheck"])).unwrap();
        let json = store.to_json_pretty().unwrap();
        assert!(json.contains("\"lastUpdate\""));
        assert!(json.contains("\"EOLCheck\""));
    }
}
