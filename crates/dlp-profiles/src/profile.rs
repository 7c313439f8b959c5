//! A single, thread-safe validation profile.

use std::collections::BTreeMap;
use std::sync::RwLock;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{ProfileError, Result};
use crate::lock;
use crate::snapshot::ProfileSnapshot;

/// A named validation rule, resolved against the validator registry.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Validation {
    pub name: String,
    #[serde(default)]
    pub description: String,
}

impl Validation {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
        }
    }
}

#[derive(Debug, Clone)]
struct ProfileState {
    name: String,
    last_update: DateTime<Utc>,
    validations: Vec<Validation>,
}

/// A named set of validations.
///
/// Validations are kept de-duplicated by name and sorted by name. Every
/// mutator bumps the last-update timestamp.
#[derive(Debug)]
pub struct Profile {
    state: RwLock<ProfileState>,
}

impl Profile {
    /// Create a profile; the name must not be empty.
    pub fn new(name: impl Into<String>, validations: Vec<Validation>) -> Result<Self> {
        let name = name.into();
        if name.is_empty() {
            return Err(ProfileError::EmptyName);
        }
        Ok(Self {
            state: RwLock::new(ProfileState {
                name,
                last_update: Utc::now(),
                validations: normalize(validations),
            }),
        })
    }

    /// Rebuild a profile from persisted data, keeping its timestamp.
    pub fn from_snapshot(snapshot: ProfileSnapshot) -> Result<Self> {
        let profile = Self::new(snapshot.name, snapshot.validations)?;
        lock::write(&profile.state).last_update = snapshot.last_update;
        Ok(profile)
    }

    pub fn name(&self) -> String {
        lock::read(&self.state).name.clone()
    }

    pub fn last_update(&self) -> DateTime<Utc> {
        lock::read(&self.state).last_update
    }

    /// A copy of the profile's validations.
    pub fn validations(&self) -> Vec<Validation> {
        lock::read(&self.state).validations.clone()
    }

    /// The names of the profile's validations, in stored order.
    pub fn validation_names(&self) -> Vec<String> {
        lock::read(&self.state)
            .validations
            .iter()
            .map(|validation| validation.name.clone())
            .collect()
    }

    /// Renames go through [`crate::Profiles::rename_profile`] so the store key follows.
    pub(crate) fn set_name(&self, name: impl Into<String>) {
        let mut state = lock::write(&self.state);
        state.name = name.into();
        state.last_update = Utc::now();
    }

    /// Add a validation unless one with the same name is already present.
    ///
    /// Returns `true` when the validation was added.
    pub fn add_validation(&self, name: impl Into<String>, description: impl Into<String>) -> bool {
        let validation = Validation::new(name, description);
        let mut state = lock::write(&self.state);
        match state
            .validations
            .binary_search_by(|existing| existing.name.cmp(&validation.name))
        {
            Ok(_) => false,
            Err(index) => {
                state.validations.insert(index, validation);
                state.last_update = Utc::now();
                true
            }
        }
    }

    /// Replace the validations, de-duplicating by name and sorting.
    pub fn set_validations(&self, validations: Vec<Validation>) {
        let validations = normalize(validations);
        let mut state = lock::write(&self.state);
        state.validations = validations;
        state.last_update = Utc::now();
    }

    /// A deep copy of the profile's current state.
    pub fn snapshot(&self) -> ProfileSnapshot {
        let state = lock::read(&self.state);
        ProfileSnapshot {
            name: state.name.clone(),
            last_update: state.last_update,
            validations: state.validations.clone(),
        }
    }
}

/// De-duplicate by name (first occurrence wins) and sort by name.
fn normalize(validations: Vec<Validation>) -> Vec<Validation> {
    let mut unique: BTreeMap<String, Validation> = BTreeMap::new();
    for validation in validations {
        unique.entry(validation.name.clone()).or_insert(validation);
    }
    unique.into_values().collect()
}
