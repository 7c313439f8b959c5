//! Serializable copies of the store.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::profile::Validation;

/// A point-in-time copy of one profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileSnapshot {
    pub name: String,
    #[serde(default = "Utc::now")]
    pub last_update: DateTime<Utc>,
    #[serde(default)]
    pub validations: Vec<Validation>,
}

/// A point-in-time copy of the whole store; the persisted document shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfilesSnapshot {
    #[serde(default)]
    pub profiles: BTreeMap<String, ProfileSnapshot>,
    #[serde(default = "Utc::now")]
    pub last_update: DateTime<Utc>,
}
