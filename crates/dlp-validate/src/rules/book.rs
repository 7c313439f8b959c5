//! The rule book: every profile-specific table in one value.

use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::Path;

use serde::Deserialize;

use super::embedded::BUILTIN_RULES;
use super::required::{FieldRuleDef, RequiredFields};
use crate::error::RuleBookError;

/// Profile-specific data the checks consult.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuleBook {
    required_fields: BTreeMap<String, RequiredFields>,
    naans: BTreeMap<String, BTreeSet<String>>,
    media_profiles: BTreeSet<String>,
    license_exempt_profiles: BTreeSet<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RuleBookDef {
    #[serde(default)]
    required_fields: BTreeMap<String, BTreeMap<String, FieldRuleDef>>,
    #[serde(default)]
    naans: BTreeMap<String, BTreeSet<String>>,
    #[serde(default)]
    media_profiles: BTreeSet<String>,
    #[serde(default)]
    license_exempt_profiles: BTreeSet<String>,
}

impl RuleBook {
    /// An empty rule book; every profile is unknown to it.
    pub fn new() -> Self {
        Self::default()
    }

    /// The rule book compiled into the crate.
    pub fn builtin() -> Result<Self, RuleBookError> {
        Self::from_json(BUILTIN_RULES, "built-in rules")
    }

    /// Load a rule book from a JSON file.
    pub fn load(path: &Path) -> Result<Self, RuleBookError> {
        let text = fs::read_to_string(path).map_err(|source| RuleBookError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let book = Self::from_json(&text, &path.display().to_string())?;
        tracing::info!(
            profiles = book.required_fields.len(),
            "Loaded rule book from {}",
            path.display()
        );
        Ok(book)
    }

    /// Parse a rule book; `origin` names the source in errors.
    pub fn from_json(text: &str, origin: &str) -> Result<Self, RuleBookError> {
        let def: RuleBookDef =
            serde_json::from_str(text).map_err(|source| RuleBookError::Deserialization {
                origin: origin.to_owned(),
                source,
            })?;

        let required_fields = def
            .required_fields
            .into_iter()
            .map(|(profile, fields)| {
                let table = RequiredFields::from_defs(&profile, fields)?;
                Ok((profile, table))
            })
            .collect::<Result<_, RuleBookError>>()?;

        Ok(Self {
            required_fields,
            naans: def.naans,
            media_profiles: def.media_profiles,
            license_exempt_profiles: def.license_exempt_profiles,
        })
    }

    #[must_use]
    pub fn with_required_fields(mut self, profile: impl Into<String>, table: RequiredFields) -> Self {
        self.required_fields.insert(profile.into(), table);
        self
    }

    #[must_use]
    pub fn with_naans<I, S>(mut self, profile: impl Into<String>, naans: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.naans
            .insert(profile.into(), naans.into_iter().map(Into::into).collect());
        self
    }

    #[must_use]
    pub fn with_media_profile(mut self, profile: impl Into<String>) -> Self {
        self.media_profiles.insert(profile.into());
        self
    }

    #[must_use]
    pub fn with_license_exempt_profile(mut self, profile: impl Into<String>) -> Self {
        self.license_exempt_profiles.insert(profile.into());
        self
    }

    /// The required-field table for `profile`.
    pub fn required_fields(&self, profile: &str) -> Option<&RequiredFields> {
        self.required_fields.get(profile)
    }

    /// Whether `naan` is on `profile`'s allow-list.
    pub fn naan_allowed(&self, profile: &str, naan: &str) -> bool {
        self.naans
            .get(profile)
            .is_some_and(|allowed| allowed.contains(naan))
    }

    /// Whether `profile` demands media metadata for audio and video rows.
    pub fn checks_media(&self, profile: &str) -> bool {
        self.media_profiles.contains(profile)
    }

    /// Whether `profile` skips license URL checks.
    pub fn license_exempt(&self, profile: &str) -> bool {
        self.license_exempt_profiles.contains(profile)
    }

    /// Profiles with a required-field table, sorted.
    pub fn profiles(&self) -> impl Iterator<Item = &str> {
        self.required_fields.keys().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::{Condition, FieldRule};
    use tempfile::tempdir;

    #[test]
    fn test_builtin_parses() {
        let book = RuleBook::builtin().unwrap();

        let default = book.required_fields("default").unwrap();
        assert_eq!(default.len(), 8);
        assert_eq!(
            default.get("Parent ARK"),
            Some(&FieldRule::required_except(["Collection"]))
        );
        assert_eq!(
            default.get("Item Sequence").map(|rule| &rule.condition),
            Some(&Condition::OnlyFor(BTreeSet::from(["Page".to_owned()])))
        );

        assert!(book.naan_allowed("default", "21198"));
        assert!(book.naan_allowed("DLP Staff", "13030"));
        assert!(!book.naan_allowed("default", "99999"));
        assert!(book.checks_media("fester"));
        assert!(book.license_exempt("bucketeer"));
        assert_eq!(
            book.profiles().collect::<Vec<_>>(),
            vec!["bucketeer", "default", "fester", "test"]
        );
    }

    #[test]
    fn test_from_json_rejects_conflicting_lists() {
        let json = r#"{
            "requiredFields": {
                "custom": {
                    "Summary": {
                        "dataRequired": true,
                        "objectTypes": ["Collection"],
                        "notObjectTypes": ["Page"]
                    }
                }
            }
        }"#;
        assert!(matches!(
            RuleBook::from_json(json, "test"),
            Err(RuleBookError::ConflictingConditions { .. })
        ));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("rules.json");
        fs::write(&path, r#"{"naans":{"local":["12345"]}}"#).unwrap();

        let book = RuleBook::load(&path).unwrap();
        assert!(book.naan_allowed("local", "12345"));
        assert!(book.required_fields("local").is_none());
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempdir().unwrap();
        assert!(matches!(
            RuleBook::load(&dir.path().join("absent.json")),
            Err(RuleBookError::Io { .. })
        ));
    }
}
