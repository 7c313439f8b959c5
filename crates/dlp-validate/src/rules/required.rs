//! The required-field decision table.

use std::collections::{BTreeMap, BTreeSet};

use serde::Deserialize;

use crate::error::RuleBookError;

/// When a field with required data must actually hold a value, judged by
/// the row's `Object Type`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Condition {
    /// Every data row.
    Always,
    /// Only rows whose object type is listed.
    OnlyFor(BTreeSet<String>),
    /// Every row except those whose object type is listed.
    ExceptFor(BTreeSet<String>),
}

impl Condition {
    /// Whether a row with `object_type` must carry data.
    pub fn applies_to(&self, object_type: &str) -> bool {
        match self {
            Self::Always => true,
            Self::OnlyFor(types) => types.contains(object_type),
            Self::ExceptFor(types) => !types.contains(object_type),
        }
    }

    /// Whether deciding needs the row's object type at all.
    pub fn needs_object_type(&self) -> bool {
        !matches!(self, Self::Always)
    }
}

/// One field's requirement.
///
/// A field without required data only has to appear in the header row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldRule {
    pub data_required: bool,
    pub condition: Condition,
}

impl FieldRule {
    /// Header must be present; cells may be blank.
    pub fn header_only() -> Self {
        Self {
            data_required: false,
            condition: Condition::Always,
        }
    }

    /// Data required in every row.
    pub fn required() -> Self {
        Self {
            data_required: true,
            condition: Condition::Always,
        }
    }

    /// Data required in rows with one of these object types.
    pub fn required_for<I, S>(object_types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            data_required: true,
            condition: Condition::OnlyFor(object_types.into_iter().map(Into::into).collect()),
        }
    }

    /// Data required in rows without one of these object types.
    pub fn required_except<I, S>(object_types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            data_required: true,
            condition: Condition::ExceptFor(object_types.into_iter().map(Into::into).collect()),
        }
    }

    fn from_def(def: FieldRuleDef, profile: &str, field: &str) -> Result<Self, RuleBookError> {
        let condition = match (def.object_types.is_empty(), def.not_object_types.is_empty()) {
            (true, true) => Condition::Always,
            (false, true) => Condition::OnlyFor(def.object_types),
            (true, false) => Condition::ExceptFor(def.not_object_types),
            (false, false) => {
                return Err(RuleBookError::ConflictingConditions {
                    profile: profile.to_owned(),
                    field: field.to_owned(),
                });
            }
        };
        Ok(Self {
            data_required: def.data_required,
            condition,
        })
    }
}

/// One profile's table: header name to requirement.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequiredFields {
    fields: BTreeMap<String, FieldRule>,
}

impl RequiredFields {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with(mut self, field: impl Into<String>, rule: FieldRule) -> Self {
        self.fields.insert(field.into(), rule);
        self
    }

    pub fn get(&self, field: &str) -> Option<&FieldRule> {
        self.fields.get(field)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Fields that must appear in the header row, sorted by name.
    pub fn header_only_fields(&self) -> impl Iterator<Item = &str> {
        self.fields
            .iter()
            .filter(|(_, rule)| !rule.data_required)
            .map(|(field, _)| field.as_str())
    }

    pub(crate) fn from_defs(
        profile: &str,
        defs: BTreeMap<String, FieldRuleDef>,
    ) -> Result<Self, RuleBookError> {
        let fields = defs
            .into_iter()
            .map(|(field, def)| {
                let rule = FieldRule::from_def(def, profile, &field)?;
                Ok((field, rule))
            })
            .collect::<Result<_, RuleBookError>>()?;
        Ok(Self { fields })
    }
}

/// Serialized form of a [`FieldRule`].
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct FieldRuleDef {
    pub data_required: bool,
    #[serde(default)]
    pub object_types: BTreeSet<String>,
    #[serde(default)]
    pub not_object_types: BTreeSet<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn def(required: bool, only: &[&str], except: &[&str]) -> FieldRuleDef {
        FieldRuleDef {
            data_required: required,
            object_types: only.iter().map(|s| (*s).to_owned()).collect(),
            not_object_types: except.iter().map(|s| (*s).to_owned()).collect(),
        }
    }

    #[test]
    fn test_condition_applies_to() {
        let only = FieldRule::required_for(["Page"]).condition;
        assert!(only.applies_to("Page"));
        assert!(!only.applies_to("Work"));

        let except = FieldRule::required_except(["Collection"]).condition;
        assert!(!except.applies_to("Collection"));
        assert!(except.applies_to("Work"));

        assert!(Condition::Always.applies_to(""));
    }

    #[test]
    fn test_from_defs_rejects_both_lists() {
        let mut defs = BTreeMap::new();
        defs.insert("Summary".to_owned(), def(true, &["Collection"], &["Work"]));

        let err = RequiredFields::from_defs("custom", defs).unwrap_err();
        assert!(matches!(
            err,
            RuleBookError::ConflictingConditions { profile, field }
                if profile == "custom" && field == "Summary"
        ));
    }

    #[test]
    fn test_header_only_fields_sorted() {
        let table = RequiredFields::new()
            .with("Title", FieldRule::required())
            .with("Rights", FieldRule::header_only())
            .with("File Name", FieldRule::header_only());

        let fields: Vec<_> = table.header_only_fields().collect();
        assert_eq!(fields, vec!["File Name", "Rights"]);
    }
}
