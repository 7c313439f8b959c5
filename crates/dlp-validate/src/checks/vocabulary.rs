use dlp_model::{Grid, GridError, Location, Violations};

use super::{OBJECT_TYPE, VISIBILITY, data_cell, has_whitespace};
use crate::messages;
use crate::validator::Validator;

pub const OBJECT_TYPES: &[&str] = &["Collection", "Work", "Page"];
pub const VISIBILITIES: &[&str] = &["open", "ucla", "private"];

/// Restricts one field to a fixed vocabulary.
///
/// Whitespace is rejected before membership is tested, so `"Work "` is
/// reported as a whitespace problem rather than an unknown term.
#[derive(Debug, Clone, Copy)]
pub struct VocabularyCheck {
    header: &'static str,
    terms: &'static [&'static str],
    invalid: &'static str,
}

impl VocabularyCheck {
    pub fn object_type() -> Self {
        Self {
            header: OBJECT_TYPE,
            terms: OBJECT_TYPES,
            invalid: messages::BAD_OBJECT_TYPE,
        }
    }

    pub fn visibility() -> Self {
        Self {
            header: VISIBILITY,
            terms: VISIBILITIES,
            invalid: messages::BAD_VISIBILITY,
        }
    }

    pub fn header(&self) -> &'static str {
        self.header
    }
}

impl Validator for VocabularyCheck {
    fn validate(&self, profile: &str, location: Location, grid: &Grid) -> Violations {
        let value = match data_cell(grid, location, profile, &[self.header]) {
            Ok(Some(value)) => value,
            Ok(None) => return Violations::new(),
            Err(err) => return err.into(),
        };

        if has_whitespace(value) {
            GridError::new(messages::WHITESPACE, location, profile).into()
        } else if !self.terms.contains(&value) {
            GridError::new(self.invalid, location, profile).into()
        } else {
            Violations::new()
        }
    }
}
