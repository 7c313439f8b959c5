use std::sync::{Arc, Mutex};

use dlp_model::{Grid, GridError, Location, Violations};

use super::{RESOURCE_TYPE, data_cell, lock};
use crate::messages;
use crate::rules::RuleBook;
use crate::validator::Validator;

/// Resource type codes for audio and video items.
pub const MEDIA_TYPES: &[&str] = &["mov", "aud", "aum", "aun"];

/// Companion fields every audio or video row needs.
pub const MEDIA_FIELDS: &[&str] = &["media.width", "media.height", "media.duration", "media.format"];

/// Column index of each media field found in the header row.
#[derive(Debug, Clone)]
struct MediaColumns {
    found: Vec<(&'static str, usize)>,
}

impl MediaColumns {
    fn resolve(headers: &[String]) -> Self {
        let found = MEDIA_FIELDS
            .iter()
            .filter_map(|field| {
                headers
                    .iter()
                    .position(|header| header == field)
                    .map(|col| (*field, col))
            })
            .collect();
        Self { found }
    }

    fn missing(&self) -> impl Iterator<Item = &'static str> + '_ {
        MEDIA_FIELDS
            .iter()
            .copied()
            .filter(|field| self.found.iter().all(|(found, _)| found != field))
    }
}

/// Audio and video rows must describe their media.
///
/// The media columns are located once, on the first audio or video row,
/// and any missing ones are reported there. Every such row then needs a
/// value in each media column that exists.
#[derive(Debug)]
pub struct MediaMetaCheck {
    rules: Arc<RuleBook>,
    columns: Mutex<Option<MediaColumns>>,
}

impl MediaMetaCheck {
    pub fn new(rules: Arc<RuleBook>) -> Self {
        Self {
            rules,
            columns: Mutex::new(None),
        }
    }

    fn columns(&self, grid: &Grid, location: Location, profile: &str) -> (MediaColumns, Violations) {
        let mut memo = lock(&self.columns);
        if let Some(columns) = memo.as_ref() {
            return (columns.clone(), Violations::new());
        }

        let columns = MediaColumns::resolve(grid.headers());
        let violations: Violations = if columns.found.is_empty() {
            GridError::new(messages::ALL_MEDIA_MISSING, location, profile).into()
        } else {
            columns
                .missing()
                .map(|field| GridError::new(messages::media_field_missing(field), location, profile))
                .collect()
        };
        *memo = Some(columns.clone());
        (columns, violations)
    }
}

impl Validator for MediaMetaCheck {
    fn validate(&self, profile: &str, location: Location, grid: &Grid) -> Violations {
        let resource_type = match data_cell(grid, location, profile, &[RESOURCE_TYPE]) {
            Ok(Some(value)) => value.trim(),
            Ok(None) => return Violations::new(),
            Err(err) => return err.into(),
        };
        if !self.rules.checks_media(profile) || !MEDIA_TYPES.contains(&resource_type) {
            return Violations::new();
        }

        let (columns, mut violations) = self.columns(grid, location, profile);
        for (field, col) in columns.found {
            let empty = || GridError::new(messages::media_field_empty(field), location, profile);
            match grid.cell(location.with_col(col), profile) {
                Ok(value) if !value.trim().is_empty() => {}
                Ok(_) => violations.push(empty()),
                // Short row: the media cell is absent
                Err(err) => violations.push(empty().with_cause(err)),
            }
        }
        violations
    }
}
