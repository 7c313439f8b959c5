use dlp_model::{Grid, GridError, Location, Violations};

use super::{FILE_NAME, data_cell, has_whitespace};
use crate::messages;
use crate::validator::Validator;

/// `File Name` values must not contain whitespace.
#[derive(Debug, Default)]
pub struct FileNameCheck;

impl FileNameCheck {
    pub fn new() -> Self {
        Self
    }
}

impl Validator for FileNameCheck {
    fn validate(&self, profile: &str, location: Location, grid: &Grid) -> Violations {
        match data_cell(grid, location, profile, &[FILE_NAME]) {
            Ok(Some(value)) if has_whitespace(value) => {
                GridError::new(messages::WHITESPACE, location, profile).into()
            }
            Ok(_) => Violations::new(),
            Err(err) => err.into(),
        }
    }
}
