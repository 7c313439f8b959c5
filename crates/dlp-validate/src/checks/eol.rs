use dlp_model::{Grid, GridError, Location, Violations};

use crate::messages;
use crate::validator::Validator;

/// Rejects cells with an embedded line break, header row included.
#[derive(Debug, Default)]
pub struct EolCheck;

impl EolCheck {
    pub fn new() -> Self {
        Self
    }
}

impl Validator for EolCheck {
    fn validate(&self, profile: &str, location: Location, grid: &Grid) -> Violations {
        match grid.cell(location, profile) {
            Ok(value) if value.contains(['\n', '\r']) => {
                GridError::new(messages::EOL_FOUND, location, profile).into()
            }
            Ok(_) => Violations::new(),
            Err(err) => err.into(),
        }
    }
}
