use dlp_model::{Grid, GridError, Location, Violations};

use super::{ITEM_SEQUENCE, OBJECT_TYPE, data_cell};
use crate::messages;
use crate::validator::Validator;

/// Object type whose rows must carry a sequence number.
const PAGE: &str = "Page";

/// `Item Sequence` must be a positive integer; blank only outside pages.
#[derive(Debug, Default)]
pub struct ItemSeqCheck;

impl ItemSeqCheck {
    pub fn new() -> Self {
        Self
    }
}

impl Validator for ItemSeqCheck {
    fn validate(&self, profile: &str, location: Location, grid: &Grid) -> Violations {
        let value = match data_cell(grid, location, profile, &[ITEM_SEQUENCE]) {
            Ok(Some(value)) => value,
            Ok(None) => return Violations::new(),
            Err(err) => return err.into(),
        };

        if value.is_empty() {
            // No Object Type column means the row is not a page
            let is_page = grid
                .row_value(OBJECT_TYPE, location, profile)
                .is_ok_and(|object_type| object_type == PAGE);
            return if is_page {
                GridError::new(messages::PAGE_NEEDS_SEQUENCE, location, profile).into()
            } else {
                Violations::new()
            };
        }

        match value.parse::<i64>() {
            Ok(sequence) if sequence > 0 => Violations::new(),
            Ok(_) => GridError::new(messages::NOT_A_POSITIVE_INT, location, profile).into(),
            Err(err) => GridError::new(messages::NOT_AN_INT, location, profile)
                .with_cause(err)
                .into(),
        }
    }
}
