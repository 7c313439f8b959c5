use std::collections::HashSet;
use std::sync::Mutex;

use dlp_model::{Grid, GridError, Location, Violations};

use super::lock;
use crate::messages;
use crate::validator::Validator;

const REPLACEMENT: char = '\u{FFFD}';

/// Flags cells holding U+FFFD, the mark of a botched encoding conversion.
///
/// An exact repeat of an earlier flagged value is reported as a duplicate.
#[derive(Debug, Default)]
pub struct UnicodeCheck {
    flagged: Mutex<HashSet<String>>,
}

impl UnicodeCheck {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Validator for UnicodeCheck {
    fn validate(&self, profile: &str, location: Location, grid: &Grid) -> Violations {
        let value = match grid.cell(location, profile) {
            Ok(value) => value,
            Err(err) => return err.into(),
        };

        let mut flagged = lock(&self.flagged);
        if flagged.contains(value) {
            return GridError::new(messages::UNICODE_DUPLICATE, location, profile).into();
        }
        if value.contains(REPLACEMENT) {
            flagged.insert(value.to_owned());
            return GridError::new(messages::UNICODE_REPLACEMENT, location, profile).into();
        }
        Violations::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checks::test_support::{at, grid, messages};

    #[test]
    fn test_replacement_then_duplicate() {
        let grid = grid(&[&["Title"], &["Caf\u{FFFD}"], &["Caf\u{FFFD}"], &["Caf\u{e9}"]]);
        let check = UnicodeCheck::new();

        assert_eq!(messages(&check.validate("p", at(1, 0), &grid)), vec![messages::UNICODE_REPLACEMENT]);
        assert_eq!(messages(&check.validate("p", at(2, 0), &grid)), vec![messages::UNICODE_DUPLICATE]);
        assert!(check.validate("p", at(3, 0), &grid).is_empty());
    }

    #[test]
    fn test_fresh_instance_forgets() {
        let grid = grid(&[&["\u{FFFD}"]]);
        assert_eq!(
            messages(&UnicodeCheck::new().validate("p", at(0, 0), &grid)),
            vec![messages::UNICODE_REPLACEMENT]
        );
        assert_eq!(
            messages(&UnicodeCheck::new().validate("p", at(0, 0), &grid)),
            vec![messages::UNICODE_REPLACEMENT]
        );
    }
}
