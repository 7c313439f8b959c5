use std::sync::Arc;

use dlp_model::{Grid, GridError, Location, Violations};
use tracing::debug;

use super::OBJECT_TYPE;
use crate::messages;
use crate::rules::{FieldRule, RuleBook};
use crate::validator::Validator;

/// Applies a profile's required-field table.
///
/// At the first header cell, every header-only field is looked for in the
/// header row. In data rows, a field with required data must be non-blank
/// whenever its condition holds for the row's `Object Type`.
#[derive(Debug)]
pub struct ReqFieldCheck {
    rules: Arc<RuleBook>,
}

impl ReqFieldCheck {
    pub fn new(rules: Arc<RuleBook>) -> Self {
        Self { rules }
    }

    fn check_data(
        &self,
        header: &str,
        rule: &FieldRule,
        location: Location,
        grid: &Grid,
        profile: &str,
    ) -> Option<GridError> {
        if rule.condition.needs_object_type() {
            match grid.row_value(OBJECT_TYPE, location, profile) {
                Ok(object_type) if !rule.condition.applies_to(object_type) => return None,
                Ok(_) => {}
                Err(err) => {
                    return Some(
                        GridError::new(messages::bad_header(header), location, profile)
                            .with_cause(err),
                    );
                }
            }
        }

        let blank = grid.cell(location, profile).unwrap_or_default().trim().is_empty();
        debug!(header, row = location.row, blank, "Required field data");
        blank.then(|| GridError::new(messages::field_data_not_found(header), location, profile))
    }
}

impl Validator for ReqFieldCheck {
    fn validate(&self, profile: &str, location: Location, grid: &Grid) -> Violations {
        if let Err(err) = grid.check(location, profile) {
            return err.into();
        }

        let Some(table) = self.rules.required_fields(profile) else {
            // Reported once for the whole grid
            return if location == Location::origin() {
                GridError::new(messages::unknown_profile(profile), location, profile).into()
            } else {
                Violations::new()
            };
        };

        let mut violations = Violations::new();

        if location == Location::origin() {
            let headers = grid.headers();
            for field in table.header_only_fields() {
                let found = headers.iter().any(|header| header == field);
                debug!(field, found, "Required header");
                if !found {
                    violations.push(GridError::new(
                        messages::field_not_found(field),
                        location,
                        profile,
                    ));
                }
            }
        }

        if location.is_header_row() {
            return violations;
        }

        let header = match grid.header(location, profile) {
            Ok(header) => header,
            Err(err) => {
                let index = format!("[index: {}]", location.col);
                violations.push(
                    GridError::new(messages::bad_header(&index), location, profile).with_cause(err),
                );
                return violations;
            }
        };

        if let Some(rule) = table.get(header).filter(|rule| rule.data_required) {
            violations.extend(self.check_data(header, rule, location, grid, profile));
        }
        violations
    }
}
