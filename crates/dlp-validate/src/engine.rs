//! Full-grid validation runs.

use std::collections::HashSet;

use dlp_model::{Grid, Violations};
use rayon::prelude::*;
use tracing::{debug, info, info_span};

use crate::error::EngineError;
use crate::registry::{Registry, Validators};
use crate::validator::Validator;

/// Runs every validator of a profile over every cell of a grid.
#[derive(Debug, Clone)]
pub struct Engine {
    registry: Registry,
}

impl Engine {
    pub fn new(registry: Registry) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Fresh validators for `profile`.
    ///
    /// A profile that lists no validations gets every validator.
    pub fn validators(&self, profile: &str) -> Result<Validators, EngineError> {
        let stored = self
            .registry
            .context()
            .profiles()
            .get_profile(profile)
            .ok_or_else(|| EngineError::UnknownProfile {
                profile: profile.to_owned(),
            })?;

        let validators = self.registry.validators(&stored.validation_names());
        if validators.is_empty() {
            return Err(EngineError::NoValidators {
                profile: profile.to_owned(),
            });
        }
        Ok(validators)
    }

    /// Fresh validators for the union of several profiles' validations.
    ///
    /// Names are de-duplicated, first occurrence wins. As with a single
    /// profile, no names at all means every validator.
    pub fn validators_for(&self, profiles: &[&str]) -> Result<Validators, EngineError> {
        let store = self.registry.context().profiles();
        let mut seen = HashSet::new();
        let mut names = Vec::new();
        for &profile in profiles {
            let stored = store.get_profile(profile).ok_or_else(|| EngineError::UnknownProfile {
                profile: profile.to_owned(),
            })?;
            for name in stored.validation_names() {
                if seen.insert(name.clone()) {
                    names.push(name);
                }
            }
        }

        let validators = self.registry.validators(&names);
        if validators.is_empty() {
            return Err(EngineError::NoValidators {
                profile: profiles.join(", "),
            });
        }
        Ok(validators)
    }

    /// Validate `grid` against `profile`.
    ///
    /// Validators run in parallel with each other; each one scans the grid
    /// row-major on its own thread, so memoized "first occurrence" results
    /// do not depend on scheduling. Violations come back grouped by
    /// validator, in resolution order.
    pub fn validate(&self, profile: &str, grid: &Grid) -> Result<Violations, EngineError> {
        let validators = self.validators(profile)?;
        let _span = info_span!("validate", profile, rows = grid.row_count()).entered();

        let per_validator: Vec<Violations> = validators
            .checks
            .par_iter()
            .zip(validators.names.par_iter())
            .map(|(check, name)| {
                let found = scan(check.as_ref(), profile, grid);
                debug!(validator = name, violations = found.len(), "Validator finished");
                found
            })
            .collect();

        let mut violations = Violations::new();
        for found in per_validator {
            violations.append(found);
        }
        info!(
            validators = validators.len(),
            violations = violations.len(),
            "Validation finished"
        );
        Ok(violations)
    }
}

fn scan(check: &dyn Validator, profile: &str, grid: &Grid) -> Violations {
    let mut violations = Violations::new();
    for location in grid.locations() {
        violations.append(check.validate(profile, location, grid));
    }
    violations
}
