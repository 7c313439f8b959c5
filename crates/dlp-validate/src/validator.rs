//! The per-cell validation contract.

use dlp_model::{Grid, Location, Violations};

/// One rule, offered every cell of a grid.
///
/// Implementations return an empty [`Violations`] when the cell is valid or
/// when its header is not one the rule inspects. An address outside the grid
/// is reported as a violation, never a panic.
///
/// Validators may be driven from several threads at once; memoized state
/// has to sit behind a lock.
pub trait Validator: Send + Sync {
    fn validate(&self, profile: &str, location: Location, grid: &Grid) -> Violations;
}
