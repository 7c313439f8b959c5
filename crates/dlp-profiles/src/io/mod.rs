//! File I/O for the profile store.
//!
//! This module handles:
//! - Saving snapshots with atomic writes
//! - Loading snapshots with content validation

mod load;
mod save;

pub(crate) use load::load_profiles;
pub(crate) use save::save_profiles;
