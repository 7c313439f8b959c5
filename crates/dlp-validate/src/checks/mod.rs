//! Concrete validators, one per rule.
//!
//! Every check bounds-checks its location first. Apart from [`EolCheck`],
//! [`UnicodeCheck`] and the header-presence pass of [`ReqFieldCheck`],
//! checks only look at data rows.

mod ark;
mod eol;
mod file_name;
mod file_path;
mod item_seq;
mod license;
mod media;
mod required;
mod unicode;
mod vocabulary;

use std::sync::{Mutex, MutexGuard, PoisonError};

use dlp_model::{Grid, GridError, Location};

pub use ark::ArkCheck;
pub use eol::EolCheck;
pub use file_name::FileNameCheck;
pub use file_path::FilePathCheck;
pub use item_seq::ItemSeqCheck;
pub use license::LicenseCheck;
pub use media::{MEDIA_FIELDS, MEDIA_TYPES, MediaMetaCheck};
pub use required::ReqFieldCheck;
pub use unicode::UnicodeCheck;
pub use vocabulary::{OBJECT_TYPES, VISIBILITIES, VocabularyCheck};

pub const ITEM_ARK: &str = "Item ARK";
pub const PARENT_ARK: &str = "Parent ARK";
pub const OBJECT_TYPE: &str = "Object Type";
pub const VISIBILITY: &str = "Visibility";
pub const ITEM_SEQUENCE: &str = "Item Sequence";
pub const FILE_NAME: &str = "File Name";
pub const LICENSE: &str = "License";
pub const RESOURCE_TYPE: &str = "Type.typeOfResource";

/// The value at `location` if it is a data cell under one of `headers`.
///
/// A cell past the end of the header row has no header and so belongs to
/// no field.
pub(crate) fn data_cell<'g>(
    grid: &'g Grid,
    location: Location,
    profile: &str,
    headers: &[&str],
) -> Result<Option<&'g str>, GridError> {
    let value = grid.cell(location, profile)?;
    if location.is_header_row() {
        return Ok(None);
    }
    let applies = grid
        .headers()
        .get(location.col)
        .is_some_and(|header| headers.contains(&header.as_str()));
    Ok(applies.then_some(value))
}

pub(crate) fn has_whitespace(value: &str) -> bool {
    value.chars().any(char::is_whitespace)
}

// Memo updates are single inserts, so a poisoned memo is still usable.
pub(crate) fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}
