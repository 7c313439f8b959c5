//! Validation profiles and their persisted store.
//!
//! A [`Profile`] names an ordered set of [`Validation`]s to apply to a grid.
//! [`Profiles`] holds every profile known to the process and can be written
//! to and reloaded from a JSON document.
//!
//! # Features
//!
//! - **Reader/writer locking** on the store and on each profile
//! - **Deep snapshots** for serialization, never live references
//! - **Atomic writes** (temp file + rename) so a crash cannot corrupt the file
//! - **All-or-nothing refresh** that leaves the store untouched on error
//!
//! # File Format
//!
//! ```text
//! {
//!   "profiles": {
//!     "default": {
//!       "name": "default",
//!       "lastUpdate": "2024-01-01T00:00:00Z",
//!       "validations": [{ "name": "EOLCheck", "description": "..." }]
//!     }
//!   },
//!   "lastUpdate": "2024-01-01T00:00:00Z"
//! }
//! ```
//!
//! # Example
//!
//! ```ignore
//! use dlp_profiles::{Profile, Profiles, Validation};
//!
//! let profiles = Profiles::with_path("profiles.json");
//! let profile = Profile::new("default", vec![Validation::new("EOLCheck", "No line breaks")])?;
//! profiles.set_profile(profile)?;
//! profiles.save()?;
//! ```

mod error;
mod io;
mod lock;
mod profile;
mod snapshot;
mod store;

pub use error::{ProfileError, Result};
pub use profile::{Profile, Validation};
pub use snapshot::{ProfileSnapshot, ProfilesSnapshot};
pub use store::Profiles;
