//! Profile store error types.

use std::path::PathBuf;
use thiserror::Error;

/// Profile store operation error.
#[derive(Debug, Error)]
pub enum ProfileError {
    /// A profile must have a name.
    #[error("profile name cannot be empty")]
    EmptyName,

    /// `refresh` or `save` was called on a store with no file path.
    #[error("no profiles file path is configured")]
    PathNotConfigured,

    /// File I/O error.
    #[error("Failed to {operation} file: {path}")]
    Io {
        operation: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The persisted document is not valid profiles JSON.
    #[error("Failed to decode profiles JSON in {path}")]
    Deserialization {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The in-memory snapshot could not be encoded.
    #[error("Failed to serialize profiles to JSON")]
    Serialization {
        #[source]
        source: serde_json::Error,
    },

    /// The persisted document parsed but holds no profiles.
    #[error("no profiles found in {path}")]
    NoProfiles { path: PathBuf },

    /// No profile is stored under the requested name.
    #[error("profile '{name}' not found")]
    ProfileNotFound { name: String },

    /// Two profiles would carry the same name.
    #[error("profile '{name}' already exists")]
    DuplicateProfile { name: String },

    /// Atomic write failed (temp file couldn't be renamed).
    #[error("Failed to rename temporary file {temp_path} to {target_path}")]
    AtomicWriteFailed {
        temp_path: PathBuf,
        target_path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ProfileError {
    /// Get a suggestion for how to resolve this error.
    pub fn suggestion(&self) -> Option<String> {
        match self {
            Self::PathNotConfigured => {
                Some("Set PROFILES_FILE or pass --profiles-file.".into())
            }
            Self::Io { operation, .. } => {
                if *operation == "read" {
                    Some("Check that the file exists and you have permission to read it.".into())
                } else {
                    Some("Check that you have permission to write to this location.".into())
                }
            }
            Self::Deserialization { .. } | Self::NoProfiles { .. } => {
                Some("Restore the profiles file from a backup or re-create it.".into())
            }
            Self::AtomicWriteFailed { .. } => {
                Some("Free up disk space or check the target directory's permissions.".into())
            }
            Self::ProfileNotFound { .. } => {
                Some("Run `profiles list` to see the stored profile names.".into())
            }
            Self::EmptyName | Self::Serialization { .. } | Self::DuplicateProfile { .. } => None,
        }
    }
}

/// Result type alias for profile store operations.
pub type Result<T> = std::result::Result<T, ProfileError>;
