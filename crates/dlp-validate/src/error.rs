//! Error types for rule loading, URL fetching and engine runs.

use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

/// Errors raised while building a [`RuleBook`](crate::RuleBook).
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum RuleBookError {
    /// Rule book file could not be read.
    #[error("Failed to read rule book {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Rule book JSON is malformed.
    #[error("Failed to parse rule book {origin}")]
    Deserialization {
        origin: String,
        #[source]
        source: serde_json::Error,
    },

    /// A field lists both object types to require and object types to exempt.
    #[error("supplied profile has objTypes and notObjTypes set: {profile} (field `{field}`)")]
    ConflictingConditions { profile: String, field: String },
}

/// Failure to open or read a remote document.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum FetchError {
    /// The HTTP client could not be built.
    #[error("Failed to build HTTP client")]
    Client(#[source] reqwest::Error),

    /// No connection, a timeout, or a non-success status.
    #[error("could not connect to {url}")]
    Connect {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The response arrived but its body could not be read.
    #[error("could not read body of {url}")]
    Read {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("request to {url} timed out after {timeout:?}")]
    Timeout { url: String, timeout: Duration },
}

/// Errors that stop a validation run before any cell is inspected.
#[derive(Debug, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum EngineError {
    #[error("unknown profile `{profile}`")]
    UnknownProfile { profile: String },

    #[error("profile `{profile}` resolved to no validators")]
    NoValidators { profile: String },
}

impl EngineError {
    /// Human-facing description suitable for a CLI or a response body.
    pub fn user_message(&self) -> String {
        match self {
            Self::UnknownProfile { profile } => {
                format!("The profile '{profile}' does not exist. Run `profiles list` to see the available profiles.")
            }
            Self::NoValidators { profile } => {
                format!("The profile '{profile}' names no known validations. Run `checks` to see the registered validators.")
            }
        }
    }
}

/// A validator could not be built from the supplied context.
#[derive(Debug, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum ConstructError {
    #[error("validator `{kind}` needs a URL fetcher but none is configured")]
    MissingFetcher { kind: &'static str },
}
