//! Validation of metadata grids against named profiles.
//!
//! A [`Validator`] inspects one cell at a time and self-filters by header
//! name, so the [`Engine`] can offer every cell to every validator without
//! knowing which fields a rule cares about.
//!
//! The available rules form a closed set, [`ValidatorKind`]. The
//! [`Registry`] turns a profile's validation names into fresh validator
//! instances for each run, so memoized per-run state never leaks between
//! runs.
//!
//! Per-profile data that rules consult (required-field tables, NAAN
//! allow-lists, media rules) lives in a [`RuleBook`] rather than in code.

pub mod checks;
mod context;
mod engine;
mod error;
mod fetch;
pub mod messages;
mod registry;
pub mod rules;
mod validator;

pub use context::ValidatorContext;
pub use engine::Engine;
pub use error::{ConstructError, EngineError, FetchError, RuleBookError};
pub use fetch::{DEFAULT_URL_TIMEOUT, FetchOutcome, HttpFetcher, UrlFetcher};
pub use registry::{Registry, ValidatorKind, Validators};
pub use rules::{Condition, FieldRule, RequiredFields, RuleBook};
pub use validator::Validator;
