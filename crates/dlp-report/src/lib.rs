//! Reports for the people who submitted a grid.
//!
//! A [`Report`] flattens the [`Violations`](dlp_model::Violations) of a run
//! into [`Warning`]s that name the offending header and value, ready to be
//! serialized for whatever presents them.

mod report;

pub use report::{Report, ReportError, Warning, serialize_report};
