//! Core value types for validating tabular metadata submissions.
//!
//! A submission is a [`Grid`] of string cells where row 0 holds the field
//! names. Validators address single cells through a [`Location`] and report
//! problems as [`GridError`]s, which are collected into [`Violations`].
//!
//! # Module Organization
//!
//! - [`location`]: the `(row, col)` cursor
//! - [`grid`]: the cell matrix and its bounds-checked accessors
//! - [`error`]: location-tagged errors and the collect-all aggregate

pub mod error;
pub mod grid;
pub mod location;

pub use error::{GridError, Violations};
pub use grid::Grid;
pub use location::Location;
