//! Embedded rule data.
//!
//! The built-in rule book is compiled in with `include_str!()` so the
//! binary works without a rules file on disk.

/// Built-in rule book JSON.
pub const BUILTIN_RULES: &str = include_str!("../../data/rules.json");
