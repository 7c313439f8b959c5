//! Per-profile rule data consulted by the checks.
//!
//! Rule data is kept separate from check code so that adding a profile, or
//! changing which fields it requires, only means editing JSON.

mod book;
mod embedded;
mod required;

pub use book::RuleBook;
pub use embedded::BUILTIN_RULES;
pub use required::{Condition, FieldRule, RequiredFields};
