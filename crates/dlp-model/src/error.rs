//! Location-tagged validation errors.
//!
//! Every rule violation is a [`GridError`] carrying the message, the cell it
//! was found at and the profile that was being applied. A validation run never
//! stops at the first problem: errors are gathered into [`Violations`].

use std::error::Error as StdError;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use crate::location::Location;

type Cause = Arc<dyn StdError + Send + Sync + 'static>;

/// A validation error tied to a grid cell and a profile.
///
/// Two errors are equal when their message, location and profile match; the
/// wrapped cause does not take part in equality.
#[derive(Debug, Clone)]
pub struct GridError {
    message: String,
    location: Location,
    profile: String,
    cause: Option<Cause>,
}

impl GridError {
    /// Create an error without a cause.
    pub fn new(message: impl Into<String>, location: Location, profile: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            location,
            profile: profile.into(),
            cause: None,
        }
    }

    /// Attach an underlying cause.
    #[must_use]
    pub fn with_cause<E>(mut self, cause: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        self.cause = Some(Arc::new(cause));
        self
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn location(&self) -> Location {
        self.location
    }

    pub fn profile(&self) -> &str {
        &self.profile
    }

    /// The wrapped cause, if any.
    pub fn cause(&self) -> Option<&(dyn StdError + Send + Sync + 'static)> {
        self.cause.as_deref()
    }

    /// Rendering for people reading a report: no location or profile, the
    /// cause chain reduced to its messages.
    pub fn user_message(&self) -> String {
        match self.cause_text() {
            Some(cause) => format!("Error: {} [Cause: {}]", self.message, cause),
            None => format!("Error: {}", self.message),
        }
    }

    /// Cause text with nested location and profile labels dropped, since the
    /// outer error already states them.
    fn cause_text(&self) -> Option<String> {
        let cause = self.cause.as_deref()?;
        match cause.downcast_ref::<GridError>() {
            Some(inner) => Some(match inner.cause_text() {
                Some(nested) => format!("{} Cause: {}", inner.message, nested),
                None => inner.message.clone(),
            }),
            None => Some(cause.to_string()),
        }
    }
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Error: {} {} [profile: {}]",
            self.message, self.location, self.profile
        )?;
        if let Some(cause) = self.cause_text() {
            write!(f, " Cause: {cause}")?;
        }
        Ok(())
    }
}

impl StdError for GridError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.cause
            .as_deref()
            .map(|cause| cause as &(dyn StdError + 'static))
    }
}

impl PartialEq for GridError {
    fn eq(&self, other: &Self) -> bool {
        self.message == other.message
            && self.location == other.location
            && self.profile == other.profile
    }
}

impl Eq for GridError {}

impl Hash for GridError {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.message.hash(state);
        self.location.hash(state);
        self.profile.hash(state);
    }
}

/// Every violation found by one or more validators, in the order reported.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Violations {
    errors: Vec<GridError>,
}

impl Violations {
    pub fn new() -> Self {
        Self { errors: Vec::new() }
    }

    pub fn push(&mut self, error: GridError) {
        self.errors.push(error);
    }

    /// Move every violation from `other` into `self`.
    pub fn append(&mut self, other: Violations) {
        self.errors.extend(other.errors);
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, GridError> {
        self.errors.iter()
    }

    pub fn first(&self) -> Option<&GridError> {
        self.errors.first()
    }

    pub fn as_slice(&self) -> &[GridError] {
        &self.errors
    }

    pub fn into_vec(self) -> Vec<GridError> {
        self.errors
    }

    /// `Ok(())` when nothing was found.
    pub fn into_result(self) -> Result<(), Violations> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl From<GridError> for Violations {
    fn from(error: GridError) -> Self {
        Self {
            errors: vec![error],
        }
    }
}

impl From<Vec<GridError>> for Violations {
    fn from(errors: Vec<GridError>) -> Self {
        Self { errors }
    }
}

impl FromIterator<GridError> for Violations {
    fn from_iter<I: IntoIterator<Item = GridError>>(iter: I) -> Self {
        Self {
            errors: iter.into_iter().collect(),
        }
    }
}

impl Extend<GridError> for Violations {
    fn extend<I: IntoIterator<Item = GridError>>(&mut self, iter: I) {
        self.errors.extend(iter);
    }
}

impl IntoIterator for Violations {
    type Item = GridError;
    type IntoIter = std::vec::IntoIter<GridError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.into_iter()
    }
}

impl<'a> IntoIterator for &'a Violations {
    type Item = &'a GridError;
    type IntoIter = std::slice::Iter<'a, GridError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.iter()
    }
}

impl fmt::Display for Violations {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, error) in self.errors.iter().enumerate() {
            if index > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{error}")?;
        }
        Ok(())
    }
}

impl StdError for Violations {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equality_ignores_cause() {
        let location = Location::new(1, 2);
        let plain = GridError::new("bad value", location, "default");
        let wrapped = GridError::new("bad value", location, "default")
            .with_cause(std::io::Error::other("disk"));

        assert_eq!(plain, wrapped);
        assert_ne!(plain, GridError::new("bad value", location, "test"));
        assert_ne!(plain, GridError::new("bad value", Location::new(2, 2), "default"));
    }

    #[test]
    fn test_source_exposes_cause() {
        let inner = GridError::new("row 9 is out of bounds", Location::new(9, 0), "default");
        let outer = GridError::new("lookup failed", Location::new(9, 0), "default")
            .with_cause(inner.clone());

        let source = outer.source().expect("cause");
        assert_eq!(source.downcast_ref::<GridError>(), Some(&inner));
    }

    #[test]
    fn test_nested_location_is_stripped_from_cause() {
        let location = Location::new(1, 0);
        let inner = GridError::new("header 'Object Type' not found", location, "default");
        let outer = GridError::new("could not retrieve header", location, "default")
            .with_cause(inner);

        insta::assert_snapshot!(
            outer.to_string(),
            @"Error: could not retrieve header (Row: 1, Col: 0) [profile: default] Cause: header 'Object Type' not found"
        );
        insta::assert_snapshot!(
            outer.user_message(),
            @"Error: could not retrieve header [Cause: header 'Object Type' not found]"
        );
    }

    #[test]
    fn test_violations_into_result() {
        assert!(Violations::new().into_result().is_ok());

        let mut violations = Violations::new();
        violations.push(GridError::new("one", Location::new(1, 1), "p"));
        violations.extend([GridError::new("two", Location::new(2, 1), "p")]);
        let err = violations.into_result().unwrap_err();
        assert_eq!(err.len(), 2);
        assert_eq!(
            err.to_string(),
            "Error: one (Row: 1, Col: 1) [profile: p]; Error: two (Row: 2, Col: 1) [profile: p]"
        );
    }
}
