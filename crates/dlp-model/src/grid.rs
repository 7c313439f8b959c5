//! The submitted cell matrix and its bounds-checked accessors.
//!
//! No accessor panics: an address outside the grid comes back as a
//! [`GridError`] so it can be reported alongside rule violations.

use crate::error::GridError;
use crate::location::Location;

/// Rows of string cells; row 0 holds the field names.
///
/// Rows are not required to have equal lengths. Bounds are always checked
/// against the addressed row.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Grid {
    rows: Vec<Vec<String>>,
}

impl Grid {
    pub fn new(rows: Vec<Vec<String>>) -> Self {
        Self { rows }
    }

    /// Build a grid from anything string-like, mostly for tests and fixtures.
    pub fn from_rows<R, C, S>(rows: R) -> Self
    where
        R: IntoIterator<Item = C>,
        C: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            rows: rows
                .into_iter()
                .map(|row| row.into_iter().map(Into::into).collect())
                .collect(),
        }
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// The header row, or an empty slice for an empty grid.
    pub fn headers(&self) -> &[String] {
        self.rows.first().map(Vec::as_slice).unwrap_or(&[])
    }

    /// Every addressable cell in row-major order.
    pub fn locations(&self) -> impl Iterator<Item = Location> + '_ {
        self.rows.iter().enumerate().flat_map(|(row, cells)| {
            (0..cells.len()).map(move |col| Location::new(row, col))
        })
    }

    /// Confirm that `location` addresses a cell.
    pub fn check(&self, location: Location, profile: &str) -> Result<(), GridError> {
        let Some(row) = self.rows.get(location.row) else {
            return Err(GridError::new(
                format!("row {} is out of bounds", location.row),
                location,
                profile,
            ));
        };
        if location.col >= row.len() {
            return Err(GridError::new(
                format!("column {} is out of bounds", location.col),
                location,
                profile,
            ));
        }
        Ok(())
    }

    /// The raw value at `location`.
    pub fn cell(&self, location: Location, profile: &str) -> Result<&str, GridError> {
        self.check(location, profile)?;
        Ok(self.rows[location.row][location.col].as_str())
    }

    /// The header name for the column of `location`.
    pub fn header(&self, location: Location, profile: &str) -> Result<&str, GridError> {
        self.check(location, profile)?;
        let headers = self.headers();
        if headers.is_empty() {
            return Err(GridError::new(
                "the first row of the grid is empty",
                location,
                profile,
            ));
        }
        headers
            .get(location.col)
            .map(String::as_str)
            .ok_or_else(|| {
                GridError::new(
                    format!("column {} has no header", location.col),
                    location,
                    profile,
                )
            })
    }

    /// The column index of `header` in the header row.
    pub fn header_index(
        &self,
        header: &str,
        location: Location,
        profile: &str,
    ) -> Result<usize, GridError> {
        self.check(location, profile)?;
        self.headers()
            .iter()
            .position(|name| name == header)
            .ok_or_else(|| {
                GridError::new(
                    format!("supplied header '{header}' was not located in first row"),
                    location,
                    profile,
                )
            })
    }

    /// The value of column `header` in the row of `location`.
    pub fn row_value(
        &self,
        header: &str,
        location: Location,
        profile: &str,
    ) -> Result<&str, GridError> {
        let col = self
            .header_index(header, location, profile)
            .map_err(|err| {
                GridError::new(
                    format!("conditional field '{header}' was not found"),
                    location,
                    profile,
                )
                .with_cause(err)
            })?;
        self.cell(location.with_col(col), profile)
    }
}

impl From<Vec<Vec<String>>> for Grid {
    fn from(rows: Vec<Vec<String>>) -> Self {
        Self::new(rows)
    }
}
