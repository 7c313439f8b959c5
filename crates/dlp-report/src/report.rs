use chrono::{DateTime, Utc};
use dlp_model::{Grid, GridError, Violations};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::error;

/// Failure to render a report.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("Failed to serialize report")]
    Serialization(#[source] serde_json::Error),
}

/// One violation as shown to a submitter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Warning {
    pub message: String,
    pub header: String,
    pub column: usize,
    pub row: usize,
    pub value: String,
}

impl Warning {
    /// Describe `violation` using the grid it was found in.
    ///
    /// A header that cannot be resolved is logged and left empty.
    pub fn from_violation(violation: &GridError, grid: &Grid) -> Self {
        let location = violation.location();
        let header = match grid.header(location, violation.profile()) {
            Ok(header) => header.to_owned(),
            Err(err) => {
                error!(%location, error = %err, "Could not resolve header for report warning");
                String::new()
            }
        };
        let value = grid
            .cell(location, violation.profile())
            .unwrap_or_default()
            .replace('\n', "\\n");

        Self {
            message: violation.user_message().replace('\n', "<br/>"),
            header,
            column: location.col,
            row: location.row,
            value,
        }
    }
}

/// Every warning from one validation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    pub profile: String,
    pub time: DateTime<Utc>,
    pub warnings: Vec<Warning>,
}

impl Report {
    /// Build a report stamped with the current time.
    pub fn new(violations: &Violations, grid: &Grid) -> Self {
        Self::at(violations, grid, Utc::now())
    }

    /// Build a report stamped with `time`.
    pub fn at(violations: &Violations, grid: &Grid, time: DateTime<Utc>) -> Self {
        let profile = violations
            .first()
            .map(|violation| violation.profile().to_owned())
            .unwrap_or_default();
        let warnings = violations
            .iter()
            .map(|violation| Warning::from_violation(violation, grid))
            .collect();

        Self {
            profile,
            time,
            warnings,
        }
    }

    pub fn len(&self) -> usize {
        self.warnings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.warnings.is_empty()
    }
}

/// Render `report` as indented JSON.
pub fn serialize_report(report: &Report) -> Result<String, ReportError> {
    serde_json::to_string_pretty(report).map_err(ReportError::Serialization)
}
