// Errors and warnings raised while handling date-range input
use chrono::NaiveDate;
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DashboardError {
    #[error("invalid {field} date {value:?}, expected YYYY-MM-DD")]
    InvalidDate { field: &'static str, value: String },

    #[error("missing {field} date, both from and to are required")]
    MissingDate { field: &'static str },
}

impl DashboardError {
    pub fn code(&self) -> &'static str {
        match self {
            DashboardError::InvalidDate { .. } => "invalid_date",
            DashboardError::MissingDate { .. } => "missing_date",
        }
    }
}

/// Non-fatal findings about an accepted range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum RangeWarning {
    /// `to` is earlier than `from`. The summary is still computed.
    InvertedRange { from: NaiveDate, to: NaiveDate },
}
