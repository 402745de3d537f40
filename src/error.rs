// src/error.rs
use thiserror::Error;

use crate::data::{Person, Side};

/// Fatal conditions raised while scanning page text.
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("statistics page has no extractable text")]
    NoStatisticsText,

    #[error("{0} team name not found on statistics page")]
    MissingTeamName(Side),

    /// The report uses an action keyword we have no mapping for; most likely a
    /// different report template.
    #[error("unknown action `{keyword}` in line: {line}")]
    UnknownAction { keyword: String, line: String },
}

/// Errors surfaced by report building and report queries.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error(transparent)]
    Scan(#[from] ScanError),

    /// Page-text provider failure, passed through unchanged.
    #[error(transparent)]
    Source(Box<dyn std::error::Error + Send + Sync>),

    #[error("unknown person in report: {0}")]
    UnknownPerson(Person),

    #[error("unknown team in report: {0}")]
    UnknownTeam(String),
}

impl ReportError {
    pub fn from_source<E>(err: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        ReportError::Source(Box::new(err))
    }
}
