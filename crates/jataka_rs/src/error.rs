//! Error type for the convenience surface.

use std::error::Error;
use std::fmt::{Display, Formatter};

use jataka_chart::ChartError;
use jataka_time::TimeError;

/// Errors from one-shot kundali analysis.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum KundaliError {
    /// Error from chart resolution, rule evaluation, or dasha computation.
    Chart(ChartError),
    /// Error from birth-profile time handling.
    Time(TimeError),
    /// A request-level input is out of range or malformed.
    InvalidInput(&'static str),
}

impl Display for KundaliError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Chart(e) => write!(f, "{e}"),
            Self::Time(e) => write!(f, "{e}"),
            Self::InvalidInput(msg) => write!(f, "invalid input: {msg}"),
        }
    }
}

impl Error for KundaliError {}

impl From<ChartError> for KundaliError {
    fn from(e: ChartError) -> Self {
        Self::Chart(e)
    }
}

impl From<TimeError> for KundaliError {
    fn from(e: TimeError) -> Self {
        Self::Time(e)
    }
}

impl From<jataka_base::JatakaError> for KundaliError {
    fn from(e: jataka_base::JatakaError) -> Self {
        Self::Chart(ChartError::Base(e))
    }
}
