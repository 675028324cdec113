//! Error types for chart resolution and analysis.

use std::error::Error;
use std::fmt::{Display, Formatter};

use jataka_base::JatakaError;
use jataka_time::TimeError;

/// Errors from chart-level operations.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum ChartError {
    /// Error from base chart math (unknown sign/graha, bad value).
    Base(JatakaError),
    /// Error from calendar time handling.
    Time(TimeError),
    /// A chart-level input is out of range or malformed.
    InvalidInput(&'static str),
}

impl Display for ChartError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Base(e) => write!(f, "chart error: {e}"),
            Self::Time(e) => write!(f, "time error: {e}"),
            Self::InvalidInput(msg) => write!(f, "invalid input: {msg}"),
        }
    }
}

impl Error for ChartError {}

impl From<JatakaError> for ChartError {
    fn from(e: JatakaError) -> Self {
        Self::Base(e)
    }
}

impl From<TimeError> for ChartError {
    fn from(e: TimeError) -> Self {
        Self::Time(e)
    }
}
