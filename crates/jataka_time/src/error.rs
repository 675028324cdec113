//! Error types for calendar time handling.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from calendar validation and parsing.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum TimeError {
    /// A calendar field is out of range (month, day, hour, ...).
    InvalidDate(&'static str),
    /// A date/time string does not match the expected format.
    InvalidFormat(&'static str),
}

impl Display for TimeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidDate(msg) => write!(f, "invalid date: {msg}"),
            Self::InvalidFormat(msg) => write!(f, "invalid format: {msg}"),
        }
    }
}

impl Error for TimeError {}
