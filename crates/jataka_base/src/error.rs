//! Error types for jataka base calculations.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from base chart calculations.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum JatakaError {
    /// A sign name/number could not be resolved to a rashi.
    UnknownSign(String),
    /// A planet name could not be resolved to a graha.
    UnknownGraha(String),
    /// An input value is out of range or malformed.
    InvalidInput(&'static str),
}

impl Display for JatakaError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownSign(name) => write!(f, "unknown sign: {name}"),
            Self::UnknownGraha(name) => write!(f, "unknown graha: {name}"),
            Self::InvalidInput(msg) => write!(f, "invalid input: {msg}"),
        }
    }
}

impl Error for JatakaError {}
