//! Error types for instant parsing and time-scale conversions.

use thiserror::Error;

/// Errors from instant parsing or time-scale conversion.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum TimeError {
    /// The text could not be parsed as an RFC 3339 instant.
    #[error("malformed instant '{input}': {reason}")]
    Malformed { input: String, reason: String },
    /// The text parsed as a date-time but carried no UTC offset.
    #[error("instant '{0}' has no UTC offset; supply 'Z' or '+hh:mm'")]
    MissingOffset(String),
}
