//! Crate-level error type
//!
//! Attribute assignment fails immediately with one of the validation variants
//! and leaves the entity untouched. Lower layers (RDF terms, parsing,
//! serialization, JSON) convert through `#[from]`.

use crate::rdf::{ParseError, RdfError, SerializeError, UnknownFormat};
use thiserror::Error;

/// Which endpoint of a period was assigned when an interval check failed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntervalEndpoint {
    /// `start_date` was set last
    Start,
    /// `end_date` was set last
    End,
}

impl std::fmt::Display for IntervalEndpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IntervalEndpoint::Start => write!(f, "start_date"),
            IntervalEndpoint::End => write!(f, "end_date"),
        }
    }
}

/// Errors raised while building or rendering catalog entities
#[derive(Error, Debug)]
pub enum DcatError {
    /// Malformed URI
    #[error("Invalid URI {value:?}: {message}")]
    InvalidUri { value: String, message: String },

    /// Malformed calendar date
    #[error("Invalid date {value:?}: {message}")]
    InvalidDate { value: String, message: String },

    /// Start date after end date
    #[error("Invalid date interval [{start_date}, {end_date}] while setting {set_last}: {message}")]
    InvalidDateInterval {
        start_date: String,
        end_date: String,
        set_last: IntervalEndpoint,
        message: String,
    },

    /// Unknown serialization format name
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    /// Unknown output encoding
    #[error("Unsupported encoding: {0}")]
    UnsupportedEncoding(String),

    /// JSON document does not describe the expected entity
    #[error("Invalid JSON document: {0}")]
    InvalidDocument(String),

    /// RDF term error
    #[error("RDF error: {0}")]
    Rdf(#[from] RdfError),

    /// Serialization error
    #[error(transparent)]
    Serialize(#[from] SerializeError),

    /// Parse error
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// JSON error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type DcatResult<T> = Result<T, DcatError>;

impl From<UnknownFormat> for DcatError {
    fn from(e: UnknownFormat) -> Self {
        DcatError::UnsupportedFormat(e.0)
    }
}

impl DcatError {
    /// True for the three assignment-time validation failures
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            DcatError::InvalidUri { .. }
                | DcatError::InvalidDate { .. }
                | DcatError::InvalidDateInterval { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interval_message_names_endpoint() {
        let err = DcatError::InvalidDateInterval {
            start_date: "2020-04-07".to_string(),
            end_date: "2020-04-06".to_string(),
            set_last: IntervalEndpoint::End,
            message: "start date must not be after end date".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("end_date"));
        assert!(msg.contains("2020-04-07"));
        assert!(err.is_validation());
    }

    #[test]
    fn test_format_error_is_not_validation() {
        assert!(!DcatError::UnsupportedFormat("n3".into()).is_validation());
    }
}
