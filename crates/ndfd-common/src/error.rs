//! Error types for NDFD forecast extraction.

use thiserror::Error;

/// Result type alias using NdfdError.
pub type NdfdResult<T> = Result<T, NdfdError>;

/// Coarse classification of an [`NdfdError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The document (or a value inside it) is not well formed.
    Parse,
    /// A referenced key, element or attribute is absent.
    Lookup,
    /// A value list does not match its time-layout.
    LengthMismatch,
    /// The caller supplied an unusable request or configuration.
    InvalidInput,
}

/// Primary error type for forecast extraction.
#[derive(Debug, Error)]
pub enum NdfdError {
    // === Parse Errors ===
    #[error("Malformed XML: {0}")]
    MalformedXml(String),

    #[error("Duplicate location key: {0}")]
    DuplicateLocation(String),

    #[error("Invalid time value: {0}")]
    InvalidTime(String),

    #[error("Invalid coordinate: {0}")]
    InvalidCoordinate(String),

    #[error("Invalid zone forecast: {0}")]
    InvalidZoneForecast(String),

    #[error("Time layout '{layout}' has a {hours}-hour range, beyond the {max_hours}-hour limit")]
    RangeTooLong {
        layout: String,
        hours: i64,
        max_hours: i64,
    },

    // === Lookup Errors ===
    #[error("Unknown location key: {0}")]
    UnknownLocation(String),

    #[error("Location '{0}' has no parameters block")]
    NoParameters(String),

    #[error("Parameter '{name}' not found for location '{location}'")]
    ParameterNotFound { name: String, location: String },

    #[error("Time layout not found: {0}")]
    TimeLayoutNotFound(String),

    #[error("Missing element <{element}> in <{parent}>")]
    MissingElement { element: String, parent: String },

    #[error("Missing attribute '{attribute}' on <{element}>")]
    MissingAttribute { attribute: String, element: String },

    #[error("Unknown parameter code: {0}")]
    UnknownParameterCode(String),

    // === Alignment Errors ===
    #[error("Time layout '{layout}' has {intervals} intervals but {values} values were supplied")]
    LengthMismatch {
        layout: String,
        intervals: usize,
        values: usize,
    },

    // === Caller Errors ===
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

impl NdfdError {
    /// Get the coarse kind of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            NdfdError::MalformedXml(_)
            | NdfdError::DuplicateLocation(_)
            | NdfdError::InvalidTime(_)
            | NdfdError::InvalidCoordinate(_)
            | NdfdError::InvalidZoneForecast(_)
            | NdfdError::RangeTooLong { .. } => ErrorKind::Parse,

            NdfdError::UnknownLocation(_)
            | NdfdError::NoParameters(_)
            | NdfdError::ParameterNotFound { .. }
            | NdfdError::TimeLayoutNotFound(_)
            | NdfdError::MissingElement { .. }
            | NdfdError::MissingAttribute { .. }
            | NdfdError::UnknownParameterCode(_) => ErrorKind::Lookup,

            NdfdError::LengthMismatch { .. } => ErrorKind::LengthMismatch,

            NdfdError::InvalidConfig(_) | NdfdError::InvalidRequest(_) => ErrorKind::InvalidInput,
        }
    }

    pub fn missing_element(element: impl Into<String>, parent: impl Into<String>) -> Self {
        NdfdError::MissingElement {
            element: element.into(),
            parent: parent.into(),
        }
    }

    pub fn missing_attribute(attribute: impl Into<String>, element: impl Into<String>) -> Self {
        NdfdError::MissingAttribute {
            attribute: attribute.into(),
            element: element.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kinds() {
        assert_eq!(NdfdError::MalformedXml("eof".into()).kind(), ErrorKind::Parse);
        assert_eq!(NdfdError::UnknownLocation("point9".into()).kind(), ErrorKind::Lookup);
        assert_eq!(NdfdError::NoParameters("point2".into()).kind(), ErrorKind::Lookup);
        assert_eq!(
            NdfdError::RangeTooLong { layout: "k-p12h-n2-1".into(), hours: 9000, max_hours: 8784 }.kind(),
            ErrorKind::Parse
        );
        assert_eq!(
            NdfdError::LengthMismatch { layout: "k-p24h-n7-1".into(), intervals: 7, values: 6 }.kind(),
            ErrorKind::LengthMismatch
        );
        assert_eq!(NdfdError::InvalidRequest("no params".into()).kind(), ErrorKind::InvalidInput);
    }

    #[test]
    fn test_length_mismatch_message() {
        let err = NdfdError::LengthMismatch {
            layout: "k-p12h-n14-2".into(),
            intervals: 14,
            values: 13,
        };
        assert_eq!(
            err.to_string(),
            "Time layout 'k-p12h-n14-2' has 14 intervals but 13 values were supplied"
        );
    }
}
