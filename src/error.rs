//! Crate-wide error type.
//!
//! The core algorithms (parser, conflict detector, generator) never fail:
//! they return `Option`, `bool`, or a possibly empty list. Errors only
//! arise at data boundaries: building a [`Time`](crate::models::Time),
//! ingesting catalog JSON, decoding persisted records, and loading
//! generator configuration.

use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors produced at the crate's data boundaries.
#[derive(Debug, Error)]
pub enum Error {
    /// Hour or minute outside 0–23 / 0–59.
    #[error("Invalid time {hour}:{minute:02}")]
    InvalidTime { hour: u32, minute: u32 },

    /// A section with meeting days whose start is not before its end.
    #[error("Section {class_number} of {code} ends ({end}) before it starts ({start})")]
    InvertedTimeRange {
        code: String,
        class_number: String,
        start: String,
        end: String,
    },

    /// A catalog document that cannot be turned into course records.
    #[error("Catalog document {document}: {message}")]
    Catalog { document: String, message: String },

    /// A persisted course record that cannot be decoded.
    #[error("Malformed course record: {message}")]
    Record { message: String },

    /// JSON (de)serialization failure.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generator configuration rejected by validation.
    #[error("Invalid generator configuration: {message}")]
    Config { message: String },
}

impl Error {
    /// Returns true if the error describes malformed input data rather
    /// than a configuration mistake.
    pub fn is_data_error(&self) -> bool {
        !matches!(self, Error::Config { .. })
    }

    pub(crate) fn record(message: impl Into<String>) -> Self {
        Error::Record {
            message: message.into(),
        }
    }

    pub(crate) fn config(message: impl Into<String>) -> Self {
        Error::Config {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let e = Error::InvalidTime {
            hour: 25,
            minute: 3,
        };
        assert_eq!(e.to_string(), "Invalid time 25:03");

        let e = Error::config("max_results must be positive");
        assert!(e.to_string().contains("max_results"));
    }

    #[test]
    fn test_is_data_error() {
        assert!(Error::record("bad day").is_data_error());
        assert!(!Error::config("nope").is_data_error());

        let json_err = serde_json::from_str::<u32>("not json").unwrap_err();
        assert!(Error::from(json_err).is_data_error());
    }
}
