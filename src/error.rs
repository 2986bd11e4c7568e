//! Error types for record transcoding.
//!
//! This module provides the [`TranscodeError`] type for all library operations
//! and the [`Result`] convenience type.
//!
//! Fields left over after a record has been assembled are *not* an error; they
//! are reported through [`Diagnostics`](crate::transcoder::Diagnostics).

use thiserror::Error;

/// Error type for all transcoding operations.
///
/// Every variant except [`TranscodeError::IoError`] is local to a single
/// record: the record is rejected and no partial document is produced.
#[derive(Error, Debug)]
pub enum TranscodeError {
    /// A mandatory field is absent from the record.
    #[error("mandatory field {0:?} is missing")]
    MissingField(String),

    /// A field carries a value outside its closed set of recognized tokens.
    #[error("unrecognised {field} value: {token:?}")]
    UnrecognizedEnumValue {
        /// Name of the field (or vocabulary) being mapped
        field: &'static str,
        /// The offending token, verbatim
        token: String,
    },

    /// A `Package-List` line has fewer than four columns.
    #[error("failed to parse Package-List entry: {0:?}")]
    MalformedPackageListEntry(String),

    /// Control text could not be tokenized into fields, or an accessor
    /// table (such as `Files`) is malformed.
    #[error("malformed control data: {0}")]
    MalformedControlData(String),

    /// A document could not be encoded by an emission format.
    #[error("encode error: {0}")]
    Encode(String),

    /// A document could not be decoded by an emission format.
    #[error("decode error: {0}")]
    Decode(String),

    /// IO error from the underlying source/destination.
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl TranscodeError {
    /// Whether the failure is confined to the record being processed.
    ///
    /// Batch drivers running in lenient mode skip such records and carry on;
    /// anything else (I/O) aborts the whole run.
    #[must_use]
    pub fn is_record_local(&self) -> bool {
        !matches!(self, TranscodeError::IoError(_))
    }
}

/// Convenience type alias for [`std::result::Result`] with [`TranscodeError`].
pub type Result<T> = std::result::Result<T, TranscodeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_field() {
        let err = TranscodeError::MissingField("Directory".to_string());
        assert_eq!(err.to_string(), "mandatory field \"Directory\" is missing");

        let err = TranscodeError::UnrecognizedEnumValue {
            field: "Priority",
            token: "urgent".to_string(),
        };
        assert_eq!(err.to_string(), "unrecognised Priority value: \"urgent\"");
    }

    #[test]
    fn test_record_local() {
        assert!(TranscodeError::MalformedPackageListEntry("a b".into()).is_record_local());
        let io = std::io::Error::new(std::io::ErrorKind::Other, "disk gone");
        assert!(!TranscodeError::from(io).is_record_local());
    }
}
