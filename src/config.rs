//! Configuration options for transcoding.
//!
//! This module provides the [`TranscoderConfig`] struct, which controls what
//! is reported through the diagnostics channel and how batch drivers react to
//! records that fail. None of these options change the documents produced.

use crate::recovery::RecoveryMode;

/// Configuration for a [`Transcoder`](crate::Transcoder).
///
/// # Examples
///
/// ```
/// use debsrc::{RecoveryMode, TranscoderConfig};
///
/// // Default configuration: report everything, abort a batch on the first bad record
/// let config = TranscoderConfig::default();
/// assert_eq!(config.recovery_mode, RecoveryMode::Strict);
///
/// // Quiet, skipping configuration
/// let config = TranscoderConfig::default()
///     .with_report_unconsumed(false)
///     .with_recovery_mode(RecoveryMode::Lenient);
/// assert!(!config.report_unconsumed);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranscoderConfig {
    /// Emit a warning event for fields no step consumed.
    ///
    /// The names are returned in [`Diagnostics`](crate::Diagnostics) either way.
    pub report_unconsumed: bool,

    /// Emit a debug event for checksum algorithms that were left out of a
    /// file descriptor.
    pub report_dropped_checksums: bool,

    /// What batch drivers do with a record that fails to transcode.
    pub recovery_mode: RecoveryMode,
}

impl Default for TranscoderConfig {
    fn default() -> Self {
        Self {
            report_unconsumed: true,
            report_dropped_checksums: true,
            recovery_mode: RecoveryMode::Strict,
        }
    }
}

impl TranscoderConfig {
    /// Set whether unconsumed fields are logged
    #[must_use]
    pub fn with_report_unconsumed(mut self, report: bool) -> Self {
        self.report_unconsumed = report;
        self
    }

    /// Set whether dropped checksum algorithms are logged
    #[must_use]
    pub fn with_report_dropped_checksums(mut self, report: bool) -> Self {
        self.report_dropped_checksums = report;
        self
    }

    /// Set the batch recovery mode
    #[must_use]
    pub fn with_recovery_mode(mut self, mode: RecoveryMode) -> Self {
        self.recovery_mode = mode;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = TranscoderConfig::default();
        assert!(config.report_unconsumed);
        assert!(config.report_dropped_checksums);
        assert_eq!(config.recovery_mode, RecoveryMode::Strict);
    }

    #[test]
    fn test_setters() {
        let config = TranscoderConfig::default()
            .with_report_dropped_checksums(false)
            .with_recovery_mode(RecoveryMode::Lenient);
        assert!(!config.report_dropped_checksums);
        assert!(config.report_unconsumed);
        assert_eq!(config.recovery_mode, RecoveryMode::Lenient);
    }
}
