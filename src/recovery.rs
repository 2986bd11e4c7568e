//! What to do when a record in a batch fails to transcode.
//!
//! A record that fails is always rejected whole; no partial document is ever
//! produced. The recovery mode only decides whether the rest of the batch
//! carries on without it.

use crate::error::{Result, TranscodeError};
use tracing::warn;

/// Strategy for handling records that fail to transcode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RecoveryMode {
    /// Strict mode: the first failing record aborts the batch (default)
    #[default]
    Strict,
    /// Lenient mode: skip failing records and keep going
    Lenient,
}

/// Recovery context for a batch run
#[derive(Debug, Default)]
pub struct RecoveryContext {
    /// Current recovery mode
    pub mode: RecoveryMode,
    /// Records skipped so far, as (index in batch, error message)
    pub skipped: Vec<(usize, String)>,
}

impl RecoveryContext {
    /// Create a new recovery context with the given mode
    #[must_use]
    pub fn new(mode: RecoveryMode) -> Self {
        RecoveryContext {
            mode,
            skipped: Vec::new(),
        }
    }

    /// Whether any record has been skipped
    #[must_use]
    pub fn has_errors(&self) -> bool {
        !self.skipped.is_empty()
    }

    /// Try to recover from a record's error based on the recovery mode
    ///
    /// # Errors
    ///
    /// Returns the error in strict mode, or if it is not local to the record
    /// (I/O). Otherwise records it and returns `Ok(None)`.
    pub fn recover<T>(&mut self, error: TranscodeError, index: usize) -> Result<Option<T>> {
        match self.mode {
            RecoveryMode::Strict => Err(error),
            RecoveryMode::Lenient if !error.is_record_local() => Err(error),
            RecoveryMode::Lenient => {
                warn!(index = index, error = %error, "skipping record");
                self.skipped.push((index, error.to_string()));
                Ok(None)
            },
        }
    }
}
