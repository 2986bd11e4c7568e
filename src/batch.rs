//! Transcoding many records, sequentially or in parallel with Rayon.
//!
//! Records are independent, so the parallel driver simply maps
//! [`Transcoder::transcode`] over Rayon's work-stealing pool. Both drivers
//! apply the transcoder's [`RecoveryMode`] to the results in input order,
//! so they return identical outcomes for the same input.
//!
//! # Examples
//!
//! ```
//! use debsrc::batch::transcode_batch_parallel;
//! use debsrc::{RawRecord, RecoveryMode, Transcoder, TranscoderConfig};
//!
//! let good = RawRecord::new("hello", "2.10-3")
//!     .field("Directory", "pool/main/h/hello")
//!     .field("Section", "devel")
//!     .field("Maintainer", "Santiago Vila <sanvila@debian.org>")
//!     .field("Architecture", "any")
//!     .field("Format", "3.0 (quilt)")
//!     .binary("hello");
//! let bad = RawRecord::new("broken", "1").binary("broken");
//!
//! let transcoder =
//!     Transcoder::new(TranscoderConfig::default().with_recovery_mode(RecoveryMode::Lenient));
//! let outcome = transcode_batch_parallel(&[good, bad], &transcoder)?;
//!
//! assert_eq!(outcome.transcoded.len(), 1);
//! assert_eq!(outcome.skipped[0].0, 1);
//! # Ok::<(), debsrc::TranscodeError>(())
//! ```

use crate::document::SourcePackage;
use crate::error::Result;
use crate::recovery::{RecoveryContext, RecoveryMode};
use crate::source_record::SourceRecord;
use crate::transcoder::{Transcoded, Transcoder};
use tracing::debug;

/// Result of transcoding a batch of records.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchOutcome {
    /// Successfully transcoded records, in input order
    pub transcoded: Vec<Transcoded>,
    /// Records skipped in lenient mode, as (index in batch, error message)
    pub skipped: Vec<(usize, String)>,
}

impl BatchOutcome {
    /// The documents, in input order
    pub fn documents(&self) -> impl Iterator<Item = &SourcePackage> {
        self.transcoded.iter().map(|t| &t.document)
    }

    /// Consume the outcome, keeping only the documents
    #[must_use]
    pub fn into_documents(self) -> Vec<SourcePackage> {
        self.transcoded.into_iter().map(|t| t.document).collect()
    }
}

/// Transcode records one after another.
///
/// # Errors
///
/// In [`RecoveryMode::Strict`], returns the error of the first record that
/// fails. In [`RecoveryMode::Lenient`], failing records are skipped instead.
pub fn transcode_batch<R: SourceRecord>(
    records: &[R],
    transcoder: &Transcoder,
) -> Result<BatchOutcome> {
    collect_outcome(
        records.iter().map(|record| transcoder.transcode(record)),
        transcoder.config().recovery_mode,
    )
}

/// Transcode records in parallel using Rayon.
///
/// Uses the global Rayon thread pool, which respects `RAYON_NUM_THREADS`.
/// Output keeps input order, and the recovery policy is applied exactly as in
/// [`transcode_batch`], so in strict mode the reported error is that of the
/// lowest-indexed failing record.
///
/// # Errors
///
/// Same as [`transcode_batch`].
pub fn transcode_batch_parallel<R: SourceRecord + Sync>(
    records: &[R],
    transcoder: &Transcoder,
) -> Result<BatchOutcome> {
    use rayon::prelude::*;

    let results: Vec<Result<Transcoded>> = records
        .par_iter()
        .map(|record| transcoder.transcode(record))
        .collect();

    collect_outcome(results, transcoder.config().recovery_mode)
}

fn collect_outcome(
    results: impl IntoIterator<Item = Result<Transcoded>>,
    mode: RecoveryMode,
) -> Result<BatchOutcome> {
    let mut context = RecoveryContext::new(mode);
    let mut transcoded = Vec::new();

    for (index, result) in results.into_iter().enumerate() {
        match result {
            Ok(t) => transcoded.push(t),
            Err(error) => {
                context.recover::<()>(error, index)?;
            },
        }
    }

    debug!(
        transcoded = transcoded.len(),
        skipped = context.skipped.len(),
        "batch complete"
    );
    Ok(BatchOutcome {
        transcoded,
        skipped: context.skipped,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TranscoderConfig;
    use crate::error::TranscodeError;
    use crate::source_record::RawRecord;

    fn record(name: &str) -> RawRecord {
        RawRecord::new(name, "1.0")
            .field("Directory", format!("pool/main/{name}"))
            .field("Section", "misc")
            .field("Maintainer", "Jane Doe <jane@example.org>")
            .field("Architecture", "all")
            .field("Format", "3.0 (native)")
            .binary(name)
    }

    fn broken(name: &str) -> RawRecord {
        RawRecord::new(name, "1.0").binary(name)
    }

    fn lenient() -> Transcoder {
        Transcoder::new(TranscoderConfig::default().with_recovery_mode(RecoveryMode::Lenient))
    }

    #[test]
    fn test_empty_batch() {
        let records: Vec<RawRecord> = Vec::new();
        let outcome = transcode_batch(&records, &Transcoder::default()).unwrap();
        assert_eq!(outcome, BatchOutcome::default());
    }

    #[test]
    fn test_strict_aborts_on_first_failure() {
        let records = vec![record("a"), broken("b"), record("c")];
        let err = transcode_batch(&records, &Transcoder::default()).unwrap_err();
        assert!(matches!(err, TranscodeError::MissingField(ref f) if f == "Directory"));
    }

    #[test]
    fn test_lenient_skips_failures() {
        let records = vec![record("a"), broken("b"), record("c"), broken("d")];
        let outcome = transcode_batch(&records, &lenient()).unwrap();

        let names: Vec<&str> = outcome.documents().map(|d| d.package.as_str()).collect();
        assert_eq!(names, vec!["a", "c"]);
        let indices: Vec<usize> = outcome.skipped.iter().map(|(i, _)| *i).collect();
        assert_eq!(indices, vec![1, 3]);
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let records: Vec<RawRecord> = (0..64)
            .map(|i| {
                if i % 7 == 3 {
                    broken(&format!("p{i}"))
                } else {
                    record(&format!("p{i}"))
                }
            })
            .collect();

        let sequential = transcode_batch(&records, &lenient()).unwrap();
        let parallel = transcode_batch_parallel(&records, &lenient()).unwrap();
        assert_eq!(sequential, parallel);
        assert_eq!(parallel.into_documents().len(), 64 - 9);
    }
}
