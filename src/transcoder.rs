//! Assembly of a [`SourcePackage`] from one record.
//!
//! [`Transcoder::transcode`] walks the record's fields in a fixed order,
//! taking each one it models, mapping closed vocabularies and parsing the
//! composite fields. Any failure rejects the record outright. Whatever is left
//! in the field map afterwards is reported in [`Diagnostics`] and, by default,
//! logged as a warning; it never affects the document.
//!
//! Transcoding holds no state between records, so one [`Transcoder`] can be
//! shared freely across threads (see [`batch`](crate::batch)).
//!
//! # Examples
//!
//! ```
//! use debsrc::{RawRecord, SourceFormat, Transcoder};
//!
//! let record = RawRecord::new("hello", "2.10-3")
//!     .field("Directory", "pool/main/h/hello")
//!     .field("Section", "devel")
//!     .field("Maintainer", "Santiago Vila <sanvila@debian.org>")
//!     .field("Architecture", "any")
//!     .field("Format", "3.0 (quilt)")
//!     .field("Testsuite", "autopkgtest")
//!     .binary("hello");
//!
//! let transcoded = Transcoder::default().transcode(&record)?;
//! assert_eq!(transcoded.document.format, SourceFormat::Quilt3dot0);
//! assert_eq!(transcoded.diagnostics.unconsumed, vec!["Testsuite".to_string()]);
//! # Ok::<(), debsrc::TranscodeError>(())
//! ```

use crate::config::TranscoderConfig;
use crate::document::{BinaryPackage, SourcePackage};
use crate::enumerations::{Priority, SourceFormat};
use crate::error::{Result, TranscodeError};
use crate::field_map::FieldMap;
use crate::files::{map_files, DroppedChecksum};
use crate::package_list::parse_package_list;
use crate::source_record::SourceRecord;
use crate::vcs::take_vcs;
use tracing::{debug, warn};

/// Fields whose content reaches the document through the record's file accessor
const FILE_LIST_FIELDS: [&str; 4] = [
    "Files",
    "Checksums-Sha1",
    "Checksums-Sha256",
    "Checksums-Sha512",
];

/// Non-fatal findings from transcoding one record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Diagnostics {
    /// Fields present in the record that no step consumed, in record order
    pub unconsumed: Vec<String>,
    /// Checksums left out of file descriptors because their algorithm is not modelled
    pub dropped_checksums: Vec<DroppedChecksum>,
}

impl Diagnostics {
    /// Whether there is nothing to report
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.unconsumed.is_empty() && self.dropped_checksums.is_empty()
    }
}

/// A transcoded document together with its diagnostics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transcoded {
    /// The validated document
    pub document: SourcePackage,
    /// Side-channel findings; never reflected in `document`
    pub diagnostics: Diagnostics,
}

/// Turns source package records into [`SourcePackage`] documents.
#[derive(Debug, Clone, Default)]
pub struct Transcoder {
    config: TranscoderConfig,
}

impl Transcoder {
    /// Create a transcoder with the given configuration
    #[must_use]
    pub fn new(config: TranscoderConfig) -> Self {
        Transcoder { config }
    }

    /// The configuration in use
    #[must_use]
    pub fn config(&self) -> &TranscoderConfig {
        &self.config
    }

    /// Transcode a single record.
    ///
    /// # Errors
    ///
    /// - [`TranscodeError::MissingField`] if `Directory`, `Section`,
    ///   `Maintainer`, `Architecture` or `Format` is absent, or the record has
    ///   no binary packages at all
    /// - [`TranscodeError::UnrecognizedEnumValue`] for an unknown `Priority` or
    ///   `Format`, including priorities inside `Package-List`
    /// - [`TranscodeError::MalformedPackageListEntry`] for a short
    ///   `Package-List` line
    pub fn transcode<R: SourceRecord + ?Sized>(&self, record: &R) -> Result<Transcoded> {
        let package = record.package().to_string();
        let version = record.version().to_string();
        debug!(package = %package, version = %version, "transcoding source record");

        let mut fields = record.fields();

        // Identity comes from the record accessor; the fields only echo it
        fields.discard("Package");
        fields.discard("Source");
        fields.discard("Version");

        let directory = fields.take_mandatory("Directory")?;
        let homepage = fields.take_non_empty("Homepage");
        let section = fields.take_mandatory("Section")?;
        let maintainer = fields.take_mandatory("Maintainer")?;
        let original_maintainer = fields.take_non_empty("Original-Maintainer");

        let priority = fields
            .take_non_empty("Priority")
            .map(|token| Priority::from_token(&token))
            .transpose()?;

        let standards_version = fields.take_non_empty("Standards-Version");

        // Multi-architecture values are kept whole
        let architectures = vec![fields.take_mandatory("Architecture")?];

        let binaries = take_binaries(&mut fields, record.binaries())?;

        let (files, dropped_checksums) = map_files(&record.files());
        for name in FILE_LIST_FIELDS {
            fields.discard(name);
        }

        let vcs = take_vcs(&mut fields)?;

        let format = SourceFormat::from_token(&fields.take_mandatory("Format")?)?;

        let diagnostics = Diagnostics {
            unconsumed: fields.residual().map(str::to_string).collect(),
            dropped_checksums,
        };
        self.report(&package, &diagnostics);
        debug!(
            package = %package,
            binaries = binaries.len(),
            files = files.len(),
            "transcoded source record"
        );

        Ok(Transcoded {
            document: SourcePackage {
                package,
                version,
                directory,
                homepage,
                section,
                maintainer,
                original_maintainer,
                priority,
                standards_version,
                architectures,
                binaries,
                build_depends: Vec::new(),
                files,
                vcs,
                format,
            },
            diagnostics,
        })
    }

    fn report(&self, package: &str, diagnostics: &Diagnostics) {
        if self.config.report_unconsumed && !diagnostics.unconsumed.is_empty() {
            warn!(
                package = %package,
                fields = ?diagnostics.unconsumed,
                "some fields were not consumed"
            );
        }
        if self.config.report_dropped_checksums {
            for dropped in &diagnostics.dropped_checksums {
                debug!(
                    package = %package,
                    file = %dropped.file,
                    algorithm = %dropped.tag,
                    "dropping checksum with unrecognised algorithm"
                );
            }
        }
    }
}

/// Resolve the binary package list.
///
/// A non-blank `Package-List` wins; otherwise the record's raw binary names
/// are used. The `Binary` field is consumed either way since the raw names
/// already come from the record accessor.
fn take_binaries(fields: &mut FieldMap, raw: Vec<String>) -> Result<Vec<BinaryPackage>> {
    fields.discard("Binary");

    let binaries = match fields
        .take_optional("Package-List")
        .filter(|list| !list.trim().is_empty())
    {
        Some(list) => parse_package_list(&list)?,
        None => raw.into_iter().map(BinaryPackage::named).collect(),
    };

    if binaries.is_empty() {
        return Err(TranscodeError::MissingField("Binary".to_string()));
    }
    Ok(binaries)
}

/// Transcode a record with the default configuration, discarding diagnostics.
///
/// # Errors
///
/// See [`Transcoder::transcode`].
pub fn transcode<R: SourceRecord + ?Sized>(record: &R) -> Result<SourcePackage> {
    Transcoder::default()
        .transcode(record)
        .map(|transcoded| transcoded.document)
}
