//! Closed vocabularies used by source package records.
//!
//! Each vocabulary accepts exactly its listed tokens (case-sensitive) and
//! rejects everything else with
//! [`TranscodeError::UnrecognizedEnumValue`](crate::TranscodeError::UnrecognizedEnumValue).
//! Every variant renders back to the token it was parsed from.
//!
//! # Examples
//!
//! ```
//! use debsrc::{Priority, SourceFormat};
//!
//! assert_eq!(Priority::from_token("optional")?, Priority::Optional);
//! assert_eq!(SourceFormat::from_token("3.0 (quilt)")?, SourceFormat::Quilt3dot0);
//! assert!(SourceFormat::from_token("2.0").is_err());
//! # Ok::<(), debsrc::TranscodeError>(())
//! ```

crate::closed_vocabulary! {
    /// Package priority (<https://www.debian.org/doc/debian-policy/#priorities>)
    pub enum Priority: "Priority" {
        /// required
        Required => "required",
        /// important
        Important => "important",
        /// standard
        Standard => "standard",
        /// optional
        Optional => "optional",
        /// extra (deprecated in policy, still found in archives)
        Extra => "extra",
        /// source
        Source => "source",
    }
}

crate::closed_vocabulary! {
    /// Source package format, from the `Format` field
    pub enum SourceFormat: "Format" {
        /// 1.0
        Original => "1.0",
        /// 3.0 (native)
        Native3dot0 => "3.0 (native)",
        /// 3.0 (quilt)
        Quilt3dot0 => "3.0 (quilt)",
        /// 3.0 (git)
        Git3dot0 => "3.0 (git)",
    }
}

crate::closed_vocabulary! {
    /// Version control system, keyed by the suffix of a `Vcs-*` field name
    pub enum VcsType: "Vcs" {
        /// Vcs-Browser: a web view of the repository
        Browser => "Browser",
        /// Vcs-Arch
        Arch => "Arch",
        /// Vcs-Bzr
        Bzr => "Bzr",
        /// Vcs-Cvs
        Cvs => "Cvs",
        /// Vcs-Darcs
        Darcs => "Darcs",
        /// Vcs-Git
        Git => "Git",
        /// Vcs-Hg
        Hg => "Hg",
        /// Vcs-Mtn
        Mtn => "Mtn",
        /// Vcs-Svn
        Svn => "Svn",
    }
}

crate::closed_vocabulary! {
    /// Checksum algorithm, keyed by the tag a file list uses for it
    pub enum HashAlgorithm: "checksum algorithm" {
        /// MD5, from the `Files` table
        Md5 => "MD5Sum",
        /// SHA-1, from `Checksums-Sha1`
        Sha1 => "SHA1",
        /// SHA-256, from `Checksums-Sha256`
        Sha256 => "SHA256",
        /// SHA-512, from `Checksums-Sha512`
        Sha512 => "Sha512",
    }
}

impl VcsType {
    /// Name of the record field carrying this system, e.g. `Vcs-Git`
    #[must_use]
    pub fn field_name(&self) -> String {
        format!("Vcs-{}", self.as_token())
    }
}

impl HashAlgorithm {
    /// Recognize a checksum tag, returning `None` for algorithms outside the set.
    ///
    /// File lists may carry algorithms this crate does not model; those are
    /// not an error.
    #[must_use]
    pub fn recognize(tag: &str) -> Option<Self> {
        Self::from_token(tag).ok()
    }
}
