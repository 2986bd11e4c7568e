//! The record-side interface the transcoder reads from.
//!
//! A record reaches the transcoder as a [`FieldMap`] plus three accessors that
//! an upstream package library already knows how to answer: the record's
//! identity, its raw list of binary package names, and its structured file
//! list. [`SourceRecord`] is that seam. [`ControlRecord`](crate::ControlRecord)
//! implements it over deb822 text; [`RawRecord`] is a plain in-memory form.

use crate::field_map::FieldMap;
use indexmap::IndexMap;

/// One entry of a record's structured file list.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FileEntry {
    /// File name
    pub path: String,
    /// Size in bytes
    pub size: u64,
    /// Checksum tag (e.g. `MD5Sum`, `SHA256`) -> hex digest, in source order
    pub hashes: IndexMap<String, String>,
}

impl FileEntry {
    /// Create an entry with no hashes
    #[must_use]
    pub fn new(path: impl Into<String>, size: u64) -> Self {
        FileEntry {
            path: path.into(),
            size,
            hashes: IndexMap::new(),
        }
    }

    /// Add a hash under the given tag
    #[must_use]
    pub fn with_hash(mut self, tag: impl Into<String>, digest: impl Into<String>) -> Self {
        self.hashes.insert(tag.into(), digest.into());
        self
    }
}

/// Accessors over a single source package record.
///
/// Implementations must be deterministic: calling any method twice returns
/// equal results. [`fields`](Self::fields) hands out a fresh copy each time,
/// so transcoding never mutates the record itself.
pub trait SourceRecord {
    /// Source package name, from the record's identity
    fn package(&self) -> &str;

    /// Version, from the record's identity
    fn version(&self) -> &str;

    /// Binary package names, in record order
    fn binaries(&self) -> Vec<String>;

    /// Structured file list, in record order
    fn files(&self) -> Vec<FileEntry>;

    /// A fresh copy of all the record's fields
    fn fields(&self) -> FieldMap;
}

/// A record assembled directly from its parts.
///
/// # Examples
///
/// ```
/// use debsrc::{RawRecord, SourceRecord};
///
/// let record = RawRecord::new("hello", "2.10-3")
///     .field("Directory", "pool/main/h/hello")
///     .binary("hello");
///
/// assert_eq!(record.package(), "hello");
/// assert_eq!(record.binaries(), vec!["hello".to_string()]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawRecord {
    /// Source package name
    pub package: String,
    /// Version
    pub version: String,
    /// Raw binary package names
    pub binaries: Vec<String>,
    /// Structured file list
    pub files: Vec<FileEntry>,
    /// Record fields
    pub fields: FieldMap,
}

impl RawRecord {
    /// Create a record with the given identity and nothing else
    #[must_use]
    pub fn new(package: impl Into<String>, version: impl Into<String>) -> Self {
        RawRecord {
            package: package.into(),
            version: version.into(),
            ..Self::default()
        }
    }

    /// Add a field
    #[must_use]
    pub fn field(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.insert(name, value);
        self
    }

    /// Add a raw binary package name
    #[must_use]
    pub fn binary(mut self, name: impl Into<String>) -> Self {
        self.binaries.push(name.into());
        self
    }

    /// Add a file list entry
    #[must_use]
    pub fn file(mut self, entry: FileEntry) -> Self {
        self.files.push(entry);
        self
    }
}

impl SourceRecord for RawRecord {
    fn package(&self) -> &str {
        &self.package
    }

    fn version(&self) -> &str {
        &self.version
    }

    fn binaries(&self) -> Vec<String> {
        self.binaries.clone()
    }

    fn files(&self) -> Vec<FileEntry> {
        self.files.clone()
    }

    fn fields(&self) -> FieldMap {
        self.fields.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fields_are_fresh_copies() {
        let record = RawRecord::new("hello", "2.10-3").field("Section", "devel");

        let mut first = record.fields();
        first.take_mandatory("Section").unwrap();

        let mut second = record.fields();
        assert_eq!(second.take_mandatory("Section").unwrap(), "devel");
    }

    #[test]
    fn test_file_entry_builder() {
        let entry = FileEntry::new("hello_2.10-3.dsc", 1847)
            .with_hash("MD5Sum", "aa")
            .with_hash("SHA256", "bb");
        assert_eq!(entry.hashes.len(), 2);
        assert_eq!(entry.hashes.get_index(0).map(|(k, _)| k.as_str()), Some("MD5Sum"));
    }
}
