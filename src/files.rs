//! Mapping of a record's structured file list into [`SourceFile`]s.
//!
//! Name and size are copied unconditionally. Of the supplied hashes, only the
//! algorithms in [`HashAlgorithm`] are kept; any other tag is left out of the
//! document and reported back to the caller.

use crate::document::{Checksum, SourceFile};
use crate::enumerations::HashAlgorithm;
use crate::source_record::FileEntry;
use smallvec::SmallVec;

/// A checksum tag that was present on a file but is not modelled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DroppedChecksum {
    /// File the checksum belonged to
    pub file: String,
    /// Unrecognized algorithm tag
    pub tag: String,
}

/// Map one file list entry.
///
/// Recognized checksums come out in [`HashAlgorithm::ALL`] order regardless of
/// the order they were supplied in. Unrecognized tags are pushed onto `dropped`.
pub fn map_file(entry: &FileEntry, dropped: &mut Vec<DroppedChecksum>) -> SourceFile {
    let checksums: SmallVec<[Checksum; 4]> = HashAlgorithm::ALL
        .iter()
        .filter_map(|algorithm| {
            entry.hashes.get(algorithm.as_token()).map(|digest| Checksum {
                algorithm: *algorithm,
                digest: digest.clone(),
            })
        })
        .collect();

    dropped.extend(
        entry
            .hashes
            .keys()
            .filter(|tag| HashAlgorithm::recognize(tag).is_none())
            .map(|tag| DroppedChecksum {
                file: entry.path.clone(),
                tag: tag.clone(),
            }),
    );

    SourceFile {
        name: entry.path.clone(),
        size: entry.size,
        checksums,
    }
}

/// Map a whole file list, preserving its order.
///
/// Returns the mapped files together with every checksum tag that was dropped.
///
/// # Examples
///
/// ```
/// use debsrc::files::map_files;
/// use debsrc::{FileEntry, HashAlgorithm};
///
/// let entries = vec![FileEntry::new("foo.tar.gz", 1024)
///     .with_hash("MD5Sum", "abc")
///     .with_hash("UnknownAlgo", "xyz")];
///
/// let (files, dropped) = map_files(&entries);
/// assert_eq!(files[0].digest(HashAlgorithm::Md5), Some("abc"));
/// assert_eq!(dropped[0].tag, "UnknownAlgo");
/// ```
#[must_use]
pub fn map_files(entries: &[FileEntry]) -> (Vec<SourceFile>, Vec<DroppedChecksum>) {
    let mut dropped = Vec::new();
    let files = entries
        .iter()
        .map(|entry| map_file(entry, &mut dropped))
        .collect();
    (files, dropped)
}
