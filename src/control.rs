//! Source records read from deb822 control text.
//!
//! This module provides a [`SourceRecord`] implementation over the paragraphs
//! of a `Sources` index or the body of a `.dsc` file, so records can be
//! transcoded straight from the text an archive publishes:
//!
//! - [`split_paragraphs`]: locate paragraph boundaries (blank lines)
//! - [`parse_records`]: parse every paragraph of text held in memory
//! - [`parse_paragraph`]: tokenize one paragraph into a [`FieldMap`]
//! - [`ControlRecord`]: a paragraph with the record accessors derived from it
//! - [`ControlReader`]: stream records from any [`BufRead`]
//! - [`open_index`]: open a `Sources` index on disk, gzip-compressed or not
//!
//! # Examples
//!
//! ```
//! use debsrc::{ControlReader, Transcoder};
//! use std::io::Cursor;
//!
//! let text = "\
//! Package: hello
//! Binary: hello
//! Version: 2.10-3
//! Maintainer: Santiago Vila <sanvila@debian.org>
//! Architecture: any
//! Format: 3.0 (quilt)
//! Directory: pool/main/h/hello
//! Section: devel
//! ";
//!
//! let mut reader = ControlReader::new(Cursor::new(text));
//! let record = reader.read_record()?.expect("one record");
//! let doc = Transcoder::default().transcode(&record)?.document;
//! assert_eq!(doc.package, "hello");
//! # Ok::<(), debsrc::TranscodeError>(())
//! ```

use crate::error::{Result, TranscodeError};
use crate::field_map::FieldMap;
use crate::source_record::{FileEntry, SourceRecord};
use flate2::read::MultiGzDecoder;
use indexmap::IndexMap;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;
use tracing::debug;

/// File tables and the checksum tag each one contributes
const FILE_TABLES: [(&str, &str); 4] = [
    ("Files", "MD5Sum"),
    ("Checksums-Sha1", "SHA1"),
    ("Checksums-Sha256", "SHA256"),
    ("Checksums-Sha512", "Sha512"),
];

/// Split control text into paragraphs.
///
/// Paragraphs are separated by one or more blank (empty or whitespace-only)
/// lines. Returned slices exclude the separators; empty paragraphs are skipped.
///
/// # Examples
///
/// ```
/// use debsrc::control::split_paragraphs;
///
/// let text = "Package: a\n\n  \nPackage: b\n";
/// assert_eq!(split_paragraphs(text), vec!["Package: a\n", "Package: b\n"]);
/// ```
#[must_use]
pub fn split_paragraphs(text: &str) -> Vec<&str> {
    let mut paragraphs = Vec::new();
    let mut paragraph_start = 0;
    let mut line_start = 0;

    let line_ends = memchr::memchr_iter(b'\n', text.as_bytes())
        .map(|pos| pos + 1)
        .chain(std::iter::once(text.len()));

    for line_end in line_ends {
        if line_end <= line_start {
            continue;
        }
        if text[line_start..line_end].trim().is_empty() {
            if paragraph_start < line_start {
                paragraphs.push(&text[paragraph_start..line_start]);
            }
            paragraph_start = line_end;
        }
        line_start = line_end;
    }

    if paragraph_start < text.len() && !text[paragraph_start..].trim().is_empty() {
        paragraphs.push(&text[paragraph_start..]);
    }
    paragraphs
}

/// Tokenize one paragraph into fields.
///
/// `Name: value` starts a field; the value is trimmed. Lines beginning with a
/// space or tab continue the previous field and are appended after a newline,
/// keeping their leading whitespace. Lines beginning with `#` are comments.
///
/// # Errors
///
/// Returns [`TranscodeError::MalformedControlData`] for a line without a
/// colon, an empty field name, a continuation line before any field, or a
/// field that appears twice.
///
/// # Examples
///
/// ```
/// use debsrc::control::parse_paragraph;
///
/// let fields = parse_paragraph("Package-List:\n hello deb devel optional\n")?;
/// assert_eq!(fields.peek("Package-List"), Some("\n hello deb devel optional"));
/// # Ok::<(), debsrc::TranscodeError>(())
/// ```
pub fn parse_paragraph(text: &str) -> Result<FieldMap> {
    let mut fields: IndexMap<String, String> = IndexMap::new();

    for line in text.lines() {
        let line = line.trim_end();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        if line.starts_with(' ') || line.starts_with('\t') {
            let Some((_, value)) = fields.last_mut() else {
                return Err(TranscodeError::MalformedControlData(format!(
                    "continuation line before any field: {line:?}"
                )));
            };
            value.push('\n');
            value.push_str(line);
            continue;
        }

        let Some((name, value)) = line.split_once(':') else {
            return Err(TranscodeError::MalformedControlData(format!(
                "no colon in field line: {line:?}"
            )));
        };
        let name = name.trim();
        if name.is_empty() {
            return Err(TranscodeError::MalformedControlData(format!(
                "empty field name: {line:?}"
            )));
        }
        if fields.contains_key(name) {
            return Err(TranscodeError::MalformedControlData(format!(
                "duplicate field: {name:?}"
            )));
        }
        fields.insert(name.to_string(), value.trim().to_string());
    }

    Ok(fields.into_iter().collect())
}

/// A source package record backed by one control paragraph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControlRecord {
    package: String,
    version: String,
    binaries: Vec<String>,
    files: Vec<FileEntry>,
    fields: FieldMap,
}

impl ControlRecord {
    /// Parse a single paragraph of control text
    ///
    /// # Errors
    ///
    /// See [`parse_paragraph`] and [`ControlRecord::from_fields`].
    pub fn parse(paragraph: &str) -> Result<Self> {
        Self::from_fields(parse_paragraph(paragraph)?)
    }

    /// Derive the record accessors from tokenized fields.
    ///
    /// The identity is `Package` (or `Source`, as in `.dsc` files) and
    /// `Version`. Binary names come from `Binary`, and the file list is merged
    /// from `Files` and the `Checksums-*` tables. The fields themselves are
    /// left untouched for the transcoder.
    ///
    /// # Errors
    ///
    /// Returns [`TranscodeError::MissingField`] when the identity is
    /// incomplete and [`TranscodeError::MalformedControlData`] when a file
    /// table line is malformed or two tables disagree on a file's size.
    pub fn from_fields(fields: FieldMap) -> Result<Self> {
        let package = fields
            .peek("Package")
            .or_else(|| fields.peek("Source"))
            .filter(|name| !name.is_empty())
            .ok_or_else(|| TranscodeError::MissingField("Package".to_string()))?
            .to_string();
        let version = fields
            .peek("Version")
            .filter(|version| !version.is_empty())
            .ok_or_else(|| TranscodeError::MissingField("Version".to_string()))?
            .to_string();

        let binaries = fields
            .peek("Binary")
            .map(split_binary_list)
            .unwrap_or_default();
        let files = parse_file_tables(&fields)?;

        Ok(ControlRecord {
            package,
            version,
            binaries,
            files,
            fields,
        })
    }
}

impl SourceRecord for ControlRecord {
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

/// Split a comma-separated `Binary` value, which may span lines.
fn split_binary_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .collect()
}

/// Merge the file tables into one list, in order of first appearance.
fn parse_file_tables(fields: &FieldMap) -> Result<Vec<FileEntry>> {
    let mut entries: IndexMap<String, FileEntry> = IndexMap::new();

    for (table, tag) in FILE_TABLES {
        let Some(body) = fields.peek(table) else {
            continue;
        };

        for line in body.lines().map(str::trim).filter(|line| !line.is_empty()) {
            let columns: Vec<&str> = line.split_whitespace().collect();
            let [digest, size, name] = columns[..] else {
                return Err(TranscodeError::MalformedControlData(format!(
                    "{table} entry is not 'digest size name': {line:?}"
                )));
            };
            let size: u64 = size.parse().map_err(|_| {
                TranscodeError::MalformedControlData(format!(
                    "{table} entry has invalid size: {line:?}"
                ))
            })?;

            let entry = entries
                .entry(name.to_string())
                .or_insert_with(|| FileEntry::new(name, size));
            if entry.size != size {
                return Err(TranscodeError::MalformedControlData(format!(
                    "{table} disagrees on the size of {name}: {size} vs {}",
                    entry.size
                )));
            }
            entry.hashes.insert(tag.to_string(), digest.to_string());
        }
    }

    Ok(entries.into_values().collect())
}

/// Parse every paragraph of control text already held in memory.
///
/// The in-memory counterpart of [`ControlReader`]: paragraphs are located with
/// [`split_paragraphs`] and each is parsed independently, so a bad paragraph
/// yields an error without affecting its neighbours.
///
/// # Examples
///
/// ```
/// use debsrc::control::parse_records;
///
/// let records = parse_records("Package: a\nVersion: 1\n\nVersion: 2\n");
/// assert_eq!(records.len(), 2);
/// assert!(records[0].is_ok());
/// assert!(records[1].is_err());
/// ```
#[must_use]
pub fn parse_records(text: &str) -> Vec<Result<ControlRecord>> {
    split_paragraphs(text)
        .into_iter()
        .map(ControlRecord::parse)
        .collect()
}

/// Streaming reader of control records.
///
/// Reads one paragraph at a time from any [`BufRead`] source, so arbitrarily
/// large indices can be processed without loading them whole.
#[derive(Debug)]
pub struct ControlReader<R: BufRead> {
    reader: R,
    line: Vec<u8>,
    records_read: usize,
}

impl<R: BufRead> ControlReader<R> {
    /// Create a new control reader.
    pub fn new(reader: R) -> Self {
        ControlReader {
            reader,
            line: Vec::new(),
            records_read: 0,
        }
    }

    /// Read the raw text of the next paragraph.
    ///
    /// Returns `Ok(None)` at the end of the input. A paragraph containing
    /// bytes that are not UTF-8 is read to its end before the error is
    /// returned, so the next call starts at the following paragraph.
    ///
    /// # Errors
    ///
    /// Returns an error if reading fails or the paragraph is not UTF-8.
    pub fn read_paragraph(&mut self) -> Result<Option<String>> {
        let mut paragraph: Vec<u8> = Vec::new();
        loop {
            self.line.clear();
            if self.reader.read_until(b'\n', &mut self.line)? == 0 {
                break;
            }
            if is_blank(&self.line) {
                if !paragraph.is_empty() {
                    break;
                }
            } else {
                paragraph.extend_from_slice(&self.line);
            }
        }

        if paragraph.is_empty() {
            return Ok(None);
        }
        self.records_read += 1;
        String::from_utf8(paragraph).map(Some).map_err(|err| {
            debug!(paragraph = self.records_read, "paragraph is not UTF-8");
            TranscodeError::IoError(io::Error::new(io::ErrorKind::InvalidData, err))
        })
    }

    /// Read the next record.
    ///
    /// Returns `Ok(Some(record))` if a record was read, `Ok(None)` at the end
    /// of the input.
    ///
    /// # Errors
    ///
    /// Returns an error if reading fails or the paragraph is not a valid
    /// record (see [`ControlRecord::parse`]). The reader stays positioned after
    /// the bad paragraph, so reading can continue.
    pub fn read_record(&mut self) -> Result<Option<ControlRecord>> {
        let Some(paragraph) = self.read_paragraph()? else {
            return Ok(None);
        };
        ControlRecord::parse(&paragraph).map(Some)
    }

    /// Number of paragraphs read so far, valid or not
    #[must_use]
    pub fn records_read(&self) -> usize {
        self.records_read
    }
}

/// A separator line: empty or whitespace only, as [`split_paragraphs`] sees it.
fn is_blank(line: &[u8]) -> bool {
    std::str::from_utf8(line).is_ok_and(|line| line.trim().is_empty())
}

/// Open a `Sources` index on disk.
///
/// Files ending in `.gz`, as archives publish them, are decompressed while
/// reading; anything else is read as plain text.
///
/// # Errors
///
/// Returns an error if the file cannot be opened. Decompression failures
/// surface later, from [`ControlReader::read_record`], as I/O errors.
pub fn open_index(path: impl AsRef<Path>) -> Result<ControlReader<Box<dyn BufRead + Send>>> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let compressed = path.extension().is_some_and(|ext| ext == "gz");
    debug!(path = %path.display(), compressed = compressed, "opening control index");

    let input: Box<dyn BufRead + Send> = if compressed {
        Box::new(BufReader::new(MultiGzDecoder::new(file)))
    } else {
        Box::new(BufReader::new(file))
    };
    Ok(ControlReader::new(input))
}

impl<R: BufRead> Iterator for ControlReader<R> {
    type Item = Result<ControlRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        self.read_record().transpose()
    }
}
