//! Serialization formats for source package documents.
//!
//! Documents are the unit of exchange; every format encodes the same `serde`
//! shape of [`SourcePackage`](crate::SourcePackage), so they carry identical
//! information.
//!
//! # Supported Formats
//!
//! | Format | Module | Description |
//! |--------|--------|-------------|
//! | MessagePack | [`msgpack`] | Compact binary stream, documents back to back |
//! | JSON lines | [`json`] | One JSON object per line, for inspection and tooling |
//!
//! # Usage
//!
//! ```
//! use debsrc::formats::{DocumentReader, DocumentWriter, Format};
//! use debsrc::{SourceFormat, SourcePackage};
//! use std::io::Cursor;
//!
//! let doc = SourcePackage::builder("hello", "2.10-3")
//!     .format(SourceFormat::Quilt3dot0)
//!     .build();
//!
//! let format = Format::from_extension("jsonl").expect("known extension");
//! let mut buffer = Vec::new();
//! {
//!     let mut writer = format.writer(&mut buffer);
//!     writer.write_document(&doc)?;
//!     writer.finish()?;
//! }
//!
//! let mut reader = format.reader(Cursor::new(buffer));
//! assert_eq!(reader.read_document()?, Some(doc));
//! # Ok::<(), debsrc::TranscodeError>(())
//! ```

mod traits;

pub mod json;
pub mod msgpack;

pub use json::{JsonLinesReader, JsonLinesWriter};
pub use msgpack::{MessagePackReader, MessagePackWriter};
pub use traits::{DocumentReader, DocumentWriter};

use std::io::{BufRead, Write};

/// The available document formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Format {
    /// MessagePack stream
    MessagePack,
    /// JSON lines
    JsonLines,
}

impl Format {
    /// Every available format
    pub const ALL: [Format; 2] = [Format::MessagePack, Format::JsonLines];

    /// Guess the format from a file extension, without the leading dot.
    ///
    /// Matching is case-insensitive.
    #[must_use]
    pub fn from_extension(extension: &str) -> Option<Self> {
        match extension.to_ascii_lowercase().as_str() {
            "msgpack" | "mpk" => Some(Format::MessagePack),
            "jsonl" | "ndjson" => Some(Format::JsonLines),
            _ => None,
        }
    }

    /// The preferred file extension
    #[must_use]
    pub const fn extension(self) -> &'static str {
        match self {
            Format::MessagePack => "msgpack",
            Format::JsonLines => "jsonl",
        }
    }

    /// Human-readable name
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Format::MessagePack => "MessagePack",
            Format::JsonLines => "JSON lines",
        }
    }

    /// Create a writer for this format
    pub fn writer<'a, W: Write + 'a>(self, output: W) -> Box<dyn DocumentWriter + 'a> {
        match self {
            Format::MessagePack => Box::new(MessagePackWriter::new(output)),
            Format::JsonLines => Box::new(JsonLinesWriter::new(output)),
        }
    }

    /// Create a reader for this format
    pub fn reader<'a, R: BufRead + 'a>(self, input: R) -> Box<dyn DocumentReader + 'a> {
        match self {
            Format::MessagePack => Box::new(MessagePackReader::new(input)),
            Format::JsonLines => Box::new(JsonLinesReader::new(input)),
        }
    }
}

impl std::fmt::Display for Format {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
