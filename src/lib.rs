#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

//! # debsrc: Debian source package records as typed documents
//!
//! Turns loosely structured source package records (the paragraphs of a
//! `Sources` index or a `.dsc` file) into validated [`SourcePackage`]
//! documents ready for serialization.
//!
//! ## Quick Start
//!
//! ### Transcoding Control Text
//!
//! ```
//! use debsrc::{ControlReader, Transcoder, VcsType};
//!
//! let text = "\
//! Package: hello
//! Binary: hello
//! Version: 2.10-3
//! Maintainer: Santiago Vila <sanvila@debian.org>
//! Architecture: any
//! Standards-Version: 4.5.0
//! Format: 3.0 (quilt)
//! Files:
//!  6cd0ffea3884a4e79330338dcc2987d6 725946 hello_2.10.orig.tar.gz
//! Vcs-Git: https://salsa.debian.org/sanvila/hello.git
//! Directory: pool/main/h/hello
//! Priority: optional
//! Section: devel
//! ";
//!
//! let transcoder = Transcoder::default();
//! for record in ControlReader::new(text.as_bytes()) {
//!     let doc = transcoder.transcode(&record?)?.document;
//!     assert_eq!(doc.files[0].size, 725_946);
//!     assert_eq!(
//!         doc.vcs_location(VcsType::Git),
//!         Some("https://salsa.debian.org/sanvila/hello.git")
//!     );
//! }
//! # Ok::<(), debsrc::TranscodeError>(())
//! ```
//!
//! ### Writing Documents
//!
//! ```
//! use debsrc::formats::{DocumentWriter, MessagePackWriter};
//! use debsrc::{SourceFormat, SourcePackage};
//!
//! let doc = SourcePackage::builder("hello", "2.10-3")
//!     .format(SourceFormat::Quilt3dot0)
//!     .build();
//!
//! let mut writer = MessagePackWriter::new(Vec::new());
//! writer.write_document(&doc)?;
//! let bytes = writer.into_inner()?;
//! assert!(!bytes.is_empty());
//! # Ok::<(), debsrc::TranscodeError>(())
//! ```
//!
//! ## Modules
//!
//! - [`transcoder`]: Assembly of one document from one record
//! - [`source_record`]: The record accessor trait and an in-memory record
//! - [`control`]: Records read from deb822 control text
//! - [`field_map`]: Field lookup with consumption tracking
//! - [`enumerations`]: Closed vocabularies (priority, format, VCS, hashes)
//! - [`package_list`]: The `Package-List` grammar
//! - [`files`]: File descriptors and their checksums
//! - [`vcs`]: Version control locations
//! - [`document`]: The typed output document
//! - [`formats`]: MessagePack and JSON lines streams
//! - [`batch`]: Sequential and parallel batch drivers
//! - [`error`]: Error types and result type

pub mod batch;
pub mod config;
pub mod control;
pub mod document;
pub mod enumerations;
pub mod error;
pub mod field_map;
pub mod files;
pub mod formats;
pub mod macros;
pub mod package_list;
pub mod recovery;
pub mod source_record;
pub mod transcoder;
pub mod vcs;

pub use batch::{transcode_batch, transcode_batch_parallel, BatchOutcome};
pub use config::TranscoderConfig;
pub use control::{ControlReader, ControlRecord};
pub use document::{BinaryPackage, Checksum, SourceFile, SourcePackage, SourcePackageBuilder, Vcs};
pub use enumerations::{HashAlgorithm, Priority, SourceFormat, VcsType};
pub use error::{Result, TranscodeError};
pub use field_map::FieldMap;
pub use files::DroppedChecksum;
pub use recovery::{RecoveryContext, RecoveryMode};
pub use source_record::{FileEntry, RawRecord, SourceRecord};
pub use transcoder::{transcode, Diagnostics, Transcoded, Transcoder};
