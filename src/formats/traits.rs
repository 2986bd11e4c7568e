//! Document reader and writer traits.
//!
//! Every serialization format implements the same pair of traits, so code that
//! stores or ships documents does not need to know which format it is using.
//!
//! # Example
//!
//! ```
//! use debsrc::formats::{DocumentReader, DocumentWriter};
//!
//! fn copy_documents<R: DocumentReader, W: DocumentWriter>(
//!     reader: &mut R,
//!     writer: &mut W,
//! ) -> debsrc::Result<usize> {
//!     let mut count = 0;
//!     while let Some(document) = reader.read_document()? {
//!         writer.write_document(&document)?;
//!         count += 1;
//!     }
//!     writer.finish()?;
//!     Ok(count)
//! }
//! ```

use crate::document::SourcePackage;
use crate::error::Result;

/// Trait for readers that produce documents from a serialized stream.
pub trait DocumentReader: std::fmt::Debug {
    /// Read the next document.
    ///
    /// Returns `Ok(None)` when the stream ends cleanly between documents.
    ///
    /// # Errors
    ///
    /// Returns [`TranscodeError::Decode`](crate::TranscodeError::Decode) if the
    /// stream holds something other than a document, including a document cut
    /// off part way.
    fn read_document(&mut self) -> Result<Option<SourcePackage>>;

    /// Read all remaining documents into a vector.
    ///
    /// # Errors
    ///
    /// Returns an error if any document fails to read. On error, previously
    /// read documents are discarded.
    fn read_all(&mut self) -> Result<Vec<SourcePackage>> {
        let mut documents = Vec::new();
        while let Some(document) = self.read_document()? {
            documents.push(document);
        }
        Ok(documents)
    }

    /// Returns the number of documents read so far.
    fn documents_read(&self) -> usize;
}

/// Trait for writers that serialize documents to a stream.
///
/// # Important: Always Call `finish`
///
/// Writers buffer their output; [`finish`](Self::finish) flushes it.
pub trait DocumentWriter: std::fmt::Debug {
    /// Write a single document.
    ///
    /// # Errors
    ///
    /// Returns an error if the document cannot be serialized or writing to the
    /// underlying output fails.
    fn write_document(&mut self, document: &SourcePackage) -> Result<()>;

    /// Write several documents in order.
    ///
    /// # Errors
    ///
    /// Returns an error if any document cannot be written.
    fn write_batch(&mut self, documents: &[SourcePackage]) -> Result<()> {
        for document in documents {
            self.write_document(document)?;
        }
        Ok(())
    }

    /// Flush any buffered output.
    ///
    /// # Errors
    ///
    /// Returns an error if flushing the underlying output fails.
    fn finish(&mut self) -> Result<()>;

    /// Returns the number of documents written so far.
    fn documents_written(&self) -> usize;
}
