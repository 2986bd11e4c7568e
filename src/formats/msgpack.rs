//! MessagePack document stream.
//!
//! Documents are written back to back as MessagePack maps with named fields,
//! with no framing in between. A stream that ends exactly after a document is
//! complete; one that ends inside a document is a decode error.

use super::{DocumentReader, DocumentWriter};
use crate::document::SourcePackage;
use crate::error::{Result, TranscodeError};
use std::fmt;
use std::io::{BufRead, BufWriter, Write};

/// Writes documents as concatenated MessagePack maps.
pub struct MessagePackWriter<W: Write> {
    output: BufWriter<W>,
    written: usize,
}

impl<W: Write> MessagePackWriter<W> {
    /// Create a writer over the given output
    pub fn new(output: W) -> Self {
        MessagePackWriter {
            output: BufWriter::new(output),
            written: 0,
        }
    }

    /// Flush and return the underlying output.
    ///
    /// # Errors
    ///
    /// Returns an error if flushing fails.
    pub fn into_inner(self) -> Result<W> {
        self.output
            .into_inner()
            .map_err(|e| TranscodeError::IoError(e.into_error()))
    }
}

impl<W: Write> fmt::Debug for MessagePackWriter<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MessagePackWriter")
            .field("written", &self.written)
            .finish_non_exhaustive()
    }
}

impl<W: Write> DocumentWriter for MessagePackWriter<W> {
    fn write_document(&mut self, document: &SourcePackage) -> Result<()> {
        rmp_serde::encode::write_named(&mut self.output, document)
            .map_err(|e| TranscodeError::Encode(e.to_string()))?;
        self.written += 1;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.output.flush()?;
        Ok(())
    }

    fn documents_written(&self) -> usize {
        self.written
    }
}

/// Reads documents from a stream of concatenated MessagePack maps.
pub struct MessagePackReader<R: BufRead> {
    input: R,
    read: usize,
}

impl<R: BufRead> MessagePackReader<R> {
    /// Create a reader over the given input
    pub fn new(input: R) -> Self {
        MessagePackReader { input, read: 0 }
    }
}

impl<R: BufRead> fmt::Debug for MessagePackReader<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MessagePackReader")
            .field("read", &self.read)
            .finish_non_exhaustive()
    }
}

impl<R: BufRead> DocumentReader for MessagePackReader<R> {
    fn read_document(&mut self) -> Result<Option<SourcePackage>> {
        if self.input.fill_buf()?.is_empty() {
            return Ok(None);
        }
        let document: SourcePackage = rmp_serde::from_read(&mut self.input)
            .map_err(|e| TranscodeError::Decode(e.to_string()))?;
        self.read += 1;
        Ok(Some(document))
    }

    fn documents_read(&self) -> usize {
        self.read
    }
}
