//! JSON lines document stream: one compact JSON object per line.

use super::{DocumentReader, DocumentWriter};
use crate::document::SourcePackage;
use crate::error::{Result, TranscodeError};
use std::fmt;
use std::io::{BufRead, BufWriter, Write};

/// Writes documents as newline-terminated JSON objects.
pub struct JsonLinesWriter<W: Write> {
    output: BufWriter<W>,
    written: usize,
}

impl<W: Write> JsonLinesWriter<W> {
    /// Create a writer over the given output
    pub fn new(output: W) -> Self {
        JsonLinesWriter {
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

impl<W: Write> fmt::Debug for JsonLinesWriter<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JsonLinesWriter")
            .field("written", &self.written)
            .finish_non_exhaustive()
    }
}

impl<W: Write> DocumentWriter for JsonLinesWriter<W> {
    fn write_document(&mut self, document: &SourcePackage) -> Result<()> {
        serde_json::to_writer(&mut self.output, document)
            .map_err(|e| TranscodeError::Encode(e.to_string()))?;
        self.output.write_all(b"\n")?;
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

/// Reads documents from JSON lines. Blank lines are skipped.
pub struct JsonLinesReader<R: BufRead> {
    input: R,
    line: String,
    read: usize,
}

impl<R: BufRead> JsonLinesReader<R> {
    /// Create a reader over the given input
    pub fn new(input: R) -> Self {
        JsonLinesReader {
            input,
            line: String::new(),
            read: 0,
        }
    }
}

impl<R: BufRead> fmt::Debug for JsonLinesReader<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JsonLinesReader")
            .field("read", &self.read)
            .finish_non_exhaustive()
    }
}

impl<R: BufRead> DocumentReader for JsonLinesReader<R> {
    fn read_document(&mut self) -> Result<Option<SourcePackage>> {
        loop {
            self.line.clear();
            if self.input.read_line(&mut self.line)? == 0 {
                return Ok(None);
            }
            let line = self.line.trim();
            if line.is_empty() {
                continue;
            }
            let document: SourcePackage = serde_json::from_str(line).map_err(|e| {
                TranscodeError::Decode(format!("line {}: {e}", self.read + 1))
            })?;
            self.read += 1;
            return Ok(Some(document));
        }
    }

    fn documents_read(&self) -> usize {
        self.read
    }
}
