//! Record iteration over a delimited byte source.
//!
//! Pull-based: each `next` call yields one parsed record, strictly in file
//! order. Blank lines come through as a single empty field the way a raw
//! split would see them; dropping them here would lose the line numbers
//! diagnostics are addressed by.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use dfc_model::Options;
use tracing::debug;

use crate::decode::{StreamDecoder, resolve_encoding};
use crate::error::{IngestError, Result};

/// Streaming reader yielding one record per logical line.
///
/// Holds at most one pending line of decoded text beyond the read buffer.
/// A trailing terminator at end of input does not produce a phantom empty
/// record.
pub struct RecordReader<R> {
    decoder: StreamDecoder<R>,
    pending: String,
    delimiter: u8,
    line_ending: u8,
    done: bool,
}

impl RecordReader<File> {
    /// Open a file-backed record reader.
    pub fn open(path: impl AsRef<Path>, opts: &Options) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| IngestError::FileOpen {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), "opened record reader");
        Self::from_reader(file, opts)
    }
}

impl<'a> RecordReader<&'a [u8]> {
    /// Iterate records of an in-memory buffer.
    pub fn from_bytes(bytes: &'a [u8], opts: &Options) -> Result<Self> {
        Self::from_reader(bytes, opts)
    }
}

impl<R: Read> RecordReader<R> {
    /// Wrap any byte source.
    pub fn from_reader(reader: R, opts: &Options) -> Result<Self> {
        let encoding = resolve_encoding(&opts.encoding)?;
        Ok(Self {
            decoder: StreamDecoder::new(reader, encoding),
            pending: String::new(),
            delimiter: opts.delimiter,
            line_ending: opts.line_ending,
            done: false,
        })
    }

    fn take_line(&mut self) -> Option<String> {
        let idx = self.pending.find(self.line_ending as char)?;
        let line = self.pending[..idx].to_string();
        self.pending.drain(..=idx);
        Some(line)
    }
}

impl<R: Read> Iterator for RecordReader<R> {
    type Item = Result<Vec<String>>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        loop {
            if let Some(line) = self.take_line() {
                return Some(Ok(split_record(&line, self.delimiter)));
            }
            match self.decoder.next_chunk() {
                Ok(Some(chunk)) => self.pending.push_str(chunk),
                Ok(None) => {
                    self.done = true;
                    if self.pending.is_empty() {
                        return None;
                    }
                    let line = std::mem::take(&mut self.pending);
                    return Some(Ok(split_record(&line, self.delimiter)));
                }
                Err(error) => {
                    self.done = true;
                    return Some(Err(error));
                }
            }
        }
    }
}

/// Split one line into fields, honoring double quotes.
///
/// Fields are not trimmed: validation semantics depend on raw emptiness.
/// An empty line yields a single empty field.
pub fn split_record(line: &str, delimiter: u8) -> Vec<String> {
    let delimiter = delimiter as char;
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '"' if !in_quotes => {
                in_quotes = true;
            }
            '"' if in_quotes => {
                // Check for escaped quote ("")
                if chars.peek() == Some(&'"') {
                    current.push('"');
                    chars.next();
                } else {
                    in_quotes = false;
                }
            }
            c if c == delimiter && !in_quotes => {
                fields.push(std::mem::take(&mut current));
            }
            _ => {
                current.push(c);
            }
        }
    }

    // Don't forget the last field
    fields.push(current);
    fields
}
