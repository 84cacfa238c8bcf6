//! Incremental text decoding on top of any byte source.
//!
//! Wraps an `encoding_rs` decoder so callers can pull decoded text chunk by
//! chunk without ever holding the whole source in memory. A byte-order mark
//! that matches the configured encoding is removed at the front of the
//! stream.

use std::io::{ErrorKind, Read};

use encoding_rs::{Decoder, DecoderResult, Encoding};

use crate::error::{IngestError, Result};

/// Size of the raw read buffer.
const READ_BUF_LEN: usize = 8 * 1024;

/// Resolve an encoding label (e.g. `"utf-8"`, `"windows-1252"`) via
/// `encoding_rs`.
pub fn resolve_encoding(label: &str) -> Result<&'static Encoding> {
    Encoding::for_label(label.trim().as_bytes()).ok_or_else(|| IngestError::UnknownEncoding {
        label: label.to_string(),
    })
}

/// Streaming decoder over a byte source.
///
/// Each call to [`next_chunk`](Self::next_chunk) reads one buffer's worth of
/// bytes and returns the decoded text. Incomplete multi-byte sequences at a
/// chunk boundary are carried over by the inner decoder.
pub struct StreamDecoder<R> {
    inner: R,
    decoder: Decoder,
    buf: Vec<u8>,
    out: String,
    finished: bool,
}

impl<R: Read> StreamDecoder<R> {
    pub fn new(inner: R, encoding: &'static Encoding) -> Self {
        Self {
            inner,
            decoder: encoding.new_decoder_with_bom_removal(),
            buf: vec![0u8; READ_BUF_LEN],
            out: String::new(),
            finished: false,
        }
    }

    /// Decode and return the next chunk of text, or `None` once the source
    /// is exhausted.
    ///
    /// Malformed input fails with [`IngestError::Decode`]; decoding is never
    /// lossy.
    pub fn next_chunk(&mut self) -> Result<Option<&str>> {
        if self.finished {
            return Ok(None);
        }
        self.out.clear();
        loop {
            let n = loop {
                match self.inner.read(&mut self.buf) {
                    Ok(n) => break n,
                    Err(error) if error.kind() == ErrorKind::Interrupted => continue,
                    Err(error) => return Err(error.into()),
                }
            };
            let last = n == 0;
            self.decode_bytes(n, last)?;
            if last {
                self.finished = true;
                return Ok((!self.out.is_empty()).then_some(self.out.as_str()));
            }
            if !self.out.is_empty() {
                return Ok(Some(self.out.as_str()));
            }
            // Read bytes formed only an incomplete sequence; pull more input.
        }
    }

    fn decode_bytes(&mut self, len: usize, last: bool) -> Result<()> {
        let mut offset = 0;
        loop {
            let src = &self.buf[offset..len];
            if let Some(needed) = self
                .decoder
                .max_utf8_buffer_length_without_replacement(src.len())
            {
                self.out.reserve(needed);
            }
            let (result, read) =
                self.decoder
                    .decode_to_string_without_replacement(src, &mut self.out, last);
            offset += read;
            match result {
                DecoderResult::InputEmpty => return Ok(()),
                DecoderResult::OutputFull => continue,
                DecoderResult::Malformed(_, _) => {
                    return Err(IngestError::Decode {
                        encoding: self.decoder.encoding().name(),
                    });
                }
            }
        }
    }
}
