//! First-line extraction.
//!
//! Reads just enough of a byte source to produce its first logical line: the
//! source is read in chunks, decoded incrementally, and dropped as soon as
//! the line terminator shows up. A leading byte-order mark is stripped by the
//! decoder.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use dfc_model::Options;
use tracing::debug;

use crate::decode::{StreamDecoder, resolve_encoding};
use crate::error::{IngestError, Result};

/// Read the first logical line of the file at `path`, excluding the
/// terminator itself.
pub fn first_line(path: impl AsRef<Path>, opts: &Options) -> Result<String> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| IngestError::FileOpen {
        path: path.to_path_buf(),
        source,
    })?;
    let line = first_line_from_reader(file, opts)?;
    debug!(path = %path.display(), chars = line.chars().count(), "first line extracted");
    Ok(line)
}

/// Read the first logical line of an in-memory buffer.
pub fn first_line_from_bytes(bytes: &[u8], opts: &Options) -> Result<String> {
    first_line_from_reader(bytes, opts)
}

/// Read the first logical line from any byte source.
///
/// If the source ends before a terminator is found, the entire decoded
/// content is the first line.
pub fn first_line_from_reader<R: Read>(reader: R, opts: &Options) -> Result<String> {
    let encoding = resolve_encoding(&opts.encoding)?;
    let terminator = opts.line_ending as char;
    let mut decoder = StreamDecoder::new(reader, encoding);
    let mut acc = String::new();
    while let Some(chunk) = decoder.next_chunk()? {
        match chunk.find(terminator) {
            Some(idx) => {
                acc.push_str(&chunk[..idx]);
                // Terminator located: the source is released here, unread.
                return Ok(acc);
            }
            None => acc.push_str(chunk),
        }
    }
    Ok(acc)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stops_at_first_terminator() {
        let opts = Options::default();
        let line = first_line_from_bytes(b"id,name\n1,alice\n2,bob\n", &opts).expect("first line");
        assert_eq!(line, "id,name");
    }

    #[test]
    fn whole_content_when_no_terminator() {
        let opts = Options::default();
        let line = first_line_from_bytes(b"id,name", &opts).expect("first line");
        assert_eq!(line, "id,name");
    }

    #[test]
    fn strips_byte_order_mark() {
        let opts = Options::default();
        let line = first_line_from_bytes(b"\xEF\xBB\xBFid,name\nrow\n", &opts).expect("first line");
        assert_eq!(line, "id,name");
    }

    #[test]
    fn empty_source_gives_empty_line() {
        let opts = Options::default();
        let line = first_line_from_bytes(b"", &opts).expect("first line");
        assert_eq!(line, "");
    }

    #[test]
    fn honors_custom_terminator() {
        let opts = Options::default().with_line_ending(b';');
        let line = first_line_from_bytes(b"id,name;1,alice;", &opts).expect("first line");
        assert_eq!(line, "id,name");
    }

    #[test]
    fn carriage_return_is_preserved() {
        // The terminator is matched exactly; a CRLF file keeps its \r.
        let opts = Options::default();
        let line = first_line_from_bytes(b"id,name\r\nrow\r\n", &opts).expect("first line");
        assert_eq!(line, "id,name\r");
    }
}
