//! Byte-source handling for delimited files.
//!
//! Three pieces, layered bottom-up:
//!
//! - [`decode`]: incremental text decoding over any `Read` source, with BOM
//!   removal, via `encoding_rs`.
//! - [`firstline`]: extract the first logical line of a source without
//!   reading past it.
//! - [`records`]: pull-based iteration of parsed records, one logical line
//!   at a time, preserving blank lines and file order.

pub mod decode;
pub mod error;
pub mod firstline;
pub mod records;

pub use decode::{StreamDecoder, resolve_encoding};
pub use error::{IngestError, Result};
pub use firstline::{first_line, first_line_from_bytes, first_line_from_reader};
pub use records::{RecordReader, split_record};
