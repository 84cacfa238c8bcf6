//! Error types for delimited-file ingestion.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while reading or decoding a delimited source.
#[derive(Debug, Error)]
pub enum IngestError {
    /// Source file could not be opened.
    #[error("failed to open file {path}: {source}")]
    FileOpen {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Read from the underlying source failed.
    #[error("read failed: {0}")]
    Read(#[from] std::io::Error),

    /// The encoding label is not recognized by `encoding_rs`.
    #[error("unknown encoding label: {label}")]
    UnknownEncoding { label: String },

    /// The byte stream is malformed under the configured encoding.
    #[error("malformed {encoding} byte sequence in input")]
    Decode { encoding: &'static str },
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;
