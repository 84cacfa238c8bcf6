//! Validation error types.
//!
//! Validation findings are never errors; they land in the report. Errors are
//! reserved for configuration problems caught before the body pass and for
//! source failures that abort it.

use dfc_ingest::IngestError;
use thiserror::Error;

/// Errors surfaced before or during a validation pass.
#[derive(Debug, Error)]
pub enum ValidateError {
    /// The header line parsed to nothing, so the file has no usable columns.
    #[error("File appears to be empty!")]
    EmptyFile,

    /// The limit list asked for columns the header does not have.
    #[error(
        "the following columns did not correspond to the header: {}",
        missing.join(", ")
    )]
    UnknownColumns { missing: Vec<String> },

    /// The underlying source failed while reading or decoding.
    #[error(transparent)]
    Ingest(#[from] IngestError),
}

/// Result type for validation operations.
pub type Result<T> = std::result::Result<T, ValidateError>;
