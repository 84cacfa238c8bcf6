//! Structural validation for delimited text files.
//!
//! One forward pass over a file's records accumulates every enabled defect
//! category at once:
//!
//! - **Field counts**: records whose field count differs from the header's
//!   (always checked)
//! - **Empty lines**: genuinely blank records (optional)
//! - **Empty values**: empty fields in checked columns (optional)
//! - **Duplicates**: repeated values per checked column (optional)
//!
//! Malformed data is reported, never rejected: the scan always runs to the
//! end of the source so the report is exhaustive rather than fail-fast. Only
//! configuration problems and I/O or decode failures surface as errors.
//!
//! # Example
//!
//! ```
//! use dfc_model::Options;
//! use dfc_validate::validate_bytes;
//!
//! let opts = Options::default().with_duplicates(true);
//! let report = validate_bytes(b"id,name\n7,alice\n7,bob\n", &opts)?;
//! assert!(!report.is_ok());
//! # Ok::<(), dfc_validate::ValidateError>(())
//! ```

mod body;
mod error;
mod header;

pub use body::BodyValidator;
pub use error::{Result, ValidateError};
pub use header::{Header, check_header, resolve_limit};

use std::path::Path;

use dfc_ingest::{RecordReader, first_line, first_line_from_bytes};
use dfc_model::{Options, Report};
use tracing::{debug, info};

/// Validate the file at `path` and return its report.
///
/// The first line is read on its own to establish the header; the body pass
/// then streams the remaining records. Header-level configuration errors end
/// validation before any record is scanned.
pub fn validate_file(path: impl AsRef<Path>, opts: &Options) -> Result<Report> {
    let path = path.as_ref();
    let line = first_line(path, opts)?;
    let header = check_header(&line, opts)?;
    let limit = resolve_limit(&header, opts.limit.as_deref())?;
    debug!(
        columns = header.len(),
        limited = limit.is_some(),
        "header checked"
    );
    let reader = RecordReader::open(path, opts)?;
    let report = scan_body(header, limit, reader, opts)?;
    info!(status = report.status.label(), "validation finished");
    Ok(report)
}

/// Validate an in-memory buffer and return its report.
pub fn validate_bytes(bytes: &[u8], opts: &Options) -> Result<Report> {
    let line = first_line_from_bytes(bytes, opts)?;
    let header = check_header(&line, opts)?;
    let limit = resolve_limit(&header, opts.limit.as_deref())?;
    let reader = RecordReader::from_bytes(bytes, opts)?;
    scan_body(header, limit, reader, opts)
}

/// Run the body scan over every record after the header.
///
/// Source errors abort the scan; no partial report is produced.
fn scan_body<I>(
    header: Header,
    limit: Option<Vec<usize>>,
    records: I,
    opts: &Options,
) -> Result<Report>
where
    I: IntoIterator<Item = dfc_ingest::Result<Vec<String>>>,
{
    let mut validator = BodyValidator::new(header, limit, opts);
    for record in records.into_iter().skip(1) {
        validator.push(&record?);
    }
    Ok(validator.finish())
}
