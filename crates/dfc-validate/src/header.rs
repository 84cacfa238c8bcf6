//! Header parsing and structural checks.
//!
//! The header is established once per validation and never mutated. Its raw
//! parsed length stays authoritative for field-count checks even when
//! individual names are defective.

use dfc_ingest::split_record;
use dfc_model::{HeaderSection, Options};

use crate::error::{Result, ValidateError};

/// Parsed header row.
#[derive(Debug, Clone)]
pub struct Header {
    columns: Vec<String>,
    empty_names: Vec<usize>,
    duplicate_names: Vec<String>,
}

impl Header {
    /// Column names in file order.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Expected field count for every body record.
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Returns true if the header has no columns.
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Name of the column at `col`.
    pub fn name(&self, col: usize) -> &str {
        &self.columns[col]
    }

    /// 0-based positions of empty column names.
    pub fn empty_names(&self) -> &[usize] {
        &self.empty_names
    }

    /// Column names that appear more than once.
    pub fn duplicate_names(&self) -> &[String] {
        &self.duplicate_names
    }

    /// Report section for structural header findings, if any.
    pub fn section(&self) -> Option<HeaderSection> {
        if self.empty_names.is_empty() && self.duplicate_names.is_empty() {
            return None;
        }
        let message = match (self.empty_names.is_empty(), self.duplicate_names.is_empty()) {
            (false, true) => "The header contains empty values",
            (true, false) => "The header contains duplicate column names",
            _ => "The header contains empty values and duplicate column names",
        };
        Some(HeaderSection {
            message: message.to_string(),
            empty_positions: self.empty_names.clone(),
            duplicate_names: self.duplicate_names.clone(),
        })
    }
}

/// Check the extracted header line for structural correctness.
///
/// A header that parses to a single empty field means the file itself is
/// empty; that ends validation before the body pass. Empty or duplicated
/// column names are recorded on the returned [`Header`] so they surface in
/// the final report while the parsed length keeps serving field-count
/// checks.
pub fn check_header(line: &str, opts: &Options) -> Result<Header> {
    let columns = split_record(line, opts.delimiter);
    if columns.len() == 1 && columns[0].is_empty() {
        return Err(ValidateError::EmptyFile);
    }
    let empty_names = columns
        .iter()
        .enumerate()
        .filter_map(|(idx, name)| name.is_empty().then_some(idx))
        .collect();
    let mut duplicate_names: Vec<String> = Vec::new();
    for (idx, name) in columns.iter().enumerate() {
        if name.is_empty() {
            continue;
        }
        if columns[..idx].contains(name) && !duplicate_names.contains(name) {
            duplicate_names.push(name.clone());
        }
    }
    Ok(Header {
        columns,
        empty_names,
        duplicate_names,
    })
}

/// Resolve a comma-joined limit list into ascending column indices.
///
/// Every requested name must exist in the header; unmatched names are
/// collected into a single [`ValidateError::UnknownColumns`] so the caller
/// sees the full mismatch at once, before the body pass starts.
pub fn resolve_limit(header: &Header, limit: Option<&str>) -> Result<Option<Vec<usize>>> {
    let Some(limit) = limit else {
        return Ok(None);
    };
    let mut indices = Vec::new();
    let mut missing = Vec::new();
    for name in limit.split(',') {
        match header.columns().iter().position(|column| column == name) {
            Some(idx) => indices.push(idx),
            None => missing.push(name.to_string()),
        }
    }
    if !missing.is_empty() {
        return Err(ValidateError::UnknownColumns { missing });
    }
    indices.sort_unstable();
    indices.dedup();
    Ok(Some(indices))
}
