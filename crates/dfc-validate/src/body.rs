//! Single-pass body validation.
//!
//! One forward scan over the records accumulates every enabled defect
//! category at once. Memory grows with the number of distinct values seen in
//! checked columns, never with file length: records are consumed and dropped
//! after their checks run.

use std::collections::HashMap;

use dfc_model::{
    DuplicateSection, LineSection, Options, Report, Status, ValueSection,
};
use tracing::debug;

use crate::header::Header;

/// Duplicate-tracking state for one value in one column.
#[derive(Debug)]
enum Seen {
    /// Seen once, at this line.
    First(u64),
    /// Repeated; every line it occurred on, in order.
    Repeated(Vec<u64>),
}

/// Duplicate tracker for one column.
#[derive(Debug, Default)]
struct ColumnDupes {
    seen: HashMap<String, Seen>,
    /// Values in the order their first repeat was detected.
    order: Vec<String>,
}

impl ColumnDupes {
    /// Record a sighting of `value` at `line`. Returns true on a repeat.
    fn record(&mut self, value: &str, line: u64, verbose: bool) -> bool {
        if let Some(state) = self.seen.get_mut(value) {
            match state {
                Seen::First(memo) => {
                    let memo = *memo;
                    if verbose {
                        *state = Seen::Repeated(vec![memo, line]);
                        self.order.push(value.to_string());
                    }
                }
                Seen::Repeated(lines) => {
                    if verbose {
                        lines.push(line);
                    }
                }
            }
            true
        } else {
            self.seen.insert(value.to_string(), Seen::First(line));
            false
        }
    }
}

/// Streaming body validator.
///
/// Feed records in file order with [`push`](Self::push), then call
/// [`finish`](Self::finish) for the report. Line numbers are 1-based,
/// starting at the first record after the header.
pub struct BodyValidator {
    header: Header,
    limit: Option<Vec<usize>>,
    verbose: bool,
    count: u64,
    failed: bool,
    missing: Vec<u64>,
    blank_lines: Option<Vec<u64>>,
    empty_values: Option<Vec<(u64, usize)>>,
    duplicates: Option<Vec<(usize, ColumnDupes)>>,
}

impl BodyValidator {
    /// Build a validator for the given header and resolved limit indices.
    ///
    /// Accumulators for disabled checks are absent, not empty; the report
    /// keeps the "not checked" / "checked, nothing found" distinction.
    pub fn new(header: Header, limit: Option<Vec<usize>>, opts: &Options) -> Self {
        let duplicates = opts.duplicates.then(|| {
            let columns: Vec<usize> = match &limit {
                Some(indices) => indices.clone(),
                None => (0..header.len()).collect(),
            };
            columns
                .into_iter()
                .map(|col| (col, ColumnDupes::default()))
                .collect()
        });
        Self {
            header,
            limit,
            verbose: opts.verbose,
            count: 1,
            failed: false,
            missing: Vec::new(),
            blank_lines: opts.empty_lines.then(Vec::new),
            empty_values: opts.empty_values.then(Vec::new),
            duplicates,
        }
    }

    /// Line number the next pushed record will be assigned.
    pub fn next_line(&self) -> u64 {
        self.count
    }

    /// Check one record and advance the line counter.
    pub fn push(&mut self, record: &[String]) {
        let expected = self.header.len();

        // Field-count check, always active. A genuinely blank line is only
        // a defect when blank-line detection was asked for.
        if record.len() != expected {
            if record.len() == 1 && record[0].is_empty() {
                if let Some(lines) = &mut self.blank_lines {
                    self.failed = true;
                    if self.verbose {
                        lines.push(self.count);
                    }
                }
            } else {
                self.failed = true;
                if self.verbose {
                    self.missing.push(self.count);
                }
            }
        }

        // Value-level checks over the limited columns, or all of them.
        if self.empty_values.is_some() || self.duplicates.is_some() {
            let Self {
                header,
                limit,
                verbose,
                count,
                failed,
                empty_values,
                duplicates,
                ..
            } = self;
            match limit.as_deref() {
                Some(indices) => {
                    for &col in indices {
                        check_value(record, col, *count, *verbose, failed, empty_values, duplicates);
                    }
                }
                None => {
                    for col in 0..header.len() {
                        check_value(record, col, *count, *verbose, failed, empty_values, duplicates);
                    }
                }
            }
        }

        self.count += 1;
    }

    /// Assemble the final report once the record source is exhausted.
    pub fn finish(self) -> Report {
        let Self {
            header,
            failed,
            missing,
            blank_lines,
            empty_values,
            duplicates,
            ..
        } = self;

        let header_section = header.section();
        let failed = failed || header_section.is_some();
        let status = if failed { Status::Problems } else { Status::Ok };

        let missing_values = (!missing.is_empty()).then(|| LineSection {
            message: "Missing value on line(s)".to_string(),
            lines: missing,
        });

        let empty_lines = blank_lines
            .filter(|lines| !lines.is_empty())
            .map(|lines| LineSection {
                message: "Empty line(s)".to_string(),
                lines,
            });

        let empty_values = empty_values
            .filter(|entries| !entries.is_empty())
            .map(|entries| ValueSection {
                message: "Empty value(s) on line(s)".to_string(),
                values: entries
                    .into_iter()
                    .map(|(line, col)| format!("{line} ({name})", name = header.name(col)))
                    .collect(),
            });

        let duplicates = duplicates.and_then(|trackers| {
            let sections: Vec<DuplicateSection> = trackers
                .into_iter()
                .filter(|(_, tracker)| !tracker.order.is_empty())
                .map(|(col, tracker)| duplicate_section(header.name(col), tracker))
                .collect();
            (!sections.is_empty()).then_some(sections)
        });

        debug!(status = status.label(), "body scan finished");
        Report {
            status,
            header: header_section,
            missing_values,
            empty_lines,
            empty_values,
            duplicates,
        }
    }
}

/// Run the enabled value-level checks for one column of one record.
fn check_value(
    record: &[String],
    col: usize,
    line: u64,
    verbose: bool,
    failed: &mut bool,
    empty_values: &mut Option<Vec<(u64, usize)>>,
    duplicates: &mut Option<Vec<(usize, ColumnDupes)>>,
) {
    let item = record.get(col);

    // A single-field record is the blank-line case, already handled by the
    // field-count check; it is exempt here.
    if let Some(entries) = empty_values {
        if record.len() > 1 && item.is_some_and(|value| value.is_empty()) {
            *failed = true;
            if verbose {
                entries.push((line, col));
            }
        }
    }

    // Empty and absent values are never duplicates of each other.
    if let Some(trackers) = duplicates {
        if let Some(item) = item.filter(|value| !value.is_empty()) {
            if let Some((_, tracker)) = trackers.iter_mut().find(|(c, _)| *c == col) {
                if tracker.record(item, line, verbose) {
                    *failed = true;
                }
            }
        }
    }
}

fn duplicate_section(column: &str, tracker: ColumnDupes) -> DuplicateSection {
    let ColumnDupes { mut seen, order } = tracker;
    let values = order
        .iter()
        .map(|value| {
            let lines = match seen.remove(value) {
                Some(Seen::Repeated(lines)) => lines,
                _ => Vec::new(),
            };
            let joined = lines
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(", ");
            format!("\"{value}\" on line: {joined}")
        })
        .collect();
    DuplicateSection {
        column: column.to_string(),
        message: format!("Duplicate values for \"{column}\""),
        values,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::header::{check_header, resolve_limit};

    fn header(line: &str) -> Header {
        check_header(line, &Options::default()).expect("header")
    }

    fn record(fields: &[&str]) -> Vec<String> {
        fields.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn matching_records_pass() {
        let opts = Options::default();
        let mut validator = BodyValidator::new(header("a,b,c"), None, &opts);
        validator.push(&record(&["1", "2", "3"]));
        validator.push(&record(&["4", "5", "6"]));
        let report = validator.finish();
        assert!(report.is_ok());
        assert_eq!(report.section_count(), 0);
    }

    #[test]
    fn short_record_is_a_missing_value() {
        let opts = Options::default();
        let mut validator = BodyValidator::new(header("a,b,c"), None, &opts);
        validator.push(&record(&["1", "2", "3"]));
        validator.push(&record(&["1", "2"]));
        let report = validator.finish();
        assert_eq!(report.status, Status::Problems);
        let missing = report.missing_values.expect("section");
        assert_eq!(missing.message, "Missing value on line(s)");
        assert_eq!(missing.lines, [2]);
    }

    #[test]
    fn long_record_is_also_a_missing_value() {
        let opts = Options::default();
        let mut validator = BodyValidator::new(header("a,b"), None, &opts);
        validator.push(&record(&["1", "2", "3"]));
        let report = validator.finish();
        assert_eq!(report.missing_values.expect("section").lines, [1]);
    }

    #[test]
    fn blank_line_ignored_unless_enabled() {
        let opts = Options::default();
        let mut validator = BodyValidator::new(header("a,b"), None, &opts);
        validator.push(&record(&[""]));
        let report = validator.finish();
        assert!(report.is_ok());
        assert!(report.empty_lines.is_none());
        assert!(report.missing_values.is_none());
    }

    #[test]
    fn blank_line_flagged_when_enabled() {
        let opts = Options::default().with_empty_lines(true);
        let mut validator = BodyValidator::new(header("a,b"), None, &opts);
        validator.push(&record(&["1", "2"]));
        validator.push(&record(&[""]));
        let report = validator.finish();
        assert_eq!(report.status, Status::Problems);
        let section = report.empty_lines.expect("section");
        assert_eq!(section.message, "Empty line(s)");
        assert_eq!(section.lines, [2]);
        assert!(report.missing_values.is_none());
    }

    #[test]
    fn empty_value_records_line_and_column_name() {
        let opts = Options::default().with_empty_values(true);
        let mut validator = BodyValidator::new(header("a,b,c"), None, &opts);
        validator.push(&record(&["x", "", "z"]));
        let report = validator.finish();
        let section = report.empty_values.expect("section");
        assert_eq!(section.message, "Empty value(s) on line(s)");
        assert_eq!(section.values, ["1 (b)"]);
    }

    #[test]
    fn single_empty_field_never_counts_as_empty_value() {
        let opts = Options::default().with_empty_values(true);
        let mut validator = BodyValidator::new(header("a,b,c"), None, &opts);
        validator.push(&record(&[""]));
        let report = validator.finish();
        assert!(report.empty_values.is_none());
    }

    #[test]
    fn duplicate_lines_accumulate_in_order() {
        let opts = Options::default().with_duplicates(true);
        let mut validator = BodyValidator::new(header("x"), None, &opts);
        for value in ["a", "b", "a", "c", "a"] {
            validator.push(&record(&[value]));
        }
        let report = validator.finish();
        let sections = report.duplicates.expect("sections");
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].column, "x");
        assert_eq!(sections[0].message, "Duplicate values for \"x\"");
        assert_eq!(sections[0].values, ["\"a\" on line: 1, 3, 5"]);
    }

    #[test]
    fn empty_values_are_never_duplicates() {
        let opts = Options::default().with_duplicates(true);
        let mut validator = BodyValidator::new(header("a,b,c"), None, &opts);
        validator.push(&record(&["", "", ""]));
        validator.push(&record(&["", "", ""]));
        let report = validator.finish();
        assert!(report.duplicates.is_none());
        assert!(report.is_ok());
    }

    #[test]
    fn every_offending_column_gets_its_own_section() {
        let opts = Options::default().with_duplicates(true);
        let mut validator = BodyValidator::new(header("a,b"), None, &opts);
        validator.push(&record(&["1", "x"]));
        validator.push(&record(&["1", "x"]));
        let report = validator.finish();
        let sections = report.duplicates.expect("sections");
        assert_eq!(sections.len(), 2);
        assert_eq!(sections[0].column, "a");
        assert_eq!(sections[1].column, "b");
    }

    #[test]
    fn limit_restricts_value_checks_but_not_field_count() {
        let opts = Options::default()
            .with_empty_values(true)
            .with_duplicates(true);
        let hdr = header("a,b,c");
        let limit = resolve_limit(&hdr, Some("b")).expect("limit");
        let mut validator = BodyValidator::new(hdr, limit, &opts);
        validator.push(&record(&["", "1", ""]));
        validator.push(&record(&["", "1", ""]));
        validator.push(&record(&["only-two", "fields"]));
        let report = validator.finish();
        // Column b duplicates are seen; columns a and c are not examined.
        let sections = report.duplicates.expect("sections");
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].column, "b");
        assert!(report.empty_values.is_none());
        // The field-count check still covers the whole record.
        assert_eq!(report.missing_values.expect("section").lines, [3]);
    }

    #[test]
    fn short_record_has_absent_not_empty_trailing_columns() {
        let opts = Options::default()
            .with_empty_values(true)
            .with_duplicates(true);
        let mut validator = BodyValidator::new(header("a,b,c"), None, &opts);
        validator.push(&record(&["1", "2"]));
        let report = validator.finish();
        // Column c was absent from the record: missing, not empty.
        assert!(report.empty_values.is_none());
        assert_eq!(report.missing_values.expect("section").lines, [1]);
    }

    #[test]
    fn quiet_mode_keeps_status_only() {
        let opts = Options::default()
            .with_verbose(false)
            .with_empty_lines(true)
            .with_empty_values(true)
            .with_duplicates(true);
        let mut validator = BodyValidator::new(header("a,b"), None, &opts);
        validator.push(&record(&["1", ""]));
        validator.push(&record(&[""]));
        validator.push(&record(&["1", "2", "3"]));
        validator.push(&record(&["1", "x"]));
        validator.push(&record(&["1", "x"]));
        let report = validator.finish();
        assert_eq!(report.status, Status::Problems);
        assert_eq!(report.section_count(), 0);
    }

    #[test]
    fn defective_header_fails_an_otherwise_clean_body() {
        let opts = Options::default();
        let hdr = check_header("a,,c", &Options::default()).expect("header");
        let mut validator = BodyValidator::new(hdr, None, &opts);
        validator.push(&record(&["1", "2", "3"]));
        let report = validator.finish();
        assert_eq!(report.status, Status::Problems);
        let section = report.header.expect("section");
        assert_eq!(section.empty_positions, [1]);
        assert!(report.missing_values.is_none());
    }

    #[test]
    fn line_counter_starts_at_one() {
        let opts = Options::default();
        let validator = BodyValidator::new(header("a"), None, &opts);
        assert_eq!(validator.next_line(), 1);
    }
}
