//! Validation report types.
//!
//! A [`Report`] is the sole output of a validation pass. Sections are
//! `Option`s so that "not checked" and "checked, nothing found" both render
//! as an absent section, mirroring the accumulator layout of the scan.

use serde::{Deserialize, Serialize};

/// Overall verdict for a validated file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Status {
    /// No defect category found anything.
    #[serde(rename = "File looks ok")]
    Ok,
    /// At least one defect was recorded.
    #[serde(rename = "File has problems!")]
    Problems,
}

impl Status {
    /// Human-readable label, identical to the serialized form.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Ok => "File looks ok",
            Self::Problems => "File has problems!",
        }
    }

    /// Returns true when the file passed every enabled check.
    pub fn is_ok(&self) -> bool {
        matches!(self, Self::Ok)
    }
}

/// Findings addressed by line number alone (missing fields, blank lines).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineSection {
    pub message: String,
    /// 1-based line numbers, in file order.
    pub lines: Vec<u64>,
}

/// Findings rendered as pre-formatted strings (empty values).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValueSection {
    pub message: String,
    /// `"<line> (<column name>)"` entries, in check order.
    pub values: Vec<String>,
}

/// Duplicate findings for one column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DuplicateSection {
    /// Name of the offending column.
    pub column: String,
    pub message: String,
    /// `"<value>" on line: l1, l2, ...` entries, in the order each value was
    /// first detected as a duplicate.
    pub values: Vec<String>,
}

/// Structural findings about the header row itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeaderSection {
    pub message: String,
    /// 0-based positions of empty column names.
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub empty_positions: Vec<usize>,
    /// Column names that appear more than once.
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub duplicate_names: Vec<String>,
}

/// Final validation report.
///
/// Immutable once assembled; section order follows the order checks run in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub status: Status,

    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub header: Option<HeaderSection>,

    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub missing_values: Option<LineSection>,

    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub empty_lines: Option<LineSection>,

    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub empty_values: Option<ValueSection>,

    /// One section per offending column, ascending column order.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub duplicates: Option<Vec<DuplicateSection>>,
}

impl Report {
    /// A clean report with no findings.
    pub fn ok() -> Self {
        Self {
            status: Status::Ok,
            header: None,
            missing_values: None,
            empty_lines: None,
            empty_values: None,
            duplicates: None,
        }
    }

    /// Returns true when the file passed every enabled check.
    pub fn is_ok(&self) -> bool {
        self.status.is_ok()
    }

    /// Number of populated sections.
    pub fn section_count(&self) -> usize {
        usize::from(self.header.is_some())
            + usize::from(self.missing_values.is_some())
            + usize::from(self.empty_lines.is_some())
            + usize::from(self.empty_values.is_some())
            + self.duplicates.as_ref().map_or(0, Vec::len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_labels_match_serialized_form() {
        assert_eq!(Status::Ok.label(), "File looks ok");
        assert_eq!(Status::Problems.label(), "File has problems!");
        assert_eq!(
            serde_json::to_string(&Status::Problems).expect("serialize"),
            "\"File has problems!\""
        );
    }

    #[test]
    fn clean_report_serializes_without_sections() {
        let json = serde_json::to_string(&Report::ok()).expect("serialize");
        assert_eq!(json, "{\"status\":\"File looks ok\"}");
    }

    #[test]
    fn sections_use_camel_case_keys() {
        let report = Report {
            status: Status::Problems,
            missing_values: Some(LineSection {
                message: "Missing value on line(s)".to_string(),
                lines: vec![2, 5],
            }),
            empty_lines: Some(LineSection {
                message: "Empty line(s)".to_string(),
                lines: vec![3],
            }),
            ..Report::ok()
        };
        let json = serde_json::to_string(&report).expect("serialize");
        assert!(json.contains("\"missingValues\""));
        assert!(json.contains("\"emptyLines\""));
        assert!(!json.contains("\"emptyValues\""));
        assert_eq!(report.section_count(), 2);
    }

    #[test]
    fn report_round_trips() {
        let report = Report {
            status: Status::Problems,
            duplicates: Some(vec![DuplicateSection {
                column: "id".to_string(),
                message: "Duplicate values for \"id\"".to_string(),
                values: vec!["\"7\" on line: 1, 4".to_string()],
            }]),
            ..Report::ok()
        };
        let json = serde_json::to_string(&report).expect("serialize");
        let round: Report = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(round, report);
    }
}
