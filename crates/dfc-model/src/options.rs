//! Validation options.

use serde::{Deserialize, Serialize};

/// Options controlling a single validation run.
///
/// Each check is independently toggleable; the field-count check is always
/// active and has no flag. All defaults match the plain "comma-separated
/// UTF-8 file" case.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Options {
    /// Text encoding label understood by `encoding_rs`
    /// (e.g. `"utf-8"`, `"windows-1252"`, `"utf-16le"`).
    pub encoding: String,

    /// Field delimiter byte. Defaults to `,`.
    pub delimiter: u8,

    /// Record terminator byte. Defaults to `\n`.
    pub line_ending: u8,

    /// Comma-joined column names restricting which columns receive
    /// value-level checks. `None` checks all columns.
    pub limit: Option<String>,

    /// Flag blank lines instead of silently skipping them.
    pub empty_lines: bool,

    /// Flag empty field values in checked columns.
    pub empty_values: bool,

    /// Track duplicate values per checked column.
    pub duplicates: bool,

    /// Accumulate per-line detail in the report. When disabled only the
    /// overall pass/fail status is tracked.
    pub verbose: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            encoding: "utf-8".to_string(),
            delimiter: b',',
            line_ending: b'\n',
            limit: None,
            empty_lines: false,
            empty_values: false,
            duplicates: false,
            verbose: true,
        }
    }
}

impl Options {
    /// Set the text encoding label.
    #[must_use]
    pub fn with_encoding(mut self, label: impl Into<String>) -> Self {
        self.encoding = label.into();
        self
    }

    /// Set the field delimiter byte.
    #[must_use]
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Set the record terminator byte.
    #[must_use]
    pub fn with_line_ending(mut self, line_ending: u8) -> Self {
        self.line_ending = line_ending;
        self
    }

    /// Restrict value-level checks to the given comma-joined column names.
    #[must_use]
    pub fn with_limit(mut self, limit: impl Into<String>) -> Self {
        self.limit = Some(limit.into());
        self
    }

    /// Enable or disable blank-line detection.
    #[must_use]
    pub fn with_empty_lines(mut self, enabled: bool) -> Self {
        self.empty_lines = enabled;
        self
    }

    /// Enable or disable empty-value detection.
    #[must_use]
    pub fn with_empty_values(mut self, enabled: bool) -> Self {
        self.empty_values = enabled;
        self
    }

    /// Enable or disable duplicate-value detection.
    #[must_use]
    pub fn with_duplicates(mut self, enabled: bool) -> Self {
        self.duplicates = enabled;
        self
    }

    /// Enable or disable per-line detail accumulation.
    #[must_use]
    pub fn with_verbose(mut self, enabled: bool) -> Self {
        self.verbose = enabled;
        self
    }
}
