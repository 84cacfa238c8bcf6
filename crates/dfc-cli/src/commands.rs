//! Command execution for the dfc binary.

use anyhow::{Context, Result, ensure};
use tracing::debug;

use dfc_model::{Options, Report};
use dfc_validate::validate_file;

use crate::cli::Cli;

/// Run the validation described by the CLI arguments.
pub fn run_check(cli: &Cli) -> Result<Report> {
    ensure!(
        cli.delimiter.is_ascii(),
        "delimiter must be a single ASCII character"
    );
    ensure!(
        cli.line_ending.is_ascii(),
        "line ending must be a single ASCII character"
    );

    let mut opts = Options::default()
        .with_encoding(cli.encoding.clone())
        .with_delimiter(cli.delimiter as u8)
        .with_line_ending(cli.line_ending as u8)
        .with_empty_lines(cli.empty_lines)
        .with_empty_values(cli.empty_values)
        .with_duplicates(cli.duplicates)
        .with_verbose(!cli.status_only);
    if let Some(limit) = &cli.limit {
        opts = opts.with_limit(limit.clone());
    }

    debug!(path = %cli.file.display(), "starting validation");
    validate_file(&cli.file, &opts).with_context(|| format!("validate {}", cli.file.display()))
}
