//! Report rendering for the terminal.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, Color, ContentArrangement, Table};

use dfc_model::Report;

/// Print the report as a human-readable table.
pub fn print_report(report: &Report) {
    println!("{}", report.status.label());
    if report.section_count() == 0 {
        return;
    }

    let mut table = Table::new();
    table.set_header(vec![header_cell("Check"), header_cell("Findings")]);
    apply_table_style(&mut table);

    if let Some(section) = &report.header {
        let mut findings = Vec::new();
        if !section.empty_positions.is_empty() {
            findings.push(format!(
                "empty names at position(s): {}",
                join(&section.empty_positions)
            ));
        }
        if !section.duplicate_names.is_empty() {
            findings.push(format!(
                "duplicated name(s): {}",
                section.duplicate_names.join(", ")
            ));
        }
        table.add_row(vec![
            check_cell(&section.message),
            Cell::new(findings.join("\n")),
        ]);
    }
    if let Some(section) = &report.missing_values {
        table.add_row(vec![
            check_cell(&section.message),
            Cell::new(join(&section.lines)),
        ]);
    }
    if let Some(section) = &report.empty_lines {
        table.add_row(vec![
            check_cell(&section.message),
            Cell::new(join(&section.lines)),
        ]);
    }
    if let Some(section) = &report.empty_values {
        table.add_row(vec![
            check_cell(&section.message),
            Cell::new(section.values.join("\n")),
        ]);
    }
    if let Some(sections) = &report.duplicates {
        for section in sections {
            table.add_row(vec![
                check_cell(&section.message),
                Cell::new(section.values.join("\n")),
            ]);
        }
    }
    println!("{table}");
}

/// Print the report as pretty JSON.
pub fn print_json(report: &Report) -> serde_json::Result<()> {
    println!("{}", serde_json::to_string_pretty(report)?);
    Ok(())
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
}

fn header_cell(text: &str) -> Cell {
    Cell::new(text).add_attribute(Attribute::Bold)
}

fn check_cell(text: &str) -> Cell {
    Cell::new(text).fg(Color::Red)
}

fn join<T: ToString>(items: &[T]) -> String {
    items
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
