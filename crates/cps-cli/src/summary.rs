//! Terminal rendering: the report views and the ranges listing.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use cps_model::{AuditReport, RangeTable};
use cps_report::{ReportEnvelope, render_text};

use crate::cli::ReportFormatArg;
use crate::types::AuditOutcome;

pub fn print_audit(outcome: &AuditOutcome, format: ReportFormatArg) {
    match format {
        ReportFormatArg::Text => print!("{}", render_text(&outcome.report)),
        ReportFormatArg::Table => print_audit_tables(&outcome.report),
        ReportFormatArg::Json => {
            let envelope =
                ReportEnvelope::new(outcome.report.clone(), Some(outcome.codebook.as_path()));
            match envelope.to_json() {
                Ok(json) => println!("{json}"),
                Err(error) => eprintln!("error: {error}"),
            }
        }
    }
}

fn print_audit_tables(report: &AuditReport) {
    println!(
        "Found {} variables with values outside valid ranges",
        report.out_of_range_count()
    );
    println!(
        "Found {} suspicious derived variables",
        report.suspicious_count()
    );

    if !report.out_of_range.is_empty() {
        let mut table = Table::new();
        table.set_header(vec![
            header_cell("Variable"),
            header_cell("Description"),
            header_cell("Data Range"),
            header_cell("Valid Range"),
            header_cell("Issue"),
        ]);
        apply_table_style(&mut table);
        for violation in &report.out_of_range {
            table.add_row(vec![
                Cell::new(&violation.variable)
                    .fg(Color::Blue)
                    .add_attribute(Attribute::Bold),
                Cell::new(&violation.description),
                Cell::new(format!("{} to {}", violation.data_min, violation.data_max)),
                Cell::new(format!("{} to {}", violation.valid_min, violation.valid_max)),
                Cell::new(&violation.issue).fg(Color::Red),
            ]);
        }
        println!("{table}");
    }

    let resolved: Vec<_> = report.suspicious.resolved().collect();
    if !resolved.is_empty() {
        let mut table = Table::new();
        table.set_header(vec![
            header_cell("Derived"),
            header_cell("Original"),
            header_cell("Description"),
        ]);
        apply_table_style(&mut table);
        for origin in resolved {
            table.add_row(vec![
                Cell::new(&origin.variable)
                    .fg(Color::Blue)
                    .add_attribute(Attribute::Bold),
                Cell::new(origin.original_variable.as_deref().unwrap_or("-")),
                Cell::new(&origin.description),
            ]);
        }
        println!();
        println!("Origins:");
        println!("{table}");
    }
}

pub fn print_ranges(ranges: &RangeTable) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Variable"),
        header_cell("Min"),
        header_cell("Max"),
        header_cell("Description"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);
    for (name, range) in ranges.iter() {
        table.add_row(vec![
            Cell::new(name).fg(Color::Blue).add_attribute(Attribute::Bold),
            Cell::new(range.min),
            Cell::new(range.max),
            Cell::new(&range.description),
        ]);
    }
    println!("{table}");
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}
