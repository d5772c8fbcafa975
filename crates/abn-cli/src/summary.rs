//! Terminal rendering for check, batch and explain results.

use anyhow::{Context, Result};
use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use abn_core::{BatchReport, ChecksumBreakdown, CheckOutcome};

/// One line per outcome: the canonical form, or the input and the reason.
pub fn render_plain(outcomes: &[CheckOutcome]) -> String {
    let mut out = String::new();
    for outcome in outcomes {
        match &outcome.result {
            Ok(abn) => out.push_str(&abn.to_string()),
            Err(error) => {
                out.push_str(&format!(
                    "{:?}: invalid ({}): {error}",
                    outcome.input,
                    error.code()
                ));
            }
        }
        out.push('\n');
    }
    out
}

pub fn render_json(report: &BatchReport) -> Result<String> {
    serde_json::to_string_pretty(report).context("serialize report")
}

/// Per-record table followed by a totals table.
pub fn render_table(report: &BatchReport, invalid_only: bool, styled: bool) -> String {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Record"),
        header_cell("Input"),
        header_cell("ABN"),
        header_cell("Status"),
        header_cell("Reason"),
    ]);
    apply_table_style(&mut table, styled);
    align_column(&mut table, 0, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Center);
    for outcome in &report.outcomes {
        if invalid_only && outcome.is_valid() {
            continue;
        }
        let (abn_cell, reason_cell) = match &outcome.result {
            Ok(abn) => (Cell::new(abn), dim_cell("-")),
            Err(error) => (
                dim_cell("-"),
                Cell::new(format!("{}: {error}", error.code())).fg(Color::Red),
            ),
        };
        table.add_row(vec![
            Cell::new(outcome.record),
            Cell::new(&outcome.input),
            abn_cell,
            status_cell(outcome.is_valid()),
            reason_cell,
        ]);
    }

    let summary = &report.summary;
    let mut totals = Table::new();
    totals.set_header(vec![header_cell("Result"), header_cell("Count")]);
    apply_table_style(&mut totals, styled);
    align_column(&mut totals, 1, CellAlignment::Right);
    totals.add_row(vec![Cell::new("Total"), Cell::new(summary.total)]);
    totals.add_row(vec![
        Cell::new("Valid"),
        count_cell(summary.valid, Color::Green),
    ]);
    totals.add_row(vec![
        Cell::new("Group ABNs"),
        Cell::new(summary.group_abns),
    ]);
    for (kind, count) in &summary.by_kind {
        totals.add_row(vec![Cell::new(kind.code()), count_cell(*count, Color::Red)]);
    }
    totals.add_row(vec![
        Cell::new("Invalid").add_attribute(Attribute::Bold),
        count_cell(summary.invalid, Color::Red).add_attribute(Attribute::Bold),
    ]);
    format!("{table}\n{totals}\n")
}

/// Position-by-position checksum working.
pub fn render_explain(breakdown: &ChecksumBreakdown, styled: bool) -> String {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Position"),
        header_cell("Digit"),
        header_cell("Adjusted"),
        header_cell("Weight"),
        header_cell("Product"),
    ]);
    apply_table_style(&mut table, styled);
    for column in 0..5 {
        align_column(&mut table, column, CellAlignment::Right);
    }
    for term in &breakdown.terms {
        table.add_row(vec![
            Cell::new(term.position + 1),
            Cell::new(term.digit),
            Cell::new(term.adjusted),
            Cell::new(term.weight),
            Cell::new(term.product),
        ]);
    }
    let verdict = if breakdown.is_valid() {
        "valid"
    } else {
        "invalid"
    };
    format!(
        "{table}\nsum = {}, {} mod 89 = {} ({verdict})\n",
        breakdown.sum, breakdown.sum, breakdown.remainder
    )
}

fn apply_table_style(table: &mut Table, styled: bool) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS);
    if styled {
        table
            .enforce_styling()
            .set_content_arrangement(ContentArrangement::Dynamic)
            .set_width(120);
    } else {
        // Piped output: no ANSI codes and no wrapping.
        table
            .force_no_tty()
            .set_content_arrangement(ContentArrangement::Disabled);
    }
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

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value.to_string()).add_attribute(Attribute::Dim)
}

fn status_cell(valid: bool) -> Cell {
    if valid {
        Cell::new("✓")
            .fg(Color::Green)
            .add_attribute(Attribute::Bold)
    } else {
        Cell::new("✗").fg(Color::Red).add_attribute(Attribute::Bold)
    }
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
    } else {
        dim_cell(count)
    }
}
