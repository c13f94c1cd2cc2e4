use comfy_table::{Cell, Color};

use crate::core::{ActivityRecord, ErrorKind, ProgressStatus, Summary};
use crate::output::images::AssetLookup;
use crate::output::format::{
    NumberFormat, create_styled_table, format_deviation, format_number, format_percent,
    header_cell, right_cell, styled_cell,
};
use crate::source::IngestReport;

#[derive(Debug, Clone, Copy)]
pub struct TableOptions {
    pub use_color: bool,
    pub compact: bool,
    pub number_format: NumberFormat,
}

fn color(use_color: bool, c: Color) -> Option<Color> {
    use_color.then_some(c)
}

fn status_color(status: ProgressStatus, use_color: bool) -> Option<Color> {
    match status {
        ProgressStatus::NotStarted => color(use_color, Color::DarkGrey),
        ProgressStatus::InProgress => color(use_color, Color::Yellow),
        ProgressStatus::Completed => color(use_color, Color::Green),
    }
}

/// Green when at or ahead of plan, red when behind
fn deviation_color(record: &ActivityRecord, use_color: bool) -> Option<Color> {
    if record.is_on_track() {
        color(use_color, Color::Green)
    } else {
        color(use_color, Color::Red)
    }
}

/// Print the summary line with optional timing
pub fn print_summary_line(summary: &Summary, opts: &TableOptions, elapsed_ms: Option<f64>) {
    let fmt = opts.number_format;
    let mut text = format!(
        "{} activities from {} rows ({} rejected, {} sub-activity tokens dropped)",
        format_number(summary.valid_rows, fmt),
        format_number(summary.total_rows, fmt),
        format_number(summary.invalid_rows, fmt),
        format_number(summary.dropped_tokens, fmt),
    );
    if let (Some(planned), Some(actual)) = (summary.overall_planned, summary.overall_actual) {
        text.push_str(&format!(
            " | overall {} of {} planned",
            format_percent(actual, fmt),
            format_percent(planned, fmt)
        ));
    }

    match elapsed_ms {
        Some(ms) if opts.use_color => println!("\n  {} | \x1b[36m{:.0}ms\x1b[0m\n", text, ms),
        Some(ms) => println!("\n  {} | {:.0}ms\n", text, ms),
        None => println!("\n  {}\n", text),
    }
}

fn build_header(opts: &TableOptions, show_images: bool) -> Vec<Cell> {
    let c = opts.use_color;
    let mut h = vec![
        header_cell("Activity", c),
        header_cell("Planned", c),
        header_cell("Actual", c),
        header_cell("Deviation", c),
    ];
    if !opts.compact {
        h.push(header_cell("Status", c));
    }
    if show_images {
        h.push(header_cell("Image", c));
    }
    h
}

fn record_rows(
    record: &ActivityRecord,
    opts: &TableOptions,
    image: Option<&str>,
) -> Vec<Vec<Cell>> {
    let fmt = opts.number_format;
    let c = opts.use_color;
    let status = record.status();

    let mut row = vec![
        styled_cell(&record.name, None, true),
        right_cell(&format_percent(record.planned, fmt), None, false),
        right_cell(&format_percent(record.actual, fmt), None, true),
        right_cell(&format_deviation(record.deviation(), fmt), deviation_color(record, c), false),
    ];
    if !opts.compact {
        row.push(styled_cell(status.label(), status_color(status, c), false));
    }
    if let Some(image) = image {
        row.push(Cell::new(image));
    }

    let mut rows = vec![row];
    if opts.compact {
        return rows;
    }

    let dim = color(c, Color::DarkGrey);
    for sub in &record.sub_activities {
        let planned = sub
            .planned
            .map(|p| format_percent(p, fmt))
            .unwrap_or_else(|| "-".to_string());
        let mut sub_row = vec![
            styled_cell(&format!("  └ {}", sub.name), dim, false),
            right_cell(&planned, dim, false),
            right_cell(&format_percent(sub.actual, fmt), dim, false),
            Cell::new(""),
            styled_cell(ProgressStatus::from_actual(sub.actual).label(), dim, false),
        ];
        if image.is_some() {
            sub_row.push(Cell::new(""));
        }
        rows.push(sub_row);
    }
    rows
}

pub fn print_records_table(
    report: &IngestReport,
    opts: &TableOptions,
    images: Option<&dyn AssetLookup>,
) {
    let mut table = create_styled_table();
    table.set_header(build_header(opts, images.is_some()));

    for record in &report.records {
        let image = images.map(|lookup| lookup.resolve(&record.name));
        for row in record_rows(record, opts, image) {
            table.add_row(row);
        }
    }

    println!("\n  Progress - {}\n", report.display_name);
    println!("{table}");
    print_summary_line(&report.summary, opts, Some(report.elapsed_ms));
    if report.has_errors() {
        println!("  Run `frentes check` to list the rejected rows.\n");
    }
}

fn kind_color(kind: ErrorKind, use_color: bool) -> Option<Color> {
    match kind {
        ErrorKind::TokenMalformed => color(use_color, Color::Yellow),
        ErrorKind::RowMalformed | ErrorKind::SourceUnavailable => color(use_color, Color::Red),
    }
}

/// Validation report: statistics plus every diagnostic
pub fn print_check_table(report: &IngestReport, opts: &TableOptions) {
    let c = opts.use_color;
    let fmt = opts.number_format;

    println!("\n  Validation - {}\n", report.display_name);
    if report.is_source_unavailable() {
        for err in &report.errors {
            println!("  {}", red_text(&err.detail, c));
        }
        println!();
        return;
    }

    let s = &report.summary;
    let mut stats = create_styled_table();
    stats.set_header(vec![header_cell("Rows", c), header_cell("Count", c)]);
    for (label, value) in [
        ("Total rows", s.total_rows),
        ("Valid rows", s.valid_rows),
        ("Invalid rows", s.invalid_rows),
        ("Sub-activities", s.sub_activities),
        ("Dropped tokens", s.dropped_tokens),
    ] {
        stats.add_row(vec![Cell::new(label), right_cell(&format_number(value, fmt), None, false)]);
    }
    println!("{stats}");

    if report.errors.is_empty() && report.warnings.is_empty() {
        println!("\n  No problems found.\n");
        return;
    }

    let mut table = create_styled_table();
    table.set_header(vec![
        header_cell("Row", c),
        header_cell("Kind", c),
        header_cell("Activity", c),
        header_cell("Field", c),
        header_cell("Problem", c),
    ]);
    for diag in report.errors.iter().chain(&report.warnings) {
        let mut problem = diag.detail.clone();
        if let Some(token) = &diag.token {
            problem = format!("\"{token}\": {problem}");
        }
        table.add_row(vec![
            right_cell(&diag.row.map(|r| r.to_string()).unwrap_or_default(), None, false),
            styled_cell(&diag.kind.to_string(), kind_color(diag.kind, c), false),
            Cell::new(diag.name.as_deref().unwrap_or("")),
            Cell::new(diag.field.as_deref().unwrap_or("")),
            Cell::new(problem),
        ]);
    }
    println!("\n{table}\n");
}

fn red_text(text: &str, use_color: bool) -> String {
    if use_color {
        format!("\x1b[31m{text}\x1b[0m")
    } else {
        text.to_string()
    }
}
