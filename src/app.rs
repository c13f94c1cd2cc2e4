use frentes::error::AppError;
use frentes::output::{
    AssetLookup, ImageTable, TableOptions, output_errors_csv, output_records_csv,
    output_records_json, output_report_json, print_check_table, print_records_table,
};
use frentes::source::IngestReport;

use crate::cli::{Action, Cli};
use crate::utils::filter_json;

/// Print JSON output, optionally filtering through jq
fn print_json(json: &str, jq_filter: Option<&str>) -> Result<(), AppError> {
    match jq_filter {
        Some(filter) => print!("{}", filter_json(json, filter)?),
        None => println!("{json}"),
    }
    Ok(())
}

pub(crate) struct CommandContext<'a> {
    pub(crate) cli: &'a Cli,
    pub(crate) table: TableOptions,
    pub(crate) images: Option<&'a ImageTable>,
}

impl CommandContext<'_> {
    fn wants_json(&self) -> bool {
        self.cli.json || self.cli.jq.is_some()
    }

    fn jq_filter(&self) -> Option<&str> {
        self.cli.jq.as_deref()
    }

    fn lookup(&self) -> Option<&dyn AssetLookup> {
        self.images.map(|table| table as &dyn AssetLookup)
    }
}

fn report_read_stats(reports: &[IngestReport], quiet: bool) {
    if quiet {
        return;
    }
    for report in reports {
        if report.is_source_unavailable() {
            eprintln!("Could not read {}", report.source);
        } else {
            eprintln!(
                "Read {} rows from {} ({:.0}ms)",
                report.summary.total_rows, report.display_name, report.elapsed_ms
            );
        }
    }
}

fn handle_show(reports: &[IngestReport], ctx: &CommandContext<'_>) -> Result<i32, AppError> {
    report_read_stats(reports, ctx.cli.quiet);

    if ctx.wants_json() {
        let json = output_records_json(reports, ctx.lookup());
        print_json(&json, ctx.jq_filter())?;
        return Ok(0);
    }
    if ctx.cli.csv {
        print!("{}", output_records_csv(reports, ctx.lookup()));
        return Ok(0);
    }

    if reports.iter().all(|report| report.records.is_empty()) {
        println!("No activity data found.");
        for report in reports.iter().filter(|r| r.is_source_unavailable()) {
            for err in &report.errors {
                eprintln!("{err}");
            }
        }
        return Ok(0);
    }
    for report in reports.iter().filter(|r| !r.records.is_empty()) {
        print_records_table(report, &ctx.table, ctx.lookup());
    }
    Ok(0)
}

fn handle_check(
    reports: &[IngestReport],
    strict: bool,
    ctx: &CommandContext<'_>,
) -> Result<i32, AppError> {
    if ctx.wants_json() {
        let json = output_report_json(reports);
        print_json(&json, ctx.jq_filter())?;
    } else if ctx.cli.csv {
        print!("{}", output_errors_csv(reports));
    } else {
        for report in reports {
            print_check_table(report, &ctx.table);
        }
    }

    if strict && reports.iter().any(IngestReport::has_errors) {
        Ok(1)
    } else {
        Ok(0)
    }
}

/// Run the selected command over already ingested reports; returns the exit code
pub(crate) fn run(
    action: Action,
    reports: &[IngestReport],
    ctx: &CommandContext<'_>,
) -> Result<i32, AppError> {
    match action {
        Action::Show => handle_show(reports, ctx),
        Action::Check { .. } => handle_check(reports, action.strict(), ctx),
    }
}
