//! Ingestion pipeline
//!
//! Drives the parser and aggregator over every row of a source. Row failures
//! are collected next to the records and never abort the pass; an unreadable
//! source yields no records and a single `SourceUnavailable` error.

use rayon::prelude::*;
use serde::Serialize;
use std::time::Instant;
use tracing::{debug, warn};

use crate::core::{ActivityRecord, FieldMapping, ParseError, RawRow, Summary, build_record, parse_row, summarize};
use crate::source::{Source, open_source, read_rows};

/// How rows are read and which columns carry which value
#[derive(Debug, Clone)]
pub struct IngestOptions {
    pub fields: FieldMapping,
    pub delimiter: char,
}

impl Default for IngestOptions {
    fn default() -> Self {
        Self {
            fields: FieldMapping::default(),
            delimiter: ',',
        }
    }
}

/// Whether the source could be read at all
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum SourceStatus {
    Read,
    Unavailable,
}

/// Result of one ingestion pass over one source
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IngestReport {
    pub source: String,
    /// Short label for headings (file name, `stdin`, or the URL)
    #[serde(skip)]
    pub display_name: String,
    pub status: SourceStatus,
    /// Successfully built records, in source row order
    pub records: Vec<ActivityRecord>,
    /// Row-level and source-level failures, in source row order
    pub errors: Vec<ParseError>,
    /// Dropped sub-activity tokens; their rows are still in `records`
    pub warnings: Vec<ParseError>,
    pub summary: Summary,
    /// Processing time in milliseconds, including the read
    #[serde(skip)]
    pub elapsed_ms: f64,
}

impl IngestReport {
    fn unavailable(source: &str, error: ParseError) -> Self {
        Self {
            source: source.to_string(),
            display_name: source.to_string(),
            status: SourceStatus::Unavailable,
            records: Vec::new(),
            errors: vec![error],
            warnings: Vec::new(),
            summary: Summary::default(),
            elapsed_ms: 0.0,
        }
    }

    /// An empty report from a missing source, as opposed to a source with no valid rows
    pub fn is_source_unavailable(&self) -> bool {
        self.status == SourceStatus::Unavailable
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}

/// Parse and aggregate already-materialized rows
pub fn ingest_rows(source: &str, rows: &[RawRow], fields: &FieldMapping) -> IngestReport {
    let mut records = Vec::with_capacity(rows.len());
    let mut errors = Vec::new();
    let mut warnings = Vec::new();

    for row in rows {
        match parse_row(row, fields) {
            Ok(mut parsed) => {
                warnings.append(&mut parsed.warnings);
                records.push(build_record(parsed));
            }
            Err(err) => {
                warn!(source, row = row.index, line = row.line, "dropping row: {err}");
                errors.push(err);
            }
        }
    }

    let summary = summarize(&records, rows.len(), warnings.len());
    debug!(
        source,
        rows = rows.len(),
        records = records.len(),
        errors = errors.len(),
        warnings = warnings.len(),
        "ingested rows"
    );

    IngestReport {
        source: source.to_string(),
        display_name: source.to_string(),
        status: SourceStatus::Read,
        records,
        errors,
        warnings,
        summary,
        elapsed_ms: 0.0,
    }
}

/// Ingest source text that has already been read
pub fn ingest_text(source: &str, text: &str, options: &IngestOptions) -> IngestReport {
    let rows = read_rows(text, options.delimiter);
    ingest_rows(source, &rows, &options.fields)
}

/// Read a source once and ingest its snapshot
pub fn ingest_source(source: &dyn Source, options: &IngestOptions) -> IngestReport {
    let start = Instant::now();
    let location = source.location();

    let mut report = match source.read_text() {
        Ok(text) => ingest_text(location, &text, options),
        Err(err) => {
            warn!(source = location, "source unavailable: {err}");
            IngestReport::unavailable(location, ParseError::source_unavailable(&err))
        }
    };

    report.display_name = source.display_name().to_string();
    report.elapsed_ms = start.elapsed().as_secs_f64() * 1000.0;
    report
}

/// Open and ingest a location (path, URL or `-`)
pub fn ingest_location(location: &str, options: &IngestOptions) -> IngestReport {
    let source = open_source(location);
    ingest_source(source.as_ref(), options)
}

/// Ingest independent sources in parallel; reports keep argument order
pub fn ingest_all(locations: &[String], options: &IngestOptions) -> Vec<IngestReport> {
    locations
        .par_iter()
        .map(|location| ingest_location(location, options))
        .collect()
}
