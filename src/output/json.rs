use tracing::error;

use crate::output::images::AssetLookup;
use crate::source::IngestReport;

fn to_pretty(output: &impl serde::Serialize) -> String {
    serde_json::to_string_pretty(output).unwrap_or_else(|e| {
        error!("Failed to serialize JSON output: {e}");
        "[]".to_string()
    })
}

/// Records of every report as one array, in source and row order.
///
/// With a lookup, each record also carries its resolved `image`.
pub fn output_records_json(reports: &[IngestReport], images: Option<&dyn AssetLookup>) -> String {
    let output: Vec<serde_json::Value> = reports
        .iter()
        .flat_map(|report| report.records.iter())
        .map(|record| {
            let mut obj = serde_json::json!(record);
            if let Some(lookup) = images {
                obj["image"] = serde_json::json!(lookup.resolve(&record.name));
            }
            obj
        })
        .collect();

    to_pretty(&output)
}

/// Full reports (records, diagnostics and summary), one per source
pub fn output_report_json(reports: &[IngestReport]) -> String {
    to_pretty(&reports)
}
