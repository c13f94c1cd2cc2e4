use std::fmt::Write;

use crate::consts::{NAME_SEPARATOR, PAIR_SEPARATOR, TOKEN_SEPARATOR};
use crate::core::SubActivity;
use crate::output::images::AssetLookup;
use crate::source::IngestReport;

fn csv_escape(s: &str) -> String {
    if s.contains(',') || s.contains('"') || s.contains('\n') || s.contains('\r') {
        format!("\"{}\"", s.replace('"', "\"\""))
    } else {
        s.to_string()
    }
}

/// Re-encode sub-activities in the source mini-syntax (`A:80|100;B:60`)
fn encode_sub_activities(subs: &[SubActivity]) -> String {
    let mut out = String::new();
    for (i, sub) in subs.iter().enumerate() {
        if i > 0 {
            out.push(TOKEN_SEPARATOR);
        }
        let _ = write!(out, "{}{NAME_SEPARATOR}{}", sub.name, sub.actual);
        if let Some(planned) = sub.planned {
            let _ = write!(out, "{PAIR_SEPARATOR}{planned}");
        }
    }
    out
}

pub fn output_records_csv(reports: &[IngestReport], images: Option<&dyn AssetLookup>) -> String {
    let mut out = String::new();
    let _ = write!(out, "source,name,planned,actual,deviation,status,sub_activities");
    if images.is_some() {
        let _ = write!(out, ",image");
    }
    out.push('\n');

    for report in reports {
        for record in &report.records {
            let _ = write!(
                out,
                "{},{},{:.1},{:.1},{:.1},{},{}",
                csv_escape(&report.source),
                csv_escape(&record.name),
                record.planned,
                record.actual,
                record.deviation(),
                record.status().label(),
                csv_escape(&encode_sub_activities(&record.sub_activities)),
            );
            if let Some(lookup) = images {
                let _ = write!(out, ",{}", csv_escape(lookup.resolve(&record.name)));
            }
            out.push('\n');
        }
    }

    out
}

pub fn output_errors_csv(reports: &[IngestReport]) -> String {
    let mut out = String::from("source,kind,cause,row,line,name,field,token,detail\n");
    for report in reports {
        for diag in report.errors.iter().chain(&report.warnings) {
            let opt = |v: Option<usize>| v.map(|n| n.to_string()).unwrap_or_default();
            let _ = writeln!(
                out,
                "{},{},{},{},{},{},{},{},{}",
                csv_escape(&report.source),
                diag.kind.as_str(),
                diag.cause.as_str(),
                opt(diag.row),
                opt(diag.line),
                csv_escape(diag.name.as_deref().unwrap_or("")),
                csv_escape(diag.field.as_deref().unwrap_or("")),
                csv_escape(diag.token.as_deref().unwrap_or("")),
                csv_escape(&diag.detail),
            );
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::{IngestOptions, ingest_text};

    fn report() -> IngestReport {
        ingest_text(
            "frentes.csv",
            "name,value,baseline,sub_activities\n\"Forno, norte\",40,50,A:80|100;B:60\nMistura,12.5,10,\n,1,1,\n",
            &IngestOptions::default(),
        )
    }

    #[test]
    fn csv_escape_quotes_when_needed() {
        assert_eq!(csv_escape("plain"), "plain");
        assert_eq!(csv_escape("a,b"), "\"a,b\"");
        assert_eq!(csv_escape("say \"hi\""), "\"say \"\"hi\"\"\"");
    }

    #[test]
    fn encode_round_trips_mini_syntax() {
        let r = report();
        assert_eq!(encode_sub_activities(&r.records[0].sub_activities), "A:80|100;B:60");
        assert_eq!(encode_sub_activities(&[]), "");
    }

    #[test]
    fn records_csv_rows() {
        let csv = output_records_csv(&[report()], None);
        let lines: Vec<_> = csv.lines().collect();
        assert_eq!(lines[0], "source,name,planned,actual,deviation,status,sub_activities");
        assert_eq!(lines[1], "frentes.csv,\"Forno, norte\",50.0,70.0,20.0,in-progress,A:80|100;B:60");
        assert_eq!(lines[2], "frentes.csv,Mistura,10.0,12.5,2.5,in-progress,");
        assert_eq!(lines.len(), 3);
    }

    #[test]
    fn record_values_are_rounded_to_one_decimal() {
        let report = ingest_text(
            "s.csv",
            "name,value,baseline,sub_activities\nForno,0,0,A:100;B:0;C:0\n",
            &IngestOptions::default(),
        );
        let csv = output_records_csv(&[report], None);
        assert_eq!(csv.lines().nth(1), Some("s.csv,Forno,0.0,33.3,33.3,in-progress,A:100;B:0;C:0"));
    }

    #[test]
    fn errors_csv_lists_diagnostics() {
        let csv = output_errors_csv(&[report()]);
        let lines: Vec<_> = csv.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[1].starts_with("frentes.csv,row-malformed,missing-field,3,4,,name,,"));
    }
}
