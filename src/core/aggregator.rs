//! Aggregation of parsed rows into activity records

use crate::core::number::clamp_percent;
use crate::core::parser::ParsedRow;
use crate::core::types::{ActivityRecord, SubActivity, Summary};

/// Build the final record for a parsed row (consumes the row to avoid cloning).
///
/// Parent `planned` always comes from the row's own baseline; sub-activity
/// planned values are carried along but never rolled up.
pub fn build_record(row: ParsedRow) -> ActivityRecord {
    let actual = derive_actual(row.value, &row.sub_activities);
    ActivityRecord {
        name: row.name,
        planned: clamp_percent(row.baseline),
        actual,
        sub_activities: row.sub_activities,
    }
}

/// Effective actual progress: the row's own value, or the mean of its
/// sub-activities when it has any (clamped after averaging).
pub fn derive_actual(value: f64, subs: &[SubActivity]) -> f64 {
    match mean(subs.iter().map(|s| s.actual)) {
        Some(avg) => clamp_percent(avg),
        None => clamp_percent(value),
    }
}

fn mean(values: impl Iterator<Item = f64>) -> Option<f64> {
    let (sum, count) = values.fold((0.0, 0usize), |(sum, n), v| (sum + v, n + 1));
    (count > 0).then(|| sum / count as f64)
}

/// Batch statistics over the records of one pass
pub fn summarize(records: &[ActivityRecord], total_rows: usize, dropped_tokens: usize) -> Summary {
    Summary {
        total_rows,
        valid_rows: records.len(),
        invalid_rows: total_rows.saturating_sub(records.len()),
        sub_activities: records.iter().map(|r| r.sub_activities.len()).sum(),
        dropped_tokens,
        overall_planned: mean(records.iter().map(|r| r.planned)),
        overall_actual: mean(records.iter().map(|r| r.actual)),
    }
}
