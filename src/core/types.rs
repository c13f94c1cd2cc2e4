//! Core data types shared across the engine
//!
//! Every source row is converted to these types; the output layer only reads them.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::consts::MAX_PERCENT;

/// One named decomposition of an activity's progress
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubActivity {
    pub name: String,
    /// Absent in the single-value encoding (`name:actual`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub planned: Option<f64>,
    pub actual: f64,
}

/// A top-level work front ("frente") with planned vs. actual completion
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityRecord {
    pub name: String,
    pub planned: f64,
    /// Derived from `sub_activities` whenever there are any
    pub actual: f64,
    pub sub_activities: Vec<SubActivity>,
}

impl ActivityRecord {
    /// Positive when ahead of plan, negative when behind
    pub fn deviation(&self) -> f64 {
        self.actual - self.planned
    }

    pub fn is_on_track(&self) -> bool {
        self.deviation() >= 0.0
    }

    pub fn status(&self) -> ProgressStatus {
        ProgressStatus::from_actual(self.actual)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProgressStatus {
    NotStarted,
    InProgress,
    Completed,
}

impl ProgressStatus {
    pub fn from_actual(actual: f64) -> Self {
        if actual <= 0.0 {
            ProgressStatus::NotStarted
        } else if actual >= MAX_PERCENT {
            ProgressStatus::Completed
        } else {
            ProgressStatus::InProgress
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ProgressStatus::NotStarted => "not-started",
            ProgressStatus::InProgress => "in-progress",
            ProgressStatus::Completed => "completed",
        }
    }
}

/// One data row of the tabular source, keyed by header name
#[derive(Debug, Clone, Default)]
pub struct RawRow {
    /// 1-based position among data rows (header excluded)
    pub index: usize,
    /// 1-based line in the source text where the row starts
    pub line: usize,
    pub fields: HashMap<String, String>,
    /// The row ended inside a quoted cell that was never closed
    pub open_quote: bool,
}

impl RawRow {
    pub fn new(index: usize, line: usize) -> Self {
        Self {
            index,
            line,
            fields: HashMap::new(),
            open_quote: false,
        }
    }

    /// Cell text with surrounding whitespace removed; blank cells count as missing
    pub fn get(&self, field: &str) -> Option<&str> {
        self.fields
            .get(field)
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
    }

    pub fn with(mut self, field: &str, value: &str) -> Self {
        self.fields.insert(field.to_string(), value.to_string());
        self
    }
}

/// Historical row shapes, selectable by name
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Preset {
    /// `name,value,baseline,sub_activities`
    #[default]
    Legacy,
    /// `name,real,planned,sub_activities`
    RealPlanned,
}

/// Column names the parser reads a row through
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldMapping {
    pub name: String,
    pub actual: String,
    pub planned: String,
    pub sub_activities: String,
}

impl FieldMapping {
    pub fn preset(preset: Preset) -> Self {
        let (actual, planned) = match preset {
            Preset::Legacy => ("value", "baseline"),
            Preset::RealPlanned => ("real", "planned"),
        };
        Self {
            name: "name".to_string(),
            actual: actual.to_string(),
            planned: planned.to_string(),
            sub_activities: "sub_activities".to_string(),
        }
    }
}

impl Default for FieldMapping {
    fn default() -> Self {
        Self::preset(Preset::default())
    }
}

/// Batch statistics for one ingestion pass
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    pub total_rows: usize,
    pub valid_rows: usize,
    pub invalid_rows: usize,
    pub sub_activities: usize,
    pub dropped_tokens: usize,
    /// Unweighted mean over records, `None` without records
    pub overall_planned: Option<f64>,
    pub overall_actual: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(planned: f64, actual: f64) -> ActivityRecord {
        ActivityRecord {
            name: "Forno".to_string(),
            planned,
            actual,
            sub_activities: Vec::new(),
        }
    }

    #[test]
    fn status_boundaries() {
        assert_eq!(ProgressStatus::from_actual(0.0), ProgressStatus::NotStarted);
        assert_eq!(ProgressStatus::from_actual(0.1), ProgressStatus::InProgress);
        assert_eq!(ProgressStatus::from_actual(99.9), ProgressStatus::InProgress);
        assert_eq!(ProgressStatus::from_actual(100.0), ProgressStatus::Completed);
    }

    #[test]
    fn deviation_and_on_track() {
        assert!(record(50.0, 50.0).is_on_track());
        assert!(record(50.0, 60.0).is_on_track());
        assert!(!record(50.0, 40.0).is_on_track());
        assert_eq!(record(50.0, 40.0).deviation(), -10.0);
    }

    #[test]
    fn raw_row_blank_cell_is_missing() {
        let row = RawRow::new(1, 2).with("name", "  ").with("value", " 12 ");
        assert_eq!(row.get("name"), None);
        assert_eq!(row.get("value"), Some("12"));
        assert_eq!(row.get("baseline"), None);
    }

    #[test]
    fn presets_map_historical_columns() {
        let legacy = FieldMapping::preset(Preset::Legacy);
        assert_eq!(legacy.actual, "value");
        assert_eq!(legacy.planned, "baseline");

        let modern = FieldMapping::preset(Preset::RealPlanned);
        assert_eq!(modern.actual, "real");
        assert_eq!(modern.planned, "planned");
        assert_eq!(modern.sub_activities, "sub_activities");
    }

    #[test]
    fn record_serializes_camel_case() {
        let rec = ActivityRecord {
            name: "Secagem".to_string(),
            planned: 80.0,
            actual: 70.0,
            sub_activities: vec![
                SubActivity {
                    name: "A".to_string(),
                    planned: Some(100.0),
                    actual: 80.0,
                },
                SubActivity {
                    name: "B".to_string(),
                    planned: None,
                    actual: 60.0,
                },
            ],
        };
        let json = serde_json::to_value(&rec).unwrap();
        assert_eq!(json["subActivities"][0]["planned"], 100.0);
        assert!(json["subActivities"][1].get("planned").is_none());
        assert_eq!(json["actual"], 70.0);
    }
}
