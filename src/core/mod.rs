//! Core module - record parsing, aggregation and the shared data model

mod aggregator;
mod diagnostics;
mod number;
mod parser;
mod types;

pub use aggregator::{build_record, derive_actual, summarize};
pub use diagnostics::{Cause, ErrorKind, ParseError};
pub use number::{clamp_percent, parse_percent};
pub use parser::{ParsedRow, parse_row, parse_sub_activities, parse_token};
pub use types::{ActivityRecord, FieldMapping, Preset, ProgressStatus, RawRow, SubActivity, Summary};
