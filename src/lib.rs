//! Progress record ingestion and aggregation for industrial work fronts.
//!
//! Rows from a tabular source are parsed (including the embedded
//! sub-activity mini-syntax), aggregated into [`core::ActivityRecord`]s and
//! returned with a list of diagnostics instead of failing the batch.

pub mod consts;
pub mod core;
pub mod error;
pub mod output;
pub mod source;
