//! Record parser
//!
//! Turns one raw row into its parsed fields, decoding the sub-activity
//! mini-syntax: `name:actual` or `name:actual|planned`, tokens joined by `;`.
//! A bad token only drops itself; a bad required field drops the row.

use tracing::{debug, warn};

use crate::consts::{NAME_SEPARATOR, PAIR_SEPARATOR, TOKEN_SEPARATOR};
use crate::core::diagnostics::{Cause, ParseError};
use crate::core::number::parse_percent;
use crate::core::types::{FieldMapping, RawRow, SubActivity};
use crate::error::{TokenError, ValueError};

/// Fields of a row that passed row-level validation
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedRow {
    pub name: String,
    /// The row's own actual value; superseded when sub-activities exist
    pub value: f64,
    pub baseline: f64,
    pub sub_activities: Vec<SubActivity>,
    /// Token-level diagnostics, one per dropped token
    pub warnings: Vec<ParseError>,
}

/// Parse one row through the given field mapping
pub fn parse_row(row: &RawRow, fields: &FieldMapping) -> Result<ParsedRow, ParseError> {
    if row.open_quote {
        return Err(ParseError::unclosed_quote(row.index, row.line, row.get(&fields.name)));
    }

    let name = row.get(&fields.name).ok_or_else(|| {
        ParseError::row(
            row.index,
            row.line,
            None,
            &fields.name,
            Cause::MissingField,
            "name is missing".to_string(),
        )
    })?;

    let value = required_percent(row, name, &fields.actual)?;
    let baseline = required_percent(row, name, &fields.planned)?;

    let mut warnings = Vec::new();
    let sub_activities = match row.get(&fields.sub_activities) {
        Some(raw) => {
            let (subs, failures) = parse_sub_activities(raw);
            for (token, err) in failures {
                let diag = ParseError::token(row.index, row.line, name, &fields.sub_activities, &token, &err);
                warn!(row = row.index, name, token = %token.trim(), "skipping sub-activity: {err}");
                warnings.push(diag);
            }
            subs
        }
        None => Vec::new(),
    };

    debug!(
        row = row.index,
        name,
        value,
        baseline,
        sub_activities = sub_activities.len(),
        "parsed row"
    );

    Ok(ParsedRow {
        name: name.to_string(),
        value,
        baseline,
        sub_activities,
        warnings,
    })
}

fn required_percent(row: &RawRow, name: &str, field: &str) -> Result<f64, ParseError> {
    let raw = row.get(field).unwrap_or("");
    parse_percent(raw).map_err(|err| {
        let detail = match err {
            ValueError::Empty => format!("{field} is missing"),
            ref other => other.to_string(),
        };
        ParseError::row(row.index, row.line, Some(name), field, Cause::from(&err), detail)
    })
}

/// Decode a sub-activity field, keeping token order.
///
/// Returns the parsed sub-activities plus every rejected token with its error.
/// Blank tokens (e.g. from a trailing `;`) are ignored.
pub fn parse_sub_activities(raw: &str) -> (Vec<SubActivity>, Vec<(String, TokenError)>) {
    let mut subs = Vec::new();
    let mut failures = Vec::new();

    for token in raw.split(TOKEN_SEPARATOR) {
        if token.trim().is_empty() {
            continue;
        }
        match parse_token(token) {
            Ok(sub) => subs.push(sub),
            Err(err) => failures.push((token.to_string(), err)),
        }
    }

    (subs, failures)
}

/// Parse a single `name:actual[|planned]` token
pub fn parse_token(token: &str) -> Result<SubActivity, TokenError> {
    let (name, values) = token
        .split_once(NAME_SEPARATOR)
        .ok_or(TokenError::MissingSeparator)?;

    let name = name.trim();
    if name.is_empty() {
        return Err(TokenError::EmptyName);
    }

    let (actual, planned) = match values.split_once(PAIR_SEPARATOR) {
        Some((actual, planned)) => {
            if planned.contains(PAIR_SEPARATOR) || actual.trim().is_empty() || planned.trim().is_empty() {
                return Err(TokenError::UnmatchedPipe);
            }
            (actual, Some(planned))
        }
        None => (values, None),
    };

    let actual = parse_percent(actual).map_err(TokenError::value("actual"))?;
    let planned = planned
        .map(|p| parse_percent(p).map_err(TokenError::value("planned")))
        .transpose()?;

    Ok(SubActivity {
        name: name.to_string(),
        planned,
        actual,
    })
}
