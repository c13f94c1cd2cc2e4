//! Locale-aware percentage parsing
//!
//! Source sheets are exported with a comma decimal separator and sometimes a
//! trailing `%`. Every percentage in the engine goes through [`parse_percent`].

use crate::consts::MAX_PERCENT;
use crate::error::ValueError;

/// Parse a raw cell into a percentage in `[0, 100]`.
///
/// Values above 100 are capped; negative values are rejected.
pub fn parse_percent(raw: &str) -> Result<f64, ValueError> {
    let cleaned: String = raw
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '%')
        .map(|c| if c == ',' { '.' } else { c })
        .collect();

    if cleaned.is_empty() {
        return Err(ValueError::Empty);
    }

    let value = cleaned
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| ValueError::NotNumeric {
            input: raw.trim().to_string(),
        })?;

    if value < 0.0 {
        return Err(ValueError::OutOfDomain { value });
    }
    // -0 compares equal to 0 and must not leak a sign into the output
    if value == 0.0 {
        return Ok(0.0);
    }
    Ok(clamp_percent(value))
}

/// Bound a value to `[0, 100]`
pub fn clamp_percent(value: f64) -> f64 {
    value.clamp(0.0, MAX_PERCENT)
}
