use comfy_table::{
    Attribute, Cell, CellAlignment, Color, ContentArrangement, Table, TableComponent,
    modifiers::UTF8_SOLID_INNER_BORDERS, presets::UTF8_FULL,
};

use crate::error::AppError;

#[derive(Debug, Clone, Copy)]
pub struct NumberFormat {
    group_sep: char,
    decimal_sep: char,
}

impl Default for NumberFormat {
    fn default() -> Self {
        NumberFormat {
            group_sep: ',',
            decimal_sep: '.',
        }
    }
}

impl NumberFormat {
    pub fn from_locale(locale: Option<&str>) -> Result<Self, AppError> {
        let Some(raw) = locale else {
            return Ok(NumberFormat::default());
        };
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Ok(NumberFormat::default());
        }
        let base = trimmed
            .split(['-', '_'])
            .next()
            .unwrap_or(trimmed)
            .to_ascii_lowercase();

        let format = match base.as_str() {
            "de" | "pt" => NumberFormat {
                group_sep: '.',
                decimal_sep: ',',
            },
            "fr" | "ru" => NumberFormat {
                group_sep: ' ',
                decimal_sep: ',',
            },
            "en" | "zh" => NumberFormat::default(),
            _ => {
                return Err(AppError::UnsupportedLocale {
                    input: trimmed.to_string(),
                });
            }
        };

        Ok(format)
    }
}

pub fn format_number(n: usize, format: NumberFormat) -> String {
    let digits = n.to_string();
    let mut result = String::new();
    for (i, c) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(format.group_sep);
        }
        result.push(c);
    }
    result.chars().rev().collect()
}

/// Percentage with one decimal and the locale's decimal separator: `12,5%`
pub fn format_percent(value: f64, format: NumberFormat) -> String {
    let mut s = format!("{value:.1}");
    if format.decimal_sep != '.' {
        s = s.replace('.', &format.decimal_sep.to_string());
    }
    format!("{s}%")
}

/// Signed deviation in percentage points: `+5.0 pp`, `-12.5 pp`
pub(super) fn format_deviation(value: f64, format: NumberFormat) -> String {
    // avoid printing "-0.0" for tiny negative rounding noise
    let rounded = (value * 10.0).round() / 10.0;
    let sign = if rounded > 0.0 { "+" } else { "" };
    let mut s = format!("{sign}{:.1}", rounded + 0.0);
    if format.decimal_sep != '.' {
        s = s.replace('.', &format.decimal_sep.to_string());
    }
    format!("{s} pp")
}

fn paint(mut cell: Cell, color: Option<Color>, bold: bool) -> Cell {
    if let Some(c) = color {
        cell = cell.fg(c);
    }
    if bold {
        cell = cell.add_attribute(Attribute::Bold);
    }
    cell
}

pub(super) fn styled_cell(text: &str, color: Option<Color>, bold: bool) -> Cell {
    paint(Cell::new(text), color, bold)
}

/// Numeric column cell
pub(super) fn right_cell(text: &str, color: Option<Color>, bold: bool) -> Cell {
    paint(Cell::new(text).set_alignment(CellAlignment::Right), color, bold)
}

pub(super) fn header_cell(text: &str, use_color: bool) -> Cell {
    paint(Cell::new(text), use_color.then_some(Color::Cyan), true)
}

/// UTF-8 grid with solid inner borders and a single-line rule under the header
pub(super) fn create_styled_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
    for (component, ch) in [
        (TableComponent::HeaderLines, '─'),
        (TableComponent::LeftHeaderIntersection, '├'),
        (TableComponent::MiddleHeaderIntersections, '┼'),
        (TableComponent::RightHeaderIntersection, '┤'),
    ] {
        table.set_style(component, ch);
    }
    table
}

#[cfg(test)]
mod tests {
    use super::{NumberFormat, format_deviation, format_number, format_percent};

    #[test]
    fn format_number_with_separators() {
        let fmt = NumberFormat::default();
        assert_eq!(format_number(0, fmt), "0");
        assert_eq!(format_number(999, fmt), "999");
        assert_eq!(format_number(1_234_567, fmt), "1,234,567");
        let pt = NumberFormat::from_locale(Some("pt_BR")).unwrap();
        assert_eq!(format_number(1000, pt), "1.000");
    }

    #[test]
    fn format_percent_by_locale() {
        assert_eq!(format_percent(12.5, NumberFormat::default()), "12.5%");
        assert_eq!(format_percent(100.0, NumberFormat::default()), "100.0%");
        let pt = NumberFormat::from_locale(Some("pt")).unwrap();
        assert_eq!(format_percent(12.5, pt), "12,5%");
    }

    #[test]
    fn format_deviation_signs() {
        let fmt = NumberFormat::default();
        assert_eq!(format_deviation(5.0, fmt), "+5.0 pp");
        assert_eq!(format_deviation(-12.5, fmt), "-12.5 pp");
        assert_eq!(format_deviation(0.0, fmt), "0.0 pp");
        assert_eq!(format_deviation(-0.01, fmt), "0.0 pp");
    }

    #[test]
    fn header_rule_is_single_line() {
        let mut table = super::create_styled_table();
        table.set_header(vec!["Activity", "Actual"]);
        table.add_row(vec!["Forno", "70.0%"]);
        let rendered = table.to_string();
        assert!(rendered.contains('┼'));
        assert!(!rendered.contains('╪'));
    }

    #[test]
    fn from_locale_none_and_empty_return_default() {
        let fmt = NumberFormat::from_locale(None).unwrap();
        assert_eq!(format_percent(1.5, fmt), "1.5%");
        let fmt = NumberFormat::from_locale(Some("")).unwrap();
        assert_eq!(format_percent(1.5, fmt), "1.5%");
    }

    #[test]
    fn from_locale_fr_uses_space_separator() {
        let fmt = NumberFormat::from_locale(Some("fr")).unwrap();
        assert_eq!(format_number(1000, fmt), "1 000");
    }

    #[test]
    fn from_locale_with_region_suffix() {
        let fmt = NumberFormat::from_locale(Some("de-DE")).unwrap();
        assert_eq!(format_number(1000, fmt), "1.000");
    }

    #[test]
    fn from_locale_unsupported_returns_error() {
        assert!(NumberFormat::from_locale(Some("ja")).is_err());
    }
}
