//! CLI argument definitions
//!
//! Global CLI options and configuration merging logic.

use std::io::IsTerminal;

use clap::{Parser, ValueEnum};

use frentes::core::{FieldMapping, Preset};
use frentes::error::AppError;

use crate::config::{Config, ConfigColorMode};

use super::commands::{Commands, SourceArgs};

#[derive(Debug, Clone, Copy, Default, ValueEnum, PartialEq)]
pub(crate) enum ColorMode {
    /// Auto-detect based on terminal (default)
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

#[derive(Debug, Clone, Copy, ValueEnum, PartialEq)]
pub(crate) enum PresetArg {
    /// name, value, baseline, sub_activities
    Legacy,
    /// name, real, planned, sub_activities
    RealPlanned,
}

impl From<PresetArg> for Preset {
    fn from(arg: PresetArg) -> Self {
        match arg {
            PresetArg::Legacy => Preset::Legacy,
            PresetArg::RealPlanned => Preset::RealPlanned,
        }
    }
}

#[derive(Parser)]
#[command(name = "frentes")]
#[command(about = "Work front progress from tabular records", version)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub(crate) command: Option<Commands>,

    #[command(flatten)]
    pub(crate) input: SourceArgs,

    /// Output as JSON
    #[arg(short, long, global = true, conflicts_with = "csv")]
    pub(crate) json: bool,

    /// Output as CSV
    #[arg(long, global = true)]
    pub(crate) csv: bool,

    /// Include the resolved display image of each activity
    #[arg(long, global = true)]
    pub(crate) images: bool,

    /// Historical row shape to read
    #[arg(short, long, global = true, value_enum)]
    pub(crate) preset: Option<PresetArg>,

    /// Column holding the activity name
    #[arg(long, global = true, value_name = "COLUMN")]
    pub(crate) field_name: Option<String>,

    /// Column holding the actual progress
    #[arg(long, global = true, value_name = "COLUMN")]
    pub(crate) field_actual: Option<String>,

    /// Column holding the planned progress
    #[arg(long, global = true, value_name = "COLUMN")]
    pub(crate) field_planned: Option<String>,

    /// Column holding the sub-activity list
    #[arg(long, global = true, value_name = "COLUMN")]
    pub(crate) field_sub_activities: Option<String>,

    /// Cell delimiter of the source (default ",")
    #[arg(short, long, global = true, value_name = "CHAR")]
    pub(crate) delimiter: Option<String>,

    /// Color output mode
    #[arg(long, global = true, value_enum, default_value = "auto")]
    pub(crate) color: ColorMode,

    /// Disable colored output (shorthand for --color=never)
    #[arg(long, global = true)]
    pub(crate) no_color: bool,

    /// Compact output (no sub-activity rows, no status column)
    #[arg(short = 'c', long, global = true)]
    pub(crate) compact: bool,

    /// Suppress progress messages and warnings on stderr
    #[arg(short, long, global = true)]
    pub(crate) quiet: bool,

    /// Enable debug output (show processing details)
    #[arg(long, global = true)]
    pub(crate) debug: bool,

    /// Filter JSON output with jq expression (requires jq installed)
    #[arg(long, global = true, value_name = "FILTER")]
    pub(crate) jq: Option<String>,

    /// Locale for number formatting (e.g., "en", "pt", "de")
    #[arg(long, global = true, value_name = "LOCALE")]
    pub(crate) locale: Option<String>,

    #[arg(skip)]
    pub(crate) image_overrides: std::collections::HashMap<String, String>,

    #[arg(skip)]
    pub(crate) default_image: Option<String>,

    #[arg(skip)]
    config_fields: FieldMapping,
}

impl Cli {
    /// Merge config file values into CLI (CLI args take precedence)
    pub(crate) fn with_config(mut self, config: Config) -> Self {
        if !self.compact && config.compact {
            self.compact = true;
        }
        if !self.no_color && config.no_color {
            self.no_color = true;
        }

        if let Some(color) = config.color
            && self.color == ColorMode::Auto
        {
            self.color = match color {
                ConfigColorMode::Auto => ColorMode::Auto,
                ConfigColorMode::Always => ColorMode::Always,
                ConfigColorMode::Never => ColorMode::Never,
            };
        }

        if self.sources().is_empty()
            && let Some(source) = config.source
        {
            self.input.sources.push(source);
        }
        if self.delimiter.is_none() {
            self.delimiter = config.delimiter;
        }
        if self.locale.is_none() {
            self.locale = config.locale;
        }

        let preset = self
            .preset
            .map(Preset::from)
            .or(config.preset)
            .unwrap_or_default();
        let mut fields = FieldMapping::preset(preset);
        let overrides = [
            (&mut fields.name, config.fields.name),
            (&mut fields.actual, config.fields.actual),
            (&mut fields.planned, config.fields.planned),
            (&mut fields.sub_activities, config.fields.sub_activities),
        ];
        for (slot, value) in overrides {
            if let Some(value) = value {
                *slot = value;
            }
        }
        self.config_fields = fields;

        self.image_overrides = config.images;
        self.default_image = config.default_image;
        self
    }

    /// Sources given after the subcommand, else before it (or from config)
    pub(crate) fn sources(&self) -> &[String] {
        match &self.command {
            Some(cmd) if !cmd.sources().is_empty() => cmd.sources(),
            _ => &self.input.sources,
        }
    }

    /// Field mapping: preset, then config `[fields]`, then `--field-*` flags
    pub(crate) fn field_mapping(&self) -> FieldMapping {
        let mut fields = self.config_fields.clone();
        let flags = [
            (&mut fields.name, &self.field_name),
            (&mut fields.actual, &self.field_actual),
            (&mut fields.planned, &self.field_planned),
            (&mut fields.sub_activities, &self.field_sub_activities),
        ];
        for (slot, flag) in flags {
            if let Some(column) = flag {
                *slot = column.trim().to_string();
            }
        }
        fields
    }

    pub(crate) fn delimiter(&self) -> Result<char, AppError> {
        parse_delimiter(self.delimiter.as_deref())
    }

    pub(crate) fn use_color(&self) -> bool {
        if self.no_color {
            return false;
        }
        match self.color {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => std::io::stdout().is_terminal(),
        }
    }
}

/// Accept a single character; `\t` and `tab` select a tab
pub(crate) fn parse_delimiter(raw: Option<&str>) -> Result<char, AppError> {
    let Some(raw) = raw else {
        return Ok(',');
    };
    if raw == "\\t" || raw.eq_ignore_ascii_case("tab") {
        return Ok('\t');
    }
    let mut chars = raw.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if c != '"' && c != '\n' && c != '\r' => Ok(c),
        _ => Err(AppError::InvalidDelimiter {
            input: raw.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cli(args: &[&str]) -> Cli {
        let mut argv = vec!["frentes"];
        argv.extend_from_slice(args);
        Cli::parse_from(argv)
    }

    #[test]
    fn parse_delimiter_variants() {
        assert_eq!(parse_delimiter(None).unwrap(), ',');
        assert_eq!(parse_delimiter(Some(";")).unwrap(), ';');
        assert_eq!(parse_delimiter(Some("tab")).unwrap(), '\t');
        assert_eq!(parse_delimiter(Some("\\t")).unwrap(), '\t');
        assert!(parse_delimiter(Some(";;")).is_err());
        assert!(parse_delimiter(Some("")).is_err());
        assert!(parse_delimiter(Some("\"")).is_err());
    }

    #[test]
    fn sources_and_flags_after_subcommand() {
        let c = cli(&["check", "--strict", "a.csv", "b.csv", "-j"]);
        assert_eq!(c.sources(), ["a.csv", "b.csv"]);
        assert!(c.json);
        assert!(crate::cli::parse_command(&c.command).strict());
    }

    #[test]
    fn sources_without_subcommand() {
        let c = cli(&["a.csv", "--csv"]);
        assert!(c.command.is_none());
        assert_eq!(c.sources(), ["a.csv"]);
        assert!(c.csv);
    }

    #[test]
    fn field_flags_override_preset() {
        let c = cli(&["--preset", "real-planned", "--field-actual", "realizado"])
            .with_config(Config::default());
        let fields = c.field_mapping();
        assert_eq!(fields.actual, "realizado");
        assert_eq!(fields.planned, "planned");
        assert_eq!(fields.name, "name");
    }

    #[test]
    fn config_fields_apply_under_flags() {
        let mut config = Config::default();
        config.fields.planned = Some("planejado".to_string());
        config.fields.actual = Some("realizado".to_string());
        let c = cli(&["--field-actual", "real"]).with_config(config);
        let fields = c.field_mapping();
        assert_eq!(fields.planned, "planejado");
        assert_eq!(fields.actual, "real");
    }

    #[test]
    fn config_source_used_only_without_arguments() {
        let config = Config {
            source: Some("configured.csv".to_string()),
            ..Config::default()
        };
        assert_eq!(cli(&[]).with_config(config).sources(), ["configured.csv"]);

        let config = Config {
            source: Some("configured.csv".to_string()),
            ..Config::default()
        };
        assert_eq!(cli(&["show", "given.csv"]).with_config(config).sources(), ["given.csv"]);
    }

    #[test]
    fn no_color_wins() {
        let c = cli(&["--color", "always", "--no-color"]);
        assert!(!c.use_color());
    }
}
