//! CLI subcommand definitions

use clap::{Args, Subcommand};

/// Positional source locations, accepted before or after a subcommand
#[derive(Debug, Clone, Default, Args)]
pub(crate) struct SourceArgs {
    /// Sources to read: file paths, http(s) URLs, or - for stdin
    #[arg(value_name = "SOURCE")]
    pub(crate) sources: Vec<String>,
}

/// Main CLI commands
#[derive(Debug, Clone, Subcommand)]
pub(crate) enum Commands {
    /// Show activity progress (default)
    Show {
        #[command(flatten)]
        input: SourceArgs,
    },
    /// Validate sources and list every rejected row and token
    Check {
        /// Exit with status 1 when any row or source error is found
        #[arg(long)]
        strict: bool,

        #[command(flatten)]
        input: SourceArgs,
    },
}

impl Commands {
    pub(crate) fn sources(&self) -> &[String] {
        match self {
            Commands::Show { input } | Commands::Check { input, .. } => &input.sources,
        }
    }
}

/// Normalized command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Action {
    Show,
    Check { strict: bool },
}

impl Action {
    pub(crate) fn strict(self) -> bool {
        matches!(self, Action::Check { strict: true })
    }
}

impl From<&Commands> for Action {
    fn from(cmd: &Commands) -> Self {
        match cmd {
            Commands::Show { .. } => Action::Show,
            Commands::Check { strict, .. } => Action::Check { strict: *strict },
        }
    }
}

/// Parse CLI command into an `Action`; show is the default
pub(crate) fn parse_command(cmd: &Option<Commands>) -> Action {
    cmd.as_ref().map(Action::from).unwrap_or(Action::Show)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_show() {
        assert_eq!(parse_command(&None), Action::Show);
    }

    #[test]
    fn strict_only_applies_to_check() {
        let check = Commands::Check {
            strict: true,
            input: SourceArgs::default(),
        };
        assert!(parse_command(&Some(check)).strict());
        assert!(!Action::Check { strict: false }.strict());
        assert!(!Action::Show.strict());
    }
}
