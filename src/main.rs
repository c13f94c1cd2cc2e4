mod app;
mod cli;
mod config;
mod utils;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use frentes::consts::DEFAULT_SOURCE;
use frentes::output::{ImageTable, NumberFormat, TableOptions};
use frentes::source::{IngestOptions, ingest_all};

use app::CommandContext;
use cli::{Cli, parse_command};
use config::Config;

fn init_tracing(cli: &Cli) {
    let fallback = if cli.debug {
        "debug"
    } else if cli.quiet {
        "error"
    } else {
        "warn"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    let cli = Cli::parse();
    let config = Config::load(cli.quiet);
    let cli = cli.with_config(config);

    init_tracing(&cli);

    let number_format = match NumberFormat::from_locale(cli.locale.as_deref()) {
        Ok(format) => format,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    };
    let delimiter = match cli.delimiter() {
        Ok(delimiter) => delimiter,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    };

    let mut sources = cli.sources().to_vec();
    if sources.is_empty() {
        sources.push(DEFAULT_SOURCE.to_string());
    }

    let options = IngestOptions {
        fields: cli.field_mapping(),
        delimiter,
    };
    tracing::debug!(?sources, ?options, "starting ingestion");
    let reports = ingest_all(&sources, &options);

    let images = cli
        .images
        .then(|| ImageTable::new(&cli.image_overrides, cli.default_image.as_deref()));

    let ctx = CommandContext {
        cli: &cli,
        table: TableOptions {
            use_color: cli.use_color(),
            compact: cli.compact,
            number_format,
        },
        images: images.as_ref(),
    };

    match app::run(parse_command(&cli.command), &reports, &ctx) {
        Ok(0) => {}
        Ok(code) => std::process::exit(code),
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    }
}
