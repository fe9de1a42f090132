//! Main entry point for heat-strip.
//!
//! Loads the configuration, applies CLI overrides, sets up logging and then
//! either prints the rendered strip once or starts the interactive UI.

use anyhow::{Context, Result};
use heat_strip::cli::Cli;
use heat_strip::config::{AppConfig, LoggingConfig, RunMode};
use heat_strip::service::{self, Session};
use std::fs::OpenOptions;
use std::sync::Mutex;
use tracing_subscriber::{fmt::writer::BoxMakeWriter, EnvFilter};

fn main() -> Result<()> {
    let cli = Cli::parse_args();

    // An explicitly named config file must exist; the default one is optional.
    let mut config = if cli.uses_default_config() {
        AppConfig::load_or_default(&cli.config)
    } else {
        AppConfig::from_file(&cli.config)
    }
    .with_context(|| format!("failed to load {}", cli.config.display()))?;

    config.apply_cli_overrides(&cli);
    config.validate()?;

    if cli.dump_config {
        print!("{}", config.to_toml()?);
        return Ok(());
    }

    if config.ui.mode == RunMode::Interactive && !atty::is(atty::Stream::Stdout) {
        config.ui.mode = RunMode::Render;
    }

    init_logging(&config.logging, config.ui.mode)?;
    tracing::debug!(mode = ?config.ui.mode, config = %cli.config.display(), "configuration loaded");

    match config.ui.mode {
        RunMode::Render => {
            let output = service::render_once(&config)?;
            print!("{}", output);
        }
        RunMode::Interactive => Session::new(&config, &cli.config).run()?,
    }

    Ok(())
}

/// Set up the tracing subscriber. Interactive mode only logs when a log file
/// is configured, so the terminal UI is not overwritten.
fn init_logging(logging: &LoggingConfig, mode: RunMode) -> Result<()> {
    let writer = match (&logging.file, mode) {
        (Some(path), _) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("failed to open log file {}", path))?;
            BoxMakeWriter::new(Mutex::new(file))
        }
        (None, RunMode::Render) => BoxMakeWriter::new(std::io::stderr),
        (None, RunMode::Interactive) => return Ok(()),
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("heat_strip={}", logging.level)));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(logging.file.is_none());

    let result = if logging.json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };
    result.map_err(|e| anyhow::anyhow!("failed to initialize logging: {}", e))
}
