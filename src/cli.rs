//! Command-line interface argument parsing.
//!
//! This module defines the CLI structure using gumdrop. Every option that
//! mirrors a configuration value is optional and only overrides the
//! configuration file when given.

use crate::config::{LogLevel, OutputFormat, RunMode, DEFAULT_CONFIG_PATH};
use gumdrop::Options;
use std::path::PathBuf;

/// heat-strip: render a sequence of statuses as a strip of colored blocks
#[derive(Debug, Options)]
pub struct Cli {
    /// Print help message
    #[options(help = "print help message")]
    pub help: bool,

    /// Path to configuration file
    #[options(help = "path to configuration file", meta = "PATH", default = "heat-strip.toml")]
    pub config: PathBuf,

    /// Status sequence (overrides config file)
    #[options(help = "comma-separated status sequence, e.g. ok,warning,error", meta = "LIST")]
    pub data: Option<String>,

    /// Size preset (overrides config file)
    #[options(help = "block size: small, medium or large", meta = "SIZE")]
    pub size: Option<String>,

    /// Run mode (overrides config file)
    #[options(help = "run mode: render or interactive", meta = "MODE")]
    pub mode: Option<RunMode>,

    /// Render output format (overrides config file)
    #[options(help = "render output: html or json", meta = "FORMAT")]
    pub format: Option<OutputFormat>,

    /// Log level (overrides config file)
    #[options(help = "log level: trace, debug, info, warn or error", meta = "LEVEL")]
    pub log_level: Option<LogLevel>,

    /// Print the effective configuration and exit
    #[options(no_short, help = "print the effective configuration as TOML and exit")]
    pub dump_config: bool,
}

impl Cli {
    /// Parse command-line arguments
    pub fn parse_args() -> Self {
        Self::parse_args_default_or_exit()
    }

    /// Whether the config path is the built-in default
    pub fn uses_default_config(&self) -> bool {
        self.config == PathBuf::from(DEFAULT_CONFIG_PATH)
    }
}
