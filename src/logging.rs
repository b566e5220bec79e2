//! Logging through `tracing` and `tracing-subscriber`.
//!
//! Diagnostics only. Password text is never recorded; events carry lengths
//! and alphabet sizes. The interactive form owns the terminal, so it only
//! logs when a log file is given.

use std::fs::OpenOptions;
use std::io::{self, IsTerminal};
use std::path::PathBuf;
use std::sync::Mutex;

use tracing::level_filters::LevelFilter;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::cli::Cli;
use crate::error::{Error, Result};

#[derive(Debug, Clone)]
pub struct LogConfig {
    pub level_filter: LevelFilter,
    /// Let `RUST_LOG` override `level_filter`.
    pub use_env_filter: bool,
    pub with_ansi: bool,
    pub log_file: Option<PathBuf>,
    /// Write to stderr when no file is set.
    pub to_stderr: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level_filter: LevelFilter::WARN,
            use_env_filter: true,
            with_ansi: true,
            log_file: None,
            to_stderr: true,
        }
    }
}

impl LogConfig {
    /// Build from parsed flags. An explicit `-v`/`-q` wins over `RUST_LOG`.
    pub fn from_cli(cli: &Cli) -> Self {
        let interactive = cli.command.is_none();
        Self {
            level_filter: cli.verbosity.tracing_level_filter(),
            use_env_filter: !cli.verbosity.is_present(),
            with_ansi: cli.log_file.is_none() && io::stderr().is_terminal(),
            log_file: cli.log_file.clone(),
            to_stderr: !interactive,
        }
    }
}

/// Install the global subscriber. Call once at startup.
pub fn init_logging(config: &LogConfig) -> Result<()> {
    let filter = build_env_filter(config);

    if let Some(path) = &config.log_file {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        let layer = fmt::layer()
            .with_writer(Mutex::new(file))
            .with_ansi(false)
            .with_target(false);
        tracing_subscriber::registry()
            .with(filter)
            .with(layer)
            .try_init()
            .map_err(|e| Error::Logging(e.to_string()))?;
    } else if config.to_stderr {
        let layer = fmt::layer()
            .with_writer(io::stderr)
            .with_ansi(config.with_ansi)
            .with_target(false)
            .without_time();
        tracing_subscriber::registry()
            .with(filter)
            .with(layer)
            .try_init()
            .map_err(|e| Error::Logging(e.to_string()))?;
    }
    Ok(())
}

fn build_env_filter(config: &LogConfig) -> EnvFilter {
    let fallback = || EnvFilter::new(format!("warn,passform={}", config.level_filter));
    if config.use_env_filter {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| fallback())
    } else {
        fallback()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn form_mode_stays_off_stderr() {
        let cli = Cli::try_parse_from(["passform"]).unwrap();
        let config = LogConfig::from_cli(&cli);
        assert!(!config.to_stderr);
        assert_eq!(config.level_filter, LevelFilter::WARN);
        assert!(config.use_env_filter);
    }

    #[test]
    fn verbosity_flags() {
        let cli = Cli::try_parse_from(["passform", "-vv", "generate", "-l", "8"]).unwrap();
        let config = LogConfig::from_cli(&cli);
        assert!(config.to_stderr);
        assert_eq!(config.level_filter, LevelFilter::DEBUG);
        assert!(!config.use_env_filter);

        let cli = Cli::try_parse_from(["passform", "-q", "generate", "-l", "8"]).unwrap();
        assert_eq!(LogConfig::from_cli(&cli).level_filter, LevelFilter::ERROR);
    }
}
