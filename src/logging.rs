//! Logger setup: a log file while the terminal UI owns the screen, stderr otherwise.

use std::fs::{self, OpenOptions};
use std::path::PathBuf;

use log::LevelFilter;
use simplelog::{ColorChoice, ConfigBuilder, TermLogger, TerminalMode, WriteLogger};

use crate::config::{LogSettings, default_log_path};
use crate::error::Result;

/// Where log records go.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogTarget {
    File,
    Stderr,
}

/// Effective level: `--verbose` raises the configured level to at least debug.
pub fn level_filter(settings: &LogSettings, verbose: bool) -> LevelFilter {
    let configured = LevelFilter::from(settings.level);
    if verbose {
        configured.max(LevelFilter::Debug)
    } else {
        configured
    }
}

/// Log file path: the configured one, else the XDG state location.
pub fn log_path(settings: &LogSettings) -> Option<PathBuf> {
    settings.file.clone().or_else(default_log_path)
}

pub fn init(settings: &LogSettings, verbose: bool, target: LogTarget) -> Result<()> {
    let level = level_filter(settings, verbose);
    let config = ConfigBuilder::new()
        .add_filter_allow_str(env!("CARGO_CRATE_NAME"))
        .build();

    match target {
        LogTarget::Stderr => {
            TermLogger::init(level, config, TerminalMode::Stderr, ColorChoice::Auto)?;
        }
        LogTarget::File => {
            // No configured file and no home directory: stay silent rather than
            // writing over the terminal UI.
            let Some(path) = log_path(settings) else {
                return Ok(());
            };
            if let Some(dir) = path.parent() {
                fs::create_dir_all(dir)?;
            }
            let file = OpenOptions::new().create(true).append(true).open(&path)?;
            WriteLogger::init(level, config, file)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LogLevel;

    #[test]
    fn verbose_raises_level_to_debug() {
        let settings = LogSettings::default();
        assert_eq!(level_filter(&settings, false), LevelFilter::Info);
        assert_eq!(level_filter(&settings, true), LevelFilter::Debug);

        let trace = LogSettings {
            level: LogLevel::Trace,
            ..LogSettings::default()
        };
        assert_eq!(level_filter(&trace, true), LevelFilter::Trace);

        let off = LogSettings {
            level: LogLevel::Off,
            ..LogSettings::default()
        };
        assert_eq!(level_filter(&off, false), LevelFilter::Off);
        assert_eq!(level_filter(&off, true), LevelFilter::Debug);
    }

    #[test]
    fn configured_file_wins_over_default_path() {
        let settings = LogSettings {
            file: Some(PathBuf::from("/tmp/custom.log")),
            ..LogSettings::default()
        };
        assert_eq!(log_path(&settings), Some(PathBuf::from("/tmp/custom.log")));
        if let Some(path) = log_path(&LogSettings::default()) {
            assert!(path.ends_with("radioscrobbler/radioscrobbler.log"));
        }
    }
}
