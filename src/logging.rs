//! Log output setup.
//!
//! The dashboard owns the terminal from startup to quit, so log records
//! never go to stdout or stderr. They go to `--log-file` when given,
//! otherwise to `thermtop.log` in the platform cache directory, otherwise
//! nowhere.

use crate::cli::Cli;
use anyhow::{Context, Result};
use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

pub const LOG_FILE_NAME: &str = "thermtop.log";

/// Where log records are written
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogDestination {
    File(PathBuf),
    Discard,
}

/// Default log file location, if the platform has a cache directory
pub fn default_log_path() -> Option<PathBuf> {
    directories::ProjectDirs::from("com", "github.thermtop", "thermtop")
        .map(|dirs| dirs.cache_dir().join(LOG_FILE_NAME))
}

/// Pick the log destination for this run
pub fn destination(cli: &Cli) -> LogDestination {
    match cli.log_file.clone().or_else(default_log_path) {
        Some(path) => LogDestination::File(path),
        None => LogDestination::Discard,
    }
}

fn create_log_file(path: &Path) -> Result<File> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create log directory {}", parent.display()))?;
    }
    File::create(path).with_context(|| format!("Failed to open log file {}", path.display()))
}

/// Open the writer for `destination`.
///
/// An explicit `--log-file` that cannot be opened is an error; a default
/// location that cannot be opened falls back to discarding output.
pub fn open_writer(destination: &LogDestination, explicit: bool) -> Result<Box<dyn Write + Send>> {
    match destination {
        LogDestination::File(path) => match create_log_file(path) {
            Ok(file) => Ok(Box::new(file)),
            Err(_) if !explicit => Ok(Box::new(io::sink())),
            Err(e) => Err(e),
        },
        LogDestination::Discard => Ok(Box::new(io::sink())),
    }
}

/// Initialize env_logger with the verbosity from `-d`, overridable by
/// `RUST_LOG`
pub fn init(cli: &Cli) -> Result<LogDestination> {
    let destination = destination(cli);
    let writer = open_writer(&destination, cli.log_file.is_some())?;

    // Allow RUST_LOG to override CLI setting
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(cli.log_level()))
        .target(env_logger::Target::Pipe(writer))
        .init();
    Ok(destination)
}
