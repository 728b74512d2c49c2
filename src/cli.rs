//! Command line interface

use crate::config::AppConfig;
use clap::Parser;
use std::path::PathBuf;
use thermtop_types::ReadErrorPolicy;

pub const PROJECT_URL: &str = "https://github.com/thermtop/thermtop";

/// thermtop - live per-core CPU temperatures with rolling averages
#[derive(Parser, Debug, Clone, Default)]
#[command(name = "thermtop")]
#[command(author, about, long_about = None, disable_version_flag = true)]
pub struct Cli {
    /// Averaging period in seconds (sampling ticks per history point)
    #[arg(short = 'a', long = "avg", value_name = "SECS", allow_negative_numbers = true)]
    pub avg: Option<i64>,

    /// Print version and exit
    #[arg(short = 'v', long = "version")]
    pub version: bool,

    /// Debug verbosity level (0=quiet, 1=info, 2=debug, 3=trace)
    #[arg(short = 'd', long = "debug", value_name = "LEVEL", default_value = "0")]
    pub debug: u8,

    /// Points of averaged history kept per sensor
    #[arg(long = "history-length", value_name = "POINTS", allow_negative_numbers = true)]
    pub history_length: Option<i64>,

    /// Lower bound for the laid-out height in manual height mode
    #[arg(long = "min-height", value_name = "ROWS")]
    pub min_height: Option<u16>,

    /// Let Up/Down arrows grow and shrink the dashboard height
    #[arg(long = "manual-height")]
    pub manual_height: bool,

    /// Sampling interval in milliseconds
    #[arg(long = "tick-ms", value_name = "MS")]
    pub tick_ms: Option<u64>,

    /// Keep the last good reading of a failing sensor instead of exiting
    #[arg(long = "stale")]
    pub stale: bool,

    /// Configuration file to load instead of the default location
    #[arg(long = "config", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Directory searched for coretemp sensors
    #[arg(long = "sysfs-root", value_name = "DIR")]
    pub sysfs_root: Option<PathBuf>,

    /// Write log output to this file while the dashboard runs
    #[arg(long = "log-file", value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    /// Log filter for the requested verbosity
    pub fn log_level(&self) -> &'static str {
        match self.debug {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }

    /// Overlay flags given on the command line onto file configuration
    pub fn apply(&self, config: &mut AppConfig) {
        let dashboard = &mut config.dashboard;
        if let Some(avg) = self.avg {
            dashboard.average_period_secs = avg;
        }
        if let Some(len) = self.history_length {
            dashboard.history_length = len;
        }
        if let Some(min) = self.min_height {
            dashboard.minimum_terminal_height = min;
        }
        if self.manual_height {
            dashboard.manual_height = true;
        }
        if let Some(ms) = self.tick_ms {
            dashboard.tick_interval_ms = ms;
        }
        if self.stale {
            dashboard.read_error_policy = ReadErrorPolicy::MarkStale;
        }
        if let Some(root) = &self.sysfs_root {
            config.sysfs_root = Some(root.clone());
        }
    }
}

/// Text printed by `--version`
pub fn version_text() -> String {
    format!("thermtop v{}\n{}", env!("CARGO_PKG_VERSION"), PROJECT_URL)
}
