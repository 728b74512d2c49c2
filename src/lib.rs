//! thermtop - live terminal dashboard for per-core CPU temperatures
//!
//! The binary wires the sysfs sources, the core engine and the ratatui
//! renderer together; this library exposes that glue for tests.

pub mod app;
pub mod cli;
pub mod config;
pub mod input;
pub mod logging;

