//! Startup configuration.
//!
//! Settings defaults, logging and the remote service endpoints are read once
//! from `conf/config.toml` if present. Missing or invalid entries fall back to
//! defaults so the window can still open.

mod defaults;
mod io;
mod models;
mod tables;

pub use io::{load_config, parse_config};
pub use models::{AppConfig, LogLevel};
