//! Command Line Interface module
//!
//! - `get`: Single lyrics lookup against the configured LRCLIB instance
//! - `config`: Show resolved configuration and the config file path

pub mod config;
pub mod get;
