//! Error handling for the lrcfetch application
//!
//! Typed errors exist for diagnostics and for in-crate callers of the
//! low-level client. The public lookup surface deliberately collapses
//! all of them to a not-found result (empty string); only the CLI
//! layer distinguishes not-found and cancellation, for exit codes.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LrcFetchError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("No lyrics found")]
    NotFound,

    #[error("Operation cancelled by user")]
    Cancelled,

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

#[derive(Error, Debug)]
pub enum FetchError {
    #[error("HTTP request failed: {0}")]
    Http(reqwest::Error),

    #[error("API response invalid: {reason}")]
    InvalidResponse { reason: String },

    #[error("Timeout exceeded")]
    Timeout,
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            FetchError::Timeout
        } else {
            FetchError::Http(err)
        }
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Config file not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error("Invalid config format: {0}")]
    InvalidFormat(#[from] toml::de::Error),

    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("Invalid value for {field}: {value}")]
    InvalidValue { field: String, value: String },

    #[error("Could not determine config directory")]
    ConfigDirUnavailable,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, LrcFetchError>;
