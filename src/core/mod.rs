//! Core functionality modules
//!
//! - `services`: External API integrations and service clients

pub mod services;

// Re-export commonly used types for convenience
pub use services::lrclib;
