use url::Url;

use crate::config::Config;
use crate::error::ConfigError;

/// Centralized configuration validation utilities
pub struct ConfigValidator;

impl ConfigValidator {
    pub fn validate(config: &Config) -> Result<(), ConfigError> {
        Self::validate_url(&config.lrclib_instance, "lrclib_instance")?;
        Self::validate_range(
            config.request_timeout_seconds,
            1u64,
            300u64,
            "request_timeout_seconds",
        )?;
        Ok(())
    }

    /// Validate a URL string
    pub fn validate_url(url: &str, field_name: &str) -> Result<(), ConfigError> {
        let parsed = Url::parse(url).map_err(|_| ConfigError::InvalidValue {
            field: field_name.to_string(),
            value: url.to_string(),
        })?;

        if parsed.scheme() != "http" && parsed.scheme() != "https" {
            return Err(ConfigError::InvalidValue {
                field: field_name.to_string(),
                value: url.to_string(),
            });
        }

        Ok(())
    }

    /// Validate numeric range
    pub fn validate_range<T>(value: T, min: T, max: T, field_name: &str) -> Result<(), ConfigError>
    where
        T: PartialOrd + std::fmt::Display + Copy,
    {
        if value < min || value > max {
            return Err(ConfigError::InvalidValue {
                field: field_name.to_string(),
                value: value.to_string(),
            });
        }
        Ok(())
    }
}
