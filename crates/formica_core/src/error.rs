//! Error types for formica_core.
//!
//! A running tick cannot fail. Errors only arise while building a session:
//! reading or parsing a configuration file, or validating its values.

use thiserror::Error;

/// Main error type for formica_core operations.
#[derive(Error, Debug)]
pub enum SimError {
    /// A configuration value is out of range
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// The configuration file could not be read
    #[error("File system error: {0}")]
    Io(#[from] std::io::Error),

    /// The configuration file is not valid TOML for `SimConfig`
    #[error("Config parse error: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Result type alias for formica_core operations.
pub type Result<T> = std::result::Result<T, SimError>;

impl SimError {
    /// Creates a new configuration error.
    #[must_use]
    pub fn invalid_config<S: Into<String>>(msg: S) -> Self {
        Self::InvalidConfig(msg.into())
    }
}

/// Returns an `InvalidConfig` error from the enclosing function unless the
/// condition holds.
macro_rules! ensure_config {
    ($cond:expr, $($arg:tt)+) => {
        if !$cond {
            return Err($crate::error::SimError::invalid_config(format!($($arg)+)));
        }
    };
}

pub(crate) use ensure_config;
