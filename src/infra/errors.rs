// src/infra/errors.rs: Error types for levellog

use thiserror::Error;

#[derive(Error, Debug)]
pub enum LogError {
    #[error("Invalid log level '{0}' (expected info, warn or error)")]
    InvalidLevel(String),

    #[error("Invalid time format '{0}'")]
    InvalidTimeFormat(String),

    #[error("Invalid sink format '{0}' (expected console or json)")]
    InvalidSinkFormat(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<toml::de::Error> for LogError {
    fn from(err: toml::de::Error) -> Self {
        LogError::Config(err.to_string())
    }
}
