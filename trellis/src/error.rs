//! Error types for configuration, validation and logging setup.

use thiserror::Error;

/// Invalid configuration input.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("class prefix must not be blank")]
    EmptyPrefix,

    #[error("class prefix '{0}' must not contain whitespace")]
    InvalidPrefix(String),

    #[error("failed to parse configuration: {0}")]
    Parse(#[from] serde_json::Error),
}

/// A component was given inputs that break its contract.
///
/// These are development-time diagnostics. Rendering never depends on them
/// unless the context runs in [`ValidationMode::Strict`](crate::validate::ValidationMode).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{component}: identifier must not be empty")]
    EmptyId { component: &'static str },

    #[error("{component}: identifier '{id}' must not contain whitespace")]
    InvalidId { component: &'static str, id: String },
}

/// Failure installing the file logger.
#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("failed to open log file: {0}")]
    Io(#[from] std::io::Error),

    #[error("a logger is already installed")]
    AlreadyInstalled(#[from] log::SetLoggerError),
}
