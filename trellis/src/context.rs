//! Render context threaded through every component.

use crate::config::TrellisConfig;
use crate::error::ConfigError;
use crate::prefix::Prefix;
use crate::validate::ValidationMode;

/// Configuration visible to components while they render.
///
/// Built once at startup and passed by reference; it is never mutated while
/// components hold it.
#[derive(Debug, Clone, Default)]
pub struct RenderContext {
    prefix: Prefix,
    validation: ValidationMode,
}

impl RenderContext {
    pub fn new(prefix: Prefix) -> Self {
        Self {
            prefix,
            validation: ValidationMode::default(),
        }
    }

    pub fn from_config(config: &TrellisConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            prefix: Prefix::new(config.prefix.clone())?,
            validation: config.validation,
        })
    }

    pub fn validation(mut self, mode: ValidationMode) -> Self {
        self.validation = mode;
        self
    }

    pub fn prefix(&self) -> &Prefix {
        &self.prefix
    }

    pub fn validation_mode(&self) -> ValidationMode {
        self.validation
    }

    /// Shorthand for `self.prefix().class(name)`.
    pub fn class(&self, name: &str) -> String {
        self.prefix.class(name)
    }
}
