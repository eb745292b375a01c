//! Library configuration.

use serde::Deserialize;

use crate::context::RenderContext;
use crate::error::ConfigError;
use crate::prefix::DEFAULT_PREFIX;
use crate::validate::ValidationMode;

/// Application-level settings, usually read once at startup.
///
/// ```json
/// { "prefix": "acme", "validation": "strict" }
/// ```
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct TrellisConfig {
    /// Class-name prefix applied to every generated class.
    pub prefix: String,

    /// How contract violations are reported.
    pub validation: ValidationMode,
}

impl Default for TrellisConfig {
    fn default() -> Self {
        Self {
            prefix: DEFAULT_PREFIX.to_string(),
            validation: ValidationMode::default(),
        }
    }
}

impl TrellisConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    pub fn validation(mut self, mode: ValidationMode) -> Self {
        self.validation = mode;
        self
    }

    /// Validate and turn this configuration into a render context.
    pub fn into_context(self) -> Result<RenderContext, ConfigError> {
        RenderContext::from_config(&self)
    }
}
