use std::fmt;

use crate::error::ConfigError;

pub const DEFAULT_PREFIX: &str = "cds";

/// Naming-convention provider for generated class names.
///
/// Every class a component emits is namespaced as `{prefix}--{name}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prefix(String);

impl Prefix {
    pub fn new(prefix: impl Into<String>) -> Result<Self, ConfigError> {
        let prefix = prefix.into();
        if prefix.trim().is_empty() {
            return Err(ConfigError::EmptyPrefix);
        }
        if prefix.chars().any(char::is_whitespace) {
            return Err(ConfigError::InvalidPrefix(prefix));
        }
        Ok(Self(prefix))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// `list-box__menu` -> `cds--list-box__menu`
    pub fn class(&self, name: &str) -> String {
        format!("{}--{name}", self.0)
    }
}

impl Default for Prefix {
    fn default() -> Self {
        Self(DEFAULT_PREFIX.to_string())
    }
}

impl fmt::Display for Prefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
