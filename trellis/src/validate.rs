//! Development-time contract checks.
//!
//! Required inputs are enforced by constructors. What remains are value-level
//! checks that cannot be expressed in types, reported according to the
//! context's [`ValidationMode`].

use serde::Deserialize;

use crate::context::RenderContext;
use crate::error::ValidationError;

/// How contract violations are reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValidationMode {
    /// Skip checks entirely.
    Off,
    /// Log a warning and render anyway.
    Warn,
    /// Log a warning from `render`; make `try_render` fail.
    Strict,
}

impl Default for ValidationMode {
    /// `Warn` in debug builds, `Off` in release builds.
    fn default() -> Self {
        if cfg!(debug_assertions) {
            Self::Warn
        } else {
            Self::Off
        }
    }
}

/// Implemented by every component with value-level input constraints.
pub trait Validate {
    fn validate(&self) -> Result<(), ValidationError>;
}

/// Log a violation, if checks are enabled. Never fails.
pub fn report(cx: &RenderContext, component: &impl Validate) {
    if cx.validation_mode() == ValidationMode::Off {
        return;
    }
    if let Err(err) = component.validate() {
        log::warn!("{err}");
    }
}

/// Log a violation and, in strict mode, return it.
pub fn enforce(cx: &RenderContext, component: &impl Validate) -> Result<(), ValidationError> {
    match cx.validation_mode() {
        ValidationMode::Off => Ok(()),
        ValidationMode::Warn => {
            report(cx, component);
            Ok(())
        }
        ValidationMode::Strict => component.validate().inspect_err(|err| {
            log::warn!("{err}");
        }),
    }
}
