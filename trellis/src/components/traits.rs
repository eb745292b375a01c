use htmldom::Element;

use crate::context::RenderContext;
use crate::error::ValidationError;
use crate::validate::{self, Validate};

/// A component that renders to a single element.
///
/// Implementors provide [`Component::build`]; callers use
/// [`Component::render`] or [`Component::try_render`], which run the
/// contract checks first.
pub trait Component: Validate + Sized {
    /// Produce the element tree. Called after validation.
    fn build(self, cx: &RenderContext) -> Element;

    /// Render, logging any contract violation. Output never depends on
    /// whether validation passed.
    fn render(self, cx: &RenderContext) -> Element {
        validate::report(cx, &self);
        self.build(cx)
    }

    /// Render, failing on a contract violation when the context is strict.
    fn try_render(self, cx: &RenderContext) -> Result<Element, ValidationError> {
        validate::enforce(cx, &self)?;
        Ok(self.build(cx))
    }
}
