use crate::FormView;

/// Trait for rendering targets that draw a form.
///
/// Renderers receive a `FormView` (the visible fields with their values and
/// errors) and produce whatever their toolkit needs. Interaction events flow
/// back through `FormEngine::set_value`, `FormEngine::blur` and
/// `FormEngine::submit`.
pub trait FormRenderer {
    /// What the renderer produces (markup, a widget tree, ...).
    type Output;

    /// The error type for this renderer.
    type Error: Into<anyhow::Error>;

    /// Render the form in its current state.
    fn render(&self, view: &FormView) -> Result<Self::Output, Self::Error>;
}
