//! Handlebars-based template renderer.
//!
//! Strict mode is always on: a `{{Variable}}` that is not in the substitution
//! context fails the render instead of producing an empty string. HTML
//! escaping is disabled because the output is Go source, not markup.

use handlebars::{Handlebars, RenderError, RenderErrorReason};
use tracing::trace;

use gosvc_core::{
    application::{RenderFailure, TemplateErrorKind, ports::TemplateRenderer},
    domain::SubstitutionContext,
};

/// [`TemplateRenderer`] backed by the `handlebars` engine.
pub struct HandlebarsRenderer {
    hbs: Handlebars<'static>,
}

impl HandlebarsRenderer {
    /// Create a new renderer with strict mode enabled and escaping disabled.
    pub fn new() -> Self {
        let mut hbs = Handlebars::new();
        hbs.set_strict_mode(true);
        hbs.register_escape_fn(handlebars::no_escape);
        Self { hbs }
    }
}

impl Default for HandlebarsRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TemplateRenderer for HandlebarsRenderer {
    fn render(
        &self,
        template: &str,
        context: &SubstitutionContext,
    ) -> Result<String, RenderFailure> {
        trace!(variables = context.len(), bytes = template.len(), "Rendering template");
        self.hbs
            .render_template(template, context)
            .map_err(classify)
    }
}

fn classify(err: RenderError) -> RenderFailure {
    let kind = match err.reason() {
        RenderErrorReason::TemplateError(_) => TemplateErrorKind::Syntax,
        RenderErrorReason::MissingVariable(_) => TemplateErrorKind::UndefinedVariable,
        _ => TemplateErrorKind::Render,
    };
    RenderFailure::new(kind, err.to_string())
}
