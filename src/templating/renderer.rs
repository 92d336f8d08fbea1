//! Rendering of the two vendor package artifacts.

use tera::{Context as TeraContext, Tera};

use super::filters;
use crate::core::{Result, VendorError};
use crate::vendor::params::RenderParameters;

/// Template name of the vendor package manifest.
pub const PACKAGE_XML: &str = "package.xml";
/// Template name of the vendor package build recipe.
pub const CMAKE_LISTS: &str = "CMakeLists.txt";

const PACKAGE_XML_TEMPLATE: &str = include_str!("templates/package.xml.tera");
const CMAKE_LISTS_TEMPLATE: &str = include_str!("templates/CMakeLists.txt.tera");

/// Renders `package.xml` and `CMakeLists.txt` from [`RenderParameters`].
///
/// Both templates are compiled into the binary. Tera rejects references to undefined
/// variables, so a template asking for a parameter that was never assembled fails with
/// [`VendorError::TemplateRenderError`] instead of rendering an empty string.
pub struct ArtifactRenderer {
    tera: Tera,
}

impl ArtifactRenderer {
    /// Parse the built-in templates and register the custom filters.
    ///
    /// # Errors
    ///
    /// [`VendorError::TemplateRenderError`] if a built-in template fails to parse.
    pub fn new() -> Result<Self> {
        Self::with_templates(&[
            (PACKAGE_XML, PACKAGE_XML_TEMPLATE),
            (CMAKE_LISTS, CMAKE_LISTS_TEMPLATE),
        ])
    }

    /// Build a renderer from explicit `(name, source)` template pairs.
    pub(crate) fn with_templates(templates: &[(&str, &str)]) -> Result<Self> {
        let mut tera = Tera::default();
        tera.autoescape_on(vec![]);
        tera.register_filter("xml_escape", filters::xml_escape);
        tera.register_filter("dep_attrs", filters::dep_attrs);
        tera.add_raw_templates(templates.iter().copied()).map_err(|e| {
            VendorError::TemplateRenderError {
                template: templates.iter().map(|(name, _)| *name).collect::<Vec<_>>().join(", "),
                reason: format_tera_error(&e),
            }
        })?;
        Ok(Self { tera })
    }

    /// Render one named template.
    ///
    /// # Errors
    ///
    /// [`VendorError::TemplateRenderError`] when the template does not exist or fails to
    /// render. Render failures are never retried.
    pub fn render(&self, template: &str, params: &RenderParameters) -> Result<String> {
        let render_error = |reason: String| VendorError::TemplateRenderError {
            template: template.to_string(),
            reason,
        };

        let context =
            TeraContext::from_serialize(params).map_err(|e| render_error(format_tera_error(&e)))?;
        tracing::debug!("Rendering {} for {}", template, params.vendor_name);
        self.tera.render(template, &context).map_err(|e| render_error(format_tera_error(&e)))
    }
}

/// Flatten a Tera error and its sources into one line.
///
/// Tera nests the useful message ("Variable `x` not found") a level or two below a
/// generic "Failed to render" wrapper.
pub fn format_tera_error(error: &tera::Error) -> String {
    use std::error::Error;

    let mut messages = vec![error.to_string()];
    let mut source = error.source();
    while let Some(err) = source {
        messages.push(err.to_string());
        source = err.source();
    }
    messages.dedup();
    messages.join(": ")
}
