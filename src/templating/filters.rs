//! Custom Tera filters for the vendor package templates.
//!
//! Autoescaping is disabled for every template (Tera would otherwise escape `/` in URLs
//! and CMake paths), so the manifest template escapes free text explicitly:
//!
//! ```xml
//! <description>{{ pkg.description | xml_escape }}</description>
//! <build_depend{{ dep | dep_attrs }}>{{ dep.name | xml_escape }}</build_depend>
//! ```

use std::collections::HashMap;

/// Escape the five XML special characters.
#[must_use]
pub fn escape_xml(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            c => escaped.push(c),
        }
    }
    escaped
}

/// `xml_escape` filter: escape a string value for element text or attribute values.
pub fn xml_escape(
    value: &tera::Value,
    _args: &HashMap<String, tera::Value>,
) -> tera::Result<tera::Value> {
    let text = value
        .as_str()
        .ok_or_else(|| tera::Error::msg("xml_escape filter requires a string"))?;
    Ok(tera::Value::String(escape_xml(text)))
}

/// Dependency attributes in the order `package.xml` schemas list them.
const VERSION_ATTRIBUTES: &[&str] =
    &["version_lt", "version_lte", "version_eq", "version_gte", "version_gt"];

/// `dep_attrs` filter: render a dependency's version constraints and condition as
/// ` key="value"` pairs.
///
/// Only used for dependencies that pass through unchanged. Vendor dependencies are
/// always rendered as a bare `<depend>`.
pub fn dep_attrs(
    value: &tera::Value,
    _args: &HashMap<String, tera::Value>,
) -> tera::Result<tera::Value> {
    let dep = value
        .as_object()
        .ok_or_else(|| tera::Error::msg("dep_attrs filter requires a dependency object"))?;

    let mut rendered = String::new();
    for key in VERSION_ATTRIBUTES.iter().chain(std::iter::once(&"condition")) {
        if let Some(attr) = dep.get(*key).and_then(tera::Value::as_str) {
            rendered.push_str(&format!(" {key}=\"{}\"", escape_xml(attr)));
        }
    }
    Ok(tera::Value::String(rendered))
}
