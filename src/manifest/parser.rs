//! `package.xml` parsing with `quick-xml`.
//!
//! Supports package formats 1 through 3. Only the elements the generator needs are
//! read; `<export>`, group membership and conflict declarations are skipped.
//!
//! Shorthand elements are expanded into the typed lists:
//! - `<depend>` → build, build_export and exec
//! - `<run_depend>` (format 1) → build_export and exec

use quick_xml::events::{BytesStart, Event};
use quick_xml::reader::Reader;
use std::collections::HashMap;
use std::path::Path;

use super::{Dependency, DependencyKind, Package, Person, Url};
use crate::core::{Result, VendorError};

/// A direct child of `<package>` with its attributes and collected text.
struct Element {
    tag: String,
    attributes: HashMap<String, String>,
    text: String,
}

impl Element {
    fn attr(&self, key: &str) -> Option<String> {
        self.attributes.get(key).cloned()
    }

    /// Text content with runs of whitespace collapsed to single spaces.
    fn collapsed_text(&self) -> String {
        self.text.split_whitespace().collect::<Vec<_>>().join(" ")
    }
}

/// Parse a `package.xml` file from disk.
///
/// The file name is included in every error.
pub fn parse_package_file(path: &Path) -> Result<Package> {
    let text = std::fs::read_to_string(path).map_err(|e| VendorError::PackageParseError {
        file: path.display().to_string(),
        reason: format!("failed to read file: {e}"),
    })?;
    parse_package_str(&text, &path.display().to_string())
}

/// Parse `package.xml` content. `filename` is only used in error messages.
pub fn parse_package_str(text: &str, filename: &str) -> Result<Package> {
    let parse_error = |reason: String| VendorError::PackageParseError {
        file: filename.to_string(),
        reason,
    };

    let mut reader = Reader::from_str(text);
    reader.config_mut().trim_text(true);

    let mut package = Package {
        format: 1,
        ..Package::default()
    };
    let mut depth = 0usize;
    let mut saw_root = false;
    let mut current: Option<Element> = None;

    loop {
        let event = reader
            .read_event()
            .map_err(|e| parse_error(format!("XML error at byte {}: {e}", reader.error_position())))?;

        match event {
            Event::Start(start) => {
                depth += 1;
                if depth == 1 {
                    saw_root = true;
                    package.format = root_format(&start).map_err(&parse_error)?;
                } else if depth == 2 {
                    current = Some(read_element(&start).map_err(&parse_error)?);
                }
            }
            Event::Empty(start) => {
                if depth == 0 {
                    return Err(parse_error("root <package> element has no content".to_string()));
                }
                if depth == 1 {
                    let element = read_element(&start).map_err(&parse_error)?;
                    apply_element(&mut package, element);
                }
            }
            Event::Text(text) => {
                if let Some(element) = current.as_mut() {
                    let unescaped = text.unescape().map_err(|e| parse_error(e.to_string()))?;
                    push_text(&mut element.text, &unescaped);
                }
            }
            Event::CData(data) => {
                if let Some(element) = current.as_mut() {
                    push_text(&mut element.text, &String::from_utf8_lossy(&data));
                }
            }
            Event::End(_) => {
                if depth == 2 {
                    if let Some(element) = current.take() {
                        apply_element(&mut package, element);
                    }
                }
                depth = depth.saturating_sub(1);
            }
            Event::Eof => break,
            _ => {}
        }
    }

    if !saw_root {
        return Err(parse_error("missing root <package> element".to_string()));
    }
    if package.name.is_empty() {
        return Err(parse_error("missing <name>".to_string()));
    }
    if package.version.is_empty() {
        return Err(parse_error("missing <version>".to_string()));
    }

    tracing::debug!(
        "Parsed {} {} (format {}) from {}",
        package.name,
        package.version,
        package.format,
        filename
    );
    Ok(package)
}

fn root_format(start: &BytesStart<'_>) -> std::result::Result<u8, String> {
    let root = read_element(start)?;
    if root.tag != "package" {
        return Err(format!("expected root <package> element, found <{}>", root.tag));
    }
    match root.attr("format") {
        Some(format) => format
            .trim()
            .parse::<u8>()
            .map_err(|_| format!("invalid package format '{format}'")),
        None => Ok(1),
    }
}

fn read_element(start: &BytesStart<'_>) -> std::result::Result<Element, String> {
    let tag = String::from_utf8_lossy(start.name().as_ref()).into_owned();
    let mut attributes = HashMap::new();
    for attr in start.attributes() {
        let attr = attr.map_err(|e| format!("invalid attribute on <{tag}>: {e}"))?;
        let key = String::from_utf8_lossy(attr.key.as_ref()).into_owned();
        let value = attr
            .unescape_value()
            .map_err(|e| format!("invalid attribute value on <{tag}>: {e}"))?
            .into_owned();
        attributes.insert(key, value);
    }
    Ok(Element {
        tag,
        attributes,
        text: String::new(),
    })
}

fn push_text(buffer: &mut String, text: &str) {
    if !buffer.is_empty() {
        buffer.push(' ');
    }
    buffer.push_str(text);
}

fn apply_element(package: &mut Package, element: Element) {
    match element.tag.as_str() {
        "name" => package.name = element.collapsed_text(),
        "version" => package.version = element.collapsed_text(),
        "description" => package.description = element.collapsed_text(),
        "license" => package.licenses.push(element.collapsed_text()),
        "maintainer" => package.maintainers.push(to_person(&element)),
        "author" => package.authors.push(to_person(&element)),
        "url" => package.urls.push(Url {
            url: element.collapsed_text(),
            url_type: element.attr("type").unwrap_or_else(|| "website".to_string()),
        }),
        "depend" => {
            let dep = to_dependency(&element);
            for kind in [DependencyKind::Build, DependencyKind::BuildExport, DependencyKind::Exec]
            {
                package.dependencies_mut(kind).push(dep.clone());
            }
        }
        "run_depend" => {
            let dep = to_dependency(&element);
            for kind in [DependencyKind::BuildExport, DependencyKind::Exec] {
                package.dependencies_mut(kind).push(dep.clone());
            }
        }
        tag => {
            if let Some(kind) = DependencyKind::from_tag(tag) {
                package.dependencies_mut(kind).push(to_dependency(&element));
            } else {
                tracing::trace!("Skipping <{}> in package.xml", tag);
            }
        }
    }
}

fn to_person(element: &Element) -> Person {
    Person {
        name: element.collapsed_text(),
        email: element.attr("email"),
    }
}

fn to_dependency(element: &Element) -> Dependency {
    Dependency {
        name: element.collapsed_text(),
        version_lt: element.attr("version_lt"),
        version_lte: element.attr("version_lte"),
        version_eq: element.attr("version_eq"),
        version_gte: element.attr("version_gte"),
        version_gt: element.attr("version_gt"),
        condition: element.attr("condition"),
    }
}
