//! Tera templating for vendor package artifacts.
//!
//! Two templates are rendered from the same [`RenderParameters`](crate::vendor::params::RenderParameters):
//!
//! - `package.xml`: the vendor package manifest. Passthrough dependencies keep their
//!   typed elements; vendor-family dependencies become a bare `<depend>` on the vendor package.
//! - `CMakeLists.txt`: an `ament_vendor` recipe that builds the upstream library at the
//!   pinned release tag when no matching system package is found.
//!
//! # Custom Filters
//!
//! - `xml_escape`: escape text for XML element content and attribute values
//! - `dep_attrs`: render a passthrough dependency's version constraints and condition as
//!   attributes
//!
//! [`assets`] holds the static files (license, CMake config inputs, environment hooks)
//! that are copied next to the rendered artifacts.

pub mod assets;
pub mod filters;
pub mod renderer;

pub use renderer::{ArtifactRenderer, CMAKE_LISTS, PACKAGE_XML};
