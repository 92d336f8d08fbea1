//! gz-vendor - ROS vendor package generator for Gazebo libraries
//!
//! Gazebo libraries are packaged for ROS through thin "vendor" packages
//! (`gz_math_vendor`, `sdformat_vendor`, ...) that either find the system-installed
//! library or build it from source at a pinned release. gz-vendor generates those
//! packages from the upstream library's own `package.xml`.
//!
//! # Architecture Overview
//!
//! ```text
//! package.xml ─▶ manifest ─▶ vendor (filter, classify, rewrite, assemble) ─▶ templating ─▶ files
//! ```
//!
//! - Dependencies on other Gazebo libraries are rewritten to the matching vendor
//!   packages and declared with `<depend>`
//! - All other dependencies pass through under their original element
//! - Per-library build quirks (bindings, docs, patches, hooks) come from a static
//!   policy table
//! - The vendor package's own version is kept across regenerations
//!
//! # Core Modules
//!
//! - [`manifest`] - `package.xml` model and parser
//! - [`vendor`] - The generation engine
//! - [`templating`] - Tera templates for `package.xml` and `CMakeLists.txt`
//! - [`collection`] - Gazebo collection files for batch generation
//! - [`cli`] - Command-line interface
//! - [`core`] - Error types and user-facing error reporting
//! - [`utils`] - Atomic file writes, path expansion, progress bars
//!
//! # Example
//!
//! ```rust,no_run
//! use gz_vendor::manifest::parse_package_file;
//! use gz_vendor::vendor::render_artifacts;
//! use std::path::Path;
//!
//! # fn example() -> anyhow::Result<()> {
//! let upstream = parse_package_file(Path::new("gz-math/package.xml"))?;
//! let artifacts = render_artifacts(upstream, None, "")?;
//! assert_eq!(artifacts.params.vendor_name, "gz_math_vendor");
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod collection;
pub mod core;
pub mod manifest;
pub mod templating;
pub mod utils;
pub mod vendor;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;
