//! Package descriptor (`package.xml`) model.
//!
//! A [`Package`] is the parsed form of a ROS `package.xml`. The generator reads the
//! upstream library's descriptor into a `Package`, rewrites its dependency lists, and
//! renders the vendor package's own descriptor from the result.
//!
//! # Dependency kinds
//!
//! `package.xml` declares dependencies in seven typed lists. [`DependencyKind`] names
//! them and [`DependencyKind::ALL`] fixes their order, which is also the order in which
//! vendor dependencies are gathered:
//!
//! | Kind | Element |
//! |------|---------|
//! | build | `<build_depend>` |
//! | buildtool | `<buildtool_depend>` |
//! | build_export | `<build_export_depend>` |
//! | buildtool_export | `<buildtool_export_depend>` |
//! | exec | `<exec_depend>` |
//! | test | `<test_depend>` |
//! | doc | `<doc_depend>` |
//!
//! `<depend>` and `<run_depend>` are shorthands expanded by the parser; see
//! [`parser`].
//!
//! # Example
//!
//! ```rust,no_run
//! use gz_vendor::manifest::{DependencyKind, parse_package_str};
//!
//! let xml = r#"<package format="3">
//!   <name>gz-math7</name>
//!   <version>7.5.1</version>
//!   <description>Math library</description>
//!   <depend>gz-cmake3</depend>
//! </package>"#;
//! let package = parse_package_str(xml, "package.xml")?;
//! assert_eq!(package.dependencies(DependencyKind::Build)[0].name, "gz-cmake3");
//! # Ok::<(), gz_vendor::core::VendorError>(())
//! ```

pub mod parser;

pub use parser::{parse_package_file, parse_package_str};

use serde::{Deserialize, Serialize};
use std::fmt;

/// Conventional file name of a package descriptor.
pub const PACKAGE_XML_FILE: &str = "package.xml";

/// One of the seven typed dependency lists of a `package.xml`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DependencyKind {
    /// `<build_depend>`
    Build,
    /// `<buildtool_depend>`
    Buildtool,
    /// `<build_export_depend>`
    BuildExport,
    /// `<buildtool_export_depend>`
    BuildtoolExport,
    /// `<exec_depend>`
    Exec,
    /// `<test_depend>`
    Test,
    /// `<doc_depend>`
    Doc,
}

impl DependencyKind {
    /// Every kind, in gathering order.
    pub const ALL: [Self; 7] = [
        Self::Build,
        Self::Buildtool,
        Self::BuildExport,
        Self::BuildtoolExport,
        Self::Exec,
        Self::Test,
        Self::Doc,
    ];

    /// The XML element name for this kind.
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Build => "build_depend",
            Self::Buildtool => "buildtool_depend",
            Self::BuildExport => "build_export_depend",
            Self::BuildtoolExport => "buildtool_export_depend",
            Self::Exec => "exec_depend",
            Self::Test => "test_depend",
            Self::Doc => "doc_depend",
        }
    }

    /// Look up a kind by its XML element name.
    #[must_use]
    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.tag() == tag)
    }
}

impl fmt::Display for DependencyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// A declared dependency.
///
/// Identity is the raw `name`: classification and deduplication compare names only,
/// case-sensitively, before any normalization.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Dependency {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version_lt: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version_lte: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version_eq: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version_gte: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version_gt: Option<String>,
    /// Conditional expression (`$ROS_VERSION == 2`), format 3 only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub condition: Option<String>,
}

impl Dependency {
    /// A dependency with no version constraint.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }
}

/// A maintainer or author.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Person {
    pub name: String,
    pub email: Option<String>,
}

/// A `<url>` entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Url {
    pub url: String,
    /// `website`, `bugtracker` or `repository`
    #[serde(rename = "type")]
    pub url_type: String,
}

/// A parsed `package.xml`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Package {
    /// `format` attribute of the root element; 1 when absent
    pub format: u8,
    pub name: String,
    pub version: String,
    pub description: String,
    pub maintainers: Vec<Person>,
    pub authors: Vec<Person>,
    pub licenses: Vec<String>,
    pub urls: Vec<Url>,
    pub build_depends: Vec<Dependency>,
    pub buildtool_depends: Vec<Dependency>,
    pub build_export_depends: Vec<Dependency>,
    pub buildtool_export_depends: Vec<Dependency>,
    pub exec_depends: Vec<Dependency>,
    pub test_depends: Vec<Dependency>,
    pub doc_depends: Vec<Dependency>,
}

impl Package {
    /// Get the dependency list of one kind.
    #[must_use]
    pub fn dependencies(&self, kind: DependencyKind) -> &Vec<Dependency> {
        match kind {
            DependencyKind::Build => &self.build_depends,
            DependencyKind::Buildtool => &self.buildtool_depends,
            DependencyKind::BuildExport => &self.build_export_depends,
            DependencyKind::BuildtoolExport => &self.buildtool_export_depends,
            DependencyKind::Exec => &self.exec_depends,
            DependencyKind::Test => &self.test_depends,
            DependencyKind::Doc => &self.doc_depends,
        }
    }

    /// Get the mutable dependency list of one kind.
    pub fn dependencies_mut(&mut self, kind: DependencyKind) -> &mut Vec<Dependency> {
        match kind {
            DependencyKind::Build => &mut self.build_depends,
            DependencyKind::Buildtool => &mut self.buildtool_depends,
            DependencyKind::BuildExport => &mut self.build_export_depends,
            DependencyKind::BuildtoolExport => &mut self.buildtool_export_depends,
            DependencyKind::Exec => &mut self.exec_depends,
            DependencyKind::Test => &mut self.test_depends,
            DependencyKind::Doc => &mut self.doc_depends,
        }
    }

    /// Replace every dependency list with `f(kind, list)`, in [`DependencyKind::ALL`] order.
    ///
    /// This is the single traversal used by both the disallow filter and the classifier.
    pub fn map_dependencies<F>(&mut self, mut f: F)
    where
        F: FnMut(DependencyKind, Vec<Dependency>) -> Vec<Dependency>,
    {
        for kind in DependencyKind::ALL {
            let list = std::mem::take(self.dependencies_mut(kind));
            *self.dependencies_mut(kind) = f(kind, list);
        }
    }

    /// Iterate over every dependency with its kind, in gathering order.
    pub fn all_dependencies(&self) -> impl Iterator<Item = (DependencyKind, &Dependency)> {
        DependencyKind::ALL
            .into_iter()
            .flat_map(move |kind| self.dependencies(kind).iter().map(move |dep| (kind, dep)))
    }
}
