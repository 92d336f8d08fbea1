//! Gazebo collection files.
//!
//! A collection (gazebodistro format) lists the repositories of one Gazebo release:
//!
//! ```yaml
//! repositories:
//!   gz-cmake:
//!     type: git
//!     url: https://github.com/gazebosim/gz-cmake.git
//!     version: gz-cmake4
//!   sdformat:
//!     type: git
//!     url: https://github.com/gazebosim/sdformat.git
//!     version: sdf15
//! ```
//!
//! Only repository names are used to locate sources; `url` and `version` are kept for
//! reporting.

use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::core::{Result, VendorError};
use crate::manifest::PACKAGE_XML_FILE;
use crate::vendor::naming::vendor_identifier;

/// One source repository of a collection.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct Repository {
    #[serde(rename = "type")]
    pub repo_type: Option<String>,
    pub url: Option<String>,
    pub version: Option<String>,
}

/// A parsed collection file. Repositories iterate in name order.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct Collection {
    pub repositories: BTreeMap<String, Repository>,
}

impl Collection {
    /// Parse collection YAML. `filename` is only used in error messages.
    pub fn from_yaml(text: &str, filename: &str) -> Result<Self> {
        serde_yaml::from_str(text).map_err(|e| VendorError::CollectionParseError {
            file: filename.to_string(),
            reason: e.to_string(),
        })
    }

    /// Load a collection file from disk.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| VendorError::CollectionParseError {
            file: path.display().to_string(),
            reason: format!("failed to read file: {e}"),
        })?;
        let collection = Self::from_yaml(&text, &path.display().to_string())?;
        tracing::debug!(
            "Loaded {} repositories from {}",
            collection.repositories.len(),
            path.display()
        );
        Ok(collection)
    }

    /// Plan the generation jobs for sources under `src_dir` and outputs under `output_dir`.
    #[must_use]
    pub fn jobs(&self, src_dir: &Path, output_dir: &Path) -> Vec<CollectionJob> {
        self.repositories
            .keys()
            .map(|name| CollectionJob {
                name: name.clone(),
                input: src_dir.join(name).join(PACKAGE_XML_FILE),
                output_dir: output_dir.join(vendor_identifier(name)),
            })
            .collect()
    }
}

/// One repository's generation job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectionJob {
    /// Repository name from the collection
    pub name: String,
    /// `<src_dir>/<name>/package.xml`
    pub input: PathBuf,
    /// `<output_dir>/<vendor identifier>`
    pub output_dir: PathBuf,
}
