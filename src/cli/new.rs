//! Scaffold a new vendor package directory.
//!
//! The directory is named after the vendor identifier (`gz_math_vendor`) and created
//! under `--path` (default: the current directory). It receives the two generated
//! artifacts, the license files, the CMake config input and, depending on the library,
//! the `CONFIG_EXTRAS` hook and environment hooks. A new package starts at version
//! `0.0.1`; with `--force` over an existing package, the version in its `package.xml`
//! is kept.
//!
//! # Examples
//!
//! ```bash
//! gz-vendor new ~/ws/src/gz-sim/package.xml
//! gz-vendor new ~/ws/src/gz-sim/package.xml --path ~/vendor --force
//! ```
//!
//! # Error Conditions
//!
//! - The target directory already exists and `--force` is not used
//! - The upstream `package.xml` cannot be parsed or has an invalid version

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;
use std::path::PathBuf;

use super::CliConfig;
use crate::core::VendorError;
use crate::templating::{PACKAGE_XML, assets};
use crate::utils::expand_path;
use crate::vendor::generate::{load_upstream, read_prior, render_artifacts, write_support_files};
use crate::vendor::naming::{normalize, vendor_identifier};

#[derive(Args)]
pub struct NewCommand {
    /// Path to the upstream library's package.xml
    input: PathBuf,

    /// Parent directory of the new vendor package
    #[arg(short, long)]
    path: Option<PathBuf>,

    /// Write into the vendor package directory even if it already exists, keeping the
    /// version from its package.xml
    #[arg(short, long)]
    force: bool,

    /// Read the version suffix (pre-release marker) from the CMakeLists.txt next to the input
    #[arg(long)]
    suffix_from_cmake: bool,
}

impl NewCommand {
    pub fn execute(self, config: &CliConfig) -> Result<()> {
        let input = expand_path(&self.input)?;
        let parent = match self.path {
            Some(path) => expand_path(&path)?,
            None => PathBuf::from("."),
        };

        let (package, suffix) = load_upstream(&input, self.suffix_from_cmake)?;
        let name = normalize(&package.name)
            .with_context(|| format!("Failed to scaffold vendor package for {}", input.display()))?;
        let target_dir = parent.join(vendor_identifier(&name.base));

        let prior = if target_dir.exists() {
            if !self.force {
                return Err(VendorError::OutputExists {
                    path: target_dir.display().to_string(),
                }
                .into());
            }
            read_prior(&target_dir.join(PACKAGE_XML))?
        } else {
            None
        };

        let artifacts = render_artifacts(package, prior.as_ref(), &suffix)
            .with_context(|| format!("Failed to scaffold vendor package for {}", input.display()))?;
        artifacts.write_to(&target_dir)?;
        write_support_files(&target_dir, &assets::scaffold_files(&artifacts.params))?;

        tracing::info!("Scaffolded {} in {}", artifacts.params.vendor_name, target_dir.display());
        if !config.quiet {
            eprintln!(
                "{} Created {} at {}",
                "✓".green(),
                artifacts.params.vendor_name.bold(),
                target_dir.display()
            );
        }
        Ok(())
    }
}
