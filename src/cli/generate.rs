//! Generate vendor package files from an upstream `package.xml`.
//!
//! # Examples
//!
//! Print both artifacts to stdout:
//! ```bash
//! gz-vendor generate ~/ws/src/gz-math/package.xml
//! ```
//!
//! Update a vendor package in place, keeping the version in its `package.xml`:
//! ```bash
//! gz-vendor generate ~/ws/src/gz-math/package.xml --output-dir gz_math_vendor
//! ```
//!
//! Pick up a pre-release suffix and refresh the CMake config inputs:
//! ```bash
//! gz-vendor generate ~/ws/src/gz-sim/package.xml -o gz_sim_vendor \
//!     --suffix-from-cmake --overwrite-cmake-configs
//! ```

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;
use std::path::{Path, PathBuf};

use super::CliConfig;
use crate::utils::expand_path;
use crate::vendor::generate::{
    GenerateOptions, VendorArtifacts, generate_into, load_upstream, read_prior, render_artifacts,
};

#[derive(Args)]
pub struct GenerateCommand {
    /// Path to the upstream library's package.xml
    input: PathBuf,

    /// Directory to write the vendor package into (created if missing).
    /// Without it, both artifacts are printed to stdout.
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Previously generated vendor package.xml whose version is kept
    /// [default: <output-dir>/package.xml]
    #[arg(long)]
    prior: Option<PathBuf>,

    /// Read the version suffix (pre-release marker) from the CMakeLists.txt next to the input
    #[arg(long)]
    suffix_from_cmake: bool,

    /// Overwrite the CMake config and environment hook inputs
    #[arg(long, requires = "output_dir")]
    overwrite_cmake_configs: bool,

    /// Print the rendering parameters as JSON instead of the artifacts
    #[arg(long)]
    print_params: bool,
}

impl GenerateCommand {
    pub fn execute(self, config: &CliConfig) -> Result<()> {
        let input = expand_path(&self.input)?;
        let prior = self.prior.as_deref().map(expand_path).transpose()?;

        let Some(output_dir) = self.output_dir.as_deref() else {
            let artifacts = self.render_only(&input, prior)?;
            return self.print(&artifacts);
        };

        let output_dir = expand_path(output_dir)?;
        let options = GenerateOptions {
            prior,
            suffix_from_cmake: self.suffix_from_cmake,
            overwrite_cmake_configs: self.overwrite_cmake_configs,
        };
        let artifacts = generate_into(&input, &output_dir, &options)?;

        if self.print_params {
            print_params(&artifacts)?;
        }
        if !config.quiet {
            eprintln!(
                "{} Generated {} {} in {}",
                "✓".green(),
                artifacts.params.vendor_name.bold(),
                artifacts.params.vendor_pkg_version,
                output_dir.display()
            );
        }
        Ok(())
    }

    /// Render without touching the file system beyond reading inputs.
    fn render_only(&self, input: &Path, prior: Option<PathBuf>) -> Result<VendorArtifacts> {
        let (package, suffix) = load_upstream(input, self.suffix_from_cmake)?;
        let prior = match prior {
            Some(path) => read_prior(&path)?,
            None => None,
        };
        render_artifacts(package, prior.as_ref(), &suffix)
            .with_context(|| format!("Failed to generate vendor package for {}", input.display()))
    }

    fn print(&self, artifacts: &VendorArtifacts) -> Result<()> {
        if self.print_params {
            return print_params(artifacts);
        }
        println!("{}", artifacts.package_xml);
        println!("{}", artifacts.cmake_lists);
        Ok(())
    }
}

fn print_params(artifacts: &VendorArtifacts) -> Result<()> {
    let json = serde_json::to_string_pretty(&artifacts.params)
        .context("Failed to serialize rendering parameters")?;
    println!("{json}");
    Ok(())
}
