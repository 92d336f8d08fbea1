//! Regenerate the vendor packages of a whole Gazebo collection.
//!
//! Sources must already be checked out under `--src-dir`, one directory per repository
//! name. Each package is generated independently: a failure is reported with the
//! package name and processing continues. The command fails at the end if any package
//! failed.
//!
//! # Examples
//!
//! ```bash
//! gz-vendor collection ~/ws/ionic/src/collection-ionic.yaml \
//!     --src-dir ~/ws/ionic/src --output-dir ~/ws/vendor --suffix-from-cmake
//! ```

use anyhow::{Result, bail};
use clap::Args;
use colored::Colorize;
use std::path::PathBuf;

use super::CliConfig;
use crate::collection::Collection;
use crate::utils::{ProgressBar, expand_path};
use crate::vendor::generate::{GenerateOptions, generate_into};

#[derive(Args)]
pub struct CollectionCommand {
    /// Collection file (gazebodistro `repositories:` format)
    collection: PathBuf,

    /// Directory holding one checkout per repository
    #[arg(long)]
    src_dir: PathBuf,

    /// Directory to write the vendor packages into
    #[arg(short, long)]
    output_dir: PathBuf,

    /// Read version suffixes from each repository's CMakeLists.txt
    #[arg(long)]
    suffix_from_cmake: bool,

    /// Overwrite the CMake config and environment hook inputs
    #[arg(long)]
    overwrite_cmake_configs: bool,
}

impl CollectionCommand {
    pub fn execute(self, config: &CliConfig) -> Result<()> {
        let collection_path = expand_path(&self.collection)?;
        let src_dir = expand_path(&self.src_dir)?;
        let output_dir = expand_path(&self.output_dir)?;

        let collection = Collection::load(&collection_path)?;
        let jobs = collection.jobs(&src_dir, &output_dir);
        let options = GenerateOptions {
            prior: None,
            suffix_from_cmake: self.suffix_from_cmake,
            overwrite_cmake_configs: self.overwrite_cmake_configs,
        };

        let progress = if config.no_progress {
            ProgressBar::hidden()
        } else {
            ProgressBar::new(jobs.len() as u64)
        };
        progress.set_prefix("Generating");

        let mut failed = Vec::new();
        for job in &jobs {
            progress.set_message(job.name.clone());
            match generate_into(&job.input, &job.output_dir, &options) {
                Ok(artifacts) => {
                    tracing::debug!("{} -> {}", job.name, artifacts.params.vendor_name);
                }
                Err(e) => {
                    tracing::debug!("Failed to generate {} from {}: {:?}", job.name, job.input.display(), e);
                    if !config.quiet {
                        progress.println(format!("{} {}: {:#}", "✗".red(), job.name.bold(), e));
                    }
                    failed.push(job.name.clone());
                }
            }
            progress.inc(1);
        }
        progress.finish_and_clear();

        let succeeded = jobs.len() - failed.len();
        if !config.quiet {
            eprintln!(
                "{} Generated {} of {} vendor packages in {}",
                if failed.is_empty() { "✓".green() } else { "!".yellow() },
                succeeded,
                jobs.len(),
                output_dir.display()
            );
        }

        if !failed.is_empty() {
            bail!("{} package(s) failed: {}", failed.len(), failed.join(", "));
        }
        Ok(())
    }
}
