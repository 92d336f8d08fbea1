//! Command-line interface for gz-vendor.
//!
//! # Available Commands
//!
//! - `generate` - Regenerate a vendor package from an upstream `package.xml`
//! - `new` - Scaffold a new vendor package directory
//! - `collection` - Regenerate every vendor package of a Gazebo collection
//!
//! # Command Usage Patterns
//!
//! ```bash
//! # Preview the generated files for a checked-out library
//! gz-vendor generate ~/ws/src/gz-math/package.xml
//!
//! # Update an existing vendor package in place, keeping its version
//! gz-vendor generate ~/ws/src/gz-math/package.xml --output-dir gz_math_vendor
//!
//! # Start a vendor package for a new library
//! gz-vendor new ~/ws/src/gz-sim/package.xml --path ~/vendor
//!
//! # Regenerate a whole release
//! gz-vendor collection collection-ionic.yaml --src-dir ~/ws/src --output-dir ~/vendor
//! ```
//!
//! # Global Options
//!
//! - `--verbose` - Enable debug output
//! - `--quiet` - Suppress all output except errors
//! - `--no-color` - Disable colored output
//! - `--no-progress` - Disable progress bars
//!
//! Logs are written to stderr; stdout only ever carries rendered artifacts, so
//! `gz-vendor generate pkg.xml > out.txt` captures exactly the generated text.

mod collection;
mod generate;
mod new;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

/// Runtime configuration for CLI execution.
///
/// Built once from the global flags and handed to every command, so commands never read
/// process-wide state for these settings.
#[derive(Debug, Clone)]
pub struct CliConfig {
    /// Log level directive for the tracing subscriber (`debug`, `info`, `error`)
    pub log_level: String,

    /// Whether colored output is enabled
    pub color: bool,

    /// Whether progress bars are suppressed
    pub no_progress: bool,

    /// Whether informational console output is suppressed
    pub quiet: bool,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            color: true,
            no_progress: false,
            quiet: false,
        }
    }
}

impl CliConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Install the global tracing subscriber and color setting.
    ///
    /// `RUST_LOG` takes precedence over the verbosity flags. Calling this more than once
    /// is harmless; later subscribers are ignored.
    pub fn init_logging(&self) {
        if !self.color {
            colored::control::set_override(false);
        }

        let filter = if std::env::var_os("RUST_LOG").is_some() {
            EnvFilter::from_default_env()
        } else {
            EnvFilter::new(&self.log_level)
        };

        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .with_ansi(self.color)
            .try_init();
    }
}

/// Generate ROS vendor packages for Gazebo libraries
#[derive(Parser)]
#[command(
    name = "gz-vendor",
    about = "Generate ROS vendor packages for Gazebo libraries",
    version,
    long_about = "gz-vendor reads an upstream Gazebo library's package.xml and generates the \
                  package.xml and CMakeLists.txt of the ROS vendor package that wraps it."
)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose output (debug logging)
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Disable colored output
    #[arg(long, global = true, env = "NO_COLOR", value_parser = clap::builder::FalseyValueParser::new())]
    no_color: bool,

    /// Disable progress bars
    #[arg(long, global = true)]
    no_progress: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate vendor package files from an upstream package.xml
    Generate(generate::GenerateCommand),

    /// Create a new vendor package directory
    New(new::NewCommand),

    /// Generate vendor packages for every repository of a collection file
    Collection(collection::CollectionCommand),
}

impl Cli {
    /// Execute the CLI with configuration derived from the global flags.
    pub fn execute(self) -> Result<()> {
        let config = self.build_config();
        config.init_logging();
        self.execute_with_config(&config)
    }

    /// Build the [`CliConfig`] from the parsed flags.
    #[must_use]
    pub fn build_config(&self) -> CliConfig {
        let log_level = if self.verbose {
            "debug"
        } else if self.quiet {
            "error"
        } else {
            "info"
        };

        CliConfig {
            log_level: log_level.to_string(),
            color: !self.no_color,
            no_progress: self.no_progress || self.quiet,
            quiet: self.quiet,
        }
    }

    /// Execute the selected command with an explicit configuration.
    pub fn execute_with_config(self, config: &CliConfig) -> Result<()> {
        match self.command {
            Commands::Generate(cmd) => cmd.execute(config),
            Commands::New(cmd) => cmd.execute(config),
            Commands::Collection(cmd) => cmd.execute(config),
        }
    }
}
