//! Error handling for gz-vendor
//!
//! This module provides the error types and user-friendly error reporting for the
//! vendor package generator. It follows two rules:
//! 1. **Strongly-typed errors** for the generation engine, so callers can match on the
//!    failure kind
//! 2. **User-friendly messages** with actionable suggestions for the CLI
//!
//! # Architecture
//!
//! - [`VendorError`] - Enumerated error types for every failure in the generator
//! - [`ErrorContext`] - Wrapper that adds details and a suggestion for display
//!
//! # Error Categories
//!
//! - **Naming**: [`VendorError::MalformedName`], [`VendorError::UnknownDesignator`]
//! - **Versions**: [`VendorError::InvalidVersion`]
//! - **Rendering**: [`VendorError::TemplateRenderError`]
//! - **Input files**: [`VendorError::PackageParseError`], [`VendorError::CollectionParseError`]
//! - **Output**: [`VendorError::OutputExists`], [`VendorError::IoError`]
//!
//! Every variant is fatal for the package being generated. A batch driver may log the
//! error and move on to the next package, but nothing is retried.
//!
//! # Examples
//!
//! ```rust,no_run
//! use gz_vendor::core::{VendorError, user_friendly_error};
//!
//! let error = VendorError::InvalidVersion {
//!     version: "1.2".to_string(),
//! };
//! let context = user_friendly_error(anyhow::Error::from(error));
//! context.display();
//! ```

use colored::Colorize;
use std::fmt;
use thiserror::Error;

/// The main error type for vendor package generation
///
/// Each variant carries the offending input so the message identifies what failed
/// without further context.
#[derive(Error, Debug)]
pub enum VendorError {
    /// A package name does not match the identifier grammar
    ///
    /// Names must start with a run of lowercase letters, `-` or `_`, optionally followed
    /// by the major-version digits (`gz-math7`).
    #[error("Malformed package name: '{name}'")]
    MalformedName {
        /// The name that failed to normalize
        name: String,
    },

    /// A version string is not exactly three dot-separated integers
    #[error("Invalid version string, must be int.int.int: \"{version}\"")]
    InvalidVersion {
        /// The rejected version string
        version: String,
    },

    /// A library designator was required but the name has none
    #[error("Could not extract designator from package name: \"{name}\"")]
    UnknownDesignator {
        /// The package name without a recognizable designator
        name: String,
    },

    /// The template engine failed to look up or render a template
    #[error("Failed to render template '{template}': {reason}")]
    TemplateRenderError {
        /// Name of the template being rendered
        template: String,
        /// Rendering failure reported by the engine
        reason: String,
    },

    /// A package.xml file could not be parsed
    #[error("Error parsing '{file}': {reason}")]
    PackageParseError {
        /// Path or label of the descriptor that failed
        file: String,
        /// Specific reason for the parsing failure
        reason: String,
    },

    /// A collection file could not be parsed
    #[error("Invalid collection file '{file}': {reason}")]
    CollectionParseError {
        /// Path to the collection file
        file: String,
        /// Specific reason for the parsing failure
        reason: String,
    },

    /// Output directory already exists and overwriting was not requested
    #[error("Output directory already exists: {path}")]
    OutputExists {
        /// The existing directory
        path: String,
    },

    /// IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// Other error
    #[error("{message}")]
    Other {
        /// Generic error message
        message: String,
    },
}

impl Clone for VendorError {
    fn clone(&self) -> Self {
        match self {
            Self::MalformedName {
                name,
            } => Self::MalformedName {
                name: name.clone(),
            },
            Self::InvalidVersion {
                version,
            } => Self::InvalidVersion {
                version: version.clone(),
            },
            Self::UnknownDesignator {
                name,
            } => Self::UnknownDesignator {
                name: name.clone(),
            },
            Self::TemplateRenderError {
                template,
                reason,
            } => Self::TemplateRenderError {
                template: template.clone(),
                reason: reason.clone(),
            },
            Self::PackageParseError {
                file,
                reason,
            } => Self::PackageParseError {
                file: file.clone(),
                reason: reason.clone(),
            },
            Self::CollectionParseError {
                file,
                reason,
            } => Self::CollectionParseError {
                file: file.clone(),
                reason: reason.clone(),
            },
            Self::OutputExists {
                path,
            } => Self::OutputExists {
                path: path.clone(),
            },
            // io::Error is not Clone
            Self::IoError(e) => Self::Other {
                message: format!("IO error: {e}"),
            },
            Self::Other {
                message,
            } => Self::Other {
                message: message.clone(),
            },
        }
    }
}

/// Error context wrapper that provides user-friendly error information
///
/// When displayed, errors show:
/// 1. **Error**: The main error message in red
/// 2. **Details**: Additional context in yellow (optional)
/// 3. **Suggestion**: Actionable steps in green (optional)
///
/// ```rust,no_run
/// use gz_vendor::core::{VendorError, ErrorContext};
///
/// let context = ErrorContext::new(VendorError::MalformedName { name: "7up".to_string() })
///     .with_suggestion("Check the <name> element of the input package.xml");
/// context.display();
/// ```
#[derive(Debug)]
pub struct ErrorContext {
    /// The underlying error
    pub error: VendorError,
    /// Optional suggestion for resolving the error
    pub suggestion: Option<String>,
    /// Optional additional details about the error
    pub details: Option<String>,
}

impl ErrorContext {
    /// Create a new error context with no suggestion or details.
    #[must_use]
    pub const fn new(error: VendorError) -> Self {
        Self {
            error,
            suggestion: None,
            details: None,
        }
    }

    /// Add a suggestion for resolving the error
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    /// Add additional details explaining the error
    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    /// Display the error context to stderr with terminal colors
    pub fn display(&self) {
        eprintln!("{}: {}", "error".red().bold(), self.error);

        if let Some(details) = &self.details {
            eprintln!("{}: {}", "details".yellow(), details);
        }

        if let Some(suggestion) = &self.suggestion {
            eprintln!("{}: {}", "suggestion".green(), suggestion);
        }
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.error)?;

        if let Some(details) = &self.details {
            write!(f, "\nDetails: {details}")?;
        }

        if let Some(suggestion) = &self.suggestion {
            write!(f, "\nSuggestion: {suggestion}")?;
        }

        Ok(())
    }
}

impl std::error::Error for ErrorContext {}

/// Convert any error to a user-friendly [`ErrorContext`] with actionable suggestions
///
/// Recognizes [`VendorError`] anywhere in the error chain (the CLI wraps engine errors
/// with file context), then [`std::io::Error`], and falls back to a generic message
/// that includes the full cause chain.
#[must_use]
pub fn user_friendly_error(error: anyhow::Error) -> ErrorContext {
    let prefix = chain_prefix(&error);

    if let Some(vendor_error) = error.chain().find_map(|e| e.downcast_ref::<VendorError>()) {
        let ctx = create_error_context(vendor_error.clone());
        return match prefix {
            Some(prefix) => {
                let details = match ctx.details {
                    Some(ref d) => format!("{prefix}\n{d}"),
                    None => prefix,
                };
                ErrorContext {
                    details: Some(details),
                    ..ctx
                }
            }
            None => ctx,
        };
    }

    if let Some(io_error) = error.downcast_ref::<std::io::Error>() {
        match io_error.kind() {
            std::io::ErrorKind::PermissionDenied => {
                return ErrorContext::new(VendorError::Other {
                    message: format!("Permission denied: {error:#}"),
                })
                .with_suggestion("Check the permissions of the input file and the output directory");
            }
            std::io::ErrorKind::NotFound => {
                return ErrorContext::new(VendorError::Other {
                    message: format!("File not found: {error:#}"),
                })
                .with_suggestion("Check that the file or directory exists and the path is correct");
            }
            _ => {}
        }
    }

    // Generic error - include the full error chain for better diagnostics
    let mut message = error.to_string();
    let chain: Vec<String> =
        error.chain().skip(1).map(std::string::ToString::to_string).collect();

    if !chain.is_empty() {
        message.push_str("\n\nCaused by:");
        for (i, cause) in chain.iter().enumerate() {
            message.push_str(&format!("\n  {}: {}", i + 1, cause));
        }
    }

    ErrorContext::new(VendorError::Other {
        message,
    })
}

/// Context messages attached above the first [`VendorError`] in the chain.
fn chain_prefix(error: &anyhow::Error) -> Option<String> {
    let outer: Vec<String> = error
        .chain()
        .take_while(|e| e.downcast_ref::<VendorError>().is_none())
        .map(std::string::ToString::to_string)
        .collect();
    if outer.is_empty() {
        None
    } else {
        Some(outer.join(": "))
    }
}

fn create_error_context(error: VendorError) -> ErrorContext {
    match &error {
        VendorError::MalformedName { .. } => ErrorContext::new(error)
            .with_suggestion("Package names must start with lowercase letters, '-' or '_', optionally followed by the major version (e.g. 'gz-math7')")
            .with_details("The name is used to derive the vendor package identifier"),

        VendorError::InvalidVersion { .. } => ErrorContext::new(error)
            .with_suggestion("Set <version> in the upstream package.xml to MAJOR.MINOR.PATCH (e.g. '7.5.1')")
            .with_details("Pre-release markers belong in VERSION_SUFFIX in CMakeLists.txt, not in package.xml"),

        VendorError::UnknownDesignator { .. } => ErrorContext::new(error)
            .with_suggestion("Only 'gz-*' libraries and 'sdformat' have designators"),

        VendorError::TemplateRenderError { .. } => ErrorContext::new(error)
            .with_details("Templates are compiled into gz-vendor; a render failure means a template references a parameter that was not assembled")
            .with_suggestion("Report this as a bug, including the input package.xml"),

        VendorError::PackageParseError { file, .. } => {
            let suggestion = format!("Check that {file} is a well-formed package.xml with <name> and <version>");
            ErrorContext::new(error).with_suggestion(suggestion)
        }

        VendorError::CollectionParseError { .. } => ErrorContext::new(error)
            .with_suggestion("Collection files need a top-level 'repositories' map, as in gazebodistro's collection-<release>.yaml"),

        VendorError::OutputExists { .. } => ErrorContext::new(error)
            .with_suggestion("Use --force to regenerate into the existing directory, or 'gz-vendor generate --output-dir' to update it"),

        VendorError::IoError(_) | VendorError::Other { .. } => ErrorContext::new(error),
    }
}
