//! Core types for gz-vendor
//!
//! This module holds the error system shared by every stage of vendor package
//! generation:
//! - **Strongly-typed errors** ([`VendorError`]) for the generation engine
//! - **User-friendly contexts** ([`ErrorContext`]) with suggestions for CLI users
//! - [`user_friendly_error`] to turn any [`anyhow::Error`] into a displayable context
//!
//! The engine functions in [`crate::vendor`] return [`Result`], which uses
//! [`VendorError`]. File and CLI layers wrap those errors in [`anyhow`] with the name of
//! the file being processed.

pub mod error;

pub use error::{ErrorContext, VendorError, user_friendly_error};

/// Result alias for the generation engine.
pub type Result<T, E = VendorError> = std::result::Result<T, E>;
