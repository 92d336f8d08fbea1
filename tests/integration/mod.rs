//! Integration test suite for gz-vendor
//!
//! These tests drive the `gz-vendor` binary end to end against upstream `package.xml`
//! fixtures in temporary directories.
//!
//! ```bash
//! cargo test --test integration
//! ```
//!
//! # Test Organization
//!
//! - **generate**: `generate` to stdout and into an output directory
//! - **new**: `new` scaffolding and its overwrite protection
//! - **collection**: batch generation from a collection file
//! - **error_scenarios**: error reporting and exit codes

#[path = "../common/mod.rs"]
mod common;

mod collection;
mod generate;
mod new;
