//! Test utilities for gz-vendor
//!
//! Fixtures for upstream `package.xml` and collection files, and once-only logging
//! setup for tests. Enabled for the crate's own tests and, through the `test-utils`
//! feature, for the integration tests.
//!
//! # Example
//!
//! ```rust,no_run
//! use gz_vendor::test_utils::{PackageXmlFixture, init_test_logging};
//!
//! # fn example() -> anyhow::Result<()> {
//! init_test_logging(None);
//! let temp = tempfile::TempDir::new()?;
//! let input = PackageXmlFixture::gz_math().write_to(temp.path())?;
//! assert!(input.ends_with("gz-math/package.xml"));
//! # Ok(())
//! # }
//! ```

pub mod fixtures;

pub use fixtures::{PackageXmlFixture, collection_yaml};

use std::sync::Once;
use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Global flag to ensure logging is only initialized once in tests
static INIT_LOGGING: Once = Once::new();

/// Initialize logging for tests.
///
/// Only the first call has an effect. Uses `level` if given, otherwise `RUST_LOG`;
/// with neither, logging stays off.
///
/// ```bash
/// RUST_LOG=debug cargo test
/// ```
pub fn init_test_logging(level: Option<Level>) {
    INIT_LOGGING.call_once(|| {
        let filter = if let Some(level) = level {
            EnvFilter::new(level.to_string())
        } else if std::env::var("RUST_LOG").is_ok() {
            EnvFilter::from_default_env()
        } else {
            return;
        };

        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .with_target(true)
            .with_thread_ids(false)
            .try_init();
    });
}
