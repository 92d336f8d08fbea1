//! Utilities shared by the CLI commands.
//!
//! - [`fs`]: atomic file writes and path expansion
//! - [`progress`]: progress bars for batch generation

pub mod fs;
pub mod progress;

pub use fs::{atomic_write, ensure_dir, expand_path, safe_write};
pub use progress::ProgressBar;
