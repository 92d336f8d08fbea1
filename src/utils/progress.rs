//! Progress reporting for batch generation.

use indicatif::{ProgressBar as IndicatifBar, ProgressStyle as IndicatifStyle};
use std::io::IsTerminal;

/// Set to any value to hide progress bars.
pub const NO_PROGRESS_ENV: &str = "GZ_VENDOR_NO_PROGRESS";

fn is_progress_disabled() -> bool {
    std::env::var_os(NO_PROGRESS_ENV).is_some() || !std::io::stderr().is_terminal()
}

fn default_style() -> IndicatifStyle {
    IndicatifStyle::default_bar()
        .template("{prefix:.bold} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
        .map_or_else(|_| IndicatifStyle::default_bar(), |style| style.progress_chars("━╸━"))
}

/// A progress bar drawn on stderr, hidden when progress output is disabled.
pub struct ProgressBar {
    inner: IndicatifBar,
}

impl ProgressBar {
    /// A bar for `len` steps.
    pub fn new(len: u64) -> Self {
        if is_progress_disabled() {
            return Self::hidden();
        }
        let bar = IndicatifBar::new(len);
        bar.set_style(default_style());
        Self { inner: bar }
    }

    /// A bar that never draws.
    pub fn hidden() -> Self {
        Self {
            inner: IndicatifBar::hidden(),
        }
    }

    pub fn set_prefix(&self, prefix: impl Into<String>) {
        self.inner.set_prefix(prefix.into());
    }

    pub fn set_message(&self, msg: impl Into<String>) {
        self.inner.set_message(msg.into());
    }

    pub fn inc(&self, delta: u64) {
        self.inner.inc(delta);
    }

    /// Print a line above the bar without tearing it.
    pub fn println(&self, line: impl AsRef<str>) {
        if self.inner.is_hidden() {
            eprintln!("{}", line.as_ref());
        } else {
            self.inner.println(line.as_ref());
        }
    }

    pub fn finish_and_clear(&self) {
        self.inner.finish_and_clear();
    }
}
