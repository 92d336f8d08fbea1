//! Common test utilities for gz-vendor integration tests

// Not every helper is used by every test module
#![allow(dead_code)]

use anyhow::Result;
use assert_cmd::Command;
use gz_vendor::test_utils::PackageXmlFixture;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Output of one gz-vendor run
pub struct CommandOutput {
    pub stdout: String,
    pub stderr: String,
    pub success: bool,
    pub code: Option<i32>,
}

/// A temporary workspace with upstream sources under `src/` and vendor packages under
/// `vendor/`.
pub struct TestProject {
    _temp: TempDir,
    root: PathBuf,
}

impl TestProject {
    pub fn new() -> Result<Self> {
        let temp = TempDir::new()?;
        let root = temp.path().to_path_buf();
        fs::create_dir_all(root.join("src"))?;
        fs::create_dir_all(root.join("vendor"))?;
        Ok(Self {
            _temp: temp,
            root,
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn src_dir(&self) -> PathBuf {
        self.root.join("src")
    }

    pub fn vendor_dir(&self) -> PathBuf {
        self.root.join("vendor")
    }

    /// Write an upstream fixture under `src/<name>/package.xml`.
    pub fn add_upstream(&self, fixture: &PackageXmlFixture) -> Result<PathBuf> {
        fixture.write_to(&self.src_dir())
    }

    pub fn read(&self, relative: impl AsRef<Path>) -> Result<String> {
        Ok(fs::read_to_string(self.root.join(relative))?)
    }

    pub fn write(&self, relative: impl AsRef<Path>, content: &str) -> Result<()> {
        let path = self.root.join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, content)?;
        Ok(())
    }

    pub fn exists(&self, relative: impl AsRef<Path>) -> bool {
        self.root.join(relative).exists()
    }

    /// A gz-vendor command running in the project root with colors and progress off.
    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("gz-vendor").expect("gz-vendor binary is built");
        cmd.current_dir(&self.root)
            .env("NO_COLOR", "1")
            .env("GZ_VENDOR_NO_PROGRESS", "1")
            .env_remove("RUST_LOG");
        cmd
    }

    pub fn run(&self, args: &[&str]) -> Result<CommandOutput> {
        let output = self.command().args(args).output()?;
        Ok(CommandOutput {
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
            success: output.status.success(),
            code: output.status.code(),
        })
    }
}
