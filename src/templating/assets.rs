//! Static files copied verbatim into vendor packages.
//!
//! The `.in` files are CMake `configure_file` inputs, expanded by the vendor package's
//! own build rather than by this tool.

use crate::vendor::params::RenderParameters;

pub const LICENSE: &str = include_str!("templates/LICENSE");
pub const CONTRIBUTING: &str = include_str!("templates/CONTRIBUTING.md");
pub const CONFIG_CMAKE_IN: &str = include_str!("templates/config.cmake.in");
pub const EXTRAS_CMAKE_IN: &str = include_str!("templates/extras.cmake.in");
pub const VENDOR_DSV_IN: &str = include_str!("templates/vendor.dsv.in");
pub const VENDOR_SH_IN: &str = include_str!("templates/vendor.sh.in");

/// A static file and the name it is written under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SupportFile {
    pub file_name: String,
    pub contents: &'static str,
}

impl SupportFile {
    fn new(file_name: impl Into<String>, contents: &'static str) -> Self {
        Self {
            file_name: file_name.into(),
            contents,
        }
    }
}

/// Files every vendor package directory carries.
#[must_use]
pub fn legal_files() -> Vec<SupportFile> {
    vec![SupportFile::new("LICENSE", LICENSE), SupportFile::new("CONTRIBUTING.md", CONTRIBUTING)]
}

/// The unversioned CMake config shim, named after the CMake package.
#[must_use]
pub fn config_file(params: &RenderParameters) -> SupportFile {
    SupportFile::new(
        format!("{}-config.cmake.in", params.policy.cmake_package_name),
        CONFIG_CMAKE_IN,
    )
}

/// The `CONFIG_EXTRAS` hook.
#[must_use]
pub fn extras_file(params: &RenderParameters) -> SupportFile {
    SupportFile::new(format!("{}-extras.cmake.in", params.vendor_name), EXTRAS_CMAKE_IN)
}

/// The `.dsv` and `.sh` environment hooks.
#[must_use]
pub fn env_hook_files(params: &RenderParameters) -> Vec<SupportFile> {
    vec![
        SupportFile::new(format!("{}.dsv.in", params.vendor_name), VENDOR_DSV_IN),
        SupportFile::new(format!("{}.sh.in", params.vendor_name), VENDOR_SH_IN),
    ]
}

/// CMake config inputs for `generate --overwrite-cmake-configs`.
///
/// The extras hook is always included, matching what `generate` has always refreshed;
/// environment hooks only when the package installs them.
#[must_use]
pub fn cmake_config_files(params: &RenderParameters) -> Vec<SupportFile> {
    let mut files = vec![config_file(params), extras_file(params)];
    if params.policy.has_install_env_script {
        files.extend(env_hook_files(params));
    }
    files
}

/// Everything a freshly scaffolded vendor package needs besides the two artifacts.
#[must_use]
pub fn scaffold_files(params: &RenderParameters) -> Vec<SupportFile> {
    let mut files = legal_files();
    files.push(config_file(params));
    if params.policy.has_extra_cmake_hook {
        files.push(extras_file(params));
    }
    if params.policy.has_install_env_script {
        files.extend(env_hook_files(params));
    }
    files
}
