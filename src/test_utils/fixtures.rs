//! Sample upstream `package.xml` files for tests.

use std::fs;
use std::path::{Path, PathBuf};

/// Test fixture for creating upstream `package.xml` files
#[derive(Clone, Debug)]
pub struct PackageXmlFixture {
    pub content: String,
    pub name: String,
}

impl PackageXmlFixture {
    /// `gz-math7` 7.5.1 with pybind11 and SWIG bindings
    pub fn gz_math() -> Self {
        Self {
            name: "gz-math".to_string(),
            content: r#"<?xml version="1.0"?>
<?xml-model href="http://download.ros.org/schema/package_format3.xsd" schematypens="http://www.w3.org/2001/XMLSchema"?>
<package format="3">
  <name>gz-math7</name>
  <version>7.5.1</version>
  <description>Gazebo Math : Math classes and functions for robot applications</description>
  <maintainer email="scpeters@openrobotics.org">Steve Peters</maintainer>
  <license>Apache License 2.0</license>
  <url type="website">https://github.com/gazebosim/gz-math</url>

  <buildtool_depend>cmake</buildtool_depend>
  <build_depend>gz-cmake3</build_depend>
  <depend>eigen</depend>
  <depend>gz-utils2</depend>
  <depend>python3-distutils</depend>
  <test_depend>python3-pytest</test_depend>

  <export>
    <build_type>cmake</build_type>
  </export>
</package>
"#
            .to_string(),
        }
    }

    /// `gz-sim9` 9.0.0 building against gz-cmake4, with a denylisted test dependency
    pub fn gz_sim() -> Self {
        Self {
            name: "gz-sim".to_string(),
            content: r#"<?xml version="1.0"?>
<package format="3">
  <name>gz-sim9</name>
  <version>9.0.0</version>
  <description>Gazebo Sim : A Robotic Simulator</description>
  <maintainer email="mjcarroll@intrinsic.ai">Michael Carroll</maintainer>
  <license>Apache License 2.0</license>
  <url type="website">https://github.com/gazebosim/gz-sim</url>

  <buildtool_depend>cmake</buildtool_depend>
  <build_depend>gz-cmake4</build_depend>
  <build_depend>gz-transport13</build_depend>
  <depend>gz-math8</depend>
  <depend>gz-physics8</depend>
  <depend>DART</depend>
  <depend>dartsim</depend>
  <depend>protobuf-dev</depend>
  <exec_depend>gz-transport13</exec_depend>
  <test_depend>python3-distutils</test_depend>
  <test_depend>python3-pytest</test_depend>
</package>
"#
            .to_string(),
        }
    }

    /// `sdformat14` 14.0.0, which has no docs build
    pub fn sdformat() -> Self {
        Self {
            name: "sdformat".to_string(),
            content: r#"<?xml version="1.0"?>
<package format="2">
  <name>sdformat14</name>
  <version>14.0.0</version>
  <description>SDFormat is an XML file format that describes environments, objects, and robots</description>
  <maintainer email="scpeters@openrobotics.org">Steve Peters</maintainer>
  <license>Apache License 2.0</license>

  <build_depend>gz-cmake3</build_depend>
  <depend>gz-math7</depend>
  <depend>gz-utils2</depend>
  <depend>tinyxml2</depend>
</package>
"#
            .to_string(),
        }
    }

    /// `gz-cmake3` 3.4.1: tooling package with source patches
    pub fn gz_cmake() -> Self {
        Self {
            name: "gz-cmake".to_string(),
            content: r#"<?xml version="1.0"?>
<package format="3">
  <name>gz-cmake3</name>
  <version>3.4.1</version>
  <description>CMake modules to be used by the Gazebo projects.</description>
  <maintainer email="scpeters@openrobotics.org">Steve Peters</maintainer>
  <license>Apache License 2.0</license>
  <buildtool_depend>cmake</buildtool_depend>
</package>
"#
            .to_string(),
        }
    }

    /// A descriptor with a version that is not `MAJOR.MINOR.PATCH`
    pub fn invalid_version() -> Self {
        Self {
            name: "gz-plugin".to_string(),
            content: r#"<package format="3">
  <name>gz-plugin2</name>
  <version>2.0</version>
  <description>Plugin loading</description>
</package>
"#
            .to_string(),
        }
    }

    /// Content that is not well-formed XML
    pub fn malformed() -> Self {
        Self {
            name: "gz-utils".to_string(),
            content: r#"<package format="3"><name>gz-utils2</name><version>2.2.0</versio></package>"#
                .to_string(),
        }
    }

    /// Write the fixture to `<dir>/<name>/package.xml` and return that path.
    pub fn write_to(&self, dir: &Path) -> anyhow::Result<PathBuf> {
        let package_dir = dir.join(&self.name);
        fs::create_dir_all(&package_dir)?;
        let path = package_dir.join("package.xml");
        fs::write(&path, &self.content)?;
        Ok(path)
    }

    /// Write an upstream `CMakeLists.txt` next to the fixture declaring `suffix`.
    pub fn write_cmake_with_suffix(&self, dir: &Path, suffix: &str) -> anyhow::Result<PathBuf> {
        let package_dir = dir.join(&self.name);
        fs::create_dir_all(&package_dir)?;
        let path = package_dir.join("CMakeLists.txt");
        fs::write(
            &path,
            format!(
                "cmake_minimum_required(VERSION 3.22.1 FATAL_ERROR)\n\
                 find_package(gz-cmake4 REQUIRED)\n\
                 gz_configure_project(VERSION_SUFFIX {suffix})\n"
            ),
        )?;
        Ok(path)
    }
}

/// Collection file listing the given repository names
#[must_use]
pub fn collection_yaml(names: &[&str]) -> String {
    let mut yaml = String::from("repositories:\n");
    for name in names {
        yaml.push_str(&format!(
            "  {name}:\n    type: git\n    url: https://github.com/gazebosim/{name}.git\n    version: main\n"
        ));
    }
    yaml
}
