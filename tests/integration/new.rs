//! `gz-vendor new` scaffolding.

use anyhow::Result;
use gz_vendor::test_utils::PackageXmlFixture;
use predicates::prelude::*;

use crate::common::TestProject;

#[test]
fn test_new_scaffolds_vendor_package() -> Result<()> {
    let project = TestProject::new()?;
    let input = project.add_upstream(&PackageXmlFixture::sdformat())?;

    let output = project.run(&["new", input.to_str().unwrap(), "--path", "vendor"])?;
    assert!(output.success, "stderr: {}", output.stderr);
    assert!(output.stdout.is_empty(), "stdout: {}", output.stdout);
    assert!(output.stderr.contains("Created sdformat_vendor"));

    for file in [
        "package.xml",
        "CMakeLists.txt",
        "LICENSE",
        "CONTRIBUTING.md",
        "sdformat-config.cmake.in",
        "sdformat_vendor-extras.cmake.in",
        "sdformat_vendor.dsv.in",
        "sdformat_vendor.sh.in",
    ] {
        assert!(project.exists(format!("vendor/sdformat_vendor/{file}")), "missing {file}");
    }

    let package_xml = project.read("vendor/sdformat_vendor/package.xml")?;
    assert!(package_xml.contains("<version>0.0.1</version>"));
    Ok(())
}

#[test]
fn test_new_tooling_package_has_no_hooks() -> Result<()> {
    let project = TestProject::new()?;
    let input = project.add_upstream(&PackageXmlFixture::gz_cmake())?;

    let output = project.run(&["new", input.to_str().unwrap()])?;
    assert!(output.success, "stderr: {}", output.stderr);

    assert!(project.exists("gz_cmake_vendor/gz-cmake-config.cmake.in"));
    assert!(!project.exists("gz_cmake_vendor/gz_cmake_vendor-extras.cmake.in"));
    assert!(!project.exists("gz_cmake_vendor/gz_cmake_vendor.dsv.in"));

    let cmake = project.read("gz_cmake_vendor/CMakeLists.txt")?;
    assert!(cmake.contains("PATCHES patches"));
    assert!(cmake.trim_end().ends_with("ament_package()"));
    Ok(())
}

#[test]
fn test_new_refuses_existing_directory() -> Result<()> {
    let project = TestProject::new()?;
    let input = project.add_upstream(&PackageXmlFixture::gz_math())?;
    project.write("gz_math_vendor/package.xml", "keep me\n")?;

    project
        .command()
        .arg("new")
        .arg(&input)
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Output directory already exists"));
    assert_eq!(project.read("gz_math_vendor/package.xml")?, "keep me\n");
    Ok(())
}

#[test]
fn test_new_force_keeps_released_version() -> Result<()> {
    let project = TestProject::new()?;
    let input = project.add_upstream(&PackageXmlFixture::gz_math())?;
    project.write(
        "gz_math_vendor/package.xml",
        r#"<package format="3">
  <name>gz_math_vendor</name>
  <version>2.3.1</version>
  <description>Vendor package</description>
</package>
"#,
    )?;

    let output = project.run(&["new", input.to_str().unwrap(), "--force"])?;
    assert!(output.success, "stderr: {}", output.stderr);

    let package_xml = project.read("gz_math_vendor/package.xml")?;
    assert!(package_xml.contains("<name>gz_math_vendor</name>"));
    assert!(package_xml.contains("<version>2.3.1</version>"));
    assert!(project.exists("gz_math_vendor/gz-math-config.cmake.in"));
    Ok(())
}

#[test]
fn test_new_force_into_empty_directory_starts_fresh() -> Result<()> {
    let project = TestProject::new()?;
    let input = project.add_upstream(&PackageXmlFixture::gz_math())?;
    project.write("gz_math_vendor/README.md", "notes\n")?;

    let output = project.run(&["new", input.to_str().unwrap(), "--force"])?;
    assert!(output.success, "stderr: {}", output.stderr);
    assert!(project.read("gz_math_vendor/package.xml")?.contains("<version>0.0.1</version>"));
    Ok(())
}
