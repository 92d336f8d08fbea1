//! `gz-vendor collection` batch generation.

use anyhow::Result;
use gz_vendor::test_utils::{PackageXmlFixture, collection_yaml};

use crate::common::TestProject;

#[test]
fn test_collection_generates_every_repository() -> Result<()> {
    let project = TestProject::new()?;
    for fixture in [PackageXmlFixture::gz_math(), PackageXmlFixture::sdformat()] {
        project.add_upstream(&fixture)?;
    }
    project.write("collection.yaml", &collection_yaml(&["gz-math", "sdformat"]))?;

    let output = project.run(&[
        "collection",
        "collection.yaml",
        "--src-dir",
        "src",
        "--output-dir",
        "vendor",
    ])?;
    assert!(output.success, "stderr: {}", output.stderr);
    assert!(output.stderr.contains("Generated 2 of 2 vendor packages"));

    let math = project.read("vendor/gz_math_vendor/package.xml")?;
    assert!(math.contains("<name>gz_math_vendor</name>"));
    let sdformat = project.read("vendor/sdformat_vendor/package.xml")?;
    assert!(sdformat.contains("<depend>gz_math_vendor</depend>"));
    Ok(())
}

#[test]
fn test_collection_continues_past_failures() -> Result<()> {
    let project = TestProject::new()?;
    project.add_upstream(&PackageXmlFixture::gz_math())?;
    project.add_upstream(&PackageXmlFixture::invalid_version())?;
    project.add_upstream(&PackageXmlFixture::sdformat())?;
    project.write(
        "collection.yaml",
        &collection_yaml(&["gz-math", "gz-plugin", "sdformat"]),
    )?;

    let output = project.run(&[
        "collection",
        "collection.yaml",
        "--src-dir",
        "src",
        "-o",
        "vendor",
    ])?;
    assert!(!output.success);
    assert_eq!(output.code, Some(1));
    assert!(output.stderr.contains("gz-plugin"), "stderr: {}", output.stderr);
    assert!(output.stderr.contains("1 package(s) failed"));

    // Packages after the failure are still generated
    assert!(project.exists("vendor/gz_math_vendor/package.xml"));
    assert!(project.exists("vendor/sdformat_vendor/package.xml"));
    assert!(!project.exists("vendor/gz_plugin_vendor/package.xml"));
    Ok(())
}

#[test]
fn test_collection_missing_checkout() -> Result<()> {
    let project = TestProject::new()?;
    project.add_upstream(&PackageXmlFixture::gz_math())?;
    project.write("collection.yaml", &collection_yaml(&["gz-math", "gz-rendering"]))?;

    let output =
        project.run(&["collection", "collection.yaml", "--src-dir", "src", "-o", "vendor"])?;
    assert!(!output.success);
    assert!(output.stderr.contains("gz-rendering"));
    assert!(project.exists("vendor/gz_math_vendor/package.xml"));
    Ok(())
}

#[test]
fn test_collection_invalid_file() -> Result<()> {
    let project = TestProject::new()?;
    project.write("collection.yaml", "release: ionic\n")?;

    let output =
        project.run(&["collection", "collection.yaml", "--src-dir", "src", "-o", "vendor"])?;
    assert!(!output.success);
    assert!(output.stderr.contains("Invalid collection file"), "stderr: {}", output.stderr);
    Ok(())
}
