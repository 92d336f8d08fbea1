//! `gz-vendor generate` end to end.

use anyhow::Result;
use gz_vendor::manifest::parse_package_str;
use gz_vendor::test_utils::PackageXmlFixture;

use crate::common::TestProject;

#[test]
fn test_generate_prints_artifacts_to_stdout() -> Result<()> {
    let project = TestProject::new()?;
    let input = project.add_upstream(&PackageXmlFixture::gz_sim())?;

    let output = project.run(&["generate", input.to_str().unwrap()])?;
    assert!(output.success, "stderr: {}", output.stderr);

    assert!(output.stdout.contains("<name>gz_sim_vendor</name>"));
    assert!(output.stdout.contains("<version>0.0.1</version>"));
    assert!(output.stdout.contains("<depend>gz_transport_vendor</depend>"));
    assert!(output.stdout.contains("<depend>gz_dartsim_vendor</depend>"));
    assert!(!output.stdout.contains("<depend>dartsim_vendor</depend>"));
    assert_eq!(output.stdout.matches("gz_dartsim_vendor</depend>").count(), 1);
    assert!(!output.stdout.contains("python3-distutils"));
    assert!(output.stdout.contains("project(gz_sim_vendor)"));
    assert!(output.stdout.contains("set(LIB_VER_MAJOR 9)"));

    // Nothing is written in stdout mode
    assert!(!project.exists("gz_sim_vendor"));
    Ok(())
}

#[test]
fn test_generate_writes_output_dir() -> Result<()> {
    let project = TestProject::new()?;
    let input = project.add_upstream(&PackageXmlFixture::gz_math())?;

    let output =
        project.run(&["generate", input.to_str().unwrap(), "--output-dir", "gz_math_vendor"])?;
    assert!(output.success, "stderr: {}", output.stderr);
    assert!(output.stdout.is_empty(), "stdout: {}", output.stdout);
    assert!(output.stderr.contains("Generated gz_math_vendor 0.0.1"));

    for file in ["package.xml", "CMakeLists.txt", "LICENSE", "CONTRIBUTING.md"] {
        assert!(project.exists(format!("gz_math_vendor/{file}")), "missing {file}");
    }
    // Config inputs are only written on request
    assert!(!project.exists("gz_math_vendor/gz-math-config.cmake.in"));

    let package_xml = project.read("gz_math_vendor/package.xml")?;
    let generated = parse_package_str(&package_xml, "package.xml")?;
    assert_eq!(generated.name, "gz_math_vendor");
    assert_eq!(generated.version, "0.0.1");

    let cmake = project.read("gz_math_vendor/CMakeLists.txt")?;
    assert!(cmake.contains("-DSKIP_SWIG:BOOL=ON"));
    assert!(cmake.contains("-DSKIP_PYBIND11:BOOL=ON"));
    Ok(())
}

#[test]
fn test_generate_keeps_prior_version() -> Result<()> {
    let project = TestProject::new()?;
    let input = project.add_upstream(&PackageXmlFixture::gz_sim())?;
    project.write(
        "gz_sim_vendor/package.xml",
        r#"<package format="3">
  <name>gz_sim_vendor</name>
  <version>2.3.1</version>
  <description>Vendor package</description>
</package>
"#,
    )?;

    let output = project.run(&["generate", input.to_str().unwrap(), "-o", "gz_sim_vendor"])?;
    assert!(output.success, "stderr: {}", output.stderr);

    let package_xml = project.read("gz_sim_vendor/package.xml")?;
    assert!(package_xml.contains("<version>2.3.1</version>"));
    assert!(package_xml.contains("Vendor package for: gz-sim9 9.0.0"));
    Ok(())
}

#[test]
fn test_generate_explicit_prior_in_stdout_mode() -> Result<()> {
    let project = TestProject::new()?;
    let input = project.add_upstream(&PackageXmlFixture::gz_math())?;
    project.write(
        "released/package.xml",
        r#"<package format="3"><name>gz_math_vendor</name><version>0.1.7</version></package>"#,
    )?;

    let output = project.run(&[
        "generate",
        input.to_str().unwrap(),
        "--prior",
        "released/package.xml",
    ])?;
    assert!(output.success, "stderr: {}", output.stderr);
    assert!(output.stdout.contains("<version>0.1.7</version>"));
    Ok(())
}

#[test]
fn test_generate_twice_is_stable() -> Result<()> {
    let project = TestProject::new()?;
    let input = project.add_upstream(&PackageXmlFixture::sdformat())?;
    let args = ["generate", input.to_str().unwrap(), "-o", "sdformat_vendor"];

    assert!(project.run(&args)?.success);
    let first_xml = project.read("sdformat_vendor/package.xml")?;
    let first_cmake = project.read("sdformat_vendor/CMakeLists.txt")?;

    assert!(project.run(&args)?.success);
    assert_eq!(project.read("sdformat_vendor/package.xml")?, first_xml);
    assert_eq!(project.read("sdformat_vendor/CMakeLists.txt")?, first_cmake);
    Ok(())
}

#[test]
fn test_generate_suffix_from_cmake() -> Result<()> {
    let project = TestProject::new()?;
    let fixture = PackageXmlFixture::gz_sim();
    let input = project.add_upstream(&fixture)?;
    fixture.write_cmake_with_suffix(&project.src_dir(), "pre2")?;

    let output = project.run(&["generate", input.to_str().unwrap(), "--suffix-from-cmake"])?;
    assert!(output.success, "stderr: {}", output.stderr);
    assert!(output.stdout.contains("Vendor package for: gz-sim9 9.0.0-pre2"));
    assert!(output.stdout.contains(r#"set(LIB_VER_SUFFIX "-pre2")"#));
    Ok(())
}

#[test]
fn test_generate_overwrite_cmake_configs() -> Result<()> {
    let project = TestProject::new()?;
    let input = project.add_upstream(&PackageXmlFixture::sdformat())?;
    project.write("sdformat_vendor/sdformat-config.cmake.in", "stale\n")?;

    let output = project.run(&[
        "generate",
        input.to_str().unwrap(),
        "-o",
        "sdformat_vendor",
        "--overwrite-cmake-configs",
    ])?;
    assert!(output.success, "stderr: {}", output.stderr);

    let config = project.read("sdformat_vendor/sdformat-config.cmake.in")?;
    assert_ne!(config, "stale\n");
    assert!(config.contains("@LIB_NAME_FULL@"));
    assert!(project.exists("sdformat_vendor/sdformat_vendor-extras.cmake.in"));
    assert!(project.exists("sdformat_vendor/sdformat_vendor.dsv.in"));
    assert!(project.exists("sdformat_vendor/sdformat_vendor.sh.in"));
    Ok(())
}

#[test]
fn test_overwrite_cmake_configs_requires_output_dir() -> Result<()> {
    let project = TestProject::new()?;
    let input = project.add_upstream(&PackageXmlFixture::sdformat())?;

    let output =
        project.run(&["generate", input.to_str().unwrap(), "--overwrite-cmake-configs"])?;
    assert!(!output.success);
    assert_eq!(output.code, Some(2));
    Ok(())
}

#[test]
fn test_print_params_json() -> Result<()> {
    let project = TestProject::new()?;
    let input = project.add_upstream(&PackageXmlFixture::gz_cmake())?;

    let output = project.run(&["generate", input.to_str().unwrap(), "--print-params"])?;
    assert!(output.success, "stderr: {}", output.stderr);

    let params: serde_json::Value = serde_json::from_str(&output.stdout)?;
    assert_eq!(params["vendor_name"], "gz_cmake_vendor");
    assert_eq!(params["upstream_name"], "gz-cmake3");
    assert_eq!(params["designator"], "cmake");
    assert_eq!(params["has_source_patches"], true);
    assert_eq!(params["has_extra_cmake_hook"], false);
    assert_eq!(params["version"]["minor"], 4);
    Ok(())
}

#[test]
fn test_quiet_suppresses_status() -> Result<()> {
    let project = TestProject::new()?;
    let input = project.add_upstream(&PackageXmlFixture::gz_math())?;

    let output = project.run(&["--quiet", "generate", input.to_str().unwrap(), "-o", "out"])?;
    assert!(output.success);
    assert!(output.stderr.is_empty(), "stderr: {}", output.stderr);
    assert!(project.exists("out/package.xml"));
    Ok(())
}
