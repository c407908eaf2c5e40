// Copyright (c) Contributors to the ebplan project.
// SPDX-License-Identifier: Apache-2.0

use rstest::rstest;
use tempfile::TempDir;

use super::*;

#[rstest]
fn test_parse_minimal_manifest() {
    let yaml = r#"
api: ebplan/v0
"#;
    let manifest = PlanManifest::from_yaml(yaml).expect("Should parse minimal manifest");
    assert_eq!(manifest.api, ApiVersion::V0);
    assert!(manifest.packages.is_empty());
    assert!(manifest.toolchain.is_none());
    assert_eq!(manifest.release, "2023a");
    assert_eq!(manifest.job, JobOptions::default());
}

#[rstest]
fn test_parse_full_manifest() {
    let yaml = r#"
api: ebplan/v0
description: "Cluster 2023a software stack"
toolchain: intel
release: "2023b"
packages:
  - GROMACS
  - OpenFOAM
job:
  cores: 16
  walltime_hours: 10
"#;
    let manifest = PlanManifest::from_yaml(yaml).expect("Should parse full manifest");
    assert_eq!(manifest.description.as_deref(), Some("Cluster 2023a software stack"));
    assert_eq!(manifest.toolchain, Some(Toolchain::Intel));
    assert_eq!(manifest.release, "2023b");
    assert_eq!(manifest.packages, vec!["GROMACS", "OpenFOAM"]);
    assert_eq!(manifest.job.cores, 16);
    assert_eq!(manifest.job.walltime_hours, 10);
    assert_eq!(manifest.search_filter().as_deref(), Some("intel-2023b"));
}

#[rstest]
fn test_parse_invalid_yaml() {
    let yaml = r#"
api: ebplan/v0
packages: [
  unclosed bracket
"#;
    assert!(PlanManifest::from_yaml(yaml).is_err());
}

#[rstest]
fn test_load_records_source_path() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("ebplan.yaml");
    std::fs::write(&path, "api: ebplan/v0\npackages:\n  - GSL\n").unwrap();

    let manifest = PlanManifest::load(&path).expect("Should load manifest");
    assert_eq!(manifest.packages, vec!["GSL"]);
    assert_eq!(manifest.source_path.as_deref(), Some(path.as_path()));
}

#[rstest]
#[case("foss", Toolchain::Foss)]
#[case("intel", Toolchain::Intel)]
fn test_toolchain_from_str(#[case] input: &str, #[case] expected: Toolchain) {
    assert_eq!(input.parse::<Toolchain>().unwrap(), expected);
}

#[rstest]
fn test_unknown_toolchain_is_rejected() {
    let result = "gcc".parse::<Toolchain>();
    assert!(matches!(result, Err(crate::Error::UnknownToolchain(_))));
}

#[rstest]
fn test_search_filter_format() {
    assert_eq!(search_filter(Toolchain::Foss, "2023a"), "foss-2023a");
}
