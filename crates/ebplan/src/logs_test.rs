// Copyright (c) Contributors to the ebplan project.
// SPDX-License-Identifier: Apache-2.0

use rstest::rstest;
use tempfile::TempDir;

use super::*;

fn write_log(dir: &TempDir, name: &str, contents: &str) {
    std::fs::write(dir.path().join(name), contents).expect("Failed to write log file");
}

#[rstest]
#[case("GROMACS-2023a-12345.out", "GROMACS-2023a")]
#[case("OpenFOAM-v2306-foss-2023a-7.out", "OpenFOAM-v2306-foss-2023a")]
#[case("simple.out", "simple")]
fn test_module_name_derivation(#[case] file_name: &str, #[case] expected: &str) {
    assert_eq!(module_name_from_log(file_name), expected);
}

#[rstest]
fn test_sanity_check_signature() {
    let classification =
        classify_log("GROMACS", "== building\nSanity check failed: library missing\n== done\n");
    assert_eq!(classification.status, InstallStatus::Failed);
    assert_eq!(classification.reasons, vec!["Sanity check failure"]);
}

#[rstest]
fn test_clean_log_is_valid() {
    let classification = classify_log("GSL", "== building\n== sanity checking\n== COMPLETED\n");
    assert_eq!(classification.status, InstallStatus::Valid);
    assert!(classification.reasons.is_empty());
}

#[rstest]
fn test_unrecognized_error_gets_generic_label() {
    let classification = classify_log("Julia", "unpacking sources\nError: disk full\n");
    assert_eq!(classification.status, InstallStatus::Failed);
    assert_eq!(classification.reasons, vec!["Other installation error"]);
}

#[rstest]
fn test_all_matches_collected_in_first_seen_order() {
    let log = "Checksum verification failed for source tarball\n\
               some error in the configure step\n\
               Sanity check failed: binary missing\n\
               Checksum verification failed again\n";
    let classification = classify_log("PyTorch", log);
    assert_eq!(classification.status, InstallStatus::Failed);
    assert_eq!(
        classification.reasons,
        vec![
            "Checksum failure",
            "Other installation error",
            "Sanity check failure"
        ]
    );
}

#[rstest]
fn test_generic_check_is_case_insensitive() {
    let classification = classify_log("Spark", "FATAL ERROR in step 3\n");
    assert_eq!(classification.status, InstallStatus::Failed);
    assert_eq!(classification.reasons, vec!["Other installation error"]);
}

#[rstest]
fn test_directory_scan_sorts_by_module_name() {
    let tmp = TempDir::new().unwrap();
    write_log(&tmp, "zlib-1.2-42.out", "== COMPLETED\n");
    write_log(&tmp, "ABAQUS-2023-41.out", "Sanity check failed: solver missing\n");
    write_log(&tmp, "notes.txt", "error everywhere, but not a log\n");

    let results = check_installation_logs(tmp.path()).expect("directory should scan");

    assert_eq!(results.len(), 2);
    assert_eq!(results[0].module, "ABAQUS-2023");
    assert_eq!(results[0].status, InstallStatus::Failed);
    assert_eq!(results[1].module, "zlib-1.2");
    assert_eq!(results[1].status, InstallStatus::Valid);
}

#[rstest]
fn test_directory_scan_is_idempotent() {
    let tmp = TempDir::new().unwrap();
    write_log(&tmp, "GROMACS-2023a-1.out", "make check FAILED\n");
    write_log(&tmp, "GSL-2.7-2.out", "== COMPLETED\n");

    let first = check_installation_logs(tmp.path()).expect("first scan");
    let second = check_installation_logs(tmp.path()).expect("second scan");

    assert_eq!(first, second);
}

#[rstest]
fn test_missing_directory_is_an_error() {
    let tmp = TempDir::new().unwrap();
    let missing = tmp.path().join("no-such-dir");
    assert!(check_installation_logs(&missing).is_err());
}
