// Copyright (c) Contributors to the ebplan project.
// SPDX-License-Identifier: Apache-2.0

use rstest::rstest;

use super::*;
use crate::tool::ToolOutput;

struct FixedRunner {
    output: ToolOutput,
}

impl CommandRunner for FixedRunner {
    fn run_shell(&self, _command: &str) -> crate::Result<ToolOutput> {
        Ok(self.output.clone())
    }
}

fn stdout_runner(stdout: &str) -> FixedRunner {
    FixedRunner {
        output: ToolOutput {
            stdout: stdout.to_string(),
            stderr: String::new(),
        },
    }
}

#[rstest]
#[case("  * deps (OpenMPI-4.1.5)", "OpenMPI-4.1.5")]
#[case("* toolchain (foss-2023a)", "foss-2023a")]
fn test_bullet_line_yields_identifier(#[case] line: &str, #[case] expected: &str) {
    assert_eq!(parse_dependency_line(line), DepLine::Dependency(expected));
}

#[rstest]
#[case("== resolving dependencies ...")]
#[case("")]
fn test_non_bullet_lines_are_skipped(#[case] line: &str) {
    assert_eq!(parse_dependency_line(line), DepLine::Skipped);
}

#[rstest]
#[case("* no identifier here")]
#[case("* close) before (open")]
fn test_bullet_without_delimiters_is_malformed(#[case] line: &str) {
    assert_eq!(parse_dependency_line(line), DepLine::Malformed);
}

#[rstest]
fn test_dependencies_in_first_seen_order() {
    let runner = stdout_runner(
        "== dry run\n * deps (OpenMPI-4.1.5)\n * deps (GCC-12.3.0)\nplain line\n",
    );
    let mut sink = Vec::new();

    let dependencies = list_dependencies(&runner, "GROMACS-2023.1-foss-2023a.eb", &mut sink)
        .expect("dry run should parse");

    assert_eq!(dependencies, vec!["OpenMPI-4.1.5", "GCC-12.3.0"]);

    let report = String::from_utf8(sink).unwrap();
    assert!(report.contains("Dependency details for GROMACS-2023.1-foss-2023a.eb:"));
    assert!(report.contains("OpenMPI-4.1.5\nGCC-12.3.0"));
}

#[rstest]
fn test_stderr_abandons_recipe_without_failing() {
    let runner = FixedRunner {
        output: ToolOutput {
            stdout: " * deps (OpenMPI-4.1.5)\n".to_string(),
            stderr: "ERROR: no easyconfig found\n".to_string(),
        },
    };
    let mut sink = Vec::new();

    let dependencies =
        list_dependencies(&runner, "missing.eb", &mut sink).expect("stderr is non-fatal");

    assert!(dependencies.is_empty());
    let report = String::from_utf8(sink).unwrap();
    assert!(report.contains("Errors in dependencies listing:"));
    assert!(report.contains("no easyconfig found"));
}

#[rstest]
fn test_malformed_bullet_line_is_a_hard_fault() {
    let runner = stdout_runner(" * deps (OpenMPI-4.1.5)\n * broken bullet line\n");
    let mut sink = Vec::new();

    let result = list_dependencies(&runner, "broken.eb", &mut sink);
    assert!(matches!(
        result,
        Err(crate::Error::MalformedDependency { .. })
    ));
}
