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

struct FailingRunner;

impl CommandRunner for FailingRunner {
    fn run_shell(&self, command: &str) -> crate::Result<ToolOutput> {
        Err(crate::Error::CommandFailed {
            command: command.to_string(),
            error: std::io::Error::new(std::io::ErrorKind::NotFound, "no module command"),
        })
    }
}

#[rstest]
fn test_module_name_is_second_segment() {
    let modules = parse_module_listing("foo/bar/2.0\n");
    assert!(modules.contains("bar"));
    assert_eq!(modules.len(), 1);
}

#[rstest]
fn test_lines_without_separator_are_ignored() {
    let listing = "---- Core modules ----\nfoo/bar/2.0\n\n   \nplain words\n";
    let modules = parse_module_listing(listing);
    assert_eq!(modules.len(), 1);
    assert!(modules.contains("bar"));
}

#[rstest]
fn test_duplicate_names_collapse() {
    let listing = "tools/GROMACS/2023.1\ntools/GROMACS/2021.5\nmath/GSL/2.7\n";
    let modules = parse_module_listing(listing);
    assert_eq!(modules.len(), 2);
    assert!(modules.contains("GROMACS"));
    assert!(modules.contains("GSL"));
}

#[rstest]
fn test_listing_combines_stdout_and_stderr() {
    let runner = FixedRunner {
        output: ToolOutput {
            stdout: "cat/alpha/1.0\n".to_string(),
            stderr: "cat/beta/2.0\n".to_string(),
        },
    };

    let modules = list_all_modules(&runner);
    assert!(modules.contains("alpha"));
    assert!(modules.contains("beta"));
}

#[rstest]
fn test_listing_failure_yields_empty_set() {
    let modules = list_all_modules(&FailingRunner);
    assert!(modules.is_empty());
}
