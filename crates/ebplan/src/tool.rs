// Copyright (c) Contributors to the ebplan project.
// SPDX-License-Identifier: Apache-2.0

//! Seam for invoking external tools (EasyBuild, the module system).
//!
//! Every pipeline stage that shells out goes through [`CommandRunner`] so
//! the decision logic can be exercised with canned tool output in tests.

use std::process::Command;

/// Captured output of one external tool invocation.
///
/// Both streams are fully buffered and decoded after the process exits;
/// nothing in this crate consumes tool output incrementally.
#[derive(Debug, Clone, Default)]
pub struct ToolOutput {
    pub stdout: String,
    pub stderr: String,
}

impl ToolOutput {
    /// Both streams as one blob, stdout first.
    ///
    /// The module listing command emits parts of its output on stderr, so
    /// the catalog reader consumes the combined form.
    pub fn combined(&self) -> String {
        format!("{}{}", self.stdout, self.stderr)
    }
}

/// Blocking invocation of an external command line.
pub trait CommandRunner {
    /// Run `command` through a shell and capture both output streams.
    ///
    /// The shell indirection is load-bearing: search filtering is applied
    /// by piping through grep, and `module` is typically a shell function.
    fn run_shell(&self, command: &str) -> crate::Result<ToolOutput>;
}

/// [`CommandRunner`] backed by `sh -c`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ShellRunner;

impl CommandRunner for ShellRunner {
    fn run_shell(&self, command: &str) -> crate::Result<ToolOutput> {
        tracing::debug!(%command, "running external command");

        let output = Command::new("sh")
            .arg("-c")
            .arg(command)
            .output()
            .map_err(|error| crate::Error::CommandFailed {
                command: command.to_string(),
                error,
            })?;

        Ok(ToolOutput {
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}
