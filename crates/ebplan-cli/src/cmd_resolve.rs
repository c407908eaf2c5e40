// Copyright (c) Contributors to the ebplan project.
// SPDX-License-Identifier: Apache-2.0

//! Implementation of the `ebplan resolve` command.

use std::fs::File;
use std::path::PathBuf;

use clap::Args;
use ebplan::Toolchain;
use miette::Result;

/// Search recipes and write a full dependency accounting report
#[derive(Debug, Args)]
pub struct CmdResolve {
    /// Toolchain to filter candidates by (foss or intel)
    toolchain: String,

    #[clap(flatten)]
    names: crate::NameSource,

    /// Toolchain release used in the search filter
    #[clap(long)]
    release: Option<String>,

    /// Literal substring filter, replacing the toolchain-release one
    #[clap(long)]
    filter: Option<String>,

    /// Report file path
    #[clap(short = 'o', long)]
    output: Option<PathBuf>,
}

impl CmdResolve {
    pub fn run(&mut self) -> Result<i32> {
        let toolchain: Toolchain = self.toolchain.parse()?;
        let runner = ebplan::ShellRunner;

        let (names, manifest) = self.names.desired_names(&runner)?;
        if names.is_empty() {
            println!("No packages requested; nothing to resolve.");
            return Ok(0);
        }

        let release = self
            .release
            .clone()
            .or_else(|| manifest.map(|m| m.release))
            .unwrap_or_else(|| ebplan::DEFAULT_RELEASE.to_string());
        let filter = self
            .filter
            .clone()
            .unwrap_or_else(|| ebplan::search_filter(toolchain, &release));

        let output = self
            .output
            .clone()
            .unwrap_or_else(|| ebplan::report_filename(toolchain).into());
        let mut sink = File::create(&output)
            .map_err(|e| miette::miette!("Failed to create {}: {e}", output.display()))?;

        let mut prompt = ebplan::ConsolePrompt;
        let dependencies = ebplan::select_with_dependency_report(
            &runner,
            &mut prompt,
            &names,
            Some(&filter),
            &mut sink,
        )?;

        println!("Total unique dependencies found: {}", dependencies.len());
        println!("Report saved in {}.", output.display());
        Ok(0)
    }
}
