// Copyright (c) Contributors to the ebplan project.
// SPDX-License-Identifier: Apache-2.0

//! Implementation of the `ebplan check` command.

use clap::Args;
use colored::Colorize;
use ebplan::{InstallStatus, LogClassification};
use miette::Result;

/// Classify build logs as valid or failed
#[derive(Debug, Args)]
pub struct CmdCheck {
    /// Directory containing the scheduler .out log files
    #[clap(short = 'd', long = "dir", default_value = ".")]
    dir: String,
}

impl CmdCheck {
    pub fn run(&mut self) -> Result<i32> {
        let dir = ebplan::paths::resolve_user_path(&self.dir)?;
        let results = ebplan::check_installation_logs(&dir)?;

        if results.is_empty() {
            println!("No log files found in {}.", dir.display());
            return Ok(0);
        }

        report_results(&results);
        Ok(0)
    }
}

/// Render one block per classification, in the given (sorted) order.
fn report_results(results: &[LogClassification]) {
    for classification in results {
        match classification.status {
            InstallStatus::Valid => {
                println!(
                    "{}: {}",
                    classification.module,
                    classification.status.to_string().green()
                );
            }
            InstallStatus::Failed => {
                println!(
                    "{}: {}",
                    classification.module,
                    classification.status.to_string().red()
                );
                for reason in &classification.reasons {
                    println!("{}", format!("  Info: {reason}").red());
                }
            }
        }
        println!();
    }
}
