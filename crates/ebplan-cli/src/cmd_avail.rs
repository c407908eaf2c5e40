// Copyright (c) Contributors to the ebplan project.
// SPDX-License-Identifier: Apache-2.0

//! Implementation of the `ebplan avail` command.

use clap::Args;
use miette::Result;

/// List modules already available in the environment
#[derive(Debug, Args)]
pub struct CmdAvail {
    /// Print only the module count
    #[clap(long)]
    count: bool,
}

impl CmdAvail {
    pub fn run(&mut self) -> Result<i32> {
        let runner = ebplan::ShellRunner;
        let modules = ebplan::list_all_modules(&runner);

        if modules.is_empty() {
            println!("No modules found.");
            return Ok(0);
        }

        if !self.count {
            let mut names: Vec<&String> = modules.iter().collect();
            names.sort();
            for name in names {
                println!("{name}");
            }
        }

        println!("Total modules found: {}", modules.len());
        Ok(0)
    }
}
