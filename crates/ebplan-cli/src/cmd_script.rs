// Copyright (c) Contributors to the ebplan project.
// SPDX-License-Identifier: Apache-2.0

//! Implementation of the `ebplan script` command.

use std::path::PathBuf;

use clap::Args;
use ebplan::{ScriptOptions, Toolchain};
use miette::Result;

/// Generate the Slurm install script from a results file
#[derive(Debug, Args)]
pub struct CmdScript {
    /// Toolchain the results file was produced for (foss or intel)
    toolchain: String,

    /// Results file to read (defaults to the toolchain's results file)
    #[clap(short = 'i', long)]
    input: Option<PathBuf>,

    /// Script file to write (defaults to the toolchain's script name)
    #[clap(short = 'o', long)]
    output: Option<PathBuf>,

    /// Plan manifest providing job sizing defaults
    #[clap(short = 'm', long, env = "EBPLAN_MANIFEST")]
    manifest: Option<PathBuf>,

    /// CPU cores per build job
    #[clap(long)]
    cores: Option<u32>,

    /// Maximum wall time per build job, in hours
    #[clap(long)]
    walltime: Option<u32>,

    /// Generate an EasyBuild dry run instead of submitting build jobs
    #[clap(long)]
    dry_run: bool,
}

impl CmdScript {
    pub fn run(&mut self) -> Result<i32> {
        let toolchain: Toolchain = self.toolchain.parse()?;

        let input = self
            .input
            .clone()
            .unwrap_or_else(|| ebplan::results_filename(toolchain).into());
        let recipes = ebplan::read_recipe_paths(&input)?;

        if recipes.is_empty() {
            println!("No recipes found in {}; nothing to install.", input.display());
            return Ok(0);
        }

        let job = match &self.manifest {
            Some(path) => ebplan::PlanManifest::load(path)?.job,
            None => ebplan::JobOptions::default(),
        };
        let options = ScriptOptions {
            job_cores: self.cores.unwrap_or(job.cores),
            max_walltime_hours: self.walltime.unwrap_or(job.walltime_hours),
            dry_run: self.dry_run,
        };

        let script = ebplan::generate_job_script(&recipes, &options);

        let output = self
            .output
            .clone()
            .unwrap_or_else(|| ebplan::script_filename(toolchain).into());
        std::fs::write(&output, script)
            .map_err(|e| miette::miette!("Failed to write {}: {e}", output.display()))?;

        println!("Slurm script generated: {}", output.display());
        Ok(0)
    }
}
