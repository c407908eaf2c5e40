// Copyright (c) Contributors to the ebplan project.
// SPDX-License-Identifier: Apache-2.0

//! Slurm install script generation from a results file.
//!
//! This stage is deliberately dumb: it consumes the newline-separated
//! recipe identifiers produced by the search pipeline plus a few scalar
//! options and emits a shell script. The actual build submission and
//! monitoring belong to the scheduler and EasyBuild.

use std::path::Path;

#[cfg(test)]
#[path = "./script_test.rs"]
mod script_test;

/// Module providing the EasyBuild tool itself on the cluster.
const EASYBUILD_MODULE: &str = "tools/EasyBuild/4.9.1";

/// Scalar knobs for the generated script.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptOptions {
    /// CPU cores per build job.
    pub job_cores: u32,
    /// Maximum wall time per build job, in hours.
    pub max_walltime_hours: u32,
    /// Emit a dry run (`-D`) instead of submitting build jobs.
    pub dry_run: bool,
}

impl Default for ScriptOptions {
    fn default() -> Self {
        Self {
            job_cores: 8,
            max_walltime_hours: 5,
            dry_run: false,
        }
    }
}

/// Read recipe identifiers from a results file, one per non-blank line.
pub fn read_recipe_paths(path: &Path) -> crate::Result<Vec<String>> {
    let contents = std::fs::read_to_string(path).map_err(|error| crate::Error::ReadFailed {
        path: path.to_path_buf(),
        error,
    })?;

    Ok(contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect())
}

/// Render the Slurm script driving the builds for `recipes`.
pub fn generate_job_script(recipes: &[String], options: &ScriptOptions) -> String {
    let timestamp = chrono::Local::now().format("%Y-%m-%d %H:%M:%S");

    let quoted: Vec<String> = recipes.iter().map(|recipe| format!("\"{recipe}\"")).collect();

    let eb_invocation = if options.dry_run {
        "eb ${EBFILES[@]} --robot -D".to_string()
    } else {
        "eb ${EBFILES[@]} --robot --job".to_string()
    };

    let mut script = String::new();
    script.push_str("#!/bin/bash -l\n");
    script.push_str("#SBATCH --job-name=install-eb-modules\n");
    script.push_str("#SBATCH --output=out/install-eb-modules-%j.out\n");
    script.push_str("#SBATCH --time=20:00:00\n");
    script.push_str("#SBATCH --partition=batch\n");
    script.push_str("#SBATCH --nodes=1\n");
    script.push_str("#SBATCH --mem=0\n");
    script.push('\n');
    script.push_str(&format!("# Generated by ebplan on {timestamp}\n"));
    script.push('\n');
    script.push_str("module purge\n");
    script.push_str("export EASYBUILD_JOB_BACKEND=Slurm\n");
    script.push('\n');
    script.push_str("print_error_and_exit() { echo \"***ERROR*** $*\"; exit 1; }\n");
    script.push('\n');
    script.push_str("# Load the EasyBuild module\n");
    script.push_str(&format!("module load {EASYBUILD_MODULE}\n"));
    script.push('\n');
    script.push_str(&format!("EBFILES=({})\n", quoted.join(" ")));
    script.push_str("mkdir -p logs\n");
    script.push('\n');
    script.push_str(&format!(
        "COMMAND='{eb_invocation} --job-cores={cores} --job-max-walltime={walltime} \
         --job-backend-config=slurm --trace --accept-eula-for=CUDA \
         --accept-eula-for=Intel-oneAPI > logs/eb-log-{{#}}.log'\n",
        cores = options.job_cores,
        walltime = options.max_walltime_hours,
    ));
    script.push_str("echo \"Running command: $COMMAND\"\n");
    script.push('\n');
    script.push_str("eval $COMMAND\n");
    script.push('\n');
    script.push_str("echo 'All build jobs are submitted; use sq to monitor them'\n");

    script
}
