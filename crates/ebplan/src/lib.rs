// Copyright (c) Contributors to the ebplan project.
// SPDX-License-Identifier: Apache-2.0

//! ebplan - EasyBuild Stack Provisioning Planner
//!
//! This crate provides the core library for planning an HPC software stack
//! installation with EasyBuild: recipe discovery and selection, build
//! dependency accounting, batch script generation, and build log triage.
//!
//! # Overview
//!
//! A provisioning run walks a list of desired package names, searches the
//! EasyBuild recipe index for each (`eb --search`), narrows multiple hits
//! through an operator prompt, and records the selected recipe identifiers
//! one per line in a results file. That file is the sole handoff to the
//! batch script generator, which emits a Slurm script driving the real
//! builds. After the builds ran, the log classifier scans the scheduler
//! output files and reports which installations succeeded or failed and why.
//!
//! # Example
//!
//! ```yaml
//! # ebplan.yaml
//! api: ebplan/v0
//! description: "Cluster 2023a software stack"
//!
//! toolchain: foss
//! release: "2023a"
//!
//! packages:
//!   - GROMACS
//!   - OpenFOAM
//!   - ParaView
//!
//! job:
//!   cores: 8
//!   walltime_hours: 5
//! ```

pub mod catalog;
pub mod deps;
pub mod error;
pub mod logs;
pub mod manifest;
pub mod paths;
pub mod prompt;
pub mod script;
pub mod search;
pub mod tool;

pub use catalog::list_all_modules;
pub use deps::list_dependencies;
pub use error::{Error, Result};
pub use logs::{check_installation_logs, InstallStatus, LogClassification};
pub use manifest::{search_filter, ApiVersion, JobOptions, PlanManifest, Toolchain};
pub use prompt::{ConsolePrompt, Prompt, Selection};
pub use script::{generate_job_script, read_recipe_paths, ScriptOptions};
pub use search::{select_only, select_with_dependency_report};
pub use tool::{CommandRunner, ShellRunner, ToolOutput};

/// Well-known filename for plan manifests.
pub const DEFAULT_MANIFEST_FILENAME: &str = "ebplan.yaml";

/// Toolchain release searched for when the manifest does not name one.
pub const DEFAULT_RELEASE: &str = "2023a";

/// Default results file for a toolchain, one recipe identifier per line.
pub fn results_filename(toolchain: Toolchain) -> String {
    format!("module_search_results_{toolchain}.txt")
}

/// Default dependency report file for a toolchain.
pub fn report_filename(toolchain: Toolchain) -> String {
    format!("module_dependency_report_{toolchain}.txt")
}

/// Default generated Slurm script name for a toolchain.
pub fn script_filename(toolchain: Toolchain) -> String {
    format!("install_modules_{toolchain}.sh")
}
