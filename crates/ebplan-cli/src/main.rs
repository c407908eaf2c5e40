// Copyright (c) Contributors to the ebplan project.
// SPDX-License-Identifier: Apache-2.0

//! ebplan - EasyBuild Stack Provisioning Planner CLI

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use miette::Result;

mod cmd_avail;
mod cmd_check;
mod cmd_resolve;
mod cmd_script;
mod cmd_search;

use cmd_avail::CmdAvail;
use cmd_check::CmdCheck;
use cmd_resolve::CmdResolve;
use cmd_script::CmdScript;
use cmd_search::CmdSearch;

#[derive(Parser)]
#[clap(
    name = "ebplan",
    about = "EasyBuild stack provisioning planner",
    version,
    long_about = "Plan an HPC software stack: find and select EasyBuild recipes, \
                  account for build dependencies, generate the Slurm install script, \
                  and triage the resulting build logs"
)]
struct Opt {
    #[clap(flatten)]
    logging: Logging,

    #[clap(subcommand)]
    cmd: Command,
}

#[derive(Parser)]
struct Logging {
    /// Increase verbosity (-v, -vv, -vvv)
    #[clap(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[clap(short, long)]
    quiet: bool,
}

/// Where the desired package names come from.
#[derive(Parser, Clone, Debug, Default)]
pub struct NameSource {
    /// Plan manifest with the desired package list
    #[clap(short = 'm', long, env = "EBPLAN_MANIFEST")]
    pub manifest: Option<PathBuf>,

    /// Package name to search for (repeatable, overrides the manifest list)
    #[clap(short = 'p', long = "package")]
    pub packages: Vec<String>,

    /// Search for every module reported by the module system instead
    #[clap(long)]
    pub from_avail: bool,
}

impl NameSource {
    /// Resolve the desired names and the manifest they came with, if any.
    ///
    /// An explicit `--manifest` must load; the well-known manifest file is
    /// picked up only when present. Names come from `--from-avail`, then
    /// `--package` flags, then the manifest package list.
    pub fn desired_names(
        &self,
        runner: &dyn ebplan::CommandRunner,
    ) -> Result<(Vec<String>, Option<ebplan::PlanManifest>)> {
        let manifest = match &self.manifest {
            Some(path) => Some(ebplan::PlanManifest::load(path)?),
            None if Path::new(ebplan::DEFAULT_MANIFEST_FILENAME).is_file() => {
                Some(ebplan::PlanManifest::load(ebplan::DEFAULT_MANIFEST_FILENAME)?)
            }
            None => None,
        };

        let names = if self.from_avail {
            // Catalog order is not meaningful; sort for a reproducible
            // results file.
            let mut names: Vec<String> =
                ebplan::list_all_modules(runner).into_iter().collect();
            names.sort();
            names
        } else if !self.packages.is_empty() {
            self.packages.clone()
        } else {
            manifest
                .as_ref()
                .map(|m| m.packages.clone())
                .unwrap_or_default()
        };

        Ok((names, manifest))
    }
}

#[derive(Subcommand)]
enum Command {
    /// List modules already available in the environment
    Avail(CmdAvail),

    /// Search recipes and record the selected identifiers
    Search(CmdSearch),

    /// Search recipes and write a full dependency accounting report
    Resolve(CmdResolve),

    /// Generate the Slurm install script from a results file
    Script(CmdScript),

    /// Classify build logs as valid or failed
    Check(CmdCheck),
}

impl Opt {
    fn run(self) -> Result<i32> {
        // Setup logging
        let log_level = match (self.logging.quiet, self.logging.verbose) {
            (true, _) => tracing::Level::ERROR,
            (false, 0) => tracing::Level::WARN,
            (false, 1) => tracing::Level::INFO,
            (false, 2) => tracing::Level::DEBUG,
            (false, _) => tracing::Level::TRACE,
        };

        tracing_subscriber::fmt().with_max_level(log_level).init();

        // Dispatch to command
        match self.cmd {
            Command::Avail(mut cmd) => cmd.run(),
            Command::Search(mut cmd) => cmd.run(),
            Command::Resolve(mut cmd) => cmd.run(),
            Command::Script(mut cmd) => cmd.run(),
            Command::Check(mut cmd) => cmd.run(),
        }
    }
}

fn main() -> Result<()> {
    let opt = Opt::parse();
    let code = opt.run()?;
    std::process::exit(code);
}
