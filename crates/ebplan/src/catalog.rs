// Copyright (c) Contributors to the ebplan project.
// SPDX-License-Identifier: Apache-2.0

//! Module catalog reader: what is already installed on the cluster.

use std::collections::HashSet;

use crate::tool::CommandRunner;

#[cfg(test)]
#[path = "./catalog_test.rs"]
mod catalog_test;

/// Listing verb understood by the environment module system.
const MODULE_AVAIL_COMMAND: &str = "module avail";

/// List the names of all modules available in the environment.
///
/// The listing command writes a human-oriented report, split between
/// stdout and stderr depending on the module system flavor, so both
/// streams are parsed together. Any failure here is non-fatal: the
/// caller receives an empty set and proceeds with degraded input.
pub fn list_all_modules(runner: &dyn CommandRunner) -> HashSet<String> {
    tracing::info!("listing available modules");

    let output = match runner.run_shell(MODULE_AVAIL_COMMAND) {
        Ok(output) => output,
        Err(error) => {
            tracing::warn!(%error, "module listing failed, continuing with none");
            return HashSet::new();
        }
    };

    let modules = parse_module_listing(&output.combined());
    tracing::info!("total modules found: {}", modules.len());
    modules
}

/// Extract module names from a `module avail` style listing.
///
/// A line counts as a module entry when it is non-empty after trimming
/// and contains a path separator. Entries render as `family/name/version`,
/// so the name is the second `/`-delimited segment. Everything else in
/// the listing (headers, rules, column padding) is silently ignored.
pub fn parse_module_listing(output: &str) -> HashSet<String> {
    let mut modules = HashSet::new();

    for line in output.lines() {
        if line.trim().is_empty() || !line.contains('/') {
            continue;
        }

        let mut parts = line.split('/');
        let _family = parts.next();
        if let Some(name) = parts.next() {
            modules.insert(name.to_string());
        }
    }

    modules
}
