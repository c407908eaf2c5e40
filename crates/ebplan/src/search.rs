// Copyright (c) Contributors to the ebplan project.
// SPDX-License-Identifier: Apache-2.0

//! Recipe search and selection: the heart of the provisioning pipeline.
//!
//! For each desired package name the EasyBuild index is searched, the
//! matches are narrowed to one recipe (deterministically when unique,
//! interactively otherwise), and the selected identifier is appended to
//! the results sink immediately. The two public entry points share one
//! loop and differ only in how much accounting they write.

use std::collections::HashSet;
use std::io::Write;

use crate::deps::list_dependencies;
use crate::prompt::{Prompt, Selection};
use crate::tool::CommandRunner;

#[cfg(test)]
#[path = "./search_test.rs"]
mod search_test;

/// Section separator used in the accounting report.
const SECTION_RULE: &str = "----------------------------------------";

/// Command searching the recipe index for one package name.
pub(crate) fn build_search_command(name: &str, filter: Option<&str>) -> String {
    let mut command = format!("eb --search '{name}.*'");
    if let Some(filter) = filter {
        // Filtering happens in the pipe; a line survives iff it
        // contains the literal substring.
        command.push_str(&format!(" | grep '{filter}'"));
    }
    command
}

/// How much detail the selection loop writes to its sink.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Accounting {
    /// Selected recipe identifiers only, one per line.
    Off,
    /// Identifiers interleaved with search, error, and dependency sections.
    On,
}

/// Select one recipe per desired name and write identifiers to `results_sink`.
///
/// The sink receives exactly one line per name that matched; names with
/// no match or a declined prompt produce no line and do not stop the run.
pub fn select_only(
    runner: &dyn CommandRunner,
    prompt: &mut dyn Prompt,
    desired_names: &[String],
    filter: Option<&str>,
    results_sink: &mut dyn Write,
) -> crate::Result<()> {
    run_selection(runner, prompt, desired_names, filter, results_sink, Accounting::Off)
        .map(|_| ())
}

/// Select recipes as [`select_only`] does, but also write a labeled
/// accounting report to the sink and resolve each selection's build
/// dependencies, returning the deduplicated union across all names.
pub fn select_with_dependency_report(
    runner: &dyn CommandRunner,
    prompt: &mut dyn Prompt,
    desired_names: &[String],
    filter: Option<&str>,
    report_sink: &mut dyn Write,
) -> crate::Result<HashSet<String>> {
    run_selection(runner, prompt, desired_names, filter, report_sink, Accounting::On)
}

fn run_selection(
    runner: &dyn CommandRunner,
    prompt: &mut dyn Prompt,
    desired_names: &[String],
    filter: Option<&str>,
    sink: &mut dyn Write,
    accounting: Accounting,
) -> crate::Result<HashSet<String>> {
    let mut all_dependencies = HashSet::new();

    for name in desired_names {
        tracing::info!("searching for {name}");

        let output = runner.run_shell(&build_search_command(name, filter))?;

        if accounting == Accounting::On {
            writeln!(sink, "Search results for {name}:")?;
            sink.write_all(output.stdout.as_bytes())?;
        }

        // A trailing newline in the tool output is an artifact, not an
        // empty candidate.
        let mut candidates: Vec<String> = output.stdout.split('\n').map(String::from).collect();
        if candidates.last().is_some_and(|line| line.is_empty()) {
            candidates.pop();
        }

        if candidates.is_empty() {
            tracing::info!("no versions of {name} found");
            if accounting == Accounting::On {
                writeln!(sink, "No versions found.")?;
                writeln!(sink, "\n{SECTION_RULE}")?;
            }
            continue;
        }

        let selected = if candidates.len() == 1 {
            candidates[0].clone()
        } else {
            tracing::info!("found {} versions of {name}", candidates.len());
            match prompt.choose(&candidates, Some(name.as_str()))? {
                Selection::Chosen(line) => line,
                Selection::Declined => {
                    tracing::info!("no module selected for {name}");
                    continue;
                }
            }
        };

        // Candidate lines render as `<description> <path>`; the token
        // after the last space is the canonical recipe identifier.
        let recipe = selected.rsplit(' ').next().unwrap_or(selected.as_str());
        writeln!(sink, "{recipe}")?;
        tracing::info!("selected module: {recipe}");

        if !output.stderr.is_empty() {
            tracing::warn!("search for {name} reported errors");
            if accounting == Accounting::On {
                writeln!(sink, "Errors:")?;
                sink.write_all(output.stderr.as_bytes())?;
            }
        }

        if accounting == Accounting::On {
            let dependencies = list_dependencies(runner, recipe, sink)?;
            all_dependencies.extend(dependencies);
        }
    }

    if accounting == Accounting::On {
        tracing::info!("total unique dependencies found: {}", all_dependencies.len());
    }

    Ok(all_dependencies)
}
