// Copyright (c) Contributors to the ebplan project.
// SPDX-License-Identifier: Apache-2.0

//! Build dependency resolution via the EasyBuild dry-run mode.

use std::io::Write;

use crate::tool::CommandRunner;

#[cfg(test)]
#[path = "./deps_test.rs"]
mod deps_test;

/// One line of dry-run output, as far as dependency extraction cares.
#[derive(Debug, PartialEq, Eq)]
pub(crate) enum DepLine<'a> {
    /// A bullet line carrying a parenthesized dependency identifier.
    Dependency(&'a str),
    /// Not a bullet line; dry-run output contains plenty of other text.
    Skipped,
    /// A bullet line missing the `(...)` identifier.
    Malformed,
}

/// Classify one dry-run output line.
///
/// A line declares a dependency iff its trimmed form starts with `*`;
/// the identifier is the text between the first `(` and the first `)`
/// after it.
pub(crate) fn parse_dependency_line(line: &str) -> DepLine<'_> {
    if !line.trim_start().starts_with('*') {
        return DepLine::Skipped;
    }

    let Some(open) = line.find('(') else {
        return DepLine::Malformed;
    };
    let rest = &line[open + 1..];
    let Some(close) = rest.find(')') else {
        return DepLine::Malformed;
    };

    DepLine::Dependency(&rest[..close])
}

/// Command invoking the EasyBuild dry run for one recipe.
pub(crate) fn build_dry_run_command(recipe_id: &str) -> String {
    format!("eb '{recipe_id}' -D")
}

/// List what EasyBuild would build for `recipe_id`.
///
/// Returns dependency identifiers in first-seen order; deduplication
/// across recipes is the caller's concern. A dry run that reports
/// anything on stderr contributes no dependencies but does not abort
/// the overall run. A bullet line without its parenthesized identifier
/// is a hard fault and propagates.
pub fn list_dependencies(
    runner: &dyn CommandRunner,
    recipe_id: &str,
    report_sink: &mut dyn Write,
) -> crate::Result<Vec<String>> {
    tracing::info!("listing dependencies for {recipe_id}");

    let output = runner.run_shell(&build_dry_run_command(recipe_id))?;

    if !output.stderr.is_empty() {
        tracing::warn!("dependency listing for {recipe_id} reported errors");
        writeln!(report_sink, "Errors in dependencies listing:")?;
        report_sink.write_all(output.stderr.as_bytes())?;
        return Ok(Vec::new());
    }

    let mut dependencies = Vec::new();
    for line in output.stdout.lines() {
        match parse_dependency_line(line) {
            DepLine::Dependency(id) => dependencies.push(id.to_string()),
            DepLine::Skipped => {}
            DepLine::Malformed => {
                return Err(crate::Error::MalformedDependency {
                    recipe: recipe_id.to_string(),
                    line: line.to_string(),
                });
            }
        }
    }

    writeln!(report_sink, "Dependency details for {recipe_id}:")?;
    writeln!(report_sink, "{}", dependencies.join("\n"))?;

    Ok(dependencies)
}
