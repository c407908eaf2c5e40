// Copyright (c) Contributors to the ebplan project.
// SPDX-License-Identifier: Apache-2.0

//! Interactive disambiguation between multiple matching recipes.
//!
//! This is the only blocking, operator-facing point in the pipeline.
//! The prompt logic is generic over its input and output streams so a
//! scripted sequence of answers can drive it in tests.

use std::io::{BufRead, Write};

#[cfg(test)]
#[path = "./prompt_test.rs"]
mod prompt_test;

/// Outcome of a disambiguation prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    /// The operator picked one of the offered candidates.
    Chosen(String),
    /// The operator entered `0` (or input ended) to pick nothing.
    Declined,
}

/// Anything that can narrow a candidate list down to one entry.
pub trait Prompt {
    /// Present `candidates` and return the operator's choice.
    ///
    /// `path_filter` shortens the displayed lines only; a returned
    /// [`Selection::Chosen`] always holds the original candidate string.
    fn choose(&mut self, candidates: &[String], path_filter: Option<&str>)
        -> crate::Result<Selection>;
}

/// [`Prompt`] implementation reading from stdin and writing to stdout.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsolePrompt;

impl Prompt for ConsolePrompt {
    fn choose(
        &mut self,
        candidates: &[String],
        path_filter: Option<&str>,
    ) -> crate::Result<Selection> {
        let stdin = std::io::stdin();
        let stdout = std::io::stdout();
        ask_user_which_module(&mut stdin.lock(), &mut stdout.lock(), candidates, path_filter)
    }
}

/// Loop until the operator picks a valid 1-based index or declines with `0`.
///
/// Invalid input (non-numeric, out of range) re-prompts without limit.
/// End of input is treated as declining, so a closed stdin cannot spin
/// the loop forever.
pub fn ask_user_which_module<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    candidates: &[String],
    path_filter: Option<&str>,
) -> crate::Result<Selection> {
    loop {
        writeln!(output, "Please select a module:")?;

        for (i, candidate) in candidates.iter().enumerate() {
            writeln!(output, "{}. {}", i + 1, display_candidate(candidate, path_filter))?;
        }

        write!(output, "Enter the number of the module or 0 for none: ")?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            writeln!(output, "No input, exiting...")?;
            return Ok(Selection::Declined);
        }

        let choice: usize = match line.trim().parse() {
            Ok(choice) => choice,
            Err(_) => {
                writeln!(output, "Invalid choice. Please try again.")?;
                continue;
            }
        };

        if choice == 0 {
            writeln!(output, "Exiting...")?;
            return Ok(Selection::Declined);
        }

        if choice > candidates.len() {
            writeln!(output, "Invalid choice. Please try again.")?;
            continue;
        }

        return Ok(Selection::Chosen(candidates[choice - 1].clone()));
    }
}

/// Rewrite a candidate line to start at the first occurrence of the
/// filter, hiding long recipe-index path prefixes. Display only.
fn display_candidate<'a>(candidate: &'a str, path_filter: Option<&str>) -> &'a str {
    match path_filter {
        Some(filter) => match candidate.find(filter) {
            Some(pos) => &candidate[pos..],
            None => candidate,
        },
        None => candidate,
    }
}
