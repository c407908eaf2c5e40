// Copyright (c) Contributors to the ebplan project.
// SPDX-License-Identifier: Apache-2.0

//! Build log triage: classify scheduler output files as valid or failed.

use std::fmt;
use std::path::Path;

#[cfg(test)]
#[path = "./logs_test.rs"]
mod logs_test;

/// Known failure signatures, checked in table order against every line.
/// The first matching signature per line wins.
const FAILURE_SIGNATURES: &[(&str, &str)] = &[
    ("Checksum verification", "Checksum failure"),
    ("Sanity check failed:", "Sanity check failure"),
    ("make check", "Make check failure"),
    ("build failed", "Build Error"),
];

/// Label recorded when a line mentions an error no signature recognizes.
const GENERIC_FAILURE_LABEL: &str = "Other installation error";

/// Whether an installation ran to completion according to its log.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstallStatus {
    Valid,
    Failed,
}

impl fmt::Display for InstallStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InstallStatus::Valid => f.write_str("valid"),
            InstallStatus::Failed => f.write_str("failed"),
        }
    }
}

/// Verdict for one build log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogClassification {
    /// Module the log belongs to, derived from the log filename.
    pub module: String,
    pub status: InstallStatus,
    /// Distinct failure labels in first-seen order; exactly the generic
    /// fallback when the log failed without a recognized signature.
    pub reasons: Vec<&'static str>,
}

/// Derive the module name from a log filename.
///
/// The extension is stripped first, then the final `-`-delimited segment,
/// which the scheduler appends as a job or array-task id.
pub fn module_name_from_log(file_name: &str) -> String {
    let stem = Path::new(file_name)
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or(file_name);

    match stem.rfind('-') {
        Some(pos) => stem[..pos].to_string(),
        None => stem.to_string(),
    }
}

/// Classify one log by scanning every line against the signature table.
///
/// Lines matching no specific signature are still checked for the literal
/// substring `error` (case-insensitive); such lines mark the log failed
/// with the generic fallback label. All matches across the file are
/// collected, not just the first.
pub fn classify_log(module: impl Into<String>, contents: &str) -> LogClassification {
    let mut status = InstallStatus::Valid;
    let mut reasons: Vec<&'static str> = Vec::new();

    for line in contents.lines() {
        let mut matched_specific = false;

        for &(signature, label) in FAILURE_SIGNATURES {
            if line.contains(signature) {
                status = InstallStatus::Failed;
                if !reasons.contains(&label) {
                    reasons.push(label);
                }
                matched_specific = true;
                break;
            }
        }

        if !matched_specific && line.to_lowercase().contains("error") {
            status = InstallStatus::Failed;
            if !reasons.contains(&GENERIC_FAILURE_LABEL) {
                reasons.push(GENERIC_FAILURE_LABEL);
            }
        }
    }

    LogClassification {
        module: module.into(),
        status,
        reasons,
    }
}

/// Classify every `*.out` log in `directory`, sorted by module name.
pub fn check_installation_logs(directory: &Path) -> crate::Result<Vec<LogClassification>> {
    let entries = std::fs::read_dir(directory).map_err(|error| crate::Error::ReadFailed {
        path: directory.to_path_buf(),
        error,
    })?;

    let mut results = Vec::new();

    for entry in entries {
        let entry = entry?;
        let path = entry.path();

        if !path.is_file() || path.extension().and_then(|ext| ext.to_str()) != Some("out") {
            continue;
        }
        let file_name = entry.file_name();
        let Some(file_name) = file_name.to_str() else {
            continue;
        };

        let contents =
            std::fs::read_to_string(&path).map_err(|error| crate::Error::ReadFailed {
                path: path.clone(),
                error,
            })?;

        let classification = classify_log(module_name_from_log(file_name), &contents);
        if classification.status == InstallStatus::Failed {
            tracing::debug!("errors found in log for {}", classification.module);
        }
        results.push(classification);
    }

    results.sort_by(|a, b| a.module.cmp(&b.module));
    Ok(results)
}
