// Copyright (c) Contributors to the ebplan project.
// SPDX-License-Identifier: Apache-2.0

//! Plan manifest parsing and data types for ebplan.yaml files.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

#[cfg(test)]
#[path = "./manifest_test.rs"]
mod manifest_test;

/// API version for manifest files.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub enum ApiVersion {
    #[serde(rename = "ebplan/v0")]
    V0,
}

impl Default for ApiVersion {
    fn default() -> Self {
        Self::V0
    }
}

/// Helper for two-stage deserialization to determine API version first.
#[derive(Deserialize)]
struct ApiVersionMapping {
    #[serde(default)]
    api: ApiVersion,
}

/// Supported compiler/library toolchain stacks.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Toolchain {
    Foss,
    Intel,
}

impl fmt::Display for Toolchain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Toolchain::Foss => f.write_str("foss"),
            Toolchain::Intel => f.write_str("intel"),
        }
    }
}

impl FromStr for Toolchain {
    type Err = crate::Error;

    fn from_str(s: &str) -> crate::Result<Self> {
        match s {
            "foss" => Ok(Toolchain::Foss),
            "intel" => Ok(Toolchain::Intel),
            other => Err(crate::Error::UnknownToolchain(other.to_string())),
        }
    }
}

/// Substring filter restricting search hits to one toolchain release.
pub fn search_filter(toolchain: Toolchain, release: &str) -> String {
    format!("{toolchain}-{release}")
}

/// Scheduler job sizing for the generated install script.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct JobOptions {
    /// CPU cores per build job.
    #[serde(default = "default_job_cores")]
    pub cores: u32,

    /// Maximum wall time per build job, in hours.
    #[serde(default = "default_walltime_hours")]
    pub walltime_hours: u32,
}

fn default_job_cores() -> u32 {
    8
}

fn default_walltime_hours() -> u32 {
    5
}

impl Default for JobOptions {
    fn default() -> Self {
        Self {
            cores: default_job_cores(),
            walltime_hours: default_walltime_hours(),
        }
    }
}

/// Main plan specification from an ebplan.yaml file.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PlanManifest {
    /// API version identifier.
    pub api: ApiVersion,

    /// Optional human-readable description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Toolchain the stack is built against.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub toolchain: Option<Toolchain>,

    /// Toolchain release used in the search filter.
    #[serde(default = "default_release")]
    pub release: String,

    /// Package names to search recipes for, in processing order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub packages: Vec<String>,

    /// Scheduler job sizing.
    #[serde(default)]
    pub job: JobOptions,

    /// Path to the file this was loaded from (not serialized).
    #[serde(skip)]
    pub source_path: Option<PathBuf>,
}

fn default_release() -> String {
    crate::DEFAULT_RELEASE.to_string()
}

impl PlanManifest {
    /// Parse a manifest from a YAML string.
    pub fn from_yaml<S: Into<String>>(yaml: S) -> crate::Result<Self> {
        let yaml = yaml.into();

        // Stage 1: Parse to get API version
        let value: serde_yaml::Value =
            serde_yaml::from_str(&yaml).map_err(|error| crate::Error::InvalidManifest {
                error,
                yaml_content: yaml.clone(),
            })?;

        let with_version: ApiVersionMapping = serde_yaml::from_value(value.clone())
            .map_err(|error| crate::Error::InvalidManifest {
                error,
                yaml_content: yaml.clone(),
            })?;

        // Stage 2: Deserialize based on version
        match with_version.api {
            ApiVersion::V0 => serde_yaml::from_value(value)
                .map_err(|error| crate::Error::InvalidManifest {
                    error,
                    yaml_content: yaml,
                }),
        }
    }

    /// Load a manifest from a file path.
    pub fn load<P: AsRef<std::path::Path>>(path: P) -> crate::Result<Self> {
        let path = path.as_ref();
        let yaml = std::fs::read_to_string(path).map_err(|error| crate::Error::ReadFailed {
            path: path.to_path_buf(),
            error,
        })?;

        let mut manifest = Self::from_yaml(yaml)?;
        manifest.source_path = Some(path.to_path_buf());
        Ok(manifest)
    }

    /// Filter string for this manifest's toolchain, when one is set.
    pub fn search_filter(&self) -> Option<String> {
        self.toolchain
            .map(|toolchain| search_filter(toolchain, &self.release))
    }
}

impl Default for PlanManifest {
    fn default() -> Self {
        Self {
            api: ApiVersion::default(),
            description: None,
            toolchain: None,
            release: default_release(),
            packages: Vec::new(),
            job: JobOptions::default(),
            source_path: None,
        }
    }
}
