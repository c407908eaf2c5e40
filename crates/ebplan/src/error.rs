// Copyright (c) Contributors to the ebplan project.
// SPDX-License-Identifier: Apache-2.0

//! Error types for ebplan operations.

use miette::Diagnostic;
use std::path::PathBuf;
use thiserror::Error;

/// Convenience Result type with ebplan Error.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur during ebplan operations.
#[derive(Error, Diagnostic, Debug)]
pub enum Error {
    /// An external tool could not be executed at all
    #[error("Failed to run command: {command}")]
    #[diagnostic(
        code(ebplan::command_failed),
        help("Check that EasyBuild and the module system are installed and on PATH")
    )]
    CommandFailed {
        command: String,
        #[source]
        error: std::io::Error,
    },

    /// A dry-run bullet line was missing its parenthesized identifier
    #[error("Malformed dependency line for {recipe}: {line:?}")]
    #[diagnostic(
        code(ebplan::malformed_dependency),
        help("Expected a bullet line of the form '* name (identifier) ...'")
    )]
    MalformedDependency { recipe: String, line: String },

    /// Failed to read a file
    #[error("Failed to read file: {path:?}")]
    #[diagnostic(code(ebplan::read_failed))]
    ReadFailed {
        path: PathBuf,
        #[source]
        error: std::io::Error,
    },

    /// Invalid YAML in the plan manifest
    #[error("Invalid plan manifest: {error}")]
    #[diagnostic(
        code(ebplan::invalid_manifest),
        help("Check YAML syntax and ensure 'api: ebplan/v0' is present")
    )]
    InvalidManifest {
        #[source]
        error: serde_yaml::Error,
        yaml_content: String,
    },

    /// Toolchain selector outside the supported set
    #[error("Unknown toolchain: {0}")]
    #[diagnostic(
        code(ebplan::unknown_toolchain),
        help("Supported toolchains are 'foss' and 'intel'")
    )]
    UnknownToolchain(String),

    /// A user-supplied path could not be resolved
    #[error("Invalid path: {0}")]
    #[diagnostic(code(ebplan::invalid_path))]
    InvalidPath(String),

    /// IO error passthrough
    #[error(transparent)]
    #[diagnostic(code(ebplan::io_error))]
    Io(#[from] std::io::Error),
}
