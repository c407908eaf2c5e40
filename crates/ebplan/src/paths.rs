// Copyright (c) Contributors to the ebplan project.
// SPDX-License-Identifier: Apache-2.0

//! Resolution of user-supplied paths (log directories, manifests).

use std::path::PathBuf;

/// Resolve a path argument to an absolute canonical path.
///
/// Supports home-relative (`~/`) and relative inputs; the target must
/// exist, since every caller is about to read from it.
pub fn resolve_user_path(input: &str) -> crate::Result<PathBuf> {
    let path = if let Some(rest) = input.strip_prefix("~/") {
        let home = dirs::home_dir()
            .ok_or_else(|| crate::Error::InvalidPath("Cannot resolve ~ without HOME".to_string()))?;
        home.join(rest)
    } else {
        PathBuf::from(input)
    };

    dunce::canonicalize(&path).map_err(|error| crate::Error::ReadFailed { path, error })
}
