// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2012-2025 Andrei Maltsev

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

/// Resolve a config path against the current working directory.
///
/// The `MSC_DECODER_CONFIG` environment variable, when set, overrides the
/// requested path entirely.
pub fn resolve_config_path(rel: &str) -> Result<PathBuf> {
    let requested = std::env::var("MSC_DECODER_CONFIG")
        .map(PathBuf::from)
        .unwrap_or_else(|_| Path::new(rel).to_path_buf());

    let abs = if requested.is_absolute() {
        requested
    } else {
        std::env::current_dir()
            .context("cannot get current working dir")?
            .join(requested)
    };

    abs.canonicalize()
        .with_context(|| format!("failed to canonicalize path {abs:?}"))
}
