// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2012-2025 Andrei Maltsev

use std::{fs, path::PathBuf};

use anyhow::{Context, Result, ensure};
use serde::{Deserialize, Serialize};

#[derive(Deserialize, Serialize, Debug, Clone, Default)]
pub struct Config {
    /// Decoder runtime knobs; nothing here touches wire semantics.
    pub runtime: RuntimeConfig,
}

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct RuntimeConfig {
    /// Warn once an open command has accumulated this many data-phase
    /// transactions. Accumulation itself stays unbounded either way.
    #[serde(default)]
    pub warn_pending_frames: Option<usize>,

    /// Leading payload bytes echoed (hex) into drop diagnostics.
    #[serde(default = "default_capture_payload_bytes")]
    pub capture_payload_bytes: usize,
}

fn default_capture_payload_bytes() -> usize {
    16
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            warn_pending_frames: None,
            capture_payload_bytes: default_capture_payload_bytes(),
        }
    }
}

impl Config {
    pub fn load_from_file(path: PathBuf) -> Result<Self> {
        let raw = fs::read_to_string(&path)
            .with_context(|| format!("failed to read config file {path:?}"))?;
        let cfg: Config = serde_yaml::from_str(&raw)
            .with_context(|| format!("failed to parse config file {path:?}"))?;
        cfg.validate()?;
        Ok(cfg)
    }

    fn validate(&self) -> Result<()> {
        ensure!(
            self.runtime.capture_payload_bytes <= 512,
            "capture_payload_bytes {} too large (max 512)",
            self.runtime.capture_payload_bytes
        );
        if let Some(limit) = self.runtime.warn_pending_frames {
            ensure!(limit > 0, "warn_pending_frames must be positive when set");
        }
        Ok(())
    }
}
