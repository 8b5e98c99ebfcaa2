// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::config::options::{BodyLogOptions, DumpOptions};
use crate::errors::ConfigError;
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Diagnostics configuration for a host pipeline.
///
/// Typically loaded from a YAML file and handed to the pieces of the host
/// that call into this crate.
///
/// # Example
/// ```yaml
/// body_log:
///   allow_streams: false
///   max_chars: 500
/// dump:
///   include_body: true
///   indent: 2
/// ```
#[derive(Debug, Default, Deserialize, PartialEq)]
pub struct DiagnosticsConfig {
    #[serde(default)]
    pub body_log: BodyLogOptions,
    #[serde(default)]
    pub dump: DumpOptions,
}

/// Load a diagnostics config from a YAML file
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<DiagnosticsConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    let cfg: DiagnosticsConfig = serde_yaml::from_str(&content)?;
    Ok(cfg)
}
