// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

mod loader;
mod options;

pub mod consts;

pub use loader::{load_config, DiagnosticsConfig};
pub use options::{BodyLogOptions, DumpOptions};
