// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

pub mod config;     // diagnostic options + loader
pub mod convert;    // built-in text converter
pub mod errors;     // error handling
pub mod exchange;   // pipeline data model
pub mod introspect; // diagnostic core
pub mod observability;
pub mod traits;     // collaborator seams
