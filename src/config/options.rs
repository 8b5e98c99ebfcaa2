// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::config::consts::{DEFAULT_LOG_MAX_CHARS, DUMP_MAX_CHARS};
use crate::config::consts::{LOG_BODY_MAX_CHARS_PROPERTY, LOG_BODY_STREAMS_PROPERTY};
use crate::traits::PropertyLookup;
use serde::Deserialize;

/// Options for body-for-logging extraction.
///
/// All fields are optional; unset fields fall back to the documented
/// defaults. Options can come from a config file, or be resolved at call
/// time from the exchange's context properties via [`from_properties`].
///
/// # Fields
/// * `allow_streams` - whether stream-based bodies may be materialized (defaults to false)
/// * `allow_files` - whether file-based bodies may be materialized (defaults to false)
/// * `max_chars` - character cap; 0 means unlimited, negative disables body logging (defaults to 1000)
///
/// [`from_properties`]: BodyLogOptions::from_properties
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct BodyLogOptions {
    pub allow_streams: Option<bool>,
    pub allow_files: Option<bool>,
    pub max_chars: Option<i32>,
}

impl Default for BodyLogOptions {
    fn default() -> Self {
        Self {
            allow_streams: None,
            allow_files: None,
            max_chars: None,
        }
    }
}

impl BodyLogOptions {
    /// Resolve options from named context properties.
    ///
    /// Absent or unparsable properties fall back to the defaults; option
    /// resolution itself can never fail.
    pub fn from_properties(properties: &dyn PropertyLookup) -> Self {
        Self {
            allow_streams: properties
                .property(LOG_BODY_STREAMS_PROPERTY)
                .and_then(|v| v.parse().ok()),
            allow_files: None,
            max_chars: properties
                .property(LOG_BODY_MAX_CHARS_PROPERTY)
                .and_then(|v| v.parse().ok()),
        }
    }

    /// Get the stream allowance, using the built-in default if not configured.
    pub fn get_allow_streams(&self) -> bool {
        self.allow_streams.unwrap_or(false)
    }

    /// Get the file allowance, using the built-in default if not configured.
    pub fn get_allow_files(&self) -> bool {
        self.allow_files.unwrap_or(false)
    }

    /// Get the character cap, using the built-in default if not configured.
    pub fn get_max_chars(&self) -> i32 {
        self.max_chars.unwrap_or(DEFAULT_LOG_MAX_CHARS)
    }
}

/// Options for the structured XML-like message dump.
///
/// # Fields
/// * `include_body` - whether to emit the `<body>` section (defaults to true)
/// * `indent` - spaces prepended to every emitted line (defaults to 0)
/// * `allow_streams` - whether stream-based bodies may be materialized (defaults to false)
/// * `allow_files` - whether file-based bodies may be materialized (defaults to true)
/// * `max_chars` - body character cap (defaults to 128 KiB)
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct DumpOptions {
    pub include_body: Option<bool>,
    pub indent: Option<usize>,
    pub allow_streams: Option<bool>,
    pub allow_files: Option<bool>,
    pub max_chars: Option<i32>,
}

impl Default for DumpOptions {
    fn default() -> Self {
        Self {
            include_body: None,
            indent: None,
            allow_streams: None,
            allow_files: None,
            max_chars: None,
        }
    }
}

impl DumpOptions {
    pub fn get_include_body(&self) -> bool {
        self.include_body.unwrap_or(true)
    }

    pub fn get_indent(&self) -> usize {
        self.indent.unwrap_or(0)
    }

    pub fn get_allow_streams(&self) -> bool {
        self.allow_streams.unwrap_or(false)
    }

    pub fn get_allow_files(&self) -> bool {
        self.allow_files.unwrap_or(true)
    }

    pub fn get_max_chars(&self) -> i32 {
        self.max_chars.unwrap_or(DUMP_MAX_CHARS)
    }
}
