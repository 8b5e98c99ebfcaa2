// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for structured dump and history table events.

use std::fmt::{Display, Formatter};

/// A header value failed conversion and was emitted with empty text.
///
/// # Log Level
/// `debug!` - Recovered failure, output stays well-formed
pub struct HeaderConversionDropped<'a> {
    pub key: &'a str,
    pub error: &'a dyn std::error::Error,
}

impl Display for HeaderConversionDropped<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Header '{}' dropped to empty text in dump: {}",
            self.key, self.error
        )
    }
}

/// Building a message-history dump failed; the caller received an empty
/// string instead.
///
/// # Log Level
/// `debug!` - Contained by the outer boundary of the history dump
pub struct HistoryDumpFailed<'a> {
    pub exchange_id: &'a str,
    pub error: &'a dyn std::error::Error,
}

impl Display for HistoryDumpFailed<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Message history dump for exchange '{}' failed: {}",
            self.exchange_id, self.error
        )
    }
}
