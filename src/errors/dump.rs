// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Errors for diagnostic dump construction.

use thiserror::Error;

use super::conversion::ConversionError;

/// An exchange summary formatter failed to render.
#[derive(Error, Debug)]
pub enum FormatError {
    #[error("exchange summary failed: {0}")]
    Summary(String),

    #[error(transparent)]
    Conversion(#[from] ConversionError),
}

/// Internal failure while building a message-history dump.
///
/// Caught at the outer boundary of the history dump and collapsed to an
/// empty result; the history path is called from failure-diagnostic code
/// and must never fail itself.
#[derive(Error, Debug)]
pub enum HistoryError {
    #[error("exchange formatter failed: {0}")]
    Formatter(#[from] FormatError),
}
