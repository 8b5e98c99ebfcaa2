// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Errors for text conversion of message values and bodies.

use thiserror::Error;

/// A value could not be turned into text.
///
/// Diagnostic callers treat every variant the same way: fall back to the
/// value's default textual form, or to an empty value where no fallback
/// exists. These errors never surface past a public operation.
#[derive(Error, Debug)]
pub enum ConversionError {
    /// No text conversion exists for this body or value shape.
    #[error("no text conversion available for {type_name}")]
    NotConvertible { type_name: String },

    /// Reading a file-backed or stream-backed value failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A host converter failed for its own reasons.
    #[error("conversion failed: {0}")]
    Failed(String),
}

impl ConversionError {
    pub fn not_convertible(type_name: impl Into<String>) -> Self {
        Self::NotConvertible {
            type_name: type_name.into(),
        }
    }
}
