// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! The type-conversion seam.

use crate::errors::ConversionError;
use crate::exchange::{Body, Exchange, Value};

/// Turns message values and bodies into text.
///
/// Implementations must not panic; a returned error means "no conversion
/// available" and diagnostic callers recover by falling back to the
/// value's own default textual form. The optional exchange is a context
/// hint only; converters must not mutate it.
pub trait TextConverter: Send + Sync {
    fn value_to_text(
        &self,
        value: &Value,
        exchange: Option<&Exchange>,
    ) -> Result<String, ConversionError>;

    fn body_to_text(
        &self,
        body: &Body,
        exchange: Option<&Exchange>,
    ) -> Result<String, ConversionError>;
}
