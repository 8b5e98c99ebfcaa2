// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for body extraction events.

use std::fmt::{Display, Formatter};

/// A logged body exceeded the character cap and was clipped.
///
/// # Log Level
/// `trace!` - Normal-path detail
pub struct BodyClipped {
    pub max_chars: i32,
    pub total_chars: usize,
}

impl Display for BodyClipped {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Body clipped after {} chars, total length is {}",
            self.max_chars, self.total_chars
        )
    }
}

/// Text conversion failed and extraction fell back to the body's default
/// textual form.
///
/// # Log Level
/// `trace!` - Recovered locally, the body is only being logged
pub struct BodyConversionFellBack<'a> {
    pub body_type: &'a str,
    pub error: &'a dyn std::error::Error,
}

impl Display for BodyConversionFellBack<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Conversion of {} body fell back to default text form: {}",
            self.body_type, self.error
        )
    }
}

/// A stream-cache body was rewound after materialization.
///
/// # Log Level
/// `trace!` - Normal-path detail
pub struct StreamCacheReset {
    pub len: usize,
}

impl Display for StreamCacheReset {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Stream cache reset after read: {} bytes buffered", self.len)
    }
}
