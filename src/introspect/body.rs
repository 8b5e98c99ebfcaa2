// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Body safety classification and body-for-logging extraction.
//!
//! Everything here is driven by one rule: a diagnostic read must never
//! corrupt the message for downstream processing. Bodies are classified
//! into a closed set of kinds before anything touches them, stream-like
//! and file-backed kinds are gated behind explicit allowances, and a
//! stream cache that does get materialized is always rewound before the
//! operation returns.

use std::fmt;

use crate::exchange::{Body, Exchange, Message, StreamCache};
use crate::observability::messages::body::{BodyClipped, BodyConversionFellBack, StreamCacheReset};
use crate::traits::TextConverter;

/// Body-unlogged placeholder, returned when the character cap is negative.
pub const BODY_NOT_LOGGED: &str = "[Body is not logged]";

/// Null-body placeholder.
pub const BODY_IS_NULL: &str = "[Body is null]";

/// The safety classification of a message body.
///
/// Computed fresh for every extraction; never stored. The variants are a
/// closed set so the gating policy below stays exhaustive: adding a body
/// shape forces a decision here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyKind {
    Null,
    StreamCache,
    InputStream,
    OutputStream,
    Reader,
    Writer,
    FileBacked,
    MemorySource,
    StreamSource,
    Opaque,
}

impl BodyKind {
    /// Kinds that read from or write to a one-shot or cursor-bearing
    /// stream. Memory-backed sources are deliberately not in this set.
    pub fn is_stream_like(self) -> bool {
        matches!(
            self,
            BodyKind::StreamCache
                | BodyKind::InputStream
                | BodyKind::OutputStream
                | BodyKind::Reader
                | BodyKind::Writer
                | BodyKind::StreamSource
        )
    }

    pub fn is_file_backed(self) -> bool {
        self == BodyKind::FileBacked
    }
}

impl fmt::Display for BodyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            BodyKind::Null => "null",
            BodyKind::StreamCache => "StreamCache",
            BodyKind::InputStream => "InputStream",
            BodyKind::OutputStream => "OutputStream",
            BodyKind::Reader => "Reader",
            BodyKind::Writer => "Writer",
            BodyKind::FileBacked => "File",
            BodyKind::MemorySource => "MemorySource",
            BodyKind::StreamSource => "StreamSource",
            BodyKind::Opaque => "Object",
        };
        f.write_str(name)
    }
}

/// Classify a body by its runtime shape. Pure and total.
pub fn classify(body: &Body) -> BodyKind {
    match body {
        Body::Null => BodyKind::Null,
        Body::Value(_) => BodyKind::Opaque,
        Body::StreamCache(_) => BodyKind::StreamCache,
        Body::InputStream(_) => BodyKind::InputStream,
        Body::OutputStream(_) => BodyKind::OutputStream,
        Body::Reader(_) => BodyKind::Reader,
        Body::Writer(_) => BodyKind::Writer,
        Body::File(_) => BodyKind::FileBacked,
        Body::Source(source) => {
            if source.is_memory_backed() {
                BodyKind::MemorySource
            } else {
                BodyKind::StreamSource
            }
        }
        Body::Opaque(_) => BodyKind::Opaque,
    }
}

/// Rewinds a stream cache when dropped.
///
/// Created at the moment a cache is about to be materialized, so the
/// reset runs on every path out of the extraction, including an unwind
/// from a host converter. A cache that was never read is never touched.
struct CacheResetGuard<'a> {
    cache: &'a StreamCache,
}

impl<'a> CacheResetGuard<'a> {
    fn new(cache: &'a StreamCache) -> Self {
        Self { cache }
    }
}

impl Drop for CacheResetGuard<'_> {
    fn drop(&mut self) {
        self.cache.reset();
        tracing::trace!(
            "{}",
            StreamCacheReset {
                len: self.cache.len()
            }
        );
    }
}

/// Extract a message body as text for logging.
///
/// Never fails and never consumes a stream irreversibly:
/// * a negative `max_chars` short-circuits to the unlogged placeholder
///   without inspecting the body at all;
/// * disallowed stream-like and file-backed bodies produce placeholders
///   without being touched;
/// * conversion failures fall back to the body's default textual form;
/// * a materialized stream cache is rewound before returning;
/// * a positive `max_chars` clips the text, appending the clip marker.
pub(crate) fn extract_for_logging(
    converter: &dyn TextConverter,
    message: &Message,
    exchange: Option<&Exchange>,
    prepend: &str,
    allow_streams: bool,
    allow_files: bool,
    max_chars: i32,
) -> String {
    if max_chars < 0 {
        return format!("{}{}", prepend, BODY_NOT_LOGGED);
    }

    let body = message.body();
    if body.is_null() {
        return format!("{}{}", prepend, BODY_IS_NULL);
    }

    let kind = classify(body);

    // The file gate is independent of the stream gate: a file body is
    // blocked whenever files are disallowed, whatever the stream flag.
    if kind.is_file_backed() && !allow_files {
        return format!("{}[Body is file based: {}]", prepend, file_label(body));
    }
    if kind.is_stream_like() && !allow_streams {
        return format!("{}[Body is instance of {}]", prepend, kind);
    }

    // Materialization starts here. If the body is a stream cache, the
    // guard rewinds it no matter how this function is left.
    let _reset = body.as_stream_cache().map(CacheResetGuard::new);

    let text = match converter.body_to_text(body, exchange) {
        Ok(text) => Some(text),
        Err(error) => {
            tracing::trace!(
                "{}",
                BodyConversionFellBack {
                    body_type: body.type_name().unwrap_or("unknown"),
                    error: &error,
                }
            );
            body.default_text()
        }
    };

    let text = match text {
        Some(text) => text,
        None => return format!("{}{}", prepend, BODY_IS_NULL),
    };

    format!("{}{}", prepend, clip(text, max_chars))
}

/// Extract the body as a plain, unclipped string.
///
/// Stream caches are read and rewound; `None` means the body has no text
/// form at all.
pub(crate) fn extract_body_as_string(
    converter: &dyn TextConverter,
    message: &Message,
    exchange: Option<&Exchange>,
) -> Option<String> {
    let body = message.body();
    if body.is_null() {
        return None;
    }

    let _reset = body.as_stream_cache().map(CacheResetGuard::new);

    match converter.body_to_text(body, exchange) {
        Ok(text) => Some(text),
        Err(_) => body.default_text(),
    }
}

fn file_label(body: &Body) -> String {
    match body {
        Body::File(path) => path.display().to_string(),
        _ => String::new(),
    }
}

/// Clip text to `max_chars` characters, appending the clip marker with
/// the cap and the original length. `max_chars <= 0` never clips.
fn clip(text: String, max_chars: i32) -> String {
    if max_chars <= 0 {
        return text;
    }

    let max = max_chars as usize;
    let total = text.chars().count();
    if total <= max {
        return text;
    }

    tracing::trace!(
        "{}",
        BodyClipped {
            max_chars,
            total_chars: total,
        }
    );

    let mut clipped: String = text.chars().take(max).collect();
    clipped.push_str(&format!(
        "... [Body clipped after {} chars, total length is {}]",
        max_chars, total
    ));
    clipped
}
