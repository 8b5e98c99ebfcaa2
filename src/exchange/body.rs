// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message body representations.
//!
//! A body is a closed sum of everything the pipeline can carry: plain
//! in-memory values, buffered re-readable stream caches, raw streams and
//! readers/writers owned by an endpoint, file-backed payloads, structured
//! sources, and opaque host objects. Diagnostic code classifies a body
//! before touching it, so the safety policy over these shapes stays
//! auditable and exhaustive.

use std::fmt;
use std::io::{Read, Write};
use std::path::PathBuf;
use std::sync::Mutex;

use super::value::Value;

/// A buffered stream body that can be read more than once.
///
/// The cache holds the fully buffered bytes plus a cursor behind a mutex so
/// it can be consumed through a shared reference. `reset` rewinds the cursor
/// to the start and is idempotent; after a reset the cache yields the
/// identical content a fresh read would have yielded.
pub struct StreamCache {
    data: Vec<u8>,
    pos: Mutex<usize>,
}

impl StreamCache {
    pub fn new(data: Vec<u8>) -> Self {
        Self {
            data,
            pos: Mutex::new(0),
        }
    }

    /// Consume and return everything from the cursor to the end.
    pub fn read_remaining(&self) -> Vec<u8> {
        let mut pos = self.cursor();
        let remaining = self.data[*pos..].to_vec();
        *pos = self.data.len();
        remaining
    }

    /// Rewind the cursor to the start of the buffered content.
    pub fn reset(&self) {
        *self.cursor() = 0;
    }

    /// Whether any of the buffered content has been consumed.
    pub fn is_consumed(&self) -> bool {
        *self.cursor() > 0
    }

    // A poisoned cursor still holds a valid position, so recover it rather
    // than propagate the panic into diagnostic paths.
    fn cursor(&self) -> std::sync::MutexGuard<'_, usize> {
        self.pos.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Total buffered length in bytes, independent of the cursor.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

impl fmt::Debug for StreamCache {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StreamCache")
            .field("len", &self.data.len())
            .field("consumed", &self.is_consumed())
            .finish()
    }
}

/// A structured (XML-ish) body source.
///
/// `Text` and `Bytes` are memory-backed and always safe to materialize;
/// `Stream` wraps a one-shot reader and is treated like any other raw
/// stream by the safety policy.
pub enum Source {
    Text(String),
    Bytes(Vec<u8>),
    Stream(Box<dyn Read + Send>),
}

impl Source {
    pub fn is_memory_backed(&self) -> bool {
        matches!(self, Source::Text(_) | Source::Bytes(_))
    }
}

/// An opaque host object the pipeline cannot look inside.
///
/// Carries an optional declared type name (used for the `type` attribute in
/// structured dumps) and an optional preformatted text form. A body with
/// neither has no default textual form at all.
#[derive(Debug, Clone, Default)]
pub struct Opaque {
    pub type_name: Option<String>,
    pub text: Option<String>,
}

impl Opaque {
    pub fn new(type_name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            type_name: Some(type_name.into()),
            text: Some(text.into()),
        }
    }

    /// An opaque value with no resolvable type and no text form.
    pub fn unresolvable() -> Self {
        Self::default()
    }
}

/// The body of a [`Message`](super::Message).
pub enum Body {
    Null,
    Value(Value),
    StreamCache(StreamCache),
    InputStream(Box<dyn Read + Send>),
    OutputStream(Box<dyn Write + Send>),
    Reader(Box<dyn Read + Send>),
    Writer(Box<dyn Write + Send>),
    File(PathBuf),
    Source(Source),
    Opaque(Opaque),
}

impl Body {
    pub fn text(text: impl Into<String>) -> Self {
        Body::Value(Value::String(text.into()))
    }

    pub fn bytes(bytes: impl Into<Vec<u8>>) -> Self {
        Body::Value(Value::Bytes(bytes.into()))
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Body::Null)
    }

    /// The body's type name with built-in qualifiers omitted, or `None`
    /// when there is no body or the type is unresolvable.
    pub fn type_name(&self) -> Option<&str> {
        match self {
            Body::Null => None,
            Body::Value(v) => Some(v.type_name()),
            Body::StreamCache(_) => Some("StreamCache"),
            Body::InputStream(_) => Some("InputStream"),
            Body::OutputStream(_) => Some("OutputStream"),
            Body::Reader(_) => Some("Reader"),
            Body::Writer(_) => Some("Writer"),
            Body::File(_) => Some("PathBuf"),
            Body::Source(Source::Text(_)) => Some("StringSource"),
            Body::Source(Source::Bytes(_)) => Some("BytesSource"),
            Body::Source(Source::Stream(_)) => Some("StreamSource"),
            Body::Opaque(o) => o.type_name.as_deref(),
        }
    }

    /// The body's own default textual form, independent of any converter.
    ///
    /// `None` means the body has no text at all (no body, or an opaque
    /// value without a preformatted form).
    pub fn default_text(&self) -> Option<String> {
        match self {
            Body::Null => None,
            Body::Value(v) => Some(v.to_string()),
            Body::StreamCache(c) => Some(format!("StreamCache[{} bytes]", c.len())),
            Body::InputStream(_) => Some("InputStream".to_string()),
            Body::OutputStream(_) => Some("OutputStream".to_string()),
            Body::Reader(_) => Some("Reader".to_string()),
            Body::Writer(_) => Some("Writer".to_string()),
            Body::File(path) => Some(path.display().to_string()),
            Body::Source(Source::Text(s)) => Some(s.clone()),
            Body::Source(Source::Bytes(b)) => Some(String::from_utf8_lossy(b).into_owned()),
            Body::Source(Source::Stream(_)) => Some("StreamSource".to_string()),
            Body::Opaque(o) => o.text.clone(),
        }
    }

    pub fn as_stream_cache(&self) -> Option<&StreamCache> {
        match self {
            Body::StreamCache(c) => Some(c),
            _ => None,
        }
    }
}

impl fmt::Debug for Body {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Body::Null => f.write_str("Null"),
            Body::Value(v) => f.debug_tuple("Value").field(v).finish(),
            Body::StreamCache(c) => f.debug_tuple("StreamCache").field(c).finish(),
            Body::InputStream(_) => f.write_str("InputStream"),
            Body::OutputStream(_) => f.write_str("OutputStream"),
            Body::Reader(_) => f.write_str("Reader"),
            Body::Writer(_) => f.write_str("Writer"),
            Body::File(path) => f.debug_tuple("File").field(path).finish(),
            Body::Source(Source::Text(_)) => f.write_str("Source(Text)"),
            Body::Source(Source::Bytes(_)) => f.write_str("Source(Bytes)"),
            Body::Source(Source::Stream(_)) => f.write_str("Source(Stream)"),
            Body::Opaque(o) => f.debug_tuple("Opaque").field(o).finish(),
        }
    }
}

impl Default for Body {
    fn default() -> Self {
        Body::Null
    }
}

impl From<Value> for Body {
    fn from(value: Value) -> Self {
        Body::Value(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stream_cache_reads_then_resets() {
        let cache = StreamCache::new(b"hello".to_vec());
        assert!(!cache.is_consumed());

        assert_eq!(cache.read_remaining(), b"hello");
        assert!(cache.is_consumed());
        assert_eq!(cache.read_remaining(), b"");

        cache.reset();
        assert!(!cache.is_consumed());
        assert_eq!(cache.read_remaining(), b"hello");
    }

    #[test]
    fn reset_is_idempotent() {
        let cache = StreamCache::new(b"data".to_vec());
        cache.reset();
        cache.reset();
        assert_eq!(cache.read_remaining(), b"data");
    }

    #[test]
    fn body_type_names() {
        assert_eq!(Body::Null.type_name(), None);
        assert_eq!(Body::text("x").type_name(), Some("String"));
        assert_eq!(
            Body::StreamCache(StreamCache::new(vec![])).type_name(),
            Some("StreamCache")
        );
        assert_eq!(
            Body::Source(Source::Text("<a/>".into())).type_name(),
            Some("StringSource")
        );
        assert_eq!(Body::Opaque(Opaque::unresolvable()).type_name(), None);
        assert_eq!(
            Body::Opaque(Opaque::new("SessionHandle", "session#4")).type_name(),
            Some("SessionHandle")
        );
    }

    #[test]
    fn default_text_for_opaque_without_text_is_none() {
        assert_eq!(Body::Opaque(Opaque::unresolvable()).default_text(), None);
        assert_eq!(
            Body::Opaque(Opaque::new("T", "t")).default_text(),
            Some("t".to_string())
        );
    }
}
