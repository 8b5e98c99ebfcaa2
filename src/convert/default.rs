// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! The built-in, non-destructive text converter.

use std::fs;

use crate::errors::ConversionError;
use crate::exchange::{Body, Exchange, Source, Value};
use crate::traits::TextConverter;

/// Reference [`TextConverter`] implementation.
///
/// Materializes everything that can be read without consuming it: in-memory
/// values, stream caches (the caller owns the reset discipline), memory
/// sources, and file-backed bodies. Raw streams, readers, and writers are
/// declined: reading them is irreversible, and only a host converter that
/// understands its own stream types may take that on.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultTextConverter;

impl TextConverter for DefaultTextConverter {
    fn value_to_text(
        &self,
        value: &Value,
        _exchange: Option<&Exchange>,
    ) -> Result<String, ConversionError> {
        Ok(value.to_string())
    }

    fn body_to_text(
        &self,
        body: &Body,
        _exchange: Option<&Exchange>,
    ) -> Result<String, ConversionError> {
        match body {
            Body::Null => Err(ConversionError::not_convertible("null body")),
            Body::Value(value) => Ok(value.to_string()),
            Body::StreamCache(cache) => {
                Ok(String::from_utf8_lossy(&cache.read_remaining()).into_owned())
            }
            Body::File(path) => Ok(fs::read_to_string(path)?),
            Body::Source(Source::Text(text)) => Ok(text.clone()),
            Body::Source(Source::Bytes(bytes)) => {
                Ok(String::from_utf8_lossy(bytes).into_owned())
            }
            Body::Source(Source::Stream(_)) => {
                Err(ConversionError::not_convertible("StreamSource"))
            }
            Body::InputStream(_) => Err(ConversionError::not_convertible("InputStream")),
            Body::OutputStream(_) => Err(ConversionError::not_convertible("OutputStream")),
            Body::Reader(_) => Err(ConversionError::not_convertible("Reader")),
            Body::Writer(_) => Err(ConversionError::not_convertible("Writer")),
            Body::Opaque(opaque) => opaque
                .text
                .clone()
                .ok_or_else(|| ConversionError::not_convertible("opaque body")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::exchange::StreamCache;
    use std::io::Write as _;

    #[test]
    fn converts_in_memory_values() {
        let converter = DefaultTextConverter;
        assert_eq!(
            converter.body_to_text(&Body::text("hello"), None).unwrap(),
            "hello"
        );
        assert_eq!(
            converter
                .body_to_text(&Body::Value(Value::Integer(42)), None)
                .unwrap(),
            "42"
        );
    }

    #[test]
    fn stream_cache_conversion_consumes_the_cursor() {
        let converter = DefaultTextConverter;
        let body = Body::StreamCache(StreamCache::new(b"cached".to_vec()));

        assert_eq!(converter.body_to_text(&body, None).unwrap(), "cached");

        // The converter does not reset; that is the extractor's job.
        let cache = body.as_stream_cache().unwrap();
        assert!(cache.is_consumed());
    }

    #[test]
    fn reads_file_backed_bodies() {
        let converter = DefaultTextConverter;
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "file payload").unwrap();

        let body = Body::File(file.path().to_path_buf());
        assert_eq!(converter.body_to_text(&body, None).unwrap(), "file payload");
    }

    #[test]
    fn missing_file_is_a_conversion_error() {
        let converter = DefaultTextConverter;
        let body = Body::File("/nonexistent/periscope-test".into());
        assert!(matches!(
            converter.body_to_text(&body, None),
            Err(ConversionError::Io(_))
        ));
    }

    #[test]
    fn declines_raw_streams() {
        let converter = DefaultTextConverter;
        let body = Body::InputStream(Box::new(std::io::empty()));
        assert!(matches!(
            converter.body_to_text(&body, None),
            Err(ConversionError::NotConvertible { .. })
        ));
    }

    #[test]
    fn memory_sources_convert_but_stream_sources_do_not() {
        let converter = DefaultTextConverter;
        assert_eq!(
            converter
                .body_to_text(&Body::Source(Source::Text("<a/>".into())), None)
                .unwrap(),
            "<a/>"
        );
        assert!(converter
            .body_to_text(
                &Body::Source(Source::Stream(Box::new(std::io::empty()))),
                None
            )
            .is_err());
    }
}
