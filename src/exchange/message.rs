// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! The unit of data flowing through the pipeline: headers plus a body.

use std::collections::HashMap;

use super::body::Body;
use super::value::Value;

/// Well-known header carrying the MIME content type.
pub const CONTENT_TYPE: &str = "Content-Type";

/// Well-known header carrying the MIME content encoding.
pub const CONTENT_ENCODING: &str = "Content-Encoding";

/// A message: a header map with unique keys and a single body.
///
/// Storage order of headers is irrelevant; diagnostic output sorts keys.
/// The pipeline mutates messages as they move between processors; this
/// crate only reads them, apart from rewinding a stream-cache body's
/// cursor, which is not a semantic mutation.
#[derive(Debug, Default)]
pub struct Message {
    headers: HashMap<String, Value>,
    body: Body,
}

impl Message {
    pub fn new(body: Body) -> Self {
        Self {
            headers: HashMap::new(),
            body,
        }
    }

    pub fn body(&self) -> &Body {
        &self.body
    }

    pub fn set_body(&mut self, body: Body) {
        self.body = body;
    }

    /// The body's type name, or `None` if there is no body or its type is
    /// unresolvable.
    pub fn body_type_name(&self) -> Option<&str> {
        self.body.type_name()
    }

    /// If the body is a stream cache, rewind it so it can be read again.
    /// No-op for every other body shape.
    pub fn reset_stream_cache(&self) {
        if let Body::StreamCache(cache) = &self.body {
            cache.reset();
        }
    }

    pub fn headers(&self) -> &HashMap<String, Value> {
        &self.headers
    }

    pub fn has_headers(&self) -> bool {
        !self.headers.is_empty()
    }

    pub fn header(&self, key: &str) -> Option<&Value> {
        self.headers.get(key)
    }

    pub fn set_header(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.headers.insert(key.into(), value.into());
    }

    pub fn remove_header(&mut self, key: &str) -> Option<Value> {
        self.headers.remove(key)
    }

    /// The MIME content type header, if set to a string value.
    pub fn content_type(&self) -> Option<&str> {
        self.header(CONTENT_TYPE).and_then(Value::as_str)
    }

    /// The MIME content encoding header, if set to a string value.
    pub fn content_encoding(&self) -> Option<&str> {
        self.header(CONTENT_ENCODING).and_then(Value::as_str)
    }
}
