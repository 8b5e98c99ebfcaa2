// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Deterministic header views and header copying.

use crate::exchange::{Message, Value};

/// A key-sorted view of a message's headers.
///
/// Order is strictly ascending lexicographic byte order on the raw key,
/// so diagnostic output is deterministic for any input header set,
/// including keys differing only in case.
pub fn ordered_headers(message: &Message) -> Vec<(&str, &Value)> {
    let mut headers: Vec<(&str, &Value)> = message
        .headers()
        .iter()
        .map(|(key, value)| (key.as_str(), value))
        .collect();
    headers.sort_by(|a, b| a.0.cmp(b.0));
    headers
}

/// Copy headers from `source` into `target`.
///
/// With `override_existing` set, every source header lands in the target;
/// otherwise only keys the target does not already carry. No-op when the
/// source has no headers. Values are cloned as-is, never reformatted.
pub fn copy_headers(source: &Message, target: &mut Message, override_existing: bool) {
    if !source.has_headers() {
        return;
    }

    for (key, value) in source.headers() {
        if override_existing || target.header(key).is_none() {
            target.set_header(key.clone(), value.clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::exchange::Body;

    fn message_with_headers(headers: &[(&str, &str)]) -> Message {
        let mut message = Message::new(Body::Null);
        for (key, value) in headers {
            message.set_header(*key, *value);
        }
        message
    }

    #[test]
    fn ordered_headers_sorts_ascending() {
        let message = message_with_headers(&[("charlie", "3"), ("alpha", "1"), ("bravo", "2")]);
        let keys: Vec<&str> = ordered_headers(&message).iter().map(|(k, _)| *k).collect();
        assert_eq!(keys, vec!["alpha", "bravo", "charlie"]);
    }

    #[test]
    fn ordered_headers_distinguishes_case_and_alphanumerics() {
        let message = message_with_headers(&[("b2", "x"), ("B1", "x"), ("a", "x"), ("A", "x")]);
        let keys: Vec<&str> = ordered_headers(&message).iter().map(|(k, _)| *k).collect();
        // Uppercase sorts before lowercase in byte order.
        assert_eq!(keys, vec!["A", "B1", "a", "b2"]);
    }

    #[test]
    fn copy_headers_without_override_keeps_existing() {
        let source = message_with_headers(&[("id", "new"), ("extra", "e")]);
        let mut target = message_with_headers(&[("id", "original")]);

        copy_headers(&source, &mut target, false);

        assert_eq!(target.header("id"), Some(&Value::from("original")));
        assert_eq!(target.header("extra"), Some(&Value::from("e")));
    }

    #[test]
    fn copy_headers_with_override_replaces_existing() {
        let source = message_with_headers(&[("id", "new")]);
        let mut target = message_with_headers(&[("id", "original")]);

        copy_headers(&source, &mut target, true);

        assert_eq!(target.header("id"), Some(&Value::from("new")));
    }

    #[test]
    fn copy_headers_from_empty_source_is_noop() {
        let source = Message::new(Body::Null);
        let mut target = message_with_headers(&[("id", "original")]);

        copy_headers(&source, &mut target, true);

        assert_eq!(target.headers().len(), 1);
        assert_eq!(target.header("id"), Some(&Value::from("original")));
    }
}
