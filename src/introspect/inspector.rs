// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! The message-inspection service facade.

use crate::config::{BodyLogOptions, DumpOptions};
use crate::convert::DefaultTextConverter;
use crate::exchange::{Exchange, Message};
use crate::traits::{Clock, ExchangeFormatter, SystemClock, TextConverter};

use super::body::{extract_body_as_string, extract_for_logging};
use super::history;
use super::xml;

/// Prefix prepended to log-line body extractions by default.
pub const MESSAGE_PREPEND: &str = "Message: ";

/// Zero-state diagnostics service over an injected converter and clock.
///
/// Every operation is synchronous, reads the passed-in message or
/// exchange, and is guaranteed to return a value: conversion failures,
/// missing data, and internal errors all degrade to placeholders or
/// sentinels instead of propagating. The only side effect anywhere is
/// rewinding a stream-cache body that was materialized.
///
/// `MessageInspector::new()` wires the built-in converter and the system
/// clock; hosts inject their own with [`MessageInspector::with`].
pub struct MessageInspector<C = DefaultTextConverter, K = SystemClock>
where
    C: TextConverter,
    K: Clock,
{
    converter: C,
    clock: K,
}

impl MessageInspector {
    /// An inspector over the built-in converter and the system clock.
    pub fn new() -> Self {
        Self {
            converter: DefaultTextConverter,
            clock: SystemClock,
        }
    }
}

impl Default for MessageInspector {
    fn default() -> Self {
        Self::new()
    }
}

impl<C, K> MessageInspector<C, K>
where
    C: TextConverter,
    K: Clock,
{
    /// An inspector over a host-supplied converter and clock.
    pub fn with(converter: C, clock: K) -> Self {
        Self { converter, clock }
    }

    /// Extract the body as a plain, unclipped string; stream caches are
    /// read and rewound. `None` when the body has no text form.
    pub fn extract_body_as_string(&self, message: &Message) -> Option<String> {
        extract_body_as_string(&self.converter, message, None)
    }

    /// Extract the body for logging, prefixed with `Message: `, with the
    /// stream allowance and character cap resolved from the exchange's
    /// context properties.
    pub fn extract_body_for_logging(&self, exchange: &Exchange) -> String {
        self.extract_body_for_logging_prepended(exchange, MESSAGE_PREPEND)
    }

    /// Same as [`extract_body_for_logging`], with a caller-chosen prefix.
    ///
    /// [`extract_body_for_logging`]: MessageInspector::extract_body_for_logging
    pub fn extract_body_for_logging_prepended(
        &self,
        exchange: &Exchange,
        prepend: &str,
    ) -> String {
        let options = BodyLogOptions::from_properties(exchange);
        extract_for_logging(
            &self.converter,
            exchange.message(),
            Some(exchange),
            prepend,
            options.get_allow_streams(),
            options.get_allow_files(),
            options.get_max_chars(),
        )
    }

    /// Extract the body for logging with explicit options.
    pub fn extract_body_for_logging_with(
        &self,
        message: &Message,
        prepend: &str,
        options: &BodyLogOptions,
    ) -> String {
        extract_for_logging(
            &self.converter,
            message,
            None,
            prepend,
            options.get_allow_streams(),
            options.get_allow_files(),
            options.get_max_chars(),
        )
    }

    /// Dump the exchange's message as a generic XML structure with the
    /// default options (body included, no indent, streams disallowed,
    /// files allowed, 128 KiB cap).
    pub fn dump_as_xml(&self, exchange: &Exchange) -> String {
        self.dump_as_xml_with(exchange, &DumpOptions::default())
    }

    /// Dump the exchange's message as a generic XML structure.
    pub fn dump_as_xml_with(&self, exchange: &Exchange, options: &DumpOptions) -> String {
        xml::dump_as_xml(&self.converter, exchange, options)
    }

    /// Dump the exchange's message history as a fixed-width table, with
    /// an optional exchange summary section and an optional stacktrace
    /// banner for the caller to append a trace under.
    ///
    /// `None` when there is no history; an empty string when table
    /// construction itself failed. Never an error: this is called from
    /// failure-diagnostic paths and must not cause a secondary failure.
    pub fn dump_message_history(
        &self,
        exchange: &Exchange,
        formatter: Option<&dyn ExchangeFormatter>,
        include_stacktrace_header: bool,
    ) -> Option<String> {
        history::dump_message_history(&self.clock, exchange, formatter, include_stacktrace_header)
    }
}
