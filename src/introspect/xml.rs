// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Structured (XML-like) message dumps.
//!
//! One fixed diagnostic schema:
//!
//! ```text
//! <message exchangeId="...">
//!   <headers>
//!     <header key="K" type="T">escaped-string-form</header>
//!   </headers>
//!   <body type="T">escaped-string-form</body>
//! </message>
//! ```
//!
//! Headers are emitted in ascending key order, every piece of text is
//! XML-escaped, and the body section is produced by the same gated
//! extraction used for log lines, so dumping is exactly as safe as
//! logging.

use crate::config::DumpOptions;
use crate::exchange::Exchange;
use crate::observability::messages::dump::HeaderConversionDropped;
use crate::traits::TextConverter;

use super::body::extract_for_logging;
use super::escape::xml_escape;
use super::headers::ordered_headers;

pub(crate) fn dump_as_xml(
    converter: &dyn TextConverter,
    exchange: &Exchange,
    options: &DumpOptions,
) -> String {
    let message = exchange.message();
    let prefix = " ".repeat(options.get_indent());
    let mut out = String::new();

    out.push_str(&prefix);
    out.push_str("<message exchangeId=\"");
    out.push_str(&xml_escape(exchange.id()));
    out.push_str("\">\n");

    if message.has_headers() {
        out.push_str(&prefix);
        out.push_str("  <headers>\n");

        for (key, value) in ordered_headers(message) {
            out.push_str(&prefix);
            out.push_str("    <header key=\"");
            out.push_str(&xml_escape(key));
            out.push_str("\" type=\"");
            out.push_str(&xml_escape(value.type_name()));
            out.push_str("\">");

            match converter.value_to_text(value, Some(exchange)) {
                Ok(text) => out.push_str(&xml_escape(&text)),
                Err(error) => {
                    // Emit the header with empty text rather than fail the dump.
                    tracing::debug!("{}", HeaderConversionDropped { key, error: &error });
                }
            }

            out.push_str("</header>\n");
        }

        out.push_str(&prefix);
        out.push_str("  </headers>\n");
    }

    if options.get_include_body() {
        out.push_str(&prefix);
        out.push_str("  <body");
        if let Some(type_name) = message.body_type_name() {
            out.push_str(" type=\"");
            out.push_str(&xml_escape(type_name));
            out.push('"');
        }
        out.push('>');

        let body_text = extract_for_logging(
            converter,
            message,
            Some(exchange),
            "",
            options.get_allow_streams(),
            options.get_allow_files(),
            options.get_max_chars(),
        );
        out.push_str(&xml_escape(&body_text));

        out.push_str("</body>\n");
    }

    out.push_str(&prefix);
    out.push_str("</message>");
    out
}
