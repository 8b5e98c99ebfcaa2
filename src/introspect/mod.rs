// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Safe, bounded diagnostic views of in-flight messages.
//!
//! Three capabilities make up the core:
//!
//! * body-for-logging extraction with a safety classifier, stream-reset
//!   discipline, and size clipping ([`MessageInspector::extract_body_for_logging`])
//! * a fixed-schema XML-like dump of headers and body
//!   ([`MessageInspector::dump_as_xml`])
//! * a fixed-width table of the message's processing history
//!   ([`MessageInspector::dump_message_history`])
//!
//! plus header ordering/copying helpers. All of it shares one guarantee:
//! no operation throws, and no operation leaves a message less readable
//! than it found it.

mod body;
mod escape;
mod headers;
mod history;
mod inspector;
mod xml;


pub use body::{classify, BodyKind, BODY_IS_NULL, BODY_NOT_LOGGED};
pub use escape::xml_escape;
pub use headers::{copy_headers, ordered_headers};
pub use inspector::{MessageInspector, MESSAGE_PREPEND};
