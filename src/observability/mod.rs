// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Observability module for structured logging of diagnostic operations.
//!
//! Message types follow a struct-based pattern with a `Display`
//! implementation so log call sites stay free of magic strings and output
//! stays consistent across the crate.
//!
//! # Organization
//!
//! * `messages::body` - body extraction events (clipping, fallbacks, resets)
//! * `messages::dump` - structured dump and history table events
//!
//! Diagnostic output itself is never routed through these messages: logging
//! here is about the act of dumping, and must not alter the returned
//! strings.

pub mod messages;
