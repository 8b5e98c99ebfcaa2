// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! The pipeline data model at this crate's interface boundary.
//!
//! Messages, their bodies, and the exchange context are owned and mutated
//! by the surrounding pipeline; diagnostic code reads them and, at most,
//! rewinds a stream-cache cursor.

mod body;
mod exchange;
mod history;
mod message;
mod value;

pub use body::{Body, Opaque, Source, StreamCache};
pub use exchange::Exchange;
pub use history::MessageHistoryEntry;
pub use message::{Message, CONTENT_ENCODING, CONTENT_TYPE};
pub use value::Value;
