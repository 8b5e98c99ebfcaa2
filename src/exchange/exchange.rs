// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! The processing context wrapping one message.

use std::collections::HashMap;
use std::time::SystemTime;

use crate::traits::PropertyLookup;

use super::history::MessageHistoryEntry;
use super::message::Message;

/// The per-unit-of-work context around one [`Message`].
///
/// Owned by the pipeline for the lifetime of one unit of work; this crate
/// only borrows it. Carries the identifiers and metadata diagnostic output
/// draws on: a string property bag (which doubles as the context-property
/// lookup for diagnostic options), the append-only processing history,
/// the creation timestamp, and the origin route/endpoint descriptors.
#[derive(Debug, Default)]
pub struct Exchange {
    id: String,
    message: Message,
    properties: HashMap<String, String>,
    history: Vec<MessageHistoryEntry>,
    created_at: Option<SystemTime>,
    from_route_id: Option<String>,
    from_endpoint: Option<String>,
}

impl Exchange {
    pub fn new(id: impl Into<String>, message: Message) -> Self {
        Self {
            id: id.into(),
            message,
            ..Self::default()
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn message(&self) -> &Message {
        &self.message
    }

    pub fn message_mut(&mut self) -> &mut Message {
        &mut self.message
    }

    pub fn set_property(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.properties.insert(name.into(), value.into());
    }

    /// Processing history in traversal order.
    pub fn history(&self) -> &[MessageHistoryEntry] {
        &self.history
    }

    pub fn add_history_entry(&mut self, entry: MessageHistoryEntry) {
        self.history.push(entry);
    }

    pub fn created_at(&self) -> Option<SystemTime> {
        self.created_at
    }

    pub fn set_created_at(&mut self, created_at: SystemTime) {
        self.created_at = Some(created_at);
    }

    /// The id of the route the exchange entered the pipeline on, if known.
    pub fn from_route_id(&self) -> Option<&str> {
        self.from_route_id.as_deref()
    }

    pub fn set_from_route_id(&mut self, route_id: impl Into<String>) {
        self.from_route_id = Some(route_id.into());
    }

    /// The sanitized URI of the endpoint the exchange originated from.
    pub fn from_endpoint(&self) -> Option<&str> {
        self.from_endpoint.as_deref()
    }

    pub fn set_from_endpoint(&mut self, endpoint_uri: impl Into<String>) {
        self.from_endpoint = Some(endpoint_uri.into());
    }
}

impl PropertyLookup for Exchange {
    fn property(&self, name: &str) -> Option<&str> {
        self.properties.get(name).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::exchange::Body;

    #[test]
    fn properties_resolve_through_lookup_trait() {
        let mut exchange = Exchange::new("ex-1", Message::new(Body::text("x")));
        assert_eq!(exchange.property("missing"), None);

        exchange.set_property("log.debug.body.max_chars", "50");
        assert_eq!(exchange.property("log.debug.body.max_chars"), Some("50"));
    }

    #[test]
    fn history_preserves_traversal_order() {
        let mut exchange = Exchange::new("ex-2", Message::default());
        exchange.add_history_entry(MessageHistoryEntry::new("route-a", "n1", "first", 3));
        exchange.add_history_entry(MessageHistoryEntry::new("route-a", "n2", "second", 7));

        let ids: Vec<&str> = exchange.history().iter().map(|h| h.node_id.as_str()).collect();
        assert_eq!(ids, vec!["n1", "n2"]);
    }
}
