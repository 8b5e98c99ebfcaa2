// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Processing-history records.

/// One processing-node visit during a message's traversal.
///
/// The pipeline appends one entry each time the message crosses a node;
/// the sequence order is the traversal order. Entries are never mutated
/// after creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageHistoryEntry {
    pub route_id: String,
    pub node_id: String,
    pub label: String,
    pub elapsed_millis: i64,
}

impl MessageHistoryEntry {
    pub fn new(
        route_id: impl Into<String>,
        node_id: impl Into<String>,
        label: impl Into<String>,
        elapsed_millis: i64,
    ) -> Self {
        Self {
            route_id: route_id.into(),
            node_id: node_id.into(),
            label: label.into(),
            elapsed_millis,
        }
    }
}
