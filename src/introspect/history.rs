// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Fixed-width message-history tables.
//!
//! Renders the route hops a message has taken as a table of
//! routeId / processorId / label / elapsed-time columns, topped by a
//! synthetic origin row for where the exchange entered the pipeline.
//! This path is invoked from failure-diagnostic code, so its outer
//! boundary swallows every internal failure: the caller gets a table,
//! `None` (nothing to show), or an empty string, never an error.

use crate::errors::HistoryError;
use crate::exchange::Exchange;
use crate::observability::messages::dump::HistoryDumpFailed;
use crate::traits::{Clock, ExchangeFormatter};

/// Separator width under every section banner.
const SEPARATOR_WIDTH: usize = 139;

/// Dump the exchange's message history as a human-readable table.
///
/// Returns `None` when the exchange carries no history entries so callers
/// can distinguish "nothing to show" from "formatted but empty". Internal
/// failures collapse to `Some("")`.
pub(crate) fn dump_message_history(
    clock: &dyn Clock,
    exchange: &Exchange,
    formatter: Option<&dyn ExchangeFormatter>,
    include_stacktrace_header: bool,
) -> Option<String> {
    match try_dump(clock, exchange, formatter, include_stacktrace_header) {
        Ok(result) => result,
        Err(error) => {
            tracing::debug!(
                "{}",
                HistoryDumpFailed {
                    exchange_id: exchange.id(),
                    error: &error,
                }
            );
            Some(String::new())
        }
    }
}

fn try_dump(
    clock: &dyn Clock,
    exchange: &Exchange,
    formatter: Option<&dyn ExchangeFormatter>,
    include_stacktrace_header: bool,
) -> Result<Option<String>, HistoryError> {
    let history = exchange.history();
    if history.is_empty() {
        return Ok(None);
    }

    let separator = "-".repeat(SEPARATOR_WIDTH);
    let mut out = String::new();

    out.push('\n');
    out.push_str("Message History\n");
    out.push_str(&separator);
    out.push('\n');
    out.push_str(&format!(
        "{:<20} {:<20} {:<80} {:<12}",
        "RouteId", "ProcessorId", "Processor", "Elapsed (ms)"
    ));
    out.push('\n');

    // Synthetic origin row: where the exchange entered the pipeline.
    let route_id = exchange.from_route_id().unwrap_or("");
    let label = exchange.from_endpoint().unwrap_or("");
    let elapsed = exchange
        .created_at()
        .map(|created| elapsed_millis(clock, created))
        .unwrap_or(0);
    out.push_str(&data_row(route_id, route_id, label, elapsed));
    out.push('\n');

    for entry in history {
        out.push_str(&data_row(
            &entry.route_id,
            &entry.node_id,
            &entry.label,
            entry.elapsed_millis,
        ));
        out.push('\n');
    }

    if let Some(formatter) = formatter {
        out.push_str("\nExchange\n");
        out.push_str(&separator);
        out.push('\n');
        out.push_str(&formatter.format(exchange)?);
        out.push('\n');
    }

    if include_stacktrace_header {
        out.push_str("\nStacktrace\n");
        out.push_str(&separator);
    }

    Ok(Some(out))
}

/// One table row: columns space-padded and hard-truncated to fixed
/// widths, values longer than the width are cut, not wrapped.
fn data_row(route_id: &str, node_id: &str, label: &str, elapsed_millis: i64) -> String {
    format!(
        "[{:<18.18}] [{:<18.18}] [{:<78.78}] [{:>10.10}]",
        route_id,
        node_id,
        label,
        elapsed_millis.to_string()
    )
}

fn elapsed_millis(clock: &dyn Clock, created: std::time::SystemTime) -> i64 {
    clock
        .now()
        .duration_since(created)
        .map(|elapsed| elapsed.as_millis() as i64)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::FormatError;
    use crate::exchange::{Body, Message, MessageHistoryEntry};
    use crate::traits::SystemClock;
    use std::time::{Duration, SystemTime};

    /// A clock pinned to a fixed instant.
    struct FixedClock(SystemTime);

    impl Clock for FixedClock {
        fn now(&self) -> SystemTime {
            self.0
        }
    }

    fn exchange_with_history(entries: usize) -> Exchange {
        let mut exchange = Exchange::new("ex-history", Message::new(Body::text("x")));
        for i in 0..entries {
            exchange.add_history_entry(MessageHistoryEntry::new(
                "route-1",
                format!("node-{}", i),
                format!("processor-{}", i),
                i as i64,
            ));
        }
        exchange
    }

    #[test]
    fn no_history_yields_absent_not_empty() {
        let exchange = Exchange::new("ex-empty", Message::new(Body::text("x")));
        let result = dump_message_history(&SystemClock, &exchange, None, false);
        assert_eq!(result, None);
    }

    #[test]
    fn n_entries_yield_n_plus_one_data_rows() {
        let exchange = exchange_with_history(3);
        let out = dump_message_history(&SystemClock, &exchange, None, false).unwrap();

        let data_rows = out.lines().filter(|l| l.starts_with('[')).count();
        assert_eq!(data_rows, 4);
    }

    #[test]
    fn banner_and_header_row_match_contract() {
        let exchange = exchange_with_history(1);
        let out = dump_message_history(&SystemClock, &exchange, None, false).unwrap();

        let mut lines = out.lines();
        assert_eq!(lines.next(), Some(""));
        assert_eq!(lines.next(), Some("Message History"));
        assert_eq!(lines.next(), Some("-".repeat(139).as_str()));

        let header = lines.next().unwrap();
        assert_eq!(
            header,
            format!(
                "{:<20} {:<20} {:<80} {:<12}",
                "RouteId", "ProcessorId", "Processor", "Elapsed (ms)"
            )
        );
    }

    #[test]
    fn origin_row_uses_route_endpoint_and_created_timestamp() {
        let now = SystemTime::UNIX_EPOCH + Duration::from_secs(1_000_000);
        let mut exchange = exchange_with_history(1);
        exchange.set_from_route_id("route-1");
        exchange.set_from_endpoint("queue://inbound");
        exchange.set_created_at(now - Duration::from_millis(250));

        let out = dump_message_history(&FixedClock(now), &exchange, None, false).unwrap();
        let origin = out.lines().find(|l| l.starts_with('[')).unwrap();

        assert_eq!(
            origin,
            format!(
                "[{:<18.18}] [{:<18.18}] [{:<78.78}] [{:>10.10}]",
                "route-1", "route-1", "queue://inbound", "250"
            )
        );
    }

    #[test]
    fn missing_origin_data_renders_empty_with_zero_elapsed() {
        let exchange = exchange_with_history(1);
        let out = dump_message_history(&SystemClock, &exchange, None, false).unwrap();
        let origin = out.lines().find(|l| l.starts_with('[')).unwrap();

        assert_eq!(
            origin,
            format!(
                "[{:<18.18}] [{:<18.18}] [{:<78.78}] [{:>10.10}]",
                "", "", "", "0"
            )
        );
    }

    #[test]
    fn long_values_are_cut_not_wrapped() {
        let mut exchange = Exchange::new("ex-wide", Message::new(Body::text("x")));
        exchange.add_history_entry(MessageHistoryEntry::new(
            "R".repeat(40),
            "N".repeat(40),
            "L".repeat(120),
            1234567890123,
        ));

        let out = dump_message_history(&SystemClock, &exchange, None, false).unwrap();
        let row = out.lines().filter(|l| l.starts_with('[')).nth(1).unwrap();

        assert!(row.contains(&format!("[{}]", "R".repeat(18))));
        assert!(row.contains(&format!("[{}]", "N".repeat(18))));
        assert!(row.contains(&format!("[{}]", "L".repeat(78))));
        assert!(row.contains("[1234567890]"));
    }

    #[test]
    fn formatter_section_is_appended_under_its_banner() {
        struct Summary;

        impl ExchangeFormatter for Summary {
            fn format(&self, exchange: &Exchange) -> Result<String, FormatError> {
                Ok(format!("exchange {} summary", exchange.id()))
            }
        }

        let exchange = exchange_with_history(1);
        let out = dump_message_history(&SystemClock, &exchange, Some(&Summary), false).unwrap();

        assert!(out.contains("\nExchange\n"));
        assert!(out.contains("exchange ex-history summary\n"));
    }

    #[test]
    fn stacktrace_header_is_banner_only() {
        let exchange = exchange_with_history(1);
        let out = dump_message_history(&SystemClock, &exchange, None, true).unwrap();

        assert!(out.ends_with(&format!("\nStacktrace\n{}", "-".repeat(139))));
    }

    #[test]
    fn formatter_failure_collapses_to_empty_string() {
        struct Exploding;

        impl ExchangeFormatter for Exploding {
            fn format(&self, _exchange: &Exchange) -> Result<String, FormatError> {
                Err(FormatError::Summary("summary source unavailable".into()))
            }
        }

        let exchange = exchange_with_history(2);
        let out = dump_message_history(&SystemClock, &exchange, Some(&Exploding), false);

        assert_eq!(out, Some(String::new()));
    }

    #[test]
    fn clock_before_creation_yields_zero_elapsed() {
        let now = SystemTime::UNIX_EPOCH + Duration::from_secs(10);
        let mut exchange = exchange_with_history(1);
        exchange.set_created_at(now + Duration::from_secs(5));

        let out = dump_message_history(&FixedClock(now), &exchange, None, false).unwrap();
        let origin = out.lines().find(|l| l.starts_with('[')).unwrap();
        assert!(origin.ends_with(&format!("[{:>10.10}]", "0")));
    }
}
