// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::errors::FormatError;
use crate::exchange::Exchange;

/// Renders a one-off summary of an exchange for inclusion in diagnostic
/// dumps. Supplied by the host pipeline; failures are contained by the
/// caller and never propagate past the dump operation.
pub trait ExchangeFormatter: Send + Sync {
    fn format(&self, exchange: &Exchange) -> Result<String, FormatError>;
}
