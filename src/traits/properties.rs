// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

/// Read-only access to named context properties.
///
/// Diagnostic options are resolved through this lookup at call time and
/// never cached across calls.
pub trait PropertyLookup {
    fn property(&self, name: &str) -> Option<&str>;
}
