// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Custom assertion helpers for integration tests.

use slotcal_core::{LineFailure, Recurrence, ResolvedEvent, ScheduleError};

/// Asserts the ISO start, end and cadence of an event.
///
/// # Panics
///
/// Panics if any of the values differ.
pub fn assert_event_at(event: &ResolvedEvent, start: &str, end: &str, recurrence: Recurrence) {
    assert_eq!(event.start_iso(), start, "start mismatch for {}", event.title);
    assert_eq!(event.end_iso(), end, "end mismatch for {}", event.title);
    assert_eq!(event.recurrence(), recurrence, "recurrence mismatch for {}", event.title);
}

/// Asserts that a failure carries the expected kind of error.
///
/// # Panics
///
/// Panics if `matches` returns false for the failure's error.
#[allow(dead_code)]
pub fn assert_failure_kind(failure: &LineFailure, matches: impl Fn(&ScheduleError) -> bool) {
    assert!(
        matches(&failure.error),
        "unexpected error for line '{}': {}",
        failure.line,
        failure.error
    );
}
