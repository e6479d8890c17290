// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use jiff::civil::DateTime;

use crate::calculator::EventTiming;
use crate::classifier::ScheduleLine;
use crate::slot::RawSlotRecord;
use crate::types::{Recurrence, RecurrenceRule, Weekday};

/// A recurring calendar event ready to be created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedEvent {
    /// Event title.
    pub title: String,

    /// Event location.
    pub location: String,

    /// Start of the first occurrence, local to `time_zone`.
    pub start: DateTime,

    /// End of the first occurrence, local to `time_zone`.
    pub end: DateTime,

    /// IANA name of the time zone of `start` and `end`.
    pub time_zone: String,

    /// Cadence and occurrence count.
    pub rule: RecurrenceRule,

    /// Free-text description.
    pub description: String,

    /// Weekday written in the schedule line.
    pub weekday: Weekday,
}

impl ResolvedEvent {
    pub(crate) fn new(
        slot: &RawSlotRecord,
        line: &ScheduleLine,
        timing: EventTiming,
        time_zone: &str,
    ) -> Self {
        Self {
            title: slot.title(),
            location: slot.location().to_string(),
            start: timing.start,
            end: timing.end,
            time_zone: time_zone.to_string(),
            rule: timing.rule,
            description: slot.description(),
            weekday: line.weekday,
        }
    }

    /// ISO 8601 local start, e.g. `2021-10-06T09:00:00`.
    #[must_use]
    pub fn start_iso(&self) -> String {
        self.start.to_string()
    }

    /// ISO 8601 local end.
    #[must_use]
    pub fn end_iso(&self) -> String {
        self.end.to_string()
    }

    /// Weekly or biweekly.
    #[must_use]
    pub fn recurrence(&self) -> Recurrence {
        self.rule.recurrence
    }
}
