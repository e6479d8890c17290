// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Absolute timestamps for classified schedule lines.

use jiff::ToSpan;
use jiff::civil::DateTime;

use crate::classifier::ScheduleLine;
use crate::config::DATETIME_FORMAT;
use crate::error::ScheduleError;
use crate::kickoff::Kickoff;
use crate::types::RecurrenceRule;

/// First occurrence and recurrence of a schedule line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EventTiming {
    /// Start of the first occurrence.
    pub start: DateTime,

    /// End of the first occurrence.
    pub end: DateTime,

    /// Cadence and occurrence count.
    pub rule: RecurrenceRule,
}

/// Anchors schedule lines to the semester calendar.
#[derive(Debug, Clone, Copy)]
pub struct EventDateCalculator<'a> {
    semester_start: &'a str,
    occurrence_count: u32,
}

impl<'a> EventDateCalculator<'a> {
    /// Creates a calculator for a semester starting on the given
    /// `DD-MM-YYYY` date, which is assumed to be a Monday.
    #[must_use]
    pub const fn new(semester_start: &'a str, occurrence_count: u32) -> Self {
        Self {
            semester_start,
            occurrence_count,
        }
    }

    /// Computes the first occurrence of a line.
    ///
    /// Lines with a kickoff date start on that date. Lines without a kickoff
    /// marker start in the first semester week, shifted from the semester
    /// start by the weekday offset. A marker without a date anchors the line
    /// to the semester start itself.
    pub fn compute(&self, line: &ScheduleLine) -> Result<EventTiming, ScheduleError> {
        let base = line.kickoff.date().unwrap_or(self.semester_start);
        let mut start = parse_datetime(base, &line.start_time)?;
        let mut end = parse_datetime(base, &line.end_time)?;

        if line.kickoff == Kickoff::Absent {
            let offset = i64::from(line.weekday.index());
            start = shift_days(start, offset)?;
            end = shift_days(end, offset)?;
        }

        Ok(EventTiming {
            start,
            end,
            rule: RecurrenceRule {
                recurrence: line.recurrence,
                count: self.occurrence_count,
            },
        })
    }
}

fn parse_datetime(date: &str, time: &str) -> Result<DateTime, ScheduleError> {
    let literal = format!("{date} {time}");
    DateTime::strptime(DATETIME_FORMAT, &literal)
        .map_err(|source| ScheduleError::DateParse { literal, source })
}

fn shift_days(dt: DateTime, days: i64) -> Result<DateTime, ScheduleError> {
    dt.checked_add(days.days())
        .map_err(|source| ScheduleError::DateParse {
            literal: dt.to_string(),
            source,
        })
}

#[cfg(test)]
mod tests {
    use jiff::civil::datetime;

    use super::*;
    use crate::tokenizer::tokenize;
    use crate::types::Recurrence;

    const SEMESTER_START: &str = "04-10-2021";

    fn compute(text: &str) -> Result<EventTiming, ScheduleError> {
        let line = ScheduleLine::classify(&tokenize(text))?;
        EventDateCalculator::new(SEMESTER_START, 100).compute(&line)
    }

    #[test]
    fn shifts_by_weekday_offset() {
        let timing = compute("Wednesday 09.00 - 10.30").unwrap();
        assert_eq!(timing.start, datetime(2021, 10, 6, 9, 0, 0, 0));
        assert_eq!(timing.end, datetime(2021, 10, 6, 10, 30, 0, 0));
        assert_eq!(timing.start.to_string(), "2021-10-06T09:00:00");
        assert_eq!(timing.end.to_string(), "2021-10-06T10:30:00");
        assert_eq!(timing.rule.recurrence, Recurrence::Weekly);
        assert_eq!(timing.rule.count, 100);
    }

    #[test]
    fn monday_is_not_shifted() {
        let timing = compute("Monday 08.15 - 09.45").unwrap();
        assert_eq!(timing.start, datetime(2021, 10, 4, 8, 15, 0, 0));
    }

    #[test]
    fn sunday_is_shifted_six_days() {
        let timing = compute("Sunday 10.00 - 11.00").unwrap();
        assert_eq!(timing.start, datetime(2021, 10, 10, 10, 0, 0, 0));
    }

    #[test]
    fn kickoff_date_is_taken_as_is() {
        let timing = compute("Friday 14.00 - 16.00 kick off 20.10.21").unwrap();
        assert_eq!(timing.start.to_string(), "2021-10-20T14:00:00");
        assert_eq!(timing.end.to_string(), "2021-10-20T16:00:00");
    }

    #[test]
    fn inert_kickoff_anchors_to_semester_start() {
        let timing = compute("Thursday 12.00 - 13.00 kick off").unwrap();
        assert_eq!(timing.start, datetime(2021, 10, 4, 12, 0, 0, 0));
        assert_eq!(timing.end, datetime(2021, 10, 4, 13, 0, 0, 0));
    }

    #[test]
    fn carries_biweekly_and_count() {
        let line = ScheduleLine::classify(&tokenize("Tuesday 10.00 - 12.00 biweekly")).unwrap();
        let timing = EventDateCalculator::new(SEMESTER_START, 14)
            .compute(&line)
            .unwrap();
        assert_eq!(timing.rule.recurrence, Recurrence::Biweekly);
        assert_eq!(timing.rule.count, 14);
        assert_eq!(timing.start, datetime(2021, 10, 5, 10, 0, 0, 0));
    }

    #[test]
    fn reports_malformed_time() {
        let err = compute("Monday 9h - 10h").unwrap_err();
        match err {
            ScheduleError::DateParse { literal, .. } => assert_eq!(literal, "04-10-2021 9h"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn reports_malformed_kickoff_date() {
        let err = compute("Monday 09.00 - 10.00 kick off 31.02.21").unwrap_err();
        assert!(matches!(err, ScheduleError::DateParse { .. }));
    }

    #[test]
    fn reports_malformed_semester_start() {
        let line = ScheduleLine::classify(&tokenize("Monday 09.00 - 10.00")).unwrap();
        let err = EventDateCalculator::new("2021-10-04", 100)
            .compute(&line)
            .unwrap_err();
        assert!(matches!(err, ScheduleError::DateParse { .. }));
    }
}
