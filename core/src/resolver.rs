// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use jiff::tz::TimeZone;

use crate::calculator::EventDateCalculator;
use crate::classifier::ScheduleLine;
use crate::config::Config;
use crate::error::{ConfigError, ScheduleError};
use crate::event::ResolvedEvent;
use crate::slot::RawSlotRecord;
use crate::tokenizer::{TokenizedLine, tokenize_cell};

/// A schedule line that could not be resolved.
#[derive(Debug)]
pub struct LineFailure {
    /// Zero-based position of the slot in the input.
    pub slot_index: usize,

    /// Title of the slot the line belongs to.
    pub title: String,

    /// The offending line as written.
    pub line: String,

    /// Why the line was skipped.
    pub error: ScheduleError,
}

impl LineFailure {
    /// One-based slot number, as shown in diagnostics.
    #[must_use]
    pub fn slot_number(&self) -> usize {
        self.slot_index + 1
    }
}

/// Outcome of resolving a batch of slots.
#[derive(Debug, Default)]
pub struct BatchReport {
    /// Successfully resolved events, in input order.
    pub events: Vec<ResolvedEvent>,

    /// Lines that were skipped, in input order.
    pub failures: Vec<LineFailure>,
}

impl BatchReport {
    /// Whether every line was resolved.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }

    fn extend(&mut self, other: BatchReport) {
        self.events.extend(other.events);
        self.failures.extend(other.failures);
    }
}

/// Keeps the slots of one course, or all of them when `course` is `None`.
pub fn filter_course<'a, I>(
    slots: I,
    course: Option<&'a str>,
) -> impl Iterator<Item = &'a RawSlotRecord>
where
    I: IntoIterator<Item = &'a RawSlotRecord>,
{
    slots
        .into_iter()
        .filter(move |slot| slot.matches_course(course))
}

/// Resolves timetable slots into recurring events.
#[derive(Debug, Clone)]
pub struct ScheduleResolver {
    semester_start: String,
    time_zone: String,
    occurrence_count: u32,
}

impl ScheduleResolver {
    /// Creates a resolver from the configuration.
    ///
    /// The semester start must be set, but is not parsed here: a malformed
    /// date is reported for each line it affects.
    pub fn new(config: &Config) -> Result<Self, ConfigError> {
        let semester_start = config
            .semester_start
            .clone()
            .ok_or(ConfigError::MissingSemesterStart)?;

        if config.occurrence_count == 0 {
            return Err(ConfigError::InvalidOccurrenceCount);
        }

        TimeZone::get(&config.time_zone).map_err(|source| ConfigError::InvalidTimeZone {
            name: config.time_zone.clone(),
            source,
        })?;

        Ok(Self {
            semester_start,
            time_zone: config.time_zone.clone(),
            occurrence_count: config.occurrence_count,
        })
    }

    /// Resolves every slot, collecting events and failures.
    ///
    /// Failures never stop the batch.
    #[tracing::instrument(skip_all)]
    pub fn resolve_batch<'a, I>(&self, slots: I) -> BatchReport
    where
        I: IntoIterator<Item = &'a RawSlotRecord>,
    {
        let mut report = BatchReport::default();
        for (index, slot) in slots.into_iter().enumerate() {
            report.extend(self.resolve_slot(index, slot));
        }

        tracing::debug!(
            events = report.events.len(),
            failures = report.failures.len(),
            "batch resolved"
        );
        report
    }

    /// Resolves every line of one slot.
    pub fn resolve_slot(&self, slot_index: usize, slot: &RawSlotRecord) -> BatchReport {
        let mut report = BatchReport::default();
        let slot_number = slot_index + 1;
        let text = match slot.schedule_text() {
            Ok(text) => text,
            Err(e) => {
                tracing::trace!(slot = slot_number, "skipping slot: {e}");
                return report;
            }
        };

        for line in tokenize_cell(Some(text)) {
            match self.resolve_line(slot, &line) {
                Ok(event) => {
                    tracing::debug!(
                        slot = slot_number,
                        title = %event.title,
                        start = %event.start,
                        recurrence = %event.rule.recurrence,
                        "resolved schedule line"
                    );
                    report.events.push(event);
                }
                Err(error) => {
                    // Surfaced to the user by the caller, from the report.
                    tracing::debug!(
                        slot = slot_number,
                        line = line.raw,
                        "skipping schedule line: {error}"
                    );
                    report.failures.push(LineFailure {
                        slot_index,
                        title: slot.title(),
                        line: line.raw.to_string(),
                        error,
                    });
                }
            }
        }
        report
    }

    /// Resolves one tokenized line of a slot.
    pub fn resolve_line(
        &self,
        slot: &RawSlotRecord,
        line: &TokenizedLine<'_>,
    ) -> Result<ResolvedEvent, ScheduleError> {
        let schedule = ScheduleLine::classify(&line.tokens)?;
        let timing = EventDateCalculator::new(&self.semester_start, self.occurrence_count)
            .compute(&schedule)?;
        Ok(ResolvedEvent::new(slot, &schedule, timing, &self.time_zone))
    }
}
