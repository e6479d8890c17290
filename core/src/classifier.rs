// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Classification of tokenized lines into weekly meeting patterns.

use crate::error::ScheduleError;
use crate::kickoff::Kickoff;
use crate::tokenizer::Token;
use crate::types::{Recurrence, Weekday};

const KW_BIWEEKLY: &str = "biweekly";

/// One weekly meeting pattern of a slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleLine {
    /// Day of the meeting.
    pub weekday: Weekday,

    /// Start time as `HH:MM`.
    pub start_time: String,

    /// End time as `HH:MM`. Not checked against the start time.
    pub end_time: String,

    /// Weekly or biweekly cadence.
    pub recurrence: Recurrence,

    /// Tokens following the time range.
    pub qualifiers: Vec<Token>,

    /// First-occurrence override.
    pub kickoff: Kickoff,
}

impl ScheduleLine {
    /// Classifies the tokens of one schedule line.
    ///
    /// The first three tokens are the weekday, start time and end time. The
    /// rest are qualifiers that select the cadence and an optional kickoff.
    pub fn classify(tokens: &[Token]) -> Result<Self, ScheduleError> {
        let [weekday, start, end, qualifiers @ ..] = tokens else {
            return Err(ScheduleError::IncompleteLine {
                tokens: token_strings(tokens),
            });
        };

        let weekday =
            Weekday::from_name(weekday.as_str()).ok_or_else(|| ScheduleError::UnrecognizedWeekday {
                tokens: token_strings(tokens),
            })?;

        Ok(ScheduleLine {
            weekday,
            start_time: canonical_time(start),
            end_time: canonical_time(end),
            recurrence: classify_recurrence(qualifiers),
            qualifiers: qualifiers.to_vec(),
            kickoff: Kickoff::resolve(qualifiers),
        })
    }
}

/// Biweekly if any qualifier is exactly `biweekly`, weekly otherwise.
#[must_use]
pub fn classify_recurrence(qualifiers: &[Token]) -> Recurrence {
    if qualifiers.iter().any(|t| t.is(KW_BIWEEKLY)) {
        Recurrence::Biweekly
    } else {
        Recurrence::Weekly
    }
}

/// Timetables write `09.00`; the canonical form is `09:00`.
fn canonical_time(token: &Token) -> String {
    token.as_str().replace('.', ":")
}

fn token_strings(tokens: &[Token]) -> Vec<String> {
    tokens.iter().map(ToString::to_string).collect()
}
