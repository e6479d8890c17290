// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use thiserror::Error;

/// Errors raised while resolving a single schedule line.
///
/// Every variant is recoverable at the line level: the resolver records it and
/// moves on to the next line or slot.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum ScheduleError {
    /// The schedule cell is not textual, e.g. an empty table cell.
    #[error("schedule cell is empty or not textual")]
    MalformedCell,

    /// The line has fewer tokens than the mandatory weekday/start/end triple.
    #[error("incomplete schedule line: {}", .tokens.join(", "))]
    IncompleteLine {
        /// Tokens of the offending line.
        tokens: Vec<String>,
    },

    /// The leading token is not one of the seven weekday names.
    #[error("unable to understand: {}", .tokens.join(", "))]
    UnrecognizedWeekday {
        /// Tokens of the offending line.
        tokens: Vec<String>,
    },

    /// The combined date and time literal could not be parsed.
    #[error("invalid date or time '{literal}': {source}")]
    DateParse {
        /// The `DD-MM-YYYY HH:MM` literal that failed.
        literal: String,

        /// Underlying parse error.
        #[source]
        source: jiff::Error,
    },
}

impl ScheduleError {
    /// Whether this failure should be surfaced as a diagnostic.
    ///
    /// Missing cells are frequent and expected, so they are skipped silently.
    #[must_use]
    pub fn is_reportable(&self) -> bool {
        !matches!(self, Self::MalformedCell)
    }
}

/// Errors in the resolver configuration.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum ConfigError {
    /// No semester start date was configured.
    #[error("semester start date is required (expected DD-MM-YYYY)")]
    MissingSemesterStart,

    /// The semester start date does not match `DD-MM-YYYY`.
    #[error("invalid semester start date '{literal}': {source}")]
    InvalidSemesterStart {
        /// The configured literal.
        literal: String,

        /// Underlying parse error.
        #[source]
        source: jiff::Error,
    },

    /// The time zone is not a known IANA name.
    #[error("unknown time zone '{name}': {source}")]
    InvalidTimeZone {
        /// The configured name.
        name: String,

        /// Underlying lookup error.
        #[source]
        source: jiff::Error,
    },

    /// The recurrence occurrence count must be positive.
    #[error("occurrence count must be greater than zero")]
    InvalidOccurrenceCount,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn echoes_tokens_in_weekday_error() {
        let err = ScheduleError::UnrecognizedWeekday {
            tokens: vec!["Funday".into(), "09:00".into(), "10:00".into()],
        };
        assert_eq!(err.to_string(), "unable to understand: Funday, 09:00, 10:00");
    }

    #[test]
    fn malformed_cell_is_not_reportable() {
        assert!(!ScheduleError::MalformedCell.is_reportable());
        assert!(ScheduleError::IncompleteLine { tokens: vec![] }.is_reportable());
    }
}
