// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use jiff::civil::Date;

use crate::error::ConfigError;

/// The name of the application.
pub const APP_NAME: &str = "slotcal";

/// Time zone attached to every resolved event.
pub const DEFAULT_TIME_ZONE: &str = "Europe/Berlin";

/// Number of occurrences of every recurring series.
pub const DEFAULT_OCCURRENCE_COUNT: u32 = 100;

/// Format of semester start and kickoff dates.
pub const DATE_FORMAT: &str = "%d-%m-%Y";

/// Format of a date combined with a time of day.
pub const DATETIME_FORMAT: &str = "%d-%m-%Y %H:%M";

/// Configuration of the schedule resolver.
#[derive(Debug, Clone, serde::Deserialize)]
pub struct Config {
    /// First day of the semester as `DD-MM-YYYY`, expected to be a Monday.
    #[serde(default)]
    pub semester_start: Option<String>,

    /// Time zone name attached to resolved events.
    #[serde(default = "default_time_zone")]
    pub time_zone: String,

    /// Number of occurrences of every recurring series.
    #[serde(default = "default_occurrence_count")]
    pub occurrence_count: u32,
}

fn default_time_zone() -> String {
    DEFAULT_TIME_ZONE.to_string()
}

const fn default_occurrence_count() -> u32 {
    DEFAULT_OCCURRENCE_COUNT
}

impl Default for Config {
    fn default() -> Self {
        Self {
            semester_start: None,
            time_zone: default_time_zone(),
            occurrence_count: default_occurrence_count(),
        }
    }
}

impl Config {
    /// Creates a configuration with the given semester start and defaults.
    #[must_use]
    pub fn with_semester_start(semester_start: impl Into<String>) -> Self {
        Self {
            semester_start: Some(semester_start.into()),
            ..Self::default()
        }
    }

    /// Parses the semester start date.
    ///
    /// Resolution itself never needs this: a malformed start date surfaces
    /// as a per-line parse error. Callers use it to validate up front.
    pub fn semester_start_date(&self) -> Result<Date, ConfigError> {
        let literal = self
            .semester_start
            .as_deref()
            .ok_or(ConfigError::MissingSemesterStart)?;

        Date::strptime(DATE_FORMAT, literal).map_err(|source| ConfigError::InvalidSemesterStart {
            literal: literal.to_string(),
            source,
        })
    }
}
