// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::fmt;
use std::str::FromStr;

/// Day of the week, in the Monday-first order used by timetables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Weekday {
    /// Monday, index 0.
    Monday,

    /// Tuesday, index 1.
    Tuesday,

    /// Wednesday, index 2.
    Wednesday,

    /// Thursday, index 3.
    Thursday,

    /// Friday, index 4.
    Friday,

    /// Saturday, index 5.
    Saturday,

    /// Sunday, index 6.
    Sunday,
}

impl Weekday {
    /// All weekdays, Monday first.
    pub const ALL: [Weekday; 7] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
        Weekday::Sunday,
    ];

    /// The English name as written in schedule text, e.g. `Monday`.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
            Weekday::Saturday => "Saturday",
            Weekday::Sunday => "Sunday",
        }
    }

    /// Zero-based offset from Monday.
    #[must_use]
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Looks up a weekday by its exact, case-sensitive name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|day| day.name() == name)
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Weekday {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| format!("unknown weekday: {s}"))
    }
}

impl From<Weekday> for jiff::civil::Weekday {
    fn from(day: Weekday) -> Self {
        match day {
            Weekday::Monday => jiff::civil::Weekday::Monday,
            Weekday::Tuesday => jiff::civil::Weekday::Tuesday,
            Weekday::Wednesday => jiff::civil::Weekday::Wednesday,
            Weekday::Thursday => jiff::civil::Weekday::Thursday,
            Weekday::Friday => jiff::civil::Weekday::Friday,
            Weekday::Saturday => jiff::civil::Weekday::Saturday,
            Weekday::Sunday => jiff::civil::Weekday::Sunday,
        }
    }
}

impl From<jiff::civil::Weekday> for Weekday {
    fn from(day: jiff::civil::Weekday) -> Self {
        match day {
            jiff::civil::Weekday::Monday => Weekday::Monday,
            jiff::civil::Weekday::Tuesday => Weekday::Tuesday,
            jiff::civil::Weekday::Wednesday => Weekday::Wednesday,
            jiff::civil::Weekday::Thursday => Weekday::Thursday,
            jiff::civil::Weekday::Friday => Weekday::Friday,
            jiff::civil::Weekday::Saturday => Weekday::Saturday,
            jiff::civil::Weekday::Sunday => Weekday::Sunday,
        }
    }
}

/// Cadence of a recurring meeting.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Recurrence {
    /// Every week.
    #[default]
    Weekly,

    /// Every other week.
    Biweekly,
}

impl Recurrence {
    /// Upper-case name handed to calendar collaborators.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Recurrence::Weekly => "WEEKLY",
            Recurrence::Biweekly => "BIWEEKLY",
        }
    }

    /// Week interval in RRULE terms.
    #[must_use]
    pub const fn interval(self) -> u32 {
        match self {
            Recurrence::Weekly => 1,
            Recurrence::Biweekly => 2,
        }
    }
}

impl fmt::Display for Recurrence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A bounded weekly recurrence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecurrenceRule {
    /// Weekly or biweekly.
    pub recurrence: Recurrence,

    /// Total number of occurrences in the series.
    pub count: u32,
}

impl RecurrenceRule {
    /// Rule value prefixed with `RRULE:`, as used in event insert requests.
    #[must_use]
    pub fn to_property(&self) -> String {
        format!("RRULE:{self}")
    }
}

/// Formats the rule as an RFC 5545 RRULE value.
impl fmt::Display for RecurrenceRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FREQ=WEEKLY;")?;
        match self.recurrence.interval() {
            1 => {}
            n => write!(f, "INTERVAL={n};")?,
        }
        write!(f, "COUNT={}", self.count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_weekday_names_onto_indices() {
        let indices: Vec<u8> = Weekday::ALL.iter().map(|d| d.index()).collect();
        assert_eq!(indices, vec![0, 1, 2, 3, 4, 5, 6]);

        for day in Weekday::ALL {
            assert_eq!(Weekday::from_name(day.name()), Some(day));
        }
        assert_eq!(Weekday::from_name("Monday").map(Weekday::index), Some(0));
        assert_eq!(Weekday::from_name("Sunday").map(Weekday::index), Some(6));
    }

    #[test]
    fn weekday_lookup_is_case_sensitive() {
        assert_eq!(Weekday::from_name("monday"), None);
        assert_eq!(Weekday::from_name("MONDAY"), None);
        assert_eq!(Weekday::from_name("Mon"), None);
        assert!("Funday".parse::<Weekday>().is_err());
    }

    #[test]
    fn converts_between_jiff_weekdays() {
        let day: jiff::civil::Weekday = Weekday::Wednesday.into();
        assert_eq!(day, jiff::civil::Weekday::Wednesday);
        for day in Weekday::ALL {
            assert_eq!(Weekday::from(jiff::civil::Weekday::from(day)), day);
        }
    }

    #[test]
    fn formats_weekly_rule() {
        let rule = RecurrenceRule {
            recurrence: Recurrence::Weekly,
            count: 100,
        };
        assert_eq!(rule.to_string(), "FREQ=WEEKLY;COUNT=100");
        assert_eq!(rule.to_property(), "RRULE:FREQ=WEEKLY;COUNT=100");
    }

    #[test]
    fn formats_biweekly_rule_with_interval() {
        let rule = RecurrenceRule {
            recurrence: Recurrence::Biweekly,
            count: 100,
        };
        assert_eq!(rule.to_string(), "FREQ=WEEKLY;INTERVAL=2;COUNT=100");
        assert_eq!(Recurrence::Biweekly.as_str(), "BIWEEKLY");
    }
}
