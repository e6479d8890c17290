// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Detection of explicit "kick off" first-occurrence dates.

use crate::tokenizer::Token;

const KW_KICK: &str = "kick";
const KW_OFF: &str = "off";

/// First-occurrence override of a schedule line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Kickoff {
    /// No `kick off` marker: the line is anchored to the semester start.
    #[default]
    Absent,

    /// The marker is present but no date follows it.
    ///
    /// The line is anchored to the semester start without a weekday shift.
    Inert,

    /// The line starts on this `DD-MM-YYYY` date.
    Date(String),
}

impl Kickoff {
    /// Resolves the override from the qualifier tokens of a line.
    ///
    /// Both `kick` and `off` must appear, in any position. The first token
    /// containing a `.` is taken as the date; later ones are ignored.
    #[must_use]
    pub fn resolve(qualifiers: &[Token]) -> Self {
        let has = |keyword: &str| qualifiers.iter().any(|t| t.is(keyword));
        if !(has(KW_KICK) && has(KW_OFF)) {
            return Kickoff::Absent;
        }

        match qualifiers.iter().find(|t| t.is_date_like()) {
            Some(token) => Kickoff::Date(canonical_date(token.as_str())),
            None => {
                tracing::debug!(?qualifiers, "kick off marker without a date");
                Kickoff::Inert
            }
        }
    }

    /// The override date, if one was found.
    #[must_use]
    pub fn date(&self) -> Option<&str> {
        match self {
            Kickoff::Date(date) => Some(date),
            Kickoff::Absent | Kickoff::Inert => None,
        }
    }

    /// Whether the marker was present, with or without a date.
    #[must_use]
    pub fn is_marked(&self) -> bool {
        !matches!(self, Kickoff::Absent)
    }
}

/// Rewrites a `DD.MM.YY` or `DD.MM.YYYY` literal as `DD-MM-YYYY`.
///
/// Two-digit years are taken to be in 2000-2099.
#[must_use]
pub fn canonical_date(literal: &str) -> String {
    let segments: Vec<&str> = literal.split('.').collect();
    let last = segments.len() - 1;
    segments
        .iter()
        .enumerate()
        .map(|(i, segment)| {
            if i == last && segment.chars().count() == 2 {
                format!("20{segment}")
            } else {
                (*segment).to_owned()
            }
        })
        .collect::<Vec<_>>()
        .join("-")
}
