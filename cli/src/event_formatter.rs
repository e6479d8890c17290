// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use colored::Color;
use slotcal_core::{Recurrence, ResolvedEvent, Weekday};

use crate::table::{Column, PaddingDirection};

#[derive(Debug, Clone, Copy)]
pub enum EventColumn {
    Weekday,
    FirstDate,
    TimeRange,
    Recurrence,
    Title,
    Location,
}

impl EventColumn {
    pub const DEFAULT: [EventColumn; 6] = [
        EventColumn::Weekday,
        EventColumn::FirstDate,
        EventColumn::TimeRange,
        EventColumn::Recurrence,
        EventColumn::Title,
        EventColumn::Location,
    ];
}

impl Column<ResolvedEvent> for EventColumn {
    fn format(&self, event: &ResolvedEvent) -> String {
        match self {
            EventColumn::Weekday => event.weekday.name().to_string(),
            EventColumn::FirstDate => event.start.date().to_string(),
            EventColumn::TimeRange => format!(
                "{}-{}",
                event.start.time().strftime("%H:%M"),
                event.end.time().strftime("%H:%M")
            ),
            EventColumn::Recurrence => format!("{} ({})", event.rule.recurrence, event.rule.count),
            EventColumn::Title => event.title.clone(),
            EventColumn::Location => event.location.clone(),
        }
    }

    fn padding_direction(&self) -> PaddingDirection {
        match self {
            EventColumn::Recurrence => PaddingDirection::Right,
            _ => PaddingDirection::Left,
        }
    }

    fn get_color(&self, event: &ResolvedEvent) -> Option<Color> {
        match self {
            EventColumn::Recurrence if event.rule.recurrence == Recurrence::Biweekly => {
                Some(Color::Cyan)
            }
            EventColumn::FirstDate if event.weekday != weekday_of(event) => Some(Color::Yellow),
            _ => None,
        }
    }
}

/// Weekday the first occurrence actually falls on, which differs from the
/// written one for kickoff overrides.
fn weekday_of(event: &ResolvedEvent) -> Weekday {
    event.start.date().weekday().into()
}
