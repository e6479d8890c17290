// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Destinations for resolved events.

use std::{error::Error, io};

use slotcal_core::ResolvedEvent;

use crate::event_formatter::EventColumn;
use crate::table::Table;

/// Receives resolved events, one call per event.
pub trait EventSink {
    /// Creates one recurring event.
    fn create_event(&mut self, event: &ResolvedEvent) -> Result<(), Box<dyn Error>>;

    /// Flushes anything buffered once all events were created.
    fn finish(&mut self) -> Result<(), Box<dyn Error>> {
        Ok(())
    }
}

/// Body of a calendar event insert request.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventRequest<'a> {
    pub summary: &'a str,
    pub location: &'a str,
    pub description: &'a str,
    pub start: EventDateTime<'a>,
    pub end: EventDateTime<'a>,
    pub recurrence: Vec<String>,
    pub reminders: Reminders,
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventDateTime<'a> {
    pub date_time: String,
    pub time_zone: &'a str,
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Reminders {
    pub use_default: bool,
    pub overrides: Vec<ReminderOverride>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct ReminderOverride {
    pub method: &'static str,
    pub minutes: u32,
}

impl<'a> EventRequest<'a> {
    /// Builds the request for an event with a single popup reminder.
    pub fn new(event: &'a ResolvedEvent, reminder_minutes: u32) -> Self {
        Self {
            summary: &event.title,
            location: &event.location,
            description: &event.description,
            start: EventDateTime {
                date_time: event.start_iso(),
                time_zone: &event.time_zone,
            },
            end: EventDateTime {
                date_time: event.end_iso(),
                time_zone: &event.time_zone,
            },
            recurrence: vec![event.rule.to_property()],
            reminders: Reminders {
                use_default: false,
                overrides: vec![ReminderOverride {
                    method: "popup",
                    minutes: reminder_minutes,
                }],
            },
        }
    }
}

/// Writes one JSON event request per line.
#[derive(Debug)]
pub struct JsonEventSink<W: io::Write> {
    writer: W,
    reminder_minutes: u32,
}

impl<W: io::Write> JsonEventSink<W> {
    pub fn new(writer: W, reminder_minutes: u32) -> Self {
        Self {
            writer,
            reminder_minutes,
        }
    }
}

impl<W: io::Write> EventSink for JsonEventSink<W> {
    fn create_event(&mut self, event: &ResolvedEvent) -> Result<(), Box<dyn Error>> {
        let request = EventRequest::new(event, self.reminder_minutes);
        serde_json::to_writer(&mut self.writer, &request)?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn finish(&mut self) -> Result<(), Box<dyn Error>> {
        self.writer.flush()?;
        Ok(())
    }
}

/// Collects events and prints them as an aligned table.
#[derive(Debug)]
pub struct TableEventSink<W: io::Write> {
    writer: W,
    events: Vec<ResolvedEvent>,
}

impl<W: io::Write> TableEventSink<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            events: Vec::new(),
        }
    }
}

impl<W: io::Write> EventSink for TableEventSink<W> {
    fn create_event(&mut self, event: &ResolvedEvent) -> Result<(), Box<dyn Error>> {
        self.events.push(event.clone());
        Ok(())
    }

    fn finish(&mut self) -> Result<(), Box<dyn Error>> {
        let columns: &[EventColumn] = &EventColumn::DEFAULT;
        let table = Table {
            columns,
            separator: "  ",
            padding: true,
            data: self.events.as_slice(),
        };
        table.write_to(&mut self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}
