// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Test data factories for integration tests.

use slotcal_core::{Config, RawSlotRecord, ScheduleResolver};

/// A semester starting on Monday, 4 October 2021.
pub const SEMESTER_START: &str = "04-10-2021";

/// Creates a resolver for [`SEMESTER_START`] with default settings.
#[must_use]
pub fn test_resolver() -> ScheduleResolver {
    ScheduleResolver::new(&Config::with_semester_start(SEMESTER_START))
        .expect("test configuration must be valid")
}

/// Creates a slot with the given course name and schedule text.
///
/// # Example
///
/// ```ignore
/// let slot = test_slot("Databases", Some("Monday 09.00 - 10.30"));
/// ```
#[must_use]
pub fn test_slot(course_name: &str, schedule: Option<&str>) -> RawSlotRecord {
    RawSlotRecord {
        course: "Informatik".to_string(),
        semester: "WS 21/22".to_string(),
        module_id: "INF-1".to_string(),
        course_name: course_name.to_string(),
        course_type: "Lecture".to_string(),
        lecturer: "Prof. Schmidt".to_string(),
        course_format: "on site".to_string(),
        schedule: schedule.map(ToString::to_string),
        room: "H 1".to_string(),
        info: String::new(),
    }
}

/// A timetable export as handed over by table extraction.
#[allow(dead_code)]
pub fn test_slots() -> Vec<RawSlotRecord> {
    serde_json::from_str(include_str!("timetable.json")).expect("fixture must be valid JSON")
}
