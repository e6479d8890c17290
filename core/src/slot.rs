// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use serde::{Deserialize, Deserializer, de::IgnoredAny};

use crate::error::ScheduleError;

/// One row of a timetable, as produced by table extraction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RawSlotRecord {
    /// Course of study the row belongs to.
    pub course: String,

    /// Semester label, e.g. `WS 21/22`.
    pub semester: String,

    /// Module identifier.
    pub module_id: String,

    /// Course name, possibly wrapped over several lines.
    pub course_name: String,

    /// Course type, e.g. lecture or exercise.
    pub course_type: String,

    /// Lecturer name(s).
    pub lecturer: String,

    /// Course format, e.g. online or on site.
    pub course_format: String,

    /// Multi-line schedule text, `None` when the cell is empty or not text.
    #[serde(deserialize_with = "deserialize_cell")]
    pub schedule: Option<String>,

    /// Room of the meetings.
    pub room: String,

    /// Free-text remarks.
    pub info: String,
}

impl RawSlotRecord {
    /// The schedule text of the slot.
    pub fn schedule_text(&self) -> Result<&str, ScheduleError> {
        self.schedule.as_deref().ok_or(ScheduleError::MalformedCell)
    }

    /// Event title: the course name on a single line.
    #[must_use]
    pub fn title(&self) -> String {
        self.course_name
            .split(['\r', '\n'])
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Event location.
    #[must_use]
    pub fn location(&self) -> &str {
        &self.room
    }

    /// Event description summarizing the remaining columns.
    #[must_use]
    pub fn description(&self) -> String {
        format!(
            "{} {}\n{}\nSemester: {}\nLecturer: {}\nModule ID: {}",
            self.course_type,
            self.course_format,
            self.info,
            self.semester,
            self.lecturer,
            self.module_id
        )
    }

    /// Whether the slot belongs to the given course; `None` matches all.
    #[must_use]
    pub fn matches_course(&self, course: Option<&str>) -> bool {
        course.is_none_or(|course| self.course == course)
    }
}

/// Table extraction reports empty cells as numbers or nulls; only strings
/// count as schedule text.
fn deserialize_cell<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Cell {
        Text(String),
        Other(IgnoredAny),
    }

    Ok(match Cell::deserialize(deserializer)? {
        Cell::Text(text) => Some(text),
        Cell::Other(_) => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slot() -> RawSlotRecord {
        RawSlotRecord {
            course: "AI".to_string(),
            semester: "WS 21/22".to_string(),
            module_id: "AI-101".to_string(),
            course_name: "Introduction to\rMachine Learning".to_string(),
            course_type: "Lecture".to_string(),
            lecturer: "Dr. Weber".to_string(),
            course_format: "on site".to_string(),
            schedule: Some("Monday 09.00 - 10.30".to_string()),
            room: "H 0104".to_string(),
            info: "Bring a laptop".to_string(),
        }
    }

    #[test]
    fn joins_wrapped_course_name() {
        assert_eq!(slot().title(), "Introduction to Machine Learning");
    }

    #[test]
    fn builds_description() {
        assert_eq!(
            slot().description(),
            "Lecture on site\nBring a laptop\nSemester: WS 21/22\nLecturer: Dr. Weber\nModule ID: AI-101"
        );
    }

    #[test]
    fn missing_schedule_is_malformed_cell() {
        let slot = RawSlotRecord {
            schedule: None,
            ..slot()
        };
        assert!(matches!(
            slot.schedule_text(),
            Err(ScheduleError::MalformedCell)
        ));
    }

    #[test]
    fn filters_by_course() {
        let slot = slot();
        assert!(slot.matches_course(None));
        assert!(slot.matches_course(Some("AI")));
        assert!(!slot.matches_course(Some("CS")));
    }

    #[test]
    fn deserializes_non_text_schedule_as_missing() {
        let slots: Vec<RawSlotRecord> = serde_json::from_str(
            r#"[
                {"course_name": "A", "schedule": "Monday 09.00 - 10.00"},
                {"course_name": "B", "schedule": null},
                {"course_name": "C", "schedule": 1.5},
                {"course_name": "D"}
            ]"#,
        )
        .unwrap();
        assert_eq!(slots[0].schedule.as_deref(), Some("Monday 09.00 - 10.00"));
        assert_eq!(slots[1].schedule, None);
        assert_eq!(slots[2].schedule, None);
        assert_eq!(slots[3].schedule, None);
        assert_eq!(slots[3].room, "");
    }
}
