// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Resolution of human-written timetable schedule text into recurring events.
//!
//! Each schedule cell runs through a small pipeline: the tokenizer splits it
//! into lines and words, the classifier reads the weekday, time range and
//! cadence, the kickoff resolver picks up first-occurrence overrides, and the
//! calculator anchors the line to the semester calendar.

#![warn(
    trivial_casts,
    trivial_numeric_casts,
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs,
    unsafe_code,
    unstable_features,
    unused_import_braces,
    unused_qualifications,
    clippy::dbg_macro
)]

mod calculator;
mod classifier;
mod config;
mod error;
mod event;
mod kickoff;
mod resolver;
mod slot;
mod tokenizer;
mod types;

pub use crate::calculator::{EventDateCalculator, EventTiming};
pub use crate::classifier::{ScheduleLine, classify_recurrence};
pub use crate::config::{
    APP_NAME, Config, DATE_FORMAT, DATETIME_FORMAT, DEFAULT_OCCURRENCE_COUNT, DEFAULT_TIME_ZONE,
};
pub use crate::error::{ConfigError, ScheduleError};
pub use crate::event::ResolvedEvent;
pub use crate::kickoff::{Kickoff, canonical_date};
pub use crate::resolver::{BatchReport, LineFailure, ScheduleResolver, filter_course};
pub use crate::slot::RawSlotRecord;
pub use crate::tokenizer::{Token, TokenizedLine, split_lines, tokenize, tokenize_cell};
pub use crate::types::{Recurrence, RecurrenceRule, Weekday};
