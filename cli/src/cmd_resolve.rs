// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{error::Error, io, path::PathBuf};

use clap::{ArgMatches, Command, ValueHint, arg, value_parser};
use colored::Colorize;
use jiff::civil::Weekday;
use slotcal_core::{
    BatchReport, Config as CoreConfig, LineFailure, RawSlotRecord, ScheduleResolver, filter_course,
};
use tokio::io::AsyncReadExt;

use crate::config::Config;
use crate::parser::ArgOutputFormat;
use crate::sink::{EventSink, JsonEventSink, TableEventSink};

const STDIN_PATH: &str = "-";

#[derive(Debug, Clone)]
pub struct CmdResolve {
    pub input: PathBuf,
    pub semester_start: Option<String>,
    pub course: Option<String>,
    pub output_format: ArgOutputFormat,
}

impl CmdResolve {
    pub const NAME: &str = "resolve";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Resolve timetable slots into recurring events")
            .arg(
                arg!(input: <INPUT> "JSON file with the timetable slots, or - for stdin")
                    .value_parser(value_parser!(PathBuf))
                    .value_hint(ValueHint::FilePath),
            )
            .arg(
                arg!(-s --"semester-start" <DATE> "First day of the semester, as DD-MM-YYYY")
                    .long_help(
                        "\
First day of the semester, as DD-MM-YYYY. Must be a Monday, since weekly lines \
are placed relative to it. Overrides `semester_start` of the configuration.",
                    ),
            )
            .arg(arg!(--course <COURSE> "Only resolve slots of this course"))
            .arg(ArgOutputFormat::arg())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            input: matches
                .get_one::<PathBuf>("input")
                .cloned()
                .unwrap_or_else(|| PathBuf::from(STDIN_PATH)),
            semester_start: matches.get_one::<String>("semester-start").cloned(),
            course: matches.get_one::<String>("course").cloned(),
            output_format: ArgOutputFormat::from(matches),
        }
    }

    pub async fn run(self, mut core: CoreConfig, config: Config) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "resolving timetable...");
        if let Some(semester_start) = self.semester_start {
            core.semester_start = Some(semester_start);
        }

        let start = core.semester_start_date()?;
        if start.weekday() != Weekday::Monday {
            tracing::warn!(
                %start,
                weekday = ?start.weekday(),
                "semester start is not a Monday, weekly lines will land on the wrong days"
            );
        }

        let resolver = ScheduleResolver::new(&core)?;
        let slots = read_slots(&self.input).await?;
        let report = resolver.resolve_batch(filter_course(&slots, self.course.as_deref()));

        let stdout = io::stdout().lock();
        let mut sink: Box<dyn EventSink> = match self.output_format {
            ArgOutputFormat::Json => Box::new(JsonEventSink::new(stdout, config.reminder_minutes)),
            ArgOutputFormat::Table => Box::new(TableEventSink::new(stdout)),
        };
        create_events(sink.as_mut(), &report)?;

        write_failures(&mut io::stderr().lock(), &report.failures)?;
        Ok(())
    }
}

/// Hands every resolved event to the sink.
fn create_events(sink: &mut dyn EventSink, report: &BatchReport) -> Result<(), Box<dyn Error>> {
    for event in &report.events {
        sink.create_event(event)?;
    }
    sink.finish()
}

async fn read_slots(input: &PathBuf) -> Result<Vec<RawSlotRecord>, Box<dyn Error>> {
    let content = if input.as_os_str() == STDIN_PATH {
        let mut content = String::new();
        tokio::io::stdin()
            .read_to_string(&mut content)
            .await
            .map_err(|e| format!("Failed to read slots from stdin: {e}"))?;
        content
    } else {
        tokio::fs::read_to_string(input)
            .await
            .map_err(|e| format!("Failed to read slots at {}: {}", input.display(), e))?
    };

    let slots: Vec<RawSlotRecord> = serde_json::from_str(&content)
        .map_err(|e| format!("Failed to parse slots at {}: {}", input.display(), e))?;
    tracing::debug!(count = slots.len(), "slots loaded");
    Ok(slots)
}

/// Writes one diagnostic per skipped line, followed by a summary.
fn write_failures(w: &mut impl io::Write, failures: &[LineFailure]) -> io::Result<()> {
    for failure in failures {
        writeln!(
            w,
            "{} slot {} ({}): \"{}\": {}",
            "Skipped:".yellow(),
            failure.slot_number(),
            failure.title,
            failure.line,
            failure.error
        )?;
    }

    if !failures.is_empty() {
        writeln!(
            w,
            "{} {} schedule line(s) could not be resolved",
            "Warning:".yellow(),
            failures.len()
        )?;
    }
    Ok(())
}
