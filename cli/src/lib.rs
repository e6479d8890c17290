// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Command-line front end of slotcal.

mod cli;
mod cmd_generate_completion;
mod cmd_resolve;
mod config;
mod event_formatter;
mod parser;
mod sink;
mod table;

pub use crate::cli::{Cli, Commands, run};
pub use crate::config::{Config, parse_config};
pub use crate::sink::{EventRequest, EventSink, JsonEventSink, TableEventSink};
