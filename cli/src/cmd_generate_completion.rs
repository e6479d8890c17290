// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{error::Error, io};

use clap::{ArgMatches, Command, ValueEnum, arg, value_parser};
use clap_complete::{Generator, Shell as ClapShell, generate};
use clap_complete_nushell::Nushell;
use slotcal_core::APP_NAME;

use crate::Cli;

/// Prints a completion script covering every `slotcal` subcommand and option,
/// including the `resolve` flags and the `--output-format` values.
#[derive(Debug, Clone, Copy)]
pub struct CmdGenerateCompletion {
    pub shell: Shell,
}

impl CmdGenerateCompletion {
    pub const NAME: &str = "generate-completion";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Print a shell completion script for slotcal")
            .long_about(
                "\
Print a shell completion script for slotcal to stdout. For zsh, save it as \
`_slotcal` in a directory on $fpath; for bash, source it from your profile.",
            )
            .hide(true)
            .arg(arg!(shell: <SHELL> "Target shell").value_parser(value_parser!(Shell)))
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            shell: matches.get_one::<Shell>("shell").copied().unwrap_or_default(),
        }
    }

    pub fn run(self) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "generating shell completion...");
        let mut stdout = io::stdout().lock();
        self.write_to(&mut stdout);
        Ok(())
    }

    /// Writes the completion script for the selected shell.
    pub fn write_to(self, buf: &mut impl io::Write) {
        match self.shell {
            Shell::Bash => write_script(ClapShell::Bash, buf),
            Shell::Elvish => write_script(ClapShell::Elvish, buf),
            Shell::Fish => write_script(ClapShell::Fish, buf),
            Shell::Nushell => write_script(Nushell {}, buf),
            Shell::PowerShell => write_script(ClapShell::PowerShell, buf),
            Shell::Zsh => write_script(ClapShell::Zsh, buf),
        }
    }
}

fn write_script(generator: impl Generator, buf: &mut impl io::Write) {
    let mut cmd = Cli::command();
    generate(generator, &mut cmd, APP_NAME, buf);
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum Shell {
    #[default]
    Bash,
    Elvish,
    Fish,
    Nushell,
    #[value(name = "powershell")]
    #[allow(clippy::enum_variant_names)]
    PowerShell,
    Zsh,
}
