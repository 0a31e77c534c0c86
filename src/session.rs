// SPDX-License-Identifier: PMPL-1.0-or-later

//! Interactive console session.
//!
//! Each input line is a command: an action name (or several separated by
//! spaces), `all`, `clear`, `show`, `help` or `quit`. Actions append to the
//! console; `clear` empties it.

use crate::action::InspectionAction;
use crate::bundle::Bundle;
use crate::console::Console;
use crate::inspect;
use crate::provider::LocaleProvider;
use anyhow::{bail, Result};
use colored::*;
use std::io::{BufRead, Write};
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Run(Vec<InspectionAction>),
    Clear,
    Show,
    Help,
    Quit,
}

pub fn parse_command(line: &str) -> Result<Option<Command>> {
    let words: Vec<&str> = line.split_whitespace().collect();
    let Some(first) = words.first() else {
        return Ok(None);
    };

    let command = match first.to_ascii_lowercase().as_str() {
        "clear" => Command::Clear,
        "show" | "ls" => Command::Show,
        "help" | "?" => Command::Help,
        "quit" | "exit" | "q" => Command::Quit,
        "all" => Command::Run(InspectionAction::all().to_vec()),
        _ => {
            let mut actions = Vec::with_capacity(words.len());
            for word in &words {
                match InspectionAction::from_name(word) {
                    Some(action) => actions.push(action),
                    None => bail!("unknown action '{}' (try 'help')", word),
                }
            }
            Command::Run(actions)
        }
    };
    Ok(Some(command))
}

pub struct Session<'a> {
    pub console: Console,
    provider: &'a dyn LocaleProvider,
    /// Bundle for action descriptions.
    bundle: &'a Bundle,
    /// Bundle for the console header.
    console_bundle: &'a Bundle,
}

impl<'a> Session<'a> {
    pub fn new(
        provider: &'a dyn LocaleProvider,
        bundle: &'a Bundle,
        console_bundle: &'a Bundle,
    ) -> Self {
        Self {
            console: Console::new(),
            provider,
            bundle,
            console_bundle,
        }
    }

    /// Apply one command, writing its output to `out`. Returns `false` once
    /// the session should end.
    pub fn apply<W: Write>(&mut self, command: Command, out: &mut W) -> Result<bool> {
        debug!(?command, "console command");
        match command {
            Command::Run(actions) => {
                for action in actions {
                    let entry = inspect::inspect(action, self.provider, self.bundle);
                    entry.render(out)?;
                    self.console.append(entry);
                }
            }
            Command::Clear => {
                self.console.clear();
                writeln!(
                    out,
                    "{}",
                    self.console_bundle.localized_string("console.cleared").dimmed()
                )?;
            }
            Command::Show => self.console.render(self.console_bundle, out)?,
            Command::Help => write_help(out)?,
            Command::Quit => return Ok(false),
        }
        Ok(true)
    }

    /// Read commands until `quit` or end of input.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut out: W) -> Result<()> {
        write!(out, "> ")?;
        out.flush()?;
        for line in input.lines() {
            let line = line?;
            match parse_command(&line) {
                Ok(Some(command)) => {
                    if !self.apply(command, &mut out)? {
                        break;
                    }
                }
                Ok(None) => {}
                Err(err) => writeln!(out, "{}", err.to_string().red())?,
            }
            write!(out, "> ")?;
            out.flush()?;
        }
        Ok(())
    }
}

fn write_help<W: Write>(out: &mut W) -> std::io::Result<()> {
    writeln!(out, "Actions:")?;
    for action in InspectionAction::all() {
        writeln!(out, "  {:26} {}", action.name(), action.info().label)?;
    }
    writeln!(out, "Commands: all, clear, show, help, quit")
}
