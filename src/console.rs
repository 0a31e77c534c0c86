// SPDX-License-Identifier: PMPL-1.0-or-later

//! In-memory console log.
//!
//! Entries are kept in insertion order until cleared. Nothing is persisted;
//! [`ConsoleFormat`] only renders a snapshot on request.

use crate::action::InspectionAction;
use crate::bundle::Bundle;
use anyhow::Result;
use chrono::{DateTime, Utc};
use clap::ValueEnum;
use colored::*;
use serde::Serialize;
use std::io;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LogEntry {
    pub message: String,
    pub action: InspectionAction,
    pub recorded_at: DateTime<Utc>,
}

impl LogEntry {
    pub fn new(message: impl Into<String>, action: InspectionAction) -> Self {
        Self {
            message: message.into(),
            action,
            recorded_at: Utc::now(),
        }
    }

    /// Message lines colored with the action's display color.
    pub fn colored_lines(&self) -> impl Iterator<Item = ColoredString> + '_ {
        let c = self.action.info().color;
        self.message.lines().map(move |line| line.truecolor(c.r, c.g, c.b))
    }

    /// Colored message lines, indented.
    pub fn render<W: io::Write>(&self, out: &mut W) -> io::Result<()> {
        for line in self.colored_lines() {
            writeln!(out, "  {}", line)?;
        }
        Ok(())
    }
}

#[derive(Debug, Default, Clone, Serialize)]
#[serde(transparent)]
pub struct Console {
    entries: Vec<LogEntry>,
}

impl Console {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, entry: LogEntry) {
        self.entries.push(entry);
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn entries(&self) -> &[LogEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Write the console with a header localized through `bundle`.
    pub fn render<W: io::Write>(&self, bundle: &Bundle, out: &mut W) -> io::Result<()> {
        writeln!(out, "{}", bundle.localized_string("console").bold())?;
        if self.entries.is_empty() {
            writeln!(out, "  {}", bundle.localized_string("console.empty").dimmed())?;
            return Ok(());
        }
        for entry in &self.entries {
            entry.render(out)?;
        }
        Ok(())
    }

    pub fn print(&self, bundle: &Bundle) -> io::Result<()> {
        self.render(bundle, &mut io::stdout().lock())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ConsoleFormat {
    Text,
    Json,
    Yaml,
}

impl ConsoleFormat {
    pub fn parse(value: &str) -> Option<Self> {
        match value.to_ascii_lowercase().as_str() {
            "text" | "txt" => Some(ConsoleFormat::Text),
            "json" => Some(ConsoleFormat::Json),
            "yaml" | "yml" => Some(ConsoleFormat::Yaml),
            _ => None,
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            ConsoleFormat::Text => "txt",
            ConsoleFormat::Json => "json",
            ConsoleFormat::Yaml => "yaml",
        }
    }

    pub fn serialize(&self, console: &Console) -> Result<String> {
        match self {
            ConsoleFormat::Text => Ok(format_plain(console)),
            ConsoleFormat::Json => Ok(serde_json::to_string_pretty(console)?),
            ConsoleFormat::Yaml => Ok(serde_yaml::to_string(console)?),
        }
    }
}

fn format_plain(console: &Console) -> String {
    let mut out = String::new();
    for entry in console.entries() {
        // Message lines are joined so each entry stays on one line.
        out.push_str(&format!(
            "{} [{}] {}\n",
            entry.recorded_at.format("%Y-%m-%dT%H:%M:%SZ"),
            entry.action,
            entry.message.replace(" \n", " ").replace('\n', " ")
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(n: usize) -> LogEntry {
        LogEntry::new(format!("entry {n}"), InspectionAction::all()[n % 6])
    }

    #[test]
    fn append_keeps_order() {
        let mut console = Console::new();
        for n in 0..4 {
            console.append(entry(n));
        }
        let messages: Vec<_> = console.entries().iter().map(|e| e.message.as_str()).collect();
        assert_eq!(messages, ["entry 0", "entry 1", "entry 2", "entry 3"]);
    }

    #[test]
    fn clear_then_append_restarts() {
        let mut console = Console::new();
        for n in 0..10 {
            console.append(entry(n));
        }
        console.clear();
        assert!(console.is_empty());

        console.append(entry(7));
        console.append(entry(2));
        assert_eq!(console.len(), 2);
        assert_eq!(console.entries()[0].message, "entry 7");
        assert_eq!(console.entries()[1].message, "entry 2");
    }

    #[test]
    fn json_is_a_list_of_entries() {
        let mut console = Console::new();
        console.append(LogEntry::new("Current locale: \nja_JP", InspectionAction::CurrentLocale));
        let json = ConsoleFormat::Json.serialize(&console).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value[0]["action"], "current-locale");
        assert_eq!(value[0]["message"], "Current locale: \nja_JP");
    }

    #[test]
    fn yaml_and_text_mention_action() {
        let mut console = Console::new();
        console.append(LogEntry::new("Preferred languages: \nen", InspectionAction::PreferredLanguages));
        let yaml = ConsoleFormat::Yaml.serialize(&console).unwrap();
        assert!(yaml.contains("action: preferred-languages"), "{yaml}");
        let text = ConsoleFormat::Text.serialize(&console).unwrap();
        assert!(text.trim_end().ends_with("[preferred-languages] Preferred languages: en"), "{text}");
        assert_eq!(text.lines().count(), 1);
    }

    #[test]
    fn render_shows_header_and_entries() {
        let bundle = crate::bundle::BundleResolver::new("/nonexistent").resolve(None);
        let mut console = Console::new();

        let mut out = Vec::new();
        console.render(&bundle, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Console"));
        assert!(text.contains("(no entries)"));

        console.append(LogEntry::new("Current locale: \nja_JP", InspectionAction::CurrentLocale));
        let mut out = Vec::new();
        console.render(&bundle, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Current locale:"));
        assert!(text.contains("ja_JP"));
        assert!(!text.contains("(no entries)"));
    }

    #[test]
    fn formats_parse() {
        assert_eq!(ConsoleFormat::parse("YML"), Some(ConsoleFormat::Yaml));
        assert_eq!(ConsoleFormat::parse("csv"), None);
        assert_eq!(ConsoleFormat::Json.extension(), "json");
    }
}
