// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Console output and prompts for scripts
//!
//! A `Console` owns a writer, a line reader and its `ConsoleConfig`. Quiet
//! mode silences everything except question prompts; assume-yes mode answers
//! boolean questions without reading input. Both are per-instance, so two
//! consoles in one process never affect each other.

pub mod config;
pub mod style;

use std::io::{self, BufRead, IsTerminal, Write};

use crossterm::QueueableCommand;

use crate::error::Result;
use crate::utils::wrap_text;

pub use config::{ColorMode, ConsoleConfig};
pub use style::Style;

/// Indent used for wrapped error messages
const MESSAGE_INDENT: &str = "   ";

/// Text output and line-based prompts
pub struct Console<W: Write, R: BufRead> {
    writer: W,
    reader: R,
    config: ConsoleConfig,
    color_enabled: bool,
}

impl Console<io::Stdout, io::StdinLock<'static>> {
    /// Console on stdout/stdin. `ColorMode::Auto` checks for a terminal.
    pub fn stdio(config: ConsoleConfig) -> Self {
        let stdout = io::stdout();
        let color_enabled = resolve_color(config.color, stdout.is_terminal());
        Self {
            writer: stdout,
            reader: io::stdin().lock(),
            config,
            color_enabled,
        }
    }
}

impl Console<io::Stderr, io::Empty> {
    /// Console on stderr with no input; prompts get empty answers.
    pub fn stderr(config: ConsoleConfig) -> Self {
        let stderr = io::stderr();
        let color_enabled = resolve_color(config.color, stderr.is_terminal());
        Self {
            writer: stderr,
            reader: io::empty(),
            config,
            color_enabled,
        }
    }
}

fn resolve_color(mode: ColorMode, is_terminal: bool) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => {
            is_terminal && std::env::var_os("NO_COLOR").map_or(true, |v| v.is_empty())
        }
    }
}

impl<W: Write, R: BufRead> Console<W, R> {
    /// Console over arbitrary streams. `ColorMode::Auto` counts as "not a
    /// terminal" here.
    pub fn new(writer: W, reader: R, config: ConsoleConfig) -> Self {
        let color_enabled = resolve_color(config.color, false);
        Self {
            writer,
            reader,
            config,
            color_enabled,
        }
    }

    pub fn config(&self) -> &ConsoleConfig {
        &self.config
    }

    pub fn writer(&self) -> &W {
        &self.writer
    }

    pub fn into_writer(self) -> W {
        self.writer
    }

    pub fn enable_quiet_mode(&mut self) {
        self.config.quiet = true;
    }

    pub fn disable_quiet_mode(&mut self) {
        self.config.quiet = false;
    }

    pub fn is_quiet(&self) -> bool {
        self.config.quiet
    }

    pub fn enable_assume_yes(&mut self) {
        self.config.assume_yes = true;
    }

    pub fn disable_assume_yes(&mut self) {
        self.config.assume_yes = false;
    }

    pub fn is_assume_yes(&self) -> bool {
        self.config.assume_yes
    }

    pub fn is_color_enabled(&self) -> bool {
        self.color_enabled
    }

    pub fn set_color_enabled(&mut self, enabled: bool) {
        self.color_enabled = enabled;
    }

    // ==================== Plain output ====================

    /// Write text as-is
    pub fn send(&mut self, text: &str) -> Result<()> {
        if self.config.quiet {
            return Ok(());
        }
        self.writer.write_all(text.as_bytes())?;
        self.writer.flush()?;
        Ok(())
    }

    /// Write text followed by a line break
    pub fn send_line(&mut self, text: &str) -> Result<()> {
        self.send(text)?;
        self.send_br(1)
    }

    /// Write `count` line breaks; zero counts as one
    pub fn send_br(&mut self, count: usize) -> Result<()> {
        self.send(&"\n".repeat(count.max(1)))
    }

    /// Write a horizontal rule of `-` spanning the configured width
    pub fn send_hr(&mut self) -> Result<()> {
        let rule = "-".repeat(self.config.width);
        self.send_line(&rule)
    }

    // ==================== Styles ====================

    /// Write one escape sequence; a no-op when quiet or colors are off
    pub fn send_escape(&mut self, style: Style) -> Result<()> {
        if self.config.quiet || !self.color_enabled {
            return Ok(());
        }
        self.writer.queue(style)?;
        self.writer.flush()?;
        Ok(())
    }

    pub fn set_bold(&mut self) -> Result<()> {
        self.send_escape(Style::Bold)
    }

    pub fn set_low_intensity(&mut self) -> Result<()> {
        self.send_escape(Style::LowIntensity)
    }

    pub fn set_blinking(&mut self) -> Result<()> {
        self.send_escape(Style::Blink)
    }

    pub fn set_underline(&mut self) -> Result<()> {
        self.send_escape(Style::Underline)
    }

    pub fn set_reverse_video(&mut self) -> Result<()> {
        self.send_escape(Style::Reverse)
    }

    /// Back to normal text
    pub fn remove_character_attributes(&mut self) -> Result<()> {
        self.send_escape(Style::Reset)
    }

    pub fn set_color(&mut self, color: Style) -> Result<()> {
        self.send_escape(color)
    }

    /// Write text in a style, then reset attributes
    pub fn send_colored(&mut self, text: &str, style: Style, newline: bool) -> Result<()> {
        self.send_escape(style)?;
        if newline {
            self.send_line(text)?;
        } else {
            self.send(text)?;
        }
        self.remove_character_attributes()
    }

    /// Green ` [done]` (or ` [label]`) closing a progress line
    pub fn send_done_flag(&mut self, label: Option<&str>) -> Result<()> {
        self.send_flag(label.unwrap_or("done"), Style::Green)
    }

    /// Red ` [error]` (or ` [label]`) closing a progress line
    pub fn send_error_flag(&mut self, label: Option<&str>) -> Result<()> {
        self.send_flag(label.unwrap_or("error"), Style::Red)
    }

    fn send_flag(&mut self, label: &str, color: Style) -> Result<()> {
        self.set_color(color)?;
        self.send_line(&format!(" [{}]", label))?;
        self.remove_character_attributes()
    }

    // ==================== Error reports ====================

    /// Framed error block; the message may span several lines
    pub fn report_error(&mut self, message: &str) -> Result<()> {
        self.open_report("—› ERROR:")?;
        self.render_message(message)?;
        self.close_report()
    }

    /// Framed report of an error and each of its `source()` causes
    pub fn report_failure(&mut self, error: &dyn std::error::Error) -> Result<()> {
        self.open_report("—› FAILURE:")?;
        self.render_message(&error.to_string())?;

        let mut index = 0;
        let mut cause = error.source();
        while let Some(current) = cause {
            self.send_br(1)?;
            self.set_bold()?;
            self.send_line(&format!("—› CAUSED BY #{}:", index))?;
            self.remove_character_attributes()?;
            self.set_color(Style::Red)?;
            self.render_message(&current.to_string())?;
            index += 1;
            cause = current.source();
        }

        self.close_report()
    }

    fn open_report(&mut self, header: &str) -> Result<()> {
        self.set_color(Style::Red)?;
        self.set_bold()?;
        self.send_hr()?;
        self.send_line(header)?;
        self.remove_character_attributes()?;
        self.set_color(Style::Red)
    }

    fn close_report(&mut self) -> Result<()> {
        self.set_bold()?;
        self.send_hr()?;
        self.remove_character_attributes()
    }

    fn render_message(&mut self, message: &str) -> Result<()> {
        let wrap_width = self.config.width.saturating_sub(MESSAGE_INDENT.len());
        for line in wrap_text(message, wrap_width) {
            self.send_line(&format!("{}{}", MESSAGE_INDENT, line))?;
        }
        Ok(())
    }

    // ==================== Prompts ====================

    /// Ask a question; an empty answer yields the trimmed default.
    ///
    /// Prompts are shown even in quiet mode.
    pub fn ask(&mut self, question: &str, default: Option<&str>) -> Result<String> {
        let default = default.map(str::trim).filter(|d| !d.is_empty());
        let prompt = match default {
            Some(d) => format!("{} [{}] ", question.trim(), d),
            None => format!("{} ", question.trim()),
        };

        let answer = self.prompt(&prompt)?;
        if answer.is_empty() {
            return Ok(default.unwrap_or_default().to_string());
        }
        Ok(answer)
    }

    /// Ask a yes/no question.
    ///
    /// `y`/`yes` is true; an empty answer gives the default (false when
    /// none); anything else is false. With assume-yes on, returns the
    /// default (true when none) without prompting.
    pub fn ask_bool(&mut self, question: &str, default: Option<bool>) -> Result<bool> {
        if self.config.assume_yes {
            tracing::debug!(
                target: "shellkit.console",
                question = question.trim(),
                "assume-yes answered prompt"
            );
            return Ok(default.unwrap_or(true));
        }

        let hint = match default {
            Some(true) => " [y]",
            Some(false) => " [n]",
            None => "",
        };
        let answer = self.prompt(&format!("{} (y/n){} ", question.trim(), hint))?;
        if answer.trim().is_empty() {
            return Ok(default.unwrap_or(false));
        }

        Ok(matches!(
            answer.trim().to_lowercase().as_str(),
            "y" | "yes"
        ))
    }

    /// Write the prompt regardless of quiet mode and read one line.
    /// End of input reads as an empty answer.
    fn prompt(&mut self, prompt: &str) -> Result<String> {
        self.writer.write_all(prompt.as_bytes())?;
        self.writer.flush()?;

        let mut line = String::new();
        self.reader.read_line(&mut line)?;
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn console(input: &str, config: ConsoleConfig) -> Console<Vec<u8>, Cursor<Vec<u8>>> {
        Console::new(Vec::new(), Cursor::new(input.as_bytes().to_vec()), config)
    }

    fn output(console: Console<Vec<u8>, Cursor<Vec<u8>>>) -> String {
        String::from_utf8(console.into_writer()).unwrap()
    }

    #[test]
    fn test_resolve_color() {
        assert!(resolve_color(ColorMode::Always, false));
        assert!(!resolve_color(ColorMode::Never, true));
        assert!(!resolve_color(ColorMode::Auto, false));
    }

    #[test]
    fn test_new_with_auto_color_is_plain() {
        let c = console("", ConsoleConfig::default());
        assert!(!c.is_color_enabled());
    }

    #[test]
    fn test_quiet_toggles() {
        let mut c = console("", ConsoleConfig::default());
        c.enable_quiet_mode();
        assert!(c.is_quiet());
        c.disable_quiet_mode();
        assert!(!c.is_quiet());
    }

    #[test]
    fn test_assume_yes_toggles() {
        let mut c = console("", ConsoleConfig::default());
        c.enable_assume_yes();
        assert!(c.is_assume_yes());
        c.disable_assume_yes();
        assert!(!c.is_assume_yes());
    }

    #[test]
    fn test_send_br_zero_counts_as_one() {
        let mut c = console("", ConsoleConfig::default());
        c.send_br(0).unwrap();
        c.send_br(2).unwrap();
        assert_eq!(output(c), "\n\n\n");
    }

    #[test]
    fn test_prompt_strips_crlf() {
        let mut c = console("answer\r\n", ConsoleConfig::default());
        assert_eq!(c.ask("Q?", None).unwrap(), "answer");
    }
}
