// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! SGR text attributes and colors
//!
//! Each style is written as `ESC[<code>m`. `Style` implements crossterm's
//! `Command` so it can be queued on any writer.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A text attribute or foreground color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Style {
    /// All attributes off
    Reset,
    Bold,
    LowIntensity,
    Underline,
    Blink,
    Reverse,
    Black,
    Red,
    Green,
    Brown,
    Blue,
    Purple,
    Cyan,
    LightGray,
}

impl Style {
    /// SGR parameter for this style
    pub fn code(self) -> u8 {
        match self {
            Style::Reset => 0,
            Style::Bold => 1,
            Style::LowIntensity => 2,
            Style::Underline => 4,
            Style::Blink => 5,
            Style::Reverse => 7,
            Style::Black => 30,
            Style::Red => 31,
            Style::Green => 32,
            Style::Brown => 33,
            Style::Blue => 34,
            Style::Purple => 35,
            Style::Cyan => 36,
            Style::LightGray => 37,
        }
    }

    /// Full escape sequence, e.g. `"\x1b[32m"`
    pub fn escape(self) -> String {
        format!("\x1b[{}m", self.code())
    }

    /// True for foreground colors, false for attributes
    pub fn is_color(self) -> bool {
        (30..=37).contains(&self.code())
    }
}

impl crossterm::Command for Style {
    fn write_ansi(&self, f: &mut impl fmt::Write) -> fmt::Result {
        write!(f, "\x1b[{}m", self.code())
    }

    #[cfg(windows)]
    fn execute_winapi(&self) -> std::io::Result<()> {
        // Legacy consoles without VT support get plain text.
        Ok(())
    }
}
