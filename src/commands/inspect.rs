// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Argument inspection command

use std::io::{BufRead, Write};

use serde::Serialize;

use crate::arguments::{Arguments, OptionMap, TokenKind};
use crate::cli::args::{InspectArgs, OutputFormat};
use crate::console::{Console, Style};
use crate::error::Result;
use crate::utils::truncate_string;

/// Longest token shown in the text table
const TOKEN_DISPLAY_WIDTH: usize = 32;

#[derive(Serialize)]
struct TokenReport<'a> {
    token: &'a str,
    kind: TokenKind,
}

#[derive(Serialize)]
struct InspectReport<'a> {
    tokens: Vec<TokenReport<'a>>,
    options: &'a OptionMap,
    positionals: &'a [String],
}

/// Execute the inspect command
pub fn execute<W: Write, R: BufRead>(
    console: &mut Console<W, R>,
    args: &InspectArgs,
    format: OutputFormat,
) -> Result<()> {
    let arguments = Arguments::from_tokens(args.tokens.iter().cloned());

    match format {
        OutputFormat::Json => {
            let report = InspectReport {
                tokens: arguments
                    .raw_input()
                    .iter()
                    .zip(arguments.token_kinds())
                    .map(|(token, kind)| TokenReport {
                        token: token.as_str(),
                        kind: *kind,
                    })
                    .collect(),
                options: arguments.options(),
                positionals: arguments.positionals(),
            };
            console.send_line(&serde_json::to_string_pretty(&report)?)
        }
        OutputFormat::Text => render_text(console, &arguments),
    }
}

fn render_text<W: Write, R: BufRead>(
    console: &mut Console<W, R>,
    arguments: &Arguments,
) -> Result<()> {
    console.send_colored("Tokens:", Style::Bold, true)?;
    if arguments.raw_input().is_empty() {
        console.send_line("  (none)")?;
    }
    for (index, (token, kind)) in arguments
        .raw_input()
        .iter()
        .zip(arguments.token_kinds())
        .enumerate()
    {
        console.send(&format!(
            "  {:>3}  {:<width$}  ",
            index,
            truncate_string(token, TOKEN_DISPLAY_WIDTH),
            width = TOKEN_DISPLAY_WIDTH
        ))?;
        console.send_colored(kind.label(), kind_style(*kind), true)?;
    }

    console.send_br(1)?;
    console.send_colored("Options:", Style::Bold, true)?;
    if !arguments.has_options() {
        console.send_line("  (none)")?;
    }
    for (name, value) in arguments.options() {
        match value {
            Some(value) => console.send_line(&format!("  {} = {:?}", name, value))?,
            None => console.send_line(&format!("  {} (flag)", name))?,
        }
    }

    console.send_br(1)?;
    console.send_colored("Positionals:", Style::Bold, true)?;
    if !arguments.has_positionals() {
        console.send_line("  (none)")?;
    }
    for (index, positional) in arguments.positionals().iter().enumerate() {
        console.send_line(&format!("  {:>3}  {}", index, positional))?;
    }

    Ok(())
}

fn kind_style(kind: TokenKind) -> Style {
    match kind {
        TokenKind::LongOption | TokenKind::ShortOption | TokenKind::ShortCluster => Style::Cyan,
        TokenKind::ShortOptionValue => Style::Brown,
        TokenKind::Positional => Style::Green,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::{ColorMode, ConsoleConfig};
    use std::io::Cursor;

    fn run(tokens: &[&str], format: OutputFormat, config: ConsoleConfig) -> String {
        let mut console = Console::new(Vec::<u8>::new(), Cursor::new(Vec::<u8>::new()), config);
        let args = InspectArgs {
            tokens: tokens.iter().map(|t| t.to_string()).collect(),
        };
        execute(&mut console, &args, format).unwrap();
        String::from_utf8(console.into_writer()).unwrap()
    }

    #[test]
    fn test_text_output_lists_every_section() {
        let out = run(
            &["build", "-o", "out", "--release", "-vq"],
            OutputFormat::Text,
            ConsoleConfig::default(),
        );
        assert!(out.contains("Tokens:"));
        assert!(out.contains("short option value"));
        assert!(out.contains("o = \"out\""));
        assert!(out.contains("release (flag)"));
        assert!(out.contains("v (flag)"));
        assert!(out.contains("q (flag)"));
        assert!(out.contains("Positionals:"));
        assert!(out.contains("build"));
        assert!(!out.contains('\x1b'));
    }

    #[test]
    fn test_text_output_empty() {
        let out = run(&[], OutputFormat::Text, ConsoleConfig::default());
        assert_eq!(out.matches("(none)").count(), 3);
    }

    #[test]
    fn test_text_output_with_color() {
        let config = ConsoleConfig {
            color: ColorMode::Always,
            ..ConsoleConfig::default()
        };
        let out = run(&["file"], OutputFormat::Text, config);
        assert!(out.contains("\x1b[1mTokens:"));
        assert!(out.contains("\x1b[32mpositional"));
    }

    #[test]
    fn test_json_output() {
        let out = run(&["--x=1", "-a", "val", "foo"], OutputFormat::Json, ConsoleConfig::default());
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["options"]["x"], "1");
        assert_eq!(value["options"]["a"], "val");
        assert_eq!(value["positionals"][0], "foo");
        assert_eq!(value["tokens"][2]["kind"], "short_option_value");
        assert_eq!(value["tokens"].as_array().unwrap().len(), 4);
    }

    #[test]
    fn test_json_output_flag_is_null() {
        let out = run(&["--force"], OutputFormat::Json, ConsoleConfig::default());
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert!(value["options"]["force"].is_null());
    }

    #[test]
    fn test_quiet_suppresses_report() {
        let config = ConsoleConfig {
            quiet: true,
            ..ConsoleConfig::default()
        };
        assert!(run(&["a", "-b"], OutputFormat::Text, config).is_empty());
    }
}
