// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

use std::io::Cursor;

use shellkit::console::{ColorMode, Console, ConsoleConfig, Style};
use shellkit::error::ShellKitError;

type TestConsole = Console<Vec<u8>, Cursor<Vec<u8>>>;

fn console_with(input: &str, config: ConsoleConfig) -> TestConsole {
    Console::new(Vec::new(), Cursor::new(input.as_bytes().to_vec()), config)
}

fn plain(input: &str) -> TestConsole {
    console_with(input, ConsoleConfig::default())
}

fn colored(input: &str) -> TestConsole {
    console_with(
        input,
        ConsoleConfig {
            color: ColorMode::Always,
            ..ConsoleConfig::default()
        },
    )
}

fn output(console: TestConsole) -> String {
    String::from_utf8(console.into_writer()).expect("console output is UTF-8")
}

#[test]
fn test_send_and_send_line() {
    let mut console = plain("");
    console.send("Copying files...").unwrap();
    console.send_line(" ok").unwrap();
    assert_eq!(output(console), "Copying files... ok\n");
}

#[test]
fn test_send_hr_uses_width() {
    let mut console = console_with(
        "",
        ConsoleConfig {
            width: 20,
            ..ConsoleConfig::default()
        },
    );
    console.send_hr().unwrap();
    assert_eq!(output(console), format!("{}\n", "-".repeat(20)));
}

#[test]
fn test_quiet_mode_suppresses_output() {
    let mut console = colored("");
    console.enable_quiet_mode();
    console.send_line("hidden").unwrap();
    console.set_bold().unwrap();
    console.send_done_flag(None).unwrap();
    console.report_error("hidden too").unwrap();
    assert_eq!(output(console), "");
}

#[test]
fn test_quiet_mode_still_shows_prompts() {
    let mut console = plain("blue\n");
    console.enable_quiet_mode();
    let answer = console.ask("Favourite colour?", None).unwrap();
    assert_eq!(answer, "blue");
    assert_eq!(output(console), "Favourite colour? ");
}

#[test]
fn test_escape_sequences() {
    let mut console = colored("");
    console.set_bold().unwrap();
    console.set_underline().unwrap();
    console.set_low_intensity().unwrap();
    console.set_blinking().unwrap();
    console.set_reverse_video().unwrap();
    console.set_color(Style::Purple).unwrap();
    console.remove_character_attributes().unwrap();
    assert_eq!(
        output(console),
        "\x1b[1m\x1b[4m\x1b[2m\x1b[5m\x1b[7m\x1b[35m\x1b[0m"
    );
}

#[test]
fn test_escape_sequences_skipped_without_color() {
    let mut console = plain("");
    console.set_bold().unwrap();
    console.send_colored("text", Style::Red, false).unwrap();
    assert_eq!(output(console), "text");
}

#[test]
fn test_send_colored_resets_after_text() {
    let mut console = colored("");
    console.send_colored("warn", Style::Brown, true).unwrap();
    assert_eq!(output(console), "\x1b[33mwarn\n\x1b[0m");
}

#[test]
fn test_done_and_error_flags() {
    let mut console = colored("");
    console.send_done_flag(None).unwrap();
    console.send_error_flag(Some("failed")).unwrap();
    assert_eq!(
        output(console),
        "\x1b[32m [done]\n\x1b[0m\x1b[31m [failed]\n\x1b[0m"
    );
}

#[test]
fn test_report_error_wraps_and_indents() {
    let mut console = console_with(
        "",
        ConsoleConfig {
            width: 20,
            ..ConsoleConfig::default()
        },
    );
    console
        .report_error("the configuration file could not be parsed")
        .unwrap();

    let rule = "-".repeat(20);
    let expected = format!(
        "{rule}\n—› ERROR:\n   the configuration\n   file could not be\n   parsed\n{rule}\n"
    );
    assert_eq!(output(console), expected);
}

#[test]
fn test_report_error_with_color_frames_in_red() {
    let mut console = colored("");
    console.report_error("boom").unwrap();
    let out = output(console);
    assert!(out.starts_with("\x1b[31m\x1b[1m---"));
    assert!(out.contains("   boom\n"));
    assert!(out.ends_with("\x1b[0m"));
}

#[derive(Debug)]
struct Inner;

impl std::fmt::Display for Inner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "disk full")
    }
}

impl std::error::Error for Inner {}

#[derive(Debug)]
struct Outer(Inner);

impl std::fmt::Display for Outer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "could not save report")
    }
}

impl std::error::Error for Outer {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.0)
    }
}

#[test]
fn test_report_failure_includes_causes() {
    let mut console = plain("");
    console.report_failure(&Outer(Inner)).unwrap();
    let out = output(console);
    assert!(out.contains("—› FAILURE:\n   could not save report\n"));
    assert!(out.contains("\n—› CAUSED BY #0:\n   disk full\n"));
    assert!(!out.contains("#1"));
}

#[test]
fn test_report_failure_for_shellkit_error() {
    let mut console = plain("");
    let err = ShellKitError::Environment("no argument vector available".to_string());
    console.report_failure(&err).unwrap();
    assert!(output(console).contains("Environment error: no argument vector available"));
}

#[test]
fn test_ask_returns_answer() {
    let mut console = plain("Ada\n");
    let name = console.ask("  Name?  ", Some("Grace")).unwrap();
    assert_eq!(name, "Ada");
    assert_eq!(output(console), "Name? [Grace] ");
}

#[test]
fn test_ask_empty_answer_uses_trimmed_default() {
    let mut console = plain("\n");
    assert_eq!(console.ask("Name?", Some("  Grace ")).unwrap(), "Grace");
}

#[test]
fn test_ask_empty_answer_without_default() {
    let mut console = plain("");
    assert_eq!(console.ask("Name?", None).unwrap(), "");
    assert_eq!(output(console), "Name? ");
}

#[test]
fn test_ask_bool_answers() {
    for (input, expected) in [
        ("y\n", true),
        ("YES\n", true),
        (" yes \n", true),
        ("n\n", false),
        ("No\n", false),
        ("maybe\n", false),
    ] {
        let mut console = plain(input);
        assert_eq!(
            console.ask_bool("Continue?", Some(true)).unwrap(),
            expected,
            "input {:?}",
            input
        );
    }
}

#[test]
fn test_ask_bool_prompt_shows_default() {
    let mut console = plain("\n");
    assert!(console.ask_bool("Continue?", Some(true)).unwrap());
    assert_eq!(output(console), "Continue? (y/n) [y] ");

    let mut console = plain("\n");
    assert!(!console.ask_bool("Continue?", Some(false)).unwrap());
    assert_eq!(output(console), "Continue? (y/n) [n] ");

    let mut console = plain("");
    assert!(!console.ask_bool("Continue?", None).unwrap());
    assert_eq!(output(console), "Continue? (y/n) ");
}

#[test]
fn test_assume_yes_skips_prompt() {
    let mut console = plain("n\n");
    console.enable_assume_yes();
    assert!(console.ask_bool("Delete?", None).unwrap());
    assert!(!console.ask_bool("Delete?", Some(false)).unwrap());
    assert_eq!(output(console), "");
}

#[test]
fn test_consoles_do_not_share_modes() {
    let mut first = plain("");
    let mut second = plain("");
    first.enable_quiet_mode();
    first.enable_assume_yes();
    second.send("visible").unwrap();
    assert!(!second.is_quiet());
    assert!(!second.is_assume_yes());
    assert_eq!(output(second), "visible");
}
