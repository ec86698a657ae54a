// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Token classification
//!
//! A single forward scan over invocation tokens (program name excluded).
//! Every token ends up in exactly one bucket; nothing here can fail, tokens
//! that look malformed are simply positional.

use std::fmt;
use std::sync::OnceLock;

use indexmap::IndexMap;
use regex::Regex;
use serde::Serialize;

/// Option name to optional value, in first-seen order.
///
/// `None` means the option was given as a boolean flag.
pub type OptionMap = IndexMap<String, Option<String>>;

/// How a single input token was classified
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenKind {
    /// `--name` or `--name=value`
    LongOption,
    /// `-c`, possibly taking the next token as its value
    ShortOption,
    /// Token consumed as the value of the preceding short option
    ShortOptionValue,
    /// `-abc`, one boolean flag per character
    ShortCluster,
    /// Anything else
    Positional,
}

impl TokenKind {
    /// Human-readable name
    pub fn label(self) -> &'static str {
        match self {
            TokenKind::LongOption => "long option",
            TokenKind::ShortOption => "short option",
            TokenKind::ShortOptionValue => "short option value",
            TokenKind::ShortCluster => "short cluster",
            TokenKind::Positional => "positional",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Output of a scan
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Tokenized {
    pub options: OptionMap,
    pub positionals: Vec<String>,
    /// One entry per input token, in input order
    pub kinds: Vec<TokenKind>,
}

fn long_option_regex() -> &'static Regex {
    static LONG_OPTION: OnceLock<Regex> = OnceLock::new();
    LONG_OPTION.get_or_init(|| Regex::new(r"^--([A-Za-z0-9_]+)(?:=(.+))?$").unwrap())
}

fn short_option_regex() -> &'static Regex {
    static SHORT_OPTION: OnceLock<Regex> = OnceLock::new();
    SHORT_OPTION.get_or_init(|| Regex::new(r"^-([A-Za-z0-9_])$").unwrap())
}

fn short_cluster_regex() -> &'static Regex {
    static SHORT_CLUSTER: OnceLock<Regex> = OnceLock::new();
    SHORT_CLUSTER.get_or_init(|| Regex::new(r"^-([A-Za-z0-9_]+)$").unwrap())
}

fn flag_shaped_regex() -> &'static Regex {
    static FLAG_SHAPED: OnceLock<Regex> = OnceLock::new();
    FLAG_SHAPED.get_or_init(|| Regex::new(r"^-.+").unwrap())
}

/// Check whether a token looks like a flag and so cannot be used as a
/// short option's value.
///
/// A bare `-` is not flag-shaped. Negative numbers such as `-5` are.
pub fn is_flag_shaped(token: &str) -> bool {
    flag_shaped_regex().is_match(token)
}

/// Classify tokens into options and positional parameters.
///
/// Patterns are tried in order: long option, single-character short option
/// (with lookahead for a value), short cluster, positional. Repeated option
/// names overwrite earlier values but keep their original position.
pub fn tokenize<S: AsRef<str>>(tokens: &[S]) -> Tokenized {
    let mut parsed = Tokenized {
        options: OptionMap::new(),
        positionals: Vec::new(),
        kinds: Vec::with_capacity(tokens.len()),
    };
    let mut skip_next = false;

    for (index, token) in tokens.iter().enumerate() {
        let token = token.as_ref();

        if skip_next {
            skip_next = false;
            parsed.kinds.push(TokenKind::ShortOptionValue);
            continue;
        }

        if let Some(caps) = long_option_regex().captures(token) {
            let value = caps.get(2).map(|m| m.as_str().to_string());
            parsed.options.insert(caps[1].to_string(), value);
            parsed.kinds.push(TokenKind::LongOption);
        } else if let Some(caps) = short_option_regex().captures(token) {
            let value = match tokens.get(index + 1).map(|next| next.as_ref()) {
                Some(next) if !is_flag_shaped(next) => {
                    skip_next = true;
                    Some(next.to_string())
                }
                _ => None,
            };
            parsed.options.insert(caps[1].to_string(), value);
            parsed.kinds.push(TokenKind::ShortOption);
        } else if let Some(caps) = short_cluster_regex().captures(token) {
            for flag in caps[1].chars() {
                parsed.options.insert(flag.to_string(), None);
            }
            parsed.kinds.push(TokenKind::ShortCluster);
        } else {
            parsed.positionals.push(token.to_string());
            parsed.kinds.push(TokenKind::Positional);
        }
    }

    tracing::debug!(
        target: "shellkit.arguments",
        tokens = tokens.len(),
        options = parsed.options.len(),
        positionals = parsed.positionals.len(),
        "tokenized arguments"
    );

    parsed
}
