//! Command-line argument parsing.
//!
//! Turns raw process arguments into an [`Action`] plus a flat map of flag
//! parameters. The grammar is deliberately small:
//!
//! - the first token is the action name;
//! - every following token must start with `-` or `--`;
//! - a flag takes an `=`-joined inline value (`--status=done`), the next
//!   non-flag token (`--status done`), or the empty string when it is
//!   immediately followed by another flag or the end of input.
//!
//! Empty values are deliberately kept: the validator treats "present but
//! empty" the same as absent, which is what makes `--status=` fall back to
//! the rule's default.
//!
//! [`tokenize`] additionally splits a single raw line into tokens with
//! shell-style single/double quoting, for callers (and tests) that feed the
//! parser a whole string instead of an argv vector.

use crate::libs::config::Action;
use crate::libs::errors::CliError;
use regex::Regex;
use std::collections::BTreeMap;
use std::sync::OnceLock;

/// Flag parameters keyed by flag name, values as typed.
pub type Params = BTreeMap<String, String>;

/// A parsed invocation: the action plus its raw parameters.
#[derive(Debug, Clone)]
pub struct Parsed {
    pub action: Action,
    pub params: Params,
}

static QUOTED_STRING_RE: OnceLock<Regex> = OnceLock::new();

fn quoted_string_re() -> &'static Regex {
    QUOTED_STRING_RE.get_or_init(|| {
        // double-quoted | single-quoted | bare
        Regex::new(r#""([^"]*)"|'([^']*)'|([^\s"']+)"#).expect("tokenizer regex is valid")
    })
}

/// Splits a raw input line into tokens, honoring single and double quotes.
pub fn tokenize(input: &str) -> Vec<String> {
    quoted_string_re()
        .captures_iter(input)
        .map(|caps| {
            caps.get(1)
                .or_else(|| caps.get(2))
                .or_else(|| caps.get(3))
                .map(|m| m.as_str().to_string())
                .unwrap_or_default()
        })
        .collect()
}

/// Parses an argv-style token list into an action and its raw parameters.
pub fn parse(args: &[String]) -> Result<Parsed, CliError> {
    let Some(first) = args.first() else {
        return Err(CliError::message("Failed to parse arguments"));
    };
    let action: Action = first.parse()?;

    let mut params = Params::new();
    let mut tokens = args[1..].iter().peekable();
    while let Some(token) = tokens.next() {
        if !token.starts_with('-') {
            return Err(CliError::message(format!(
                "Invalid parameter \"{token}\". Parameters must start with '-' or '--'"
            )));
        }

        let key = token.trim_start_matches('-');
        match key.split_once('=') {
            Some((name, value)) => {
                params.insert(name.to_string(), value.to_string());
            }
            None => {
                let value = match tokens.peek() {
                    Some(next) if !next.starts_with('-') => {
                        tokens.next().cloned().unwrap_or_default()
                    }
                    _ => String::new(),
                };
                params.insert(key.to_string(), value);
            }
        }
    }

    Ok(Parsed { action, params })
}

/// Parses a whole input line by tokenizing it first.
pub fn parse_line(line: &str) -> Result<Parsed, CliError> {
    let tokens = tokenize(line);
    parse(&tokens)
}
