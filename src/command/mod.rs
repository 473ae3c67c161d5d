//! Command parser
//! Turns one line of input into a structured command
//!
//! The first whitespace-separated token selects the command. `E`, `Q`, `I`,
//! `L` and `D` are commands (case-sensitive); any other non-empty input is
//! text to insert, kept exactly as typed.
//!
//! Numbers after a command are read like a stream extraction: each token
//! contributes its leading integer, and reading stops at the first token
//! that does not start with one.

use crate::constants::commands::{DELETE, INSERT_AT, LIST, QUIT, SAVE_AND_EXIT};

/// Line numbers given to `L` or `D`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Address {
    /// No numbers: the command's default target
    Implicit,
    /// A single line
    Line(i64),
    /// An inclusive range, as typed (not yet validated)
    Range(i64, i64),
}

/// Parsed command representation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Blank input
    Empty,
    /// `E`: save and exit
    SaveAndExit,
    /// `Q`: exit without saving
    Quit,
    /// `I <n>`: move the insertion point; `None` when no number was given
    InsertAt(Option<i64>),
    /// `L [p1 [p2]]`
    List(Address),
    /// `D [p1 [p2]]`
    Delete(Address),
    /// Anything else: a line of text
    Text(String),
}

/// Parse a single input line
#[must_use]
pub fn parse(input: &str) -> Command {
    if input.is_empty() {
        return Command::Empty;
    }

    let mut tokens = input.split_whitespace();
    let keyword = tokens.next().unwrap_or_default();
    let mut numbers = leading_numbers(tokens).into_iter();

    match keyword {
        SAVE_AND_EXIT => Command::SaveAndExit,
        QUIT => Command::Quit,
        INSERT_AT => Command::InsertAt(numbers.next()),
        LIST => Command::List(address(numbers)),
        DELETE => Command::Delete(address(numbers)),
        _ => Command::Text(input.to_string()),
    }
}

/// Integers at the front of `tokens`.
///
/// A token is read up to its first non-digit (`2abc` reads as 2), and
/// scanning stops after such a token or at one with no leading integer.
fn leading_numbers<'a>(tokens: impl Iterator<Item = &'a str>) -> Vec<i64> {
    let mut numbers = Vec::new();
    for token in tokens {
        let end = integer_prefix_len(token);
        let Ok(n) = token[..end].parse::<i64>() else {
            break;
        };
        numbers.push(n);
        if end < token.len() {
            break;
        }
    }
    numbers
}

/// Length of an optional sign followed by ASCII digits at the start of `token`
fn integer_prefix_len(token: &str) -> usize {
    let bytes = token.as_bytes();
    let sign = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    sign + bytes[sign..].iter().take_while(|b| b.is_ascii_digit()).count()
}

fn address(mut numbers: impl Iterator<Item = i64>) -> Address {
    match (numbers.next(), numbers.next()) {
        (None, _) => Address::Implicit,
        (Some(p1), None) => Address::Line(p1),
        (Some(p1), Some(p2)) => Address::Range(p1, p2),
    }
}
