//! Command interpreter
//!
//! Applies parsed commands to a document and keeps the cursor
//! (`current_line`), the position where bare text is inserted.
//!
//! ## Cursor invariant
//!
//! `1 <= cursor <= len + 1` after every command. Deletions clamp the cursor
//! down to `len + 1`; listings move it one past the last listed line.
//!
//! ## Lifecycle
//!
//! The interpreter never exits the process or touches the disk. `E` and `Q`
//! are reported back as an [`Outcome`] and the session decides what to do.

use crate::command::{self, Address, Command};
use crate::constants::errors::{
    INVALID_INSERT, MSG_INVALID_INSERT, MSG_NO_PREVIOUS_LINE, NO_PREVIOUS_LINE,
};
use crate::constants::ui::LINE_MARKER;
use crate::document::Document;
use crate::error::{EditError, ErrorManager, ErrorType, Result};
use crate::line_store::{Line, Listing};
use std::io::{self, Write};

/// What the session loop should do after a command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Read the next command
    Continue,
    /// Save the document, then end the session
    SaveAndTerminate,
    /// End the session without saving
    Terminate,
}

/// Interprets commands against a document
#[derive(Debug)]
pub struct CommandInterpreter {
    document: Document,
    /// 1-based insertion point
    cursor: usize,
    errors: ErrorManager,
}

impl CommandInterpreter {
    /// Start interpreting with the cursor on the append position
    #[must_use]
    pub fn new(document: Document) -> Self {
        let cursor = document.len() + 1;
        Self {
            document,
            cursor,
            errors: ErrorManager::new(),
        }
    }

    /// Current insertion point
    #[must_use]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    #[must_use]
    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn document_mut(&mut self) -> &mut Document {
        &mut self.document
    }

    /// Error reporter shared with the session
    pub fn errors_mut(&mut self) -> &mut ErrorManager {
        &mut self.errors
    }

    #[must_use]
    pub fn errors(&self) -> &ErrorManager {
        &self.errors
    }

    /// Parse and execute one line of input, writing listings and messages to `out`.
    ///
    /// Invalid commands are reported on `out` and leave the state untouched.
    /// Only I/O failures on `out` are returned as errors.
    pub fn execute<W: Write>(&mut self, input: &str, out: &mut W) -> Result<Outcome> {
        self.execute_bytes(input.as_bytes(), out)
    }

    /// Same as [`execute`](Self::execute) for input that may not be valid UTF-8.
    ///
    /// Commands are recognized on the decoded text; a line of text is
    /// inserted with its bytes untouched.
    pub fn execute_bytes<W: Write>(&mut self, input: &[u8], out: &mut W) -> Result<Outcome> {
        let decoded = String::from_utf8_lossy(input);
        let command = command::parse(&decoded);
        tracing::debug!(?command, cursor = self.cursor, "execute");

        let result = match command {
            Command::Empty => Ok(()),
            Command::SaveAndExit => return Ok(Outcome::SaveAndTerminate),
            Command::Quit => return Ok(Outcome::Terminate),
            Command::InsertAt(target) => self.move_insertion_point(target),
            Command::List(address) => self.list(address, out),
            Command::Delete(address) => self.delete(address),
            Command::Text(_) => {
                self.insert_text(Line::from(input));
                Ok(())
            }
        };

        match result {
            Err(err) if err.kind == ErrorType::Io => Err(err),
            Err(err) => {
                self.errors.handle(&err, out)?;
                Ok(Outcome::Continue)
            }
            Ok(()) => Ok(Outcome::Continue),
        }
    }

    fn insert_text(&mut self, text: Line) {
        self.cursor = self.document.insert_at(text, self.cursor) + 1;
    }

    fn move_insertion_point(&mut self, target: Option<i64>) -> Result<()> {
        let append = self.document.len() + 1;
        match target.map(to_position) {
            Some(pos) if (1..=append).contains(&pos) => {
                self.cursor = pos;
                Ok(())
            }
            _ => Err(EditError::new(
                ErrorType::Range,
                INVALID_INSERT,
                MSG_INVALID_INSERT,
            )),
        }
    }

    fn list<W: Write>(&mut self, address: Address, out: &mut W) -> Result<()> {
        let store = self.document.store();
        let listing = match address {
            Address::Implicit => store.list_all(),
            Address::Line(p1) => store.list_at(to_position(p1))?,
            Address::Range(p1, p2) => store.list_range(to_position(p1), to_position(p2))?,
        };

        let last = write_listing(listing, out)?;
        self.cursor = match address {
            Address::Implicit => self.document.len() + 1,
            _ => last + 1,
        };
        Ok(())
    }

    fn delete(&mut self, address: Address) -> Result<()> {
        match address {
            Address::Implicit => {
                if self.cursor <= 1 {
                    return Err(EditError::new(
                        ErrorType::Range,
                        NO_PREVIOUS_LINE,
                        MSG_NO_PREVIOUS_LINE,
                    ));
                }
                self.document.delete_at(self.cursor - 1)?;
                self.cursor -= 1;
            }
            Address::Line(p1) => {
                self.document.delete_at(to_position(p1))?;
                self.clamp_cursor();
            }
            Address::Range(p1, p2) => {
                self.document
                    .delete_range(to_position(p1), to_position(p2))?;
                self.clamp_cursor();
            }
        }
        Ok(())
    }

    fn clamp_cursor(&mut self) {
        self.cursor = self.cursor.min(self.document.len() + 1);
    }
}

/// Negative numbers map to 0, which is never a valid position
fn to_position(n: i64) -> usize {
    usize::try_from(n).unwrap_or(0)
}

/// Write `N> text` lines; returns the last position written (0 if none)
fn write_listing<W: Write>(listing: Listing<'_>, out: &mut W) -> io::Result<usize> {
    let mut last = 0;
    for (pos, text) in listing {
        writeln!(out, "{pos}{LINE_MARKER}{text}")?;
        last = pos;
    }
    Ok(last)
}
