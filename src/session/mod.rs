//! Prompt loop
//! Reads commands one line at a time and acts on the interpreter's outcome

use crate::constants::ui::LINE_MARKER;
use crate::error::Result;
use crate::interpreter::{CommandInterpreter, Outcome};
use std::io::{BufRead, Write};

/// Why a session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitReason {
    /// `E` succeeded in saving the document
    Saved,
    /// `Q`: left without saving
    Quit,
    /// Input closed; nothing was saved
    EndOfInput,
}

/// One editing session over an input and an output stream
pub struct Session<R, W> {
    interpreter: CommandInterpreter,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(interpreter: CommandInterpreter, input: R, output: W) -> Self {
        Self {
            interpreter,
            input,
            output,
        }
    }

    #[must_use]
    pub fn interpreter(&self) -> &CommandInterpreter {
        &self.interpreter
    }

    /// Give back the interpreter and the output stream
    pub fn into_parts(self) -> (CommandInterpreter, W) {
        (self.interpreter, self.output)
    }

    /// Run until `E` saves, `Q` quits, or input runs out.
    ///
    /// Input is read as bytes, so a line that is not valid UTF-8 is still
    /// accepted. A failed save is reported and the session keeps going. Errors are
    /// returned only when the input or output streams themselves fail.
    pub fn run(&mut self) -> Result<ExitReason> {
        let mut line = Vec::new();
        loop {
            write!(self.output, "{}{LINE_MARKER}", self.interpreter.cursor())?;
            self.output.flush()?;

            line.clear();
            if self.input.read_until(b'\n', &mut line)? == 0 {
                tracing::info!(
                    dirty = self.interpreter.document().is_dirty(),
                    "input closed, leaving without saving"
                );
                return Ok(ExitReason::EndOfInput);
            }
            let command = trim_newline(&line);

            match self.interpreter.execute_bytes(command, &mut self.output)? {
                Outcome::Continue => {}
                Outcome::Terminate => {
                    tracing::info!(
                        dirty = self.interpreter.document().is_dirty(),
                        errors = self.interpreter.errors().error_count(),
                        "quit"
                    );
                    return Ok(ExitReason::Quit);
                }
                Outcome::SaveAndTerminate => match self.interpreter.document_mut().save() {
                    Ok(()) => {
                        tracing::info!(
                            errors = self.interpreter.errors().error_count(),
                            "saved and exiting"
                        );
                        return Ok(ExitReason::Saved);
                    }
                    Err(err) => {
                        self.interpreter
                            .errors_mut()
                            .handle(&err, &mut self.output)?;
                    }
                },
            }
            self.output.flush()?;
        }
    }
}

/// Strip one trailing `\n` or `\r\n`
fn trim_newline(line: &[u8]) -> &[u8] {
    let line = line.strip_suffix(b"\n").unwrap_or(line);
    line.strip_suffix(b"\r").unwrap_or(line)
}
