//! Line-oriented console used by the REPL and the interactive handlers.
//!
//! Reads plain lines rather than using `dialoguer`, which requires a TTY;
//! sessions must also run from piped input and in-memory buffers.

use std::io::{self, BufRead, Write};

use crate::error::{Result, TrackerError};

/// Outcome of validating one answer.
#[derive(Debug, PartialEq)]
pub enum Parsed<T> {
    Value(T),
    /// Ask again; the string explains what was wrong.
    Retry(String),
}

impl<T> Parsed<T> {
    /// Lifts a fallible parse into a prompt outcome.
    pub fn from_result<E: std::fmt::Display>(result: std::result::Result<T, E>) -> Self {
        match result {
            Ok(value) => Parsed::Value(value),
            Err(err) => Parsed::Retry(err.to_string()),
        }
    }
}

pub struct Console<R, W> {
    input: R,
    out: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, out: W) -> Self {
        Self { input, out }
    }

    pub fn out(&mut self) -> &mut W {
        &mut self.out
    }

    pub fn into_output(self) -> W {
        self.out
    }

    /// Reads one raw line without its line terminator. `None` at end of input.
    pub fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        while line.ends_with('\n') || line.ends_with('\r') {
            line.pop();
        }
        Ok(Some(line))
    }

    /// Prints `label`, then reads a trimmed answer. `None` at end of input.
    pub fn ask(&mut self, label: &str) -> Result<Option<String>> {
        write!(self.out, "{}", label)?;
        self.out.flush()?;
        Ok(self.read_line()?.map(|answer| answer.trim().to_string()))
    }

    /// Asks until `parse` accepts the answer.
    ///
    /// Running out of input while asking aborts with a validation error.
    pub fn ask_until<T>(
        &mut self,
        label: &str,
        mut parse: impl FnMut(&str) -> Parsed<T>,
    ) -> Result<T> {
        loop {
            let Some(answer) = self.ask(label)? else {
                return Err(TrackerError::validation(
                    "Input ended before a valid value was entered.",
                ));
            };
            match parse(&answer) {
                Parsed::Value(value) => return Ok(value),
                Parsed::Retry(reason) => writeln!(self.out, "{}", reason)?,
            }
        }
    }

    /// Yes/no question; only "y" or "yes" (any case) count as yes.
    pub fn confirm(&mut self, label: &str) -> Result<bool> {
        let answer = self.ask(label)?.unwrap_or_default();
        Ok(matches!(answer.to_ascii_lowercase().as_str(), "y" | "yes"))
    }
}
