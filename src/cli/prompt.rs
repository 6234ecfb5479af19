//! Line-based prompting
//!
//! Every prompt returns `None` once input is exhausted so callers can stop
//! cleanly instead of spinning on an empty stream.

use std::io::{BufRead, Write};

use crate::error::LedgerResult;

/// Reads answers from `input` after writing prompts to `output`
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Writer for everything that is not a prompt
    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    /// Prompt once and return the trimmed answer
    ///
    /// Bytes that are not valid UTF-8 become U+FFFD rather than an error.
    pub fn ask(&mut self, prompt: &str) -> LedgerResult<Option<String>> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = Vec::new();
        if self.input.read_until(b'\n', &mut line)? == 0 {
            return Ok(None);
        }

        Ok(Some(String::from_utf8_lossy(&line).trim().to_string()))
    }

    /// Prompt until the answer is not blank
    pub fn ask_required(&mut self, prompt: &str) -> LedgerResult<Option<String>> {
        loop {
            match self.ask(prompt)? {
                Some(answer) if answer.is_empty() => {
                    writeln!(self.output, "Input cannot be empty. Please try again.")?;
                }
                other => return Ok(other),
            }
        }
    }

    /// Prompt until `parse` accepts the answer
    pub fn ask_parsed<T, E>(
        &mut self,
        prompt: &str,
        parse: impl Fn(&str) -> Result<T, E>,
    ) -> LedgerResult<Option<T>> {
        loop {
            let Some(answer) = self.ask(prompt)? else {
                return Ok(None);
            };
            match parse(&answer) {
                Ok(value) => return Ok(Some(value)),
                Err(_) => writeln!(self.output, "Invalid input. Please try again.")?,
            }
        }
    }

    #[cfg(test)]
    fn into_output(self) -> W {
        self.output
    }
}
