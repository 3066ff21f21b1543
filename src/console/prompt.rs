//! Line-oriented prompting over any reader and writer.

use std::io::{BufRead, Write};

use tracing::debug;

use crate::error::{PayrollError, PayrollResult};

/// Asks questions on `output` and reads one-line answers from `input`.
///
/// Generic over the streams so that sessions can run against stdin/stdout
/// or in-memory buffers.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    /// Creates a prompter over the given streams.
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Writes a line of text followed by a newline.
    pub fn say(&mut self, text: &str) -> PayrollResult<()> {
        writeln!(self.output, "{}", text)?;
        Ok(())
    }

    /// Writes the prompt and returns the next input line without its line ending.
    ///
    /// Returns `InputClosed` if the input has no more lines.
    pub fn ask_line(&mut self, prompt: &str) -> PayrollResult<String> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(PayrollError::InputClosed {
                prompt: prompt.trim().to_string(),
            });
        }

        let answer = line.trim_end_matches(['\n', '\r']).to_string();
        Ok(answer)
    }

    /// Asks until `parse` accepts the answer.
    ///
    /// `InvalidInput` errors are shown to the user and the prompt repeats;
    /// any other error ends the question.
    pub fn ask_with<T, F>(&mut self, prompt: &str, parse: F) -> PayrollResult<T>
    where
        F: Fn(&str) -> PayrollResult<T>,
    {
        loop {
            let answer = self.ask_line(prompt)?;
            match parse(&answer) {
                Ok(value) => return Ok(value),
                Err(PayrollError::InvalidInput { field, message }) => {
                    debug!(field = %field, answer = %answer, "Rejected console input");
                    self.say(&format!("Invalid {}: {}. Please try again.", field, message))?;
                }
                Err(other) => return Err(other),
            }
        }
    }

    /// Returns the output stream.
    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    /// Consumes the prompter and returns the output stream.
    pub fn into_output(self) -> W {
        self.output
    }
}
