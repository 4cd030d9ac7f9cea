//! Line-oriented prompting
//!
//! Wraps an input reader and an output writer so the interactive flows can
//! run against stdin/stdout or against in-memory buffers in tests.

use std::fmt::Display;
use std::io::{BufRead, Write};

use crate::error::{ExpenseError, ExpenseResult};

/// Reads answers from `R` and writes prompts and messages to `W`
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Print a prompt and read one line of input
    ///
    /// The trailing line terminator is removed; other whitespace is kept.
    /// Returns `InputClosed` when the input has ended.
    pub fn ask(&mut self, prompt: &str) -> ExpenseResult<String> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            // Keep the next message off the prompt line.
            writeln!(self.output)?;
            return Err(ExpenseError::InputClosed(prompt.trim().to_string()));
        }

        let trimmed_len = line.trim_end_matches(&['\n', '\r'][..]).len();
        line.truncate(trimmed_len);
        Ok(line)
    }

    /// Keep asking until `parse` accepts the answer
    ///
    /// Each rejected answer prints the message built by `reject`.
    pub fn ask_until<T, E, P, M>(&mut self, prompt: &str, parse: P, reject: M) -> ExpenseResult<T>
    where
        P: Fn(&str) -> Result<T, E>,
        M: Fn(&str, &E) -> String,
    {
        loop {
            let answer = self.ask(prompt)?;
            match parse(&answer) {
                Ok(value) => return Ok(value),
                Err(err) => self.say(reject(&answer, &err))?,
            }
        }
    }

    /// Print one line of output
    pub fn say(&mut self, message: impl Display) -> ExpenseResult<()> {
        writeln!(self.output, "{}", message)?;
        Ok(())
    }

    /// Print a pre-formatted block as-is
    pub fn show(&mut self, block: &str) -> ExpenseResult<()> {
        write!(self.output, "{}", block)?;
        self.output.flush()?;
        Ok(())
    }

    /// Consume the prompter and return the output sink
    pub fn into_output(self) -> W {
        self.output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn prompter(input: &str) -> Prompter<Cursor<Vec<u8>>, Vec<u8>> {
        Prompter::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    #[test]
    fn test_ask_strips_line_terminator_only() {
        let mut p = prompter("  hello  \r\nnext\n");
        assert_eq!(p.ask("Name: ").unwrap(), "  hello  ");
        assert_eq!(p.ask("Again: ").unwrap(), "next");

        let output = String::from_utf8(p.into_output()).unwrap();
        assert_eq!(output, "Name: Again: ");
    }

    #[test]
    fn test_ask_last_line_without_newline() {
        let mut p = prompter("end");
        assert_eq!(p.ask("> ").unwrap(), "end");
    }

    #[test]
    fn test_ask_reports_closed_input() {
        let mut p = prompter("");
        let err = p.ask("Enter the date (YYYY-MM-DD): ").unwrap_err();
        assert!(err.is_input_closed());
    }

    #[test]
    fn test_ask_until_retries() {
        let mut p = prompter("x\n-4\n7\n");
        let value: u32 = p
            .ask_until(
                "Number: ",
                |s| s.parse::<u32>(),
                |answer, _| format!("'{}' is not a number", answer),
            )
            .unwrap();
        assert_eq!(value, 7);

        let output = String::from_utf8(p.into_output()).unwrap();
        assert_eq!(
            output,
            "Number: 'x' is not a number\nNumber: '-4' is not a number\nNumber: "
        );
    }

    #[test]
    fn test_ask_until_stops_on_closed_input() {
        let mut p = prompter("bad\n");
        let result: ExpenseResult<u32> =
            p.ask_until("Number: ", |s| s.parse::<u32>(), |_, _| "again".to_string());
        assert!(result.unwrap_err().is_input_closed());
    }
}
