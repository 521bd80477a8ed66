//! Line-based prompting over any reader/writer pair

use std::io::{self, BufRead, Write};

/// Reads answers from `input` and writes prompts and messages to `output`
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Prompter { input, output }
    }

    /// Print `prompt` (without newline) and read one answer.
    ///
    /// Surrounding whitespace, including the line terminator, is trimmed.
    /// Returns `None` once the input is exhausted.
    pub fn ask(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    /// Print a line
    pub fn say(&mut self, message: &str) -> io::Result<()> {
        writeln!(self.output, "{}", message)
    }

    /// Print preformatted text as-is
    pub fn write(&mut self, text: &str) -> io::Result<()> {
        write!(self.output, "{}", text)
    }

    pub fn into_output(self) -> W {
        self.output
    }
}
