//! Line-based forms for interactive mode.
//!
//! Each strategy declares the fields it needs; the reader asks for them one
//! prompt at a time. End of input is reported as `None` so the caller can
//! leave the loop cleanly.

use std::io::{self, BufRead, Write};

use tracing::trace;

use workshop_core::input::RawInput;
use workshop_core::registry::StrategyId;

/// Reads answers from `input`, writing prompts to `output`.
pub struct FormReader<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> FormReader<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Ask one question. Returns `None` at end of input.
    ///
    /// The trailing newline is stripped; other whitespace is kept, since
    /// some strategies treat it as data.
    pub fn ask(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.output, "{prompt} ")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let answer = line.trim_end_matches(['\n', '\r']).to_string();
        trace!(prompt, "read answer");
        Ok(Some(answer))
    }

    /// Fill in every field `id` asks for. Returns `None` at end of input.
    pub fn read_form(&mut self, id: StrategyId) -> io::Result<Option<RawInput>> {
        let mut raw = RawInput::default();
        for &(field, prompt) in id.prompts() {
            match self.ask(prompt)? {
                Some(answer) => raw.set(field, answer),
                None => return Ok(None),
            }
        }
        Ok(Some(raw))
    }

    /// Write a full line to the prompt stream.
    pub fn say(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.output, "{text}")
    }

    /// Consume the reader, returning the output stream.
    pub fn into_output(self) -> W {
        self.output
    }
}
