//! Line-based terminal front end

use std::io::{BufRead, Write};

use tracing::warn;

use tdr_core::{Hangup, Interface, ResourceState};

/// Reads decisions from `input` and prints narrative to `output`
pub struct ConsoleInterface<R, W> {
    input: R,
    output: W,
    show_status: bool,
}

impl<R: BufRead, W: Write> ConsoleInterface<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            show_status: true,
        }
    }

    pub fn show_status(mut self, show: bool) -> Self {
        self.show_status = show;
        self
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Read one line. `None` at end of input or on a read error.
    ///
    /// Bytes that are not UTF-8 are replaced, so such a line is just an
    /// invalid entry.
    fn read_line(&mut self) -> Option<String> {
        let mut buf = Vec::new();
        match self.input.read_until(b'\n', &mut buf) {
            Ok(0) => None,
            Ok(_) => Some(String::from_utf8_lossy(&buf).into_owned()),
            Err(err) => {
                warn!(%err, "failed to read input");
                None
            }
        }
    }

    fn write(&mut self, text: &str, newline: bool) {
        let result = if newline {
            writeln!(self.output, "{text}")
        } else {
            write!(self.output, "{text}").and_then(|()| self.output.flush())
        };
        if let Err(err) = result {
            warn!(%err, "failed to write to console");
        }
    }

    /// Ask for an optional seed.
    ///
    /// Empty input means no seed. Input that is not an integer prints a
    /// notice and also means no seed.
    pub fn read_seed(&mut self, prompt: &str) -> Option<i64> {
        self.write(prompt, false);
        let line = self.read_line()?;
        let text = line.trim();
        if text.is_empty() {
            return None;
        }
        match text.parse() {
            Ok(seed) => Some(seed),
            Err(_) => {
                warn!(input = text, "ignoring invalid seed");
                self.write("Invalid seed. Proceeding with a random seed.\n", true);
                None
            }
        }
    }
}

/// Parse a 1-based option number. Only plain digits count.
fn parse_choice(text: &str, count: usize) -> Option<usize> {
    let text = text.trim();
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    text.parse().ok().filter(|k| (1..=count).contains(k))
}

impl<R: BufRead, W: Write> Interface for ConsoleInterface<R, W> {
    fn message(&mut self, text: &str) {
        self.write(text, true);
    }

    fn choose(&mut self, prompt: &str, options: &[&str]) -> Result<usize, Hangup> {
        loop {
            self.write(prompt, true);
            for (i, text) in options.iter().enumerate() {
                self.write(&format!("[{}] {text}", i + 1), true);
            }
            self.write("Choose an option by number: ", false);

            let line = self.read_line().ok_or(Hangup)?;
            if let Some(choice) = parse_choice(&line, options.len()) {
                return Ok(choice);
            }
            self.write("Invalid input. Please type a number shown above.\n", true);
        }
    }

    fn status(&mut self, state: &ResourceState) {
        if self.show_status {
            self.message(&state.status_line());
        }
    }
}
