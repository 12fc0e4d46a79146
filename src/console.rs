//! Console I/O seam.
//!
//! Every prompt in the program goes through a [`Console`] so tests can
//! drive the whole flow with in-memory buffers instead of a terminal.
//! The generic parameters are wide open on purpose:
//! - Production wires up `Console::stdio()`.
//! - Tests wire up `Console::new(Cursor::new(script), Vec::new())` and
//!   assert on the captured output afterwards.

use std::io::{self, BufRead, BufReader, Stdin, Stdout, Write};

pub struct Console<R, W> {
    input: R,
    output: W,
}

impl Console<BufReader<Stdin>, Stdout> {
    /// A console wired to the process stdin/stdout.
    pub fn stdio() -> Self {
        Console::new(BufReader::new(io::stdin()), io::stdout())
    }
}

impl<R, W> Console<R, W> {
    /// Consume the console and hand back its writer so captured output can
    /// be inspected.
    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.output
    }
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Console { input, output }
    }

    /// Print one line.
    pub fn say(&mut self, line: &str) -> io::Result<()> {
        writeln!(self.output, "{line}")
    }

    /// Print `prompt` without a newline, flush, and read one answer line.
    ///
    /// Only the line terminator is stripped. Leading and trailing spaces
    /// survive so typed track titles come back exactly as entered; callers
    /// that want trimming do it themselves.
    pub fn ask(&mut self, prompt: &str) -> io::Result<String> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;
        let mut line = String::new();
        self.input.read_line(&mut line)?;
        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        Ok(line)
    }

    /// Ask, substituting `default` when the trimmed answer is blank.
    pub fn ask_or(&mut self, prompt: &str, default: &str) -> io::Result<String> {
        let raw = self.ask(prompt)?;
        Ok(resolve_or_default(&raw, default))
    }

    /// Yes/no question where plain Enter means yes.
    pub fn confirm(&mut self, prompt: &str) -> io::Result<bool> {
        let raw = self.ask(prompt)?;
        Ok(is_affirmative(&raw))
    }
}

/// Blank answers mean "take the default"; anything else is kept trimmed.
pub fn resolve_or_default(raw: &str, default: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        default.to_string()
    } else {
        trimmed.to_string()
    }
}

/// Enter or any casing of `y` counts as yes; everything else is no.
pub fn is_affirmative(raw: &str) -> bool {
    matches!(raw.trim().to_ascii_lowercase().as_str(), "" | "y")
}
