//! Operator-facing output and line prompts.
//!
//! `Console` is generic over its reader and writer so the passes can be
//! driven from tests with in-memory buffers. Warnings and errors meant for
//! the operator share the output stream with prompts; only diagnostics
//! logging goes to stderr.

use std::fmt::Display;
use std::io::{self, BufRead, StdinLock, Stdout, Write};

use crossterm::style::Stylize;

pub struct Console<R, W> {
    input: R,
    output: W,
}

pub type StdConsole = Console<StdinLock<'static>, Stdout>;

/// Console bound to the process stdin/stdout.
pub fn stdio() -> StdConsole {
    Console::new(io::stdin().lock(), io::stdout())
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Progress line, e.g. "Processing file ...".
    pub fn progress(&mut self, msg: impl Display) -> io::Result<()> {
        writeln!(self.output, "{}", msg.to_string().cyan())
    }

    pub fn warn(&mut self, msg: impl Display) -> io::Result<()> {
        writeln!(self.output, "{} {msg}", "Warning:".yellow())
    }

    pub fn error(&mut self, msg: impl Display) -> io::Result<()> {
        writeln!(self.output, "{} {msg}", "Error:".red())
    }

    /// Indented `label: value` line.
    pub fn field(&mut self, label: &str, value: impl Display) -> io::Result<()> {
        writeln!(self.output, "\t{} {value}", format!("{label}:").yellow())
    }

    /// Plain line without styling.
    pub fn line(&mut self, msg: impl Display) -> io::Result<()> {
        writeln!(self.output, "{msg}")
    }

    /// Announce a generated name, quoted.
    pub fn generated(&mut self, what: &str, name: &str) -> io::Result<()> {
        writeln!(
            self.output,
            "{} {}",
            format!("New {what} generated:").green(),
            quoted(name).magenta()
        )
    }

    /// Print `prompt` and read one line. The trailing line terminator is
    /// stripped; end of input reads as an empty line.
    pub fn ask(&mut self, prompt: impl Display) -> io::Result<String> {
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

    /// Confirmation gate: empty input accepts `proposed`, anything else
    /// replaces it verbatim.
    pub fn confirm(&mut self, proposed: &str) -> io::Result<String> {
        let answer = self.ask("Confirm / Rename: ")?;
        if answer.is_empty() {
            Ok(proposed.to_string())
        } else {
            Ok(answer)
        }
    }

    #[cfg(test)]
    pub fn output(&self) -> &W {
        &self.output
    }
}

/// Wrap in double quotes for display.
pub fn quoted(value: impl Display) -> String {
    format!("\"{value}\"")
}
