//! Interactive read loop.
//!
//! Reads one line at a time, tokenizes it with a fresh scanner, and renders
//! every token. Lines starting with `:` are REPL commands rather than source.

use std::io::{self, BufRead, Write};

use crate::greeting::{current_user, write_greeting};
use crate::render::render_line;
use crate::{DriverError, ReplConfig};

/// REPL meta command.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Command {
    Quit,
    Help,
}

impl Command {
    /// Returns `None` for lines that are not commands, and
    /// `Some(Err(name))` for unrecognized ones.
    fn parse(line: &str) -> Option<Result<Self, &str>> {
        let name = line.trim().strip_prefix(':')?;
        Some(match name {
            "quit" | "q" => Ok(Self::Quit),
            "help" | "h" => Ok(Self::Help),
            other => Err(other),
        })
    }
}

/// Line-oriented token REPL over any reader/writer pair.
pub struct Repl<R, W> {
    input: R,
    output: W,
    config: ReplConfig,
}

impl<R: BufRead, W: Write> Repl<R, W> {
    pub fn new(input: R, output: W, config: ReplConfig) -> Self {
        Self {
            input,
            output,
            config,
        }
    }

    /// Run until input is exhausted or `:quit` is entered.
    pub fn run(&mut self) -> Result<(), DriverError> {
        let mut buf = Vec::new();
        loop {
            write!(self.output, "{}", self.config.prompt)?;
            self.output.flush()?;

            buf.clear();
            if self.input.read_until(b'\n', &mut buf)? == 0 {
                tracing::debug!("input exhausted");
                return Ok(());
            }
            // Invalid UTF-8 becomes U+FFFD, which scans as ILLEGAL.
            let text = String::from_utf8_lossy(&buf);
            let line = text.trim_end_matches(&['\r', '\n'][..]);

            match Command::parse(line) {
                Some(Ok(Command::Quit)) => return Ok(()),
                Some(Ok(Command::Help)) => self.print_help()?,
                Some(Err(name)) => {
                    writeln!(self.output, "unknown command ':{name}' (try :help)")?;
                }
                None => self.lex_line(line)?,
            }
        }
    }

    fn lex_line(&mut self, line: &str) -> Result<(), DriverError> {
        if self.config.echo {
            writeln!(self.output, "Prompt: {line}")?;
        }
        let count = render_line(&mut self.output, line)?;
        tracing::debug!(tokens = count, bytes = line.len(), "lexed line");
        Ok(())
    }

    fn print_help(&mut self) -> io::Result<()> {
        writeln!(self.output, "Commands:")?;
        writeln!(self.output, "  :quit, :q   Exit REPL")?;
        writeln!(self.output, "  :help, :h   Show this help")?;
        writeln!(self.output, "Anything else is tokenized and printed.")
    }

    /// Consume the REPL, returning its writer.
    pub fn into_output(self) -> W {
        self.output
    }
}

/// Run the REPL on stdin/stdout, greeting the user first if configured.
pub fn run_repl(config: ReplConfig) -> Result<(), DriverError> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    if config.greet {
        write_greeting(&mut out, &current_user())?;
    }
    Repl::new(stdin.lock(), out, config).run()
}

#[cfg(test)]
mod tests;
