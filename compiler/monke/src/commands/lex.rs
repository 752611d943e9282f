//! `lex` command: tokenize a whole file and display the token stream.

use std::io::{self, Write};
use std::path::Path;

use crate::render::render_tokens;
use crate::DriverError;

use super::read_file;

/// Lex a file and print its tokens to stdout.
pub fn lex_file(path: &str) -> Result<(), DriverError> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    lex_path(&mut out, Path::new(path))?;
    Ok(())
}

/// Lex the file at `path` and write its tokens to `out`.
///
/// Newlines are ordinary whitespace, so a whole file scans as one buffer.
/// Returns the number of tokens written, not counting EOF.
pub fn lex_path<W: Write>(out: &mut W, path: &Path) -> Result<usize, DriverError> {
    let content = read_file(path)?;
    let tokens = monke_lexer::tokenize(&content);
    tracing::debug!(path = %path.display(), tokens = tokens.len(), "lexed file");

    writeln!(out, "Tokens for '{}' ({} tokens):", path.display(), tokens.len())?;
    render_tokens(out, &tokens, "  ")?;
    Ok(tokens.len())
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    reason = "test assertions use unwrap/expect for clarity"
)]
