//! Token rendering.
//!
//! Every token prints as `KIND("text")` on its own line. End of input gets
//! its own marker line so it never reads like an ordinary token.

use std::io::{self, Write};

use monke_lexer::{Scanner, Token};

/// Line printed after the last token of a line or file.
pub const EOF_MARKER: &str = "-- EOF --";

/// Scan `source` and write each token as soon as it is produced, then the
/// EOF marker.
///
/// Returns the number of tokens written, not counting EOF.
pub fn render_line<W: Write>(out: &mut W, source: &str) -> io::Result<usize> {
    let mut scanner = Scanner::new(source);
    let mut count = 0;
    loop {
        let token = scanner.next_token();
        if token.is_eof() {
            writeln!(out, "{EOF_MARKER}")?;
            return Ok(count);
        }
        writeln!(out, "{token}")?;
        count += 1;
    }
}

/// Write already-collected tokens with a leading indent, then the EOF marker.
pub fn render_tokens<W: Write>(out: &mut W, tokens: &[Token<'_>], indent: &str) -> io::Result<()> {
    for token in tokens {
        writeln!(out, "{indent}{token}")?;
    }
    writeln!(out, "{indent}{EOF_MARKER}")
}
