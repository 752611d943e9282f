//! Hand-written scanner producing one [`Token`] per call.
//!
//! # Design
//!
//! Whitespace is skipped first, then the current byte is dispatched. Each
//! arm calls a focused method that advances the cursor past what it consumed
//! and builds the token from the consumed span. Identifiers and integers
//! consume a maximal run; `=` and `!` look one byte ahead for a trailing `=`;
//! everything else is a single character. End of input dispatches to `eof()`,
//! which never moves the cursor.

use crate::cursor::Cursor;
use crate::keywords::lookup_ident;
use crate::token::{Token, TokenKind};

/// Scanner over one line (or any buffer) of Monkey source.
///
/// Error conditions are encoded as [`TokenKind::Illegal`] tokens, never as
/// `Result::Err`. Not meant to be shared: each caller builds its own scanner
/// and drains it.
pub struct Scanner<'a> {
    cursor: Cursor<'a>,
}

impl<'a> Scanner<'a> {
    /// Create a scanner positioned on the first byte of `source`.
    pub fn new(source: &'a str) -> Self {
        Self {
            cursor: Cursor::new(source),
        }
    }

    /// Produce the next token.
    ///
    /// Returns a [`TokenKind::Eof`] token with empty text when the source is
    /// exhausted. Subsequent calls after EOF continue to return EOF.
    pub fn next_token(&mut self) -> Token<'a> {
        self.skip_whitespace();
        let start = self.cursor.pos();
        let Some(byte) = self.cursor.current() else {
            return Token::eof();
        };
        match byte {
            b'=' => self.maybe_two_char(start, TokenKind::Eq, TokenKind::Assign),
            b'!' => self.maybe_two_char(start, TokenKind::NotEq, TokenKind::Bang),
            b';' => self.single(start, TokenKind::Semicolon),
            b'(' => self.single(start, TokenKind::LParen),
            b')' => self.single(start, TokenKind::RParen),
            b',' => self.single(start, TokenKind::Comma),
            b'+' => self.single(start, TokenKind::Plus),
            b'{' => self.single(start, TokenKind::LBrace),
            b'}' => self.single(start, TokenKind::RBrace),
            b'*' => self.single(start, TokenKind::Asterisk),
            b'/' => self.single(start, TokenKind::Slash),
            b'<' => self.single(start, TokenKind::Lt),
            b'>' => self.single(start, TokenKind::Gt),
            b'-' => self.single(start, TokenKind::Minus),
            b'a'..=b'z' | b'A'..=b'Z' | b'_' => self.identifier(start),
            b'0'..=b'9' => self.integer(start),
            _ => self.illegal(start),
        }
    }

    /// Returns `true` once the whole source has been consumed.
    ///
    /// Trailing whitespace counts as unconsumed until the next call to
    /// [`next_token`](Self::next_token) skips it.
    pub fn is_eof(&self) -> bool {
        self.cursor.is_eof()
    }

    // ─── Whitespace ─────────────────────────────────────────────

    #[inline]
    fn skip_whitespace(&mut self) {
        self.cursor.eat_while(is_whitespace);
    }

    // ─── Operators & Delimiters ─────────────────────────────────

    /// Single-byte token: advance one byte and emit the given kind.
    fn single(&mut self, start: usize, kind: TokenKind) -> Token<'a> {
        self.cursor.advance();
        Token::new(kind, self.cursor.slice_from(start))
    }

    /// `=`/`==` and `!`/`!=`: emit `matched` when the next byte is `=`,
    /// consuming both bytes, otherwise `fallback` for the current byte alone.
    fn maybe_two_char(
        &mut self,
        start: usize,
        matched: TokenKind,
        fallback: TokenKind,
    ) -> Token<'a> {
        if self.cursor.peek() == Some(b'=') {
            self.cursor.advance();
            self.cursor.advance();
            Token::new(matched, self.cursor.slice_from(start))
        } else {
            self.single(start, fallback)
        }
    }

    // ─── Identifiers & Literals ─────────────────────────────────

    /// Letters and underscores only. Digits end the identifier: `foo1` is
    /// `IDENT("foo")` followed by `INT("1")`.
    fn identifier(&mut self, start: usize) -> Token<'a> {
        self.cursor.eat_while(is_letter);
        let text = self.cursor.slice_from(start);
        Token::new(lookup_ident(text), text)
    }

    /// Decimal digits only; no sign, fraction, or radix prefix.
    fn integer(&mut self, start: usize) -> Token<'a> {
        self.cursor.eat_while(is_digit);
        Token::new(TokenKind::Int, self.cursor.slice_from(start))
    }

    // ─── Errors ─────────────────────────────────────────────────

    /// Unrecognized character. A non-ASCII character is consumed whole so
    /// the token text stays valid UTF-8.
    fn illegal(&mut self, start: usize) -> Token<'a> {
        self.cursor.advance_char();
        let text = self.cursor.slice_from(start);
        tracing::trace!(pos = start, text, "illegal character");
        Token::new(TokenKind::Illegal, text)
    }
}

/// Yields tokens up to, but not including, [`TokenKind::Eof`].
impl<'a> Iterator for Scanner<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Token<'a>> {
        let tok = self.next_token();
        if tok.is_eof() {
            None
        } else {
            Some(tok)
        }
    }
}

impl std::iter::FusedIterator for Scanner<'_> {}

#[inline]
fn is_whitespace(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\r' | b'\n')
}

#[inline]
fn is_letter(b: u8) -> bool {
    b.is_ascii_alphabetic() || b == b'_'
}

#[inline]
fn is_digit(b: u8) -> bool {
    b.is_ascii_digit()
}

/// Convenience function: tokenize a source string and collect every token.
///
/// Returns a `Vec<Token>` containing all tokens except the final `Eof`.
/// For streaming access, construct a [`Scanner`] directly.
#[tracing::instrument(level = "trace", skip_all, fields(len = source.len()))]
pub fn tokenize(source: &str) -> Vec<Token<'_>> {
    Scanner::new(source).collect()
}
