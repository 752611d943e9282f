//! Keyword resolution.
//!
//! Reserved words are matched exactly and case-sensitively. The lookup uses
//! the identifier's length as a first-pass filter (keywords are 2-6 bytes),
//! then compares against the keywords of that length only.

use crate::TokenKind;

/// Resolve an identifier-shaped span to its token kind.
///
/// Returns the keyword kind when `text` is one of `fn`, `let`, `true`,
/// `false`, `if`, `else`, `return`, and [`TokenKind::Ident`] otherwise.
#[inline]
pub fn lookup_ident(text: &str) -> TokenKind {
    match text.len() {
        2 => match text {
            "fn" => TokenKind::Function,
            "if" => TokenKind::If,
            _ => TokenKind::Ident,
        },
        3 => match text {
            "let" => TokenKind::Let,
            _ => TokenKind::Ident,
        },
        4 => match text {
            "true" => TokenKind::True,
            "else" => TokenKind::Else,
            _ => TokenKind::Ident,
        },
        5 => match text {
            "false" => TokenKind::False,
            _ => TokenKind::Ident,
        },
        6 => match text {
            "return" => TokenKind::Return,
            _ => TokenKind::Ident,
        },
        _ => TokenKind::Ident,
    }
}
