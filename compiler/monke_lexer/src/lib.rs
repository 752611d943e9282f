//! Tokenizer for the Monkey language.
//!
//! [`Scanner`] walks a source line byte-by-byte through a [`Cursor`] and
//! produces one [`Token`] per call to [`Scanner::next_token`]. Tokens borrow
//! their text from the source, so scanning never allocates.
//!
//! Unrecognized characters are reported as [`TokenKind::Illegal`] tokens,
//! not as errors. Once the source is exhausted the scanner keeps returning
//! [`TokenKind::Eof`].
//!
//! ```
//! use monke_lexer::{Scanner, TokenKind};
//!
//! let mut scanner = Scanner::new("let five = 5;");
//! assert_eq!(scanner.next_token().kind, TokenKind::Let);
//! assert_eq!(scanner.next_token().text, "five");
//! ```

mod cursor;
mod keywords;
mod scanner;
mod token;

pub use cursor::Cursor;
pub use keywords::lookup_ident;
pub use scanner::{tokenize, Scanner};
pub use token::{Token, TokenKind};
