//! Token vocabulary: the closed set of token kinds and the token value.

use std::fmt;

/// Kind of a scanned token.
///
/// One byte wide. Variants are grouped the same way the scanner dispatches
/// on them: operators, delimiters, keywords, then identifiers and literals,
/// then the two control kinds.
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // === Operators ===
    /// `=`
    Assign,
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `!`
    Bang,
    /// `*`
    Asterisk,
    /// `/`
    Slash,
    /// `<`
    Lt,
    /// `>`
    Gt,
    /// `==`
    Eq,
    /// `!=`
    NotEq,

    // === Delimiters ===
    /// `,`
    Comma,
    /// `;`
    Semicolon,
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// `{`
    LBrace,
    /// `}`
    RBrace,

    // === Keywords ===
    /// `fn`
    Function,
    /// `let`
    Let,
    /// `true`
    True,
    /// `false`
    False,
    /// `if`
    If,
    /// `else`
    Else,
    /// `return`
    Return,

    // === Identifiers & Literals ===
    /// A run of ASCII letters and underscores that is not a keyword.
    Ident,
    /// A run of ASCII digits.
    Int,

    // === Control ===
    /// A character the language does not recognize.
    Illegal,
    /// End of input. Always carries empty text.
    Eof,
}

impl TokenKind {
    /// Upper-case name of the kind, as shown when tokens are rendered.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Assign => "ASSIGN",
            Self::Plus => "PLUS",
            Self::Minus => "MINUS",
            Self::Bang => "BANG",
            Self::Asterisk => "ASTERISK",
            Self::Slash => "SLASH",
            Self::Lt => "LT",
            Self::Gt => "GT",
            Self::Eq => "EQ",
            Self::NotEq => "NOT_EQ",
            Self::Comma => "COMMA",
            Self::Semicolon => "SEMICOLON",
            Self::LParen => "LPAREN",
            Self::RParen => "RPAREN",
            Self::LBrace => "LBRACE",
            Self::RBrace => "RBRACE",
            Self::Function => "FUNCTION",
            Self::Let => "LET",
            Self::True => "TRUE",
            Self::False => "FALSE",
            Self::If => "IF",
            Self::Else => "ELSE",
            Self::Return => "RETURN",
            Self::Ident => "IDENT",
            Self::Int => "INT",
            Self::Illegal => "ILLEGAL",
            Self::Eof => "EOF",
        }
    }

    /// Fixed source spelling of the kind.
    ///
    /// Returns `None` for kinds whose text varies (`Ident`, `Int`,
    /// `Illegal`) and for `Eof`.
    pub const fn lexeme(self) -> Option<&'static str> {
        match self {
            Self::Assign => Some("="),
            Self::Plus => Some("+"),
            Self::Minus => Some("-"),
            Self::Bang => Some("!"),
            Self::Asterisk => Some("*"),
            Self::Slash => Some("/"),
            Self::Lt => Some("<"),
            Self::Gt => Some(">"),
            Self::Eq => Some("=="),
            Self::NotEq => Some("!="),
            Self::Comma => Some(","),
            Self::Semicolon => Some(";"),
            Self::LParen => Some("("),
            Self::RParen => Some(")"),
            Self::LBrace => Some("{"),
            Self::RBrace => Some("}"),
            Self::Function => Some("fn"),
            Self::Let => Some("let"),
            Self::True => Some("true"),
            Self::False => Some("false"),
            Self::If => Some("if"),
            Self::Else => Some("else"),
            Self::Return => Some("return"),
            Self::Ident | Self::Int | Self::Illegal | Self::Eof => None,
        }
    }

    /// Returns `true` for the seven reserved words.
    pub const fn is_keyword(self) -> bool {
        matches!(
            self,
            Self::Function
                | Self::Let
                | Self::True
                | Self::False
                | Self::If
                | Self::Else
                | Self::Return
        )
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A scanned token: its kind and the exact source text it covers.
///
/// The text borrows from the source the scanner was built over, not from
/// the scanner itself, so tokens outlive the scanner that produced them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Token<'src> {
    pub kind: TokenKind,
    pub text: &'src str,
}

impl<'src> Token<'src> {
    pub const fn new(kind: TokenKind, text: &'src str) -> Self {
        Self { kind, text }
    }

    /// The end-of-input token.
    pub const fn eof() -> Self {
        Self::new(TokenKind::Eof, "")
    }

    #[inline]
    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::Eof
    }
}

/// Renders as `KIND("text")`, e.g. `LET("let")` or `EOF("")`.
impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({:?})", self.kind.name(), self.text)
    }
}
