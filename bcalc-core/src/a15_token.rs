use crate::span::Span;
use std::fmt;

pub use BinOpToken::*;
#[derive(Debug, Clone, Copy)]
pub enum BinOpToken {
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Star,
    /// `/`
    Slash,
}

pub use TokenKind::*;
#[derive(Debug, Clone, Copy)]
pub enum TokenKind {
    /* Operators */
    BinOp(BinOpToken),

    /* Punctuation */
    /// `(`
    OpenParen,
    /// `)`
    CloseParen,

    /* Atoms */
    /// Literal number, e.g. `12`, `3.14`, `.5`
    Number(f64),

    /* Unprintables */
    End,
    /// A character no token starts with. The lexer does not move past it.
    Invalid(char),
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BinOp(Plus) => write!(f, "'+'"),
            BinOp(Minus) => write!(f, "'-'"),
            BinOp(Star) => write!(f, "'*'"),
            BinOp(Slash) => write!(f, "'/'"),
            OpenParen => write!(f, "'('"),
            CloseParen => write!(f, "')'"),
            Number(x) => write!(f, "number {x}"),
            End => write!(f, "end of input"),
            Invalid(c) => write!(f, "{c:?}"),
        }
    }
}

#[derive(Clone, Copy)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

impl Token {
    pub fn new(kind: TokenKind, span: Span) -> Token {
        Token { kind, span }
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} [{:?}]", self.kind, self.span)
    }
}
