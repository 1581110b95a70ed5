use crate::errors::{def_token_errors, Diag, Diagnostic, ErrorKind};
use crate::span::{Span, Spanned};
use crate::token::TokenKind;

def_token_errors! {
DivisionByZero [DivisionByZero] => format!("Division by zero."),
}

def_token_errors! {
pub struct ExpectedOperand {
    pub found: TokenKind,
}
kind: UnexpectedToken;
msg: self => format!(
    "Unexpected token: expected a number or '(', found {}.",
    self.found
);

pub struct TrailingToken {
    pub found: TokenKind,
}
kind: UnexpectedToken;
msg: self => format!("Unexpected token after expression: found {}.", self.found);

pub struct MissingCloseParen {
    pub open_paren: Span,
    pub found: TokenKind,
}
kind: MissingClosingParen;
msg: self => format!(
    "Expected closing parenthesis for the '(' at {}, found {}.",
    self.open_paren.lo, self.found
);

pub struct NestedTooDeep {
    pub limit: usize,
}
kind: UnexpectedToken;
msg: self => format!("Parentheses nested more than {} deep.", self.limit);

pub struct InvalidCharacter {
    pub c: char,
}
kind: InvalidCharacter;
msg: self => format!("Unrecognized character {:?}.", self.c);
}
