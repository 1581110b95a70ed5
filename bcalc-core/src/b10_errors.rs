use crate::span::Span;
use std::fmt;

pub trait Diagnostic {
    #[must_use]
    fn into_diag(self) -> Diag;
}

/// Which rule a line broke.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The grammar needed a number or '(', or the end of the line, and got
    /// something else.
    UnexpectedToken,
    MissingClosingParen,
    DivisionByZero,
    /// An unexpected token that the lexer could not classify at all.
    InvalidCharacter,
}

#[must_use]
#[derive(Clone)]
pub struct Diag {
    pub kind: ErrorKind,
    pub message: String,
    pub span: Span,
}

impl fmt::Debug for Diag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "At {:?}: {}", self.span, &self.message)
    }
}

impl fmt::Display for Diag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (at column {})", self.message, self.span.column())
    }
}

impl std::error::Error for Diag {}

/// Intended for the evaluator only.
/// Each error is attached to a span with `.span(sp)` before it becomes a `Diag`.
macro_rules! def_token_errors {
    ($(
        pub struct $Err:ident $def:tt
        kind: $kind:ident;
        msg: $self:ident => $msg:expr;
    )+) => {$(
        pub struct $Err $def
        impl $Err {
            pub fn span(self, span: Span) -> Spanned<$Err> {
                Spanned {node: self, span}
            }
            fn msg($self) -> String {
                $msg
            }
        }
        impl Diagnostic for Spanned<$Err> {
            fn into_diag(self) -> Diag {
                Diag {
                    kind: ErrorKind::$kind,
                    span: self.span,
                    message: self.node.msg(),
                }
            }
        }
    )+};

    ($(
        $Err:ident [$kind:ident] => $msg:expr,
    )+) => {$(
        pub struct $Err;
        impl $Err {
            pub fn span(self, span: Span) -> Spanned<$Err> {
                Spanned {node: self, span}
            }
            fn msg(self) -> String {
                $msg
            }
        }
        impl Diagnostic for Spanned<$Err> {
            fn into_diag(self) -> Diag {
                Diag {
                    kind: ErrorKind::$kind,
                    span: self.span,
                    message: self.node.msg(),
                }
            }
        }
    )+};
}

pub(crate) use def_token_errors;
