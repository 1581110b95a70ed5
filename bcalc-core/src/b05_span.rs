use crate::pos::{ByteLen, BytePos};
use std::fmt;

/// A half-open span: (lo..hi) including lo and excluding hi.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub lo: BytePos,
    pub hi: BytePos,
}

impl Span {
    /// 1-indexed column where the span starts.
    pub fn column(&self) -> usize {
        self.lo.0 + 1
    }
}

impl fmt::Debug for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Zero-width spans only come from the end of the line.
        if self.hi - self.lo <= ByteLen(1) {
            write!(f, "{}", self.lo)
        } else {
            write!(f, "{}-{}", self.lo, BytePos(self.hi.0 - 1))
        }
    }
}

#[derive(Clone, Copy)]
pub(crate) struct Spanned<T> {
    pub(crate) node: T,
    pub(crate) span: Span,
}

impl<T: fmt::Debug> fmt::Debug for Spanned<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}({:?})", self.node, self.span)
    }
}

pub(crate) fn respan<T>(t: T, sp: Span) -> Spanned<T> {
    Spanned { node: t, span: sp }
}

pub(crate) fn span(lo: BytePos, hi: BytePos) -> Span {
    Span { lo, hi }
}
