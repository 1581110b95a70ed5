use std::fmt;
use std::ops::{Add, Sub};

/// Byte offset into the line being evaluated.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
pub struct BytePos(pub usize);

impl From<usize> for BytePos {
    fn from(x: usize) -> Self {
        BytePos(x)
    }
}

impl From<BytePos> for usize {
    fn from(x: BytePos) -> Self {
        x.0
    }
}

impl Sub for BytePos {
    type Output = ByteLen;

    #[inline(always)]
    fn sub(self, rhs: BytePos) -> ByteLen {
        ByteLen(self.0.saturating_sub(rhs.0))
    }
}

impl Add<ByteLen> for BytePos {
    type Output = BytePos;

    #[inline(always)]
    fn add(self, rhs: ByteLen) -> BytePos {
        BytePos(self.0 + rhs.0)
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
pub struct ByteLen(pub usize);

impl From<usize> for ByteLen {
    fn from(x: usize) -> Self {
        ByteLen(x)
    }
}

impl fmt::Display for BytePos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // 1-indexed positions.
        write!(f, "{}", self.0 + 1)
    }
}
