
use serde::{Serialize, Deserialize};

use std::fmt::{self, Display, Formatter};
use std::ops::Add;

/// Byte position in the text handed to the tokenizer. Used to point
/// error messages at the offending part of the input.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SourceOffset(pub usize);

/// A half-open range of source offsets: `start` is included, `end` is
/// excluded.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Span {
  pub start: SourceOffset,
  pub end: SourceOffset,
}

impl Span {
  pub fn new(start: SourceOffset, end: SourceOffset) -> Self {
    Self { start, end }
  }

  /// An empty span sitting at `pos`. The parser uses this for the
  /// end-of-input sentinel.
  pub fn empty_at(pos: SourceOffset) -> Self {
    Self { start: pos, end: pos }
  }
}

impl Display for SourceOffset {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.0)
  }
}

impl Add<usize> for SourceOffset {
  type Output = Self;

  fn add(self, rhs: usize) -> Self::Output {
    Self(self.0 + rhs)
  }
}

impl Display for Span {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    write!(f, "{}-{}", self.start, self.end)
  }
}
