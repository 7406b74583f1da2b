
/// How tightly a token binds in the precedence-climbing parser.
///
/// Infix operators continue the current expression only when their
/// precedence is strictly greater than the minimum the caller is
/// parsing at. Since the right-hand side of an operator is parsed at
/// that operator's own precedence, every infix operator associates to
/// the left, `^` included.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Precedence(i8);

impl Precedence {
  /// The end-of-input sentinel. Lower than anything a caller can parse
  /// at, so it always stops the operator loop.
  pub const END: Precedence = Precedence(-1);
  /// Atoms and brackets. Also the minimum for a complete expression.
  pub const MIN: Precedence = Precedence(0);
  pub const ADDITIVE: Precedence = Precedence(1);
  pub const MULTIPLICATIVE: Precedence = Precedence(2);
  pub const POWER: Precedence = Precedence(3);
  /// Named functions. These never combine as infix operators; a
  /// function token in infix position is an error.
  pub const FUNCTION: Precedence = Precedence(4);
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_ordering() {
    assert!(Precedence::END < Precedence::MIN);
    assert!(Precedence::MIN < Precedence::ADDITIVE);
    assert!(Precedence::ADDITIVE < Precedence::MULTIPLICATIVE);
    assert!(Precedence::MULTIPLICATIVE < Precedence::POWER);
    assert!(Precedence::POWER < Precedence::FUNCTION);
  }
}
