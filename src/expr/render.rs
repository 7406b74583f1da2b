
//! Printing expressions as text.
//!
//! Each node prints its operands first and then decides, from their
//! text, whether it collapses (`0 + a` prints as `a`, `a * 1` as `a`,
//! and so on) and which operands need brackets. Operand brackets are
//! chosen from the operand's [rank](super::Expr::rank), which is fixed
//! when the node is built.
//!
//! Nothing is cached. A subtree shared by several parents is printed
//! once per parent.

use super::{Expr, ExprKind};
use super::function::UnaryFunction;
use super::number::format_number;

/// Printing ranks. Higher binds tighter.
pub mod rank {
  pub const ATOM: u8 = 0;
  /// A difference whose left side prints as "0", i.e. `-a`.
  pub const NEGATION: u8 = 1;
  pub const ADDITIVE: u8 = 2;
  pub const MULTIPLICATIVE: u8 = 3;
  pub const POWER: u8 = 4;
  pub const FUNCTION: u8 = 5;
}

pub fn render(expr: &Expr) -> String {
  match expr.kind() {
    ExprKind::Number(value) => format_number(*value),
    ExprKind::Variable => String::from("x"),
    ExprKind::EulerConstant => String::from("e"),
    ExprKind::PiConstant => String::from("pi"),
    ExprKind::Sum(a, b) => render_sum(a, b),
    ExprKind::Difference(a, b) => render_difference(a, b),
    ExprKind::Product(a, b) => render_product(a, b),
    ExprKind::Quotient(a, b) => render_quotient(a, b),
    ExprKind::Power(base, exponent) => render_power(base, exponent),
    ExprKind::Function(function, arg) => render_function(*function, arg),
  }
}

/// Computes the rank of a node about to be built from `kind`.
pub(super) fn rank_of(kind: &ExprKind) -> u8 {
  match kind {
    ExprKind::Number(_) | ExprKind::Variable | ExprKind::EulerConstant | ExprKind::PiConstant => {
      rank::ATOM
    }
    ExprKind::Sum(a, b) => {
      if a.render() == "0" || b.render() == "0" {
        rank::ATOM
      } else {
        rank::ADDITIVE
      }
    }
    ExprKind::Difference(a, _) => {
      if a.render() == "0" {
        rank::NEGATION
      } else {
        rank::ADDITIVE
      }
    }
    ExprKind::Product(a, b) => {
      let (a_text, b_text) = (a.render(), b.render());
      if a_text == "0" || b_text == "0" {
        rank::ATOM
      } else if a_text == "1" {
        b.rank()
      } else if b_text == "1" {
        a.rank()
      } else {
        rank::MULTIPLICATIVE
      }
    }
    ExprKind::Quotient(_, _) => rank::MULTIPLICATIVE,
    ExprKind::Power(_, _) => rank::POWER,
    ExprKind::Function(_, _) => rank::FUNCTION,
  }
}

/// Wraps `text` in brackets if `low < rank < high`.
fn bracket_between(text: String, rank: u8, low: u8, high: u8) -> String {
  if low < rank && rank < high {
    format!("({text})")
  } else {
    text
  }
}

fn render_sum(a: &Expr, b: &Expr) -> String {
  let (a_text, b_text) = (a.render(), b.render());
  match (a_text.as_str(), b_text.as_str()) {
    ("0", "0") => String::from("0"),
    ("0", _) => b_text,
    (_, "0") => a_text,
    _ => format!("{a_text} + {b_text}"),
  }
}

fn render_difference(a: &Expr, b: &Expr) -> String {
  let (a_text, b_text) = (a.render(), b.render());
  match (a_text.as_str(), b_text.as_str()) {
    ("0", "0") => String::from("0"),
    ("0", _) => format!("-{b_text}"),
    (_, "0") => a_text,
    _ => {
      let b_text = bracket_between(b_text, b.rank(), rank::ATOM, rank::FUNCTION);
      format!("{a_text} - {b_text}")
    }
  }
}

fn render_product(a: &Expr, b: &Expr) -> String {
  let (a_text, b_text) = (a.render(), b.render());
  if a_text == "0" || b_text == "0" {
    return String::from("0");
  }
  if a_text == "1" {
    return b_text;
  }
  if b_text == "1" {
    return a_text;
  }
  let a_text = bracket_between(a_text, a.rank(), rank::ATOM, rank::MULTIPLICATIVE);
  let b_text = bracket_between(b_text, b.rank(), rank::ATOM, rank::POWER);
  format!("{a_text} * {b_text}")
}

fn render_quotient(a: &Expr, b: &Expr) -> String {
  let a_text = a.render();
  if a_text == "0" {
    return a_text;
  }
  let b_text = b.render();
  if b_text == "1" {
    return a_text;
  }
  // A negation on the left is left bare: `-a / b`.
  let a_text = bracket_between(a_text, a.rank(), rank::NEGATION, rank::MULTIPLICATIVE);
  let b_text = bracket_between(b_text, b.rank(), rank::ATOM, rank::POWER);
  format!("{a_text} / {b_text}")
}

fn render_power(base: &Expr, exponent: &Expr) -> String {
  let exponent_text = exponent.render();
  let base_text = base.render();
  if exponent_text == "1" {
    return base_text;
  }
  if exponent_text == "0" {
    return String::from("1");
  }
  if base_text == "0" {
    return base_text;
  }
  let base_text = bracket_between(base_text, base.rank(), rank::ATOM, rank::POWER);
  let exponent_text = bracket_between(exponent_text, exponent.rank(), rank::ATOM, rank::FUNCTION);
  format!("{base_text} ^ {exponent_text}")
}

fn render_function(function: UnaryFunction, arg: &Expr) -> String {
  let arg_text = arg.render();
  match (function, arg_text.as_str()) {
    (UnaryFunction::Ln, "e") => String::from("1"),
    (UnaryFunction::Ln, "1") => String::from("0"),
    (UnaryFunction::Lg, "10") => String::from("1"),
    (UnaryFunction::Lg, "1") => String::from("0"),
    (UnaryFunction::Sqrt, "0") => String::from("0"),
    _ => format!("{function}({arg_text})"),
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn x() -> Expr {
    Expr::variable()
  }

  fn n(value: f64) -> Expr {
    Expr::number(value)
  }

  #[test]
  fn test_leaves() {
    assert_eq!(render(&n(4.0)), "4");
    assert_eq!(render(&n(2.5)), "2.5");
    assert_eq!(render(&x()), "x");
    assert_eq!(render(&Expr::e()), "e");
    assert_eq!(render(&Expr::pi()), "pi");
  }

  #[test]
  fn test_sum() {
    assert_eq!(render(&Expr::sum(x(), n(1.0))), "x + 1");
    assert_eq!(render(&Expr::sum(n(0.0), x())), "x");
    assert_eq!(render(&Expr::sum(x(), n(0.0))), "x");
    assert_eq!(render(&Expr::sum(n(0.0), n(0.0))), "0");
    // Sums never bracket their operands.
    assert_eq!(render(&Expr::sum(x(), Expr::difference(x(), n(1.0)))), "x + x - 1");
  }

  #[test]
  fn test_difference() {
    assert_eq!(render(&Expr::difference(x(), n(1.0))), "x - 1");
    assert_eq!(render(&Expr::difference(n(0.0), x())), "-x");
    assert_eq!(render(&Expr::difference(x(), n(0.0))), "x");
    assert_eq!(render(&Expr::difference(n(0.0), n(0.0))), "0");
    assert_eq!(render(&Expr::difference(x(), Expr::sum(x(), n(1.0)))), "x - (x + 1)");
    assert_eq!(render(&Expr::difference(x(), Expr::negate(x()))), "x - (-x)");
    assert_eq!(render(&Expr::difference(x(), Expr::product(x(), x()))), "x - (x * x)");
    assert_eq!(render(&Expr::difference(x(), Expr::power(x(), n(2.0)))), "x - (x ^ 2)");
    assert_eq!(render(&Expr::difference(x(), Expr::sin(x()))), "x - sin(x)");
    // Negation does not bracket at all.
    assert_eq!(render(&Expr::negate(Expr::sum(x(), n(1.0)))), "-x + 1");
  }

  #[test]
  fn test_product() {
    assert_eq!(render(&Expr::product(x(), x())), "x * x");
    assert_eq!(render(&Expr::product(n(0.0), x())), "0");
    assert_eq!(render(&Expr::product(x(), n(0.0))), "0");
    assert_eq!(render(&Expr::product(n(1.0), x())), "x");
    assert_eq!(render(&Expr::product(x(), n(1.0))), "x");
    assert_eq!(render(&Expr::product(Expr::sum(x(), n(1.0)), x())), "(x + 1) * x");
    assert_eq!(render(&Expr::product(Expr::negate(x()), x())), "(-x) * x");
    assert_eq!(render(&Expr::product(Expr::product(x(), x()), x())), "x * x * x");
    assert_eq!(render(&Expr::product(x(), Expr::product(x(), x()))), "x * (x * x)");
    assert_eq!(render(&Expr::product(x(), Expr::power(x(), n(2.0)))), "x * x ^ 2");
    assert_eq!(render(&Expr::product(x(), Expr::quotient(x(), n(2.0)))), "x * (x / 2)");
  }

  #[test]
  fn test_quotient() {
    assert_eq!(render(&Expr::quotient(x(), n(2.0))), "x / 2");
    assert_eq!(render(&Expr::quotient(n(0.0), x())), "0");
    assert_eq!(render(&Expr::quotient(x(), n(1.0))), "x");
    assert_eq!(render(&Expr::quotient(Expr::sum(x(), n(1.0)), x())), "(x + 1) / x");
    assert_eq!(render(&Expr::quotient(Expr::negate(x()), x())), "-x / x");
    assert_eq!(render(&Expr::quotient(Expr::product(x(), x()), x())), "x * x / x");
    assert_eq!(render(&Expr::quotient(x(), Expr::product(x(), x()))), "x / (x * x)");
    assert_eq!(render(&Expr::quotient(x(), Expr::power(x(), n(2.0)))), "x / x ^ 2");
  }

  #[test]
  fn test_quotient_by_zero_is_not_simplified() {
    assert_eq!(render(&Expr::quotient(x(), n(0.0))), "x / 0");
  }

  #[test]
  fn test_power() {
    assert_eq!(render(&Expr::power(x(), n(2.0))), "x ^ 2");
    assert_eq!(render(&Expr::power(x(), n(1.0))), "x");
    assert_eq!(render(&Expr::power(x(), n(0.0))), "1");
    assert_eq!(render(&Expr::power(n(0.0), x())), "0");
    // The exponent check comes first.
    assert_eq!(render(&Expr::power(n(0.0), n(0.0))), "1");
    assert_eq!(render(&Expr::power(Expr::sum(x(), n(1.0)), n(2.0))), "(x + 1) ^ 2");
    assert_eq!(render(&Expr::power(Expr::product(x(), x()), n(2.0))), "(x * x) ^ 2");
    assert_eq!(render(&Expr::power(Expr::power(x(), n(2.0)), n(3.0))), "x ^ 2 ^ 3");
    assert_eq!(render(&Expr::power(x(), Expr::power(n(2.0), n(3.0)))), "x ^ (2 ^ 3)");
    assert_eq!(render(&Expr::power(Expr::sin(x()), x())), "sin(x) ^ x");
    assert_eq!(render(&Expr::power(x(), Expr::sin(x()))), "x ^ sin(x)");
  }

  #[test]
  fn test_logarithms() {
    assert_eq!(render(&Expr::ln(x())), "ln(x)");
    assert_eq!(render(&Expr::ln(Expr::e())), "1");
    assert_eq!(render(&Expr::ln(n(1.0))), "0");
    let lg = |arg| Expr::function(UnaryFunction::Lg, arg);
    assert_eq!(render(&lg(x())), "lg(x)");
    assert_eq!(render(&lg(n(10.0))), "1");
    assert_eq!(render(&lg(n(1.0))), "0");
    assert_eq!(render(&lg(Expr::e())), "lg(e)");
  }

  #[test]
  fn test_sqrt() {
    assert_eq!(render(&Expr::sqrt(x())), "sqrt(x)");
    assert_eq!(render(&Expr::sqrt(n(0.0))), "0");
    assert_eq!(render(&Expr::sqrt(n(1.0))), "sqrt(1)");
  }

  #[test]
  fn test_trigonometry_never_simplifies() {
    assert_eq!(render(&Expr::sin(n(0.0))), "sin(0)");
    assert_eq!(render(&Expr::cos(n(4.0))), "cos(4)");
    assert_eq!(render(&Expr::function(UnaryFunction::Tan, Expr::pi())), "tg(pi)");
    assert_eq!(render(&Expr::function(UnaryFunction::Cotan, x())), "ctg(x)");
  }

  #[test]
  fn test_simplification_cascades() {
    // 0 * x prints "0", so the sum collapses around it.
    let expr = Expr::sum(Expr::product(n(0.0), x()), Expr::sin(x()));
    assert_eq!(render(&expr), "sin(x)");
  }
}
