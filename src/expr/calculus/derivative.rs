
use crate::expr::{Expr, ExprKind};
use crate::expr::function::UnaryFunction;

/// Differentiates `expr` with respect to `x`.
///
/// The result is built from the fixed rule for each node kind and is
/// never simplified structurally; the only simplification is what the
/// printer does. Operands of `expr` are shared into the result, not
/// copied.
pub fn differentiate(expr: &Expr) -> Expr {
  match expr.kind() {
    ExprKind::Number(_) | ExprKind::EulerConstant | ExprKind::PiConstant => {
      Expr::zero()
    }
    ExprKind::Variable => {
      Expr::one()
    }
    ExprKind::Sum(a, b) => {
      Expr::sum(differentiate(a), differentiate(b))
    }
    ExprKind::Difference(a, b) => {
      Expr::difference(differentiate(a), differentiate(b))
    }
    ExprKind::Product(a, b) => {
      // (ab)' = a'b + ab'
      Expr::sum(
        Expr::product(differentiate(a), b.clone()),
        Expr::product(a.clone(), differentiate(b)),
      )
    }
    ExprKind::Quotient(a, b) => {
      // (a/b)' = (a'b - ab') / b^2
      Expr::quotient(
        Expr::difference(
          Expr::product(differentiate(a), b.clone()),
          Expr::product(a.clone(), differentiate(b)),
        ),
        Expr::power(b.clone(), Expr::number(2.0)),
      )
    }
    ExprKind::Power(base, exponent) => {
      differentiate_power(base, exponent)
    }
    ExprKind::Function(function, arg) => {
      differentiate_function(*function, arg)
    }
  }
}

/// `(a^b)' = a^(b-1) * b * a' + b' * ln(a) * a^b`, applied to every
/// power, including constant exponents.
fn differentiate_power(base: &Expr, exponent: &Expr) -> Expr {
  Expr::sum(
    Expr::product(
      Expr::product(
        Expr::power(base.clone(), Expr::difference(exponent.clone(), Expr::one())),
        exponent.clone(),
      ),
      differentiate(base),
    ),
    Expr::product(
      Expr::product(differentiate(exponent), Expr::ln(base.clone())),
      Expr::power(base.clone(), exponent.clone()),
    ),
  )
}

fn differentiate_function(function: UnaryFunction, arg: &Expr) -> Expr {
  let d_arg = differentiate(arg);
  match function {
    UnaryFunction::Sin => {
      Expr::product(Expr::cos(arg.clone()), d_arg)
    }
    UnaryFunction::Cos => {
      Expr::negate(Expr::product(Expr::sin(arg.clone()), d_arg))
    }
    UnaryFunction::Tan => {
      Expr::quotient(d_arg, Expr::power(Expr::cos(arg.clone()), Expr::number(2.0)))
    }
    UnaryFunction::Cotan => {
      Expr::negate(
        Expr::quotient(d_arg, Expr::power(Expr::sin(arg.clone()), Expr::number(2.0))),
      )
    }
    UnaryFunction::Ln => {
      Expr::quotient(d_arg, arg.clone())
    }
    UnaryFunction::Lg => {
      Expr::quotient(d_arg, Expr::product(arg.clone(), Expr::ln(Expr::number(10.0))))
    }
    UnaryFunction::Sqrt => {
      Expr::quotient(d_arg, Expr::product(Expr::number(2.0), Expr::sqrt(arg.clone())))
    }
  }
}

/// Differentiates `n` times by applying the rules to the tree itself.
/// `n == 0` returns `expr` unchanged.
///
/// The tree can grow combinatorially with `n`, since the product,
/// quotient, and power rules each mention their operands more than
/// once.
pub fn nth_derivative(expr: &Expr, n: usize) -> Expr {
  (0..n).fold(expr.clone(), |acc, _| differentiate(&acc))
}

impl Expr {
  pub fn derivative(&self) -> Expr {
    differentiate(self)
  }

  pub fn nth_derivative(&self, n: usize) -> Expr {
    nth_derivative(self, n)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::parse;

  fn derive(input: &str) -> String {
    parse(input).unwrap().derivative().render()
  }

  fn binary_operands(expr: &Expr) -> (&Expr, &Expr) {
    match expr.kind() {
      ExprKind::Sum(a, b) | ExprKind::Difference(a, b) | ExprKind::Product(a, b) |
      ExprKind::Quotient(a, b) | ExprKind::Power(a, b) => (a, b),
      kind => panic!("expected binary node, got {kind:?}"),
    }
  }

  #[test]
  fn test_constants() {
    assert_eq!(Expr::number(7.5).derivative().render(), "0");
    assert_eq!(Expr::number(0.0).derivative().render(), "0");
    assert_eq!(Expr::e().derivative().render(), "0");
    assert_eq!(Expr::pi().derivative().render(), "0");
    assert_eq!(derive("cos(4)"), "0");
  }

  #[test]
  fn test_variable() {
    assert_eq!(derive("x"), "1");
  }

  #[test]
  fn test_sum_and_difference() {
    assert_eq!(derive("x + 5"), "1");
    assert_eq!(derive("x - 5"), "1");
    assert_eq!(derive("5 - x"), "-1");
    assert_eq!(derive("-x"), "-1");
    assert_eq!(derive("x + x"), "1 + 1");
  }

  #[test]
  fn test_product_rule_is_not_collected() {
    assert_eq!(derive("x*x"), "x + x");
    assert_eq!(derive("3*x"), "3");
  }

  #[test]
  fn test_quotient_rule() {
    assert_eq!(derive("x / (x + 1)"), "(x + 1 - x) / (x + 1) ^ 2");
    assert_eq!(derive("1 / x"), "-1 / x ^ 2");
  }

  #[test]
  fn test_trigonometry() {
    assert_eq!(derive("sin(x)"), "cos(x)");
    assert_eq!(derive("cos(x)"), "-sin(x)");
    assert_eq!(derive("tg(x)"), "1 / cos(x) ^ 2");
    assert_eq!(derive("ctg(x)"), "-1 / sin(x) ^ 2");
  }

  #[test]
  fn test_logarithms_and_roots() {
    assert_eq!(derive("ln(x)"), "1 / x");
    assert_eq!(derive("lg(x)"), "1 / (x * ln(10))");
    assert_eq!(derive("sqrt(x)"), "1 / (2 * sqrt(x))");
  }

  #[test]
  fn test_power_with_constant_exponent_uses_general_rule() {
    assert_eq!(derive("x^2"), "x ^ (2 - 1) * 2");
  }

  #[test]
  fn test_exponential() {
    assert_eq!(derive("e^x"), "e ^ x");
    assert_eq!(derive("cos(4) + e^x"), "e ^ x");
  }

  #[test]
  fn test_cos_to_the_x() {
    assert_eq!(
      derive("cos(x)^x"),
      "cos(x) ^ (x - 1) * x * (-sin(x)) + ln(cos(x)) * cos(x) ^ x",
    );
  }

  #[test]
  fn test_chain_rule() {
    assert_eq!(derive("sin(x^2)"), "cos(x ^ 2) * x ^ (2 - 1) * 2");
    assert_eq!(derive("ln(sin(x))"), "cos(x) / sin(x)");
  }

  #[test]
  fn test_polynomial_with_sine() {
    assert_eq!(
      derive("x*x*(x^10)+15*sin(x)"),
      "(x + x) * x ^ 10 + x * x * x ^ (10 - 1) * 10 + 15 * cos(x)",
    );
  }

  #[test]
  fn test_power_rule_shares_operands() {
    let expr = parse("cos(x)^x").unwrap();
    let (base, exponent) = binary_operands(&expr);
    let derivative = expr.derivative();

    let (_, right) = binary_operands(&derivative);
    let (_, power) = binary_operands(right);
    let (new_base, new_exponent) = binary_operands(power);
    assert!(new_base.ptr_eq(base));
    assert!(new_exponent.ptr_eq(exponent));
  }

  #[test]
  fn test_nth_derivative() {
    let expr = parse("x*x").unwrap();
    assert!(expr.nth_derivative(0).ptr_eq(&expr));
    assert_eq!(expr.nth_derivative(1).render(), "x + x");
    assert_eq!(expr.nth_derivative(2).render(), "1 + 1");
    assert_eq!(expr.nth_derivative(3).render(), "0");
  }

  #[test]
  fn test_repeated_derivatives_grow() {
    let expr = parse("x^x").unwrap();
    let sizes = (0..4).map(|n| expr.nth_derivative(n).size()).collect::<Vec<_>>();
    assert!(sizes.windows(2).all(|w| w[0] < w[1]), "sizes: {sizes:?}");
  }
}
