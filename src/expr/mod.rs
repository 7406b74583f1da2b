
//! The expression tree.
//!
//! An [`Expr`] is a cheap handle to an immutable node. Cloning an
//! `Expr` shares the node rather than copying it, and the derivative
//! rules lean on that: the rule for `a ^ b` mentions `a` and `b` twice
//! each, and all of those positions point at the same subtree.

pub mod calculus;
pub mod function;
pub mod number;
pub mod render;

use function::UnaryFunction;

use std::fmt::{self, Display, Formatter};
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq)]
pub struct Expr {
  node: Arc<Node>,
}

#[derive(Debug, PartialEq)]
struct Node {
  kind: ExprKind,
  rank: u8,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ExprKind {
  Number(f64),
  /// The independent variable `x`.
  Variable,
  EulerConstant,
  PiConstant,
  Sum(Expr, Expr),
  Difference(Expr, Expr),
  Product(Expr, Expr),
  Quotient(Expr, Expr),
  /// Base and exponent.
  Power(Expr, Expr),
  Function(UnaryFunction, Expr),
}

impl Expr {
  /// Builds a node, fixing its printing rank from the rendered text of
  /// its operands. The rank never changes afterward.
  pub fn new(kind: ExprKind) -> Expr {
    let rank = render::rank_of(&kind);
    Expr { node: Arc::new(Node { kind, rank }) }
  }

  pub fn number(value: f64) -> Expr {
    Expr::new(ExprKind::Number(value))
  }

  pub fn zero() -> Expr {
    Expr::number(0.0)
  }

  pub fn one() -> Expr {
    Expr::number(1.0)
  }

  pub fn variable() -> Expr {
    Expr::new(ExprKind::Variable)
  }

  pub fn e() -> Expr {
    Expr::new(ExprKind::EulerConstant)
  }

  pub fn pi() -> Expr {
    Expr::new(ExprKind::PiConstant)
  }

  pub fn sum(left: Expr, right: Expr) -> Expr {
    Expr::new(ExprKind::Sum(left, right))
  }

  pub fn difference(left: Expr, right: Expr) -> Expr {
    Expr::new(ExprKind::Difference(left, right))
  }

  /// Negation has no node of its own; it is `0 - arg`.
  pub fn negate(arg: Expr) -> Expr {
    Expr::difference(Expr::zero(), arg)
  }

  pub fn product(left: Expr, right: Expr) -> Expr {
    Expr::new(ExprKind::Product(left, right))
  }

  pub fn quotient(left: Expr, right: Expr) -> Expr {
    Expr::new(ExprKind::Quotient(left, right))
  }

  pub fn power(base: Expr, exponent: Expr) -> Expr {
    Expr::new(ExprKind::Power(base, exponent))
  }

  pub fn function(function: UnaryFunction, arg: Expr) -> Expr {
    Expr::new(ExprKind::Function(function, arg))
  }

  pub fn sin(arg: Expr) -> Expr {
    Expr::function(UnaryFunction::Sin, arg)
  }

  pub fn cos(arg: Expr) -> Expr {
    Expr::function(UnaryFunction::Cos, arg)
  }

  pub fn ln(arg: Expr) -> Expr {
    Expr::function(UnaryFunction::Ln, arg)
  }

  pub fn sqrt(arg: Expr) -> Expr {
    Expr::function(UnaryFunction::Sqrt, arg)
  }

  pub fn kind(&self) -> &ExprKind {
    &self.node.kind
  }

  /// The printing rank: decides whether this expression needs
  /// brackets when it appears as an operand. It has no bearing on what
  /// the expression means.
  pub fn rank(&self) -> u8 {
    self.node.rank
  }

  pub fn render(&self) -> String {
    render::render(self)
  }

  /// True if both handles point at the very same node.
  pub fn ptr_eq(&self, other: &Expr) -> bool {
    Arc::ptr_eq(&self.node, &other.node)
  }

  /// Number of positions in the tree, counting a shared subtree once
  /// per parent that refers to it.
  pub fn size(&self) -> usize {
    1 + self.children().map(Expr::size).sum::<usize>()
  }

  pub fn children(&self) -> impl Iterator<Item = &Expr> {
    let (first, second) = match self.kind() {
      ExprKind::Number(_) | ExprKind::Variable | ExprKind::EulerConstant | ExprKind::PiConstant => {
        (None, None)
      }
      ExprKind::Sum(a, b) | ExprKind::Difference(a, b) | ExprKind::Product(a, b) |
      ExprKind::Quotient(a, b) | ExprKind::Power(a, b) => {
        (Some(a), Some(b))
      }
      ExprKind::Function(_, a) => {
        (Some(a), None)
      }
    };
    first.into_iter().chain(second)
  }
}

impl From<f64> for Expr {
  fn from(value: f64) -> Expr {
    Expr::number(value)
  }
}

impl Display for Expr {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.render())
  }
}
