
use serde::{Serialize, Deserialize};

use std::fmt::{self, Display, Formatter};

/// The named single-argument functions understood by the parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnaryFunction {
  Sin,
  Cos,
  /// Tangent, written `tg`.
  Tan,
  /// Cotangent, written `ctg`.
  Cotan,
  /// Natural logarithm, written `ln`.
  Ln,
  /// Base-10 logarithm, written `lg`.
  Lg,
  Sqrt,
}

impl UnaryFunction {
  pub const ALL: [UnaryFunction; 7] = [
    UnaryFunction::Sin,
    UnaryFunction::Cos,
    UnaryFunction::Tan,
    UnaryFunction::Cotan,
    UnaryFunction::Ln,
    UnaryFunction::Lg,
    UnaryFunction::Sqrt,
  ];

  /// The name as it is typed and printed.
  pub const fn name(self) -> &'static str {
    match self {
      UnaryFunction::Sin => "sin",
      UnaryFunction::Cos => "cos",
      UnaryFunction::Tan => "tg",
      UnaryFunction::Cotan => "ctg",
      UnaryFunction::Ln => "ln",
      UnaryFunction::Lg => "lg",
      UnaryFunction::Sqrt => "sqrt",
    }
  }
}

impl Display for UnaryFunction {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.name())
  }
}
