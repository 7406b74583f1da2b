
// The #[non_exhaustive] attribute applies at the crate-level, and I
// want module-level restrictions, which are far stricter.
#![allow(clippy::manual_non_exhaustive)]

//! Symbolic differentiation of single-variable expressions in `x`.
//!
//! Text is tokenized, parsed into an [`Expr`], differentiated by fixed
//! rules, and printed back with a handful of printing-time
//! simplifications (`0 + a` is `a`, `1 * a` is `a`, and so on).

pub mod engine;
pub mod error;
pub mod expr;
pub mod parsing;
pub mod settings;


pub use engine::{Engine, Derivation};
pub use error::Error;
pub use expr::{Expr, ExprKind};
pub use expr::function::UnaryFunction;
pub use parsing::parser::ParseError;
pub use parsing::source::{SourceOffset, Span};
pub use parsing::tokenizer::{Token, TokenKind, Tokenizer, TokenizerError};
pub use settings::EngineSettings;

use tracing::debug;

pub fn tokenize(input: &str) -> Result<Vec<Token>, TokenizerError> {
  Tokenizer::new().tokenize(input)
}

pub fn parse(input: &str) -> Result<Expr, ParseError> {
  let expr = parsing::parser::parse_str(input)?;
  debug!(input, parsed = %expr, "parsed expression");
  Ok(expr)
}

pub fn differentiate(expr: &Expr) -> Expr {
  expr::calculus::differentiate(expr)
}

pub fn render(expr: &Expr) -> String {
  expr::render::render(expr)
}
