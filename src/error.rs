
use crate::parsing::parser::ParseError;
use crate::parsing::tokenizer::TokenizerError;

use thiserror::Error;

/// Any error the engine reports to a front-end. The `Display` text is
/// meant to be shown to the user as-is.
#[derive(Debug, Clone, Error, PartialEq)]
#[non_exhaustive]
pub enum Error {
  #[error("{0}")]
  ParseError(#[from] ParseError),
  #[error("Derivative order {order} exceeds the limit of {max}")]
  OrderTooHigh { order: usize, max: usize },
}

impl From<TokenizerError> for Error {
  fn from(err: TokenizerError) -> Self {
    Self::ParseError(err.into())
  }
}
