
//! Turning input text into an [`Expr`](crate::expr::Expr).

pub mod parser;
pub mod precedence;
pub mod source;
pub mod tokenizer;
