
//! Precedence-climbing parser from tokens to [`Expr`].
//!
//! Two procedures recurse into each other. `parse_atom` reads a
//! number, `x`, a constant, a bracketed expression, or a prefix
//! operator (unary minus or a named function) applied to another
//! atom. `parse_binary_expression` reads an atom and then folds infix
//! operators into it for as long as they bind tighter than its
//! minimum.
//!
//! A prefix operator takes only the following atom, so it binds
//! tighter than every infix operator: `sin x ^ 2` is `(sin x) ^ 2` and
//! `-x ^ 2` is `(-x) ^ 2`. All infix operators associate to the left,
//! `^` included: `a ^ b ^ c` is `(a ^ b) ^ c`.

use super::precedence::Precedence;
use super::source::SourceOffset;
use super::tokenizer::{Token, TokenKind, Tokenizer, TokenizerError};
use crate::expr::Expr;

use thiserror::Error;
use tracing::trace;

#[derive(Debug, Clone)]
pub struct Parser<'a> {
  tokens: &'a [Token],
  position: usize,
  end: Token,
}

#[derive(Debug, Clone, Error, PartialEq)]
#[non_exhaustive]
pub enum ParseError {
  #[error("Function is empty or not allowed")]
  EmptyInput,
  #[error("Expected closing bracket at {0}")]
  UnbalancedBrackets(SourceOffset),
  #[error("Second operand is missing")]
  MissingOperand,
  #[error("Missing argument for {0} function")]
  MissingArgument(String),
  #[error("Unexpected {0}")]
  UnsupportedToken(Token),
  #[error("{0}")]
  Tokenizer(#[from] TokenizerError),
}

/// Tokenizes and parses `input` as a single complete expression.
pub fn parse_str(input: &str) -> Result<Expr, ParseError> {
  let tokens = Tokenizer::new().tokenize(input)?;
  Parser::new(&tokens).parse()
}

impl<'a> Parser<'a> {
  pub fn new(tokens: &'a [Token]) -> Self {
    let end_pos = tokens.last().map_or(SourceOffset(0), |t| t.span.end);
    Self {
      tokens,
      position: 0,
      end: Token::end(end_pos),
    }
  }

  /// Parses the whole token stream. Every token must be consumed.
  pub fn parse(mut self) -> Result<Expr, ParseError> {
    if self.tokens.is_empty() {
      return Err(ParseError::EmptyInput);
    }
    let expr = self.parse_binary_expression(Precedence::MIN)?;
    let rest = self.next_token();
    if !rest.is_end() {
      return Err(ParseError::UnsupportedToken(rest.clone()));
    }
    Ok(expr)
  }

  fn peek_token(&self) -> &Token {
    self.tokens.get(self.position).unwrap_or(&self.end)
  }

  fn next_token(&mut self) -> &Token {
    let tokens = self.tokens;
    match tokens.get(self.position) {
      Some(token) => {
        self.position += 1;
        token
      }
      None => &self.end,
    }
  }

  fn parse_atom(&mut self) -> Result<Expr, ParseError> {
    let token = self.next_token().clone();
    match token.kind {
      TokenKind::Number => {
        let value = token.text.parse::<f64>().map_err(|_| {
          TokenizerError::InvalidNumber { text: token.text.clone(), span: token.span }
        })?;
        Ok(Expr::number(value))
      }
      TokenKind::Variable => Ok(Expr::variable()),
      TokenKind::ConstantE => Ok(Expr::e()),
      TokenKind::ConstantPi => Ok(Expr::pi()),
      TokenKind::OpenParen => {
        let inner = self.parse_binary_expression(Precedence::MIN)?;
        let close = self.next_token();
        if close.kind != TokenKind::CloseParen {
          return Err(ParseError::UnbalancedBrackets(close.span.start));
        }
        Ok(inner)
      }
      TokenKind::Minus | TokenKind::Function(_) => {
        let arg = self.parse_atom().map_err(|err| match err {
          ParseError::MissingOperand => ParseError::MissingArgument(token.text.clone()),
          err => err,
        })?;
        Ok(apply_prefix(&token, arg))
      }
      TokenKind::End => Err(ParseError::MissingOperand),
      TokenKind::Plus | TokenKind::Multiply | TokenKind::Divide | TokenKind::Power |
      TokenKind::CloseParen => Err(ParseError::UnsupportedToken(token)),
    }
  }

  fn parse_binary_expression(&mut self, min_precedence: Precedence) -> Result<Expr, ParseError> {
    let mut left = self.parse_atom()?;
    loop {
      let precedence = self.peek_token().kind.precedence();
      if precedence <= min_precedence {
        return Ok(left);
      }
      let operator = self.next_token().clone();
      trace!(operator = %operator.text, ?precedence, "infix operator");
      let right = self.parse_binary_expression(precedence)?;
      left = combine(left, &operator, right)?;
    }
  }
}

fn apply_prefix(token: &Token, arg: Expr) -> Expr {
  match token.kind {
    TokenKind::Function(function) => Expr::function(function, arg),
    _ => Expr::negate(arg),
  }
}

fn combine(left: Expr, operator: &Token, right: Expr) -> Result<Expr, ParseError> {
  match operator.kind {
    TokenKind::Plus => Ok(Expr::sum(left, right)),
    TokenKind::Minus => Ok(Expr::difference(left, right)),
    TokenKind::Multiply => Ok(Expr::product(left, right)),
    TokenKind::Divide => Ok(Expr::quotient(left, right)),
    TokenKind::Power => Ok(Expr::power(left, right)),
    _ => Err(ParseError::UnsupportedToken(operator.clone())),
  }
}
