
use super::precedence::Precedence;
use super::source::{SourceOffset, Span};
use crate::expr::function::UnaryFunction;

use itertools::Itertools;
use phf::phf_map;
use serde::{Serialize, Deserialize};
use thiserror::Error;
use tracing::debug;

use std::fmt::{self, Display, Formatter};
use std::mem;

/// Splits input text into [`Token`]s.
///
/// The tokenizer is a single left-to-right scan over one accumulating
/// buffer. A space ends the current token. Digits and `.` accumulate
/// into a number, and any other character ends a pending number.
/// After every character, the buffer is looked up in the keyword
/// table; an exact match finishes the token on the spot, which is why
/// `sinx` reads as `sin` followed by `x`.
#[derive(Clone, Debug, Default)]
pub struct Tokenizer {
  _priv: (),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Token {
  pub kind: TokenKind,
  pub text: String,
  pub span: Span,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TokenKind {
  Number,
  /// The independent variable `x`.
  Variable,
  ConstantE,
  ConstantPi,
  Plus,
  Minus,
  Multiply,
  Divide,
  Power,
  /// Any of `(`, `[`, `{`.
  OpenParen,
  /// Any of `)`, `]`, `}`.
  CloseParen,
  Function(UnaryFunction),
  /// Never produced by the tokenizer. The parser reports this when it
  /// reads past the last token.
  End,
}

#[derive(Debug, Clone, Error, PartialEq)]
#[non_exhaustive]
pub enum TokenizerError {
  #[error("Syntax error: '{text}' at {span}")]
  SyntaxError { text: String, span: Span },
  #[error("Unrecognized input '{text}' at {span}")]
  UnrecognizedInput { text: String, span: Span },
  #[error("Invalid number '{text}' at {span}")]
  InvalidNumber { text: String, span: Span },
}

static KEYWORDS: phf::Map<&'static str, TokenKind> = phf_map! {
  "sin" => TokenKind::Function(UnaryFunction::Sin),
  "cos" => TokenKind::Function(UnaryFunction::Cos),
  "tg" => TokenKind::Function(UnaryFunction::Tan),
  "ctg" => TokenKind::Function(UnaryFunction::Cotan),
  "ln" => TokenKind::Function(UnaryFunction::Ln),
  "lg" => TokenKind::Function(UnaryFunction::Lg),
  "sqrt" => TokenKind::Function(UnaryFunction::Sqrt),
  "x" => TokenKind::Variable,
  "e" => TokenKind::ConstantE,
  "pi" => TokenKind::ConstantPi,
  "^" => TokenKind::Power,
  "+" => TokenKind::Plus,
  "-" => TokenKind::Minus,
  "/" => TokenKind::Divide,
  "*" => TokenKind::Multiply,
  "(" => TokenKind::OpenParen,
  "[" => TokenKind::OpenParen,
  "{" => TokenKind::OpenParen,
  ")" => TokenKind::CloseParen,
  "]" => TokenKind::CloseParen,
  "}" => TokenKind::CloseParen,
};

/// The token currently being accumulated. `kind` stays `None` until
/// the buffer is known to be a number or matches a keyword.
#[derive(Debug, Default)]
struct PendingToken {
  kind: Option<TokenKind>,
  text: String,
  start: SourceOffset,
}

impl Tokenizer {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn tokenize(&self, input: &str) -> Result<Vec<Token>, TokenizerError> {
    let mut tokens = Vec::new();
    let mut pending = PendingToken::default();
    for (pos, ch) in input.char_indices() {
      let pos = SourceOffset(pos);
      if ch == ' ' {
        pending.flush_into(&mut tokens, pos)?;
        continue;
      }
      if ch.is_ascii_digit() && pending.has_letter() {
        return Err(TokenizerError::SyntaxError {
          text: format!("{}{}", pending.text, ch),
          span: Span::new(pending.start, pos + ch.len_utf8()),
        });
      }

      let extends_number =
        ch == '.' || (ch.is_ascii_digit() && matches!(pending.kind, None | Some(TokenKind::Number)));
      if extends_number {
        pending.kind = Some(TokenKind::Number);
      } else if pending.kind == Some(TokenKind::Number) {
        pending.flush_into(&mut tokens, pos)?;
      }

      pending.push(ch, pos);
      if let Some(kind) = KEYWORDS.get(pending.text.as_str()) {
        pending.kind = Some(*kind);
        pending.flush_into(&mut tokens, pos + ch.len_utf8())?;
      }
    }
    pending.flush_into(&mut tokens, SourceOffset(input.len()))?;

    debug!(input, tokens = %tokens.iter().map(|t| &t.text).join(" "), "tokenized input");
    Ok(tokens)
  }
}

impl PendingToken {
  fn push(&mut self, ch: char, pos: SourceOffset) {
    if self.text.is_empty() {
      self.start = pos;
    }
    self.text.push(ch);
  }

  fn has_letter(&self) -> bool {
    self.text.chars().any(|c| c.is_ascii_alphabetic())
  }

  /// Emits the buffer as a finished token (if there is one) and resets
  /// it. A non-empty buffer that never became a number or keyword is
  /// rejected here, as is a number too large to be finite.
  fn flush_into(&mut self, tokens: &mut Vec<Token>, end: SourceOffset) -> Result<(), TokenizerError> {
    let kind = self.kind.take();
    let text = mem::take(&mut self.text);
    if text.is_empty() {
      return Ok(());
    }
    let span = Span::new(self.start, end);
    match kind {
      None => {
        Err(TokenizerError::UnrecognizedInput { text, span })
      }
      Some(TokenKind::Number) if text.parse::<f64>().map_or(true, |v| !v.is_finite()) => {
        Err(TokenizerError::InvalidNumber { text, span })
      }
      Some(kind) => {
        tokens.push(Token::new(kind, text, span));
        Ok(())
      }
    }
  }
}

impl Token {
  pub fn new(kind: TokenKind, text: impl Into<String>, span: Span) -> Self {
    Self { kind, text: text.into(), span }
  }

  /// The sentinel token reported at the end of the stream.
  pub fn end(pos: SourceOffset) -> Self {
    Self::new(TokenKind::End, "", Span::empty_at(pos))
  }

  pub fn is_end(&self) -> bool {
    self.kind == TokenKind::End
  }
}

impl TokenKind {
  /// Binding strength of this token when it follows a complete
  /// operand. Tokens which cannot continue an expression sit at
  /// [`Precedence::MIN`], so they stop every operator loop.
  pub fn precedence(self) -> Precedence {
    match self {
      TokenKind::Function(_) => Precedence::FUNCTION,
      TokenKind::Power => Precedence::POWER,
      TokenKind::Multiply | TokenKind::Divide => Precedence::MULTIPLICATIVE,
      TokenKind::Plus | TokenKind::Minus => Precedence::ADDITIVE,
      TokenKind::End => Precedence::END,
      TokenKind::Number | TokenKind::Variable | TokenKind::ConstantE | TokenKind::ConstantPi |
      TokenKind::OpenParen | TokenKind::CloseParen => Precedence::MIN,
    }
  }
}

impl Display for Token {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    if self.is_end() {
      write!(f, "end of input")
    } else {
      write!(f, "'{}' at {}", self.text, self.span)
    }
  }
}

impl Display for TokenKind {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    match self {
      TokenKind::Number => write!(f, "number"),
      TokenKind::Variable => write!(f, "x"),
      TokenKind::ConstantE => write!(f, "e"),
      TokenKind::ConstantPi => write!(f, "pi"),
      TokenKind::Plus => write!(f, "+"),
      TokenKind::Minus => write!(f, "-"),
      TokenKind::Multiply => write!(f, "*"),
      TokenKind::Divide => write!(f, "/"),
      TokenKind::Power => write!(f, "^"),
      TokenKind::OpenParen => write!(f, "("),
      TokenKind::CloseParen => write!(f, ")"),
      TokenKind::Function(func) => write!(f, "{func}"),
      TokenKind::End => write!(f, "end of input"),
    }
  }
}
