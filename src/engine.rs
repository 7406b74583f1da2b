
//! Entry points for a front-end: text in, derivative text (or an error
//! message) out.

use crate::error::Error;
use crate::parsing::parser::parse_str;
use crate::settings::EngineSettings;

use serde::{Serialize, Deserialize};
use tracing::debug;

#[derive(Clone, Debug, Default)]
pub struct Engine {
  settings: EngineSettings,
}

/// The result of differentiating one input.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Derivation {
  /// The text exactly as given.
  pub input: String,
  /// The parsed input, printed back in canonical form.
  pub function: String,
  pub derivative: String,
}

impl Engine {
  pub fn new(settings: EngineSettings) -> Self {
    Self { settings }
  }

  pub fn settings(&self) -> &EngineSettings {
    &self.settings
  }

  pub fn derive(&self, input: &str) -> Result<Derivation, Error> {
    let expr = parse_str(input)?;
    let derivative = expr.derivative();
    let derivation = Derivation {
      input: input.to_owned(),
      function: expr.render(),
      derivative: derivative.render(),
    };
    debug!(input, derivative = %derivation.derivative, "derived expression");
    Ok(derivation)
  }

  /// Differentiates `order` times, feeding the printed result of each
  /// step back in as the next input. Printing simplifies, so this can
  /// differ from [`Expr::nth_derivative`](crate::expr::Expr::nth_derivative),
  /// which works on the tree directly.
  pub fn derive_repeatedly(&self, input: &str, order: usize) -> Result<Vec<Derivation>, Error> {
    let max = self.settings.max_order;
    if order > max {
      return Err(Error::OrderTooHigh { order, max });
    }
    debug!(input, order, "deriving repeatedly");
    let mut steps: Vec<Derivation> = Vec::with_capacity(order);
    for _ in 0..order {
      let next_input = steps.last().map_or(input, |step| step.derivative.as_str());
      let step = self.derive(next_input)?;
      steps.push(step);
    }
    Ok(steps)
  }
}

impl Derivation {
  pub fn to_json(&self) -> serde_json::Result<String> {
    serde_json::to_string(self)
  }
}
