
/// Limits applied by the [`Engine`](crate::engine::Engine).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EngineSettings {
  /// The highest derivative order
  /// [`derive_repeatedly`](crate::engine::Engine::derive_repeatedly)
  /// will compute. Each step can multiply the size of the result, so
  /// this is kept small.
  pub max_order: usize,
}

impl EngineSettings {
  pub const DEFAULT_MAX_ORDER: usize = 8;

  pub fn new() -> Self {
    Self::default()
  }

  pub fn with_max_order(mut self, max_order: usize) -> Self {
    self.max_order = max_order;
    self
  }
}

impl Default for EngineSettings {
  fn default() -> Self {
    EngineSettings {
      max_order: Self::DEFAULT_MAX_ORDER,
    }
  }
}
