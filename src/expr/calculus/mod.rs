
//! Symbolic differentiation with respect to `x`.

mod derivative;

pub use derivative::{differentiate, nth_derivative};
