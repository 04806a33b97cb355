//! # Negabinary
//!
//! Arbitrary-precision signed integers stored in base −2.
//!
//! A value is a sequence of bits b₀, b₁, … (low-order first) with
//! value = Σ bᵢ·(−2)ⁱ. Because the base is negative there is no sign bit:
//! positive and negative values share one representation, and the range
//! grows simply by extending the sequence.

pub mod negabinary;

// Re-export commonly used types
pub use negabinary::{Bits, CarryKind, CarryStep, NegabinaryError, NegabinaryInteger};
