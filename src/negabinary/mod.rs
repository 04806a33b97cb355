//! Negabinary (base −2) number system primitives.
//!
//! This module provides the core types for working with negabinary:
//! - [`Bits`] - A growable, low-order-first sequence of bits
//! - [`NegabinaryInteger`] - An arbitrary-precision signed integer in base −2
//! - [`NegabinaryError`] - Conversion and parse failures

mod bits;
mod cmp;
mod error;
mod integer;
mod ops;
pub mod arith;

pub use bits::Bits;
pub use error::NegabinaryError;
pub use integer::NegabinaryInteger;
pub use arith::{add, subtract, negate, CarryKind, CarryStep};
pub use cmp::compare;
