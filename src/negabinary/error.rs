//! Error types for negabinary conversion and parsing.

use thiserror::Error;

/// Errors that can occur when leaving or entering the negabinary encoding.
///
/// Arithmetic, comparison and trimming never fail; only conversion to a
/// native integer and text parsing can.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NegabinaryError {
    /// The value does not fit in the native integer type.
    #[error("value of {len} negabinary bits is out of range for i64")]
    OutOfRange { len: usize },

    /// A character other than '0' or '1' appeared in a bit string.
    #[error("invalid bit character '{found}' at index {index} (expected 0 or 1)")]
    InvalidBit { index: usize, found: char },
}
