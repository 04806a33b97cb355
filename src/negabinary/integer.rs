//! Arbitrary-precision negabinary integers.
//!
//! A [`NegabinaryInteger`] is an unbounded bit sequence interpreted as
//! Σ bᵢ·(−2)ⁱ. There is no sign bit and no overflow: negative values simply
//! have their highest set bit at an odd index, positive values at an even one.

use std::fmt;
use std::str::FromStr;
use serde::{Serialize, Deserialize};
use crate::negabinary::{Bits, NegabinaryError};

/// An arbitrary-precision signed integer in base −2.
///
/// Canonical form has no high-order `false` bits, so zero is the empty
/// sequence. Every arithmetic operation returns a canonical value; only
/// [`NegabinaryInteger::from_bits`] and [`NegabinaryInteger::from_digits`]
/// can produce a non-canonical one, which [`NegabinaryInteger::trim`] fixes.
#[derive(Clone, Default, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct NegabinaryInteger {
    /// Bits stored from least significant (index 0) upward
    pub(crate) bits: Bits,
}

impl NegabinaryInteger {
    /// Highest bit index that can still contribute to an i64 value.
    ///
    /// (−2)⁶⁴ = 2⁶⁴ is needed to encode values near `i64::MAX`; any set bit
    /// above it puts the value out of range regardless of the lower bits.
    pub const I64_MAX_INDEX: usize = 64;

    /// Create the value zero (an empty bit sequence).
    #[inline]
    pub const fn zero() -> Self {
        Self { bits: Bits::new() }
    }

    /// Create from a native integer.
    ///
    /// Repeatedly splits value = q·(−2) + r with r ∈ {0, 1}, emitting r as
    /// the next bit. Truncating division can leave r = −1; in that case the
    /// quotient is bumped by one and r becomes 1 (the floored remainder for
    /// divisor −2).
    pub fn from_i64(value: i64) -> Self {
        let mut bits = Bits::with_capacity(66);
        let mut value = value;

        while value != 0 {
            let mut quotient = value / -2;
            let mut remainder = value % -2;
            if remainder < 0 {
                quotient += 1;
                remainder = 1;
            }
            debug_assert!(remainder == 0 || remainder == 1);
            bits.push(remainder == 1);
            value = quotient;
        }

        let mut result = Self { bits };
        result.trim();
        result
    }

    /// Convert to a native integer.
    ///
    /// # Errors
    /// Returns [`NegabinaryError::OutOfRange`] if a bit above
    /// [`Self::I64_MAX_INDEX`] is set, or if the bits below it sum to a
    /// value outside the i64 range.
    pub fn to_i64(&self) -> Result<i64, NegabinaryError> {
        let len = self.significant_len();
        if len > Self::I64_MAX_INDEX + 1 {
            return Err(NegabinaryError::OutOfRange { len });
        }

        // 65 bits of base −2 stay well inside i128
        let mut result: i128 = 0;
        let mut power: i128 = 1;
        for bit in self.bits.iter().take(len) {
            if bit {
                result += power;
            }
            power *= -2;
        }

        i64::try_from(result).map_err(|_| NegabinaryError::OutOfRange { len })
    }

    /// Wrap an explicit bit pattern (LSB first) without validation.
    ///
    /// The pattern is kept as given, high-order `false` bits included.
    /// Call [`Self::trim`] to canonicalize.
    pub fn from_bits<I>(bits: I) -> Self
    where
        I: IntoIterator<Item = bool>,
    {
        Self { bits: bits.into_iter().collect() }
    }

    /// Wrap a 0/1 digit pattern (LSB first). Any nonzero digit is a set bit.
    pub fn from_digits(digits: &[u8]) -> Self {
        Self::from_bits(digits.iter().map(|&d| d != 0))
    }

    /// Strip high-order `false` bits. Idempotent.
    #[inline]
    pub fn trim(&mut self) -> &mut Self {
        self.bits.trim();
        self
    }

    /// Return a trimmed copy.
    pub fn trimmed(&self) -> Self {
        let mut copy = self.clone();
        copy.trim();
        copy
    }

    /// Borrow the underlying bit sequence.
    #[inline]
    pub fn bits(&self) -> &Bits {
        &self.bits
    }

    /// Get a single bit by index (0 = LSB). Out-of-range reads are `false`.
    #[inline]
    pub fn bit(&self, index: usize) -> bool {
        self.bits.get(index)
    }

    /// Number of stored bits, including untrimmed high-order zeros.
    #[inline]
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    /// Returns true if no bits are stored at all.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// Number of bits up to and including the highest set bit.
    #[inline]
    pub fn significant_len(&self) -> usize {
        self.bits.highest_set().map_or(0, |i| i + 1)
    }

    /// Check if this value is zero (trimmed or not).
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.bits.highest_set().is_none()
    }

    /// Check if this value is strictly positive.
    ///
    /// The highest set bit carries the sign: even index is positive.
    pub fn is_positive(&self) -> bool {
        matches!(self.bits.highest_set(), Some(i) if i % 2 == 0)
    }

    /// Check if this value is strictly negative.
    pub fn is_negative(&self) -> bool {
        matches!(self.bits.highest_set(), Some(i) if i % 2 == 1)
    }

    /// Sign of the value: −1, 0 or +1.
    pub fn signum(&self) -> i8 {
        match self.bits.highest_set() {
            None => 0,
            Some(i) if i % 2 == 0 => 1,
            Some(_) => -1,
        }
    }

    /// Render the stored bits as '0'/'1' characters, index 0 first.
    ///
    /// Zero renders as the empty string.
    pub fn to_bit_string(&self) -> String {
        self.bits.iter().map(|b| if b { '1' } else { '0' }).collect()
    }

    /// Parse a bit string in the rendered form ('0'/'1', index 0 first).
    ///
    /// Surrounding whitespace is ignored and the result is trimmed; the
    /// empty string is zero.
    pub fn parse(s: &str) -> Result<Self, NegabinaryError> {
        let s = s.trim();
        let mut bits = Bits::with_capacity(s.len());

        for (index, c) in s.chars().enumerate() {
            match c {
                '0' => bits.push(false),
                '1' => bits.push(true),
                found => return Err(NegabinaryError::InvalidBit { index, found }),
            }
        }

        let mut result = Self { bits };
        result.trim();
        Ok(result)
    }
}

impl fmt::Debug for NegabinaryInteger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NegabinaryInteger({}", self.to_bit_string())?;
        match self.to_i64() {
            Ok(value) => write!(f, " = {})", value),
            Err(_) => write!(f, ")"),
        }
    }
}

impl fmt::Display for NegabinaryInteger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.to_bit_string())
    }
}

impl FromStr for NegabinaryInteger {
    type Err = NegabinaryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for NegabinaryInteger {
    type Error = NegabinaryError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse(&s)
    }
}

impl From<NegabinaryInteger> for String {
    fn from(value: NegabinaryInteger) -> Self {
        value.to_bit_string()
    }
}

impl From<i64> for NegabinaryInteger {
    fn from(value: i64) -> Self {
        Self::from_i64(value)
    }
}

macro_rules! impl_from_narrow {
    ($($type:ty),*) => {
        $(
            impl From<$type> for NegabinaryInteger {
                fn from(value: $type) -> Self {
                    Self::from_i64(i64::from(value))
                }
            }
        )*
    };
}

impl_from_narrow!(i8, i16, i32, u8, u16, u32);

impl From<Bits> for NegabinaryInteger {
    fn from(bits: Bits) -> Self {
        Self { bits }
    }
}

impl TryFrom<&NegabinaryInteger> for i64 {
    type Error = NegabinaryError;

    fn try_from(value: &NegabinaryInteger) -> Result<Self, Self::Error> {
        value.to_i64()
    }
}

impl TryFrom<NegabinaryInteger> for i64 {
    type Error = NegabinaryError;

    fn try_from(value: NegabinaryInteger) -> Result<Self, Self::Error> {
        value.to_i64()
    }
}
