//! Growable bit sequence.
//!
//! Bits are stored least significant first (index 0 = the (−2)⁰ position).
//! Reads past the end yield `false`; writes past the end extend the
//! sequence with `false` bits first, so callers never have to size it.

use std::fmt;

/// A densely indexed, growable sequence of bits (LSB first).
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct Bits {
    bits: Vec<bool>,
}

impl Bits {
    /// Create an empty sequence.
    #[inline]
    pub const fn new() -> Self {
        Self { bits: Vec::new() }
    }

    /// Create an empty sequence with room for `capacity` bits.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self { bits: Vec::with_capacity(capacity) }
    }

    /// Number of stored bits, including any high-order `false` bits.
    #[inline]
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    /// Returns true if no bits are stored.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// Get a single bit by index (0 = LSB). Out-of-range reads are `false`.
    #[inline]
    pub fn get(&self, index: usize) -> bool {
        self.bits.get(index).copied().unwrap_or(false)
    }

    /// Set a single bit by index, extending the sequence if needed.
    #[inline]
    pub fn set(&mut self, index: usize, bit: bool) {
        self.ensure_len(index + 1);
        self.bits[index] = bit;
    }

    /// Flip a single bit by index, extending the sequence if needed.
    #[inline]
    pub fn toggle(&mut self, index: usize) {
        let bit = self.get(index);
        self.set(index, !bit);
    }

    /// Append a bit at the high-order end.
    #[inline]
    pub fn push(&mut self, bit: bool) {
        self.bits.push(bit);
    }

    /// Drop every bit at index `len` and above.
    #[inline]
    pub fn truncate(&mut self, len: usize) {
        self.bits.truncate(len);
    }

    /// Pad with `false` bits until at least `len` bits are stored.
    pub fn ensure_len(&mut self, len: usize) {
        if self.bits.len() < len {
            self.bits.resize(len, false);
        }
    }

    /// Index of the highest set bit, if any.
    pub fn highest_set(&self) -> Option<usize> {
        self.bits.iter().rposition(|&b| b)
    }

    /// Strip high-order `false` bits. Returns the number of bits removed.
    pub fn trim(&mut self) -> usize {
        let before = self.bits.len();
        let significant = self.highest_set().map_or(0, |i| i + 1);
        self.bits.truncate(significant);
        before - significant
    }

    /// The stored bits ending at the highest set bit.
    pub fn significant(&self) -> &[bool] {
        let significant = self.highest_set().map_or(0, |i| i + 1);
        &self.bits[..significant]
    }

    /// Iterate over the stored bits, LSB first.
    #[inline]
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = bool> + ExactSizeIterator + '_ {
        self.bits.iter().copied()
    }

    /// Indices of all set bits, ascending.
    pub fn ones(&self) -> impl Iterator<Item = usize> + '_ {
        self.bits.iter().enumerate().filter(|&(_, &b)| b).map(|(i, _)| i)
    }

    /// Borrow the raw bit slice.
    #[inline]
    pub fn as_slice(&self) -> &[bool] {
        &self.bits
    }
}

impl fmt::Debug for Bits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Bits(")?;
        for bit in self.iter() {
            write!(f, "{}", if bit { '1' } else { '0' })?;
        }
        write!(f, ")")
    }
}

impl From<Vec<bool>> for Bits {
    fn from(bits: Vec<bool>) -> Self {
        Self { bits }
    }
}

impl From<Bits> for Vec<bool> {
    fn from(bits: Bits) -> Self {
        bits.bits
    }
}

impl FromIterator<bool> for Bits {
    fn from_iter<I: IntoIterator<Item = bool>>(iter: I) -> Self {
        Self { bits: iter.into_iter().collect() }
    }
}
