//! Bit-level arithmetic on negabinary integers.
//!
//! Provides addition, subtraction and negation. Addition and subtraction
//! work one addend bit at a time on a private working copy, using two
//! stepping operations:
//!
//! - `add_bit(B)` adds (−2)^B
//! - `subtract_bit(B)` subtracts (−2)^B
//!
//! Because 2·(−2)^B = (−2)^(B+1) + (−2)^(B+2), a carry that position B+1
//! cannot absorb lands two positions up, at B+2. Borrows mirror this.
//! Chains are followed with a loop, never recursion, so arbitrarily long
//! carry chains use constant stack.

use serde::{Serialize, Deserialize};
use crate::negabinary::{Bits, NegabinaryInteger};

/// What a single stepping operation did at one position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CarryKind {
    /// A clear bit was set (add); nothing propagates.
    Set,
    /// A set bit was cleared (subtract); nothing propagates.
    Cleared,
    /// Position B+1 took up the remainder; nothing propagates.
    Absorbed,
    /// Position B+1 was flipped and one more unit must go to B+2.
    Carry,
}

/// One step of a carry or borrow chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CarryStep {
    /// Bit position the step was applied to.
    pub position: usize,
    /// Outcome of the step.
    pub kind: CarryKind,
}

/// Add one unit of (−2)^B at `position`.
///
/// [`CarryKind::Carry`] means a further unit must be added at `position + 2`.
fn add_bit(bits: &mut Bits, position: usize) -> CarryKind {
    if !bits.get(position) {
        bits.set(position, true);
        return CarryKind::Set;
    }

    // 1 + 1 at B is 2·(−2)^B = −(−2)^(B+1)
    bits.set(position, false);
    if bits.get(position + 1) {
        bits.set(position + 1, false);
        CarryKind::Absorbed
    } else {
        // −(−2)^(B+1) = (−2)^(B+1) + (−2)^(B+2)
        bits.set(position + 1, true);
        CarryKind::Carry
    }
}

/// Subtract one unit of (−2)^B at `position`.
///
/// Mirror of [`add_bit`]: a borrow continues at `position + 2`.
fn subtract_bit(bits: &mut Bits, position: usize) -> CarryKind {
    if bits.get(position) {
        bits.set(position, false);
        return CarryKind::Cleared;
    }

    // −(−2)^B = (−2)^B + (−2)^(B+1)
    bits.set(position, true);
    if !bits.get(position + 1) {
        bits.set(position + 1, true);
        CarryKind::Absorbed
    } else {
        // B+1 was already set: clearing it leaves −(−2)^(B+2) to borrow
        bits.set(position + 1, false);
        CarryKind::Carry
    }
}

/// Apply `step` at every set bit of `addend`, chaining carries to B+2.
fn accumulate<F>(
    base: &NegabinaryInteger,
    addend: &NegabinaryInteger,
    step: fn(&mut Bits, usize) -> CarryKind,
    mut observe: F,
) -> NegabinaryInteger
where
    F: FnMut(CarryStep),
{
    let mut work = base.bits.clone();
    work.ensure_len(addend.bits.len().max(base.bits.len()) + 2);

    for start in addend.bits.ones() {
        let mut position = start;
        loop {
            let kind = step(&mut work, position);
            observe(CarryStep { position, kind });
            if kind != CarryKind::Carry {
                break;
            }
            position += 2;
        }
    }

    let mut result = NegabinaryInteger::from(work);
    result.trim();
    result
}

/// Add two negabinary integers.
pub fn add(a: &NegabinaryInteger, b: &NegabinaryInteger) -> NegabinaryInteger {
    accumulate(a, b, add_bit, |_| {})
}

/// Subtract two negabinary integers (a - b).
pub fn subtract(a: &NegabinaryInteger, b: &NegabinaryInteger) -> NegabinaryInteger {
    accumulate(a, b, subtract_bit, |_| {})
}

/// Add two negabinary integers, recording every carry step.
pub fn add_traced(a: &NegabinaryInteger, b: &NegabinaryInteger) -> (NegabinaryInteger, Vec<CarryStep>) {
    let mut steps = Vec::new();
    let result = accumulate(a, b, add_bit, |s| steps.push(s));
    (result, steps)
}

/// Subtract two negabinary integers (a - b), recording every borrow step.
pub fn subtract_traced(a: &NegabinaryInteger, b: &NegabinaryInteger) -> (NegabinaryInteger, Vec<CarryStep>) {
    let mut steps = Vec::new();
    let result = accumulate(a, b, subtract_bit, |s| steps.push(s));
    (result, steps)
}

/// Negate a negabinary integer.
///
/// Single low-to-high pass over bit pairs. A clear bit stays clear. A set
/// bit at i stays set and the bit at i+1 is complemented and consumed, since
/// −((−2)^i + b·(−2)^(i+1)) = (−2)^i + (1−b)·(−2)^(i+1).
pub fn negate(a: &NegabinaryInteger) -> NegabinaryInteger {
    let src = &a.bits;
    let mut out = Bits::with_capacity(src.len() + 1);

    let mut i = 0;
    while i < src.len() {
        if src.get(i) {
            out.push(true);
            out.push(!src.get(i + 1));
            i += 2;
        } else {
            out.push(false);
            i += 1;
        }
    }

    let mut result = NegabinaryInteger::from(out);
    result.trim();
    result
}

impl NegabinaryInteger {
    /// Return `self + other`. Neither operand is modified.
    #[inline]
    pub fn add(&self, other: &Self) -> Self {
        add(self, other)
    }

    /// Return `self - other`. Neither operand is modified.
    #[inline]
    pub fn subtract(&self, other: &Self) -> Self {
        subtract(self, other)
    }

    /// Return `-self`.
    #[inline]
    pub fn negate(&self) -> Self {
        negate(self)
    }

    /// Like [`Self::add`], also returning each step of the carry chains.
    #[inline]
    pub fn add_traced(&self, other: &Self) -> (Self, Vec<CarryStep>) {
        add_traced(self, other)
    }

    /// Like [`Self::subtract`], also returning each step of the borrow chains.
    #[inline]
    pub fn subtract_traced(&self, other: &Self) -> (Self, Vec<CarryStep>) {
        subtract_traced(self, other)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nb(value: i64) -> NegabinaryInteger {
        NegabinaryInteger::from_i64(value)
    }

    #[test]
    fn test_add_basic() {
        let result = add(&nb(100), &nb(50));
        assert_eq!(result.to_i64().unwrap(), 150);
    }

    #[test]
    fn test_add_seven_plus_seven() {
        let result = add(&nb(7), &nb(7));
        assert_eq!(result.to_i64().unwrap(), 14);
        assert_eq!(result.to_bit_string(), "01001");
    }

    #[test]
    fn test_add_negative() {
        let result = add(&nb(100), &nb(-150));
        assert_eq!(result.to_i64().unwrap(), -50);
    }

    #[test]
    fn test_add_extremes() {
        let result = add(&nb(i64::MAX), &nb(i64::MIN));
        assert_eq!(result.to_i64().unwrap(), -1);
        assert_eq!(result.to_bit_string(), "11");
    }

    #[test]
    fn test_add_beyond_i64() {
        let result = add(&nb(i64::MAX), &nb(i64::MAX));
        assert!(result.to_i64().is_err());
        assert!(result.is_positive());
        // Coming back down fits again
        let back = subtract(&result, &nb(i64::MAX));
        assert_eq!(back.to_i64().unwrap(), i64::MAX);
    }

    #[test]
    fn test_subtract() {
        assert_eq!(subtract(&nb(100), &nb(30)).to_i64().unwrap(), 70);
        assert_eq!(subtract(&nb(30), &nb(100)).to_i64().unwrap(), -70);
        assert_eq!(subtract(&nb(0), &nb(1)).to_i64().unwrap(), -1);
        assert_eq!(subtract(&nb(-8), &nb(-8)).to_bit_string(), "");
    }

    #[test]
    fn test_subtract_exhaustive_small() {
        for a in -40i64..=40 {
            for b in -40i64..=40 {
                assert_eq!(subtract(&nb(a), &nb(b)).to_i64().unwrap(), a - b, "{} - {}", a, b);
                assert_eq!(add(&nb(a), &nb(b)).to_i64().unwrap(), a + b, "{} + {}", a, b);
            }
        }
    }

    #[test]
    fn test_operands_untouched() {
        let a = NegabinaryInteger::from_digits(&[1, 1, 0, 0]);
        let b = nb(3);
        let _ = add(&a, &b);
        let _ = subtract(&a, &b);
        let _ = negate(&a);
        assert_eq!(a.to_bit_string(), "1100");
        assert_eq!(b.to_i64().unwrap(), 3);
    }

    #[test]
    fn test_add_untrimmed_operands() {
        let a = NegabinaryInteger::from_digits(&[1, 0, 1, 0, 0, 0]);
        let b = NegabinaryInteger::from_digits(&[0, 0, 0, 0, 0, 0, 0, 0]);
        let result = add(&a, &b);
        assert_eq!(result.to_bit_string(), "101");
    }

    #[test]
    fn test_negate_patterns() {
        assert_eq!(negate(&nb(1)).to_bit_string(), "11");
        assert_eq!(negate(&nb(-1)).to_bit_string(), "1");
        assert_eq!(negate(&nb(5)).to_bit_string(), "1111");
        assert_eq!(negate(&nb(0)).to_bit_string(), "");
    }

    #[test]
    fn test_negate_roundtrip() {
        for value in -500i64..=500 {
            assert_eq!(negate(&nb(value)).to_i64().unwrap(), -value);
        }
    }

    #[test]
    fn test_negate_min_out_of_range() {
        let negated = negate(&nb(i64::MIN));
        assert!(negated.to_i64().is_err());
        assert_eq!(negate(&negated).to_i64().unwrap(), i64::MIN);
    }

    #[test]
    fn test_additive_inverse() {
        for value in [i64::MIN, -9841, -100, -1, 0, 1, 100, 9841, i64::MAX] {
            let a = nb(value);
            let result = add(&a, &negate(&a));
            assert!(result.is_empty(), "Expected {} + (-{}) = 0", value, value);
        }
    }

    #[test]
    fn test_add_commutativity() {
        let a = nb(12345);
        let b = nb(-6789);
        assert_eq!(add(&a, &b).to_bit_string(), add(&b, &a).to_bit_string());
    }

    #[test]
    fn test_add_bit_steps() {
        let mut bits = Bits::from(vec![false]);
        assert_eq!(add_bit(&mut bits, 0), CarryKind::Set);

        let mut bits = Bits::from(vec![true, true]);
        assert_eq!(add_bit(&mut bits, 0), CarryKind::Absorbed);
        assert_eq!(bits.significant(), &[] as &[bool]);

        let mut bits = Bits::from(vec![true]);
        assert_eq!(add_bit(&mut bits, 0), CarryKind::Carry);
        assert_eq!(bits.as_slice(), &[false, true]);
    }

    #[test]
    fn test_subtract_bit_steps() {
        let mut bits = Bits::from(vec![true]);
        assert_eq!(subtract_bit(&mut bits, 0), CarryKind::Cleared);
        assert_eq!(bits.as_slice(), &[false]);

        // 0 − 1 = −1 = "11"
        let mut bits = Bits::new();
        assert_eq!(subtract_bit(&mut bits, 0), CarryKind::Absorbed);
        assert_eq!(bits.as_slice(), &[true, true]);

        // −2 − 1 = −3 = "1011": borrow continues at position 2
        let mut bits = Bits::from(vec![false, true]);
        assert_eq!(subtract_bit(&mut bits, 0), CarryKind::Carry);
        assert_eq!(bits.as_slice(), &[true, false]);
    }

    #[test]
    fn test_carry_chain_skips_a_position() {
        // 1 + 1: carry from 0 lands on 2, giving "011" = 2
        let (result, steps) = add_traced(&nb(1), &nb(1));
        assert_eq!(result.to_i64().unwrap(), 2);
        assert_eq!(
            steps,
            vec![
                CarryStep { position: 0, kind: CarryKind::Carry },
                CarryStep { position: 2, kind: CarryKind::Set },
            ]
        );
    }

    #[test]
    fn test_long_carry_chain() {
        // "101010...1" plus 1 ripples through every even position
        let pattern: Vec<u8> = (0..2001).map(|i| if i % 2 == 0 { 1 } else { 0 }).collect();
        let a = NegabinaryInteger::from_digits(&pattern);
        let (result, steps) = add_traced(&a, &nb(1));
        assert_eq!(steps.len(), 1002);
        assert_eq!(subtract(&result, &nb(1)).to_bit_string(), a.to_bit_string());
    }

    #[test]
    fn test_subtract_traced_matches_subtract() {
        let (traced, steps) = subtract_traced(&nb(-2), &nb(1));
        assert_eq!(traced.to_i64().unwrap(), -3);
        assert_eq!(traced.to_bit_string(), subtract(&nb(-2), &nb(1)).to_bit_string());
        assert_eq!(steps.last().map(|s| s.position), Some(2));
    }

    #[test]
    fn test_subtract_traced_reports_cleared() {
        // 5 − 1: bit 0 of "101" goes from 1 to 0
        let (result, steps) = subtract_traced(&nb(5), &nb(1));
        assert_eq!(result.to_i64().unwrap(), 4);
        assert_eq!(steps, vec![CarryStep { position: 0, kind: CarryKind::Cleared }]);

        let (_, add_steps) = add_traced(&nb(4), &nb(1));
        assert_eq!(add_steps, vec![CarryStep { position: 0, kind: CarryKind::Set }]);
    }
}
