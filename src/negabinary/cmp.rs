//! Ordering of negabinary integers.
//!
//! (−2)^i is positive for even i and negative for odd i, and its magnitude
//! exceeds the largest possible sum of all lower positions. So the highest
//! differing bit decides: at an even index the side holding `true` is
//! greater, at an odd index it is smaller. No arithmetic is performed.

use std::cmp::Ordering;
use std::hash::{Hash, Hasher};
use crate::negabinary::NegabinaryInteger;

/// Three-way comparison of two negabinary integers by value.
///
/// Operands of different lengths are compared as if the shorter one were
/// padded with `false` bits, so untrimmed values compare correctly.
pub fn compare(a: &NegabinaryInteger, b: &NegabinaryInteger) -> Ordering {
    let len = a.bits.len().max(b.bits.len());

    for i in (0..len).rev() {
        let (x, y) = (a.bits.get(i), b.bits.get(i));
        if x == y {
            continue;
        }
        // x != y, so exactly one side holds the set bit
        let a_holds_set_bit = x;
        return match (i % 2 == 0, a_holds_set_bit) {
            (true, true) | (false, false) => Ordering::Greater,
            (true, false) | (false, true) => Ordering::Less,
        };
    }

    Ordering::Equal
}

impl NegabinaryInteger {
    /// Compare two values, see [`compare`].
    #[inline]
    pub fn compare_to(&self, other: &Self) -> Ordering {
        compare(self, other)
    }
}

impl PartialEq for NegabinaryInteger {
    fn eq(&self, other: &Self) -> bool {
        compare(self, other) == Ordering::Equal
    }
}

impl Eq for NegabinaryInteger {}

impl PartialOrd for NegabinaryInteger {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for NegabinaryInteger {
    fn cmp(&self, other: &Self) -> Ordering {
        compare(self, other)
    }
}

// Equal values have equal significant bits, so hash only those.
impl Hash for NegabinaryInteger {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.bits.significant().hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn nb(value: i64) -> NegabinaryInteger {
        NegabinaryInteger::from_i64(value)
    }

    #[test]
    fn test_compare_matches_integers() {
        for a in -64i64..=64 {
            for b in -64i64..=64 {
                assert_eq!(compare(&nb(a), &nb(b)), a.cmp(&b), "compare({}, {})", a, b);
            }
        }
    }

    #[test]
    fn test_compare_extremes() {
        assert_eq!(compare(&nb(i64::MIN), &nb(i64::MAX)), Ordering::Less);
        assert_eq!(compare(&nb(i64::MAX), &nb(i64::MAX - 1)), Ordering::Greater);
        assert_eq!(compare(&nb(i64::MIN), &nb(i64::MIN + 1)), Ordering::Less);
        assert_eq!(compare(&nb(0), &nb(i64::MIN)), Ordering::Greater);
    }

    #[test]
    fn test_compare_different_lengths() {
        // "1" (1) against "011" (2): extra bit at even index 2
        assert_eq!(compare(&nb(1), &nb(2)), Ordering::Less);
        // "1" (1) against "01" (−2): extra bit at odd index 1
        assert_eq!(compare(&nb(1), &nb(-2)), Ordering::Greater);
    }

    #[test]
    fn test_untrimmed_equal() {
        let padded = NegabinaryInteger::from_digits(&[1, 0, 1, 0, 0, 0]);
        assert_eq!(padded, nb(5));
        assert_eq!(compare(&padded, &nb(5)), Ordering::Equal);

        let zero = NegabinaryInteger::from_digits(&[0, 0, 0]);
        assert_eq!(zero, NegabinaryInteger::zero());
    }

    #[test]
    fn test_relational_operators() {
        let a = nb(-3);
        let b = nb(10);
        assert!(a < b);
        assert!(b > a);
        assert!(a <= a.clone());
        assert!(a != b);
        assert_eq!(a.compare_to(&b), Ordering::Less);
        assert_eq!(std::cmp::max(a.clone(), b.clone()), b);
    }

    #[test]
    fn test_sort() {
        let mut values: Vec<NegabinaryInteger> = [7i64, -3, 0, 42, -100, 1].iter().map(|&v| nb(v)).collect();
        values.sort();
        let decoded: Vec<i64> = values.iter().map(|v| v.to_i64().unwrap()).collect();
        assert_eq!(decoded, vec![-100, -3, 0, 1, 7, 42]);
    }

    #[test]
    fn test_hash_ignores_padding() {
        let mut set = HashSet::new();
        set.insert(nb(5));
        assert!(set.contains(&NegabinaryInteger::from_digits(&[1, 0, 1, 0, 0])));
        assert!(!set.contains(&nb(4)));
    }
}
