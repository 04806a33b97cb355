//! Operator overloads.
//!
//! Every operator forwards to the named functions in [`crate::negabinary::arith`];
//! the operators exist for ergonomics only.

use std::iter::Sum;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};
use crate::negabinary::{arith, NegabinaryInteger};

// Implement a binary operator for every owned/borrowed operand combination
macro_rules! impl_binary_op {
    ($trait:ident, $method:ident, $func:path) => {
        impl $trait<&NegabinaryInteger> for &NegabinaryInteger {
            type Output = NegabinaryInteger;

            fn $method(self, rhs: &NegabinaryInteger) -> NegabinaryInteger {
                $func(self, rhs)
            }
        }

        impl $trait<NegabinaryInteger> for &NegabinaryInteger {
            type Output = NegabinaryInteger;

            fn $method(self, rhs: NegabinaryInteger) -> NegabinaryInteger {
                $func(self, &rhs)
            }
        }

        impl $trait<&NegabinaryInteger> for NegabinaryInteger {
            type Output = NegabinaryInteger;

            fn $method(self, rhs: &NegabinaryInteger) -> NegabinaryInteger {
                $func(&self, rhs)
            }
        }

        impl $trait<NegabinaryInteger> for NegabinaryInteger {
            type Output = NegabinaryInteger;

            fn $method(self, rhs: NegabinaryInteger) -> NegabinaryInteger {
                $func(&self, &rhs)
            }
        }
    };
}

impl_binary_op!(Add, add, arith::add);
impl_binary_op!(Sub, sub, arith::subtract);

macro_rules! impl_assign_op {
    ($trait:ident, $method:ident, $func:path) => {
        impl $trait<&NegabinaryInteger> for NegabinaryInteger {
            fn $method(&mut self, rhs: &NegabinaryInteger) {
                *self = $func(self, rhs);
            }
        }

        impl $trait<NegabinaryInteger> for NegabinaryInteger {
            fn $method(&mut self, rhs: NegabinaryInteger) {
                *self = $func(self, &rhs);
            }
        }
    };
}

impl_assign_op!(AddAssign, add_assign, arith::add);
impl_assign_op!(SubAssign, sub_assign, arith::subtract);

impl Neg for NegabinaryInteger {
    type Output = Self;

    fn neg(self) -> Self::Output {
        arith::negate(&self)
    }
}

impl Neg for &NegabinaryInteger {
    type Output = NegabinaryInteger;

    fn neg(self) -> Self::Output {
        arith::negate(self)
    }
}

impl Sum for NegabinaryInteger {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(NegabinaryInteger::zero(), |acc, x| arith::add(&acc, &x))
    }
}

impl<'a> Sum<&'a NegabinaryInteger> for NegabinaryInteger {
    fn sum<I: Iterator<Item = &'a NegabinaryInteger>>(iter: I) -> Self {
        iter.fold(NegabinaryInteger::zero(), |acc, x| arith::add(&acc, x))
    }
}
