/*
    Operator overloading
*/

use std::iter::{Product, Sum};
use std::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use super::*;

// Implements a binary operator for every owned/borrowed
// combination of operands, forwarding to the inherent method.
macro_rules! forward_binop {
    ($Op:ident, $op:ident, $OpAssign:ident, $op_assign:ident) => {
        impl $Op<&RationalNumber> for &RationalNumber {
            type Output = RationalNumber;

            fn $op(self, other: &RationalNumber) -> RationalNumber {
                RationalNumber::$op(self, other)
            }
        }

        impl $Op<RationalNumber> for &RationalNumber {
            type Output = RationalNumber;

            fn $op(self, other: RationalNumber) -> RationalNumber {
                RationalNumber::$op(self, &other)
            }
        }

        impl $Op<&RationalNumber> for RationalNumber {
            type Output = RationalNumber;

            fn $op(self, other: &RationalNumber) -> RationalNumber {
                RationalNumber::$op(&self, other)
            }
        }

        impl $Op<RationalNumber> for RationalNumber {
            type Output = RationalNumber;

            fn $op(self, other: RationalNumber) -> RationalNumber {
                RationalNumber::$op(&self, &other)
            }
        }

        impl $OpAssign<&RationalNumber> for RationalNumber {
            fn $op_assign(&mut self, other: &RationalNumber) {
                *self = RationalNumber::$op(self, other);
            }
        }

        impl $OpAssign<RationalNumber> for RationalNumber {
            fn $op_assign(&mut self, other: RationalNumber) {
                *self = RationalNumber::$op(self, &other);
            }
        }
    };
}

// Implements a binary operator between `RationalNumber`
// and a primitive integer, in either order.
macro_rules! forward_int_binop {
    ($Op:ident, $op:ident, $($t:ty),*) => {
        $(
            impl $Op<$t> for RationalNumber {
                type Output = RationalNumber;

                fn $op(self, other: $t) -> RationalNumber {
                    RationalNumber::$op(&self, &RationalNumber::from(other))
                }
            }

            impl $Op<$t> for &RationalNumber {
                type Output = RationalNumber;

                fn $op(self, other: $t) -> RationalNumber {
                    RationalNumber::$op(self, &RationalNumber::from(other))
                }
            }

            impl $Op<RationalNumber> for $t {
                type Output = RationalNumber;

                fn $op(self, other: RationalNumber) -> RationalNumber {
                    RationalNumber::$op(&RationalNumber::from(self), &other)
                }
            }

            impl $Op<&RationalNumber> for $t {
                type Output = RationalNumber;

                fn $op(self, other: &RationalNumber) -> RationalNumber {
                    RationalNumber::$op(&RationalNumber::from(self), other)
                }
            }
        )*
    };
}

forward_binop!(Add, add, AddAssign, add_assign);
forward_binop!(Sub, sub, SubAssign, sub_assign);
forward_binop!(Mul, mul, MulAssign, mul_assign);

forward_int_binop!(Add, add, i32, i64, u32, u64);
forward_int_binop!(Sub, sub, i32, i64, u32, u64);
forward_int_binop!(Mul, mul, i32, i64, u32, u64);

impl Neg for RationalNumber {
    type Output = RationalNumber;

    fn neg(self) -> RationalNumber {
        RationalNumber::neg(&self)
    }
}

impl Neg for &RationalNumber {
    type Output = RationalNumber;

    fn neg(self) -> RationalNumber {
        RationalNumber::neg(self)
    }
}

impl Sum for RationalNumber {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(RationalNumber::zero(), |acc, x| RationalNumber::add(&acc, &x))
    }
}

impl<'a> Sum<&'a RationalNumber> for RationalNumber {
    fn sum<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
        iter.fold(RationalNumber::zero(), |acc, x| RationalNumber::add(&acc, x))
    }
}

impl Product for RationalNumber {
    fn product<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(RationalNumber::one(), |acc, x| RationalNumber::mul(&acc, &x))
    }
}
