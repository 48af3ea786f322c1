/*
    Exact rational numbers
*/

mod arithmetic;
mod cmp;
mod convert;
mod number;
mod ops;
mod roots;

use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{One, Signed, Zero};

use crate::{Error, Result};

/** An exact rational number.
 *
 * A `RationalNumber` is a pair of arbitrary-precision integers,
 * a numerator and a denominator, always kept in canonical form:
 *
 *  - the denominator is strictly positive;
 *  - the numerator and denominator share no common factor;
 *  - zero is `0/1`.
 *
 * Canonical form is unique, so two values are equal exactly when
 * their numerators and denominators are. Every operation returns a
 * new value; operands are never modified.
 *
 */
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct RationalNumber {
    num: BigInt, // numerator
    den: BigInt, // denominator, always positive
}

// Greatest common divisor of `a` and `b`, always non-negative.
// When the operands differ in size, one remainder step brings the
// larger down to the size of the smaller before the binary gcd runs.
pub(crate) fn gcd(a: &BigInt, b: &BigInt) -> BigInt {
    if a.is_zero() {
        return b.abs();
    }
    if b.is_zero() {
        return a.abs();
    }

    let (a, b) = (a.abs(), b.abs());
    let (big, small) = if a.bits() >= b.bits() { (a, b) } else { (b, a) };
    if big.bits() > small.bits() + 64 {
        let r = &big % &small;
        small.gcd(&r)
    } else {
        big.gcd(&small)
    }
}

// Least common multiple of two positive denominators.
pub(crate) fn lcm(a: &BigInt, b: &BigInt) -> BigInt {
    let g = gcd(a, b);
    (a / &g) * b
}

// Reduction utilities
impl RationalNumber {
    // Builds a canonical value out of an arbitrary pair.
    // The denominator must be nonzero.
    pub(crate) fn reduced(num: BigInt, den: BigInt) -> Self {
        debug_assert!(!den.is_zero(), "reduced() called with a zero denominator");
        let g = gcd(&num, &den);
        let (mut num, mut den) = if g.is_one() || g.is_zero() {
            (num, den)
        } else {
            (num / &g, den / &g)
        };

        if den.is_negative() {
            num = -num;
            den = -den;
        }

        Self { num, den }
    }

    // Builds a value out of a pair already known to be canonical.
    fn canonical(num: BigInt, den: BigInt) -> Self {
        debug_assert!(den.is_positive(), "canonical() called with a non-positive denominator");
        Self { num, den }
    }

    // Builds a value from a constant pair.
    pub(crate) fn from_ratio((num, den): (i64, i64)) -> Self {
        Self::reduced(BigInt::from(num), BigInt::from(den))
    }
}

// Fails with `DivisionByZero` if `x` is zero.
fn nonzero_divisor(x: &RationalNumber) -> Result<()> {
    if x.is_zero() {
        Err(Error::DivisionByZero)
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gcd_mixed_sizes() {
        let big = BigInt::from(3).pow(200u32) * BigInt::from(14);
        assert_eq!(gcd(&big, &BigInt::from(21)), BigInt::from(21));
        assert_eq!(gcd(&BigInt::from(-12), &BigInt::from(18)), BigInt::from(6));
        assert_eq!(gcd(&BigInt::zero(), &BigInt::from(-5)), BigInt::from(5));
        assert_eq!(lcm(&BigInt::from(4), &BigInt::from(6)), BigInt::from(12));
    }

    #[test]
    fn reduction() {
        let x = RationalNumber::reduced(BigInt::from(6), BigInt::from(-4));
        assert_eq!(x.num, BigInt::from(-3));
        assert_eq!(x.den, BigInt::from(2));

        let z = RationalNumber::reduced(BigInt::zero(), BigInt::from(-7));
        assert_eq!(z.num, BigInt::zero());
        assert_eq!(z.den, BigInt::one());
    }
}
