/*
    Arithmetic
*/

use super::*;

impl RationalNumber {
    /// Adds this `RationalNumber` and another.
    ///
    /// Both operands are brought to the least common multiple of their
    /// denominators, `lcm = b * (d / g)` with `g = gcd(b, d)`, and the
    /// numerators are summed. Any common factor left over must divide
    /// `g`, so only `g` is checked when reducing.
    pub fn add(&self, other: &Self) -> Self {
        let g = gcd(&self.den, &other.den);
        if g.is_one() {
            // coprime denominators => already canonical
            let num = &self.num * &other.den + &other.num * &self.den;
            return Self::canonical(num, &self.den * &other.den);
        }

        let b = &self.den / &g;
        let d = &other.den / &g;
        let t = &self.num * &d + &other.num * &b;
        let g2 = gcd(&t, &g);
        if g2.is_one() {
            Self::canonical(t, b * &other.den)
        } else {
            Self::canonical(t / &g2, b * (&other.den / &g2))
        }
    }

    /// Subtracts another `RationalNumber` from this one.
    pub fn sub(&self, other: &Self) -> Self {
        self.add(&other.neg())
    }

    /// Multiplies this `RationalNumber` with another.
    ///
    /// Common factors are cancelled crosswise before multiplying,
    /// so the product is canonical without a final reduction.
    pub fn mul(&self, other: &Self) -> Self {
        if self.is_zero() || other.is_zero() {
            return Self::zero();
        }

        let g1 = gcd(&self.num, &other.den);
        let g2 = gcd(&other.num, &self.den);
        let num = (&self.num / &g1) * (&other.num / &g2);
        let den = (&self.den / &g2) * (&other.den / &g1);
        Self::canonical(num, den)
    }

    /// Divides this `RationalNumber` by another.
    /// Fails with `DivisionByZero` if `other` is zero.
    pub fn checked_div(&self, other: &Self) -> Result<Self> {
        nonzero_divisor(other)?;
        Ok(self.mul(&other.recip()))
    }

    /// Returns the remainder of this `RationalNumber` modulo another.
    ///
    /// The remainder is what is left after subtracting `other` from
    /// `self` for as long as `self >= other`: values already below
    /// `other` are returned unchanged, everything else is brought to
    /// `self - other * floor(self / other)`.
    /// Fails with `DivisionByZero` if `other` is zero.
    pub fn checked_rem(&self, other: &Self) -> Result<Self> {
        nonzero_divisor(other)?;
        if self < other {
            return Ok(self.clone());
        }

        let q = Self::from_integer(self.checked_div(other)?.floor());
        Ok(self.sub(&other.mul(&q)))
    }

    /// Negates this `RationalNumber`.
    pub fn neg(&self) -> Self {
        Self::canonical(-&self.num, self.den.clone())
    }

    /// Returns this `RationalNumber` plus one.
    pub fn increment(&self) -> Self {
        Self::canonical(&self.num + &self.den, self.den.clone())
    }

    /// Returns this `RationalNumber` minus one.
    pub fn decrement(&self) -> Self {
        Self::canonical(&self.num - &self.den, self.den.clone())
    }

    /// Returns the reciprocal of this `RationalNumber`.
    /// The reciprocal of zero is taken to be zero.
    pub fn recip(&self) -> Self {
        if self.is_zero() {
            return self.clone();
        }

        if self.num.is_negative() {
            Self::canonical(-&self.den, -&self.num)
        } else {
            Self::canonical(self.den.clone(), self.num.clone())
        }
    }

    /// Returns the absolute value of this `RationalNumber`.
    pub fn abs(&self) -> Self {
        Self::canonical(self.num.abs(), self.den.clone())
    }

    /// Raises this `RationalNumber` to an integer power.
    /// Negative exponents reciprocate first, and the reciprocal
    /// of zero is zero, so `0^-n = 0`.
    pub fn pow(&self, exponent: i32) -> Self {
        let base = if exponent < 0 { self.recip() } else { self.clone() };
        let e = exponent.unsigned_abs();

        // powers of coprime integers stay coprime
        Self::canonical(base.num.pow(e), base.den.pow(e))
    }

    /// Returns the largest integer not above this `RationalNumber`.
    pub fn floor(&self) -> BigInt {
        self.num.div_floor(&self.den)
    }

    /// Returns the smallest integer not below this `RationalNumber`.
    pub fn ceil(&self) -> BigInt {
        self.num.div_ceil(&self.den)
    }

    /// Returns the integer part of this `RationalNumber`, truncated toward zero.
    pub fn trunc(&self) -> BigInt {
        &self.num / &self.den
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn r(n: i64, d: i64) -> RationalNumber {
        RationalNumber::new(n, d).unwrap()
    }

    #[test]
    fn add_shared_factors() {
        // 1/6 + 1/10 = 8/30 = 4/15
        assert_eq!(r(1, 6).add(&r(1, 10)), r(4, 15));
        // 1/4 + 1/4 = 1/2
        assert_eq!(r(1, 4).add(&r(1, 4)), r(1, 2));
        // 5/6 + 1/6 = 1
        assert_eq!(r(5, 6).add(&r(1, 6)), r(1, 1));
        assert_eq!(r(1, 3).add(&r(-1, 3)), RationalNumber::zero());
    }

    #[test]
    fn mul_cancels_crosswise() {
        let x = r(4, 9).mul(&r(3, 8));
        assert_eq!(x.numer(), &BigInt::from(1));
        assert_eq!(x.denom(), &BigInt::from(6));
        assert_eq!(r(-2, 3).mul(&r(-3, 2)), RationalNumber::one());
    }

    #[test]
    fn pow_negative_keeps_denominator_positive() {
        let x = r(-2, 3).pow(-3);
        assert_eq!(x.numer(), &BigInt::from(-27));
        assert_eq!(x.denom(), &BigInt::from(8));
    }

    #[test]
    fn floor_ceil_trunc() {
        assert_eq!(r(-7, 2).floor(), BigInt::from(-4));
        assert_eq!(r(-7, 2).ceil(), BigInt::from(-3));
        assert_eq!(r(-7, 2).trunc(), BigInt::from(-3));
        assert_eq!(r(7, 2).floor(), BigInt::from(3));
    }
}
