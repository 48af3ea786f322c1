/*
    Constructors and getters for `RationalNumber`
*/

use super::*;

// Constructors and getters
impl RationalNumber {
    /// Creates a new `RationalNumber` from a numerator and denominator,
    /// reducing it to canonical form.
    /// Fails with `InvalidArgument` if the denominator is zero.
    pub fn new(num: impl Into<BigInt>, den: impl Into<BigInt>) -> Result<Self> {
        let den = den.into();
        if den.is_zero() {
            return Err(Error::invalid("the denominator must be nonzero"));
        }
        Ok(Self::reduced(num.into(), den))
    }

    /// Creates a new `RationalNumber` equal to the integer `num`.
    pub fn from_integer(num: impl Into<BigInt>) -> Self {
        Self::canonical(num.into(), BigInt::one())
    }

    /// Returns zero, `0/1`.
    pub fn zero() -> Self {
        Self::canonical(BigInt::zero(), BigInt::one())
    }

    /// Returns one, `1/1`.
    pub fn one() -> Self {
        Self::canonical(BigInt::one(), BigInt::one())
    }

    /// Returns the numerator of this `RationalNumber`.
    pub fn numer(&self) -> &BigInt {
        &self.num
    }

    /// Returns the denominator of this `RationalNumber`.
    /// This is always positive.
    pub fn denom(&self) -> &BigInt {
        &self.den
    }

    /// Returns true if this `RationalNumber` is zero.
    pub fn is_zero(&self) -> bool {
        self.num.is_zero()
    }

    /// Returns true if this `RationalNumber` is strictly below zero.
    pub fn is_negative(&self) -> bool {
        self.num.is_negative()
    }

    /// Returns true if this `RationalNumber` is strictly above zero.
    pub fn is_positive(&self) -> bool {
        self.num.is_positive()
    }

    /// Returns true if this `RationalNumber` is an integer.
    pub fn is_integer(&self) -> bool {
        self.den.is_one()
    }
}

// Implementing `Default` for `RationalNumber`
impl Default for RationalNumber {
    fn default() -> Self {
        Self::zero()
    }
}

// Implementing `Number` for `RationalNumber`
impl crate::Number for RationalNumber {
    type Ctx = crate::Precision;

    fn is_zero(&self) -> bool {
        RationalNumber::is_zero(self)
    }

    fn checked_div(&self, other: &Self) -> Result<Self> {
        RationalNumber::checked_div(self, other)
    }

    fn magnitude(&self, _: &Self::Ctx) -> Result<RationalNumber> {
        Ok(self.abs())
    }

    fn powi(&self, exponent: i32, _: &Self::Ctx) -> Result<Self> {
        Ok(self.pow(exponent))
    }
}
