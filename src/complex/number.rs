/*
    Constructors and getters for `ComplexNumber`
*/

use super::*;

// Constructors and getters
impl ComplexNumber {
    /// Creates a new `ComplexNumber` from its real and imaginary parts.
    pub fn new(re: impl Into<RationalNumber>, im: impl Into<RationalNumber>) -> Self {
        Self {
            re: re.into(),
            im: im.into(),
        }
    }

    /// Creates a new `ComplexNumber` with a zero imaginary part.
    pub fn from_real(re: impl Into<RationalNumber>) -> Self {
        Self::new(re, RationalNumber::zero())
    }

    /// Returns zero.
    pub fn zero() -> Self {
        Self::default()
    }

    /// Returns one.
    pub fn one() -> Self {
        Self::from_real(RationalNumber::one())
    }

    /// Returns the imaginary unit.
    pub fn i() -> Self {
        Self::new(RationalNumber::zero(), RationalNumber::one())
    }

    /// Returns the real part of this `ComplexNumber`.
    pub fn re(&self) -> &RationalNumber {
        &self.re
    }

    /// Returns the imaginary part of this `ComplexNumber`.
    pub fn im(&self) -> &RationalNumber {
        &self.im
    }

    /// Returns true if both parts are zero.
    pub fn is_zero(&self) -> bool {
        self.re.is_zero() && self.im.is_zero()
    }

    /// Returns true if the imaginary part is zero.
    pub fn is_real(&self) -> bool {
        self.im.is_zero()
    }
}

// Implementing `Number` for `ComplexNumber`
impl crate::Number for ComplexNumber {
    type Ctx = Precision;

    fn is_zero(&self) -> bool {
        ComplexNumber::is_zero(self)
    }

    fn checked_div(&self, other: &Self) -> Result<Self> {
        ComplexNumber::checked_div(self, other)
    }

    fn magnitude(&self, ctx: &Self::Ctx) -> Result<RationalNumber> {
        self.abs_with(ctx)
    }

    fn powi(&self, exponent: i32, ctx: &Self::Ctx) -> Result<Self> {
        self.pow_with(exponent, ctx)
    }
}
