/*
    Arithmetic
*/

use super::*;

impl ComplexNumber {
    /// Adds this `ComplexNumber` and another, part by part.
    pub fn add(&self, other: &Self) -> Self {
        Self {
            re: self.re.add(&other.re),
            im: self.im.add(&other.im),
        }
    }

    /// Subtracts another `ComplexNumber` from this one, part by part.
    pub fn sub(&self, other: &Self) -> Self {
        Self {
            re: self.re.sub(&other.re),
            im: self.im.sub(&other.im),
        }
    }

    /// Multiplies this `ComplexNumber` with another:
    /// `(a + bi)(c + di) = (ac - bd) + (ad + bc)i`.
    pub fn mul(&self, other: &Self) -> Self {
        Self {
            re: self.re.mul(&other.re).sub(&self.im.mul(&other.im)),
            im: self.re.mul(&other.im).add(&self.im.mul(&other.re)),
        }
    }

    /// Divides this `ComplexNumber` by another:
    /// `(a + bi)/(c + di) = ((ac + bd) + (bc - ad)i) / (c^2 + d^2)`.
    /// Fails with `DivisionByZero` if both parts of `other` are zero.
    pub fn checked_div(&self, other: &Self) -> Result<Self> {
        if other.is_zero() {
            return Err(Error::DivisionByZero);
        }

        let norm = other.norm_sqr();
        let re = self.re.mul(&other.re).add(&self.im.mul(&other.im));
        let im = self.im.mul(&other.re).sub(&self.re.mul(&other.im));
        Ok(Self {
            re: re.checked_div(&norm)?,
            im: im.checked_div(&norm)?,
        })
    }

    /// Negates both parts of this `ComplexNumber`.
    pub fn neg(&self) -> Self {
        Self {
            re: self.re.neg(),
            im: self.im.neg(),
        }
    }

    /// Returns the complex conjugate of this `ComplexNumber`.
    pub fn conj(&self) -> Self {
        Self {
            re: self.re.clone(),
            im: self.im.neg(),
        }
    }

    /// Returns the squared magnitude `re^2 + im^2`, which is exact.
    pub fn norm_sqr(&self) -> RationalNumber {
        self.re.mul(&self.re).add(&self.im.mul(&self.im))
    }
}

// Operators forward to the inherent methods.
macro_rules! forward_binop {
    ($Op:ident, $op:ident) => {
        impl std::ops::$Op<&ComplexNumber> for &ComplexNumber {
            type Output = ComplexNumber;

            fn $op(self, other: &ComplexNumber) -> ComplexNumber {
                ComplexNumber::$op(self, other)
            }
        }

        impl std::ops::$Op<ComplexNumber> for ComplexNumber {
            type Output = ComplexNumber;

            fn $op(self, other: ComplexNumber) -> ComplexNumber {
                ComplexNumber::$op(&self, &other)
            }
        }
    };
}

forward_binop!(Add, add);
forward_binop!(Sub, sub);
forward_binop!(Mul, mul);

impl std::ops::Neg for ComplexNumber {
    type Output = ComplexNumber;

    fn neg(self) -> ComplexNumber {
        ComplexNumber::neg(&self)
    }
}

impl std::ops::Neg for &ComplexNumber {
    type Output = ComplexNumber;

    fn neg(self) -> ComplexNumber {
        ComplexNumber::neg(self)
    }
}
