/*
    Conversions to and from `ComplexNumber`
*/

use std::fmt;

use num_bigint::BigInt;

use super::*;

/// Number of digits after the point used by `Display`.
pub const DISPLAY_DIGITS: i32 = 2;

macro_rules! from_real {
    ($($t:ty),*) => {
        $(
            impl From<$t> for ComplexNumber {
                fn from(x: $t) -> Self {
                    Self::from_real(x)
                }
            }
        )*
    };
}

from_real!(RationalNumber, BigInt, i8, i16, i32, i64, u8, u16, u32, u64);

// Implementing `From<(re, im)>` for `ComplexNumber`
impl<R: Into<RationalNumber>, I: Into<RationalNumber>> From<(R, I)> for ComplexNumber {
    fn from((re, im): (R, I)) -> Self {
        Self::new(re, im)
    }
}

// Implementing `TryFrom<ComplexNumber>` for `RationalNumber`
impl TryFrom<ComplexNumber> for RationalNumber {
    type Error = Error;

    fn try_from(z: ComplexNumber) -> Result<Self> {
        if z.im.is_zero() {
            Ok(z.re)
        } else {
            Err(Error::TypeMismatch(format!(
                "{} has a nonzero imaginary part and is not a rational number",
                z
            )))
        }
    }
}

impl ComplexNumber {
    /// Renders this `ComplexNumber` as `[re + imi]`, each part in
    /// decimal notation with exactly `decimals` digits after the point.
    /// Fails with `InvalidArgument` if `decimals` is negative.
    pub fn to_decimal_string(&self, decimals: i32) -> Result<String> {
        Ok(format!(
            "[{} + {}i]",
            self.re.to_decimal_string(decimals)?,
            self.im.to_decimal_string(decimals)?
        ))
    }
}

// Implementing `Display` for `ComplexNumber`
impl fmt::Display for ComplexNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = self.to_decimal_string(DISPLAY_DIGITS).map_err(|_| fmt::Error)?;
        f.write_str(&s)
    }
}
