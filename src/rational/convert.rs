/*
    Conversions to and from `RationalNumber`
*/

use std::fmt;

use crate::RoundingMode;

use super::*;

macro_rules! from_integer {
    ($($t:ty),*) => {
        $(
            impl From<$t> for RationalNumber {
                fn from(x: $t) -> Self {
                    Self::from_integer(x)
                }
            }
        )*
    };
}

from_integer!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

// Implementing `From<BigInt>` for `RationalNumber`
impl From<BigInt> for RationalNumber {
    fn from(x: BigInt) -> Self {
        Self::from_integer(x)
    }
}

// Implementing `Display` for `RationalNumber` as `num/den`
impl fmt::Display for RationalNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.num, self.den)
    }
}

impl RationalNumber {
    /// Renders this `RationalNumber` in decimal notation with exactly
    /// `decimals` digits after the point.
    ///
    /// The digits come from long division of the numerator by the
    /// denominator, so they are exact and truncated, never rounded.
    /// The point is omitted when `decimals` is zero.
    /// Fails with `InvalidArgument` if `decimals` is negative.
    pub fn to_decimal_string(&self, decimals: i32) -> Result<String> {
        if decimals < 0 {
            return Err(Error::invalid("decimals can not be less than zero"));
        }

        let ten = BigInt::from(10);
        let (quotient, mut remainder) = self.num.abs().div_rem(&self.den);

        let mut s = String::new();
        if self.is_negative() {
            s.push('-');
        }
        s.push_str(&quotient.to_string());
        if decimals != 0 {
            s.push('.');
        }

        for _ in 0..decimals {
            remainder *= &ten;
            let (digit, rem) = remainder.div_rem(&self.den);
            s.push_str(&digit.to_string());
            remainder = rem;
        }

        Ok(s)
    }

    /// Rounds this `RationalNumber` to the nearest multiple of `2^-bits`
    /// in the direction given by `rm`.
    pub fn round_to(&self, bits: u32, rm: RoundingMode) -> Self {
        if self.is_zero() {
            return self.clone();
        }

        let scale = BigInt::one() << bits;
        let scaled = &self.num * &scale;
        let (q, r) = scaled.div_mod_floor(&self.den);
        if r.is_zero() {
            return Self::reduced(q, scale);
        }

        // `q` is the floor; decide whether to step up to `q + 1`
        let twice: BigInt = &r << 1usize;
        let up = match rm {
            RoundingMode::ToNegative => false,
            RoundingMode::ToPositive => true,
            RoundingMode::ToZero => q.is_negative(),
            RoundingMode::AwayZero => !q.is_negative(),
            RoundingMode::NearestEven => match twice.cmp(&self.den) {
                std::cmp::Ordering::Less => false,
                std::cmp::Ordering::Greater => true,
                std::cmp::Ordering::Equal => q.is_odd(),
            },
        };

        let q = if up { q + 1 } else { q };
        Self::reduced(q, scale)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_to_grid() {
        let third = RationalNumber::new(1, 3).unwrap();
        // 1/3 * 4 = 1.33.. => 1/4 or 2/4
        assert_eq!(third.round_to(2, RoundingMode::NearestEven), RationalNumber::new(1, 4).unwrap());
        assert_eq!(third.round_to(2, RoundingMode::ToPositive), RationalNumber::new(1, 2).unwrap());
        assert_eq!(third.neg().round_to(2, RoundingMode::ToZero), RationalNumber::new(-1, 4).unwrap());
        assert_eq!(third.neg().round_to(2, RoundingMode::AwayZero), RationalNumber::new(-1, 2).unwrap());
        assert_eq!(third.neg().round_to(2, RoundingMode::ToNegative), RationalNumber::new(-1, 2).unwrap());

        // ties go to the even neighbor: 3/8 * 4 = 1.5 => 2/4
        let tie = RationalNumber::new(3, 8).unwrap();
        assert_eq!(tie.round_to(2, RoundingMode::NearestEven), RationalNumber::new(1, 2).unwrap());
        let exact = RationalNumber::new(3, 4).unwrap();
        assert_eq!(exact.round_to(2, RoundingMode::ToZero), exact);
    }
}
