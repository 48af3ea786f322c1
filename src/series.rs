/*
    Truncated series in exact arithmetic
*/

//! Transcendental functions approximated by truncated series.
//!
//! Every series here is a polynomial with rational coefficients, so
//! evaluating it on a rational argument gives an exact rational result.
//! The only error is the truncation itself. Polynomials are evaluated
//! in nested (Horner) form, which yields the same value as summing the
//! terms one by one while keeping intermediate fractions smaller.

use num_bigint::BigInt;
use num_traits::Zero;
use tracing::debug;

use crate::rational::gcd;
use crate::{Error, Precision, RationalNumber, Result};

/// Taylor series of `sin(x)` summed over `n = 0..=terms`:
/// `sum (-1)^n x^(2n+1) / (2n+1)!`.
pub fn sin_series(x: &RationalNumber, ctx: &Precision) -> RationalNumber {
    let y = x.mul(x);
    let mut acc = RationalNumber::one();
    for n in (1..=ctx.series_terms as i64).rev() {
        let k = RationalNumber::from_ratio((1, (2 * n) * (2 * n + 1)));
        acc = RationalNumber::one().sub(&y.mul(&acc).mul(&k));
    }
    ctx.fit(x.mul(&acc))
}

/// Taylor series of `cos(x)` summed over `n = 0..=terms`:
/// `sum (-1)^n x^(2n) / (2n)!`.
pub fn cos_series(x: &RationalNumber, ctx: &Precision) -> RationalNumber {
    let y = x.mul(x);
    let mut acc = RationalNumber::one();
    for n in (1..=ctx.series_terms as i64).rev() {
        let k = RationalNumber::from_ratio((1, (2 * n - 1) * (2 * n)));
        acc = RationalNumber::one().sub(&y.mul(&acc).mul(&k));
    }
    ctx.fit(acc)
}

/// Taylor series of `arctan(x)` summed over `n = 1..=terms`:
/// `sum (-1)^(n-1) x^(2n-1) / (2n-1)`.
/// Fails with `InvalidArgument` if `|x| > 1`, outside the
/// interval where the series converges.
pub fn arctan_series(x: &RationalNumber, ctx: &Precision) -> Result<RationalNumber> {
    if x.abs() > RationalNumber::one() {
        return Err(Error::invalid("argument absolute value must not exceed one"));
    }

    let y = x.mul(x);
    let mut acc = RationalNumber::zero();
    for k in (0..ctx.series_terms as i64).rev() {
        let c = RationalNumber::from_ratio((if k % 2 == 0 { 1 } else { -1 }, 2 * k + 1));
        acc = c.add(&y.mul(&acc));
    }
    Ok(ctx.fit(x.mul(&acc)))
}

/// Approximates `arctan(x)` for any rational `x`.
///
/// The argument is folded onto `[0, 1/2]` before the series runs:
///  - `arctan(-x) = -arctan(x)`,
///  - `arctan(x) = pi/2 - arctan(1/x)` for `x > 1`,
///  - `arctan(x) = pi/4 + arctan((x - 1) / (x + 1))` for `1/2 < x <= 1`.
/// `pi` is the estimate used for the constant offsets.
pub fn arctan(x: &RationalNumber, pi: &RationalNumber, ctx: &Precision) -> Result<RationalNumber> {
    if x.is_negative() {
        return Ok(arctan(&x.neg(), pi, ctx)?.neg());
    }

    let half = RationalNumber::from_ratio((1, 2));
    if *x > RationalNumber::one() {
        let r = arctan(&x.recip(), pi, ctx)?;
        Ok(pi.mul(&half).sub(&r))
    } else if *x > half {
        let u = x.decrement().checked_div(&x.increment())?;
        let quarter = RationalNumber::from_ratio((1, 4));
        Ok(pi.mul(&quarter).add(&arctan_series(&u, ctx)?))
    } else {
        arctan_series(x, ctx)
    }
}

/// Estimates pi from the Leibniz series, grouped in pairs:
/// `pi = 4 * sum 2 / ((4n + 1)(4n + 3))` over `n = 0..=pi_terms`.
pub fn leibniz_pi(ctx: &Precision) -> RationalNumber {
    // accumulate over the running lcm of the denominators, reduce once
    let mut num = BigInt::zero();
    let mut den = BigInt::from(1);
    for n in 0..=ctx.pi_terms as u128 {
        let d = BigInt::from((4 * n + 1) * (4 * n + 3));
        let g = gcd(&den, &d);
        let scale = &d / &g;
        num = num * &scale + (&den / &g) * 2;
        den *= scale;
    }

    debug!(terms = ctx.pi_terms, bits = den.bits(), "leibniz pi");
    ctx.fit(RationalNumber::reduced(num * 4, den))
}

/// Reduces an angle into `[-pi, pi)` by subtracting the nearest
/// multiple of `2 pi`, using the estimate `pi`.
pub fn reduce_angle(x: &RationalNumber, pi: &RationalNumber) -> Result<RationalNumber> {
    let two_pi = pi.mul(&RationalNumber::from(2));
    let half = RationalNumber::from_ratio((1, 2));
    let k = x.checked_div(&two_pi)?.add(&half).floor();
    if k.is_zero() {
        return Ok(x.clone());
    }
    Ok(x.sub(&two_pi.mul(&RationalNumber::from(k))))
}
