/*
    Magnitude, argument, powers and roots
*/

use tracing::debug;

use crate::series::{arctan, cos_series, leibniz_pi, reduce_angle, sin_series};

use super::*;

impl ComplexNumber {
    /// Approximates the magnitude `sqrt(re^2 + im^2)` of this
    /// `ComplexNumber` using the default [`Precision`].
    pub fn abs(&self) -> Result<RationalNumber> {
        self.abs_with(&Precision::default())
    }

    /// Approximates the magnitude `sqrt(re^2 + im^2)` of this `ComplexNumber`.
    pub fn abs_with(&self, ctx: &Precision) -> Result<RationalNumber> {
        self.norm_sqr().sqrt_with(ctx)
    }

    /// Approximates the argument of this `ComplexNumber`
    /// using the default [`Precision`].
    pub fn arg(&self) -> Result<RationalNumber> {
        self.arg_with(&Precision::default())
    }

    /// Approximates the argument of this `ComplexNumber`.
    ///
    /// Uses the half-angle identity `arg(z) = 2 arctan(im / (re + |z|))`,
    /// taken modulo `2 pi`, with pi estimated by the Leibniz series.
    /// In the left half-plane the equal ratio `(|z| - re) / im` is used,
    /// since `re + |z|` cancels there.
    /// The result lies in `(-pi, pi]`. Negative reals have argument pi,
    /// and zero is given argument zero.
    pub fn arg_with(&self, ctx: &Precision) -> Result<RationalNumber> {
        let pi = leibniz_pi(ctx);
        self.arg_from(&self.abs_with(ctx)?, &pi, ctx)
    }

    // Computes the argument from existing magnitude and pi estimates.
    fn arg_from(
        &self,
        magnitude: &RationalNumber,
        pi: &RationalNumber,
        ctx: &Precision,
    ) -> Result<RationalNumber> {
        if self.im.is_zero() {
            return Ok(if self.re.is_negative() {
                pi.clone()
            } else {
                RationalNumber::zero()
            });
        }

        let two = RationalNumber::from(2);
        let t = if self.re.is_negative() {
            magnitude.sub(&self.re).checked_div(&self.im)?
        } else {
            self.im.checked_div(&self.re.add(magnitude))?
        };
        let theta = arctan(&t, pi, ctx)?.mul(&two);
        theta.checked_rem(&pi.mul(&two))
    }

    /// Approximates this `ComplexNumber` raised to an integer power
    /// using the default [`Precision`].
    pub fn pow(&self, exponent: i32) -> Result<Self> {
        self.pow_with(exponent, &Precision::default())
    }

    /// Approximates this `ComplexNumber` raised to an integer power
    /// by De Moivre's formula, `|z|^e (cos(e arg z) + i sin(e arg z))`.
    /// The angle is reduced into `[-pi, pi)` before the series run.
    ///
    /// Without a working precision every estimate stays exact. An angle
    /// built on the pi estimate then carries a denominator of thousands
    /// of bits, and the square root behind `|z|` doubles that size on each
    /// Newton step. Raising a non-real root back to a power is only
    /// practical with [`Precision::working_precision`].
    pub fn pow_with(&self, exponent: i32, ctx: &Precision) -> Result<Self> {
        let pi = leibniz_pi(ctx);
        let abs = self.abs_with(ctx)?;
        let magnitude = abs.pow(exponent);
        let angle = self.arg_from(&abs, &pi, ctx)?.mul(&RationalNumber::from(exponent));
        let angle = reduce_angle(&angle, &pi)?;
        Ok(Self::from_polar(&magnitude, &angle, ctx))
    }

    /// Approximates all `n`-th roots of this `ComplexNumber`
    /// using the default [`Precision`].
    pub fn nth_root(&self, n: u32) -> Result<Vec<Self>> {
        self.nth_root_with(n, &Precision::default())
    }

    /// Approximates all `n`-th roots of this `ComplexNumber`.
    ///
    /// Root `k`, for `k = 0..n`, has magnitude `|z|^(1/n)` and angle
    /// `(arg z + 2 k pi) / n`, so exactly `n` roots are returned.
    /// Without a working precision the roots off the real axis are
    /// exact but very large fractions; see [`ComplexNumber::pow_with`].
    /// Fails with `InvalidArgument` if `n < 2`.
    pub fn nth_root_with(&self, n: u32, ctx: &Precision) -> Result<Vec<Self>> {
        if n < 2 {
            return Err(Error::invalid(
                "the degree of the root must be greater than or equal to 2",
            ));
        }

        let pi = leibniz_pi(ctx);
        let abs = self.abs_with(ctx)?;
        let magnitude = abs.nth_root_with(n, ctx)?;
        let theta = self.arg_from(&abs, &pi, ctx)?;
        let two_pi = pi.mul(&RationalNumber::from(2));
        let inv_n = RationalNumber::from(n).recip();

        let roots = (0..n)
            .map(|k| {
                let angle = theta.add(&two_pi.mul(&RationalNumber::from(k))).mul(&inv_n);
                let angle = reduce_angle(&angle, &pi)?;
                Ok(Self::from_polar(&magnitude, &angle, ctx))
            })
            .collect::<Result<Vec<_>>>()?;

        debug!(n, "complex roots computed");
        Ok(roots)
    }

    /// Builds a `ComplexNumber` from a magnitude and an angle,
    /// approximating cos and sin by their truncated series.
    pub fn from_polar(magnitude: &RationalNumber, angle: &RationalNumber, ctx: &Precision) -> Self {
        Self {
            re: magnitude.mul(&cos_series(angle, ctx)),
            im: magnitude.mul(&sin_series(angle, ctx)),
        }
    }
}
