/*
    Roots by Newton's method
*/

use tracing::{debug, trace};

use crate::Precision;

use super::*;

impl RationalNumber {
    /// Approximates the square root of this `RationalNumber`
    /// using the default [`Precision`].
    pub fn sqrt(&self) -> Result<Self> {
        self.sqrt_with(&Precision::default())
    }

    /// Approximates the square root of this `RationalNumber`.
    ///
    /// Runs Newton's method `A(k+1) = (A(k) + x / A(k)) / 2` from
    /// `A(0) = x / 2` until two successive estimates differ by no more
    /// than the context's square root tolerance. The tolerance bounds
    /// the absolute step, not the relative error. Under a working
    /// precision the iteration stops within one grid step instead,
    /// and no estimate is rounded to zero.
    /// Zero and one are returned unchanged.
    /// Fails with `InvalidArgument` if this value is negative.
    pub fn sqrt_with(&self, ctx: &Precision) -> Result<Self> {
        if self.is_negative() {
            return Err(Error::invalid(
                "unable to extract the square root of a negative number",
            ));
        }
        if self.is_zero() || self.is_one() {
            return Ok(self.clone());
        }

        let half = Self::from_ratio((1, 2));
        let start = ctx.fit_nonzero(self.mul(&half));
        let (root, iters) = Self::newton(start, &ctx.sqrt_epsilon, ctx, |a| {
            let next = a.add(&self.checked_div(a)?).mul(&half);
            Ok(ctx.fit_nonzero(next))
        })?;

        debug!(iters, "sqrt converged");
        Ok(root)
    }

    /// Approximates the real `n`-th root of this `RationalNumber`
    /// using the default [`Precision`].
    pub fn nth_root(&self, n: u32) -> Result<Self> {
        self.nth_root_with(n, &Precision::default())
    }

    /// Approximates the real `n`-th root of this `RationalNumber`.
    ///
    /// Runs the generalized Newton iteration
    /// `A(k+1) = ((n - 1) A(k) + x / A(k)^(n - 1)) / n` from `A(0) = x / n`
    /// until two successive estimates differ by no more than the
    /// context's n-th root tolerance. Odd roots of negative values
    /// are negative. Zero and one are returned unchanged.
    /// Fails with `InvalidArgument` if `n < 2`, or if this value is
    /// negative and `n` is even.
    pub fn nth_root_with(&self, n: u32, ctx: &Precision) -> Result<Self> {
        if n < 2 {
            return Err(Error::invalid(
                "the degree of the root must be greater than or equal to 2",
            ));
        }
        if self.is_negative() && n % 2 == 0 {
            return Err(Error::invalid(
                "unable to extract an even root of a negative number",
            ));
        }
        if self.is_zero() || self.is_one() {
            return Ok(self.clone());
        }

        let degree = Self::from(n);
        let inv_degree = degree.recip();
        let lower = Self::from(n - 1);
        let exp = (n - 1) as i32;
        let start = ctx.fit_nonzero(self.mul(&inv_degree));
        let (root, iters) = Self::newton(start, &ctx.root_epsilon, ctx, |a| {
            let next = lower.mul(a).add(&self.checked_div(&a.pow(exp))?).mul(&inv_degree);
            Ok(ctx.fit_nonzero(next))
        })?;

        debug!(iters, n, "nth root converged");
        Ok(root)
    }

    // Iterates `step` from `start` until two successive estimates differ
    // by at most `eps`. On a working grid the tolerance is never finer
    // than one grid step, and the loop also ends once the steps stop
    // shrinking.
    fn newton<F>(start: Self, eps: &Self, ctx: &Precision, step: F) -> Result<(Self, usize)>
    where
        F: Fn(&Self) -> Result<Self>,
    {
        let unit = ctx.grid_step();
        let tol = match &unit {
            Some(unit) if unit > eps => unit.clone(),
            _ => eps.clone(),
        };

        let mut a0 = start;
        let mut a1 = step(&a0)?;
        let mut diff = a1.sub(&a0).abs();
        let mut iters = 1usize;
        while diff > tol {
            trace!(iter = iters, bits = a1.den.bits(), "newton iterate");
            a0 = a1;
            a1 = step(&a0)?;
            iters += 1;

            let next = a1.sub(&a0).abs();
            if unit.is_some() && next >= diff {
                trace!(iter = iters, "rounded iterates stopped shrinking");
                break;
            }
            diff = next;
        }

        Ok((a1, iters))
    }

    // Returns true if this value is exactly one.
    fn is_one(&self) -> bool {
        self.num.is_one() && self.den.is_one()
    }
}
