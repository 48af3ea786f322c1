/*
    Approximation contexts
*/

use num_bigint::BigInt;
use num_traits::One;

use crate::{Error, RationalNumber, Result};

/// Settings carried by a number type for its inexact operations.
///
/// Sums, differences, products and quotients of rationals are rationals,
/// so they never consult a `Context`. Roots and trigonometry produce
/// estimates instead: Newton iterates and partial sums of a series.
/// A `Context` holds the tolerances and series lengths that bound
/// those estimates, and the grid they are snapped to, if any.
pub trait Context: Sized {}

/// Rounding directions used when snapping an estimate onto
/// a binary grid of `2^-bits`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RoundingMode {
    /// Nearest grid point, ties to the even neighbor.
    #[default]
    NearestEven,
    /// Toward zero (truncation).
    ToZero,
    /// Toward positive infinity (ceiling).
    ToPositive,
    /// Toward negative infinity (floor).
    ToNegative,
    /// Away from zero.
    AwayZero,
}

/// Tolerance of the Newton iteration behind square roots.
pub const SQRT_EPSILON: (i64, i64) = (1, 100_000);

/// Tolerance of the Newton iteration behind general n-th roots.
pub const ROOT_EPSILON: (i64, i64) = (1, 1_000);

/// Highest index of the truncated sin, cos and arctan series.
pub const SERIES_TERMS: u32 = 10;

/// Highest index of the truncated Leibniz series for pi.
pub const PI_TERMS: u32 = 1000;

/// Configuration for every approximating operation on
/// [`RationalNumber`] and [`ComplexNumber`](crate::ComplexNumber).
///
/// By default iterates are kept exact. Setting a working precision
/// rounds every estimate to a multiple of `2^-bits`, which keeps
/// numerators and denominators from growing with each iteration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Precision {
    pub(crate) sqrt_epsilon: RationalNumber,
    pub(crate) root_epsilon: RationalNumber,
    pub(crate) series_terms: u32,
    pub(crate) pi_terms: u32,
    pub(crate) working_precision: Option<u32>,
    pub(crate) rm: RoundingMode,
}

impl Precision {
    /// Creates a new context using the default tolerances and
    /// series lengths, with exact (unrounded) iterates.
    pub fn new() -> Self {
        Self {
            sqrt_epsilon: RationalNumber::from_ratio(SQRT_EPSILON),
            root_epsilon: RationalNumber::from_ratio(ROOT_EPSILON),
            series_terms: SERIES_TERMS,
            pi_terms: PI_TERMS,
            working_precision: None,
            rm: RoundingMode::NearestEven,
        }
    }

    /// Sets the stopping tolerance of square roots.
    pub fn sqrt_epsilon(mut self, eps: RationalNumber) -> Result<Self> {
        if eps.is_negative() {
            return Err(Error::invalid("epsilon must not be negative"));
        }
        self.sqrt_epsilon = eps;
        Ok(self)
    }

    /// Sets the stopping tolerance of n-th roots.
    pub fn root_epsilon(mut self, eps: RationalNumber) -> Result<Self> {
        if eps.is_negative() {
            return Err(Error::invalid("epsilon must not be negative"));
        }
        self.root_epsilon = eps;
        Ok(self)
    }

    /// Sets the highest index of the sin, cos and arctan series.
    pub fn series_terms(mut self, terms: u32) -> Self {
        self.series_terms = terms;
        self
    }

    /// Sets the highest index of the Leibniz series for pi.
    pub fn pi_terms(mut self, terms: u32) -> Self {
        self.pi_terms = terms;
        self
    }

    /// Rounds every estimate to a multiple of `2^-bits`.
    pub fn working_precision(mut self, bits: u32) -> Self {
        self.working_precision = Some(bits);
        self
    }

    /// Sets the rounding mode used with a working precision.
    pub fn rounding_mode(mut self, rm: RoundingMode) -> Self {
        self.rm = rm;
        self
    }

    /// Returns the square root tolerance.
    pub fn get_sqrt_epsilon(&self) -> &RationalNumber {
        &self.sqrt_epsilon
    }

    /// Returns the n-th root tolerance.
    pub fn get_root_epsilon(&self) -> &RationalNumber {
        &self.root_epsilon
    }

    /// Returns the working precision in bits, if any.
    pub fn get_working_precision(&self) -> Option<u32> {
        self.working_precision
    }

    // Snaps an estimate onto the working grid, if one is set.
    pub(crate) fn fit(&self, x: RationalNumber) -> RationalNumber {
        match self.working_precision {
            Some(bits) => x.round_to(bits, self.rm),
            None => x,
        }
    }

    // Like `fit`, but a nonzero estimate never lands on zero:
    // it stays one grid step away, on the side of `x`.
    pub(crate) fn fit_nonzero(&self, x: RationalNumber) -> RationalNumber {
        if x.is_zero() {
            return x;
        }
        let negative = x.is_negative();
        let fitted = self.fit(x);
        match self.grid_step() {
            Some(unit) if fitted.is_zero() => {
                if negative {
                    unit.neg()
                } else {
                    unit
                }
            }
            _ => fitted,
        }
    }

    // Spacing of the working grid, `2^-bits`.
    pub(crate) fn grid_step(&self) -> Option<RationalNumber> {
        self.working_precision
            .map(|bits| RationalNumber::reduced(BigInt::one(), BigInt::one() << bits))
    }
}

impl Context for Precision {}

impl Default for Precision {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_never_swallows_nonzero() {
        let ctx = Precision::new().working_precision(4).rounding_mode(RoundingMode::ToZero);
        let tiny = RationalNumber::new(1, 1000).unwrap();
        assert_eq!(ctx.fit(tiny.clone()), RationalNumber::zero());
        assert_eq!(ctx.fit_nonzero(tiny.clone()), RationalNumber::new(1, 16).unwrap());
        assert_eq!(ctx.fit_nonzero(tiny.neg()), RationalNumber::new(-1, 16).unwrap());
        assert_eq!(ctx.fit_nonzero(RationalNumber::zero()), RationalNumber::zero());
        assert_eq!(Precision::new().grid_step(), None);
    }
}
