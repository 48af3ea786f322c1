/*
    Defines a number
*/

use std::fmt::Display;

use crate::{Context, RationalNumber, Result};

/// The number type.
///
/// The central trait of this library.
/// A `Number` is an exact value whose arithmetic never rounds.
/// Operations that can only be approximated, say square roots or
/// powers of complex values, take a context describing how far
/// the approximation is carried.
pub trait Number: Clone + Default + PartialEq + Display {
    /// The approximation context associated with this `Number`.
    type Ctx: Context;

    /// Returns true if this `Number` encodes a zero.
    fn is_zero(&self) -> bool;

    /// Divides this `Number` by another, failing when
    /// the divisor is zero.
    fn checked_div(&self, other: &Self) -> Result<Self>;

    /// Returns the distance of this `Number` from zero,
    /// approximated according to the provided context.
    fn magnitude(&self, ctx: &Self::Ctx) -> Result<RationalNumber>;

    /// Raises this `Number` to an integer power,
    /// approximated according to the provided context.
    fn powi(&self, exponent: i32, ctx: &Self::Ctx) -> Result<Self>;
}
