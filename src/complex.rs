/*
    Exact complex numbers
*/

mod arithmetic;
mod convert;
mod number;
mod polar;

use crate::{Error, Precision, RationalNumber, Result};

pub use convert::DISPLAY_DIGITS;

/** A complex number with exact rational parts.
 *
 * Addition, subtraction, multiplication and division are exact.
 * Magnitude, argument, powers and roots pass through square roots
 * and trigonometric functions, which are approximated by Newton's
 * method and truncated series under a [`Precision`] context.
 *
 * Ordering is lexicographic: real parts first, then imaginary parts.
 *
 */
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ComplexNumber {
    re: RationalNumber, // real part
    im: RationalNumber, // imaginary part
}
