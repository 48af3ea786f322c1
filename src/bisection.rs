/*
    Root finding by bisection
*/

use tracing::{debug, trace};

use crate::{Error, RationalNumber, Result};

/// Locates a root of `f` inside `[left, right]` by bisection.
///
/// The interval is halved at its midpoint `c`, keeping `[c, b]` when
/// `f(b) f(c) < 0` and `[a, c]` otherwise, until `|a - b| <= epsilon`.
/// The midpoint of the final interval is returned.
///
/// Fails with `InvalidArgument` if `epsilon` is negative, if
/// `left > right`, or if `f(left) f(right) > 0`.
pub fn solve<F>(
    left: &RationalNumber,
    right: &RationalNumber,
    f: F,
    epsilon: &RationalNumber,
) -> Result<RationalNumber>
where
    F: Fn(&RationalNumber) -> RationalNumber,
{
    solve_with_iterations(left, right, f, epsilon).map(|(root, _)| root)
}

/// Like [`solve`], but also returns the number of halvings performed.
pub fn solve_with_iterations<F>(
    left: &RationalNumber,
    right: &RationalNumber,
    f: F,
    epsilon: &RationalNumber,
) -> Result<(RationalNumber, usize)>
where
    F: Fn(&RationalNumber) -> RationalNumber,
{
    if epsilon.is_negative() {
        return Err(Error::invalid("epsilon must not be negative"));
    }
    if left > right {
        return Err(Error::invalid(
            "wrong interval, the left border should not exceed the right",
        ));
    }
    if f(left).mul(&f(right)).is_positive() {
        return Err(Error::invalid(
            "wrong interval, no sign change between the borders",
        ));
    }

    let half = RationalNumber::from_ratio((1, 2));
    let mut a = left.clone();
    let mut b = right.clone();
    let mut iters = 0usize;
    while a.sub(&b).abs() > *epsilon {
        let c = a.add(&b).mul(&half);
        trace!(iter = iters, a = %a, b = %b, "bisection step");
        if f(&b).mul(&f(&c)).is_negative() {
            a = c;
        } else {
            b = c;
        }
        iters += 1;
    }

    debug!(iters, "bisection converged");
    Ok((a.add(&b).mul(&half), iters))
}
