use exact_num::{Error, Precision, RationalNumber, RoundingMode};
use num_bigint::BigInt;
use proptest::prelude::*;

fn r(n: i64, d: i64) -> RationalNumber {
    RationalNumber::new(n, d).unwrap()
}

// |x - y| <= 1/tol
fn within(x: &RationalNumber, y: &RationalNumber, tol: i64) -> bool {
    x.sub(y).abs() <= r(1, tol)
}

#[test]
fn construction() {
    let x = r(2, 4);
    assert_eq!(x, r(1, 2), "2/4 should reduce to 1/2");
    assert_eq!(x.numer(), &BigInt::from(1));
    assert_eq!(x.denom(), &BigInt::from(2));

    let x = r(3, -6);
    assert_eq!(x.numer(), &BigInt::from(-1), "sign should move to the numerator");
    assert_eq!(x.denom(), &BigInt::from(2));

    let z = r(0, -5);
    assert_eq!(z.denom(), &BigInt::from(1), "zero should reduce to 0/1");
    assert_eq!(z, RationalNumber::default());
    assert_eq!(RationalNumber::from(7), RationalNumber::from_integer(7));
    assert!(RationalNumber::from(7).is_integer());

    assert!(
        matches!(RationalNumber::new(1, 0), Err(Error::InvalidArgument(_))),
        "a zero denominator must be rejected"
    );
}

#[test]
fn sample_program() {
    let fr1 = r(2, 9);
    let fr2 = r(3, 7);
    let fr3 = r(4, 18);

    assert_eq!((&fr1 + &fr2).to_string(), "41/63");
    assert_eq!((&fr1 * &fr2).to_string(), "2/21");
    assert!(fr1 < fr2);
    assert_eq!(fr1, fr3);
}

#[test]
fn arithmetic() {
    let a = r(1, 2);
    let b = r(1, 3);
    assert_eq!(&a + &b, r(5, 6));
    assert_eq!(&a - &b, r(1, 6));
    assert_eq!(&a * &b, r(1, 6));
    assert_eq!(a.checked_div(&b).unwrap(), r(3, 2));
    assert_eq!(-&a, r(-1, 2));
    assert_eq!(a.increment(), r(3, 2));
    assert_eq!(a.decrement(), r(-1, 2));
    assert_eq!(r(-3, 4).abs(), r(3, 4));
    assert_eq!(r(-3, 4).recip(), r(-4, 3));
    assert_eq!(RationalNumber::zero().recip(), RationalNumber::zero());

    assert_eq!(a.clone() * 8, RationalNumber::from(4));
    assert_eq!(3 - a.clone(), r(5, 2));
    let mut c = a.clone();
    c += &b;
    c -= r(1, 6);
    c *= RationalNumber::from(3);
    assert_eq!(c, RationalNumber::from(2));

    let parts = vec![r(1, 2), r(1, 3), r(1, 6)];
    assert_eq!(parts.iter().sum::<RationalNumber>(), RationalNumber::one());
    assert_eq!(parts.into_iter().product::<RationalNumber>(), r(1, 36));
}

#[test]
fn division_by_zero() {
    let half = r(1, 2);
    assert_eq!(half.checked_div(&r(0, 1)), Err(Error::DivisionByZero));
    assert_eq!(half.checked_rem(&RationalNumber::zero()), Err(Error::DivisionByZero));
}

#[test]
fn remainder() {
    assert_eq!(r(7, 2).checked_rem(&RationalNumber::one()).unwrap(), r(1, 2));
    assert_eq!(RationalNumber::from(5).checked_rem(&RationalNumber::from(3)).unwrap(), RationalNumber::from(2));
    assert_eq!(RationalNumber::from(3).checked_rem(&RationalNumber::from(3)).unwrap(), RationalNumber::zero());
    assert_eq!(RationalNumber::from(10).checked_rem(&r(3, 4)).unwrap(), r(1, 4));
    // values below the divisor are left alone, negatives included
    assert_eq!(r(-1, 2).checked_rem(&RationalNumber::from(3)).unwrap(), r(-1, 2));
    assert_eq!(r(1, 2).checked_rem(&RationalNumber::from(3)).unwrap(), r(1, 2));
}

#[test]
fn powers() {
    assert_eq!(r(2, 3).pow(3), r(8, 27));
    assert_eq!(r(2, 3).pow(-2), r(9, 4));
    assert_eq!(r(-2, 3).pow(-1), r(-3, 2));
    assert_eq!(r(5, 7).pow(0), RationalNumber::one());
    assert_eq!(RationalNumber::zero().pow(-1), RationalNumber::zero());
}

#[test]
fn square_roots() {
    // A(0) = 1, 3/2, 17/12, 577/408, 665857/470832
    assert_eq!(RationalNumber::from(2).sqrt().unwrap(), r(665857, 470832));
    assert_eq!(RationalNumber::zero().sqrt().unwrap(), RationalNumber::zero());
    assert_eq!(RationalNumber::one().sqrt().unwrap(), RationalNumber::one());
    assert!(within(&r(1, 4).sqrt().unwrap(), &r(1, 2), 100_000));
    assert!(within(&RationalNumber::from(25).sqrt().unwrap(), &RationalNumber::from(5), 100_000));
    assert!(
        matches!(RationalNumber::from(-1).sqrt(), Err(Error::InvalidArgument(_))),
        "square root of a negative number must fail"
    );
}

#[test]
fn square_root_working_precision() {
    let ctx = Precision::new().working_precision(32);
    let s = RationalNumber::from(2).sqrt_with(&ctx).unwrap();
    let grid = BigInt::from(1u64 << 32);
    assert_eq!(&grid % s.denom(), BigInt::from(0), "estimate should lie on the 2^-32 grid");
    assert!(within(&s.pow(2), &RationalNumber::from(2), 10_000));
}

#[test]
fn coarse_grid_terminates() {
    // floored Newton on sqrt(3) alternates 1, 2, 1, 2, ... on the integer grid
    let ctx = Precision::new().working_precision(0).rounding_mode(RoundingMode::ToNegative);
    let s = RationalNumber::from(3).sqrt_with(&ctx).unwrap();
    assert!(s.is_integer() && s >= RationalNumber::one() && s <= RationalNumber::from(2), "sqrt(3) = {}", s);
    let c = RationalNumber::from(10).nth_root_with(3, &ctx).unwrap();
    assert!(c.is_integer() && c >= RationalNumber::from(2) && c <= RationalNumber::from(3), "cbrt(10) = {}", c);

    let ctx = Precision::new().working_precision(8).rounding_mode(RoundingMode::ToNegative);
    let s = RationalNumber::from(3).sqrt_with(&ctx).unwrap();
    assert!(within(&s, &r(443, 256), 256), "sqrt(3) = {}", s);
    let c = RationalNumber::from(-10).nth_root_with(3, &ctx).unwrap();
    assert!(within(&c, &r(-2154, 1000), 64), "cbrt(-10) = {}", c);
}

#[test]
fn small_values_on_a_grid() {
    // x / 2 and x / 3 both round to zero on a 2^-16 grid
    let ctx = Precision::new().working_precision(16);
    let x = RationalNumber::new(1, 1i64 << 40).unwrap();

    let s = x.sqrt_with(&ctx).unwrap();
    assert!(s.is_positive());
    assert!(within(&s, &r(1, 1 << 20), 1 << 16), "sqrt(2^-40) = {}", s);

    let c = x.nth_root_with(3, &ctx).unwrap();
    assert!(c.is_positive());
    assert!(within(&c, &r(1, 10321), 1_000), "cbrt(2^-40) = {}", c);

    let ctx = ctx.rounding_mode(RoundingMode::ToNegative);
    assert!(x.sqrt_with(&ctx).unwrap().is_positive());
    assert!(x.neg().nth_root_with(3, &ctx).unwrap().is_negative());
}

#[test]
fn nth_roots() {
    let cube = RationalNumber::from(8).nth_root(3).unwrap();
    assert!(within(&cube, &RationalNumber::from(2), 1_000), "cube root of 8: {}", cube);
    let neg = RationalNumber::from(-8).nth_root(3).unwrap();
    assert!(within(&neg, &RationalNumber::from(-2), 1_000), "cube root of -8: {}", neg);
    let ctx = Precision::new().working_precision(64);
    let fourth = RationalNumber::from(81).nth_root_with(4, &ctx).unwrap();
    assert!(within(&fourth, &RationalNumber::from(3), 1_000), "fourth root of 81: {}", fourth);

    assert_eq!(RationalNumber::zero().nth_root(3).unwrap(), RationalNumber::zero());
    assert_eq!(RationalNumber::one().nth_root(5).unwrap(), RationalNumber::one());
    assert!(matches!(RationalNumber::from(-4).nth_root(2), Err(Error::InvalidArgument(_))));
    assert!(matches!(RationalNumber::from(2).nth_root(1), Err(Error::InvalidArgument(_))));
    assert!(matches!(RationalNumber::from(2).nth_root(0), Err(Error::InvalidArgument(_))));
}

#[test]
fn decimal_strings() {
    assert_eq!(r(1, 4).to_decimal_string(2).unwrap(), "0.25");
    assert_eq!(r(-1, 2).to_decimal_string(1).unwrap(), "-0.5");
    assert_eq!(r(7, 3).to_decimal_string(0).unwrap(), "2");
    assert_eq!(r(22, 7).to_decimal_string(5).unwrap(), "3.14285");
    assert_eq!(r(-7, 2).to_decimal_string(3).unwrap(), "-3.500");
    assert_eq!(RationalNumber::from(5).to_decimal_string(2).unwrap(), "5.00");
    assert!(matches!(r(1, 4).to_decimal_string(-1), Err(Error::InvalidArgument(_))));
    assert_eq!(r(-3, 4).to_string(), "-3/4");
}

#[test]
fn precision_rejects_negative_tolerance() {
    assert!(matches!(Precision::new().sqrt_epsilon(r(-1, 10)), Err(Error::InvalidArgument(_))));
    assert!(matches!(Precision::new().root_epsilon(r(-1, 10)), Err(Error::InvalidArgument(_))));

    let ctx = Precision::new().root_epsilon(r(1, 1_000_000)).unwrap();
    assert_eq!(ctx.get_root_epsilon(), &r(1, 1_000_000));
    let cube = RationalNumber::from(8).nth_root_with(3, &ctx).unwrap();
    assert!(within(&cube, &RationalNumber::from(2), 1_000_000));
}

fn small() -> impl Strategy<Value = RationalNumber> {
    (-200i64..200, 1i64..50).prop_map(|(n, d)| r(n, d))
}

fn nonzero() -> impl Strategy<Value = RationalNumber> {
    small().prop_filter("nonzero", |x| !x.is_zero())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn reduction_is_scale_invariant(a in -500i64..500, b in 1i64..500, k in 1i64..50, neg in any::<bool>()) {
        let k = if neg { -k } else { k };
        prop_assert_eq!(r(a, b), r(k * a, k * b));
    }

    #[test]
    fn canonical_form(x in small()) {
        prop_assert!(x.denom() > &BigInt::from(0));
        let g = num_integer::Integer::gcd(x.numer(), x.denom());
        prop_assert_eq!(g, BigInt::from(1));
    }

    #[test]
    fn identities(a in small(), b in nonzero()) {
        prop_assert_eq!(&a + &(-&a), RationalNumber::zero());
        prop_assert_eq!(&b * &b.recip(), RationalNumber::one());
        prop_assert_eq!(&a.checked_div(&b).unwrap() * &b, a.clone());
        prop_assert_eq!(&(&a - &b) + &b, a);
    }

    #[test]
    fn ordering_is_total(a in small(), b in small()) {
        let facts = [a < b, a == b, a > b];
        prop_assert_eq!(facts.iter().filter(|f| **f).count(), 1);
        prop_assert_eq!(a < b, (&a - &b).is_negative());
    }

    #[test]
    fn remainder_matches_repeated_subtraction(a in 0i64..400, ad in 1i64..8, b in 1i64..40, bd in 1i64..8) {
        let (a, b) = (r(a, ad), r(b, bd));
        let mut expected = a.clone();
        while expected >= b {
            expected = &expected - &b;
        }
        prop_assert_eq!(a.checked_rem(&b).unwrap(), expected);
    }

    #[test]
    fn sqrt_squares_back(n in 1i64..100, d in 1i64..10) {
        let x = r(n, d);
        let s = x.sqrt().unwrap();
        prop_assert!(within(&s.pow(2), &x, 100_000), "sqrt({}) = {}", x, s);
    }
}
