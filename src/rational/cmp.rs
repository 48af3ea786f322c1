/*
    Ordering
*/

use std::cmp::Ordering;

use super::*;

// Implementing `Ord` for `RationalNumber`
impl Ord for RationalNumber {
    /// Compares numerators after bringing both sides
    /// to the least common multiple of their denominators.
    fn cmp(&self, other: &Self) -> Ordering {
        if self.den == other.den {
            return self.num.cmp(&other.num);
        }

        let m = lcm(&self.den, &other.den);
        let lhs = &self.num * (&m / &self.den);
        let rhs = &other.num * (&m / &other.den);
        lhs.cmp(&rhs)
    }
}

// Implementing `PartialOrd` for `RationalNumber`
impl PartialOrd for RationalNumber {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compare_across_denominators() {
        let a = RationalNumber::new(2, 9).unwrap();
        let b = RationalNumber::new(3, 7).unwrap();
        assert!(a < b);
        assert!(b > a);
        assert_eq!(a.cmp(&RationalNumber::new(4, 18).unwrap()), Ordering::Equal);
        assert!(RationalNumber::new(-1, 2).unwrap() < RationalNumber::zero());
    }
}
