//! Edge weight abstraction.
//!
//! The engine only needs a total order, a zero, and an addition that reports
//! overflow. Integers use their native order; floats use `total_cmp` and reject
//! non-finite values up front so the order is meaningful.

use std::{cmp::Ordering, fmt};

/// A totally ordered numeric edge weight.
///
/// # Examples
/// ```
/// use std::cmp::Ordering;
/// use sollin_core::Weight;
///
/// assert_eq!(3_u32.compare(&5), Ordering::Less);
/// assert_eq!(u32::MAX.checked_accumulate(1), None);
/// assert!(!f32::NAN.is_valid());
/// ```
pub trait Weight: Copy + fmt::Debug + fmt::Display + PartialEq + Send + Sync + 'static {
    /// Additive identity used to seed the tree total.
    const ZERO: Self;

    /// Total order used by every cheapest-edge comparison.
    fn compare(&self, other: &Self) -> Ordering;

    /// Adds two weights, returning `None` when the sum is not representable.
    fn checked_accumulate(self, other: Self) -> Option<Self>;

    /// Returns `false` for values that cannot take part in the total order.
    fn is_valid(&self) -> bool {
        true
    }
}

macro_rules! impl_integer_weight {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl Weight for $ty {
                const ZERO: Self = 0;

                fn compare(&self, other: &Self) -> Ordering {
                    self.cmp(other)
                }

                fn checked_accumulate(self, other: Self) -> Option<Self> {
                    self.checked_add(other)
                }
            }
        )+
    };
}

macro_rules! impl_float_weight {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl Weight for $ty {
                const ZERO: Self = 0.0;

                fn compare(&self, other: &Self) -> Ordering {
                    self.total_cmp(other)
                }

                fn checked_accumulate(self, other: Self) -> Option<Self> {
                    let sum = self + other;
                    sum.is_finite().then_some(sum)
                }

                fn is_valid(&self) -> bool {
                    self.is_finite()
                }
            }
        )+
    };
}

impl_integer_weight!(u32, u64, usize, i32, i64);
impl_float_weight!(f32, f64);

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;

    #[rstest]
    #[case(1_i64, 2, Ordering::Less)]
    #[case(-4_i64, -4, Ordering::Equal)]
    #[case(7_i64, -7, Ordering::Greater)]
    fn integer_weights_use_native_order(
        #[case] left: i64,
        #[case] right: i64,
        #[case] expected: Ordering,
    ) {
        assert_eq!(left.compare(&right), expected);
    }

    #[test]
    fn float_weights_order_negative_zero_first() {
        assert_eq!((-0.0_f64).compare(&0.0), Ordering::Less);
    }

    #[rstest]
    #[case(f32::NAN)]
    #[case(f32::INFINITY)]
    #[case(f32::NEG_INFINITY)]
    fn non_finite_floats_are_invalid(#[case] weight: f32) {
        assert!(!weight.is_valid());
    }

    #[test]
    fn accumulation_reports_overflow() {
        assert_eq!(i32::MAX.checked_accumulate(1), None);
        assert_eq!(f32::MAX.checked_accumulate(f32::MAX), None);
        assert_eq!(2_u64.checked_accumulate(3), Some(5));
    }
}
