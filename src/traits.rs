use core::fmt::Debug;
use core::ops::{Mul, Sub};

use num_traits::Zero;

/// Trait for types that can be stored in a [`Vector`](crate::Vector) or
/// [`Matrix`](crate::Matrix).
///
/// Blanket-implemented for all types satisfying the bounds.
/// Covers `f32`, `f64`, all integer types, and `Complex<T>`.
///
/// Elements need not be `Copy`: containers clone where they must and
/// otherwise work on references.
pub trait Element:
    Clone + Default + PartialEq + Debug + Zero + Sub<Output = Self> + Mul<Output = Self>
{
}

impl<T> Element for T where
    T: Clone + Default + PartialEq + Debug + Zero + Sub<Output = T> + Mul<Output = T>
{
}

#[cfg(test)]
mod tests {
    use super::*;

    fn zero_of<T: Element>() -> T {
        T::zero()
    }

    #[test]
    fn zero_matches_default_for_primitives() {
        assert_eq!(zero_of::<i32>(), i32::default());
        assert_eq!(zero_of::<u64>(), u64::default());
        assert_eq!(zero_of::<f64>(), f64::default());
    }

    #[test]
    fn arithmetic_bounds() {
        fn mac<T: Element>(acc: T, a: T, b: T) -> T {
            acc + a * b
        }
        assert_eq!(mac(1, 2, 3), 7);
        assert_eq!(mac(0.5_f64, 2.0, 0.25), 1.0);
    }
}
