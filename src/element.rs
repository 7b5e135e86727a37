use std::fmt;

use half::f16;
use num_traits::Num;

/// Element types that get the arithmetic half of the matrix API.
///
/// Any other `Copy` type can still be stored, filled, read and transposed.
pub trait Numeric: Num + Copy + PartialEq + fmt::Debug + fmt::Display {}

macro_rules! impl_numeric {
    ($($t:ty),* $(,)*) => {
        $(impl Numeric for $t {})*
    };
}

impl_numeric!(u8, u16, u32, u64, usize, i8, i16, i32, i64, isize, f16, f32, f64);

#[cfg(test)]
mod tests {
    use super::*;

    fn sum<T: Numeric>(values: &[T]) -> T {
        values.iter().fold(T::zero(), |acc, &v| acc + v)
    }

    #[test]
    fn test_numeric_sum() {
        assert_eq!(sum(&[1i32, -2, 3]), 2);
        assert_eq!(sum(&[0.5f64, 0.25]), 0.75);
        assert_eq!(
            sum(&[f16::from_f32(1.5), f16::from_f32(2.0)]),
            f16::from_f32(3.5)
        );
        assert_eq!(sum::<u8>(&[]), 0);
    }
}
