use std::ops::{Mul, MulAssign};

use crate::element::Numeric;
use crate::matrix::Matrix;

macro_rules! impl_binary_op {
    ($trt:ident, $mth:ident, $assign_trt:ident, $assign_mth:ident, $in_place:ident) => {
        impl<T, const R: usize, const C: usize> std::ops::$assign_trt<&Matrix<T, R, C>>
            for Matrix<T, R, C>
        where
            T: Numeric,
        {
            fn $assign_mth(&mut self, rhs: &Matrix<T, R, C>) {
                self.$in_place(rhs);
            }
        }

        impl<T, const R: usize, const C: usize> std::ops::$assign_trt<Matrix<T, R, C>>
            for Matrix<T, R, C>
        where
            T: Numeric,
        {
            fn $assign_mth(&mut self, rhs: Matrix<T, R, C>) {
                self.$in_place(&rhs);
            }
        }

        impl<T, const R: usize, const C: usize> std::ops::$trt<&Matrix<T, R, C>> for Matrix<T, R, C>
        where
            T: Numeric,
        {
            type Output = Matrix<T, R, C>;
            fn $mth(mut self, rhs: &Matrix<T, R, C>) -> Self::Output {
                self.$in_place(rhs);
                self
            }
        }

        impl<T, const R: usize, const C: usize> std::ops::$trt<Matrix<T, R, C>> for Matrix<T, R, C>
        where
            T: Numeric,
        {
            type Output = Matrix<T, R, C>;
            fn $mth(mut self, rhs: Matrix<T, R, C>) -> Self::Output {
                self.$in_place(&rhs);
                self
            }
        }

        impl<T, const R: usize, const C: usize> std::ops::$trt<&Matrix<T, R, C>> for &Matrix<T, R, C>
        where
            T: Numeric,
        {
            type Output = Matrix<T, R, C>;
            fn $mth(self, rhs: &Matrix<T, R, C>) -> Self::Output {
                let mut lhs = *self;
                lhs.$in_place(rhs);
                lhs
            }
        }

        impl<T, const R: usize, const C: usize> std::ops::$trt<Matrix<T, R, C>> for &Matrix<T, R, C>
        where
            T: Numeric,
        {
            type Output = Matrix<T, R, C>;
            fn $mth(self, rhs: Matrix<T, R, C>) -> Self::Output {
                let mut lhs = *self;
                lhs.$in_place(&rhs);
                lhs
            }
        }
    };
}

impl_binary_op!(Add, add, AddAssign, add_assign, add_in_place); // +
impl_binary_op!(Sub, sub, SubAssign, sub_assign, sub_in_place); // -

impl<T: Numeric, const R: usize, const C: usize> MulAssign<T> for Matrix<T, R, C> {
    fn mul_assign(&mut self, factor: T) {
        self.scale_in_place(factor);
    }
}

impl<T: Numeric, const R: usize, const C: usize> Mul<T> for Matrix<T, R, C> {
    type Output = Matrix<T, R, C>;

    fn mul(mut self, factor: T) -> Self::Output {
        self.scale_in_place(factor);
        self
    }
}

impl<T: Numeric, const R: usize, const C: usize> Mul<T> for &Matrix<T, R, C> {
    type Output = Matrix<T, R, C>;

    fn mul(self, factor: T) -> Self::Output {
        *self * factor
    }
}

impl<T, const R: usize, const K: usize, const C: usize> Mul<Matrix<T, K, C>> for Matrix<T, R, K>
where
    T: Numeric,
{
    type Output = Matrix<T, R, C>;

    fn mul(self, rhs: Matrix<T, K, C>) -> Self::Output {
        self.matmul(&rhs)
    }
}

impl<T, const R: usize, const K: usize, const C: usize> Mul<&Matrix<T, K, C>> for &Matrix<T, R, K>
where
    T: Numeric,
{
    type Output = Matrix<T, R, C>;

    fn mul(self, rhs: &Matrix<T, K, C>) -> Self::Output {
        self.matmul(rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matrix::{MatrixD, MatrixH};
    use half::f16;

    fn fixture_lhs() -> Matrix<i32, 3, 4> {
        Matrix::from_rows([[1, 0, 7, 6], [0, 9, 2, 3], [8, 0, 4, 5]])
    }

    fn fixture_rhs() -> Matrix<i32, 3, 4> {
        Matrix::from_rows([[-5, 1, 21, 0], [-8, 4, -3, 10], [1, -1, 7, 2]])
    }

    #[test]
    fn test_addition() {
        let expected = Matrix::from_rows([[-4, 1, 28, 6], [-8, 13, -1, 13], [9, -1, 11, 7]]);
        let sum = fixture_lhs() + fixture_rhs();
        assert_eq!(sum.get(0, 0), -4);
        assert_eq!(sum, expected);

        let mut acc = fixture_lhs();
        acc += fixture_rhs();
        assert_eq!(acc, expected);
        assert_eq!(&fixture_lhs() + &fixture_rhs(), expected);
    }

    #[test]
    fn test_subtraction() {
        let diff = fixture_lhs() - fixture_rhs();
        assert_eq!(
            diff,
            Matrix::from_rows([[6, -1, -14, 6], [8, 5, 5, -7], [7, 1, -3, 3]])
        );
        let mut back = diff;
        back += &fixture_rhs();
        assert_eq!(back, fixture_lhs());

        let mut m = fixture_lhs();
        m -= &fixture_lhs();
        assert_eq!(m, Matrix::zeros());
    }

    #[test]
    fn test_addition_associative_and_commutative() {
        let a = fixture_lhs();
        let b = fixture_rhs();
        let c = Matrix::<i32, 3, 4>::from_fn(|r, c| (r as i32) * 3 - (c as i32));
        assert_eq!((a + b) + c, a + (b + c));
        assert_eq!(a + b, b + a);
    }

    #[test]
    fn test_multiplication_factor() {
        let mat = Matrix::from_rows([[5, 20], [10, 25], [15, 30]]);
        let expected = Matrix::from_rows([[15, 60], [30, 75], [45, 90]]);

        let mat_bis = mat * 3;
        let mut in_place = mat;
        in_place *= 3;

        assert_eq!(mat_bis, expected);
        assert_eq!(in_place, expected);
        assert_eq!(&mat * 3, expected);
    }

    #[test]
    fn test_scale_elementwise() {
        let a = MatrixD::<2, 3>::from_fn(|r, c| r as f64 * 1.5 + c as f64);
        let s = 2.5;
        let scaled = a * s;
        for r in 0..2 {
            for c in 0..3 {
                assert_eq!(scaled.get(r, c), a.get(r, c) * s);
            }
        }
    }

    #[test]
    fn test_chained_in_place() {
        let mut m = Matrix::from_rows([[1, 2], [3, 4]]);
        let one = Matrix::from_elem(1);
        m.add_in_place(&one).scale_in_place(2).sub_in_place(&one);
        assert_eq!(m, Matrix::from_rows([[3, 5], [7, 9]]));
    }

    #[test]
    fn test_multiplication_matrix() {
        let lhs = Matrix::from_rows([[1, 3, 5, -2], [0, 2, 4, -3]]);
        let rhs = Matrix::from_rows([[4, 1], [5, 2], [6, 3], [-6, -5]]);
        let product: Matrix<i32, 2, 2> = lhs * rhs;
        assert_eq!(product, Matrix::from_rows([[61, 32], [52, 31]]));
        assert_eq!(&lhs * &rhs, product);
    }

    #[test]
    fn test_product_associative() {
        let a = Matrix::from_rows([[1, 2, 0], [-1, 3, 4]]);
        let b = Matrix::from_rows([[2, 1], [0, -2], [5, 3]]);
        let c = Matrix::from_rows([[1, 4, 2], [3, -1, 0]]);
        assert_eq!((a * b) * c, a * (b * c));
    }

    #[test]
    fn test_product_not_commutative() {
        let a = Matrix::from_rows([[1, 2], [3, 4]]);
        let b = Matrix::from_rows([[0, 1], [1, 0]]);
        assert_eq!(a * b, Matrix::from_rows([[2, 1], [4, 3]]));
        assert_eq!(b * a, Matrix::from_rows([[3, 4], [1, 2]]));
        assert_ne!(a * b, b * a);
    }

    #[test]
    fn test_product_with_vectors() {
        let m = Matrix::from_rows([[1.0, 2.0], [3.0, 4.0]]);
        let v = Matrix::from_rows([[1.0], [-1.0]]);
        assert_eq!(m * v, Matrix::from_rows([[-1.0], [-1.0]]));
        let row = Matrix::from_rows([[2.0, 0.5]]);
        assert_eq!(row * m, Matrix::from_rows([[3.5, 6.0]]));
    }

    #[test]
    fn test_half_precision() {
        let m = MatrixH::<2, 2>::from_elem(f16::from_f32(1.5));
        let doubled = m * f16::from_f32(2.0);
        assert!(doubled.iter().all(|&v| v == f16::from_f32(3.0)));

        let sum = m + doubled;
        assert_eq!(sum.get(1, 1), f16::from_f32(4.5));
    }
}
