//! Dense matrices whose shape is part of the type.
//!
//! [`Matrix<T, R, C>`] keeps its `R * C` elements inline in column-major
//! order and never allocates. [`DynMatrix<T>`] offers the same operations
//! with a shape chosen at runtime, reporting shape mismatches as
//! [`MatError::DimensionMismatch`].
//!
//! ```
//! use fixmat::matrix;
//!
//! let a = matrix![[1, 3, 5, -2], [0, 2, 4, -3]];
//! let b = matrix![[4, 1], [5, 2], [6, 3], [-6, -5]];
//! assert_eq!(a * b, matrix![[61, 32], [52, 31]]);
//! ```

#[macro_use]
mod macros;

mod dynamic;
mod element;
mod error;
mod io;
mod matrix;
mod op;
mod shape;

use std::fmt;

pub use crate::dynamic::DynMatrix;
pub use crate::element::Numeric;
pub use crate::error::{MatError, MatResult};
pub use crate::io::{read_matrix, write_matrix};
pub use crate::matrix::{
    ColumnVector, Matrix, MatrixD, MatrixF, MatrixH, MatrixI, MatrixU, RowVector,
};
pub use crate::shape::Shape;

/// Storage and element access, available for any `Copy` element type.
pub trait Container {
    type Elem: Copy;

    fn shape(&self) -> Shape;

    /// Panics when `(row, col)` is outside the shape.
    fn get(&self, row: usize, col: usize) -> Self::Elem;

    /// Panics when `(row, col)` is outside the shape.
    fn set(&mut self, row: usize, col: usize, value: Self::Elem);

    fn fill(&mut self, value: Self::Elem);

    fn nrows(&self) -> usize {
        self.shape().rows()
    }

    fn ncols(&self) -> usize {
        self.shape().cols()
    }

    fn try_get(&self, row: usize, col: usize) -> MatResult<Self::Elem> {
        self.shape().checked_offset(row, col)?;
        Ok(self.get(row, col))
    }

    fn try_set(&mut self, row: usize, col: usize, value: Self::Elem) -> MatResult<()> {
        self.shape().checked_offset(row, col)?;
        self.set(row, col, value);
        Ok(())
    }
}

/// Element-wise arithmetic shared by the fixed and the runtime-shaped matrix.
///
/// For [`Matrix`] the shapes are checked by the compiler and the `try_`
/// methods always succeed.
pub trait Arithmetic<T: Numeric>: Container<Elem = T> {
    fn try_add_in_place(&mut self, rhs: &Self) -> MatResult<&mut Self>;

    fn try_sub_in_place(&mut self, rhs: &Self) -> MatResult<&mut Self>;

    fn scale_in_place(&mut self, factor: T) -> &mut Self;
}

/// Writes the elements row by row: values separated by one space, rows by a
/// newline, nothing after the last row.
pub(crate) fn format_matrix<T, F>(f: &mut fmt::Formatter<'_>, shape: Shape, at: F) -> fmt::Result
where
    T: fmt::Display,
    F: Fn(usize, usize) -> T,
{
    let (rows, cols) = shape.dims2();
    for r in 0..rows {
        if r > 0 {
            f.write_str("\n")?;
        }
        for c in 0..cols {
            if c > 0 {
                f.write_str(" ")?;
            }
            fmt::Display::fmt(&at(r, c), f)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sum_twice<T: Numeric, M: Arithmetic<T> + Clone>(m: &M) -> MatResult<M> {
        let mut out = m.clone();
        out.try_add_in_place(m)?;
        Ok(out)
    }

    #[test]
    fn test_arithmetic_over_both_variants() {
        let fixed = matrix![[1, 2], [3, 4]];
        let dynamic = DynMatrix::from(fixed);

        let f2 = sum_twice(&fixed).unwrap();
        let d2 = sum_twice(&dynamic).unwrap();
        assert_eq!(f2, fixed * 2);
        assert_eq!(d2, DynMatrix::from(f2));
    }

    #[test]
    fn test_arithmetic_mismatch_on_dynamic() {
        let mut a = DynMatrix::<i32>::zeros(2, 2);
        let b = DynMatrix::<i32>::zeros(2, 3);
        assert!(a.try_sub_in_place(&b).is_err());
        Arithmetic::scale_in_place(&mut a, 5);
        assert_eq!(a, DynMatrix::zeros(2, 2));
    }

    #[test]
    fn test_macros() {
        let m = matrix![[1u8, 2], [3, 4]];
        assert_eq!(m.shape(), Shape::new(2, 2));
        let d = dmatrix![[1u8, 2], [3, 4]];
        assert_eq!(d, DynMatrix::from(m));
        assert_eq!(m.to_string(), d.to_string());
    }
}
