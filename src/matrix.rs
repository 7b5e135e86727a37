use std::fmt;
use std::ops::{Index, IndexMut};

use crate::element::Numeric;
use crate::error::MatResult;
use crate::shape::Shape;
use crate::{format_matrix, Arithmetic, Container};

pub type RowVector<T, const C: usize> = Matrix<T, 1, C>;

pub type ColumnVector<T, const R: usize> = Matrix<T, R, 1>;

pub type MatrixF<const R: usize, const C: usize> = Matrix<f32, R, C>;

pub type MatrixD<const R: usize, const C: usize> = Matrix<f64, R, C>;

pub type MatrixI<const R: usize, const C: usize> = Matrix<i32, R, C>;

pub type MatrixU<const R: usize, const C: usize> = Matrix<u32, R, C>;

pub type MatrixH<const R: usize, const C: usize> = Matrix<half::f16, R, C>;

/// Dense `R x C` matrix stored inline, column after column.
///
/// The shape is part of the type, so adding matrices of different shapes or
/// multiplying matrices whose inner dimensions disagree does not compile.
/// Single-element access is checked at runtime: `get`, `set`, indexing,
/// `get_row` and `get_column` panic on an out-of-range index, `try_get` and
/// `try_set` return [`MatError::OutOfBounds`](crate::MatError::OutOfBounds).
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Matrix<T, const R: usize, const C: usize> {
    // data[col][row]
    data: [[T; R]; C],
}

impl<T: Copy, const R: usize, const C: usize> Matrix<T, R, C> {
    pub const ROWS: usize = R;
    pub const COLS: usize = C;
    const SHAPE: Shape = Shape::new(R, C);
    const NONEMPTY: () = assert!(R > 0 && C > 0, "matrix dimensions must be positive");

    /// Every element set to `value`.
    ///
    /// ```
    /// use fixmat::Matrix;
    ///
    /// const ONES: Matrix<i32, 2, 3> = Matrix::from_elem(1);
    /// assert!(ONES.iter().all(|&v| v == 1));
    /// ```
    ///
    /// Both dimensions must be positive:
    ///
    /// ```compile_fail
    /// use fixmat::Matrix;
    ///
    /// const EMPTY: Matrix<i32, 0, 3> = Matrix::from_elem(0);
    /// ```
    pub const fn from_elem(value: T) -> Self {
        let () = Self::NONEMPTY;
        Self {
            data: [[value; R]; C],
        }
    }

    /// Builds the matrix from `f(row, col)`, visiting elements in storage order.
    pub fn from_fn<F>(mut f: F) -> Self
    where
        F: FnMut(usize, usize) -> T,
    {
        let () = Self::NONEMPTY;
        Self {
            data: std::array::from_fn(|c| std::array::from_fn(|r| f(r, c))),
        }
    }

    pub fn from_rows(rows: [[T; C]; R]) -> Self {
        Self::from_fn(|r, c| rows[r][c])
    }

    pub fn from_columns(columns: [[T; R]; C]) -> Self {
        let () = Self::NONEMPTY;
        Self { data: columns }
    }

    pub fn shape(&self) -> Shape {
        Self::SHAPE
    }

    pub fn nrows(&self) -> usize {
        R
    }

    pub fn ncols(&self) -> usize {
        C
    }

    #[inline]
    pub fn get(&self, row: usize, col: usize) -> T {
        self.as_slice()[Self::SHAPE.offset(row, col)]
    }

    #[inline]
    pub fn set(&mut self, row: usize, col: usize, value: T) {
        let offset = Self::SHAPE.offset(row, col);
        self.as_mut_slice()[offset] = value;
    }

    pub fn try_get(&self, row: usize, col: usize) -> MatResult<T> {
        let offset = Self::SHAPE.checked_offset(row, col)?;
        Ok(self.as_slice()[offset])
    }

    pub fn try_set(&mut self, row: usize, col: usize, value: T) -> MatResult<()> {
        let offset = Self::SHAPE.checked_offset(row, col)?;
        self.as_mut_slice()[offset] = value;
        Ok(())
    }

    pub fn fill(&mut self, value: T) {
        self.as_mut_slice().fill(value);
    }

    pub fn transposed(&self) -> Matrix<T, C, R> {
        Matrix::from_fn(|r, c| self.get(c, r))
    }

    pub fn get_row(&self, index: usize) -> RowVector<T, C> {
        Matrix::from_fn(|_, c| self.get(index, c))
    }

    pub fn get_column(&self, index: usize) -> ColumnVector<T, R> {
        Matrix::from_fn(|r, _| self.get(r, index))
    }

    /// Elements in storage (column-major) order.
    pub fn as_slice(&self) -> &[T] {
        self.data.as_flattened()
    }

    pub fn as_mut_slice(&mut self) -> &mut [T] {
        self.data.as_flattened_mut()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    pub fn map<U, F>(&self, mut f: F) -> Matrix<U, R, C>
    where
        U: Copy,
        F: FnMut(T) -> U,
    {
        Matrix {
            data: self.data.map(|col| col.map(&mut f)),
        }
    }
}

impl<T: Numeric, const R: usize, const C: usize> Matrix<T, R, C> {
    pub fn zeros() -> Self {
        Self::from_elem(T::zero())
    }

    pub fn add_in_place(&mut self, rhs: &Self) -> &mut Self {
        self.zip_apply(rhs, |a, b| a + b)
    }

    pub fn sub_in_place(&mut self, rhs: &Self) -> &mut Self {
        self.zip_apply(rhs, |a, b| a - b)
    }

    pub fn scale_in_place(&mut self, factor: T) -> &mut Self {
        for v in self.as_mut_slice() {
            *v = *v * factor;
        }
        self
    }

    fn zip_apply<F>(&mut self, rhs: &Self, f: F) -> &mut Self
    where
        F: Fn(T, T) -> T,
    {
        for (a, b) in self.as_mut_slice().iter_mut().zip(rhs.as_slice()) {
            *a = f(*a, *b);
        }
        self
    }
}

impl<T: Numeric, const R: usize, const K: usize> Matrix<T, R, K> {
    /// `self * rhs`: every result element is the dot product of a row of
    /// `self` and a column of `rhs`.
    pub fn matmul<const C: usize>(&self, rhs: &Matrix<T, K, C>) -> Matrix<T, R, C> {
        let mut result = Matrix::<T, R, C>::zeros();
        for r in 0..R {
            let row = self.get_row(r);
            for c in 0..C {
                let column = rhs.get_column(c);
                result.set(r, c, row.dot(&column));
            }
        }
        result
    }
}

impl<T: Numeric, const N: usize> RowVector<T, N> {
    pub fn dot(&self, rhs: &ColumnVector<T, N>) -> T {
        self.iter()
            .zip(rhs.iter())
            .fold(T::zero(), |acc, (&a, &b)| acc + a * b)
    }
}

impl<T: Copy + Default, const R: usize, const C: usize> Default for Matrix<T, R, C> {
    fn default() -> Self {
        Self::from_elem(T::default())
    }
}

impl<T: Copy, const R: usize, const C: usize> Index<(usize, usize)> for Matrix<T, R, C> {
    type Output = T;

    fn index(&self, (row, col): (usize, usize)) -> &T {
        &self.as_slice()[Self::SHAPE.offset(row, col)]
    }
}

impl<T: Copy, const R: usize, const C: usize> IndexMut<(usize, usize)> for Matrix<T, R, C> {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut T {
        let offset = Self::SHAPE.offset(row, col);
        &mut self.as_mut_slice()[offset]
    }
}

impl<T: Copy + fmt::Display, const R: usize, const C: usize> fmt::Display for Matrix<T, R, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        format_matrix(f, Self::SHAPE, |r, c| self.get(r, c))
    }
}

impl<T: Copy, const R: usize, const C: usize> Container for Matrix<T, R, C> {
    type Elem = T;

    fn shape(&self) -> Shape {
        Self::SHAPE
    }

    fn get(&self, row: usize, col: usize) -> T {
        Matrix::get(self, row, col)
    }

    fn set(&mut self, row: usize, col: usize, value: T) {
        Matrix::set(self, row, col, value)
    }

    fn fill(&mut self, value: T) {
        Matrix::fill(self, value)
    }
}

impl<T: Numeric, const R: usize, const C: usize> Arithmetic<T> for Matrix<T, R, C> {
    fn try_add_in_place(&mut self, rhs: &Self) -> MatResult<&mut Self> {
        Ok(self.add_in_place(rhs))
    }

    fn try_sub_in_place(&mut self, rhs: &Self) -> MatResult<&mut Self> {
        Ok(self.sub_in_place(rhs))
    }

    fn scale_in_place(&mut self, factor: T) -> &mut Self {
        Matrix::scale_in_place(self, factor)
    }
}
