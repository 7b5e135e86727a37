use std::fmt;
use std::ops::{Index, IndexMut, Mul};

use crate::element::Numeric;
use crate::error::{MatError, MatResult};
use crate::matrix::Matrix;
use crate::shape::Shape;
use crate::{format_matrix, Arithmetic, Container};

/// Matrix whose shape is only known at runtime.
///
/// Same column-major layout and operations as [`Matrix`]; operations that
/// need two compatible shapes return [`MatError::DimensionMismatch`]
/// instead of failing to compile.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct DynMatrix<T> {
    data: Vec<T>,
    shape: Shape,
}

impl<T: Copy> DynMatrix<T> {
    pub fn from_elem(rows: usize, cols: usize, value: T) -> Self {
        let shape = Shape::new(rows, cols);
        Self {
            data: vec![value; shape.elem_count()],
            shape,
        }
    }

    pub fn from_fn<F>(rows: usize, cols: usize, mut f: F) -> Self
    where
        F: FnMut(usize, usize) -> T,
    {
        let shape = Shape::new(rows, cols);
        let data = (0..shape.elem_count())
            .map(|offset| {
                let (r, c) = shape.index_of(offset);
                f(r, c)
            })
            .collect();
        Self { data, shape }
    }

    /// Wraps `data`, read in column-major order.
    pub fn from_vec(rows: usize, cols: usize, data: Vec<T>) -> MatResult<Self> {
        let shape = Shape::new(rows, cols);
        match shape.checked_elem_count() {
            Some(expected) if expected == data.len() => Ok(Self { data, shape }),
            expected => Err(MatError::ElementCount {
                shape,
                expected: expected.unwrap_or(usize::MAX),
                found: data.len(),
            }),
        }
    }

    pub fn from_rows(rows: Vec<Vec<T>>) -> MatResult<Self> {
        let cols = rows.first().map_or(0, |row| row.len());
        if rows.iter().any(|row| row.len() != cols) {
            let shape = Shape::new(rows.len(), cols);
            return Err(MatError::ElementCount {
                shape,
                expected: shape.checked_elem_count().unwrap_or(usize::MAX),
                found: rows.iter().map(|row| row.len()).sum(),
            });
        }
        Ok(Self::from_fn(rows.len(), cols, |r, c| rows[r][c]))
    }

    pub fn shape(&self) -> Shape {
        self.shape
    }

    pub fn nrows(&self) -> usize {
        self.shape.rows()
    }

    pub fn ncols(&self) -> usize {
        self.shape.cols()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    #[inline]
    pub fn get(&self, row: usize, col: usize) -> T {
        self.data[self.shape.offset(row, col)]
    }

    #[inline]
    pub fn set(&mut self, row: usize, col: usize, value: T) {
        let offset = self.shape.offset(row, col);
        self.data[offset] = value;
    }

    pub fn try_get(&self, row: usize, col: usize) -> MatResult<T> {
        let offset = self.shape.checked_offset(row, col)?;
        Ok(self.data[offset])
    }

    pub fn try_set(&mut self, row: usize, col: usize, value: T) -> MatResult<()> {
        let offset = self.shape.checked_offset(row, col)?;
        self.data[offset] = value;
        Ok(())
    }

    pub fn fill(&mut self, value: T) {
        self.data.fill(value);
    }

    pub fn transposed(&self) -> DynMatrix<T> {
        DynMatrix::from_fn(self.ncols(), self.nrows(), |r, c| self.get(c, r))
    }

    /// Copy of row `index` as a `1 x ncols` matrix.
    pub fn get_row(&self, index: usize) -> DynMatrix<T> {
        assert!(
            index < self.nrows(),
            "Invalid row requested: {} (rows = {})",
            index,
            self.nrows()
        );
        DynMatrix::from_fn(1, self.ncols(), |_, c| self.get(index, c))
    }

    /// Copy of column `index` as an `nrows x 1` matrix.
    pub fn get_column(&self, index: usize) -> DynMatrix<T> {
        assert!(
            index < self.ncols(),
            "Invalid column requested: {} (cols = {})",
            index,
            self.ncols()
        );
        let start = index * self.nrows();
        DynMatrix {
            data: self.data[start..start + self.nrows()].to_vec(),
            shape: Shape::new(self.nrows(), 1),
        }
    }

    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }

    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    pub fn map<U, F>(&self, f: F) -> DynMatrix<U>
    where
        F: FnMut(T) -> U,
    {
        DynMatrix {
            data: self.data.iter().copied().map(f).collect(),
            shape: self.shape,
        }
    }
}

impl<T: Numeric> DynMatrix<T> {
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self::from_elem(rows, cols, T::zero())
    }

    pub fn try_add_in_place(&mut self, rhs: &Self) -> MatResult<&mut Self> {
        self.shape.check_same("add", &rhs.shape)?;
        Ok(self.zip_apply(rhs, |a, b| a + b))
    }

    pub fn try_sub_in_place(&mut self, rhs: &Self) -> MatResult<&mut Self> {
        self.shape.check_same("sub", &rhs.shape)?;
        Ok(self.zip_apply(rhs, |a, b| a - b))
    }

    pub fn scale_in_place(&mut self, factor: T) -> &mut Self {
        for v in self.data.iter_mut() {
            *v = *v * factor;
        }
        self
    }

    pub fn try_add(&self, rhs: &Self) -> MatResult<Self> {
        let mut out = self.clone();
        out.try_add_in_place(rhs)?;
        Ok(out)
    }

    pub fn try_sub(&self, rhs: &Self) -> MatResult<Self> {
        let mut out = self.clone();
        out.try_sub_in_place(rhs)?;
        Ok(out)
    }

    pub fn scaled(&self, factor: T) -> Self {
        let mut out = self.clone();
        out.scale_in_place(factor);
        out
    }

    /// `self * rhs`. The inner dimensions are checked before any work is done.
    pub fn matmul(&self, rhs: &Self) -> MatResult<Self> {
        let shape = self.shape.product(&rhs.shape)?;
        log::trace!("matmul {} * {} -> {}", self.shape, rhs.shape, shape);

        let mut result = Self::zeros(shape.rows(), shape.cols());
        for r in 0..shape.rows() {
            let row = self.get_row(r);
            for c in 0..shape.cols() {
                let column = rhs.get_column(c);
                result.set(r, c, dot(&row, &column));
            }
        }
        Ok(result)
    }

    fn zip_apply<F>(&mut self, rhs: &Self, f: F) -> &mut Self
    where
        F: Fn(T, T) -> T,
    {
        for (a, b) in self.data.iter_mut().zip(rhs.data.iter()) {
            *a = f(*a, *b);
        }
        self
    }
}

fn dot<T: Numeric>(row: &DynMatrix<T>, column: &DynMatrix<T>) -> T {
    row.iter()
        .zip(column.iter())
        .fold(T::zero(), |acc, (&a, &b)| acc + a * b)
}

impl<T: Numeric> Mul<T> for DynMatrix<T> {
    type Output = DynMatrix<T>;

    fn mul(mut self, factor: T) -> Self::Output {
        self.scale_in_place(factor);
        self
    }
}

impl<T: Numeric> Mul<T> for &DynMatrix<T> {
    type Output = DynMatrix<T>;

    fn mul(self, factor: T) -> Self::Output {
        self.scaled(factor)
    }
}

impl<T: Copy> Index<(usize, usize)> for DynMatrix<T> {
    type Output = T;

    fn index(&self, (row, col): (usize, usize)) -> &T {
        &self.data[self.shape.offset(row, col)]
    }
}

impl<T: Copy> IndexMut<(usize, usize)> for DynMatrix<T> {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut T {
        let offset = self.shape.offset(row, col);
        &mut self.data[offset]
    }
}

impl<T: Copy + fmt::Display> fmt::Display for DynMatrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        format_matrix(f, self.shape, |r, c| self.get(r, c))
    }
}

impl<T: Copy> Container for DynMatrix<T> {
    type Elem = T;

    fn shape(&self) -> Shape {
        self.shape
    }

    fn get(&self, row: usize, col: usize) -> T {
        DynMatrix::get(self, row, col)
    }

    fn set(&mut self, row: usize, col: usize, value: T) {
        DynMatrix::set(self, row, col, value)
    }

    fn fill(&mut self, value: T) {
        DynMatrix::fill(self, value)
    }
}

impl<T: Numeric> Arithmetic<T> for DynMatrix<T> {
    fn try_add_in_place(&mut self, rhs: &Self) -> MatResult<&mut Self> {
        DynMatrix::try_add_in_place(self, rhs)
    }

    fn try_sub_in_place(&mut self, rhs: &Self) -> MatResult<&mut Self> {
        DynMatrix::try_sub_in_place(self, rhs)
    }

    fn scale_in_place(&mut self, factor: T) -> &mut Self {
        DynMatrix::scale_in_place(self, factor)
    }
}

impl<T: Copy, const R: usize, const C: usize> From<Matrix<T, R, C>> for DynMatrix<T> {
    fn from(m: Matrix<T, R, C>) -> Self {
        DynMatrix {
            data: m.as_slice().to_vec(),
            shape: m.shape(),
        }
    }
}

impl<T: Copy, const R: usize, const C: usize> TryFrom<&DynMatrix<T>> for Matrix<T, R, C> {
    type Error = MatError;

    fn try_from(m: &DynMatrix<T>) -> MatResult<Self> {
        m.shape.check_same("convert", &Shape::new(R, C))?;
        Ok(Matrix::from_fn(|r, c| m.get(r, c)))
    }
}

impl<T: Copy, const R: usize, const C: usize> TryFrom<DynMatrix<T>> for Matrix<T, R, C> {
    type Error = MatError;

    fn try_from(m: DynMatrix<T>) -> MatResult<Self> {
        Matrix::try_from(&m)
    }
}
