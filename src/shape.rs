use std::fmt;

use crate::error::{MatError, MatResult};

/// Row and column count of a matrix.
///
/// Storage is column-major: element `(row, col)` lives at `col * rows + row`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Shape {
    rows: usize,
    cols: usize,
}

impl Shape {
    pub const fn new(rows: usize, cols: usize) -> Self {
        Self { rows, cols }
    }

    pub const fn rows(&self) -> usize {
        self.rows
    }

    pub const fn cols(&self) -> usize {
        self.cols
    }

    pub const fn dims2(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Panics if `rows * cols` does not fit in `usize`.
    pub fn elem_count(&self) -> usize {
        self.checked_elem_count()
            .unwrap_or_else(|| capacity_overflow(self))
    }

    pub const fn checked_elem_count(&self) -> Option<usize> {
        self.rows.checked_mul(self.cols)
    }

    pub const fn transposed(&self) -> Shape {
        Shape::new(self.cols, self.rows)
    }

    pub const fn contains(&self, row: usize, col: usize) -> bool {
        row < self.rows && col < self.cols
    }

    /// Linear offset of `(row, col)`. Panics when the index is outside the shape.
    #[inline]
    pub fn offset(&self, row: usize, col: usize) -> usize {
        assert!(
            row < self.rows,
            "Invalid row requested: {} (rows = {})",
            row,
            self.rows
        );
        assert!(
            col < self.cols,
            "Invalid column requested: {} (cols = {})",
            col,
            self.cols
        );
        col * self.rows + row
    }

    #[inline]
    pub fn checked_offset(&self, row: usize, col: usize) -> MatResult<usize> {
        if self.contains(row, col) {
            Ok(col * self.rows + row)
        } else {
            Err(MatError::OutOfBounds {
                row,
                col,
                shape: *self,
            })
        }
    }

    /// `(row, col)` for a linear offset, inverse of [`Shape::offset`].
    #[inline]
    pub(crate) fn index_of(&self, offset: usize) -> (usize, usize) {
        (offset % self.rows, offset / self.rows)
    }

    pub(crate) fn check_same(&self, op: &'static str, rhs: &Shape) -> MatResult<()> {
        if self == rhs {
            Ok(())
        } else {
            Err(MatError::mismatch(op, *self, *rhs))
        }
    }

    /// Shape of `self * rhs`, if the inner dimensions agree.
    pub(crate) fn product(&self, rhs: &Shape) -> MatResult<Shape> {
        if self.cols == rhs.rows {
            Ok(Shape::new(self.rows, rhs.cols))
        } else {
            Err(MatError::mismatch("matmul", *self, *rhs))
        }
    }
}

#[cold]
fn capacity_overflow(shape: &Shape) -> ! {
    panic!("capacity overflow: {} matrix", shape);
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.rows, self.cols)
    }
}

impl From<(usize, usize)> for Shape {
    fn from((rows, cols): (usize, usize)) -> Self {
        Shape::new(rows, cols)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_major_offset() {
        let s = Shape::new(4, 3);
        assert_eq!(s.offset(0, 0), 0);
        assert_eq!(s.offset(1, 0), 1);
        assert_eq!(s.offset(0, 1), 4);
        assert_eq!(s.offset(3, 2), 11);
        for off in 0..s.elem_count() {
            let (r, c) = s.index_of(off);
            assert_eq!(s.offset(r, c), off);
        }
    }

    #[test]
    #[should_panic(expected = "Invalid row requested")]
    fn test_offset_row_out_of_range() {
        Shape::new(2, 2).offset(2, 0);
    }

    #[test]
    #[should_panic(expected = "Invalid column requested")]
    fn test_offset_col_out_of_range() {
        Shape::new(2, 2).offset(0, 5);
    }

    #[test]
    fn test_checked_offset() {
        let s = Shape::new(2, 3);
        assert_eq!(s.checked_offset(1, 2).unwrap(), 5);
        match s.checked_offset(2, 0) {
            Err(MatError::OutOfBounds { row, col, shape }) => {
                assert_eq!((row, col), (2, 0));
                assert_eq!(shape, s);
            }
            other => panic!("expected OutOfBounds, got {:?}", other),
        }
    }

    #[test]
    fn test_elem_count_overflow() {
        let s = Shape::new(usize::MAX / 2 + 1, 2);
        assert_eq!(s.checked_elem_count(), None);
        assert_eq!(Shape::new(4, 3).checked_elem_count(), Some(12));
    }

    #[test]
    #[should_panic(expected = "capacity overflow")]
    fn test_elem_count_overflow_panics() {
        Shape::new(usize::MAX, 3).elem_count();
    }

    #[test]
    fn test_product_shape() {
        let a = Shape::new(2, 4);
        let b = Shape::new(4, 3);
        assert_eq!(a.product(&b).unwrap(), Shape::new(2, 3));
        assert!(b.product(&a).is_err());
        assert_eq!(a.transposed(), Shape::new(4, 2));
        assert_eq!(format!("{}", a), "2x4");
    }
}
