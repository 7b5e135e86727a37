use std::io;
use std::io::Error as IOError;
use thiserror::Error;

use crate::shape::Shape;

pub type MatResult<T> = Result<T, MatError>;

#[derive(Error, Debug)]
pub enum MatError {
    #[error("index ({row}, {col}) out of bounds for {shape} matrix")]
    OutOfBounds { row: usize, col: usize, shape: Shape },
    #[error("dimension mismatch in {op}: {lhs} vs {rhs}")]
    DimensionMismatch {
        op: &'static str,
        lhs: Shape,
        rhs: Shape,
    },
    #[error("{shape} matrix needs {expected} elements, got {found}")]
    ElementCount {
        shape: Shape,
        expected: usize,
        found: usize,
    },
    #[error("parse error at line {line}: {msg}")]
    Parse { line: usize, msg: String },
    #[error("Unexpected io: {0}, {1}")]
    UnexpectIO(String, io::Error),
}

impl MatError {
    pub(crate) fn mismatch(op: &'static str, lhs: Shape, rhs: Shape) -> Self {
        log::debug!("{}: shape {} does not fit {}", op, lhs, rhs);
        MatError::DimensionMismatch { op, lhs, rhs }
    }
}

impl From<(&str, io::Error)> for MatError {
    fn from(e: (&str, io::Error)) -> Self {
        MatError::UnexpectIO(e.0.to_string(), e.1)
    }
}

impl From<IOError> for MatError {
    fn from(e: IOError) -> Self {
        MatError::UnexpectIO(String::new(), e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let e = MatError::OutOfBounds {
            row: 3,
            col: 1,
            shape: Shape::new(3, 3),
        };
        assert_eq!(e.to_string(), "index (3, 1) out of bounds for 3x3 matrix");

        let e = MatError::mismatch("matmul", Shape::new(2, 3), Shape::new(2, 3));
        assert_eq!(e.to_string(), "dimension mismatch in matmul: 2x3 vs 2x3");
    }

    #[test]
    fn test_from_io() {
        let io = IOError::new(io::ErrorKind::NotFound, "gone");
        let e: MatError = ("open m.txt", io).into();
        match e {
            MatError::UnexpectIO(ctx, inner) => {
                assert_eq!(ctx, "open m.txt");
                assert_eq!(inner.kind(), io::ErrorKind::NotFound);
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }
}
