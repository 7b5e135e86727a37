//! Plain-text matrices: whitespace-separated numbers, one row per line.

use std::fmt;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;
use std::str::FromStr;

use crate::dynamic::DynMatrix;
use crate::element::Numeric;
use crate::error::{MatError, MatResult};
use crate::matrix::Matrix;
use crate::Container;

/// Reads a matrix written one row per line.
///
/// Blank lines are skipped. The column count is the number of values divided
/// by the number of non-blank lines, and every line must hold exactly that
/// many values.
pub fn read_matrix<T, R>(reader: R) -> MatResult<DynMatrix<T>>
where
    T: Copy + FromStr,
    R: BufRead,
{
    let mut values: Vec<T> = Vec::new();
    let mut lines: Vec<(usize, usize)> = Vec::new();

    for (i, line) in reader.lines().enumerate() {
        let line = line.map_err(|e| MatError::from(("read matrix", e)))?;
        let before = values.len();
        for token in line.split_whitespace() {
            let v = token.parse::<T>().map_err(|_| MatError::Parse {
                line: i + 1,
                msg: format!("invalid number {:?}", token),
            })?;
            values.push(v);
        }
        if values.len() > before {
            lines.push((i + 1, values.len() - before));
        }
    }

    let rows = lines.len();
    if rows == 0 {
        return Err(MatError::Parse {
            line: 0,
            msg: "no matrix rows found".to_string(),
        });
    }
    let cols = values.len() / rows;
    if let Some(&(line, found)) = lines.iter().find(|(_, n)| *n != cols) {
        return Err(MatError::Parse {
            line,
            msg: format!("expected {} values, found {}", cols, found),
        });
    }

    // values are row-major
    Ok(DynMatrix::from_fn(rows, cols, |r, c| values[r * cols + c]))
}

/// Writes `m` row by row, each row terminated by a newline.
pub fn write_matrix<M, W>(m: &M, mut writer: W) -> MatResult<()>
where
    M: Container,
    M::Elem: fmt::Display,
    W: Write,
{
    let wrap = |e: std::io::Error| MatError::from(("write matrix", e));
    for r in 0..m.nrows() {
        for c in 0..m.ncols() {
            if c > 0 {
                writer.write_all(b" ").map_err(wrap)?;
            }
            write!(writer, "{}", m.get(r, c)).map_err(wrap)?;
        }
        writer.write_all(b"\n").map_err(wrap)?;
    }
    writer.flush().map_err(wrap)
}

impl<T: Numeric + FromStr> DynMatrix<T> {
    pub fn load<P: AsRef<Path>>(path: P) -> MatResult<Self> {
        let path = path.as_ref();
        let file = File::open(path)
            .map_err(|e| MatError::from((format!("open {}", path.display()).as_str(), e)))?;
        let m = read_matrix(BufReader::new(file))?;
        log::debug!(
            "loaded {} {} matrix from {}",
            m.shape(),
            std::any::type_name::<T>(),
            path.display()
        );
        Ok(m)
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> MatResult<()> {
        save_container(self, path.as_ref())
    }
}

impl<T: Numeric + FromStr, const R: usize, const C: usize> Matrix<T, R, C> {
    /// Loads a matrix file, failing with `DimensionMismatch` unless it holds
    /// exactly `R` rows of `C` values.
    pub fn load<P: AsRef<Path>>(path: P) -> MatResult<Self> {
        let m = DynMatrix::<T>::load(path)?;
        Matrix::try_from(&m)
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> MatResult<()> {
        save_container(self, path.as_ref())
    }
}

fn save_container<M>(m: &M, path: &Path) -> MatResult<()>
where
    M: Container,
    M::Elem: fmt::Display,
{
    let file = File::create(path)
        .map_err(|e| MatError::from((format!("create {}", path.display()).as_str(), e)))?;
    write_matrix(m, BufWriter::new(file))?;
    log::debug!(
        "saved {} {} matrix to {}",
        m.shape(),
        std::any::type_name::<M::Elem>(),
        path.display()
    );
    Ok(())
}
