/// Fixed-size matrix from row literals: `matrix![[1, 2], [3, 4]]`.
#[macro_export]
macro_rules! matrix {
    ($([$($x:expr),* $(,)*]),+ $(,)*) => {{
        $crate::Matrix::from_rows([$([$($x,)*],)*])
    }};
}

/// Runtime-shaped matrix from row literals: `dmatrix![[1, 2], [3, 4]]`.
///
/// Panics if the rows have different lengths.
#[macro_export]
macro_rules! dmatrix {
    ($([$($x:expr),* $(,)*]),+ $(,)*) => {{
        match $crate::DynMatrix::from_rows(vec![$(vec![$($x,)*],)*]) {
            Ok(m) => m,
            Err(e) => panic!("dmatrix!: {}", e),
        }
    }};
}
