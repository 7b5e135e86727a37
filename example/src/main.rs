use fixmat::{dmatrix, matrix, DynMatrix, MatResult, Matrix, MatrixF};

fn run() -> MatResult<()> {
    let m1 = matrix![[1, 3, 5, -2], [0, 2, 4, -3]];
    let m2 = matrix![[4, 1], [5, 2], [6, 3], [-6, -5]];
    let m3 = m1 * m2;
    println!("product:\n{}\n", m3);

    let mut acc = MatrixF::<2, 3>::from_elem(0.5);
    acc += MatrixF::from_fn(|r, c| (r * 3 + c) as f32);
    acc *= 2.0;
    println!("scaled:\n{}\n", acc);
    println!("transposed:\n{}\n", acc.transposed());

    let lhs = dmatrix![[1.0, 2.0], [3.0, 4.0]];
    let rhs = dmatrix![[1.0, 0.0, 2.0], [0.0, 1.0, 3.0]];
    println!("dynamic product:\n{}\n", lhs.matmul(&rhs)?);
    if let Err(e) = rhs.matmul(&lhs) {
        log::warn!("{}", e);
    }

    let mut twice = lhs.clone();
    twice.try_add_in_place(&lhs)?;
    println!("sum:\n{}\n", twice);

    let path = std::env::temp_dir().join("fixmat-example.txt");
    m3.save(&path)?;
    let reloaded = DynMatrix::<i32>::load(&path)?;
    let fixed: Matrix<i32, 2, 2> = Matrix::try_from(&reloaded)?;
    assert_eq!(fixed, m3);
    std::fs::remove_file(&path)?;
    Ok(())
}

fn main() {
    env_logger::init();
    if let Err(e) = run() {
        log::error!("{}", e);
        std::process::exit(1);
    }
}
