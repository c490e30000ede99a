/// Approximate e as `2 + Σ 1/i!` for `i` in `2..iterations`.
///
/// The factorial is carried as a running product. With fewer than two
/// iterations nothing is added and the result is exactly 2.0.
///
/// ```rust
/// let e = harmonic::series::approximate_euler(30);
/// assert!((e - std::f64::consts::E).abs() < 1e-9);
/// ```
pub fn approximate_euler(iterations: u32) -> f64 {
    let mut factorial = 1.0;
    let mut e = 2.0;

    for i in 2..iterations {
        factorial *= f64::from(i);
        e += 1.0 / factorial;
    }

    e
}
