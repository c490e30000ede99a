use serde::Serialize;

/// What the `sum` command prints: the total, `e^total` and `terms / e^total`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeriesReport {
    pub terms: u64,
    /// Worker threads that actually ran; 1 for serial runs and small inputs.
    pub workers: usize,
    pub sum: f64,
    pub exp_sum: f64,
    pub terms_over_exp_sum: f64,
}

impl SeriesReport {
    pub fn new(terms: u64, workers: usize, sum: f64) -> Self {
        let exp_sum = sum.exp();
        Self {
            terms,
            workers,
            sum,
            exp_sum,
            terms_over_exp_sum: terms as f64 / exp_sum,
        }
    }
}
