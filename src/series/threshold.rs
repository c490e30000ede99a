use crate::error::{Result, SeriesError};
use crate::series::parallel_sum;

/// Euler–Mascheroni constant γ.
pub const EULER_GAMMA: f64 = 0.577_215_664_901_532_9;

/// Largest term count the estimator will compute a sum for.
pub const MAX_THRESHOLD_TERMS: u64 = 10_000_000_000;

/// Smallest N with H_N > `limit`.
///
/// H_N ≈ ln N + γ, so `exp(limit - γ)` lands within a term or two of the
/// answer. The exact sum at that guess is computed with `workers` threads and
/// then walked one term at a time to the boundary. The walk accumulates in a
/// different order than a fresh sum, so the boundary is settled against
/// freshly computed sums: the result is minimal for `parallel_sum(n, workers)`,
/// which with one worker is exactly `serial_sum(n)`.
///
/// ```rust
/// use harmonic::series::estimate_threshold;
///
/// assert_eq!(estimate_threshold(1.0, 1).unwrap(), 2);
/// assert_eq!(estimate_threshold(3.0, 4).unwrap(), 11);
/// ```
pub fn estimate_threshold(limit: f64, workers: usize) -> Result<u64> {
    if !limit.is_finite() {
        return Err(SeriesError::invalid(format!("threshold limit must be finite, got {limit}")));
    }
    if limit < 1.0 {
        // H_1 = 1 already exceeds it
        return Ok(1);
    }

    let guess = (limit - EULER_GAMMA).exp().floor();
    if guess >= MAX_THRESHOLD_TERMS as f64 {
        return Err(SeriesError::invalid(format!(
            "threshold limit {limit} needs more than {MAX_THRESHOLD_TERMS} terms"
        )));
    }

    let mut n = (guess as u64).max(1);
    let mut h = parallel_sum(n as i64, workers)?;
    tracing::debug!("Threshold {} initial guess N={} H_N={}", limit, n, h);

    if h > limit {
        // Step down while the previous sum still exceeds the limit
        while n > 1 && h - 1.0 / n as f64 > limit {
            h -= 1.0 / n as f64;
            n -= 1;
        }
    } else {
        while h <= limit {
            n += 1;
            h += 1.0 / n as f64;
        }
    }

    loop {
        if n > 1 && parallel_sum(n as i64 - 1, workers)? > limit {
            n -= 1;
        } else if parallel_sum(n as i64, workers)? <= limit {
            n += 1;
        } else {
            break;
        }
    }

    Ok(n)
}
