use serde::Serialize;

use crate::error::{Result, SeriesError};
use crate::parallel::CancellationToken;
use crate::series::TermRange;

/// Terms summed between two cancellation checks.
pub const CANCEL_CHECK_INTERVAL: u64 = 1 << 16;

/// A range together with the sum of its terms.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PartialResult {
    pub range: TermRange,
    pub sum: f64,
}

impl PartialResult {
    pub fn compute(range: TermRange) -> Self {
        Self {
            range,
            sum: partial_sum(range),
        }
    }
}

/// Σ 1/i for i in `range`, accumulated in ascending index order.
pub fn partial_sum(range: TermRange) -> f64 {
    let mut sum = 0.0;
    accumulate(&mut sum, range.begin(), range.end());
    sum
}

/// Same as [`partial_sum`], polling `cancel` every [`CANCEL_CHECK_INTERVAL`] terms.
///
/// Blocks are added to the one accumulator in order, so the result is
/// bit-identical to the uncancellable version.
pub fn partial_sum_cancellable(range: TermRange, cancel: &CancellationToken) -> Result<f64> {
    let mut sum = 0.0;
    if range.is_empty() {
        return Ok(sum);
    }

    let mut block_begin = range.begin();
    loop {
        cancel.check()?;
        let block_end = range.end().min(block_begin.saturating_add(CANCEL_CHECK_INTERVAL - 1));
        accumulate(&mut sum, block_begin, block_end);
        if block_end == range.end() {
            break;
        }
        block_begin = block_end + 1;
    }

    Ok(sum)
}

fn accumulate(sum: &mut f64, begin: u64, end: u64) {
    for i in begin..=end {
        *sum += 1.0 / i as f64;
    }
}

/// Single-threaded H_N.
///
/// ```rust
/// assert_eq!(harmonic::series::serial_sum(0).unwrap(), 0.0);
/// assert_eq!(harmonic::series::serial_sum(1).unwrap(), 1.0);
/// assert_eq!(harmonic::series::serial_sum(2).unwrap(), 1.5);
/// ```
pub fn serial_sum(terms: i64) -> Result<f64> {
    if terms < 0 {
        return Err(SeriesError::invalid(format!(
            "term count must not be negative, got {terms}"
        )));
    }
    if terms == 0 {
        return Ok(0.0);
    }
    Ok(partial_sum(TermRange::new(1, terms as u64)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_sum_small_ranges() {
        assert_eq!(partial_sum(TermRange::new(1, 1).unwrap()), 1.0);
        assert_eq!(partial_sum(TermRange::new(2, 4).unwrap()), 0.5 + 1.0 / 3.0 + 0.25);
        assert_eq!(partial_sum(TermRange::empty()), 0.0);
    }

    #[test]
    fn test_serial_sum() {
        assert_eq!(serial_sum(0).unwrap(), 0.0);
        assert_eq!(serial_sum(1).unwrap(), 1.0);
        assert!((serial_sum(100).unwrap() - 5.187377517639621).abs() < 1e-12);
        assert!(matches!(serial_sum(-3), Err(SeriesError::InvalidArgument(_))));
    }

    #[test]
    fn test_cancellable_matches_plain_sum() {
        let range = TermRange::new(7, 3 * CANCEL_CHECK_INTERVAL + 11).unwrap();
        let token = CancellationToken::new();
        assert_eq!(partial_sum_cancellable(range, &token).unwrap(), partial_sum(range));
        assert_eq!(partial_sum_cancellable(TermRange::empty(), &token).unwrap(), 0.0);
    }

    #[test]
    fn test_cancelled_sum_stops() {
        let token = CancellationToken::new();
        token.cancel();
        let result = partial_sum_cancellable(TermRange::new(1, 10).unwrap(), &token);
        assert_eq!(result, Err(SeriesError::Cancelled));
    }

    #[test]
    fn test_partial_result_compute() {
        let range = TermRange::new(1, 4).unwrap();
        let partial = PartialResult::compute(range);
        assert_eq!(partial.range, range);
        assert_eq!(partial.sum, partial_sum(range));
    }
}
