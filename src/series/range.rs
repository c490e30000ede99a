use serde::Serialize;
use std::fmt;

use crate::error::{Result, SeriesError};

/// Inclusive range of harmonic-series term indices assigned to one worker.
///
/// Ranges built through [`TermRange::new`] satisfy `1 <= begin <= end`. The
/// only other value is [`TermRange::empty`], which stands for "no terms" when
/// a series has zero terms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct TermRange {
    begin: u64,
    end: u64,
}

impl TermRange {
    pub fn new(begin: u64, end: u64) -> Result<Self> {
        if begin < 1 {
            return Err(SeriesError::invalid(format!(
                "range must start at term 1 or later, got {begin}"
            )));
        }
        if begin > end {
            return Err(SeriesError::invalid(format!(
                "range begin {begin} is past its end {end}"
            )));
        }
        Ok(Self { begin, end })
    }

    /// The zero-length range produced for a series of zero terms.
    pub const fn empty() -> Self {
        Self { begin: 1, end: 0 }
    }

    pub fn begin(&self) -> u64 {
        self.begin
    }

    pub fn end(&self) -> u64 {
        self.end
    }

    pub fn is_empty(&self) -> bool {
        self.end < self.begin
    }

    pub fn len(&self) -> u64 {
        if self.is_empty() {
            0
        } else {
            self.end - self.begin + 1
        }
    }

    pub fn contains(&self, term: u64) -> bool {
        term >= self.begin && term <= self.end
    }
}

impl fmt::Display for TermRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            write!(f, "[]")
        } else {
            write!(f, "[{}, {}]", self.begin, self.end)
        }
    }
}

/// Number of workers actually used for `terms` terms when `workers` were asked for.
///
/// Fewer terms than workers collapses to a single worker.
pub fn effective_workers(terms: u64, workers: usize) -> usize {
    if terms < workers as u64 { 1 } else { workers }
}

/// Split `[1, terms]` into contiguous ranges, one per effective worker.
///
/// Each worker gets `ceil(terms / workers)` terms, except that a worker never
/// takes so many that a later worker would be left with none. The ranges are
/// ordered by worker index and cover every term exactly once.
///
/// ```rust
/// use harmonic::series::partition;
///
/// let ranges = partition(10, 4).unwrap();
/// let bounds: Vec<_> = ranges.iter().map(|r| (r.begin(), r.end())).collect();
/// assert_eq!(bounds, vec![(1, 3), (4, 6), (7, 9), (10, 10)]);
/// ```
pub fn partition(terms: i64, workers: usize) -> Result<Vec<TermRange>> {
    if terms < 0 {
        return Err(SeriesError::invalid(format!(
            "term count must not be negative, got {terms}"
        )));
    }
    if workers < 1 {
        return Err(SeriesError::invalid("at least one worker is required"));
    }

    let terms = terms as u64;
    if terms == 0 {
        tracing::trace!("Zero terms, single empty range");
        return Ok(vec![TermRange::empty()]);
    }

    let workers = effective_workers(terms, workers);
    let count = workers as u64;
    let delta = terms.div_ceil(count);

    let mut ranges = Vec::with_capacity(workers);
    let mut begin = 1u64;

    for i in 0..count {
        // Leave at least one term for every worker still to be assigned
        let end = std::cmp::min(begin + delta - 1, terms - (count - 1 - i));
        ranges.push(TermRange::new(begin, end)?);
        begin = std::cmp::min(end + 1, terms);
    }

    tracing::debug!(
        "Partitioned {} terms into {} ranges of up to {} terms",
        terms,
        ranges.len(),
        delta
    );
    Ok(ranges)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn bounds(ranges: &[TermRange]) -> Vec<(u64, u64)> {
        ranges.iter().map(|r| (r.begin(), r.end())).collect()
    }

    #[test]
    fn test_range_validation() {
        assert!(TermRange::new(1, 1).is_ok());
        assert!(matches!(TermRange::new(0, 5), Err(SeriesError::InvalidArgument(_))));
        assert!(matches!(TermRange::new(6, 5), Err(SeriesError::InvalidArgument(_))));
    }

    #[test]
    fn test_empty_range() {
        let empty = TermRange::empty();
        assert!(empty.is_empty());
        assert_eq!(empty.len(), 0);
        assert!(!empty.contains(1));
        assert_eq!(empty.to_string(), "[]");
        assert_eq!(TermRange::new(3, 7).unwrap().to_string(), "[3, 7]");
    }

    #[test]
    fn test_even_split() {
        assert_eq!(bounds(&partition(8, 4).unwrap()), vec![(1, 2), (3, 4), (5, 6), (7, 8)]);
    }

    #[test]
    fn test_uneven_split_reserves_terms_for_later_workers() {
        // ceil(5 / 4) = 2, but the first worker must leave three terms behind
        assert_eq!(bounds(&partition(5, 4).unwrap()), vec![(1, 2), (3, 3), (4, 4), (5, 5)]);
        assert_eq!(
            bounds(&partition(100, 8).unwrap()),
            vec![(1, 13), (14, 26), (27, 39), (40, 52), (53, 65), (66, 78), (79, 91), (92, 100)]
        );
    }

    #[test]
    fn test_one_term_per_worker() {
        assert_eq!(bounds(&partition(3, 3).unwrap()), vec![(1, 1), (2, 2), (3, 3)]);
    }

    #[test]
    fn test_more_workers_than_terms_clamps_to_one() {
        assert_eq!(bounds(&partition(5, 8).unwrap()), vec![(1, 5)]);
        assert_eq!(effective_workers(5, 8), 1);
        assert_eq!(effective_workers(8, 8), 8);
    }

    #[test]
    fn test_zero_terms() {
        let ranges = partition(0, 4).unwrap();
        assert_eq!(ranges, vec![TermRange::empty()]);
    }

    #[test]
    fn test_invalid_arguments() {
        assert!(matches!(partition(-1, 4), Err(SeriesError::InvalidArgument(_))));
        assert!(matches!(partition(10, 0), Err(SeriesError::InvalidArgument(_))));
    }

    proptest! {
        /// Ranges are contiguous, non-empty and cover exactly [1, N]
        #[test]
        fn prop_partition_covers_all_terms(terms in 1i64..5_000, workers in 1usize..64) {
            let ranges = partition(terms, workers).unwrap();

            prop_assert_eq!(ranges.len(), effective_workers(terms as u64, workers));
            prop_assert_eq!(ranges[0].begin(), 1);
            prop_assert_eq!(ranges[ranges.len() - 1].end(), terms as u64);

            for range in &ranges {
                prop_assert!(!range.is_empty());
            }
            for pair in ranges.windows(2) {
                prop_assert_eq!(pair[0].end() + 1, pair[1].begin());
            }

            let covered: u64 = ranges.iter().map(TermRange::len).sum();
            prop_assert_eq!(covered, terms as u64);
        }
    }
}
