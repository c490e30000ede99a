use crate::error::{Result, SeriesError};
use crate::series::{parallel_sum, serial_sum};

/// A harmonic series of `terms` terms and the last total computed for it.
///
/// Every operation that changes the series takes `&mut self`, so the type
/// system rules out two recomputations racing on the same value.
#[derive(Debug, Clone, PartialEq)]
pub struct HarmonicSeries {
    terms: u64,
    sum: f64,
}

impl HarmonicSeries {
    /// A series of `terms` terms whose total has not been computed yet.
    pub fn new(terms: i64) -> Result<Self> {
        if terms < 0 {
            return Err(SeriesError::invalid(format!(
                "term count must not be negative, got {terms}"
            )));
        }
        Ok(Self {
            terms: terms as u64,
            sum: 0.0,
        })
    }

    pub fn terms(&self) -> u64 {
        self.terms
    }

    /// Last computed total.
    pub fn total(&self) -> f64 {
        self.sum
    }

    /// Recompute the total on the calling thread.
    pub fn sum(&mut self) -> Result<f64> {
        self.sum = serial_sum(self.signed_terms()?)?;
        Ok(self.sum)
    }

    /// Recompute the total with `workers` threads.
    pub fn parallel_sum(&mut self, workers: usize) -> Result<f64> {
        self.sum = parallel_sum(self.signed_terms()?, workers)?;
        Ok(self.sum)
    }

    /// Append term N+1 and add it to the running total.
    pub fn add_term(&mut self) -> f64 {
        self.terms += 1;
        self.sum += 1.0 / self.terms as f64;
        self.sum
    }

    /// Drop the last term and subtract it from the running total.
    ///
    /// Older versions of this routine replaced the total with the single term
    /// 1/N instead of subtracting; this one subtracts. Reaching zero terms
    /// resets the total to exactly 0.0 so rounding residue does not linger.
    pub fn subtract_term(&mut self) -> Result<f64> {
        if self.terms == 0 {
            return Err(SeriesError::invalid("cannot remove a term from an empty series"));
        }

        let removed = 1.0 / self.terms as f64;
        self.terms -= 1;
        self.sum = if self.terms == 0 { 0.0 } else { self.sum - removed };
        Ok(self.sum)
    }

    fn signed_terms(&self) -> Result<i64> {
        i64::try_from(self.terms)
            .map_err(|_| SeriesError::invalid(format!("term count {} is out of range", self.terms)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_negative_terms() {
        assert!(matches!(HarmonicSeries::new(-1), Err(SeriesError::InvalidArgument(_))));
        let series = HarmonicSeries::new(0).unwrap();
        assert_eq!(series.terms(), 0);
        assert_eq!(series.total(), 0.0);
    }

    #[test]
    fn test_serial_and_parallel_recompute() {
        let mut series = HarmonicSeries::new(100).unwrap();
        let serial = series.sum().unwrap();
        assert_eq!(series.total(), serial);

        let parallel = series.parallel_sum(8).unwrap();
        assert_eq!(series.total(), parallel);
        assert!((serial - parallel).abs() < 1e-12);
    }

    #[test]
    fn test_add_term_extends_total() {
        let mut series = HarmonicSeries::new(0).unwrap();
        assert_eq!(series.add_term(), 1.0);
        assert_eq!(series.add_term(), 1.5);
        assert_eq!(series.terms(), 2);

        let mut reference = HarmonicSeries::new(2).unwrap();
        assert_eq!(reference.sum().unwrap(), series.total());
    }

    #[test]
    fn test_subtract_term_removes_last_term() {
        let mut series = HarmonicSeries::new(4).unwrap();
        series.sum().unwrap();

        let after = series.subtract_term().unwrap();
        assert_eq!(series.terms(), 3);
        assert!((after - (1.0 + 0.5 + 1.0 / 3.0)).abs() < 1e-15);
    }

    #[test]
    fn test_subtract_to_empty_resets_total() {
        let mut series = HarmonicSeries::new(1).unwrap();
        series.sum().unwrap();
        assert_eq!(series.subtract_term().unwrap(), 0.0);
        assert_eq!(series.terms(), 0);
        assert!(matches!(series.subtract_term(), Err(SeriesError::InvalidArgument(_))));
    }
}
