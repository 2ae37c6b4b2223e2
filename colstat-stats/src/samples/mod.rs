// colstat-stats/src/samples/mod.rs
use alloc::vec::Vec;

/// Returns the samples with every NaN removed, preserving order.
///
/// Infinities are kept: only "not a number" is treated as invalid.
pub fn valid_samples(samples: &[f64]) -> Vec<f64> {
    samples.iter().copied().filter(|value| !value.is_nan()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    extern crate alloc;
    use alloc::vec;

    #[test]
    fn test_valid_samples_drops_nan_only() {
        let samples = vec![1.0, f64::NAN, 0.0, f64::INFINITY, f64::NAN];
        let valid = valid_samples(&samples);
        assert_eq!(valid, vec![1.0, 0.0, f64::INFINITY]);
        assert!(valid.len() <= samples.len());
    }

    #[test]
    fn test_valid_samples_empty() {
        assert!(valid_samples(&[]).is_empty());
    }
}
