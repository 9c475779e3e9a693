//! Sample statistics over auxiliary scores via `statrs`.
//!
//! `statrs` reports empty or undersized samples as NaN; these wrappers turn
//! that into `None`.

use statrs::statistics::{Data, Median, Statistics};

fn finite(value: f64) -> Option<f64> {
    value.is_finite().then_some(value)
}

/// Median of `values`. Even counts average the middle pair.
pub fn median(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    finite(Data::new(values.to_vec()).median())
}

/// Unscaled median absolute deviation around the median.
pub fn median_abs_deviation(values: &[f64]) -> Option<f64> {
    let center = median(values)?;
    let deviations: Vec<f64> = values.iter().map(|v| (v - center).abs()).collect();
    median(&deviations)
}

pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    finite(values.iter().mean())
}

/// Sample standard deviation (n - 1 denominator); `None` below two samples.
pub fn sample_std(values: &[f64]) -> Option<f64> {
    if values.len() < 2 {
        return None;
    }
    finite(values.iter().std_dev())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn median_odd_and_even() {
        assert_eq!(median(&[3.0, 1.0, 2.0]), Some(2.0));
        assert_eq!(median(&[4.0, 1.0, 3.0, 2.0]), Some(2.5));
        assert_eq!(median(&[]), None);
    }

    #[test]
    fn mad_is_unscaled() {
        // deviations from 3: 2, 1, 0, 1, 7 -> median 1
        assert_eq!(median_abs_deviation(&[1.0, 2.0, 3.0, 4.0, 10.0]), Some(1.0));
    }

    #[test]
    fn sample_std_uses_bessel_correction() {
        let std = sample_std(&[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]).unwrap();
        assert!((std - (32.0f64 / 7.0).sqrt()).abs() < 1e-12);
        assert_eq!(sample_std(&[1.0]), None);
    }
}
