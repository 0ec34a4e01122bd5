// ==============================================================================
// inflation.rs - Genomic Control Inflation Factor
// ==============================================================================
// Description: Median-based inflation factor (lambda) and its case/control
//              normalized form (lambda1000)
// Author: Matt Barham
// Created: 2026-10-18
// Modified: 2026-10-18
// Version: 0.2.0
// ==============================================================================
// Algorithm:
//   lambda     = max(median(chisq) / median(chi-squared, 1 df), 1.0)
//   lambda1000 = 1 + (lambda − 1) × (1/ncase + 1/ncontrol) × 500
// ==============================================================================

use std::sync::LazyLock;
use thiserror::Error;

use crate::converter::chi_squared_1df_quantile;
use crate::models::CaseControl;

/// Median of the chi-squared distribution with one degree of freedom (≈0.4549364)
pub static EXPECTED_MEDIAN: LazyLock<f64> = LazyLock::new(|| chi_squared_1df_quantile(0.5));

/// Errors that can occur while estimating the inflation factor
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InflationError {
    #[error("Cannot compute the median of an empty statistic sample")]
    EmptySample,

    #[error("Statistic at position {index} is NaN")]
    NaNStatistic { index: usize },
}

/// Median with the mean of the two central order statistics for even lengths
///
/// Infinite values are ordered normally, so a minority of +∞ entries only
/// shifts the median by one rank.
pub fn median(values: &[f64]) -> Result<f64, InflationError> {
    if values.is_empty() {
        return Err(InflationError::EmptySample);
    }
    if let Some(index) = values.iter().position(|v| v.is_nan()) {
        return Err(InflationError::NaNStatistic { index });
    }

    let mut sorted = values.to_vec();
    sorted.sort_unstable_by(f64::total_cmp);

    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        Ok((sorted[mid - 1] + sorted[mid]) / 2.0)
    } else {
        Ok(sorted[mid])
    }
}

/// Estimate the genomic inflation factor from chi-squared (1 df) values
///
/// The result is clamped to a floor of 1.0: deflation is never reported.
///
/// # Examples
/// ```
/// use gwas_lambda::inflation::estimate_lambda;
///
/// let lambda = estimate_lambda(&[0.1, 0.2, 0.3, 0.4549364, 10.0]).unwrap();
/// assert_eq!(lambda, 1.0);
///
/// assert!(estimate_lambda(&[]).is_err());
/// ```
pub fn estimate_lambda(chisq: &[f64]) -> Result<f64, InflationError> {
    let observed = median(chisq)?;
    Ok((observed / *EXPECTED_MEDIAN).max(1.0))
}

/// Rescale lambda to a study of 1000 cases and 1000 controls
///
/// # Examples
/// ```
/// use gwas_lambda::inflation::normalize_lambda;
/// use gwas_lambda::models::CaseControl;
///
/// let counts = CaseControl::new(500, 500).unwrap();
/// assert!((normalize_lambda(1.2, &counts) - 1.4).abs() < 1e-12);
/// ```
pub fn normalize_lambda(lambda: f64, counts: &CaseControl) -> f64 {
    let scale = 1.0 / f64::from(counts.cases()) + 1.0 / f64::from(counts.controls());
    1.0 + (lambda - 1.0) * scale * 500.0
}
