// ==============================================================================
// converter.rs - Statistic to Chi-Squared Conversion
// ==============================================================================
// Description: Converts p-values, z/t statistics and chi-squared statistics to
//              chi-squared values with one degree of freedom
// Author: Matt Barham
// Created: 2026-10-18
// Modified: 2026-10-18
// Version: 0.2.0
// ==============================================================================
// Algorithm:
//   - Two-sided p-value → p / 2 → z = Φ⁻¹(1 − p/2) → z²
//   - One-sided p-value → z = Φ⁻¹(1 − p) → z²
//   - z or t statistic  → z²   (t treated as standard normal, no df correction)
//   - Chi-squared       → unchanged
//
//   Very small p-values (e.g. 1e-300) round 1 − p to 1.0 and give z = +∞.
//   Infinite chi-squared values are kept: the median ignores a minority of them.
// ==============================================================================

use statrs::distribution::{ContinuousCDF, Normal};
use std::sync::LazyLock;

use crate::models::StatisticSemantics;

static STANDARD_NORMAL: LazyLock<Normal> = LazyLock::new(|| {
    Normal::new(0.0, 1.0).expect("standard normal parameters are always valid")
});

/// Upper-tail standard normal quantile, Φ⁻¹(1 − p)
///
/// Returns NaN when `p` is outside [0, 1]. `p = 0` gives +∞ and `p = 1` gives −∞.
pub fn upper_tail_z(p: f64) -> f64 {
    if !(0.0..=1.0).contains(&p) {
        return f64::NAN;
    }
    STANDARD_NORMAL.inverse_cdf(1.0 - p)
}

/// Quantile function of the chi-squared distribution with one degree of freedom
///
/// Uses the identity Q(q) = Φ⁻¹((1 + q) / 2)², which keeps the full precision of
/// the normal quantile.
///
/// # Examples
/// ```
/// use gwas_lambda::converter::chi_squared_1df_quantile;
///
/// let median = chi_squared_1df_quantile(0.5);
/// assert!((median - 0.4549364).abs() < 1e-7);
/// ```
pub fn chi_squared_1df_quantile(q: f64) -> f64 {
    if !(0.0..=1.0).contains(&q) {
        return f64::NAN;
    }
    STANDARD_NORMAL.inverse_cdf((1.0 + q) / 2.0).powi(2)
}

/// Convert a single raw statistic to a chi-squared (1 df) value
///
/// # Arguments
/// * `value` - Raw statistic from the summary statistics column
/// * `semantics` - Distributional meaning of `value`
///
/// # Examples
/// ```
/// use gwas_lambda::converter::statistic_to_chi_squared;
/// use gwas_lambda::models::StatisticSemantics;
///
/// assert_eq!(statistic_to_chi_squared(-2.0, StatisticSemantics::ZOrTStatistic), 4.0);
/// assert_eq!(statistic_to_chi_squared(3.5, StatisticSemantics::ChiSquaredStatistic), 3.5);
/// ```
pub fn statistic_to_chi_squared(value: f64, semantics: StatisticSemantics) -> f64 {
    match semantics {
        StatisticSemantics::PValueTwoSided => upper_tail_z(value / 2.0).powi(2),
        StatisticSemantics::PValueOneSided => upper_tail_z(value).powi(2),
        StatisticSemantics::ZOrTStatistic => value.powi(2),
        StatisticSemantics::ChiSquaredStatistic => value,
    }
}

/// Batch convert a statistic column to chi-squared values
///
/// Order is preserved and an empty input gives an empty output.
pub fn convert_to_chi_squared(values: &[f64], semantics: StatisticSemantics) -> Vec<f64> {
    values
        .iter()
        .map(|&value| statistic_to_chi_squared(value, semantics))
        .collect()
}
