// ==============================================================================
// models.rs - Statistic Semantics and Study Design Models
// ==============================================================================
// Description: Data structures describing GWAS statistics and sample sizes
// Author: Matt Barham
// Created: 2026-10-18
// Modified: 2026-10-18
// Version: 0.2.0
// ==============================================================================

use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroU32;

/// Distributional meaning of the raw statistic column
///
/// Exactly one variant is resolved per run, so invalid flag combinations
/// (e.g. chi-squared statistics given as p-values) never reach the converter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatisticSemantics {
    /// One-sided p-values, mapped directly to the upper-tail normal quantile
    PValueOneSided,
    /// Two-sided p-values, halved before the quantile mapping
    PValueTwoSided,
    /// z or t statistics, squared (t treated as approximately normal)
    ZOrTStatistic,
    /// Chi-squared statistics with one degree of freedom, used as-is
    ChiSquaredStatistic,
}

impl StatisticSemantics {
    pub fn as_str(&self) -> &'static str {
        match self {
            StatisticSemantics::PValueOneSided => "p_value_one_sided",
            StatisticSemantics::PValueTwoSided => "p_value_two_sided",
            StatisticSemantics::ZOrTStatistic => "z_or_t_statistic",
            StatisticSemantics::ChiSquaredStatistic => "chi_squared_statistic",
        }
    }

    /// Whether the raw values are p-values (and must lie in [0, 1])
    pub fn is_p_value(&self) -> bool {
        matches!(
            self,
            StatisticSemantics::PValueOneSided | StatisticSemantics::PValueTwoSided
        )
    }
}

impl fmt::Display for StatisticSemantics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Case and control sample sizes used for lambda1000
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaseControl {
    cases: NonZeroU32,
    controls: NonZeroU32,
}

impl CaseControl {
    /// Build from raw counts, returning `None` unless both are positive
    pub fn new(cases: i64, controls: i64) -> Option<Self> {
        let cases = u32::try_from(cases).ok().and_then(NonZeroU32::new)?;
        let controls = u32::try_from(controls).ok().and_then(NonZeroU32::new)?;
        Some(Self { cases, controls })
    }

    pub fn cases(&self) -> u32 {
        self.cases.get()
    }

    pub fn controls(&self) -> u32 {
        self.controls.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_semantics_str() {
        assert_eq!(StatisticSemantics::PValueOneSided.as_str(), "p_value_one_sided");
        assert_eq!(StatisticSemantics::PValueTwoSided.as_str(), "p_value_two_sided");
        assert_eq!(StatisticSemantics::ZOrTStatistic.as_str(), "z_or_t_statistic");
        assert_eq!(
            StatisticSemantics::ChiSquaredStatistic.to_string(),
            "chi_squared_statistic"
        );
    }

    #[test]
    fn test_is_p_value() {
        assert!(StatisticSemantics::PValueOneSided.is_p_value());
        assert!(StatisticSemantics::PValueTwoSided.is_p_value());
        assert!(!StatisticSemantics::ZOrTStatistic.is_p_value());
        assert!(!StatisticSemantics::ChiSquaredStatistic.is_p_value());
    }

    #[test]
    fn test_semantics_serde() {
        let json = serde_json::to_string(&StatisticSemantics::PValueTwoSided).unwrap();
        assert_eq!(json, "\"p_value_two_sided\"");

        let parsed: StatisticSemantics = serde_json::from_str("\"z_or_t_statistic\"").unwrap();
        assert_eq!(parsed, StatisticSemantics::ZOrTStatistic);
    }

    #[test]
    fn test_case_control_positive() {
        let counts = CaseControl::new(500, 1200).unwrap();
        assert_eq!(counts.cases(), 500);
        assert_eq!(counts.controls(), 1200);
    }

    #[test]
    fn test_case_control_rejects_non_positive() {
        assert!(CaseControl::new(0, 100).is_none());
        assert!(CaseControl::new(100, 0).is_none());
        assert!(CaseControl::new(-5, 100).is_none());
        assert!(CaseControl::new(100, -1).is_none());
        // Larger than u32 is not a plausible sample size
        assert!(CaseControl::new(i64::MAX, 100).is_none());
    }
}
