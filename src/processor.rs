// ==============================================================================
// processor.rs - Inflation Factor Processing Pipeline
// ==============================================================================
// Description: Per-file pipeline: read statistics → filter markers → convert
//              to chi-squared → estimate lambda → normalize (lambda1000)
// Author: Matt Barham
// Created: 2026-10-18
// Modified: 2026-10-18
// Version: 0.2.0
// ==============================================================================

use anyhow::{Context, Result};
use std::path::Path;
use tracing::{debug, info};

use crate::config::RunConfig;
use crate::converter::convert_to_chi_squared;
use crate::inflation::{estimate_lambda, normalize_lambda};
use crate::models::StatisticSemantics;
use crate::output::InflationReport;
use crate::parsers::{MarkerList, SummaryStatsReader};
use crate::validator::{validate_marker_list, InputValidator};

pub struct LambdaProcessor {
    config: RunConfig,
    reader: SummaryStatsReader,
    markers: Option<MarkerList>,
}

impl LambdaProcessor {
    /// Validate every input and load the marker list
    ///
    /// All input files are checked before any of them is processed, so a bad
    /// file name or missing column fails the run up front.
    pub fn new(config: RunConfig) -> Result<Self> {
        let validator = InputValidator::new(config.delimiter, config.required_fields());
        validator.validate_all(&config.inputs)?;

        let markers = match &config.extract {
            Some(path) => {
                validate_marker_list(path)?;
                let markers = MarkerList::from_path(path)
                    .with_context(|| format!("Failed to read marker list {}", path.display()))?;
                info!("{} markers to extract from {}", markers.len(), path.display());
                Some(markers)
            }
            None => None,
        };

        let reader = config.reader();

        Ok(Self {
            config,
            reader,
            markers,
        })
    }

    /// Process every input file in order, handing each report to `on_report`
    pub fn process_all<F>(&self, mut on_report: F) -> Result<()>
    where
        F: FnMut(&InflationReport) -> Result<()>,
    {
        for path in &self.config.inputs {
            let report = self.process_file(path)?;
            on_report(&report)?;
        }
        Ok(())
    }

    /// Run the pipeline on one summary statistics file
    pub fn process_file(&self, path: &Path) -> Result<InflationReport> {
        info!("Reading '{}'", path.display());

        let column = self
            .reader
            .read(path)
            .with_context(|| format!("{}: failed to read field '{}'", path.display(), self.config.stat_field))?;
        info!("  - {} NA values removed", column.na_removed);

        let (stats, markers_extracted) = match (&self.markers, &column.markers) {
            (Some(list), Some(markers)) => {
                let kept = list.filter(&column.values, markers);
                info!("  - {} markers extracted", kept.len());
                let count = kept.len();
                (kept, Some(count))
            }
            _ => (column.values, None),
        };

        log_conversion(self.config.semantics);
        let chisq = convert_to_chi_squared(&stats, self.config.semantics);

        info!("  - computing inflation factor");
        let lambda = estimate_lambda(&chisq)
            .with_context(|| format!("{}: cannot compute inflation factor", path.display()))?;
        info!("  - lambda = {:.6}", lambda);

        let lambda_1000 = self.config.normalization.map(|counts| {
            let lambda_1000 = normalize_lambda(lambda, &counts);
            debug!(
                "Normalizing with {} cases and {} controls",
                counts.cases(),
                counts.controls()
            );
            info!("  - lambda1000 = {:.6}", lambda_1000);
            lambda_1000
        });

        Ok(InflationReport {
            file: path.to_path_buf(),
            na_removed: column.na_removed,
            markers_extracted,
            markers_used: chisq.len(),
            semantics: self.config.semantics,
            lambda,
            lambda_1000,
        })
    }
}

fn log_conversion(semantics: StatisticSemantics) {
    match semantics {
        StatisticSemantics::PValueTwoSided => {
            info!("  - computing two-sided statistics from p-values")
        }
        StatisticSemantics::PValueOneSided => {
            info!("  - computing one-sided statistics from p-values")
        }
        StatisticSemantics::ZOrTStatistic => {
            info!("  - using z/t statistics and converting to chisq by chisq = z**2")
        }
        StatisticSemantics::ChiSquaredStatistic => info!("  - using chi-squared statistics"),
    }
}
