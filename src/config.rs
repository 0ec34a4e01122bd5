// ==============================================================================
// config.rs - Run Configuration
// ==============================================================================
// Description: Resolves command line flags into one consistent run
//              configuration before any file is processed
// Author: Matt Barham
// Created: 2026-10-18
// Modified: 2026-10-18
// Version: 0.2.0
// ==============================================================================

use std::path::PathBuf;
use thiserror::Error;

use crate::cli::Args;
use crate::models::{CaseControl, StatisticSemantics};
use crate::output::OutputFormat;
use crate::parsers::{Delimiter, SummaryStatsReader};

/// Invalid option combinations, reported before touching any file
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error(
        "Can't use the --p-value option when the statistics follow a chi-square \
         distribution (not implemented)."
    )]
    Chi2WithPValue,

    #[error("The --one-sided option is only valid if the tool is used on p-values.")]
    OneSidedWithoutPValue,

    #[error("the case/control number can't be <= 0 (got {cases} cases, {controls} controls)")]
    NonPositiveSampleSize { cases: i64, controls: i64 },

    #[error("--normalized expects two values (ncase ncontrol), got {0}")]
    SampleSizeArity(usize),

    #[error("Invalid delimiter {0:?}: expected a single character")]
    InvalidDelimiter(String),
}

/// Everything one run needs, validated
#[derive(Debug, Clone, PartialEq)]
pub struct RunConfig {
    pub inputs: Vec<PathBuf>,
    pub delimiter: Delimiter,
    pub stat_field: String,
    pub marker_field: String,
    pub semantics: StatisticSemantics,
    pub extract: Option<PathBuf>,
    pub normalization: Option<CaseControl>,
    pub format: OutputFormat,
}

impl RunConfig {
    /// Validate and resolve parsed command line arguments
    pub fn from_args(args: Args) -> Result<Self, ConfigError> {
        let semantics = resolve_semantics(args.chi2, args.p_value, args.one_sided)?;
        let delimiter = parse_delimiter(&args.delim, args.whitespace)?;
        let normalization = args
            .normalized
            .as_deref()
            .map(parse_case_control)
            .transpose()?;

        Ok(Self {
            inputs: args.inputs,
            delimiter,
            stat_field: args.field,
            marker_field: args.snp_field,
            semantics,
            extract: args.extract,
            normalization,
            format: args.format,
        })
    }

    /// Header fields every input file must carry
    pub fn required_fields(&self) -> Vec<String> {
        let mut fields = vec![self.stat_field.clone()];
        if self.extract.is_some() {
            fields.push(self.marker_field.clone());
        }
        fields
    }

    /// Reader matching this configuration
    pub fn reader(&self) -> SummaryStatsReader {
        let reader = SummaryStatsReader::new(self.delimiter, self.stat_field.as_str())
            .with_p_values(self.semantics.is_p_value());
        if self.extract.is_some() {
            reader.with_marker_field(self.marker_field.as_str())
        } else {
            reader
        }
    }
}

/// Resolve the statistic flags into exactly one semantics tag
///
/// | `--chi2` | `-p` | `--one-sided` | result |
/// |---|---|---|---|
/// | no | no | no | z or t statistic |
/// | yes | no | no | chi-squared statistic |
/// | no | yes | no | two-sided p-value |
/// | no | yes | yes | one-sided p-value |
/// | yes | yes | any | error |
/// | any | no | yes | error |
pub fn resolve_semantics(
    chi2: bool,
    p_value: bool,
    one_sided: bool,
) -> Result<StatisticSemantics, ConfigError> {
    if one_sided && !p_value {
        return Err(ConfigError::OneSidedWithoutPValue);
    }
    if chi2 && p_value {
        return Err(ConfigError::Chi2WithPValue);
    }

    Ok(match (chi2, p_value, one_sided) {
        (true, _, _) => StatisticSemantics::ChiSquaredStatistic,
        (false, true, true) => StatisticSemantics::PValueOneSided,
        (false, true, false) => StatisticSemantics::PValueTwoSided,
        (false, false, _) => StatisticSemantics::ZOrTStatistic,
    })
}

/// Parse the `-d` value; whitespace splitting wins when `-w` is given
pub fn parse_delimiter(delim: &str, whitespace: bool) -> Result<Delimiter, ConfigError> {
    if whitespace {
        return Ok(Delimiter::Whitespace);
    }
    match delim.as_bytes() {
        [byte] => Ok(Delimiter::Byte(*byte)),
        b"\\t" => Ok(Delimiter::Byte(b'\t')),
        _ => Err(ConfigError::InvalidDelimiter(delim.to_string())),
    }
}

fn parse_case_control(values: &[i64]) -> Result<CaseControl, ConfigError> {
    match *values {
        [cases, controls] => CaseControl::new(cases, controls)
            .ok_or(ConfigError::NonPositiveSampleSize { cases, controls }),
        _ => Err(ConfigError::SampleSizeArity(values.len())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn config_from(argv: &[&str]) -> Result<RunConfig, ConfigError> {
        let mut full = vec!["lambda"];
        full.extend_from_slice(argv);
        RunConfig::from_args(Args::try_parse_from(full).unwrap())
    }

    #[test]
    fn test_resolve_semantics() {
        assert_eq!(
            resolve_semantics(false, false, false).unwrap(),
            StatisticSemantics::ZOrTStatistic
        );
        assert_eq!(
            resolve_semantics(true, false, false).unwrap(),
            StatisticSemantics::ChiSquaredStatistic
        );
        assert_eq!(
            resolve_semantics(false, true, false).unwrap(),
            StatisticSemantics::PValueTwoSided
        );
        assert_eq!(
            resolve_semantics(false, true, true).unwrap(),
            StatisticSemantics::PValueOneSided
        );
    }

    #[test]
    fn test_invalid_semantics() {
        assert_eq!(
            resolve_semantics(true, true, false),
            Err(ConfigError::Chi2WithPValue)
        );
        assert_eq!(
            resolve_semantics(false, false, true),
            Err(ConfigError::OneSidedWithoutPValue)
        );
        assert_eq!(
            resolve_semantics(true, false, true),
            Err(ConfigError::OneSidedWithoutPValue)
        );
    }

    #[test]
    fn test_parse_delimiter() {
        assert_eq!(parse_delimiter("\t", false).unwrap(), Delimiter::Byte(b'\t'));
        assert_eq!(parse_delimiter(",", false).unwrap(), Delimiter::Byte(b','));
        assert_eq!(parse_delimiter("\\t", false).unwrap(), Delimiter::Byte(b'\t'));
        assert_eq!(parse_delimiter(",", true).unwrap(), Delimiter::Whitespace);
        assert!(matches!(
            parse_delimiter("::", false),
            Err(ConfigError::InvalidDelimiter(_))
        ));
        assert!(parse_delimiter("", false).is_err());
        assert!(parse_delimiter("é", false).is_err());
    }

    #[test]
    fn test_parse_case_control() {
        let counts = parse_case_control(&[2000, 3000]).unwrap();
        assert_eq!((counts.cases(), counts.controls()), (2000, 3000));

        assert_eq!(
            parse_case_control(&[0, 3000]),
            Err(ConfigError::NonPositiveSampleSize { cases: 0, controls: 3000 })
        );
        assert_eq!(parse_case_control(&[1]), Err(ConfigError::SampleSizeArity(1)));
    }

    #[test]
    fn test_from_args() {
        let config = config_from(&["-i", "a.assoc", "-f", "P", "-p", "-n", "100", "200"]).unwrap();

        assert_eq!(config.inputs, vec![PathBuf::from("a.assoc")]);
        assert_eq!(config.semantics, StatisticSemantics::PValueTwoSided);
        assert_eq!(config.delimiter, Delimiter::Byte(b'\t'));
        assert_eq!(config.normalization, CaseControl::new(100, 200));
        assert_eq!(config.required_fields(), vec!["P".to_string()]);
    }

    #[test]
    fn test_from_args_with_extract() {
        let config = config_from(&["-i", "a", "-f", "STAT", "-e", "keep.txt", "--snp-field", "SNP"])
            .unwrap();
        assert_eq!(
            config.required_fields(),
            vec!["STAT".to_string(), "SNP".to_string()]
        );
    }

    #[test]
    fn test_from_args_errors() {
        assert_eq!(
            config_from(&["-i", "a", "-f", "P", "--chi2", "-p"]),
            Err(ConfigError::Chi2WithPValue)
        );
        assert_eq!(
            config_from(&["-i", "a", "-f", "P", "--one-sided"]),
            Err(ConfigError::OneSidedWithoutPValue)
        );
        assert_eq!(
            config_from(&["-i", "a", "-f", "P", "-n", "-1", "100"]),
            Err(ConfigError::NonPositiveSampleSize { cases: -1, controls: 100 })
        );
    }
}
