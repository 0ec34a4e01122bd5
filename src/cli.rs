// ==============================================================================
// cli.rs - Command Line Interface
// ==============================================================================
// Description: Command line arguments of the lambda tool
// Author: Matt Barham
// Created: 2026-10-18
// Modified: 2026-10-18
// Version: 0.2.0
// ==============================================================================

use clap::{ArgAction, Parser};
use std::path::PathBuf;

use crate::output::OutputFormat;

#[derive(Parser, Debug)]
#[command(
    name = "lambda",
    author,
    version,
    about = "Compute inflation factor (lambda) in GWAS results.",
    long_about = None,
    disable_version_flag = true
)]
pub struct Args {
    /// Print version
    #[arg(short = 'v', long, action = ArgAction::Version)]
    pub version: Option<bool>,

    /// The list of files containing GWAS results
    #[arg(
        short = 'i',
        long = "input",
        required = true,
        num_args = 1..,
        value_name = "FILE",
        help_heading = "INPUT FILES"
    )]
    pub inputs: Vec<PathBuf>,

    /// The field delimiter (default is a tabulation)
    #[arg(
        short = 'd',
        long,
        default_value = "\t",
        hide_default_value = true,
        value_name = "DELIM",
        help_heading = "INPUT FILES"
    )]
    pub delim: String,

    /// The file is delimited by white spaces (e.g. Plink results)
    #[arg(short = 'w', long, help_heading = "INPUT FILES")]
    pub whitespace: bool,

    /// The name of the field containing the statistics
    #[arg(short = 'f', long, value_name = "NAME", help_heading = "INPUT FILES")]
    pub field: String,

    /// The name of the field containing the SNP name
    #[arg(long, default_value = "snp", value_name = "NAME", help_heading = "INPUT FILES")]
    pub snp_field: String,

    /// Statistics were computed using a chi-squared distribution
    #[arg(long, help_heading = "GENERAL OPTIONS")]
    pub chi2: bool,

    /// Use p-values instead of the statistic (assumes a standard normal test
    /// statistic; skip this option for z scores)
    #[arg(short = 'p', long, help_heading = "GENERAL OPTIONS")]
    pub p_value: bool,

    /// P-values come from one-sided tests
    #[arg(long, help_heading = "GENERAL OPTIONS")]
    pub one_sided: bool,

    /// Report format written to standard output
    #[arg(long, value_enum, default_value_t = OutputFormat::Text, help_heading = "GENERAL OPTIONS")]
    pub format: OutputFormat,

    /// A file containing markers to extract for the analysis (one marker per line)
    #[arg(short = 'e', long, value_name = "FILE", help_heading = "SUBSET OPTIONS")]
    pub extract: Option<PathBuf>,

    /// Compute lambda1000 with ncase and ncontrol
    #[arg(
        short = 'n',
        long,
        num_args = 2,
        value_names = ["NCASE", "NCONTROL"],
        allow_negative_numbers = true,
        help_heading = "SUBSET OPTIONS"
    )]
    pub normalized: Option<Vec<i64>>,
}
