// ==============================================================================
// summary_stats.rs - GWAS Summary Statistics Parser
// ==============================================================================
// Description: Reads one statistic column (and optionally the marker column)
//              from a header-bearing GWAS results table
// Author: Matt Barham
// Created: 2026-10-18
// Modified: 2026-10-18
// Version: 0.2.0
// ==============================================================================
// Format: Delimited text with a header line; columns matched by exact name
// Example (tab-delimited):
//   snp    chr    pos    beta    se    p
//   rs548049170    1    69869    0.012    0.020    0.5484
//   rs13328684    1    74792    NA    NA    NA
// Example (Plink, whitespace-delimited):
//    CHR         SNP         BP   A1       TEST    NMISS       OR         STAT            P
//      1   rs3094315     752566    G        ADD     3810   0.9661      -0.5181       0.6044
// ==============================================================================

use csv::ReaderBuilder;
use std::io::BufRead;
use std::path::Path;
use thiserror::Error;
use tracing::debug;

use super::open_text;

/// Cell values treated as missing
const NA_VALUES: &[&str] = &[
    "", "NA", "N/A", "n/a", "NaN", "nan", "-NaN", "-nan", "#N/A", "#N/A N/A", "#NA",
    "-1.#IND", "-1.#QNAN", "1.#IND", "1.#QNAN", "<NA>", "NULL", "null", "None",
];

/// Field separator of a summary statistics table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delimiter {
    /// A single byte separator (tab, comma, ...)
    Byte(u8),
    /// Runs of whitespace, as written by Plink
    Whitespace,
}

impl Delimiter {
    /// Split a header line into column names
    pub fn split_header(&self, line: &str) -> Vec<String> {
        let line = line.trim_end_matches(['\r', '\n']);
        match self {
            Delimiter::Byte(byte) => line
                .split(char::from(*byte))
                .map(|name| name.trim_matches('"').to_string())
                .collect(),
            Delimiter::Whitespace => line.split_whitespace().map(str::to_string).collect(),
        }
    }
}

impl Default for Delimiter {
    fn default() -> Self {
        Delimiter::Byte(b'\t')
    }
}

/// Statistic values of one file with NA rows removed
#[derive(Debug, Clone, PartialEq)]
pub struct StatisticColumn {
    /// Raw statistic per retained row, in file order
    pub values: Vec<f64>,
    /// Marker identifier per retained row (only when a marker field was requested)
    pub markers: Option<Vec<String>>,
    /// Number of data rows read
    pub rows_read: usize,
    /// Number of rows dropped because a requested cell was NA
    pub na_removed: usize,
}

/// Errors that can occur during summary statistics parsing
#[derive(Error, Debug)]
pub enum SummaryStatsError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("CSV parsing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("File is empty (no header line)")]
    EmptyFile,

    #[error("No field named '{0}'")]
    MissingColumn(String),

    #[error("Invalid row at line {line}: expected {expected} fields, found {found}")]
    RaggedRow {
        line: u64,
        expected: usize,
        found: usize,
    },

    #[error("Invalid statistic value at line {line}: '{value}'")]
    InvalidValue { line: u64, value: String },

    #[error("P-value out of range [0, 1] at line {line}: {value}")]
    PValueOutOfRange { line: u64, value: f64 },
}

/// Reader for a single statistic column of a GWAS results table
#[derive(Debug, Clone)]
pub struct SummaryStatsReader {
    delimiter: Delimiter,
    stat_field: String,
    marker_field: Option<String>,
    p_values: bool,
}

impl SummaryStatsReader {
    /// Create a reader for `stat_field` using the given delimiter
    pub fn new(delimiter: Delimiter, stat_field: impl Into<String>) -> Self {
        Self {
            delimiter,
            stat_field: stat_field.into(),
            marker_field: None,
            p_values: false,
        }
    }

    /// Also read the marker identifier column (needed for marker filtering)
    pub fn with_marker_field(mut self, marker_field: impl Into<String>) -> Self {
        self.marker_field = Some(marker_field.into());
        self
    }

    /// Require statistic values to be p-values in [0, 1]
    pub fn with_p_values(mut self, p_values: bool) -> Self {
        self.p_values = p_values;
        self
    }

    /// Read the statistic column from a file (`.gz` is decompressed)
    pub fn read(&self, path: impl AsRef<Path>) -> Result<StatisticColumn, SummaryStatsError> {
        let reader = open_text(path.as_ref())?;
        self.read_from(reader)
    }

    /// Read the statistic column from any buffered source
    pub fn read_from<R: BufRead>(&self, reader: R) -> Result<StatisticColumn, SummaryStatsError> {
        match self.delimiter {
            Delimiter::Byte(byte) => self.read_delimited(reader, byte),
            Delimiter::Whitespace => self.read_whitespace(reader),
        }
    }

    fn read_delimited<R: BufRead>(
        &self,
        reader: R,
        byte: u8,
    ) -> Result<StatisticColumn, SummaryStatsError> {
        let mut csv_reader = ReaderBuilder::new()
            .delimiter(byte)
            .has_headers(true)
            .from_reader(reader);

        let headers: Vec<String> = csv_reader.headers()?.iter().map(str::to_string).collect();
        if headers.is_empty() || (headers.len() == 1 && headers[0].is_empty()) {
            return Err(SummaryStatsError::EmptyFile);
        }
        let mut builder = self.column_builder(&headers)?;

        for result in csv_reader.records() {
            let record = result?;
            let line = record.position().map(|p| p.line()).unwrap_or_default();
            let fields: Vec<&str> = record.iter().collect();
            builder.push(line, &fields)?;
        }

        Ok(builder.finish())
    }

    fn read_whitespace<R: BufRead>(&self, reader: R) -> Result<StatisticColumn, SummaryStatsError> {
        let mut lines = reader.lines();
        let mut line_number: u64 = 0;

        // Header is the first non-blank line
        let headers = loop {
            let line = lines.next().ok_or(SummaryStatsError::EmptyFile)??;
            line_number += 1;
            if !line.trim().is_empty() {
                break Delimiter::Whitespace.split_header(&line);
            }
        };
        let mut builder = self.column_builder(&headers)?;

        for line_result in lines {
            line_number += 1;
            let line = line_result?;
            if line.trim().is_empty() {
                continue;
            }
            let fields: Vec<&str> = line.split_whitespace().collect();
            builder.push(line_number, &fields)?;
        }

        Ok(builder.finish())
    }

    fn column_builder(&self, headers: &[String]) -> Result<ColumnBuilder, SummaryStatsError> {
        let stat_index = column_index(headers, &self.stat_field)?;
        let marker_index = self
            .marker_field
            .as_deref()
            .map(|name| column_index(headers, name))
            .transpose()?;

        debug!(
            "Statistic column '{}' at index {}, marker column at {:?}",
            self.stat_field, stat_index, marker_index
        );

        Ok(ColumnBuilder {
            field_count: headers.len(),
            stat_index,
            marker_index,
            p_values: self.p_values,
            values: Vec::new(),
            markers: marker_index.map(|_| Vec::new()),
            rows_read: 0,
            na_removed: 0,
        })
    }
}

/// Accumulates the requested cells row by row
struct ColumnBuilder {
    field_count: usize,
    stat_index: usize,
    marker_index: Option<usize>,
    p_values: bool,
    values: Vec<f64>,
    markers: Option<Vec<String>>,
    rows_read: usize,
    na_removed: usize,
}

impl ColumnBuilder {
    fn push(&mut self, line: u64, fields: &[&str]) -> Result<(), SummaryStatsError> {
        if fields.len() != self.field_count {
            return Err(SummaryStatsError::RaggedRow {
                line,
                expected: self.field_count,
                found: fields.len(),
            });
        }
        self.rows_read += 1;

        let stat_cell = fields[self.stat_index].trim();
        let marker_cell = self.marker_index.map(|index| fields[index].trim());

        if is_na(stat_cell) || marker_cell.is_some_and(is_na) {
            self.na_removed += 1;
            return Ok(());
        }

        let value: f64 = stat_cell.parse().map_err(|_| SummaryStatsError::InvalidValue {
            line,
            value: stat_cell.to_string(),
        })?;

        // Spellings such as "NAN" parse to NaN and count as missing
        if value.is_nan() {
            self.na_removed += 1;
            return Ok(());
        }

        if self.p_values && !(0.0..=1.0).contains(&value) {
            return Err(SummaryStatsError::PValueOutOfRange { line, value });
        }

        self.values.push(value);
        if let (Some(markers), Some(marker)) = (self.markers.as_mut(), marker_cell) {
            markers.push(marker.to_string());
        }

        Ok(())
    }

    fn finish(self) -> StatisticColumn {
        StatisticColumn {
            values: self.values,
            markers: self.markers,
            rows_read: self.rows_read,
            na_removed: self.na_removed,
        }
    }
}

fn column_index(headers: &[String], name: &str) -> Result<usize, SummaryStatsError> {
    headers
        .iter()
        .position(|header| header == name)
        .ok_or_else(|| SummaryStatsError::MissingColumn(name.to_string()))
}

fn is_na(cell: &str) -> bool {
    NA_VALUES.contains(&cell)
}
