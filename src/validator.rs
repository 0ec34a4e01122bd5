// ==============================================================================
// validator.rs - Input File Validation
// ==============================================================================
// Description: Validates GWAS result files and marker lists before processing
//              (existence, readable header, required fields)
// Author: Matt Barham
// Created: 2026-10-18
// Modified: 2026-10-18
// Version: 0.2.0
// ==============================================================================

use std::io::BufRead;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

use crate::parsers::{open_text, Delimiter};

/// Errors found while validating input files
#[derive(Error, Debug)]
pub enum InputValidationError {
    #[error("{}: no such file", .0.display())]
    MissingFile(PathBuf),

    #[error("{}: no field named '{field}'", .path.display())]
    MissingField { path: PathBuf, field: String },

    #[error("{}: file is empty (no header line)", .0.display())]
    EmptyFile(PathBuf),

    #[error("{}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Header and existence checks for summary statistics files
#[derive(Debug, Clone)]
pub struct InputValidator {
    delimiter: Delimiter,
    required_fields: Vec<String>,
}

impl InputValidator {
    /// Create a validator requiring each of `required_fields` in the header
    pub fn new(delimiter: Delimiter, required_fields: Vec<String>) -> Self {
        Self {
            delimiter,
            required_fields,
        }
    }

    /// Validate one results file: it exists and its header has every required field
    pub fn validate_input(&self, path: &Path) -> Result<(), InputValidationError> {
        info!("Validating file: {}", path.display());

        if !path.is_file() {
            return Err(InputValidationError::MissingFile(path.to_path_buf()));
        }

        let header = self.read_header(path)?;
        debug!("Header of {}: {:?}", path.display(), header);

        for field in &self.required_fields {
            if !header.iter().any(|name| name == field) {
                return Err(InputValidationError::MissingField {
                    path: path.to_path_buf(),
                    field: field.clone(),
                });
            }
        }

        Ok(())
    }

    /// Validate every results file, stopping at the first failure
    pub fn validate_all<P: AsRef<Path>>(&self, paths: &[P]) -> Result<(), InputValidationError> {
        paths
            .iter()
            .try_for_each(|path| self.validate_input(path.as_ref()))
    }

    fn read_header(&self, path: &Path) -> Result<Vec<String>, InputValidationError> {
        let io_error = |source| InputValidationError::Io {
            path: path.to_path_buf(),
            source,
        };

        let reader = open_text(path).map_err(io_error)?;
        for line in reader.lines() {
            let line = line.map_err(io_error)?;
            // Plink output may pad the file with blank lines before the header
            if self.delimiter == Delimiter::Whitespace && line.trim().is_empty() {
                continue;
            }
            return Ok(self.delimiter.split_header(&line));
        }

        Err(InputValidationError::EmptyFile(path.to_path_buf()))
    }
}

/// Validate that the marker extraction list exists
pub fn validate_marker_list(path: &Path) -> Result<(), InputValidationError> {
    if !path.is_file() {
        return Err(InputValidationError::MissingFile(path.to_path_buf()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn create_test_file(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_valid_tab_header() {
        let file = create_test_file("snp\tbeta\tp\nrs1\t0.1\t0.5\n");
        let validator = InputValidator::new(Delimiter::default(), vec!["p".into(), "snp".into()]);
        assert!(validator.validate_input(file.path()).is_ok());
    }

    #[test]
    fn test_missing_field() {
        let file = create_test_file("snp\tbeta\tp\n");
        let validator = InputValidator::new(Delimiter::default(), vec!["P".into()]);

        let err = validator.validate_input(file.path()).unwrap_err();
        assert!(matches!(
            &err,
            InputValidationError::MissingField { field, .. } if field == "P"
        ));
        assert!(err.to_string().ends_with("no field named 'P'"));
    }

    #[test]
    fn test_missing_file() {
        let validator = InputValidator::new(Delimiter::default(), vec!["p".into()]);
        let err = validator
            .validate_input(Path::new("/nonexistent/gwas.assoc"))
            .unwrap_err();
        assert!(matches!(err, InputValidationError::MissingFile(_)));
        assert_eq!(err.to_string(), "/nonexistent/gwas.assoc: no such file");
    }

    #[test]
    fn test_empty_file() {
        let file = create_test_file("");
        let validator = InputValidator::new(Delimiter::default(), vec!["p".into()]);
        assert!(matches!(
            validator.validate_input(file.path()),
            Err(InputValidationError::EmptyFile(_))
        ));
    }

    #[test]
    fn test_whitespace_header() {
        let file = create_test_file("\n CHR  SNP   BP   P\n 1 rs1 100 0.5\n");
        let validator = InputValidator::new(Delimiter::Whitespace, vec!["SNP".into(), "P".into()]);
        assert!(validator.validate_input(file.path()).is_ok());
    }

    #[test]
    fn test_header_uses_configured_delimiter() {
        // A comma-separated header is a single field when split on tabs
        let file = create_test_file("snp,p\nrs1,0.5\n");

        let tab = InputValidator::new(Delimiter::default(), vec!["p".into()]);
        assert!(tab.validate_input(file.path()).is_err());

        let comma = InputValidator::new(Delimiter::Byte(b','), vec!["p".into()]);
        assert!(comma.validate_input(file.path()).is_ok());
    }

    #[test]
    fn test_validate_all_stops_at_first_failure() {
        let good = create_test_file("snp\tp\n");
        let bad = create_test_file("snp\tbeta\n");
        let validator = InputValidator::new(Delimiter::default(), vec!["p".into()]);

        assert!(validator.validate_all(&[good.path()]).is_ok());

        let err = validator.validate_all(&[good.path(), bad.path()]).unwrap_err();
        assert!(matches!(
            err,
            InputValidationError::MissingField { path, .. } if path == bad.path()
        ));
    }

    #[test]
    fn test_validate_marker_list() {
        let file = create_test_file("rs1\n");
        assert!(validate_marker_list(file.path()).is_ok());
        assert!(matches!(
            validate_marker_list(Path::new("/nonexistent/extract.txt")),
            Err(InputValidationError::MissingFile(_))
        ));
    }
}
