// ==============================================================================
// marker_list.rs - Marker Extraction List
// ==============================================================================
// Description: Allow-list of marker identifiers restricting the analysis
// Author: Matt Barham
// Created: 2026-10-18
// Modified: 2026-10-18
// Version: 0.2.0
// ==============================================================================
// Format: One marker identifier per line
// Example:
//   rs3094315
//   rs12562034
// ==============================================================================

use std::collections::HashSet;
use std::io::BufRead;
use std::path::Path;
use thiserror::Error;

use super::open_text;

/// Errors that can occur while reading a marker list
#[derive(Error, Debug)]
pub enum MarkerListError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Set of marker identifiers to keep
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MarkerList {
    markers: HashSet<String>,
}

impl MarkerList {
    /// Read a newline-delimited marker list (`.gz` is decompressed)
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, MarkerListError> {
        let reader = open_text(path.as_ref())?;
        Self::from_reader(reader)
    }

    /// Read markers from any buffered source, ignoring blank lines
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self, MarkerListError> {
        let mut markers = HashSet::new();
        for line in reader.lines() {
            let line = line?;
            let marker = line.trim();
            if !marker.is_empty() {
                markers.insert(marker.to_string());
            }
        }
        Ok(Self { markers })
    }

    pub fn len(&self) -> usize {
        self.markers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }

    pub fn contains(&self, marker: &str) -> bool {
        self.markers.contains(marker)
    }

    /// Keep the values whose marker is listed, preserving order
    ///
    /// `values` and `markers` are parallel columns of the same rows.
    pub fn filter(&self, values: &[f64], markers: &[String]) -> Vec<f64> {
        values
            .iter()
            .zip(markers)
            .filter(|(_, marker)| self.contains(marker))
            .map(|(&value, _)| value)
            .collect()
    }
}

impl<S: Into<String>> FromIterator<S> for MarkerList {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            markers: iter.into_iter().map(Into::into).collect(),
        }
    }
}
