// ==============================================================================
// parsers/mod.rs - File parser modules
// ==============================================================================
// Description: Parsers for GWAS summary statistics and marker lists
// Author: Matt Barham
// Created: 2026-10-18
// Modified: 2026-10-18
// Version: 0.2.0
// ==============================================================================

pub mod summary_stats;
pub mod marker_list;

pub use summary_stats::{Delimiter, StatisticColumn, SummaryStatsError, SummaryStatsReader};
pub use marker_list::{MarkerList, MarkerListError};

use flate2::read::MultiGzDecoder;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// Open a text file for buffered reading, decompressing `.gz` files on the fly
///
/// `MultiGzDecoder` also reads BGZF, which is a series of gzip members.
pub fn open_text(path: &Path) -> io::Result<Box<dyn BufRead>> {
    let file = File::open(path)?;
    let is_gzip = path
        .extension()
        .map(|ext| ext.eq_ignore_ascii_case("gz"))
        .unwrap_or(false);

    if is_gzip {
        Ok(Box::new(BufReader::new(MultiGzDecoder::new(file))))
    } else {
        Ok(Box::new(BufReader::new(file)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use flate2::write::GzEncoder;
    use flate2::Compression;
    use std::io::{Read, Write};

    #[test]
    fn test_open_plain_text() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "snp\tp\nrs1\t0.5\n").unwrap();
        file.flush().unwrap();

        let mut contents = String::new();
        open_text(file.path()).unwrap().read_to_string(&mut contents).unwrap();
        assert_eq!(contents, "snp\tp\nrs1\t0.5\n");
    }

    #[test]
    fn test_open_gzip() {
        let file = tempfile::Builder::new().suffix(".tsv.gz").tempfile().unwrap();
        let mut encoder = GzEncoder::new(file.reopen().unwrap(), Compression::default());
        encoder.write_all(b"snp\tp\nrs1\t0.5\n").unwrap();
        encoder.finish().unwrap();

        let mut contents = String::new();
        open_text(file.path()).unwrap().read_to_string(&mut contents).unwrap();
        assert_eq!(contents, "snp\tp\nrs1\t0.5\n");
    }

    #[test]
    fn test_open_missing_file() {
        assert!(open_text(Path::new("/nonexistent/results.assoc")).is_err());
    }
}
