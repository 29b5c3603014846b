//! Historical price source
//!
//! Row-oriented, semicolon-separated file with a `Date` column
//! (`YYYY.MM.DD HH:MM`) and a `Close` (or `Price`) column. Malformed rows
//! fail the run; rows are never silently dropped.

use chrono::NaiveDateTime;
use serde::Deserialize;
use std::io::Read;
use std::path::PathBuf;

use crate::shared::errors::SourceError;
use crate::shared::types::PriceSample;

const DATE_FORMAT: &str = "%Y.%m.%d %H:%M";

/// Seam for the historical series supplier
pub trait PriceHistorySource: Send + Sync {
    fn load(&self) -> Result<Vec<PriceSample>, SourceError>;
}

#[derive(Debug, Deserialize)]
struct HistoryRow {
    #[serde(rename = "Date")]
    date: String,
    #[serde(rename = "Close", alias = "Price")]
    close: f64,
}

/// Reads the historical series from a CSV file on disk
#[derive(Debug, Clone)]
pub struct CsvHistorySource {
    path: PathBuf,
}

impl CsvHistorySource {
    pub fn new(path: &str) -> Self {
        Self {
            path: PathBuf::from(path),
        }
    }

    fn parse<R: Read>(reader: R) -> Result<Vec<PriceSample>, SourceError> {
        let mut csv_reader = csv::ReaderBuilder::new().delimiter(b';').from_reader(reader);

        let mut samples = Vec::new();
        for (index, record) in csv_reader.deserialize::<HistoryRow>().enumerate() {
            let row_number = index + 1;
            let row = record.map_err(|e| SourceError::MalformedRow {
                row: row_number,
                reason: e.to_string(),
            })?;

            let naive = NaiveDateTime::parse_from_str(&row.date, DATE_FORMAT).map_err(|e| {
                SourceError::MalformedRow {
                    row: row_number,
                    reason: format!("bad date '{}': {}", row.date, e),
                }
            })?;

            samples.push(PriceSample {
                timestamp: naive.and_utc(),
                price: row.close,
            });
        }

        Ok(samples)
    }
}

impl PriceHistorySource for CsvHistorySource {
    fn load(&self) -> Result<Vec<PriceSample>, SourceError> {
        let file = std::fs::File::open(&self.path)
            .map_err(|e| SourceError::Unreadable(format!("{}: {}", self.path.display(), e)))?;
        Self::parse(file)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_rows() {
        let data = "Date;Close\n2008.03.14 16:00;1002.95\n2008.03.17 00:00;1010.30\n";
        let samples = CsvHistorySource::parse(data.as_bytes()).unwrap();

        assert_eq!(samples.len(), 2);
        assert_eq!(samples[0].price, 1002.95);
        assert_eq!(
            samples[0].timestamp.to_rfc3339(),
            "2008-03-14T16:00:00+00:00"
        );
    }

    #[test]
    fn test_price_header_alias() {
        let data = "Date;Price\n2008.03.14 16:00;1002.95\n";
        let samples = CsvHistorySource::parse(data.as_bytes()).unwrap();
        assert_eq!(samples.len(), 1);
        assert_eq!(samples[0].price, 1002.95);
    }

    #[test]
    fn test_malformed_date_fails_run() {
        let data = "Date;Close\n14-03-2008;1002.95\n";
        let err = CsvHistorySource::parse(data.as_bytes()).unwrap_err();
        assert!(matches!(err, SourceError::MalformedRow { row: 1, .. }));
    }

    #[test]
    fn test_non_numeric_price_fails_run() {
        let data = "Date;Close\n2008.03.14 16:00;abc\n";
        let err = CsvHistorySource::parse(data.as_bytes()).unwrap_err();
        assert!(matches!(err, SourceError::MalformedRow { row: 1, .. }));
    }

    #[test]
    fn test_missing_file_is_unreadable() {
        let source = CsvHistorySource::new("/nonexistent/XAUUSD.csv");
        assert!(matches!(source.load(), Err(SourceError::Unreadable(_))));
    }
}
