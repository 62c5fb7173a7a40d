use crate::data::dates::{self, parse_date};
use crate::error::{DashboardError, Result};
use crate::types::DateRange;
use chrono::NaiveDate;
use polars::prelude::*;
use std::path::Path;
use super::types::DatasetMetadata;

pub struct CsvConnector;

impl CsvConnector {
    /// Load CSV file into DataFrame
    pub fn load<P: AsRef<Path>>(path: P) -> Result<DataFrame> {
        let path = path.as_ref();
        let df = CsvReadOptions::default()
            .with_has_header(true)
            .with_infer_schema_length(Some(10_000))
            .try_into_reader_with_file_path(Some(path.to_path_buf()))?
            .finish()
            .map_err(|e| DashboardError::InvalidData {
                file: Self::display_name(path),
                reason: format!("Failed to read CSV: {}", e),
            })?;

        log::debug!("Read {} rows x {} columns from {}", df.height(), df.width(), path.display());
        Ok(df)
    }

    /// Load a CSV file and convert `date_column` into a polars `Date` column.
    pub fn load_dated<P: AsRef<Path>>(path: P, date_column: &str) -> Result<DataFrame> {
        let path = path.as_ref();
        let mut df = Self::load(path)?;
        Self::parse_date_column(&mut df, date_column, &Self::display_name(path))?;
        Ok(df)
    }

    /// Replace `name` with a `Date` column. Every row must hold a parseable date.
    pub fn parse_date_column(df: &mut DataFrame, name: &str, file: &str) -> Result<()> {
        let column = df.column(name).map_err(|_| DashboardError::InvalidData {
            file: file.to_string(),
            reason: format!("missing '{}' column", name),
        })?;

        let parsed = match column.dtype() {
            DataType::Date => return Self::reject_nulls(column, name, file),
            DataType::Datetime(_, _) => column.cast(&DataType::Date)?,
            _ => {
                let text = column.cast(&DataType::String)?;
                let mut values: Vec<NaiveDate> = Vec::with_capacity(text.len());
                for (row, raw) in text.str()?.into_iter().enumerate() {
                    let date = raw.and_then(parse_date).ok_or_else(|| DashboardError::InvalidData {
                        file: file.to_string(),
                        reason: format!("unparseable {} at row {}: {:?}", name, row, raw.unwrap_or("")),
                    })?;
                    values.push(date);
                }
                Series::new(name.into(), values).into_column()
            }
        };

        Self::reject_nulls(&parsed, name, file)?;
        df.with_column(parsed)?;
        Ok(())
    }

    /// Smallest and largest date of a `Date` column, if it has any rows.
    pub fn date_bounds(df: &DataFrame, name: &str) -> Result<Option<DateRange>> {
        let days = df.column(name)?.cast(&DataType::Int32)?;
        let days = days.i32()?;
        let bounds = match (days.min(), days.max()) {
            (Some(lo), Some(hi)) => dates::from_epoch_days(lo as i64)
                .zip(dates::from_epoch_days(hi as i64))
                .map(|(start, end)| DateRange::new(start, end)),
            _ => None,
        };
        Ok(bounds)
    }

    /// Create metadata for a loaded DataFrame
    pub fn create_metadata<P: AsRef<Path>>(
        path: P,
        df: &DataFrame,
        date_column: Option<&str>,
    ) -> Result<DatasetMetadata> {
        let columns: Vec<String> = df.get_column_names().iter().map(|s| s.to_string()).collect();

        let date_range = match date_column {
            Some(name) if columns.iter().any(|c| c == name) => Self::date_bounds(df, name)?,
            _ => None,
        };

        Ok(DatasetMetadata {
            file_path: path.as_ref().to_string_lossy().to_string(),
            num_rows: df.height(),
            num_columns: df.width(),
            columns,
            date_range,
        })
    }

    fn reject_nulls(column: &Column, name: &str, file: &str) -> Result<()> {
        if column.null_count() > 0 {
            return Err(DashboardError::InvalidData {
                file: file.to_string(),
                reason: format!("{} null value(s) in '{}'", column.null_count(), name),
            });
        }
        Ok(())
    }

    fn display_name(path: &Path) -> String {
        path.file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| path.display().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use polars::df;

    #[test]
    fn test_parse_string_dates() {
        let mut df = df! {
            "date" => &["2024-01-02", "2024-01-01 00:00:00"],
            "crypto_name" => &["Bitcoin", "Bitcoin"],
        }
        .unwrap();

        CsvConnector::parse_date_column(&mut df, "date", "merged_daily.csv").unwrap();
        assert_eq!(df.column("date").unwrap().dtype(), &DataType::Date);

        let bounds = CsvConnector::date_bounds(&df, "date").unwrap().unwrap();
        assert_eq!(bounds.start, NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
        assert_eq!(bounds.end, NaiveDate::from_ymd_opt(2024, 1, 2).unwrap());
    }

    #[test]
    fn test_unparseable_date_names_file_and_row() {
        let mut df = df! {
            "date" => &["2024-01-02", "not a date"],
        }
        .unwrap();

        let err = CsvConnector::parse_date_column(&mut df, "date", "merged_daily.csv").unwrap_err();
        let message = err.to_string();
        assert!(message.contains("merged_daily.csv"));
        assert!(message.contains("row 1"));
    }

    #[test]
    fn test_missing_date_column() {
        let mut df = df! { "crypto_name" => &["Bitcoin"] }.unwrap();
        let result = CsvConnector::parse_date_column(&mut df, "date", "merged_daily.csv");
        assert!(matches!(result, Err(DashboardError::InvalidData { .. })));
    }

    #[test]
    fn test_create_metadata() {
        let df = df! {
            "date" => &[NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()],
            "price_usd" => &[42000.0],
        }
        .unwrap();

        let metadata = CsvConnector::create_metadata("merged_daily.csv", &df, Some("date")).unwrap();
        assert_eq!(metadata.num_rows, 1);
        assert_eq!(metadata.num_columns, 2);
        assert!(metadata.date_range.is_some());
    }
}
