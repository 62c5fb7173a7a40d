use crate::error::{DashboardError, Result};
use crate::types::columns;
use polars::prelude::*;
use super::types::RequiredColumn;

pub struct DataValidator;

impl DataValidator {
    /// Validate the merged daily frame after its date column was parsed.
    pub fn validate_merged(df: &DataFrame, file: &str) -> Result<()> {
        for required in RequiredColumn::all() {
            if !Self::has_column(df, required.as_str()) {
                return Err(DashboardError::InvalidData {
                    file: file.to_string(),
                    reason: format!("missing required column '{}'", required.as_str()),
                });
            }
        }

        let coins = df.column(columns::COIN)?.cast(&DataType::String)?;
        for (row, coin) in coins.str()?.into_iter().enumerate() {
            match coin {
                Some(name) if !name.trim().is_empty() => {}
                _ => {
                    return Err(DashboardError::InvalidData {
                        file: file.to_string(),
                        reason: format!("empty {} at row {}", columns::COIN, row),
                    });
                }
            }
        }

        Ok(())
    }

    /// `key` if the frame has it, otherwise the name of the first column.
    pub fn key_column<'a>(df: &'a DataFrame, key: &'a str) -> Option<&'a str> {
        if Self::has_column(df, key) {
            return Some(key);
        }
        df.get_columns().first().map(|col| col.name().as_str())
    }

    pub fn has_column(df: &DataFrame, name: &str) -> bool {
        df.get_column_names().iter().any(|col| col.as_str() == name)
    }

    /// Check for null values in any column
    pub fn check_nulls(df: &DataFrame) -> Vec<(String, usize)> {
        df.get_columns()
            .iter()
            .filter(|col| col.null_count() > 0)
            .map(|col| (col.name().to_string(), col.null_count()))
            .collect()
    }
}
