use crate::types::{columns, DateRange};
use serde::{Deserialize, Serialize};

/// Columns `merged_daily.csv` cannot do without.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RequiredColumn {
    Date,
    Coin,
}

impl RequiredColumn {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Date => columns::DATE,
            Self::Coin => columns::COIN,
        }
    }

    pub fn all() -> Vec<Self> {
        vec![Self::Date, Self::Coin]
    }
}

/// Metadata about a loaded CSV file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetMetadata {
    pub file_path: String,
    pub num_rows: usize,
    pub num_columns: usize,
    pub columns: Vec<String>,
    pub date_range: Option<DateRange>,
}
