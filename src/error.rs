use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DashboardError {
    #[error("Data root not found: {0}")]
    DataRootNotFound(PathBuf),

    #[error("Couldn't find a '{prefix}' folder under {base}")]
    NoDataDirectory { base: PathBuf, prefix: String },

    #[error("Required data missing: {0}")]
    RequiredDataMissing(PathBuf),

    #[error("Invalid data in {file}: {reason}")]
    InvalidData { file: String, reason: String },

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Export error: {0}")]
    Export(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Polars error: {0}")]
    Polars(#[from] polars::error::PolarsError),

    #[error("Serde error: {0}")]
    Serde(#[from] serde_json::Error),
}

impl DashboardError {
    /// Errors that must stop the dashboard before any view is shown.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            Self::DataRootNotFound(_)
                | Self::NoDataDirectory { .. }
                | Self::RequiredDataMissing(_)
                | Self::InvalidData { .. }
                | Self::Configuration(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, DashboardError>;
