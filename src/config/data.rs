use super::traits::ConfigSection;
use crate::error::DashboardError;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Where the dashboard looks for its input files.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DataConfig {
    /// Directory whose immediate subdirectories are candidate data roots.
    pub base_dir: PathBuf,
    /// A candidate's name must start with this prefix.
    pub dir_prefix: String,
    pub selection: SelectionPolicy,
    /// Relative to the data root.
    pub backtests_dir: String,
    /// Relative to the parent of the data root.
    pub slides_dir: String,
    pub slide_pattern: String,
}

/// Tie-break used when several candidate directories match the prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectionPolicy {
    /// Lexicographically smallest name.
    FirstByName,
    /// Lexicographically greatest name.
    LastByName,
    /// Most recent modification time, ties broken by name.
    NewestModified,
}

impl Default for DataConfig {
    fn default() -> Self {
        let home = dirs::home_dir().unwrap_or_default();
        Self {
            base_dir: home
                .join("ImpData")
                .join("Crypto Sentiment Prediction")
                .join("crypto_sentiment_project")
                .join("data"),
            dir_prefix: "News Data Crypto".to_string(),
            selection: SelectionPolicy::FirstByName,
            backtests_dir: "backtests".to_string(),
            slides_dir: "slides".to_string(),
            slide_pattern: "slide*.png".to_string(),
        }
    }
}

impl ConfigSection for DataConfig {
    fn section_name() -> &'static str {
        "data"
    }

    fn validate(&self) -> Result<(), DashboardError> {
        if self.dir_prefix.trim().is_empty() {
            return Err(DashboardError::Configuration(
                "Data directory prefix must not be empty".to_string()
            ));
        }
        if self.backtests_dir.trim().is_empty() {
            return Err(DashboardError::Configuration(
                "Backtests directory name must not be empty".to_string()
            ));
        }
        if glob::Pattern::new(&self.slide_pattern).is_err() {
            return Err(DashboardError::Configuration(format!(
                "Invalid slide pattern: {}",
                self.slide_pattern
            )));
        }
        Ok(())
    }
}
