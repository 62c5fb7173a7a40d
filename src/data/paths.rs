use crate::config::DataConfig;
use std::path::{Path, PathBuf};

pub const MERGED_DAILY_FILE: &str = "merged_daily.csv";
pub const LIVE_SIGNALS_FILE: &str = "live_recommendations.csv";
pub const WALK_SUMMARY_FILE: &str = "walk_forward_summary.csv";
pub const BACKTEST_SUFFIX: &str = "_cum_returns.csv";

/// Fixed file layout under the chosen data root. Also the dataset cache key.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DataPaths {
    pub root: PathBuf,
    pub merged_daily: PathBuf,
    pub live_signals: PathBuf,
    pub walk_summary: PathBuf,
    pub backtest_folder: PathBuf,
    pub slides_dir: PathBuf,
}

/// One line of the sidebar file check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileCheck {
    pub name: &'static str,
    pub file_name: String,
    pub exists: bool,
}

impl DataPaths {
    pub fn new(root: &Path, config: &DataConfig) -> Self {
        let slides_parent = root.parent().unwrap_or(root);
        Self {
            root: root.to_path_buf(),
            merged_daily: root.join(MERGED_DAILY_FILE),
            live_signals: root.join(LIVE_SIGNALS_FILE),
            walk_summary: root.join(WALK_SUMMARY_FILE),
            backtest_folder: root.join(&config.backtests_dir),
            slides_dir: slides_parent.join(&config.slides_dir),
        }
    }

    /// Location of the cumulative-return file for `coin`.
    pub fn backtest_file(&self, coin: &str) -> PathBuf {
        self.backtest_folder.join(backtest_file_name(coin))
    }

    pub fn file_checks(&self) -> Vec<FileCheck> {
        [
            ("merged_daily", &self.merged_daily),
            ("live_signals", &self.live_signals),
            ("walk_summary", &self.walk_summary),
            ("backtest_folder", &self.backtest_folder),
        ]
        .into_iter()
        .map(|(name, path)| FileCheck {
            name,
            file_name: path
                .file_name()
                .map(|n| n.to_string_lossy().to_string())
                .unwrap_or_default(),
            exists: path.exists(),
        })
        .collect()
    }
}

/// `"Bitcoin Cash"` -> `"BitcoinCash_cum_returns.csv"`. Every whitespace character is dropped.
pub fn backtest_file_name(coin: &str) -> String {
    let stem: String = coin.chars().filter(|c| !c.is_whitespace()).collect();
    format!("{}{}", stem, BACKTEST_SUFFIX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backtest_file_name_strips_whitespace() {
        assert_eq!(backtest_file_name("Bitcoin Cash"), "BitcoinCash_cum_returns.csv");
        assert_eq!(backtest_file_name(" Shiba\tInu  Coin"), "ShibaInuCoin_cum_returns.csv");
        assert_eq!(backtest_file_name("Ethereum"), "Ethereum_cum_returns.csv");
    }

    #[test]
    fn test_layout_under_root() {
        let config = DataConfig::default();
        let paths = DataPaths::new(Path::new("/data/News Data Crypto 2024"), &config);
        assert_eq!(paths.merged_daily, Path::new("/data/News Data Crypto 2024/merged_daily.csv"));
        assert_eq!(paths.backtest_folder, Path::new("/data/News Data Crypto 2024/backtests"));
        assert_eq!(paths.slides_dir, Path::new("/data/slides"));
        assert_eq!(
            paths.backtest_file("Bitcoin Cash"),
            Path::new("/data/News Data Crypto 2024/backtests/BitcoinCash_cum_returns.csv")
        );
    }

    #[test]
    fn test_file_checks_report_missing_files() {
        let paths = DataPaths::new(Path::new("/nonexistent/root"), &DataConfig::default());
        let checks = paths.file_checks();
        assert_eq!(checks.len(), 4);
        assert!(checks.iter().all(|c| !c.exists));
        assert_eq!(checks[0].file_name, "merged_daily.csv");
    }
}
