use crate::data::connectors::{CsvConnector, DataValidator};
use crate::data::dates;
use crate::data::paths::DataPaths;
use crate::error::{DashboardError, Result};
use crate::types::{columns, DateRange};
use chrono::NaiveDate;
use polars::prelude::*;
use std::collections::BTreeSet;
use std::path::Path;

/// The required per-coin daily table.
#[derive(Debug, Clone)]
pub struct MergedDaily {
    frame: DataFrame,
    coins: Vec<String>,
    bounds: Option<DateRange>,
}

impl MergedDaily {
    /// Missing or malformed files are fatal.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Err(DashboardError::RequiredDataMissing(path.to_path_buf()));
        }
        let file = path.file_name().map(|n| n.to_string_lossy().to_string()).unwrap_or_default();
        let frame = CsvConnector::load(path)?;
        Self::from_frame(frame, &file)
    }

    /// Validate, parse dates and normalise the coin column to strings.
    pub fn from_frame(mut frame: DataFrame, file: &str) -> Result<Self> {
        DataValidator::validate_merged(&frame, file)?;
        CsvConnector::parse_date_column(&mut frame, columns::DATE, file)?;

        let coin_column = frame.column(columns::COIN)?.cast(&DataType::String)?;
        frame.with_column(coin_column)?;

        let null_report = DataValidator::check_nulls(&frame);
        if !null_report.is_empty() {
            log::warn!("Null values detected in {}: {:?}", file, null_report);
        }

        let coins: BTreeSet<String> = frame
            .column(columns::COIN)?
            .str()?
            .into_iter()
            .flatten()
            .map(str::to_string)
            .collect();
        let bounds = CsvConnector::date_bounds(&frame, columns::DATE)?;

        log::info!(
            "Loaded {}: {} rows, {} coins, columns {:?}",
            file,
            frame.height(),
            coins.len(),
            frame.get_column_names()
        );

        Ok(Self {
            frame,
            coins: coins.into_iter().collect(),
            bounds,
        })
    }

    pub fn frame(&self) -> &DataFrame {
        &self.frame
    }

    /// Sorted, unique coin identifiers.
    pub fn coins(&self) -> &[String] {
        &self.coins
    }

    /// Earliest and latest date across all coins.
    pub fn date_bounds(&self) -> Option<DateRange> {
        self.bounds
    }
}

/// Loads an optional CSV. Absent or unreadable files yield an empty frame.
fn load_optional(path: &Path) -> DataFrame {
    if !path.is_file() {
        log::warn!("Optional file {} not found", path.display());
        return DataFrame::empty();
    }
    match CsvConnector::load(path) {
        Ok(df) => df,
        Err(e) => {
            log::warn!("Ignoring unreadable optional file {}: {}", path.display(), e);
            DataFrame::empty()
        }
    }
}

/// `live_recommendations.csv`, keyed by coin.
#[derive(Debug, Clone)]
pub struct LiveSignals {
    frame: DataFrame,
}

impl LiveSignals {
    pub fn load(path: &Path) -> Self {
        Self::from_frame(load_optional(path))
    }

    pub fn from_frame(frame: DataFrame) -> Self {
        Self { frame }
    }

    pub fn empty() -> Self {
        Self::from_frame(DataFrame::empty())
    }

    pub fn is_empty(&self) -> bool {
        self.frame.width() == 0 || self.frame.height() == 0
    }

    pub fn frame(&self) -> &DataFrame {
        &self.frame
    }

    pub fn key_column(&self) -> Option<&str> {
        DataValidator::key_column(&self.frame, columns::COIN)
    }

    /// Rows whose key equals `coin`; `None` when the coin has no row.
    pub fn rows_for(&self, coin: &str) -> Result<Option<DataFrame>> {
        let Some(key) = self.key_column() else {
            return Ok(None);
        };
        let rows = self
            .frame
            .clone()
            .lazy()
            .filter(col(key).cast(DataType::String).eq(lit(coin)))
            .collect()?;
        Ok((rows.height() > 0).then_some(rows))
    }
}

/// `walk_forward_summary.csv`, keyed by strategy.
#[derive(Debug, Clone)]
pub struct PerformanceSummary {
    frame: DataFrame,
}

impl PerformanceSummary {
    pub const METRICS: [&'static str; 3] = [columns::RMSE, columns::MAPE, columns::DIR_ACC];

    pub fn load(path: &Path) -> Self {
        Self::from_frame(load_optional(path))
    }

    pub fn from_frame(frame: DataFrame) -> Self {
        Self { frame }
    }

    pub fn empty() -> Self {
        Self::from_frame(DataFrame::empty())
    }

    pub fn is_empty(&self) -> bool {
        self.frame.width() == 0 || self.frame.height() == 0
    }

    pub fn frame(&self) -> &DataFrame {
        &self.frame
    }

    /// Strategy names, taken from the `strategy` column or else the first column.
    pub fn strategies(&self) -> Result<Vec<String>> {
        let Some(key) = DataValidator::key_column(&self.frame, columns::STRATEGY) else {
            return Ok(Vec::new());
        };
        let names = self.frame.column(key)?.cast(&DataType::String)?;
        Ok(names
            .str()?
            .into_iter()
            .map(|name| name.unwrap_or_default().to_string())
            .collect())
    }

    /// Values of one metric column, or `None` if the file lacks it.
    pub fn metric(&self, name: &str) -> Result<Option<Vec<Option<f64>>>> {
        if !DataValidator::has_column(&self.frame, name) {
            return Ok(None);
        }
        Ok(Some(dates::float_values(&self.frame, name)?))
    }
}

/// One row of a backtest in long form.
#[derive(Debug, Clone, PartialEq)]
pub struct BacktestPoint {
    pub date: NaiveDate,
    pub strategy: String,
    pub cumulative_return: f64,
}

/// Per-coin cumulative return curves. Loaded on demand, never cached.
#[derive(Debug, Clone)]
pub struct BacktestSeries {
    frame: DataFrame,
}

impl BacktestSeries {
    /// `Ok(None)` when the coin has no backtest file.
    pub fn load(paths: &DataPaths, coin: &str) -> Result<Option<Self>> {
        let path = paths.backtest_file(coin);
        if !path.is_file() {
            log::warn!("Backtest file not found: {}", path.display());
            return Ok(None);
        }
        let frame = CsvConnector::load_dated(&path, columns::DATE)?;
        Ok(Some(Self::from_frame(frame)))
    }

    pub fn from_frame(frame: DataFrame) -> Self {
        Self { frame }
    }

    /// Every column other than `date`, in file order.
    pub fn strategies(&self) -> Vec<String> {
        self.frame
            .get_column_names()
            .into_iter()
            .filter(|name| name.as_str() != columns::DATE)
            .map(|name| name.to_string())
            .collect()
    }

    /// Melt to (date, strategy, value) rows, skipping nulls.
    pub fn long_form(&self) -> Result<Vec<BacktestPoint>> {
        let days = dates::date_values(&self.frame, columns::DATE)?;
        let mut points = Vec::new();
        for strategy in self.strategies() {
            let values = dates::float_values(&self.frame, &strategy)?;
            for (date, value) in days.iter().zip(values) {
                if let (Some(date), Some(value)) = (date, value) {
                    points.push(BacktestPoint {
                        date: *date,
                        strategy: strategy.clone(),
                        cumulative_return: value,
                    });
                }
            }
        }
        Ok(points)
    }
}

/// The eagerly loaded tables of one data root.
#[derive(Debug, Clone)]
pub struct Datasets {
    pub paths: DataPaths,
    pub merged: MergedDaily,
    pub live: LiveSignals,
    pub perf: PerformanceSummary,
}

impl Datasets {
    pub fn load(paths: &DataPaths) -> Result<Self> {
        let merged = MergedDaily::load(&paths.merged_daily)?;
        let metadata = CsvConnector::create_metadata(&paths.merged_daily, merged.frame(), Some(columns::DATE))?;
        log::debug!("{:?}", metadata);
        let live = LiveSignals::load(&paths.live_signals);
        let perf = PerformanceSummary::load(&paths.walk_summary);

        Ok(Self {
            paths: paths.clone(),
            merged,
            live,
            perf,
        })
    }

    pub fn coins(&self) -> &[String] {
        self.merged.coins()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use polars::df;

    fn merged() -> MergedDaily {
        let df = df! {
            "date" => &["2024-01-02", "2024-01-01", "2024-01-01"],
            "crypto_name" => &["Ethereum", "Bitcoin", "Ethereum"],
            "price_usd" => &[2300.0, 42000.0, 2250.0],
        }
        .unwrap();
        MergedDaily::from_frame(df, "merged_daily.csv").unwrap()
    }

    #[test]
    fn test_coins_sorted_and_unique() {
        let merged = merged();
        assert_eq!(merged.coins(), &["Bitcoin".to_string(), "Ethereum".to_string()]);
    }

    #[test]
    fn test_date_bounds() {
        let bounds = merged().date_bounds().unwrap();
        assert_eq!(bounds.start, NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
        assert_eq!(bounds.end, NaiveDate::from_ymd_opt(2024, 1, 2).unwrap());
    }

    #[test]
    fn test_missing_merged_file_is_fatal() {
        let err = MergedDaily::load(Path::new("/no/such/merged_daily.csv")).unwrap_err();
        assert!(err.is_fatal());
        assert!(err.to_string().contains("merged_daily.csv"));
    }

    #[test]
    fn test_live_rows_for_coin() {
        let live = LiveSignals::from_frame(
            df! {
                "crypto_name" => &["Bitcoin", "Ethereum"],
                "recommendation" => &["BUY", "HOLD"],
            }
            .unwrap(),
        );
        let rows = live.rows_for("Ethereum").unwrap().unwrap();
        assert_eq!(rows.height(), 1);
        assert!(live.rows_for("Dogecoin").unwrap().is_none());
    }

    #[test]
    fn test_empty_live_signals() {
        let live = LiveSignals::empty();
        assert!(live.is_empty());
        assert!(live.rows_for("Bitcoin").unwrap().is_none());
    }

    #[test]
    fn test_performance_strategies_and_metrics() {
        let perf = PerformanceSummary::from_frame(
            df! {
                "strategy" => &["SARIMA", "LSTM"],
                "RMSE" => &[120.5, 98.25],
                "MAPE" => &[0.031, 0.027],
            }
            .unwrap(),
        );
        assert_eq!(perf.strategies().unwrap(), vec!["SARIMA", "LSTM"]);
        assert_eq!(perf.metric("RMSE").unwrap().unwrap(), vec![Some(120.5), Some(98.25)]);
        assert!(perf.metric("DirAcc").unwrap().is_none());
    }

    #[test]
    fn test_backtest_long_form_skips_nulls() {
        let mut frame = df! {
            "date" => &["2024-01-01", "2024-01-02"],
            "Buy & Hold" => &[Some(1.0), Some(1.02)],
            "SARIMA" => &[Some(1.0), None],
        }
        .unwrap();
        CsvConnector::parse_date_column(&mut frame, "date", "Bitcoin_cum_returns.csv").unwrap();

        let series = BacktestSeries::from_frame(frame);
        assert_eq!(series.strategies(), vec!["Buy & Hold", "SARIMA"]);
        let points = series.long_form().unwrap();
        assert_eq!(points.len(), 3);
        assert!(points.iter().all(|p| p.strategy != "SARIMA" || p.cumulative_return == 1.0));
    }
}
