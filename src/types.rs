use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Column names of `merged_daily.csv`.
pub mod columns {
    pub const DATE: &str = "date";
    pub const COIN: &str = "crypto_name";
    pub const PRICE: &str = "price_usd";
    pub const NEWS_COUNT: &str = "news_count";
    pub const PCT_POSITIVE: &str = "pct_positive";
    pub const PCT_NEGATIVE: &str = "pct_negative";
    pub const AVG_COMPOUND: &str = "avg_compound";
    pub const SARIMA_FORECAST: &str = "sarima_forecast";
    pub const LSTM_FORECAST: &str = "lstm_forecast";

    pub const STRATEGY: &str = "strategy";
    pub const RMSE: &str = "RMSE";
    pub const MAPE: &str = "MAPE";
    pub const DIR_ACC: &str = "DirAcc";
}

/// The seven dashboard views, in navigation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum View {
    Overview,
    SentimentFeatures,
    ForecastComparison,
    BacktestResults,
    PerformanceMetrics,
    LiveSignals,
    RawData,
}

impl View {
    pub fn all() -> [Self; 7] {
        [
            Self::Overview,
            Self::SentimentFeatures,
            Self::ForecastComparison,
            Self::BacktestResults,
            Self::PerformanceMetrics,
            Self::LiveSignals,
            Self::RawData,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Overview => "Overview",
            Self::SentimentFeatures => "Sentiment Features",
            Self::ForecastComparison => "Forecast Comparison",
            Self::BacktestResults => "Backtest Results",
            Self::PerformanceMetrics => "Performance Metrics",
            Self::LiveSignals => "Live Signals",
            Self::RawData => "Raw Data",
        }
    }

    /// Overview is static; every other view is driven by coin and date range.
    pub fn needs_selection(&self) -> bool {
        !matches!(self, Self::Overview)
    }
}

/// Inclusive calendar-date interval. `start > end` denotes an empty interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    pub fn is_empty(&self) -> bool {
        self.start > self.end
    }

    /// Clamp both ends into `bounds`, as the date inputs never leave the data range.
    pub fn clamp_to(&self, bounds: &DateRange) -> Self {
        Self {
            start: self.start.clamp(bounds.start, bounds.end),
            end: self.end.clamp(bounds.start, bounds.end),
        }
    }
}
