use crate::data::Datasets;
use crate::types::{DateRange, View};
use crate::views::Selection;

/// Central application state for the UI
pub struct AppState {
    pub view: View,

    // Common controls
    pub coins: Vec<String>,
    pub coin: Option<String>,
    pub bounds: Option<DateRange>,
    pub range: Option<DateRange>,
    pub start_input: String,
    pub end_input: String,
    pub date_error: Option<String>,

    pub status_message: String,
}

impl AppState {
    /// Defaults to the first coin and the full date range of the data.
    pub fn new(datasets: &Datasets) -> Self {
        let coins = datasets.coins().to_vec();
        let bounds = datasets.merged.date_bounds();
        let mut state = Self {
            view: View::Overview,
            coin: coins.first().cloned(),
            coins,
            bounds,
            range: bounds,
            start_input: String::new(),
            end_input: String::new(),
            date_error: None,
            status_message: "Ready".to_string(),
        };
        state.sync_inputs();
        state
    }

    pub fn selection(&self) -> Option<Selection> {
        Some(Selection {
            coin: self.coin.clone()?,
            range: self.range?,
        })
    }

    /// Apply the text inputs. Invalid input keeps the previous range and records an error.
    pub fn commit_inputs(&mut self) {
        let Some(bounds) = self.bounds else {
            return;
        };
        let parse = |raw: &str| crate::data::dates::parse_date(raw);
        match (parse(&self.start_input), parse(&self.end_input)) {
            (Some(start), Some(end)) => {
                self.range = Some(DateRange::new(start, end).clamp_to(&bounds));
                self.date_error = None;
                self.sync_inputs();
            }
            _ => {
                self.date_error = Some("Dates must be YYYY-MM-DD".to_string());
            }
        }
    }

    pub fn reset_range(&mut self) {
        self.range = self.bounds;
        self.date_error = None;
        self.sync_inputs();
    }

    fn sync_inputs(&mut self) {
        if let Some(range) = self.range {
            self.start_input = range.start.format("%Y-%m-%d").to_string();
            self.end_input = range.end.format("%Y-%m-%d").to_string();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{DataPaths, LiveSignals, MergedDaily, PerformanceSummary};
    use crate::config::DataConfig;
    use chrono::NaiveDate;
    use polars::df;
    use std::path::Path;

    fn datasets() -> Datasets {
        let merged = MergedDaily::from_frame(
            df! {
                "date" => &["2024-01-01", "2024-01-10", "2024-01-05"],
                "crypto_name" => &["Ethereum", "Bitcoin", "Bitcoin"],
            }
            .unwrap(),
            "merged_daily.csv",
        )
        .unwrap();
        Datasets {
            paths: DataPaths::new(Path::new("/tmp/News Data Crypto"), &DataConfig::default()),
            merged,
            live: LiveSignals::empty(),
            perf: PerformanceSummary::empty(),
        }
    }

    fn d(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, day).unwrap()
    }

    #[test]
    fn test_defaults_to_first_coin_and_full_range() {
        let state = AppState::new(&datasets());
        assert_eq!(state.view, View::Overview);
        let selection = state.selection().unwrap();
        assert_eq!(selection.coin, "Bitcoin");
        assert_eq!(selection.range, DateRange::new(d(1), d(10)));
        assert_eq!(state.start_input, "2024-01-01");
    }

    #[test]
    fn test_commit_clamps_to_bounds() {
        let mut state = AppState::new(&datasets());
        state.start_input = "2023-06-01".to_string();
        state.end_input = "2024-01-04".to_string();
        state.commit_inputs();
        assert_eq!(state.range, Some(DateRange::new(d(1), d(4))));
        assert_eq!(state.start_input, "2024-01-01");
        assert!(state.date_error.is_none());
    }

    #[test]
    fn test_invalid_input_keeps_previous_range() {
        let mut state = AppState::new(&datasets());
        state.start_input = "soon".to_string();
        state.commit_inputs();
        assert_eq!(state.range, Some(DateRange::new(d(1), d(10))));
        assert!(state.date_error.is_some());

        state.reset_range();
        assert!(state.date_error.is_none());
        assert_eq!(state.start_input, "2024-01-01");
    }
}
