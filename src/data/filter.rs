use crate::data::dates;
use crate::error::Result;
use crate::types::{columns, DateRange};
use chrono::NaiveDate;
use polars::prelude::*;

/// Rows of the merged dataset for one coin inside an inclusive date range,
/// sorted ascending by date. `date` stays an explicit column.
#[derive(Debug, Clone)]
pub struct FilteredView {
    frame: DataFrame,
    coin: String,
    range: DateRange,
}

impl FilteredView {
    pub fn frame(&self) -> &DataFrame {
        &self.frame
    }

    pub fn coin(&self) -> &str {
        &self.coin
    }

    pub fn range(&self) -> DateRange {
        self.range
    }

    pub fn height(&self) -> usize {
        self.frame.height()
    }

    pub fn is_empty(&self) -> bool {
        self.frame.height() == 0
    }

    pub fn column_names(&self) -> Vec<String> {
        self.frame.get_column_names().iter().map(|s| s.to_string()).collect()
    }

    /// Ordered subset of `candidates` present in this view.
    pub fn present<'a>(&self, candidates: &[&'a str]) -> Vec<&'a str> {
        present_features(&self.column_names(), candidates)
    }

    pub fn dates(&self) -> Result<Vec<Option<NaiveDate>>> {
        Ok(dates::date_values(&self.frame, columns::DATE)?)
    }

    pub fn values(&self, column: &str) -> Result<Vec<Option<f64>>> {
        Ok(dates::float_values(&self.frame, column)?)
    }
}

/// Capability check shared by every view: which candidate columns actually exist.
///
/// Keeps the candidate order and never invents columns.
pub fn present_features<'a, S: AsRef<str>>(schema: &[S], candidates: &[&'a str]) -> Vec<&'a str> {
    candidates
        .iter()
        .copied()
        .filter(|candidate| schema.iter().any(|col| col.as_ref() == *candidate))
        .collect()
}

pub struct FilterEngine;

impl FilterEngine {
    /// Select `coin` within `range`, sorted by date.
    ///
    /// Unknown coins and inverted ranges produce an empty view rather than an error.
    pub fn filter(merged: &DataFrame, coin: &str, range: DateRange) -> Result<FilteredView> {
        let frame = if range.is_empty() {
            merged.clear()
        } else {
            merged
                .clone()
                .lazy()
                .filter(
                    col(columns::COIN).eq(lit(coin)).and(col(columns::DATE).is_between(
                        lit(range.start),
                        lit(range.end),
                        ClosedInterval::Both,
                    )),
                )
                .sort(
                    [columns::DATE],
                    SortMultipleOptions::default().with_maintain_order(true),
                )
                .collect()?
        };

        log::debug!(
            "Filter {} {}..={}: {} rows",
            coin,
            range.start,
            range.end,
            frame.height()
        );

        Ok(FilteredView {
            frame,
            coin: coin.to_string(),
            range,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use polars::df;

    fn d(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, day).unwrap()
    }

    fn merged() -> DataFrame {
        df! {
            "date" => &[d(3), d(1), d(2), d(1), d(5)],
            "crypto_name" => &["Bitcoin", "Bitcoin", "Bitcoin", "Ethereum", "Bitcoin"],
            "price_usd" => &[3.0, 1.0, 2.0, 10.0, 5.0],
        }
        .unwrap()
    }

    #[test]
    fn test_filter_sorts_ascending() {
        let view = FilterEngine::filter(&merged(), "Bitcoin", DateRange::new(d(1), d(3))).unwrap();
        assert_eq!(view.values("price_usd").unwrap(), vec![Some(1.0), Some(2.0), Some(3.0)]);
        assert_eq!(view.dates().unwrap(), vec![Some(d(1)), Some(d(2)), Some(d(3))]);
    }

    #[test]
    fn test_unknown_coin_is_empty() {
        let view = FilterEngine::filter(&merged(), "Dogecoin", DateRange::new(d(1), d(5))).unwrap();
        assert!(view.is_empty());
        assert_eq!(view.column_names().len(), 3);
    }

    #[test]
    fn test_inverted_range_is_empty() {
        let view = FilterEngine::filter(&merged(), "Bitcoin", DateRange::new(d(5), d(1))).unwrap();
        assert!(view.is_empty());
    }

    #[test]
    fn test_present_features_keeps_candidate_order() {
        let schema = vec!["date", "avg_compound", "news_count"];
        let present = present_features(&schema, &["news_count", "pct_positive", "avg_compound"]);
        assert_eq!(present, vec!["news_count", "avg_compound"]);
    }

    #[test]
    fn test_present_features_empty_intersection() {
        let schema = vec!["date", "crypto_name"];
        assert!(present_features(&schema, &["news_count"]).is_empty());
    }
}
