use chrono::NaiveDate;
use cryptodash::data::{present_features, FilterEngine, MergedDaily};
use cryptodash::types::DateRange;
use polars::prelude::*;

fn d(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, day).unwrap()
}

/// Bitcoin and Ethereum for 2024-01-01..=2024-01-10, rows deliberately out of order.
fn merged() -> MergedDaily {
    let mut dates = Vec::new();
    let mut coins = Vec::new();
    let mut prices = Vec::new();
    for day in (1..=10).rev() {
        for (coin, base) in [("Ethereum", 2000.0), ("Bitcoin", 40000.0)] {
            dates.push(format!("2024-01-{:02}", day));
            coins.push(coin);
            prices.push(base + day as f64);
        }
    }
    let df = df! {
        "date" => dates,
        "crypto_name" => coins,
        "price_usd" => prices,
        "news_count" => (0..20i64).collect::<Vec<_>>(),
    }
    .unwrap();
    MergedDaily::from_frame(df, "merged_daily.csv").unwrap()
}

#[test]
fn test_selection_yields_five_rows() {
    let merged = merged();
    assert_eq!(merged.coins(), &["Bitcoin".to_string(), "Ethereum".to_string()]);
    assert_eq!(merged.date_bounds(), Some(DateRange::new(d(1), d(10))));

    let view = FilterEngine::filter(merged.frame(), "Bitcoin", DateRange::new(d(3), d(7))).unwrap();
    assert_eq!(view.height(), 5);
    assert_eq!(view.coin(), "Bitcoin");
}

#[test]
fn test_rows_are_in_range_and_sorted() {
    let merged = merged();
    let view = FilterEngine::filter(merged.frame(), "Ethereum", DateRange::new(d(2), d(9))).unwrap();

    let dates: Vec<NaiveDate> = view.dates().unwrap().into_iter().flatten().collect();
    assert_eq!(dates.len(), 8);
    assert!(dates.iter().all(|date| *date >= d(2) && *date <= d(9)));
    assert!(dates.windows(2).all(|w| w[0] <= w[1]));

    let prices: Vec<f64> = view.values("price_usd").unwrap().into_iter().flatten().collect();
    assert_eq!(prices.first(), Some(&2002.0));
    assert_eq!(prices.last(), Some(&2009.0));
}

#[test]
fn test_inverted_range_is_empty_with_schema() {
    let merged = merged();
    let view = FilterEngine::filter(merged.frame(), "Bitcoin", DateRange::new(d(7), d(3))).unwrap();
    assert!(view.is_empty());
    assert_eq!(view.column_names(), vec!["date", "crypto_name", "price_usd", "news_count"]);
}

#[test]
fn test_unknown_coin_is_empty() {
    let merged = merged();
    let view = FilterEngine::filter(merged.frame(), "Dogecoin", DateRange::new(d(1), d(10))).unwrap();
    assert!(view.is_empty());
}

#[test]
fn test_filter_is_idempotent() {
    let merged = merged();
    let range = DateRange::new(d(4), d(6));
    let once = FilterEngine::filter(merged.frame(), "Bitcoin", range).unwrap();
    let twice = FilterEngine::filter(once.frame(), "Bitcoin", range).unwrap();
    assert!(once.frame().equals_missing(twice.frame()));
}

#[test]
fn test_present_features_keeps_candidate_order() {
    let schema = ["date", "avg_compound", "news_count"];
    let present = present_features(&schema, &["news_count", "pct_positive", "avg_compound"]);
    assert_eq!(present, vec!["news_count", "avg_compound"]);
    assert!(present_features(&schema, &["lstm_forecast"]).is_empty());
}
