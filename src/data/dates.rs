//! Typed column extraction and calendar-date helpers shared by the loader, the filter and the chart builders.

use chrono::{Days, NaiveDate, NaiveDateTime};
use polars::prelude::*;

/// 1970-01-01, which is also chrono's default date.
fn unix_epoch() -> NaiveDate {
    NaiveDate::default()
}

/// Accepts `YYYY-MM-DD`, optionally followed by a time component.
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(date);
    }
    for format in ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S%.f"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(dt.date());
        }
    }
    // Timezone suffixes and other trailing parts: the first ten characters carry the date.
    raw.get(..10).and_then(|head| NaiveDate::parse_from_str(head, "%Y-%m-%d").ok())
}

pub fn to_epoch_days(date: NaiveDate) -> i64 {
    (date - unix_epoch()).num_days()
}

pub fn from_epoch_days(days: i64) -> Option<NaiveDate> {
    if days >= 0 {
        unix_epoch().checked_add_days(Days::new(days as u64))
    } else {
        unix_epoch().checked_sub_days(Days::new(days.unsigned_abs()))
    }
}

/// Values of a `Date` column, row by row.
pub fn date_values(df: &DataFrame, name: &str) -> PolarsResult<Vec<Option<NaiveDate>>> {
    let days = df.column(name)?.cast(&DataType::Int32)?;
    Ok(days
        .i32()?
        .into_iter()
        .map(|d| d.and_then(|d| from_epoch_days(d as i64)))
        .collect())
}

/// Values of any numeric column as `f64`.
pub fn float_values(df: &DataFrame, name: &str) -> PolarsResult<Vec<Option<f64>>> {
    let values = df.column(name)?.cast(&DataType::Float64)?;
    Ok(values.f64()?.into_iter().collect())
}
