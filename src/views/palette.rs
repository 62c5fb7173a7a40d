//! Fixed series colours. Every view pins its series to these so a feature or
//! strategy keeps its colour regardless of which others are present.

use crate::types::columns;

pub const NEWS_COUNT: &str = "#FF7043";
pub const PCT_POSITIVE: &str = "#66BB6A";
pub const PCT_NEGATIVE: &str = "#EF5350";
pub const AVG_COMPOUND: &str = "#29B6F6";

pub const PRICE: &str = "#00E676";
pub const SARIMA: &str = "#FFAB00";
pub const LSTM: &str = "#29B6F6";

/// Backtest strategy domain and its colour range.
pub const STRATEGY_DOMAIN: [(&str, &str); 3] = [
    ("Buy & Hold", "#29B6F6"),
    ("SARIMA", "#FFAB00"),
    ("LSTM", "#66BB6A"),
];

/// Strategies outside the fixed domain cycle through these.
const FALLBACK: [&str; 5] = ["#AB47BC", "#EC407A", "#8D6E63", "#26A69A", "#FFEE58"];

/// Category colours for the metric panels.
pub const METRICS: [(&str, &str); 3] = [
    (columns::RMSE, "#4C78A8"),
    (columns::MAPE, "#F58518"),
    (columns::DIR_ACC, "#E45756"),
];

pub fn sentiment_color(feature: &str) -> Option<&'static str> {
    match feature {
        columns::NEWS_COUNT => Some(NEWS_COUNT),
        columns::PCT_POSITIVE => Some(PCT_POSITIVE),
        columns::PCT_NEGATIVE => Some(PCT_NEGATIVE),
        columns::AVG_COMPOUND => Some(AVG_COMPOUND),
        _ => None,
    }
}

/// Colour for a backtest strategy. `unknown_index` counts strategies outside the domain seen so far.
pub fn strategy_color(strategy: &str, unknown_index: usize) -> &'static str {
    STRATEGY_DOMAIN
        .iter()
        .find(|(name, _)| *name == strategy)
        .map(|(_, color)| *color)
        .unwrap_or(FALLBACK[unknown_index % FALLBACK.len()])
}

pub fn is_known_strategy(strategy: &str) -> bool {
    STRATEGY_DOMAIN.iter().any(|(name, _)| *name == strategy)
}

pub fn metric_color(metric: &str) -> &'static str {
    METRICS
        .iter()
        .find(|(name, _)| *name == metric)
        .map(|(_, color)| *color)
        .unwrap_or(FALLBACK[0])
}

/// Parse `#RRGGBB` into RGB bytes.
pub fn parse_hex(hex: &str) -> Option<[u8; 3]> {
    let digits = hex.strip_prefix('#')?;
    if digits.len() != 6 {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(digits.get(i..i + 2)?, 16).ok();
    Some([channel(0)?, channel(2)?, channel(4)?])
}
