use super::artifact::{Block, ViewOutput};
use crate::types::View;
use std::path::{Path, PathBuf};

const INTRO: &str = "This dashboard brings together the outputs of the crypto sentiment and \
forecasting pipeline. Each stage below runs offline and drops a CSV file that the views read.";

const PIPELINE: [(&str, &[&str]); 6] = [
    (
        "1. News Ingestion",
        &[
            "Headlines are collected from Reddit, CoinTelegraph, CryptoSlate and similar sources.",
            "Each headline is tagged with the cryptocurrency it mentions.",
        ],
    ),
    (
        "2. Sentiment Analysis",
        &[
            "Every headline receives a compound sentiment score.",
            "Scores are aggregated per coin and day into news_count, pct_positive / pct_negative and avg_compound.",
        ],
    ),
    (
        "3. Historical Price Merge",
        &[
            "Daily sentiment features are joined with historical prices.",
            "Days without news are zero-filled so every series is contiguous.",
        ],
    ),
    (
        "4. Forecasting Models",
        &[
            "SARIMA with weekly seasonality.",
            "An LSTM trained on the trailing 14 days.",
            "Both one-day-ahead forecasts are compared side by side.",
        ],
    ),
    (
        "5. Backtesting & Metrics",
        &[
            "A walk-forward backtest replays the forecasts as if in real time.",
            "RMSE, MAPE and directional accuracy are recorded per model.",
            "Cumulative returns are plotted against buy-and-hold.",
        ],
    ),
    (
        "6. Live Signals",
        &[
            "For the latest day: current price, each model's 24h forecast and a BUY/HOLD recommendation.",
        ],
    ),
];

/// Static landing page plus any slide images, sorted by file name.
pub fn render(slides_dir: &Path, slide_pattern: &str) -> ViewOutput {
    let mut output = ViewOutput::new(View::Overview, "Crypto Sentiment & Forecast Pipeline");
    output.push(Block::Text { text: INTRO.to_string() });

    for (heading, bullets) in PIPELINE {
        output.push(Block::Section {
            heading: heading.to_string(),
            bullets: bullets.iter().map(|b| b.to_string()).collect(),
        });
    }

    output.push(Block::Text {
        text: "Use the navigation in the sidebar to step from Sentiment Features through Live Signals and Raw Data."
            .to_string(),
    });

    let slides = find_slides(slides_dir, slide_pattern);
    if !slides.is_empty() {
        output.push(Block::Images { paths: slides });
    }

    output
}

/// Files in `dir` whose name matches `pattern`, sorted by name. A missing directory yields none.
pub fn find_slides(dir: &Path, pattern: &str) -> Vec<PathBuf> {
    let Ok(pattern) = glob::Pattern::new(pattern) else {
        log::warn!("Invalid slide pattern {:?}", pattern);
        return Vec::new();
    };
    let Ok(entries) = std::fs::read_dir(dir) else {
        log::debug!("No slides directory at {}", dir.display());
        return Vec::new();
    };

    let mut slides: Vec<PathBuf> = entries
        .filter_map(|entry| entry.ok())
        .filter(|entry| pattern.matches(&entry.file_name().to_string_lossy()))
        .map(|entry| entry.path())
        .filter(|path| path.is_file())
        .collect();
    slides.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    slides
}
