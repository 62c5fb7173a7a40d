use super::artifact::{Block, NoticeLevel, TableSpec, ViewOutput};
use crate::config::DisplayConfig;
use crate::data::LiveSignals;
use crate::error::Result;
use crate::types::View;
use polars::prelude::DataFrame;

/// Outcome of looking a coin up in the live recommendations.
#[derive(Debug, Clone)]
pub enum LiveSignalsState {
    /// The recommendations file is missing or empty.
    NotAvailable,
    /// The file exists but has no row for the coin.
    CoinNotFound,
    Found(DataFrame),
}

impl LiveSignalsState {
    pub fn resolve(live: &LiveSignals, coin: &str) -> Result<Self> {
        if live.is_empty() {
            return Ok(Self::NotAvailable);
        }
        Ok(match live.rows_for(coin)? {
            Some(rows) => Self::Found(rows),
            None => Self::CoinNotFound,
        })
    }
}

pub fn render(live: &LiveSignals, coin: &str, display: &DisplayConfig) -> Result<ViewOutput> {
    let mut output = ViewOutput::new(View::LiveSignals, "Live BUY/HOLD Recommendations");

    match LiveSignalsState::resolve(live, coin)? {
        LiveSignalsState::NotAvailable => {
            output.notice(
                NoticeLevel::Warning,
                "`live_recommendations.csv` not found. Run live-signal script first.",
            );
        }
        LiveSignalsState::CoinNotFound => {
            output.notice(
                NoticeLevel::Error,
                format!("No live recommendation for {} in live_recommendations.csv.", coin),
            );
        }
        LiveSignalsState::Found(rows) => {
            output.push(Block::Table {
                table: TableSpec::from_frame(&rows, display.max_table_rows)?,
            });
        }
    }

    Ok(output)
}
