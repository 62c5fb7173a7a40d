use super::artifact::{Block, ChartKind, ChartSpec, LegendItem, LineSeries, NoticeLevel, StrokeStyle, ViewOutput};
use super::palette;
use crate::config::DisplayConfig;
use crate::data::{backtest_file_name, BacktestSeries, DataPaths};
use crate::error::Result;
use crate::types::View;

/// Load the coin's backtest file on demand and render it.
pub fn render_for(paths: &DataPaths, coin: &str, display: &DisplayConfig) -> Result<ViewOutput> {
    match BacktestSeries::load(paths, coin) {
        Ok(series) => render(coin, series.as_ref(), display),
        Err(e) => {
            let mut output = ViewOutput::new(View::BacktestResults, title(coin));
            output.notice(
                NoticeLevel::Error,
                format!("Failed to read backtest file {}: {}", backtest_file_name(coin), e),
            );
            Ok(output)
        }
    }
}

/// One coloured line per strategy column. `None` means the file does not exist.
pub fn render(coin: &str, series: Option<&BacktestSeries>, display: &DisplayConfig) -> Result<ViewOutput> {
    let mut output = ViewOutput::new(View::BacktestResults, title(coin));

    let Some(backtest) = series else {
        output.notice(
            NoticeLevel::Error,
            format!("Backtest file not found: {}", backtest_file_name(coin)),
        );
        return Ok(output);
    };

    let points = backtest.long_form()?;
    let mut unknown = 0;
    let mut lines = Vec::new();
    for strategy in backtest.strategies() {
        let color = palette::strategy_color(&strategy, unknown);
        if !palette::is_known_strategy(&strategy) {
            unknown += 1;
        }
        let mut curve: Vec<_> = points
            .iter()
            .filter(|p| p.strategy == strategy)
            .map(|p| (p.date, p.cumulative_return))
            .collect();
        curve.sort_by_key(|(date, _)| *date);

        lines.push(LineSeries {
            key: strategy.clone(),
            label: strategy,
            color: color.to_string(),
            stroke: StrokeStyle::Solid,
            width: 2.0,
            show_points: true,
            points: curve,
        });
    }

    if lines.is_empty() {
        output.notice(NoticeLevel::Warning, "Backtest file has no strategy columns.");
        return Ok(output);
    }

    let legend = lines
        .iter()
        .map(|line| LegendItem {
            label: line.label.clone(),
            color: line.color.clone(),
        })
        .collect();

    output
        .push(Block::Chart {
            chart: ChartSpec {
                id: "backtest_results".to_string(),
                title: title(coin),
                x_title: Some("Date".to_string()),
                y_title: Some("Equity Curve".to_string()),
                height: display.chart_height,
                kind: ChartKind::TimeSeries { series: lines },
            },
        })
        .push(Block::Legend { items: legend });

    Ok(output)
}

fn title(coin: &str) -> String {
    format!("Cumulative Returns for {}", coin)
}
