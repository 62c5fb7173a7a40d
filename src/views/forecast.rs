use super::artifact::{Block, ChartKind, ChartSpec, LegendItem, LineSeries, NoticeLevel, StrokeStyle, ViewOutput};
use super::{palette, zip_points};
use crate::config::DisplayConfig;
use crate::data::FilteredView;
use crate::error::Result;
use crate::types::{columns, View};

struct SeriesStyle {
    column: &'static str,
    label: &'static str,
    color: &'static str,
    stroke: StrokeStyle,
}

const SERIES: [SeriesStyle; 3] = [
    SeriesStyle {
        column: columns::PRICE,
        label: "Price",
        color: palette::PRICE,
        stroke: StrokeStyle::Solid,
    },
    SeriesStyle {
        column: columns::SARIMA_FORECAST,
        label: "SARIMA",
        color: palette::SARIMA,
        stroke: StrokeStyle::Dashed { length: 5.0 },
    },
    SeriesStyle {
        column: columns::LSTM_FORECAST,
        label: "LSTM",
        color: palette::LSTM,
        stroke: StrokeStyle::Dashed { length: 2.0 },
    },
];

/// Realised price against the one-day-ahead forecasts.
///
/// The plot layers carry no legend of their own, so a legend block keyed to
/// the same colours follows the chart.
pub fn render(dfc: &FilteredView, display: &DisplayConfig) -> Result<ViewOutput> {
    let coin = dfc.coin();
    let title = format!("{} Price & One-Day Forecasts", coin);
    let mut output = ViewOutput::new(View::ForecastComparison, title.clone());

    let candidates: Vec<&str> = SERIES.iter().map(|s| s.column).collect();
    let present = dfc.present(&candidates);
    if present.is_empty() {
        output.notice(
            NoticeLevel::Warning,
            "No price or forecast columns found for this coin/date range.",
        );
        return Ok(output);
    }

    let dates = dfc.dates()?;
    let mut series = Vec::with_capacity(present.len());
    let mut legend = Vec::with_capacity(present.len());
    for style in SERIES.iter().filter(|s| present.contains(&s.column)) {
        series.push(LineSeries {
            key: style.column.to_string(),
            label: style.label.to_string(),
            color: style.color.to_string(),
            stroke: style.stroke,
            width: 2.0,
            show_points: false,
            points: zip_points(&dates, &dfc.values(style.column)?),
        });
        legend.push(LegendItem {
            label: style.label.to_string(),
            color: style.color.to_string(),
        });
    }

    output
        .push(Block::Chart {
            chart: ChartSpec {
                id: "forecast_comparison".to_string(),
                title,
                x_title: Some("Date".to_string()),
                y_title: Some("USD Price".to_string()),
                height: display.forecast_chart_height,
                kind: ChartKind::TimeSeries { series },
            },
        })
        .push(Block::Legend { items: legend });

    Ok(output)
}
