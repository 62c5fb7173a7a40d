use super::artifact::{Block, ChartKind, ChartSpec, LineSeries, NoticeLevel, StrokeStyle, ViewOutput};
use super::{palette, zip_points};
use crate::config::DisplayConfig;
use crate::data::FilteredView;
use crate::error::Result;
use crate::types::{columns, View};

/// Candidate sentiment columns, in plotting order.
pub const FEATURES: [&str; 4] = [
    columns::NEWS_COUNT,
    columns::PCT_POSITIVE,
    columns::PCT_NEGATIVE,
    columns::AVG_COMPOUND,
];

/// One line per sentiment feature present in `dfc`.
pub fn render(dfc: &FilteredView, display: &DisplayConfig) -> Result<ViewOutput> {
    let coin = dfc.coin();
    let mut output = ViewOutput::new(View::SentimentFeatures, format!("News & Sentiment for {}", coin));
    output.push(Block::Text {
        text: format!("Columns present: {}", dfc.column_names().join(", ")),
    });

    let features = dfc.present(&FEATURES);
    if features.is_empty() {
        output.notice(NoticeLevel::Warning, "No sentiment features found in this slice.");
        return Ok(output);
    }

    if dfc.is_empty() {
        output.notice(
            NoticeLevel::Info,
            format!("No rows for {} between {} and {}.", coin, dfc.range().start, dfc.range().end),
        );
    }

    let dates = dfc.dates()?;
    let mut series = Vec::with_capacity(features.len());
    for feature in features {
        let color = palette::sentiment_color(feature).unwrap_or(palette::NEWS_COUNT);
        series.push(LineSeries {
            key: feature.to_string(),
            label: feature.to_string(),
            color: color.to_string(),
            stroke: StrokeStyle::Solid,
            width: 2.0,
            show_points: false,
            points: zip_points(&dates, &dfc.values(feature)?),
        });
    }

    output.push(Block::Chart {
        chart: ChartSpec {
            id: "sentiment_features".to_string(),
            title: format!("News & Sentiment Features for {}", coin),
            x_title: Some("Date".to_string()),
            y_title: None,
            height: display.chart_height,
            kind: ChartKind::TimeSeries { series },
        },
    });

    Ok(output)
}
