use super::artifact::{BarPanel, Block, ChartKind, ChartSpec, NoticeLevel, TableSpec, ViewOutput};
use super::palette;
use super::table::CellFormat;
use crate::config::DisplayConfig;
use crate::data::{present_features, PerformanceSummary};
use crate::error::Result;
use crate::types::{columns, View};

const FORMATS: [(&str, CellFormat); 3] = [
    (columns::RMSE, CellFormat::Fixed(2)),
    (columns::MAPE, CellFormat::Percent(2)),
    (columns::DIR_ACC, CellFormat::Percent(0)),
];

/// Summary table plus one independently scaled bar panel per metric.
pub fn render(perf: &PerformanceSummary, display: &DisplayConfig) -> Result<ViewOutput> {
    let mut output = ViewOutput::new(View::PerformanceMetrics, "Walk-Forward Performance Summary");

    if perf.is_empty() {
        output.notice(
            NoticeLevel::Warning,
            "`walk_forward_summary.csv` not found. Run walk-forward script first.",
        );
        return Ok(output);
    }

    output.push(Block::Subheading { text: "Summary Table".to_string() });
    output.push(Block::Table {
        table: TableSpec::from_frame_formatted(perf.frame(), display.max_table_rows, &FORMATS)?,
    });

    let schema: Vec<String> = perf.frame().get_column_names().iter().map(|s| s.to_string()).collect();
    let metrics = present_features(&schema, &PerformanceSummary::METRICS);
    if metrics.is_empty() {
        output.notice(NoticeLevel::Warning, "No RMSE, MAPE or DirAcc columns to compare.");
        return Ok(output);
    }

    let strategies = perf.strategies()?;
    let mut panels = Vec::with_capacity(metrics.len());
    for metric in metrics {
        let Some(values) = perf.metric(metric)? else {
            continue;
        };
        let mut bars: Vec<(String, f64)> = strategies
            .iter()
            .zip(values)
            .filter_map(|(strategy, value)| value.map(|v| (strategy.clone(), v)))
            .collect();
        bars.sort_by(|a, b| b.1.total_cmp(&a.1));

        panels.push(BarPanel {
            metric: metric.to_string(),
            color: palette::metric_color(metric).to_string(),
            bars,
        });
    }

    output.push(Block::Subheading { text: "Metric Comparison".to_string() });
    output.push(Block::Chart {
        chart: ChartSpec {
            id: "performance_metrics".to_string(),
            title: "Metric Comparison".to_string(),
            x_title: None,
            y_title: None,
            height: display.bar_panel_height,
            kind: ChartKind::BarPanels { panels },
        },
    });

    Ok(output)
}
