use crate::data::dates::{from_epoch_days, to_epoch_days};
use crate::views::{BarPanel, ChartKind, ChartSpec, LineSeries, StrokeStyle};
use crate::ui::theme;
use egui_plot::{Bar, BarChart, GridMark, Line, LineStyle, Plot, PlotPoint, PlotPoints, Points};
use std::ops::RangeInclusive;

/// Paints chart artifacts with egui_plot. Time axes use days since the Unix epoch.
pub struct ChartView;

impl ChartView {
    pub fn show(ui: &mut egui::Ui, chart: &ChartSpec) {
        ui.label(egui::RichText::new(&chart.title).heading().color(theme::TITLE));
        match &chart.kind {
            ChartKind::TimeSeries { series } => Self::time_series(ui, chart, series),
            ChartKind::BarPanels { panels } => Self::bar_panels(ui, chart, panels),
        }
    }

    fn time_series(ui: &mut egui::Ui, chart: &ChartSpec, series: &[LineSeries]) {
        let mut plot = Plot::new(&chart.id)
            .height(chart.height)
            .x_axis_formatter(Self::format_date_mark)
            .label_formatter(|name, value| Self::hover_label(name, value));
        if let Some(title) = &chart.x_title {
            plot = plot.x_axis_label(title.clone());
        }
        if let Some(title) = &chart.y_title {
            plot = plot.y_axis_label(title.clone());
        }

        plot.show(ui, |plot_ui| {
            for line in series {
                let points: Vec<[f64; 2]> = line
                    .points
                    .iter()
                    .map(|(date, value)| [to_epoch_days(*date) as f64, *value])
                    .collect();
                let color = theme::color(&line.color);

                plot_ui.line(
                    Line::new(line.label.clone(), PlotPoints::from(points.clone()))
                        .color(color)
                        .width(line.width)
                        .style(Self::line_style(line.stroke)),
                );
                if line.show_points {
                    plot_ui.points(
                        Points::new(line.label.clone(), PlotPoints::from(points))
                            .color(color)
                            .radius(2.5),
                    );
                }
            }
        });
    }

    /// One plot per metric side by side, each with its own x scale.
    fn bar_panels(ui: &mut egui::Ui, chart: &ChartSpec, panels: &[BarPanel]) {
        if panels.is_empty() {
            return;
        }
        ui.columns(panels.len(), |columns| {
            for (column, panel) in columns.iter_mut().zip(panels) {
                column.label(egui::RichText::new(&panel.metric).strong());

                let names: Vec<String> = panel.bars.iter().map(|(name, _)| name.clone()).collect();
                let bars: Vec<Bar> = panel
                    .bars
                    .iter()
                    .enumerate()
                    .map(|(i, (name, value))| Bar::new(Self::bar_position(i, names.len()), *value).name(name).width(0.6))
                    .collect();
                let count = names.len();

                Plot::new(format!("{}_{}", chart.id, panel.metric))
                    .height(chart.height)
                    .allow_drag(false)
                    .allow_zoom(false)
                    .allow_scroll(false)
                    .show_x(false)
                    .y_axis_formatter(move |mark: GridMark, _range: &RangeInclusive<f64>| {
                        Self::category_label(&names, count, mark.value)
                    })
                    .show(column, |plot_ui| {
                        plot_ui.bar_chart(
                            BarChart::new(panel.metric.clone(), bars)
                                .color(theme::color(&panel.color))
                                .horizontal(),
                        );
                    });
            }
        });
    }

    /// Largest bar on top: the first bar gets the highest y.
    fn bar_position(index: usize, count: usize) -> f64 {
        (count - 1 - index) as f64
    }

    fn category_label(names: &[String], count: usize, value: f64) -> String {
        if value < 0.0 || (value - value.round()).abs() > 1e-6 {
            return String::new();
        }
        let position = value.round() as usize;
        if position >= count {
            return String::new();
        }
        names[count - 1 - position].clone()
    }

    fn line_style(stroke: StrokeStyle) -> LineStyle {
        match stroke {
            StrokeStyle::Solid => LineStyle::Solid,
            StrokeStyle::Dashed { length } => LineStyle::Dashed { length },
        }
    }

    fn format_date_mark(mark: GridMark, _range: &RangeInclusive<f64>) -> String {
        if (mark.value - mark.value.round()).abs() > 1e-6 {
            return String::new();
        }
        from_epoch_days(mark.value.round() as i64)
            .map(|d| d.format("%Y-%m-%d").to_string())
            .unwrap_or_default()
    }

    fn hover_label(name: &str, value: &PlotPoint) -> String {
        let date = from_epoch_days(value.x.round() as i64)
            .map(|d| d.format("%Y-%m-%d").to_string())
            .unwrap_or_default();
        if name.is_empty() {
            format!("Date: {}\n{:.4}", date, value.y)
        } else {
            format!("Date: {}\n{}: {:.4}", date, name, value.y)
        }
    }
}
