pub mod artifact;
pub mod backtest;
pub mod forecast;
pub mod live_signals;
pub mod overview;
pub mod palette;
pub mod performance;
pub mod raw_data;
pub mod sentiment;
pub mod table;

pub use artifact::{
    BarPanel, Block, ChartKind, ChartSpec, LegendItem, LineSeries, NoticeLevel, StrokeStyle, TableSpec,
    ViewOutput,
};
pub use live_signals::LiveSignalsState;
pub use table::CellFormat;

use crate::config::DisplayConfig;
use crate::data::{Datasets, FilterEngine, FilteredView};
use crate::error::Result;
use crate::types::{DateRange, View};
use chrono::NaiveDate;

/// Coin and date interval chosen in the sidebar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub coin: String,
    pub range: DateRange,
}

/// Dispatches a view to its renderer, deriving `dfc` on every call.
pub struct ViewRenderer<'a> {
    datasets: &'a Datasets,
    display: &'a DisplayConfig,
    slide_pattern: &'a str,
}

impl<'a> ViewRenderer<'a> {
    pub fn new(datasets: &'a Datasets, display: &'a DisplayConfig, slide_pattern: &'a str) -> Self {
        Self {
            datasets,
            display,
            slide_pattern,
        }
    }

    /// Never fails: renderer errors come back as an error notice for that view only.
    pub fn render(&self, view: View, selection: Option<&Selection>) -> ViewOutput {
        match self.try_render(view, selection) {
            Ok(output) => output,
            Err(e) => {
                log::error!("Rendering {} failed: {}", view.label(), e);
                let mut output = ViewOutput::new(view, view.label());
                output.notice(NoticeLevel::Error, format!("Could not render {}: {}", view.label(), e));
                output
            }
        }
    }

    fn try_render(&self, view: View, selection: Option<&Selection>) -> Result<ViewOutput> {
        match (view, selection) {
            (View::Overview, _) => Ok(overview::render(&self.datasets.paths.slides_dir, self.slide_pattern)),
            (View::PerformanceMetrics, _) => performance::render(&self.datasets.perf, self.display),
            (_, None) => {
                let mut output = ViewOutput::new(view, view.label());
                output.notice(NoticeLevel::Info, "Select a coin and a date range in the sidebar.");
                Ok(output)
            }
            (View::SentimentFeatures, Some(s)) => sentiment::render(&self.filtered(s)?, self.display),
            (View::ForecastComparison, Some(s)) => forecast::render(&self.filtered(s)?, self.display),
            (View::BacktestResults, Some(s)) => backtest::render_for(&self.datasets.paths, &s.coin, self.display),
            (View::LiveSignals, Some(s)) => live_signals::render(&self.datasets.live, &s.coin, self.display),
            (View::RawData, Some(s)) => raw_data::render(&self.filtered(s)?, &self.datasets.merged, self.display),
        }
    }

    fn filtered(&self, selection: &Selection) -> Result<FilteredView> {
        FilterEngine::filter(self.datasets.merged.frame(), &selection.coin, selection.range)
    }
}

type RenderKey = (View, Option<Selection>);

/// Keeps the last rendered view and reuses it until the view or the
/// selection changes. Repaints alone never touch disk or re-filter.
#[derive(Default)]
pub struct ViewMemo {
    current: Option<(RenderKey, ViewOutput)>,
    renders: usize,
}

impl ViewMemo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_or_render(
        &mut self,
        renderer: &ViewRenderer<'_>,
        view: View,
        selection: Option<&Selection>,
    ) -> &ViewOutput {
        let key = (view, selection.cloned());
        if self.current.as_ref().is_some_and(|(cached, _)| *cached != key) {
            self.current = None;
        }

        let renders = &mut self.renders;
        let (_, output) = self.current.get_or_insert_with(|| {
            *renders += 1;
            log::debug!("Rendering {}", view.label());
            (key, renderer.render(view, selection))
        });
        output
    }

    /// Number of renders actually performed.
    pub fn render_count(&self) -> usize {
        self.renders
    }
}

/// Pair dates with values, dropping rows where either is missing.
pub(crate) fn zip_points(dates: &[Option<NaiveDate>], values: &[Option<f64>]) -> Vec<(NaiveDate, f64)> {
    dates
        .iter()
        .zip(values)
        .filter_map(|(date, value)| Some(((*date)?, (*value)?)))
        .collect()
}
