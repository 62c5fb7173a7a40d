//! Display artifacts produced by the view renderers.
//!
//! Renderers only build these values; the UI paints them and the export
//! service serialises charts to JSON.

use crate::types::View;
use chrono::NaiveDate;
use serde::Serialize;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeLevel {
    Info,
    Warning,
    Error,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum StrokeStyle {
    Solid,
    Dashed { length: f32 },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineSeries {
    /// Column or strategy the series was built from.
    pub key: String,
    pub label: String,
    /// `#RRGGBB`
    pub color: String,
    pub stroke: StrokeStyle,
    pub width: f32,
    pub show_points: bool,
    pub points: Vec<(NaiveDate, f64)>,
}

/// One independently scaled panel of a grouped bar chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BarPanel {
    pub metric: String,
    pub color: String,
    /// (category, value), largest value first.
    pub bars: Vec<(String, f64)>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ChartKind {
    TimeSeries { series: Vec<LineSeries> },
    BarPanels { panels: Vec<BarPanel> },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSpec {
    pub id: String,
    pub title: String,
    pub x_title: Option<String>,
    pub y_title: Option<String>,
    pub height: f32,
    #[serde(flatten)]
    pub kind: ChartKind,
}

impl ChartSpec {
    pub fn series(&self) -> &[LineSeries] {
        match &self.kind {
            ChartKind::TimeSeries { series } => series,
            ChartKind::BarPanels { .. } => &[],
        }
    }

    pub fn panels(&self) -> &[BarPanel] {
        match &self.kind {
            ChartKind::BarPanels { panels } => panels,
            ChartKind::TimeSeries { .. } => &[],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LegendItem {
    pub label: String,
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableSpec {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
    /// Rows in the source frame; larger than `rows.len()` when truncated.
    pub total_rows: usize,
}

impl TableSpec {
    pub fn is_truncated(&self) -> bool {
        self.total_rows > self.rows.len()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "block", rename_all = "snake_case")]
pub enum Block {
    Notice { level: NoticeLevel, text: String },
    Text { text: String },
    Section { heading: String, bullets: Vec<String> },
    Subheading { text: String },
    Chart { chart: ChartSpec },
    Legend { items: Vec<LegendItem> },
    Table { table: TableSpec },
    Images { paths: Vec<PathBuf> },
}

/// Everything one view shows, top to bottom.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ViewOutput {
    pub view: View,
    pub title: String,
    pub blocks: Vec<Block>,
}

impl ViewOutput {
    pub fn new(view: View, title: impl Into<String>) -> Self {
        Self {
            view,
            title: title.into(),
            blocks: Vec::new(),
        }
    }

    pub fn push(&mut self, block: Block) -> &mut Self {
        self.blocks.push(block);
        self
    }

    pub fn notice(&mut self, level: NoticeLevel, text: impl Into<String>) -> &mut Self {
        self.push(Block::Notice { level, text: text.into() })
    }

    pub fn notices(&self) -> Vec<(NoticeLevel, &str)> {
        self.blocks
            .iter()
            .filter_map(|b| match b {
                Block::Notice { level, text } => Some((*level, text.as_str())),
                _ => None,
            })
            .collect()
    }

    pub fn has_notice(&self, level: NoticeLevel) -> bool {
        self.notices().iter().any(|(l, _)| *l == level)
    }

    pub fn charts(&self) -> Vec<&ChartSpec> {
        self.blocks
            .iter()
            .filter_map(|b| match b {
                Block::Chart { chart } => Some(chart),
                _ => None,
            })
            .collect()
    }

    pub fn tables(&self) -> Vec<&TableSpec> {
        self.blocks
            .iter()
            .filter_map(|b| match b {
                Block::Table { table } => Some(table),
                _ => None,
            })
            .collect()
    }

    pub fn legend(&self) -> Option<&[LegendItem]> {
        self.blocks.iter().find_map(|b| match b {
            Block::Legend { items } => Some(items.as_slice()),
            _ => None,
        })
    }
}
