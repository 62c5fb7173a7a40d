use crate::error::{DashboardError, Result};
use crate::views::ChartSpec;
use std::path::{Path, PathBuf};

pub struct ChartExporter;

impl ChartExporter {
    pub fn to_json(chart: &ChartSpec) -> Result<String> {
        Ok(serde_json::to_string_pretty(chart)?)
    }

    pub fn write(chart: &ChartSpec, path: &Path) -> Result<()> {
        let json = Self::to_json(chart)?;
        std::fs::write(path, json)
            .map_err(|e| DashboardError::Export(format!("Failed to write {}: {}", path.display(), e)))?;
        log::info!("Exported chart {} to {}", chart.id, path.display());
        Ok(())
    }

    /// Ask for a target file and write the chart. `Ok(None)` if the dialog was cancelled.
    pub fn export_with_dialog(chart: &ChartSpec) -> Result<Option<PathBuf>> {
        let Some(path) = rfd::FileDialog::new()
            .add_filter("JSON", &["json"])
            .set_file_name(format!("{}.json", chart.id))
            .save_file()
        else {
            return Ok(None);
        };
        Self::write(chart, &path)?;
        Ok(Some(path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::views::{ChartKind, LineSeries, StrokeStyle};
    use chrono::NaiveDate;

    fn chart() -> ChartSpec {
        ChartSpec {
            id: "forecast_comparison".to_string(),
            title: "Bitcoin Price & One-Day Forecasts".to_string(),
            x_title: Some("Date".to_string()),
            y_title: Some("USD Price".to_string()),
            height: 400.0,
            kind: ChartKind::TimeSeries {
                series: vec![LineSeries {
                    key: "sarima_forecast".to_string(),
                    label: "SARIMA".to_string(),
                    color: "#FFAB00".to_string(),
                    stroke: StrokeStyle::Dashed { length: 5.0 },
                    width: 2.0,
                    show_points: false,
                    points: vec![(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(), 42000.0)],
                }],
            },
        }
    }

    #[test]
    fn test_to_json_shape() {
        let json: serde_json::Value = serde_json::from_str(&ChartExporter::to_json(&chart()).unwrap()).unwrap();
        assert_eq!(json["kind"], "time_series");
        assert_eq!(json["series"][0]["color"], "#FFAB00");
        assert_eq!(json["series"][0]["stroke"]["type"], "dashed");
        assert_eq!(json["series"][0]["points"][0][0], "2024-01-01");
    }

    #[test]
    fn test_write_creates_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("chart.json");
        ChartExporter::write(&chart(), &path).unwrap();
        assert!(std::fs::read_to_string(path).unwrap().contains("USD Price"));
    }
}
