use super::traits::ConfigSection;
use crate::error::DashboardError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub max_table_rows: usize,
    pub chart_height: f32,
    pub forecast_chart_height: f32,
    pub bar_panel_height: f32,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            max_table_rows: 500,
            chart_height: 300.0,
            forecast_chart_height: 400.0,
            bar_panel_height: 200.0,
        }
    }
}

impl ConfigSection for DisplayConfig {
    fn section_name() -> &'static str {
        "display"
    }

    fn validate(&self) -> Result<(), DashboardError> {
        if self.max_table_rows == 0 {
            return Err(DashboardError::Configuration(
                "max_table_rows must be at least 1".to_string()
            ));
        }
        for (name, height) in [
            ("chart_height", self.chart_height),
            ("forecast_chart_height", self.forecast_chart_height),
            ("bar_panel_height", self.bar_panel_height),
        ] {
            if !(height.is_finite() && height > 0.0) {
                return Err(DashboardError::Configuration(format!(
                    "{} must be positive, got {}",
                    name, height
                )));
            }
        }
        Ok(())
    }
}
