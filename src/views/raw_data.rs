use super::artifact::{Block, TableSpec, ViewOutput};
use crate::config::DisplayConfig;
use crate::data::{FilteredView, MergedDaily};
use crate::error::Result;
use crate::types::View;

pub fn render(dfc: &FilteredView, merged: &MergedDaily, display: &DisplayConfig) -> Result<ViewOutput> {
    let mut output = ViewOutput::new(View::RawData, "Raw Merged Data");
    output
        .push(Block::Text { text: "Filtered for your selection:".to_string() })
        .push(Block::Table {
            table: TableSpec::from_frame(dfc.frame(), display.max_table_rows)?,
        })
        .push(Block::Text { text: "Full merged dataset:".to_string() })
        .push(Block::Table {
            table: TableSpec::from_frame(merged.frame(), display.max_table_rows)?,
        });
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::FilterEngine;
    use crate::types::DateRange;
    use chrono::NaiveDate;
    use polars::df;

    #[test]
    fn test_tables_are_capped() {
        let merged = MergedDaily::from_frame(
            df! {
                "date" => &["2024-01-01", "2024-01-02", "2024-01-03"],
                "crypto_name" => &["Bitcoin", "Bitcoin", "Ethereum"],
            }
            .unwrap(),
            "merged_daily.csv",
        )
        .unwrap();
        let day = |d| NaiveDate::from_ymd_opt(2024, 1, d).unwrap();
        let dfc = FilterEngine::filter(merged.frame(), "Bitcoin", DateRange::new(day(1), day(3))).unwrap();
        let display = DisplayConfig {
            max_table_rows: 1,
            ..DisplayConfig::default()
        };

        let output = render(&dfc, &merged, &display).unwrap();
        let tables = output.tables();
        assert_eq!(tables[0].total_rows, 2);
        assert_eq!(tables[1].total_rows, 3);
        assert!(tables.iter().all(|t| t.rows.len() == 1 && t.is_truncated()));
    }
}
