use super::artifact::TableSpec;
use crate::error::Result;
use polars::prelude::*;

/// Per-column number format overriding the default.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CellFormat {
    /// `{:.N}`
    Fixed(usize),
    /// Multiply by 100, `{:.N}%`
    Percent(usize),
}

impl CellFormat {
    fn apply(&self, value: f64) -> String {
        match self {
            Self::Fixed(decimals) => format!("{:.*}", decimals, value),
            Self::Percent(decimals) => format!("{:.*}%", decimals, value * 100.0),
        }
    }
}

impl TableSpec {
    /// First `max_rows` rows of `df` as display strings.
    pub fn from_frame(df: &DataFrame, max_rows: usize) -> Result<Self> {
        Self::from_frame_formatted(df, max_rows, &[])
    }

    pub fn from_frame_formatted(
        df: &DataFrame,
        max_rows: usize,
        formats: &[(&str, CellFormat)],
    ) -> Result<Self> {
        let columns: Vec<String> = df.get_column_names().iter().map(|s| s.to_string()).collect();
        let shown = max_rows.min(df.height());

        let mut rendered_columns: Vec<Vec<String>> = Vec::with_capacity(columns.len());
        for column in df.get_columns() {
            let format = formats
                .iter()
                .find(|(name, _)| *name == column.name().as_str())
                .map(|(_, f)| *f);

            let cells = match format {
                Some(format) => {
                    let values = column.cast(&DataType::Float64)?;
                    values
                        .f64()?
                        .into_iter()
                        .take(shown)
                        .map(|v| v.map(|v| format.apply(v)).unwrap_or_default())
                        .collect()
                }
                None => {
                    let mut cells = Vec::with_capacity(shown);
                    for i in 0..shown {
                        cells.push(format_value(&column.get(i)?));
                    }
                    cells
                }
            };
            rendered_columns.push(cells);
        }

        let rows = (0..shown)
            .map(|i| rendered_columns.iter().map(|col| col[i].clone()).collect())
            .collect();

        Ok(TableSpec {
            columns,
            rows,
            total_rows: df.height(),
        })
    }
}

fn format_value(value: &AnyValue) -> String {
    match value {
        AnyValue::Null => String::new(),
        AnyValue::String(s) => s.to_string(),
        AnyValue::StringOwned(s) => s.to_string(),
        AnyValue::Float64(v) => format!("{:.4}", v),
        AnyValue::Float32(v) => format!("{:.4}", v),
        other => other.to_string(),
    }
}
