pub mod cache;
pub mod connectors;
pub mod datasets;
pub mod dates;
pub mod filter;
pub mod locator;
pub mod paths;

pub use cache::DatasetCache;
pub use connectors::{CsvConnector, DataValidator, DatasetMetadata};
pub use datasets::{BacktestPoint, BacktestSeries, Datasets, LiveSignals, MergedDaily, PerformanceSummary};
pub use filter::{present_features, FilterEngine, FilteredView};
pub use locator::SourceLocator;
pub use paths::{backtest_file_name, DataPaths, FileCheck};
