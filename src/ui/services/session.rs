use crate::config::ConfigManager;
use crate::data::{DataPaths, DatasetCache, Datasets, SourceLocator};
use crate::error::Result;
use std::sync::Arc;

/// Everything one dashboard session owns: its configuration, the chosen data
/// root and a private dataset cache.
pub struct Session {
    config: ConfigManager,
    paths: DataPaths,
    cache: DatasetCache,
}

impl Session {
    /// Locate the data root and load the eager datasets.
    ///
    /// Any error here is fatal for the dashboard: no view may be shown.
    pub fn start(config: ConfigManager) -> Result<Self> {
        let data = &config.get().data;
        let root = SourceLocator::locate(&data.base_dir, &data.dir_prefix, data.selection)?;
        let paths = DataPaths::new(&root, data);

        for check in paths.file_checks() {
            log::info!("{}: {} -> {}", check.name, check.file_name, if check.exists { "found" } else { "missing" });
        }

        let session = Self {
            config,
            paths,
            cache: DatasetCache::new(),
        };
        session.datasets()?;
        Ok(session)
    }

    /// The cached datasets. Only the first call reads disk.
    pub fn datasets(&self) -> Result<Arc<Datasets>> {
        self.cache.get_or_load(&self.paths)
    }

    pub fn config(&self) -> &ConfigManager {
        &self.config
    }

    pub fn paths(&self) -> &DataPaths {
        &self.paths
    }

    pub fn cache(&self) -> &DatasetCache {
        &self.cache
    }
}
