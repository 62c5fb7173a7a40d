use super::datasets::Datasets;
use super::paths::DataPaths;
use crate::error::Result;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

/// Memoizes the eager dataset load per set of paths.
///
/// One instance per session. Entries are written once and never invalidated;
/// constructing a new cache is the only way to force a reload.
#[derive(Default)]
pub struct DatasetCache {
    data: Mutex<HashMap<DataPaths, Arc<Datasets>>>,
    loads: AtomicUsize,
}

impl DatasetCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the cached datasets for `paths`, reading disk only on the first call.
    /// Failed loads are not cached.
    pub fn get_or_load(&self, paths: &DataPaths) -> Result<Arc<Datasets>> {
        let mut data = self.data.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(datasets) = data.get(paths) {
            return Ok(Arc::clone(datasets));
        }

        log::info!("Loading datasets from {}", paths.root.display());
        self.loads.fetch_add(1, Ordering::Relaxed);
        let datasets = Arc::new(Datasets::load(paths)?);
        data.insert(paths.clone(), Arc::clone(&datasets));
        Ok(datasets)
    }

    /// Number of times the loader actually went to disk.
    pub fn load_count(&self) -> usize {
        self.loads.load(Ordering::Relaxed)
    }
}
