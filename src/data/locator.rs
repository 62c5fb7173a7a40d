use crate::config::SelectionPolicy;
use crate::error::{DashboardError, Result};
use std::path::{Path, PathBuf};
use std::time::SystemTime;

/// Finds the active data directory under a base path.
pub struct SourceLocator;

impl SourceLocator {
    /// Pick one subdirectory of `base` whose name starts with `prefix`.
    ///
    /// Candidates are sorted by name before `policy` breaks the tie, so the
    /// result never depends on directory-listing order.
    pub fn locate(base: &Path, prefix: &str, policy: SelectionPolicy) -> Result<PathBuf> {
        let candidates = Self::candidates(base, prefix)?;

        let chosen = match policy {
            SelectionPolicy::FirstByName => candidates.first().cloned(),
            SelectionPolicy::LastByName => candidates.last().cloned(),
            SelectionPolicy::NewestModified => Self::newest(&candidates),
        };

        let chosen = chosen.ok_or_else(|| DashboardError::NoDataDirectory {
            base: base.to_path_buf(),
            prefix: prefix.to_string(),
        })?;

        if candidates.len() > 1 {
            log::warn!(
                "{} candidate data directories under {}; using {} ({:?})",
                candidates.len(),
                base.display(),
                chosen.display(),
                policy
            );
        } else {
            log::info!("Using data directory {}", chosen.display());
        }

        Ok(chosen)
    }

    /// All matching subdirectories, sorted by name.
    pub fn candidates(base: &Path, prefix: &str) -> Result<Vec<PathBuf>> {
        if !base.is_dir() {
            return Err(DashboardError::DataRootNotFound(base.to_path_buf()));
        }

        let mut candidates = Vec::new();
        for entry in std::fs::read_dir(base)? {
            let entry = entry?;
            // Follows symlinks, so a linked data directory still counts.
            let path = entry.path();
            if path.is_dir() && entry.file_name().to_string_lossy().starts_with(prefix) {
                candidates.push(path);
            }
        }
        candidates.sort();

        Ok(candidates)
    }

    fn newest(candidates: &[PathBuf]) -> Option<PathBuf> {
        // Iterating in name order and keeping ties with `>=` lets the later name win.
        let mut best: Option<(SystemTime, &PathBuf)> = None;
        for path in candidates {
            let modified = std::fs::metadata(path)
                .and_then(|m| m.modified())
                .unwrap_or(SystemTime::UNIX_EPOCH);
            match best {
                Some((t, _)) if modified < t => {}
                _ => best = Some((modified, path)),
            }
        }
        best.map(|(_, path)| path.clone())
    }
}
