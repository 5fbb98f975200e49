use std::fs;
use std::path::{Path, PathBuf};

use crate::errors::{Result, StorageError};
use crate::goals::goals_model::MonthRecord;
use crate::goals::goals_traits::MonthRepositoryTrait;
use crate::plans::plans_model::PlanRecord;
use crate::plans::plans_traits::PlanRepositoryTrait;
use crate::storage::store_model::{seed_data, DashboardData, DATA_VERSION};

/// JSON snapshot store for the dashboard data.
///
/// Reads never fail: a missing, unreadable or malformed snapshot falls back
/// to the built-in seed dataset. Writes replace the snapshot atomically via
/// a temp file in the same directory.
pub struct LocalStore {
    path: PathBuf,
}

impl LocalStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Resolve the snapshot path from `GOALFOLIO_DATA_PATH`, falling back
    /// to the platform data directory.
    pub fn open_default() -> Result<Self> {
        Ok(Self::new(resolve_data_path()?))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the full snapshot, falling back to the seed dataset on any
    /// read or parse failure.
    pub fn load(&self) -> DashboardData {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                log::debug!("no snapshot at {}, using seed data", self.path.display());
                return seed_data();
            }
            Err(e) => {
                log::warn!(
                    "snapshot at {} unreadable ({}), using seed data",
                    self.path.display(),
                    e
                );
                return seed_data();
            }
        };

        match serde_json::from_str::<DashboardData>(&text) {
            Ok(data) if data.version == DATA_VERSION => data,
            Ok(data) => {
                log::warn!(
                    "snapshot version {} unsupported (expected {}), using seed data",
                    data.version,
                    DATA_VERSION
                );
                seed_data()
            }
            Err(e) => {
                log::warn!(
                    "snapshot at {} malformed ({}), using seed data",
                    self.path.display(),
                    e
                );
                seed_data()
            }
        }
    }

    /// Persist the full snapshot.
    pub fn save(&self, data: &DashboardData) -> Result<()> {
        self.save_inner(data)?;
        log::debug!("snapshot written to {}", self.path.display());
        Ok(())
    }

    fn save_inner(&self, data: &DashboardData) -> std::result::Result<(), StorageError> {
        let dir = self
            .path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("."));
        fs::create_dir_all(&dir)?;

        let text = serde_json::to_string_pretty(data)? + "\n";
        let tmp_path = dir.join(format!(".dashboard.json.tmp.{}", std::process::id()));

        fs::write(&tmp_path, text.as_bytes())?;
        fs::rename(&tmp_path, &self.path).map_err(|e| {
            let _ = fs::remove_file(&tmp_path);
            StorageError::Io(e)
        })?;

        Ok(())
    }
}

fn resolve_data_path() -> std::result::Result<PathBuf, StorageError> {
    if let Ok(p) = std::env::var("GOALFOLIO_DATA_PATH") {
        let p = p.trim().to_string();
        if !p.is_empty() {
            return Ok(PathBuf::from(p));
        }
    }

    let base = std::env::var("XDG_DATA_HOME")
        .ok()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .map(PathBuf::from)
        .or_else(|| {
            std::env::var("HOME")
                .ok()
                .or_else(|| std::env::var("USERPROFILE").ok())
                .map(|h| Path::new(&h).join(".local").join("share"))
        })
        .ok_or(StorageError::PathUnresolved)?;

    Ok(base.join("goalfolio").join("dashboard.json"))
}

impl MonthRepositoryTrait for LocalStore {
    fn load_months(&self) -> Result<Vec<MonthRecord>> {
        Ok(self.load().months)
    }

    fn save_months(&self, months: &[MonthRecord]) -> Result<()> {
        let mut data = self.load();
        data.months = months.to_vec();
        self.save(&data)
    }
}

impl PlanRepositoryTrait for LocalStore {
    fn load_plans(&self) -> Result<Vec<PlanRecord>> {
        Ok(self.load().plans)
    }

    fn save_plans(&self, plans: &[PlanRecord]) -> Result<()> {
        let mut data = self.load();
        data.plans = plans.to_vec();
        self.save(&data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_snapshot_falls_back_to_seed() {
        let dir = tempfile::tempdir().unwrap();
        let store = LocalStore::new(dir.path().join("dashboard.json"));

        let data = store.load();
        assert_eq!(data.version, DATA_VERSION);
        assert_eq!(data.months.len(), 1);
        assert_eq!(data.months[0].goals.len(), 5);
        assert_eq!(data.plans.len(), 4);
    }

    #[test]
    fn corrupt_snapshot_falls_back_to_seed_without_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dashboard.json");
        fs::write(&path, "{not json at all").unwrap();

        let store = LocalStore::new(&path);
        let data = store.load();
        assert_eq!(data.plans.len(), 4, "corrupt data must yield the seed");
    }

    #[test]
    fn unsupported_version_falls_back_to_seed() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dashboard.json");
        fs::write(&path, r#"{"version":99,"months":[],"plans":[]}"#).unwrap();

        let store = LocalStore::new(&path);
        let data = store.load();
        assert_eq!(data.version, DATA_VERSION);
        assert_eq!(data.months.len(), 1);
    }

    #[test]
    fn save_then_load_round_trips_edits() {
        let dir = tempfile::tempdir().unwrap();
        let store = LocalStore::new(dir.path().join("dashboard.json"));

        let mut data = store.load();
        data.months[0].goals[0].progress = 17;
        data.plans[0].actual_sum = 250000.0;
        store.save(&data).unwrap();

        let reloaded = store.load();
        assert_eq!(reloaded.months[0].goals[0].progress, 17);
        assert_eq!(reloaded.plans[0].actual_sum, 250000.0);
    }
}
