//! Plan persistence behind a load/save capability
//!
//! The engines never see a store. Callers load a plan, edit it, and save it
//! back; last write wins.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};

use crate::error::Result;
use crate::plan::Plan;

pub trait PlanStore {
    /// `Ok(None)` when nothing usable has been saved yet
    fn load(&self) -> Result<Option<Plan>>;

    fn save(&self, plan: &Plan) -> Result<()>;
}

/// A plan kept as one JSON file
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }
}

impl PlanStore for JsonFileStore {
    fn load(&self) -> Result<Option<Plan>> {
        let json = match fs::read_to_string(&self.path) {
            Ok(json) => json,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                log::debug!("no plan at {}", self.path.display());
                return Ok(None);
            }
            Err(e) => return Err(e.into()),
        };
        Ok(parse_stored(&json, &self.path.display().to_string()))
    }

    fn save(&self, plan: &Plan) -> Result<()> {
        let json = plan.to_json()?;
        let mut tmp = self.path.clone().into_os_string();
        tmp.push(".tmp");
        let tmp = PathBuf::from(tmp);

        fs::write(&tmp, json)?;
        fs::rename(&tmp, &self.path)?;
        log::debug!("saved plan to {}", self.path.display());
        Ok(())
    }
}

/// A plan kept as an in-memory JSON blob
#[derive(Debug, Default)]
pub struct MemoryStore {
    blob: Mutex<Option<String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store seeded with raw JSON, which may or may not be valid
    pub fn with_blob(json: impl Into<String>) -> Self {
        Self {
            blob: Mutex::new(Some(json.into())),
        }
    }

    /// The stored JSON. A panic in another holder leaves the blob intact,
    /// so a poisoned lock is recovered rather than reported.
    pub fn blob(&self) -> Option<String> {
        self.blob.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }
}

impl PlanStore for MemoryStore {
    fn load(&self) -> Result<Option<Plan>> {
        let blob = self.blob();
        Ok(blob.and_then(|json| parse_stored(&json, "memory store")))
    }

    fn save(&self, plan: &Plan) -> Result<()> {
        let json = plan.to_json()?;
        *self.blob.lock().unwrap_or_else(PoisonError::into_inner) = Some(json);
        Ok(())
    }
}

/// Stored data that fails validation is reported and treated as absent
fn parse_stored(json: &str, source: &str) -> Option<Plan> {
    match Plan::from_json(json) {
        Ok(plan) => Some(plan),
        Err(e) => {
            log::error!("ignoring stored plan from {}: {}", source, e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::{Category, Period};

    fn plan() -> Plan {
        let mut plan = Plan::new(Period::new(2025, 5).unwrap());
        plan.update_month("2025-05", Category::Income, 1500.0).unwrap();
        plan
    }

    #[test]
    fn test_file_store_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("plan.json"));

        assert!(store.load().unwrap().is_none());
        store.save(&plan()).unwrap();
        assert!(store.exists());
        assert_eq!(store.load().unwrap(), Some(plan()));
    }

    #[test]
    fn test_file_store_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("plan.json"));
        store.save(&plan()).unwrap();

        let mut edited = plan();
        edited.update_month("2025-06", Category::Expenses, 200.0).unwrap();
        store.save(&edited).unwrap();

        let loaded = store.load().unwrap().unwrap();
        assert_eq!(loaded.months[1].remaining_funds, 1300.0);
    }

    #[test]
    fn test_file_store_ignores_corrupt_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("plan.json");
        fs::write(&path, "{ not valid").unwrap();

        let store = JsonFileStore::new(&path);
        assert!(store.load().unwrap().is_none());
    }

    #[test]
    fn test_memory_store() {
        let store = MemoryStore::new();
        assert!(store.load().unwrap().is_none());

        store.save(&plan()).unwrap();
        assert!(store.blob().unwrap().contains("\"income\": 1500.0"));
        assert_eq!(store.load().unwrap(), Some(plan()));

        let corrupt = MemoryStore::with_blob("[]");
        assert!(corrupt.load().unwrap().is_none());
    }

    #[test]
    fn test_memory_store_survives_poisoned_lock() {
        let store = std::sync::Arc::new(MemoryStore::new());
        store.save(&plan()).unwrap();

        let holder = std::sync::Arc::clone(&store);
        let panicked = std::thread::spawn(move || {
            let _guard = holder.blob.lock().unwrap();
            panic!("writer died holding the lock");
        })
        .join();
        assert!(panicked.is_err());
        assert!(store.blob.is_poisoned());

        assert_eq!(store.load().unwrap(), Some(plan()));
        let mut edited = plan();
        edited.update_month("2025-05", Category::Expenses, 500.0).unwrap();
        store.save(&edited).unwrap();
        assert_eq!(store.load().unwrap(), Some(edited));
    }
}
