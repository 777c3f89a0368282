//! JSON file backed saved domain store

use std::path::{Path, PathBuf};

use parking_lot::RwLock;

use super::{SavedDomain, SavedDomainStore, SavedDomains};
use crate::error::{DomainGeneratorError, Result};
use crate::types::Availability;

/// Store that rewrites a JSON document after every change
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    inner: RwLock<SavedDomains>,
}

impl JsonFileStore {
    /// Open the store at `path`; a missing file is an empty store
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let saved = if path.exists() {
            Self::load(&path)?
        } else {
            SavedDomains::default()
        };

        tracing::debug!(path = %path.display(), entries = %saved.len(), "Saved domain store opened");

        Ok(Self {
            path,
            inner: RwLock::new(saved),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(path: &Path) -> Result<SavedDomains> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            DomainGeneratorError::io(e.to_string(), Some(path.to_string_lossy().to_string()))
        })?;

        serde_json::from_str(&content).map_err(|e| DomainGeneratorError::parse(e.to_string(), Some(content)))
    }

    fn save(&self, saved: &SavedDomains) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| {
                DomainGeneratorError::io(e.to_string(), Some(parent.to_string_lossy().to_string()))
            })?;
        }

        let content = serde_json::to_string_pretty(saved).map_err(|e| {
            DomainGeneratorError::internal(format!("Failed to serialize saved domains: {}", e))
        })?;

        std::fs::write(&self.path, content).map_err(|e| {
            DomainGeneratorError::io(e.to_string(), Some(self.path.to_string_lossy().to_string()))
        })
    }

    /// Apply `change` to a copy, persist it, then publish it.
    /// A failed write leaves the in-memory state untouched.
    fn mutate<T>(&self, change: impl FnOnce(&mut SavedDomains) -> Result<T>) -> Result<T> {
        let mut guard = self.inner.write();
        let mut next = guard.clone();
        let value = change(&mut next)?;
        self.save(&next)?;
        *guard = next;
        Ok(value)
    }
}

impl SavedDomainStore for JsonFileStore {
    fn upsert(&self, domain: &str, available: Availability) -> Result<SavedDomain> {
        self.mutate(|saved| saved.upsert(domain, available))
    }

    fn list(&self) -> Result<Vec<SavedDomain>> {
        Ok(self.inner.read().list())
    }

    fn toggle_favorite(&self, id: u64) -> Result<SavedDomain> {
        self.mutate(|saved| saved.toggle_favorite(id))
    }

    fn delete(&self, id: u64) -> Result<()> {
        self.mutate(|saved| saved.delete(id))
    }
}
