//! In-memory saved domain store

use parking_lot::RwLock;

use super::{SavedDomain, SavedDomainStore, SavedDomains};
use crate::error::Result;
use crate::types::Availability;

/// Store that lives for the duration of the process
#[derive(Debug, Default)]
pub struct MemoryStore {
    inner: RwLock<SavedDomains>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SavedDomainStore for MemoryStore {
    fn upsert(&self, domain: &str, available: Availability) -> Result<SavedDomain> {
        self.inner.write().upsert(domain, available)
    }

    fn list(&self) -> Result<Vec<SavedDomain>> {
        Ok(self.inner.read().list())
    }

    fn toggle_favorite(&self, id: u64) -> Result<SavedDomain> {
        self.inner.write().toggle_favorite(id)
    }

    fn delete(&self, id: u64) -> Result<()> {
        self.inner.write().delete(id)
    }
}
