//! Saved domain persistence
//!
//! Saved entries are keyed by domain name (one row per domain) and addressed
//! by numeric id for favorite toggling and deletion.

mod file;
mod memory;

pub use file::JsonFileStore;
pub use memory::MemoryStore;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{DomainGeneratorError, Result};
use crate::types::Availability;

/// A persisted domain
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedDomain {
    pub id: u64,
    pub domain: String,
    pub available: Availability,
    pub favorite: bool,
    pub checked_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Storage collaborator for saved domains
pub trait SavedDomainStore: Send + Sync {
    /// Insert `domain` or refresh its availability if already saved
    fn upsert(&self, domain: &str, available: Availability) -> Result<SavedDomain>;

    /// All saved domains, newest first
    fn list(&self) -> Result<Vec<SavedDomain>>;

    /// Flip the favorite flag; fails with `NotFound` for an unknown id
    fn toggle_favorite(&self, id: u64) -> Result<SavedDomain>;

    /// Remove an entry; fails with `NotFound` for an unknown id
    fn delete(&self, id: u64) -> Result<()>;
}

/// Serializable set of saved domains shared by the store implementations
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedDomains {
    next_id: u64,
    domains: Vec<SavedDomain>,
}

impl SavedDomains {
    pub fn len(&self) -> usize {
        self.domains.len()
    }

    pub fn is_empty(&self) -> bool {
        self.domains.is_empty()
    }

    pub fn upsert(&mut self, domain: &str, available: Availability) -> Result<SavedDomain> {
        let domain = domain.trim().to_lowercase();
        if domain.is_empty() {
            return Err(crate::validation_error!("domain cannot be empty"));
        }

        let now = Utc::now();
        if let Some(existing) = self.domains.iter_mut().find(|d| d.domain == domain) {
            existing.available = available;
            existing.checked_at = Some(now);
            existing.updated_at = now;
            return Ok(existing.clone());
        }

        self.next_id += 1;
        let saved = SavedDomain {
            id: self.next_id,
            domain,
            available,
            favorite: false,
            checked_at: Some(now),
            created_at: now,
            updated_at: now,
        };
        self.domains.push(saved.clone());
        Ok(saved)
    }

    pub fn list(&self) -> Vec<SavedDomain> {
        let mut all = self.domains.clone();
        all.sort_by(|a, b| b.created_at.cmp(&a.created_at).then_with(|| b.id.cmp(&a.id)));
        all
    }

    pub fn toggle_favorite(&mut self, id: u64) -> Result<SavedDomain> {
        let entry = self
            .domains
            .iter_mut()
            .find(|d| d.id == id)
            .ok_or_else(|| DomainGeneratorError::not_found(id))?;
        entry.favorite = !entry.favorite;
        entry.updated_at = Utc::now();
        Ok(entry.clone())
    }

    pub fn delete(&mut self, id: u64) -> Result<()> {
        let index = self
            .domains
            .iter()
            .position(|d| d.id == id)
            .ok_or_else(|| DomainGeneratorError::not_found(id))?;
        self.domains.remove(index);
        Ok(())
    }
}
