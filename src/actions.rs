//! Request-driven operations for a presentation layer

use serde::{Deserialize, Serialize};

use crate::config::{GeneratorConfig, SearchConfig, Settings};
use crate::domain::AvailabilityResolver;
use crate::error::Result;
use crate::generate::NameGenerator;
use crate::search::{AvailabilitySearch, CancelFlag, SearchReport};
use crate::storage::{SavedDomain, SavedDomainStore};
use crate::types::{Availability, AvailabilityResult, DomainAvailability, GenerationReport, GeneratorOptions};

/// Acknowledgement returned by [`DomainActions::delete_domain`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteOutcome {
    pub success: bool,
}

/// Generation, checking and saved-domain operations behind one handle
pub struct DomainActions<S> {
    resolver: AvailabilityResolver,
    generator_config: GeneratorConfig,
    search_config: SearchConfig,
    store: S,
}

impl<S: SavedDomainStore> DomainActions<S> {
    pub fn new(
        resolver: AvailabilityResolver,
        generator_config: GeneratorConfig,
        search_config: SearchConfig,
        store: S,
    ) -> Self {
        Self {
            resolver,
            generator_config,
            search_config,
            store,
        }
    }

    /// Build from loaded settings with the given store
    pub fn from_settings(settings: &Settings, store: S) -> Self {
        Self::new(
            AvailabilityResolver::with_config(&settings.check),
            settings.generator.clone(),
            settings.search.clone(),
            store,
        )
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn resolver(&self) -> &AvailabilityResolver {
        &self.resolver
    }

    /// Generate a batch of unique candidate domains
    pub fn generate_domains(&self, options: &GeneratorOptions) -> Result<GenerationReport> {
        NameGenerator::with_config(self.generator_config.clone()).generate(options)
    }

    pub async fn check_availability(&self, domain: &str) -> AvailabilityResult {
        self.resolver.resolve(domain).await
    }

    pub async fn check_bulk_availability(&self, domains: &[String]) -> Vec<DomainAvailability> {
        self.resolver.resolve_all(domains).await
    }

    /// Keep generating and checking until `options.count` available domains are found
    pub async fn find_available(&self, options: &GeneratorOptions, cancel: &CancelFlag) -> Result<SearchReport> {
        let generator = NameGenerator::with_config(self.generator_config.clone());
        let mut search = AvailabilitySearch::new(generator, &self.resolver, self.search_config.clone());
        search.find_available(options, cancel).await
    }

    pub fn save_domain(&self, domain: &str, available: Availability) -> Result<SavedDomain> {
        let saved = self.store.upsert(domain, available)?;
        tracing::info!(id = %saved.id, domain = %saved.domain, available = %saved.available, "Domain saved");
        Ok(saved)
    }

    pub fn saved_domains(&self) -> Result<Vec<SavedDomain>> {
        self.store.list()
    }

    pub fn toggle_favorite(&self, id: u64) -> Result<SavedDomain> {
        self.store.toggle_favorite(id)
    }

    pub fn delete_domain(&self, id: u64) -> Result<DeleteOutcome> {
        self.store.delete(id)?;
        tracing::info!(id = %id, "Saved domain deleted");
        Ok(DeleteOutcome { success: true })
    }
}
