//! Round-based search for available domains

use std::collections::HashSet;
use std::time::Instant;

use serde::{Deserialize, Serialize};

use super::{CancelFlag, CandidateSource};
use crate::config::SearchConfig;
use crate::domain::BatchResolver;
use crate::error::Result;
use crate::types::{DomainAvailability, GeneratorOptions};

/// Outcome of a search
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchReport {
    /// Available domains in the order they were found
    pub available: Vec<DomainAvailability>,
    pub rounds: usize,
    pub candidates_checked: usize,
    pub cancelled: bool,
    /// Round cap (or an empty candidate batch) ended the search short of the target
    pub exhausted: bool,
}

/// Drives generate → resolve rounds until `options.count` available
/// domains are found
pub struct AvailabilitySearch<'r, S> {
    source: S,
    resolver: &'r dyn BatchResolver,
    config: SearchConfig,
}

impl<'r, S: CandidateSource> AvailabilitySearch<'r, S> {
    pub fn new(source: S, resolver: &'r dyn BatchResolver, config: SearchConfig) -> Self {
        Self {
            source,
            resolver,
            config,
        }
    }

    /// Run the search.
    ///
    /// Each round asks for twice the number of domains still needed. The
    /// cancel flag is checked before every round; a round already resolving
    /// runs to completion.
    pub async fn find_available(
        &mut self,
        options: &GeneratorOptions,
        cancel: &CancelFlag,
    ) -> Result<SearchReport> {
        options.validate()?;

        let target = options.count;
        let search_start = Instant::now();
        let mut found: Vec<DomainAvailability> = Vec::with_capacity(options.capacity_hint());
        let mut found_names = HashSet::with_capacity(options.capacity_hint());
        let mut rounds = 0;
        let mut candidates_checked = 0;
        let mut cancelled = false;
        let mut starved = false;

        while found.len() < target && rounds < self.config.max_rounds {
            if cancel.is_cancelled() {
                cancelled = true;
                break;
            }
            rounds += 1;

            let needed = target - found.len();
            let batch = self.source.candidates(&options.with_count(needed.saturating_mul(2)))?;
            if batch.is_empty() {
                starved = true;
                break;
            }
            candidates_checked += batch.len();

            let results = self.resolver.resolve_batch(&batch).await;
            for entry in results {
                if found.len() >= target {
                    break;
                }
                if entry.result.available.is_available() && found_names.insert(entry.domain.clone()) {
                    found.push(entry);
                }
            }

            tracing::info!(
                round = %rounds,
                checked = %batch.len(),
                found = %found.len(),
                target = %target,
                "Search round completed"
            );
        }

        let exhausted = !cancelled && found.len() < target;
        if exhausted {
            tracing::warn!(
                found = %found.len(),
                target = %target,
                rounds = %rounds,
                starved = %starved,
                duration_ms = %search_start.elapsed().as_millis(),
                "Search ended before enough available domains were found"
            );
        } else if cancelled {
            tracing::info!(found = %found.len(), rounds = %rounds, "Search cancelled");
        }

        Ok(SearchReport {
            available: found,
            rounds,
            candidates_checked,
            cancelled,
            exhausted,
        })
    }

    pub fn into_source(self) -> S {
        self.source
    }
}
