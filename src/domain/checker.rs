//! Domain availability resolver

use std::time::Instant;

use async_trait::async_trait;
use futures::future::join_all;

use super::{AvailabilityTier, BatchResolver, RdapTier};
use crate::config::CheckConfig;
use crate::types::{AvailabilityResult, DomainAvailability};

const UNDETERMINED: &str = "Could not determine availability";

/// Resolves availability by asking each tier in order until one answers.
///
/// The default chain is RDAP then DNS. Tiers never raise errors to the
/// caller: an inconclusive tier hands over to the next one, and when every
/// tier is inconclusive the result is `unknown`.
pub struct AvailabilityResolver {
    tiers: Vec<Box<dyn AvailabilityTier>>,
}

impl AvailabilityResolver {
    /// Create a resolver with default configuration
    pub fn new() -> Self {
        Self::with_config(&CheckConfig::default())
    }

    /// Create a resolver whose tiers follow the given configuration
    pub fn with_config(config: &CheckConfig) -> Self {
        let mut tiers: Vec<Box<dyn AvailabilityTier>> = Vec::new();

        if config.enable_rdap {
            tiers.push(Box::new(RdapTier::builtin(config.rdap_timeout, &config.user_agent)));
        }

        if config.enable_dns {
            #[cfg(feature = "dns")]
            {
                let lookup = super::SystemDnsLookup::system_or_default();
                tiers.push(Box::new(super::DnsTier::new(std::sync::Arc::new(lookup))));
            }
            #[cfg(not(feature = "dns"))]
            tracing::warn!("DNS tier requested but the `dns` feature is disabled");
        }

        Self::with_tiers(tiers)
    }

    /// Create a resolver from an explicit tier chain
    pub fn with_tiers(tiers: Vec<Box<dyn AvailabilityTier>>) -> Self {
        Self { tiers }
    }

    /// Append a tier to the end of the chain
    pub fn push_tier(&mut self, tier: Box<dyn AvailabilityTier>) {
        self.tiers.push(tier);
    }

    pub fn tier_count(&self) -> usize {
        self.tiers.len()
    }

    /// Resolve a single domain
    pub async fn resolve(&self, domain: &str) -> AvailabilityResult {
        let clean = domain.trim().to_lowercase();
        let start_time = Instant::now();

        for tier in &self.tiers {
            match tier.check_domain(&clean).await {
                Ok(available) => {
                    tracing::debug!(
                        domain = %clean,
                        method = %tier.method(),
                        available = %available,
                        duration_ms = %start_time.elapsed().as_millis(),
                        "Domain check completed"
                    );
                    return AvailabilityResult::conclusive(available, tier.method());
                }
                Err(e) => {
                    tracing::debug!(domain = %clean, method = %tier.method(), error = %e, "Tier inconclusive");
                }
            }
        }

        tracing::warn!(
            domain = %clean,
            duration_ms = %start_time.elapsed().as_millis(),
            "All domain checking methods failed"
        );

        AvailabilityResult::unknown(UNDETERMINED)
    }

    /// Resolve every domain concurrently.
    ///
    /// Each entry carries the domain string exactly as passed in.
    pub async fn resolve_all(&self, domains: &[String]) -> Vec<DomainAvailability> {
        let batch_start = Instant::now();
        let futures = domains.iter().map(|domain| async move {
            DomainAvailability {
                domain: domain.clone(),
                result: self.resolve(domain).await,
            }
        });
        let results = join_all(futures).await;

        let available = results.iter().filter(|r| r.result.available.is_available()).count();
        tracing::info!(
            domains_requested = %domains.len(),
            available = %available,
            batch_duration_ms = %batch_start.elapsed().as_millis(),
            "Batch domain check completed"
        );

        results
    }
}

impl Default for AvailabilityResolver {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BatchResolver for AvailabilityResolver {
    async fn resolve_batch(&self, domains: &[String]) -> Vec<DomainAvailability> {
        self.resolve_all(domains).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{DomainGeneratorError, Result};
    use crate::types::{Availability, CheckMethod};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    struct ScriptedTier {
        method: CheckMethod,
        answer: Option<bool>,
        calls: Arc<AtomicUsize>,
        seen: Arc<parking_lot::Mutex<Vec<String>>>,
    }

    impl ScriptedTier {
        fn boxed(method: CheckMethod, answer: Option<bool>) -> (Box<dyn AvailabilityTier>, Arc<AtomicUsize>) {
            let calls = Arc::new(AtomicUsize::new(0));
            let tier = ScriptedTier {
                method,
                answer,
                calls: Arc::clone(&calls),
                seen: Arc::default(),
            };
            (Box::new(tier), calls)
        }
    }

    #[async_trait]
    impl AvailabilityTier for ScriptedTier {
        async fn check_domain(&self, domain: &str) -> Result<bool> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.seen.lock().push(domain.to_string());
            self.answer
                .ok_or_else(|| DomainGeneratorError::inconclusive(domain, self.method, "scripted"))
        }

        fn method(&self) -> CheckMethod {
            self.method
        }
    }

    #[tokio::test]
    async fn test_first_conclusive_tier_wins() {
        let (rdap, rdap_calls) = ScriptedTier::boxed(CheckMethod::Rdap, Some(false));
        let (dns, dns_calls) = ScriptedTier::boxed(CheckMethod::Dns, Some(true));
        let resolver = AvailabilityResolver::with_tiers(vec![rdap, dns]);

        let result = resolver.resolve("Example.COM ").await;
        assert_eq!(result, AvailabilityResult::conclusive(false, CheckMethod::Rdap));
        assert_eq!(rdap_calls.load(Ordering::SeqCst), 1);
        assert_eq!(dns_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_falls_through_to_next_tier() {
        let (rdap, _) = ScriptedTier::boxed(CheckMethod::Rdap, None);
        let (dns, dns_calls) = ScriptedTier::boxed(CheckMethod::Dns, Some(true));
        let resolver = AvailabilityResolver::with_tiers(vec![rdap, dns]);

        let result = resolver.resolve("fresh.zz").await;
        assert_eq!(result.available, Availability::Available);
        assert_eq!(result.method, CheckMethod::Dns);
        assert_eq!(dns_calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_all_inconclusive_is_unknown() {
        let (rdap, _) = ScriptedTier::boxed(CheckMethod::Rdap, None);
        let (dns, _) = ScriptedTier::boxed(CheckMethod::Dns, None);
        let resolver = AvailabilityResolver::with_tiers(vec![rdap, dns]);

        let result = resolver.resolve("mystery.zz").await;
        assert_eq!(result.available, Availability::Unknown);
        assert_eq!(result.method, CheckMethod::Unknown);
        assert_eq!(result.error.as_deref(), Some(UNDETERMINED));
    }

    #[tokio::test]
    async fn test_input_is_normalized_before_lookup() {
        let seen = Arc::new(parking_lot::Mutex::new(Vec::new()));
        let tier = ScriptedTier {
            method: CheckMethod::Dns,
            answer: Some(true),
            calls: Arc::default(),
            seen: Arc::clone(&seen),
        };
        let resolver = AvailabilityResolver::with_tiers(vec![Box::new(tier)]);

        resolver.resolve("  MixedCase.IO\n").await;
        assert_eq!(seen.lock().as_slice(), ["mixedcase.io".to_string()]);
    }

    #[tokio::test]
    async fn test_batch_keeps_source_domains() {
        let (dns, calls) = ScriptedTier::boxed(CheckMethod::Dns, Some(true));
        let resolver = AvailabilityResolver::with_tiers(vec![dns]);
        let domains = vec!["One.com".to_string(), "two.io".to_string(), "three.dev".to_string()];

        let results = resolver.resolve_batch(&domains).await;
        assert_eq!(calls.load(Ordering::SeqCst), 3);
        let mut names: Vec<_> = results.iter().map(|r| r.domain.as_str()).collect();
        names.sort();
        assert_eq!(names, ["One.com", "three.dev", "two.io"]);
    }

    #[test]
    fn test_config_controls_tiers() {
        let config = CheckConfig {
            enable_dns: false,
            ..CheckConfig::default()
        };
        assert_eq!(AvailabilityResolver::with_config(&config).tier_count(), 1);

        let config = CheckConfig {
            enable_rdap: false,
            enable_dns: false,
            ..CheckConfig::default()
        };
        assert_eq!(AvailabilityResolver::with_config(&config).tier_count(), 0);
    }
}
