//! Integration tests for domain-generator

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use domain_generator::{
    actions::DomainActions,
    domain::{AvailabilityResolver, AvailabilityTier, DnsFailure, DnsLookup, DnsTier, RdapTier},
    rdap::RdapRegistry,
    search::CancelFlag,
    storage::{JsonFileStore, SavedDomainStore},
    types::{Availability, CheckMethod, GeneratorOptions},
    GeneratorConfig, SearchConfig,
};
use httpmock::prelude::*;

/// DNS double that answers every lookup the same way and counts calls
struct CountingDns {
    outcome: Result<(), DnsFailure>,
    calls: AtomicUsize,
}

impl CountingDns {
    fn new(outcome: Result<(), DnsFailure>) -> Arc<Self> {
        Arc::new(Self {
            outcome,
            calls: AtomicUsize::new(0),
        })
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl DnsLookup for CountingDns {
    async fn lookup(&self, _host: &str) -> Result<(), DnsFailure> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.outcome.clone()
    }
}

fn resolver(server: &MockServer, dns: Arc<CountingDns>) -> AvailabilityResolver {
    let registry = RdapRegistry::empty().with_endpoint("test", server.url("/rdap/"));
    let tiers: Vec<Box<dyn AvailabilityTier>> = vec![
        Box::new(RdapTier::new(reqwest::Client::new(), registry, Duration::from_secs(5))),
        Box::new(DnsTier::new(dns)),
    ];
    AvailabilityResolver::with_tiers(tiers)
}

#[tokio::test]
async fn test_rdap_answer_skips_dns() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/rdap/domain/google.test")
                .header("accept", "application/rdap+json");
            then.status(200).body(r#"{"objectClassName":"domain"}"#);
        })
        .await;
    let dns = CountingDns::new(Ok(()));

    let result = resolver(&server, Arc::clone(&dns)).resolve("Google.TEST").await;

    assert_eq!(result.available, Availability::Taken);
    assert_eq!(result.method, CheckMethod::Rdap);
    assert!(result.error.is_none());
    assert_eq!(dns.calls(), 0);
    mock.assert_async().await;
}

#[tokio::test]
async fn test_rdap_404_is_available() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/rdap/domain/fresh.test");
            then.status(404);
        })
        .await;
    let dns = CountingDns::new(Ok(()));

    let result = resolver(&server, Arc::clone(&dns)).resolve("fresh.test").await;
    assert_eq!(result.available, Availability::Available);
    assert_eq!(result.method, CheckMethod::Rdap);
    assert_eq!(dns.calls(), 0);
}

#[tokio::test]
async fn test_rdap_server_error_falls_back_to_dns() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/rdap/domain/flaky.test");
            then.status(503);
        })
        .await;
    let dns = CountingDns::new(Ok(()));

    let result = resolver(&server, Arc::clone(&dns)).resolve("flaky.test").await;
    assert_eq!(result.available, Availability::Taken);
    assert_eq!(result.method, CheckMethod::Dns);
    assert_eq!(dns.calls(), 1);
}

#[tokio::test]
async fn test_unmapped_tld_with_dns_not_found_is_available() {
    let server = MockServer::start_async().await;
    let dns = CountingDns::new(Err(DnsFailure::NotFound));

    let result = resolver(&server, Arc::clone(&dns)).resolve("brandnew.zz").await;
    assert_eq!(result.available, Availability::Available);
    assert_eq!(result.method, CheckMethod::Dns);
    assert_eq!(dns.calls(), 1);
}

#[tokio::test]
async fn test_unmapped_tld_with_dns_error_is_unknown() {
    let server = MockServer::start_async().await;
    let dns = CountingDns::new(Err(DnsFailure::Other("SERVFAIL".to_string())));

    let result = resolver(&server, dns).resolve("broken.zz").await;
    assert_eq!(result.available, Availability::Unknown);
    assert_eq!(result.method, CheckMethod::Unknown);
    assert_eq!(result.error.as_deref(), Some("Could not determine availability"));
}

#[tokio::test]
async fn test_bulk_results_correlate_by_domain() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/rdap/domain/taken.test");
            then.status(200);
        })
        .await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/rdap/domain/free.test");
            then.status(404);
        })
        .await;
    let dns = CountingDns::new(Err(DnsFailure::Other("refused".to_string())));

    let domains = vec!["taken.test".to_string(), "free.test".to_string(), "odd.zz".to_string()];
    let results = resolver(&server, dns).resolve_all(&domains).await;
    assert_eq!(results.len(), 3);

    let status_of = |name: &str| {
        results
            .iter()
            .find(|r| r.domain == name)
            .map(|r| r.result.available)
            .unwrap()
    };
    assert_eq!(status_of("taken.test"), Availability::Taken);
    assert_eq!(status_of("free.test"), Availability::Available);
    assert_eq!(status_of("odd.zz"), Availability::Unknown);
}

#[tokio::test]
async fn test_find_available_end_to_end() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path_matches(regex::Regex::new(r"^/rdap/domain/[a-z0-9]+\.test$").unwrap());
            then.status(404);
        })
        .await;
    let dns = CountingDns::new(Ok(()));

    let dir = tempfile::tempdir().unwrap();
    let store = JsonFileStore::open(dir.path().join("saved.json")).unwrap();
    let actions = DomainActions::new(
        resolver(&server, Arc::clone(&dns)),
        GeneratorConfig::default(),
        SearchConfig::default(),
        store,
    );

    let options = GeneratorOptions {
        count: 3,
        tlds: vec![".test".to_string()],
        include_prefix: true,
        include_suffix: false,
        keywords: vec!["forge".to_string()],
    };
    let report = actions.find_available(&options, &CancelFlag::new()).await.unwrap();

    assert_eq!(report.rounds, 1);
    assert_eq!(report.available.len(), 3);
    assert_eq!(dns.calls(), 0);
    for entry in &report.available {
        assert!(entry.domain.contains("forge"));
        assert_eq!(entry.result.method, CheckMethod::Rdap);
        actions.save_domain(&entry.domain, entry.result.available).unwrap();
    }

    let saved = actions.store().list().unwrap();
    assert_eq!(saved.len(), 3);
    assert!(saved.iter().all(|d| d.available == Availability::Available));
}

#[test]
fn test_generation_respects_keywords_and_tlds() {
    let actions = DomainActions::new(
        AvailabilityResolver::with_tiers(Vec::new()),
        GeneratorConfig::default(),
        SearchConfig::default(),
        domain_generator::MemoryStore::new(),
    );
    let options = GeneratorOptions {
        count: 25,
        tlds: vec![".com".to_string(), ".dev".to_string()],
        include_prefix: true,
        include_suffix: true,
        keywords: vec!["data".to_string(), "mint".to_string()],
    };

    let report = actions.generate_domains(&options).unwrap();
    assert_eq!(report.domains.len(), 25);
    for domain in &report.domains {
        let base = domain
            .strip_suffix(".com")
            .or_else(|| domain.strip_suffix(".dev"))
            .unwrap();
        assert!(base.contains("data") || base.contains("mint"), "{domain}");
    }
}

#[test]
fn test_library_initialization() {
    assert!(domain_generator::init().is_ok());
    assert!(domain_generator::init().is_ok());
}
