//! RDAP availability tier

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::ACCEPT;
use reqwest::{Client, StatusCode};
use tokio::time::timeout;

use super::AvailabilityTier;
use crate::error::{DomainGeneratorError, Result};
use crate::rdap::{tld_of, RdapRegistry};
use crate::types::CheckMethod;

const RDAP_CONTENT_TYPE: &str = "application/rdap+json";

/// Registry lookup over RDAP. Only the HTTP status is consulted.
pub struct RdapTier {
    client: Client,
    registry: RdapRegistry,
    timeout: Duration,
}

impl RdapTier {
    pub fn new(client: Client, registry: RdapRegistry, timeout: Duration) -> Self {
        Self {
            client,
            registry,
            timeout,
        }
    }

    /// Tier using the built-in endpoint mapping and a fresh client
    pub fn builtin(request_timeout: Duration, user_agent: &str) -> Self {
        let client = Client::builder()
            .timeout(request_timeout)
            .user_agent(user_agent)
            .build()
            .unwrap_or_else(|e| {
                tracing::warn!("Failed to create RDAP HTTP client: {}. Using default.", e);
                Client::new()
            });
        Self::new(client, RdapRegistry::builtin(), request_timeout)
    }

    pub fn registry(&self) -> &RdapRegistry {
        &self.registry
    }
}

#[async_trait]
impl AvailabilityTier for RdapTier {
    async fn check_domain(&self, domain: &str) -> Result<bool> {
        let tld = tld_of(domain).ok_or_else(|| {
            DomainGeneratorError::inconclusive(domain, CheckMethod::Rdap, "no TLD in domain")
        })?;
        let url = self
            .registry
            .domain_url(domain)
            .ok_or_else(|| DomainGeneratorError::unmapped_tld(tld))?;

        let request = self.client.get(&url).header(ACCEPT, RDAP_CONTENT_TYPE).send();
        let response = timeout(self.timeout, request)
            .await
            .map_err(|_| {
                DomainGeneratorError::network(
                    format!("RDAP request timed out after {}s", self.timeout.as_secs()),
                    None,
                    Some(url.clone()),
                )
            })?
            .map_err(DomainGeneratorError::from)?;

        match response.status() {
            StatusCode::OK => Ok(false),
            StatusCode::NOT_FOUND => Ok(true),
            status => Err(DomainGeneratorError::network(
                format!("RDAP request returned status {}", status),
                Some(status.as_u16()),
                Some(url),
            )),
        }
    }

    fn method(&self) -> CheckMethod {
        CheckMethod::Rdap
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;

    fn tier_for(server: &MockServer) -> RdapTier {
        let registry = RdapRegistry::empty().with_endpoint("test", server.url("/rdap/"));
        RdapTier::new(Client::new(), registry, Duration::from_secs(5))
    }

    #[tokio::test]
    async fn test_200_means_registered() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/rdap/domain/taken.test")
                    .header("accept", RDAP_CONTENT_TYPE);
                then.status(200).body("{}");
            })
            .await;

        assert_eq!(tier_for(&server).check_domain("taken.test").await, Ok(false));
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_404_means_available() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/rdap/domain/free.test");
                then.status(404);
            })
            .await;

        assert_eq!(tier_for(&server).check_domain("free.test").await, Ok(true));
    }

    #[tokio::test]
    async fn test_other_status_is_inconclusive() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/rdap/domain/busy.test");
                then.status(429);
            })
            .await;

        let err = tier_for(&server).check_domain("busy.test").await.unwrap_err();
        assert!(matches!(
            err,
            DomainGeneratorError::Network { status_code: Some(429), .. }
        ));
    }

    #[tokio::test]
    async fn test_unmapped_tld_skips_request() {
        let server = MockServer::start_async().await;
        let err = tier_for(&server).check_domain("name.zz").await.unwrap_err();
        assert_eq!(err, DomainGeneratorError::unmapped_tld("zz"));
    }

    #[tokio::test]
    async fn test_slow_endpoint_times_out() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/rdap/domain/slow.test");
                then.status(200).delay(Duration::from_millis(1500));
            })
            .await;

        let registry = RdapRegistry::empty().with_endpoint("test", server.url("/rdap/"));
        let tier = RdapTier::new(Client::new(), registry, Duration::from_millis(200));
        let err = tier.check_domain("slow.test").await.unwrap_err();
        assert!(err.is_recoverable_lookup());
    }
}
