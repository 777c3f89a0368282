//! DNS availability tier

use std::sync::Arc;

use async_trait::async_trait;

use super::AvailabilityTier;
use crate::error::{DomainGeneratorError, Result};
use crate::types::CheckMethod;

/// Why a DNS lookup failed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DnsFailure {
    /// The name does not exist (NXDOMAIN)
    NotFound,
    /// The name exists but has no records of the queried type
    NoData,
    /// Anything else: timeouts, SERVFAIL, refused, transport errors
    Other(String),
}

/// DNS resolution service
#[async_trait]
pub trait DnsLookup: Send + Sync {
    /// Resolve `host`; `Ok(())` if any record came back
    async fn lookup(&self, host: &str) -> std::result::Result<(), DnsFailure>;
}

/// Tier that treats a resolving name as registered
pub struct DnsTier {
    lookup: Arc<dyn DnsLookup>,
}

impl DnsTier {
    pub fn new(lookup: Arc<dyn DnsLookup>) -> Self {
        Self { lookup }
    }
}

#[async_trait]
impl AvailabilityTier for DnsTier {
    async fn check_domain(&self, domain: &str) -> Result<bool> {
        match self.lookup.lookup(domain).await {
            Ok(()) => Ok(false),
            Err(DnsFailure::NotFound) | Err(DnsFailure::NoData) => Ok(true),
            Err(DnsFailure::Other(message)) => Err(DomainGeneratorError::inconclusive(
                domain,
                CheckMethod::Dns,
                message,
            )),
        }
    }

    fn method(&self) -> CheckMethod {
        CheckMethod::Dns
    }
}

#[cfg(feature = "dns")]
mod system {
    use async_trait::async_trait;
    use hickory_resolver::config::{ResolverConfig, ResolverOpts};
    use hickory_resolver::error::{ResolveError, ResolveErrorKind};
    use hickory_resolver::proto::op::ResponseCode;
    use hickory_resolver::TokioAsyncResolver;

    use super::{DnsFailure, DnsLookup};
    use crate::error::{DomainGeneratorError, Result};

    /// Resolver backed by hickory
    pub struct SystemDnsLookup {
        resolver: TokioAsyncResolver,
    }

    impl SystemDnsLookup {
        /// Use the host's resolver configuration (`/etc/resolv.conf` on unix)
        pub fn from_system_conf() -> Result<Self> {
            let resolver = TokioAsyncResolver::tokio_from_system_conf()
                .map_err(|e| DomainGeneratorError::dns(e.to_string()))?;
            Ok(Self { resolver })
        }

        /// Use hickory's default upstreams
        pub fn with_defaults() -> Self {
            Self {
                resolver: TokioAsyncResolver::tokio(ResolverConfig::default(), ResolverOpts::default()),
            }
        }

        /// System configuration when readable, hickory defaults otherwise
        pub fn system_or_default() -> Self {
            Self::from_system_conf().unwrap_or_else(|e| {
                tracing::warn!(error = %e, "System DNS configuration unavailable, using defaults");
                Self::with_defaults()
            })
        }
    }

    pub(super) fn classify(err: &ResolveError) -> DnsFailure {
        match err.kind() {
            ResolveErrorKind::NoRecordsFound { response_code, .. } => {
                if *response_code == ResponseCode::NXDomain {
                    DnsFailure::NotFound
                } else {
                    DnsFailure::NoData
                }
            }
            _ => DnsFailure::Other(err.to_string()),
        }
    }

    #[async_trait]
    impl DnsLookup for SystemDnsLookup {
        async fn lookup(&self, host: &str) -> std::result::Result<(), DnsFailure> {
            // Trailing dot keeps the system search domains out of the query
            let fqdn = format!("{}.", host.trim_end_matches('.'));
            match self.resolver.lookup_ip(fqdn.as_str()).await {
                Ok(_) => Ok(()),
                Err(e) => Err(classify(&e)),
            }
        }
    }
}

#[cfg(feature = "dns")]
pub use system::SystemDnsLookup;
