//! Domain availability checking module

pub mod checker;
pub mod dns;
pub mod rdap;

// Re-export main functionality
pub use checker::AvailabilityResolver;
pub use dns::{DnsFailure, DnsLookup, DnsTier};
#[cfg(feature = "dns")]
pub use dns::SystemDnsLookup;
pub use rdap::RdapTier;

use crate::error::Result;
use crate::types::{CheckMethod, DomainAvailability};
use async_trait::async_trait;

/// One availability source in the resolver's fallback chain
#[async_trait]
pub trait AvailabilityTier: Send + Sync {
    /// `Ok(true)` if the domain is unregistered, `Ok(false)` if registered.
    ///
    /// An `Err` means this tier could not decide; the resolver moves on to
    /// the next tier.
    async fn check_domain(&self, domain: &str) -> Result<bool>;

    /// Method reported for a conclusive answer from this tier
    fn method(&self) -> CheckMethod;
}

/// Anything that can resolve a batch of domains
#[async_trait]
pub trait BatchResolver: Send + Sync {
    async fn resolve_batch(&self, domains: &[String]) -> Vec<DomainAvailability>;
}

/// Extensions offered for selection, with the leading dot as used in generator options
pub const POPULAR_TLDS: &[&str] = &[
    ".com", ".net", ".org", ".io", ".dev", ".app", ".co", ".me", ".ai", ".tech",
];
