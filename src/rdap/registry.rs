//! RDAP server registry.
//!
//! A small static mapping of TLD to RDAP service, with per-instance overrides
//! for private or test endpoints.

use std::collections::HashMap;

/// Get the built-in RDAP base URL for a TLD (lowercase, without leading dot).
///
/// Returned URL ends with `/`; the domain query path is `domain/{name}`.
pub fn rdap_base_url(tld: &str) -> Option<&'static str> {
    match tld {
        "com" => Some("https://rdap.verisign.com/com/v1/"),
        "net" => Some("https://rdap.verisign.com/net/v1/"),
        "org" => Some("https://rdap.publicinterestregistry.org/rdap/"),
        "io" => Some("https://rdap.nic.io/"),
        "dev" => Some("https://rdap.nic.google/"),
        "app" => Some("https://rdap.nic.google/"),
        "ai" => Some("https://rdap.nic.ai/"),
        "tech" => Some("https://rdap.nic.tech/"),
        "xyz" => Some("https://rdap.nic.xyz/"),
        "co" => Some("https://rdap.nic.co/"),
        "me" => Some("https://rdap.nic.me/"),
        _ => None,
    }
}

/// TLD of a domain: everything after the last dot, or `None` if there is no dot
pub fn tld_of(domain: &str) -> Option<&str> {
    domain
        .rsplit_once('.')
        .map(|(_, tld)| tld)
        .filter(|tld| !tld.is_empty())
}

/// Endpoint lookup used by the RDAP tier
#[derive(Debug, Clone, Default)]
pub struct RdapRegistry {
    overrides: HashMap<String, String>,
    builtin: bool,
}

impl RdapRegistry {
    /// Registry backed by the built-in mapping
    pub fn builtin() -> Self {
        Self {
            overrides: HashMap::new(),
            builtin: true,
        }
    }

    /// Registry with only explicitly added endpoints
    pub fn empty() -> Self {
        Self::default()
    }

    /// Map `tld` to `base_url`, taking precedence over the built-in entry
    pub fn with_endpoint(mut self, tld: impl Into<String>, base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        if !base_url.ends_with('/') {
            base_url.push('/');
        }
        self.overrides
            .insert(tld.into().trim_start_matches('.').to_lowercase(), base_url);
        self
    }

    pub fn base_url(&self, tld: &str) -> Option<String> {
        self.overrides
            .get(tld)
            .cloned()
            .or_else(|| self.builtin.then(|| rdap_base_url(tld)).flatten().map(str::to_string))
    }

    /// Build the RDAP domain query URL for a fully-qualified domain (e.g. `example.com`).
    pub fn domain_url(&self, domain: &str) -> Option<String> {
        let tld = tld_of(domain)?;
        let base = self.base_url(tld)?;
        Some(format!("{base}domain/{domain}"))
    }
}
