//! RDAP endpoint knowledge.
//!
//! Kept in one place so the resolver tier and any future callers agree on
//! which TLDs have a registry endpoint.

pub mod registry;

pub use registry::{rdap_base_url, tld_of, RdapRegistry};
