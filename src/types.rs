//! Core types and structures for domain-generator

use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{DomainGeneratorError, Result};

/// Tri-state registration status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Availability {
    Available,
    Taken,
    Unknown,
}

impl Availability {
    /// `Some(true)` when available, `Some(false)` when taken, `None` when unknown
    pub fn as_option(self) -> Option<bool> {
        match self {
            Availability::Available => Some(true),
            Availability::Taken => Some(false),
            Availability::Unknown => None,
        }
    }

    pub fn is_available(self) -> bool {
        self == Availability::Available
    }
}

impl From<Option<bool>> for Availability {
    fn from(value: Option<bool>) -> Self {
        match value {
            Some(true) => Availability::Available,
            Some(false) => Availability::Taken,
            None => Availability::Unknown,
        }
    }
}

impl std::fmt::Display for Availability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Availability::Available => write!(f, "available"),
            Availability::Taken => write!(f, "taken"),
            Availability::Unknown => write!(f, "unknown"),
        }
    }
}

/// Domain checking method
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckMethod {
    Rdap,
    Dns,
    Unknown,
}

impl std::fmt::Display for CheckMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CheckMethod::Rdap => write!(f, "rdap"),
            CheckMethod::Dns => write!(f, "dns"),
            CheckMethod::Unknown => write!(f, "unknown"),
        }
    }
}

/// Outcome of a single availability check
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvailabilityResult {
    pub available: Availability,
    pub method: CheckMethod,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl AvailabilityResult {
    pub fn conclusive(available: bool, method: CheckMethod) -> Self {
        Self {
            available: Some(available).into(),
            method,
            error: None,
        }
    }

    pub fn unknown(error: impl Into<String>) -> Self {
        Self {
            available: Availability::Unknown,
            method: CheckMethod::Unknown,
            error: Some(error.into()),
        }
    }
}

/// Availability result tagged with the domain it was computed for.
///
/// Bulk checks complete in arbitrary order, so callers correlate on `domain`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DomainAvailability {
    pub domain: String,
    #[serde(flatten)]
    pub result: AvailabilityResult,
}

/// Options for a generation batch
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratorOptions {
    pub count: usize,
    /// Extensions including the leading dot, e.g. `".com"`
    pub tlds: Vec<String>,
    pub include_prefix: bool,
    pub include_suffix: bool,
    #[serde(default)]
    pub keywords: Vec<String>,
}

/// Upper bound on up-front allocation; `count` is caller supplied
const MAX_PREALLOCATION: usize = 1024;

fn tld_pattern() -> Result<&'static Regex> {
    static TLD_PATTERN: OnceLock<Regex> = OnceLock::new();

    if let Some(pattern) = TLD_PATTERN.get() {
        return Ok(pattern);
    }
    let pattern = Regex::new(r"^(\.[a-z0-9-]+)+$")
        .map_err(|e| DomainGeneratorError::internal(e.to_string()))?;
    Ok(TLD_PATTERN.get_or_init(|| pattern))
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        Self {
            count: 10,
            tlds: vec![".com".to_string()],
            include_prefix: true,
            include_suffix: true,
            keywords: Vec::new(),
        }
    }
}

impl GeneratorOptions {
    /// Check count and extensions before generating
    pub fn validate(&self) -> Result<()> {
        if self.count == 0 {
            return Err(crate::validation_error!("count must be at least 1"));
        }

        let tlds = self.normalized_tlds();
        if tlds.is_empty() {
            return Err(crate::validation_error!("at least one extension must be selected"));
        }

        let tld_regex = tld_pattern()?;
        if let Some(bad) = tlds.iter().find(|tld| !tld_regex.is_match(tld)) {
            return Err(crate::validation_error!(
                "invalid extension '{}': expected a form like '.com'",
                bad
            ));
        }

        Ok(())
    }

    /// Trimmed, lowercased extensions with blanks and duplicates removed
    pub fn normalized_tlds(&self) -> Vec<String> {
        normalize_terms(&self.tlds)
    }

    /// Trimmed, lowercased keywords with blanks and duplicates removed
    pub fn normalized_keywords(&self) -> Vec<String> {
        normalize_terms(&self.keywords)
    }

    /// Pre-allocation size for collections that grow towards `count`
    pub(crate) fn capacity_hint(&self) -> usize {
        self.count.min(MAX_PREALLOCATION)
    }

    /// Same options with a different count
    pub fn with_count(&self, count: usize) -> Self {
        Self {
            count,
            ..self.clone()
        }
    }
}

fn normalize_terms(terms: &[String]) -> Vec<String> {
    let mut seen = Vec::with_capacity(terms.len());
    for term in terms {
        let term = term.trim().to_lowercase();
        if !term.is_empty() && !seen.contains(&term) {
            seen.push(term);
        }
    }
    seen
}

/// A generated candidate split into base name and extension
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedDomain {
    pub base_name: String,
    pub tld: String,
}

impl GeneratedDomain {
    pub fn full_domain(&self) -> String {
        format!("{}{}", self.base_name, self.tld)
    }
}

/// Result of a generation batch
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationReport {
    /// Unique domains in generation order
    pub domains: Vec<String>,
    pub attempts: usize,
    /// Set when the attempt cap stopped generation short of the requested count
    pub exhausted: bool,
}

impl GenerationReport {
    /// Turn a short batch into `GenerationImpossible`
    pub fn into_result(self, requested: usize) -> Result<Vec<String>> {
        if self.exhausted {
            Err(DomainGeneratorError::generation_impossible(
                requested,
                self.domains.len(),
                self.attempts,
            ))
        } else {
            Ok(self.domains)
        }
    }
}
