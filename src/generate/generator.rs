//! Word-combination name generator

use std::collections::HashSet;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::weighted::{pick, weighted_index};
use super::words::{BASE_WORDS, PREFIXES, SHORT_WORDS, SUFFIXES};
use crate::config::GeneratorConfig;
use crate::error::Result;
use crate::types::{GeneratedDomain, GenerationReport, GeneratorOptions};

/// Ways to build a name around a keyword, in weight order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeywordStrategy {
    Alone,
    Prefixed,
    Suffixed,
    Wrapped,
    Paired,
    ShortAfter,
    ShortBefore,
}

pub const KEYWORD_STRATEGIES: [KeywordStrategy; 7] = [
    KeywordStrategy::Alone,
    KeywordStrategy::Prefixed,
    KeywordStrategy::Suffixed,
    KeywordStrategy::Wrapped,
    KeywordStrategy::Paired,
    KeywordStrategy::ShortAfter,
    KeywordStrategy::ShortBefore,
];

/// Weights aligned with [`KEYWORD_STRATEGIES`]
pub fn keyword_weights(keyword_count: usize, include_prefix: bool, include_suffix: bool) -> [f64; 7] {
    let gate = |on: bool, weight: f64| if on { weight } else { 0.0 };
    [
        1.0,
        gate(include_prefix, 3.0),
        gate(include_suffix, 3.0),
        gate(include_prefix && include_suffix, 2.0),
        gate(keyword_count > 1, 2.0),
        1.0,
        1.0,
    ]
}

/// Keyword-free construction strategies, drawn uniformly
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DefaultStrategy {
    Base,
    PrefixBase,
    BaseSuffix,
    PrefixBaseSuffix,
    ShortShort,
    BaseShort,
    ShortBase,
}

pub const DEFAULT_STRATEGIES: [DefaultStrategy; 7] = [
    DefaultStrategy::Base,
    DefaultStrategy::PrefixBase,
    DefaultStrategy::BaseSuffix,
    DefaultStrategy::PrefixBaseSuffix,
    DefaultStrategy::ShortShort,
    DefaultStrategy::BaseShort,
    DefaultStrategy::ShortBase,
];

/// Generator for candidate domain names
pub struct NameGenerator<R = StdRng> {
    rng: R,
    config: GeneratorConfig,
}

impl NameGenerator<StdRng> {
    /// Create a generator with default configuration
    pub fn new() -> Self {
        Self::with_config(GeneratorConfig::default())
    }

    /// Create a generator with custom configuration
    pub fn with_config(config: GeneratorConfig) -> Self {
        Self::with_rng(StdRng::from_entropy(), config)
    }
}

impl Default for NameGenerator<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> NameGenerator<R> {
    /// Create a generator driven by the given random source
    pub fn with_rng(rng: R, config: GeneratorConfig) -> Self {
        Self { rng, config }
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Generate `options.count` unique domains.
    ///
    /// Stops early once the attempt cap is spent; the report is then marked
    /// `exhausted` and holds whatever unique domains were found.
    pub fn generate(&mut self, options: &GeneratorOptions) -> Result<GenerationReport> {
        options.validate()?;

        let tlds = options.normalized_tlds();
        let keywords = options.normalized_keywords();
        let cap = self.config.attempt_cap(options.count);

        let mut seen = HashSet::with_capacity(options.capacity_hint());
        let mut domains = Vec::with_capacity(options.capacity_hint());
        let mut attempts = 0;

        while domains.len() < options.count && attempts < cap {
            attempts += 1;
            let candidate = self.candidate(&keywords, &tlds, options.include_prefix, options.include_suffix);
            let full = candidate.full_domain();
            if seen.insert(full.clone()) {
                domains.push(full);
            }
        }

        let exhausted = domains.len() < options.count;
        if exhausted {
            tracing::warn!(
                requested = %options.count,
                produced = %domains.len(),
                attempts = %attempts,
                "Attempt cap reached before enough unique domains were generated"
            );
        } else {
            tracing::debug!(count = %domains.len(), attempts = %attempts, "Domain batch generated");
        }

        Ok(GenerationReport {
            domains,
            attempts,
            exhausted,
        })
    }

    /// Build one candidate. `keywords` and `tlds` must already be normalized
    /// and `tlds` must be non-empty.
    pub fn candidate(
        &mut self,
        keywords: &[String],
        tlds: &[String],
        include_prefix: bool,
        include_suffix: bool,
    ) -> GeneratedDomain {
        let base_name = if keywords.is_empty() {
            self.default_name(include_prefix, include_suffix)
        } else {
            self.keyword_name(keywords, include_prefix, include_suffix)
        };
        let tld = pick(&mut self.rng, tlds).clone();

        GeneratedDomain { base_name, tld }
    }

    fn keyword_name(&mut self, keywords: &[String], include_prefix: bool, include_suffix: bool) -> String {
        let keyword = pick(&mut self.rng, keywords).as_str();
        let weights = keyword_weights(keywords.len(), include_prefix, include_suffix);
        // Keyword-alone and the short-word variants always carry weight
        let strategy = weighted_index(&mut self.rng, &weights)
            .map(|i| KEYWORD_STRATEGIES[i])
            .unwrap_or(KeywordStrategy::Alone);

        let rng = &mut self.rng;
        let name = match strategy {
            KeywordStrategy::Alone => keyword.to_string(),
            KeywordStrategy::Prefixed => format!("{}{}", pick(rng, PREFIXES), keyword),
            KeywordStrategy::Suffixed => format!("{}{}", keyword, pick(rng, SUFFIXES)),
            KeywordStrategy::Wrapped => {
                format!("{}{}{}", pick(rng, PREFIXES), keyword, pick(rng, SUFFIXES))
            }
            KeywordStrategy::Paired => {
                let others: Vec<&String> = keywords.iter().filter(|k| k.as_str() != keyword).collect();
                if others.is_empty() {
                    keyword.to_string()
                } else {
                    format!("{}{}", keyword, pick(rng, others.as_slice()))
                }
            }
            KeywordStrategy::ShortAfter => format!("{}{}", keyword, pick(rng, SHORT_WORDS)),
            KeywordStrategy::ShortBefore => format!("{}{}", pick(rng, SHORT_WORDS), keyword),
        };

        name.to_lowercase()
    }

    fn default_name(&mut self, include_prefix: bool, include_suffix: bool) -> String {
        for _ in 0..self.config.strategy_retries {
            let strategy = *pick(&mut self.rng, &DEFAULT_STRATEGIES[..]);
            if let Some(name) = self.build_default(strategy, include_prefix, include_suffix) {
                return name.to_lowercase();
            }
        }

        pick(&mut self.rng, BASE_WORDS).to_lowercase()
    }

    fn build_default(
        &mut self,
        strategy: DefaultStrategy,
        include_prefix: bool,
        include_suffix: bool,
    ) -> Option<String> {
        let rng = &mut self.rng;
        match strategy {
            DefaultStrategy::Base => Some(pick(rng, BASE_WORDS).to_string()),
            DefaultStrategy::PrefixBase => {
                include_prefix.then(|| format!("{}{}", pick(rng, PREFIXES), pick(rng, BASE_WORDS)))
            }
            DefaultStrategy::BaseSuffix => {
                include_suffix.then(|| format!("{}{}", pick(rng, BASE_WORDS), pick(rng, SUFFIXES)))
            }
            DefaultStrategy::PrefixBaseSuffix => (include_prefix && include_suffix).then(|| {
                format!(
                    "{}{}{}",
                    pick(rng, PREFIXES),
                    pick(rng, BASE_WORDS),
                    pick(rng, SUFFIXES)
                )
            }),
            DefaultStrategy::ShortShort => {
                Some(format!("{}{}", pick(rng, SHORT_WORDS), pick(rng, SHORT_WORDS)))
            }
            DefaultStrategy::BaseShort => {
                Some(format!("{}{}", pick(rng, BASE_WORDS), pick(rng, SHORT_WORDS)))
            }
            DefaultStrategy::ShortBase => {
                Some(format!("{}{}", pick(rng, SHORT_WORDS), pick(rng, BASE_WORDS)))
            }
        }
    }
}
