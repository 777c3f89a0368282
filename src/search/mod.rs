//! Find-available search: generate, resolve and repeat until enough
//! available domains are collected.

mod finder;

pub use finder::{AvailabilitySearch, SearchReport};

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use rand::Rng;

use crate::error::Result;
use crate::generate::NameGenerator;
use crate::types::GeneratorOptions;

/// Supplier of candidate domains for each search round
pub trait CandidateSource: Send {
    fn candidates(&mut self, options: &GeneratorOptions) -> Result<Vec<String>>;
}

impl<R: Rng + Send> CandidateSource for NameGenerator<R> {
    fn candidates(&mut self, options: &GeneratorOptions) -> Result<Vec<String>> {
        self.generate(options).map(|report| report.domains)
    }
}

/// Cooperative cancellation handle, checked between rounds
#[derive(Debug, Clone, Default)]
pub struct CancelFlag(Arc<AtomicBool>);

impl CancelFlag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}
