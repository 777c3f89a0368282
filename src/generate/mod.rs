//! Candidate name generation
//!
//! Names are built by combining curated word lists, optionally around
//! caller-supplied keywords, then joined with one of the selected extensions.

mod generator;
mod weighted;
pub mod words;

pub use generator::{
    keyword_weights, DefaultStrategy, KeywordStrategy, NameGenerator, DEFAULT_STRATEGIES,
    KEYWORD_STRATEGIES,
};
pub use weighted::{pick, weighted_choice, weighted_index};
