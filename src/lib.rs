//! Domain Generator - word-combination domain names with availability checking
//!
//! Candidate names come from weighted combinations of curated word lists
//! (optionally built around keywords). Availability is resolved per domain
//! through RDAP, then DNS, then reported as unknown.

pub mod actions;
pub mod config;
pub mod domain;
pub mod error;
pub mod generate;
pub mod rdap;
pub mod search;
pub mod storage;
pub mod types;

// Re-export commonly used types
pub use error::{DomainGeneratorError, Result};
pub use types::{
    Availability, AvailabilityResult, CheckMethod, DomainAvailability, GeneratedDomain,
    GenerationReport, GeneratorOptions,
};

// Re-export main functionality
pub use actions::{DeleteOutcome, DomainActions};
pub use config::{CheckConfig, GeneratorConfig, SearchConfig, Settings};
pub use domain::AvailabilityResolver;
pub use generate::NameGenerator;
pub use search::{AvailabilitySearch, CancelFlag, SearchReport};
pub use storage::{JsonFileStore, MemoryStore, SavedDomain, SavedDomainStore};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize the library: load `.env` and install a log subscriber.
///
/// The subscriber honours `RUST_LOG` (default `info`). Calling this more than
/// once, or after the host application installed its own subscriber, is a
/// no-op.
pub fn init() -> Result<()> {
    // Load .env file if it exists
    dotenv::dotenv().ok();

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    if tracing_subscriber::fmt().with_env_filter(filter).try_init().is_err() {
        tracing::debug!("Global subscriber already installed");
    }

    Ok(())
}
