//! Error handling for domain-generator

use thiserror::Error;

/// Main error type for domain-generator
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainGeneratorError {
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Network error: {message}")]
    Network {
        message: String,
        status_code: Option<u16>,
        url: Option<String>,
    },

    #[error("Inconclusive {method} lookup for '{domain}': {message}")]
    Inconclusive {
        domain: String,
        method: crate::types::CheckMethod,
        message: String,
    },

    #[error("No RDAP endpoint mapped for TLD '{tld}'")]
    UnmappedTld { tld: String },

    #[error("Saved domain {id} not found")]
    NotFound { id: u64 },

    #[error("Generated {produced} of {requested} unique domains after {attempts} attempts")]
    GenerationImpossible {
        requested: usize,
        produced: usize,
        attempts: usize,
    },

    #[error("DNS resolver error: {message}")]
    Dns { message: String },

    #[error("Parse error: {message}")]
    Parse {
        message: String,
        content: Option<String>,
    },

    #[error("IO error: {message}")]
    Io {
        message: String,
        path: Option<String>,
    },

    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl DomainGeneratorError {
    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Create a network error
    pub fn network(
        message: impl Into<String>,
        status_code: Option<u16>,
        url: Option<String>,
    ) -> Self {
        Self::Network {
            message: message.into(),
            status_code,
            url,
        }
    }

    /// Create an inconclusive lookup error
    pub fn inconclusive(
        domain: impl Into<String>,
        method: crate::types::CheckMethod,
        message: impl Into<String>,
    ) -> Self {
        Self::Inconclusive {
            domain: domain.into(),
            method,
            message: message.into(),
        }
    }

    pub fn unmapped_tld(tld: impl Into<String>) -> Self {
        Self::UnmappedTld { tld: tld.into() }
    }

    pub fn not_found(id: u64) -> Self {
        Self::NotFound { id }
    }

    pub fn generation_impossible(requested: usize, produced: usize, attempts: usize) -> Self {
        Self::GenerationImpossible {
            requested,
            produced,
            attempts,
        }
    }

    pub fn dns(message: impl Into<String>) -> Self {
        Self::Dns {
            message: message.into(),
        }
    }

    /// Create a parse error
    pub fn parse(message: impl Into<String>, content: Option<String>) -> Self {
        Self::Parse {
            message: message.into(),
            content,
        }
    }

    /// Create an IO error
    pub fn io(message: impl Into<String>, path: Option<String>) -> Self {
        Self::Io {
            message: message.into(),
            path,
        }
    }

    /// Create an internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// True for lookup failures the resolver recovers from by trying the next tier
    pub fn is_recoverable_lookup(&self) -> bool {
        matches!(
            self,
            Self::Network { .. } | Self::Inconclusive { .. } | Self::UnmappedTld { .. }
        )
    }

    /// Get user-friendly error message with suggestions
    pub fn user_message(&self) -> String {
        match self {
            Self::Config { message } => {
                format!("❌ Configuration problem: {}\n💡 Check your .env file or environment", message)
            }
            Self::Validation { message } => {
                format!("❌ Invalid options: {}\n💡 Pick at least one extension and a positive count", message)
            }
            Self::Network { message, status_code, .. } => {
                let status = status_code.map_or(String::new(), |c| format!(" ({})", c));
                format!("❌ Network error{}: {}\n💡 Check your internet connection", status, message)
            }
            Self::Inconclusive { domain, method, message } => {
                format!("⚠️  {} lookup for '{}' was inconclusive: {}", method, domain, message)
            }
            Self::UnmappedTld { tld } => {
                format!("⚠️  No RDAP server known for .{}; DNS will be used instead", tld)
            }
            Self::NotFound { id } => {
                format!("❌ Saved domain #{} no longer exists\n💡 Refresh the saved list", id)
            }
            Self::GenerationImpossible { requested, produced, .. } => {
                format!(
                    "⚠️  Only {} of {} unique names could be generated\n💡 Add keywords, extensions or enable prefixes/suffixes",
                    produced, requested
                )
            }
            Self::Dns { message } => {
                format!("❌ DNS resolver unavailable: {}\n💡 Check the system resolver configuration", message)
            }
            Self::Parse { message, .. } => {
                format!("❌ Parse error: {}\n💡 The saved domains file may be corrupted", message)
            }
            Self::Io { message, path } => {
                let path_info = path.as_ref().map_or(String::new(), |p| format!(" ({})", p));
                format!("❌ File error{}: {}\n💡 Check file permissions and paths", path_info, message)
            }
            Self::Internal { message } => {
                format!("❌ Internal error: {}\n💡 This is a bug, please report it", message)
            }
        }
    }
}

impl From<reqwest::Error> for DomainGeneratorError {
    fn from(err: reqwest::Error) -> Self {
        let status_code = err.status().map(|s| s.as_u16());
        let url = err.url().map(|u| u.to_string());

        if err.is_timeout() {
            Self::network("Request timed out", status_code, url)
        } else if err.is_connect() {
            Self::network("Connection failed", status_code, url)
        } else if err.is_request() {
            Self::network("Request failed", status_code, url)
        } else {
            Self::network(err.to_string(), status_code, url)
        }
    }
}

impl From<serde_json::Error> for DomainGeneratorError {
    fn from(err: serde_json::Error) -> Self {
        Self::parse(err.to_string(), None)
    }
}

impl From<std::io::Error> for DomainGeneratorError {
    fn from(err: std::io::Error) -> Self {
        Self::io(err.to_string(), None)
    }
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, DomainGeneratorError>;

#[macro_export]
macro_rules! validation_error {
    ($msg:expr) => {
        $crate::error::DomainGeneratorError::validation($msg)
    };
    ($fmt:expr, $($arg:tt)*) => {
        $crate::error::DomainGeneratorError::validation(format!($fmt, $($arg)*))
    };
}

#[macro_export]
macro_rules! config_error {
    ($msg:expr) => {
        $crate::error::DomainGeneratorError::config($msg)
    };
    ($fmt:expr, $($arg:tt)*) => {
        $crate::error::DomainGeneratorError::config(format!($fmt, $($arg)*))
    };
}
