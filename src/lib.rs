//! Loadbook Library
//!
//! A Rust library for aggregating and querying precision rifle
//! load-development test records stored as per-test directories.
//!
//! This library provides tools for:
//! - Decoding legacy semantically-encoded test directory names
//! - Loading the authoritative `group.yaml` record file per test
//! - Merging both sources into one flat record with defined precedence
//! - Building an ordered in-memory corpus across a whole tests directory
//! - Evaluating range/equality/membership filters with selection carryover
//! - Deriving min/max filter bounds from a corpus

pub mod config;
pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod chrono_csv;
        pub mod corpus;
        pub mod filter;
        pub mod merger;
        pub mod name_parser;
        pub mod record_file;
        pub mod units;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export the engine entry points used by the presentation layer
pub use app::models::{NumericField, TestRecord, TextField};
pub use app::services::corpus::build_corpus;
pub use app::services::filter::{FilterEngine, Predicate, bounds};
pub use app::services::units::mm_to_moa;
pub use config::Config;

/// Result type alias for loadbook operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for loadbook operations
///
/// Most engine components recover locally and never surface these to the
/// caller; they exist for the surfaces that do propagate (record writing,
/// configuration, CLI plumbing) and for internal context before degradation.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Record file could not be read or parsed
    #[error("Record file error in '{path}': {message}")]
    RecordFile {
        path: String,
        message: String,
        #[source]
        source: Option<serde_yaml::Error>,
    },

    /// Legacy directory name did not match the encoded pattern
    #[error("Legacy name '{name}' does not match the encoded pattern: {message}")]
    LegacyName { name: String, message: String },

    /// Chronograph CSV parsing error
    #[error("Chronograph CSV error in '{path}': {message}")]
    ChronoCsv {
        path: String,
        message: String,
        #[source]
        source: Option<csv::Error>,
    },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

impl Error {
    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a record file error with context
    pub fn record_file(
        path: impl Into<String>,
        message: impl Into<String>,
        source: Option<serde_yaml::Error>,
    ) -> Self {
        Self::RecordFile {
            path: path.into(),
            message: message.into(),
            source,
        }
    }

    /// Create a legacy name error
    pub fn legacy_name(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::LegacyName {
            name: name.into(),
            message: message.into(),
        }
    }

    /// Create a chronograph CSV error with context
    pub fn chrono_csv(
        path: impl Into<String>,
        message: impl Into<String>,
        source: Option<csv::Error>,
    ) -> Self {
        Self::ChronoCsv {
            path: path.into(),
            message: message.into(),
            source,
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }
}

// Automatic conversions from common error types
impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}

impl From<serde_yaml::Error> for Error {
    fn from(error: serde_yaml::Error) -> Self {
        Self::RecordFile {
            path: "unknown".to_string(),
            message: "YAML parsing failed".to_string(),
            source: Some(error),
        }
    }
}

impl From<csv::Error> for Error {
    fn from(error: csv::Error) -> Self {
        Self::ChronoCsv {
            path: "unknown".to_string(),
            message: "CSV parsing failed".to_string(),
            source: Some(error),
        }
    }
}
