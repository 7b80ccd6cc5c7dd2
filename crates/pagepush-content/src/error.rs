//! Error types for content resolution.

use std::path::PathBuf;

/// Error while resolving page content.
#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    /// A local input file could not be read.
    #[error("Failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Manifest JSON parsing error.
    #[error("JSON parse error in {}: {source}", .path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Page-data YAML parsing error.
    #[error("YAML parse error in {}: {source}", .path.display())]
    Yaml {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    /// Template loading or rendering error.
    #[error("Template error: {0}")]
    Template(#[from] minijinja::Error),

    /// IO error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
