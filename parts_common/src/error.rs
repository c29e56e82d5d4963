//! Error types shared by the storefront crates

use thiserror::Error;

/// Unified error type for storefront API operations
#[derive(Debug, Error)]
pub enum CatalogError {
    /// HTTP request failed (connection refused, reset, etc.)
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
    /// Failed to parse JSON response
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),
    /// HTTP error status code
    #[error("HTTP error: {0}")]
    HttpStatus(reqwest::StatusCode),
    /// Unrecognized generation tag in a filter selection
    #[error("Unknown generation: {0}")]
    UnknownGeneration(String),
    /// Unrecognized category tag in a filter selection
    #[error("Unknown category: {0}")]
    UnknownCategory(String),
    /// Unrecognized sort mode
    #[error("Unknown sort mode: {0}")]
    UnknownSortMode(String),
}

/// Result alias for storefront operations
pub type Result<T> = std::result::Result<T, CatalogError>;
