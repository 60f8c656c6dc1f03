//! Error types for Firmdex.
//!
//! This module provides the error hierarchy using `thiserror`. The cache
//! service swallows source-level errors into the fallback path; the variants
//! here are what the remaining surfaces (lookup, config, API) propagate.

use thiserror::Error;

/// Result type alias using `DirectoryError`.
pub type Result<T> = std::result::Result<T, DirectoryError>;

/// Main error type for all Firmdex operations.
#[derive(Debug, Error)]
pub enum DirectoryError {
    // ═══════════════════════════════════════════════════════════════════════════
    // EXTERNAL SOURCE ERRORS (recovered by the cache via fallback)
    // ═══════════════════════════════════════════════════════════════════════════

    /// The registry could not be reached (connect failure, timeout).
    #[error("Registry unavailable: {0}")]
    SourceUnavailable(String),

    /// The registry answered with a non-success HTTP status.
    #[error("Registry returned status {0}")]
    SourceStatus(u16),

    /// The registry payload did not have the expected shape.
    #[error("Malformed registry payload: {0}")]
    MalformedPayload(String),

    // ═══════════════════════════════════════════════════════════════════════════
    // LOOKUP ERRORS (expected outcomes, not failures)
    // ═══════════════════════════════════════════════════════════════════════════

    /// No company with the given id exists in the current snapshot.
    #[error("Company not found: {0}")]
    CompanyNotFound(u32),

    // ═══════════════════════════════════════════════════════════════════════════
    // INTERNAL ERRORS
    // ═══════════════════════════════════════════════════════════════════════════

    /// A company record failed validation.
    #[error("Invalid company record: {0}")]
    InvalidRecord(String),

    /// Invalid or missing configuration.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Unexpected internal failure. The only path that should surface as a
    /// 500-equivalent response.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl DirectoryError {
    /// Returns true for source-level failures the cache recovers from.
    pub fn is_source_failure(&self) -> bool {
        matches!(
            self,
            DirectoryError::SourceUnavailable(_)
                | DirectoryError::SourceStatus(_)
                | DirectoryError::MalformedPayload(_)
        )
    }
}
