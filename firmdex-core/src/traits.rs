//! Common traits for Firmdex.
//!
//! These traits define the seams between the cache service and the things it
//! fetches from, enabling stub sources in tests.

use async_trait::async_trait;

use crate::error::Result;
use crate::types::CompanyRecord;

/// Interface for anything the directory cache can refresh from.
///
/// Implementations might use:
/// - An HTTP ticker registry (production)
/// - A fixed in-memory list (testing)
/// - An always-failing source (fallback-path testing)
#[async_trait]
pub trait CompanySource: Send + Sync {
    /// Fetches the full company list from the source.
    ///
    /// One attempt per call; the implementation is expected to bound its own
    /// latency (e.g. an HTTP timeout). Errors are reported, not retried.
    async fn fetch(&self) -> Result<Vec<CompanyRecord>>;
}
