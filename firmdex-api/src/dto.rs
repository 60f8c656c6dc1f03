//! DTOs for API responses.
//!
//! On the wire the snapshot origin collapses to two labels: `"api"` when the
//! data was (re)fetched while serving this request, `"cache"` for a
//! within-window read. The responses derive `Deserialize` too, so the CLI
//! frontend parses the same shapes it serves.

use serde::{Deserialize, Serialize};

use firmdex_core::types::{CacheSnapshot, CompanyRecord, SnapshotSource};

/// Response for the company list and refresh endpoints.
#[derive(Debug, Serialize, Deserialize)]
pub struct CompanyListResponse {
    /// Always true on the 200 path.
    pub success: bool,
    /// The full record list of the served snapshot.
    pub data: Vec<CompanyRecord>,
    /// `data.len()`, for convenience.
    pub count: usize,
    /// `"cache"` or `"api"`.
    pub source: String,
    /// When the snapshot was fetched, RFC 3339.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
}

impl CompanyListResponse {
    /// Builds the response from a served snapshot.
    pub fn from_snapshot(snapshot: &CacheSnapshot) -> Self {
        Self {
            success: true,
            data: snapshot.records.as_ref().clone(),
            count: snapshot.len(),
            source: wire_source(snapshot.source).into(),
            timestamp: Some(snapshot.fetched_at.to_rfc3339()),
        }
    }
}

/// Response for a single-company lookup.
#[derive(Debug, Serialize, Deserialize)]
pub struct CompanyResponse {
    /// Always true on the 200 path.
    pub success: bool,
    /// The record.
    pub data: CompanyRecord,
}

/// Response for the health endpoint.
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Always true when the service answers at all.
    pub success: bool,
    /// Liveness label.
    pub status: String,
    /// Cache population count (0 before the first fetch).
    pub companies: usize,
    /// Origin of the current snapshot, if one exists.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<SnapshotSource>,
    /// When the current snapshot was fetched, RFC 3339, if one exists.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fetched_at: Option<String>,
}

/// Error body shared by every non-2xx response.
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiFailure {
    /// Always false.
    pub success: bool,
    /// Human-readable message.
    pub message: String,
    /// Underlying error detail, when one exists.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

fn wire_source(source: SnapshotSource) -> &'static str {
    match source {
        SnapshotSource::Cache => "cache",
        SnapshotSource::Primary | SnapshotSource::Fallback => "api",
    }
}
