//! Cache snapshot type.
//!
//! A snapshot is the process-wide view of the full company list at one point
//! in time. It is replaced wholesale on each refresh, never mutated in place;
//! the record list sits behind an `Arc` so replacement is a pointer swap and
//! readers never observe a partially-updated list.

use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::CompanyRecord;

/// Where a snapshot's data came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SnapshotSource {
    /// Fetched from the external registry during this call.
    Primary,
    /// The curated fallback dataset (registry unavailable).
    Fallback,
    /// Served from memory within the freshness window.
    Cache,
}

impl SnapshotSource {
    /// Lowercase label for logs and payloads.
    pub fn as_str(&self) -> &'static str {
        match self {
            SnapshotSource::Primary => "primary",
            SnapshotSource::Fallback => "fallback",
            SnapshotSource::Cache => "cache",
        }
    }
}

impl std::fmt::Display for SnapshotSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An immutable view of the full company list at one point in time.
#[derive(Clone, Debug)]
pub struct CacheSnapshot {
    /// The full record list. Shared, never mutated after construction.
    pub records: Arc<Vec<CompanyRecord>>,
    /// When the fetch that produced this snapshot completed.
    pub fetched_at: DateTime<Utc>,
    /// Where the data came from.
    pub source: SnapshotSource,
}

impl CacheSnapshot {
    /// Creates a snapshot timestamped now.
    pub fn new(records: Vec<CompanyRecord>, source: SnapshotSource) -> Self {
        Self {
            records: Arc::new(records),
            fetched_at: Utc::now(),
            source,
        }
    }

    /// Age of the snapshot.
    pub fn age(&self) -> Duration {
        (Utc::now() - self.fetched_at).to_std().unwrap_or_default()
    }

    /// True if the snapshot is non-empty and younger than `window`.
    pub fn is_fresh(&self, window: Duration) -> bool {
        !self.records.is_empty() && self.age() < window
    }

    /// The same snapshot, retagged as served from memory.
    ///
    /// `fetched_at` and the record list are untouched; only the source label
    /// changes, so callers can tell a cache read from a fetch.
    pub fn served_from_cache(&self) -> Self {
        Self {
            records: Arc::clone(&self.records),
            fetched_at: self.fetched_at,
            source: SnapshotSource::Cache,
        }
    }

    /// Looks up a record by id within this snapshot.
    pub fn get(&self, id: u32) -> Option<&CompanyRecord> {
        self.records.iter().find(|record| record.id == id)
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True if the snapshot holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
