//! The directory cache service.
//!
//! Holds the process-wide [`CacheSnapshot`] and refreshes it lazily from the
//! configured [`CompanySource`]. A refresh either fully succeeds and replaces
//! the snapshot, or degrades to the curated fallback — the read path never
//! surfaces a source error to its caller.
//!
//! Concurrent stale readers may each trigger their own refresh; the last
//! completed write wins and every caller still receives a complete snapshot.
//! Single-flighting the fetch would be a hardening, not a behavior change.

use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

use firmdex_core::constants::DEFAULT_FRESHNESS_SECONDS;
use firmdex_core::error::{DirectoryError, Result};
use firmdex_core::traits::CompanySource;
use firmdex_core::types::{CacheSnapshot, CompanyRecord, SnapshotSource};
use firmdex_registry::fallback;

/// Cache configuration.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CacheConfig {
    /// Maximum snapshot age before a read triggers a new fetch, in seconds.
    pub freshness_seconds: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            freshness_seconds: DEFAULT_FRESHNESS_SECONDS,
        }
    }
}

impl CacheConfig {
    /// The freshness window as a `Duration`.
    pub fn freshness(&self) -> Duration {
        Duration::from_secs(self.freshness_seconds)
    }
}

/// Cache statistics, for the health endpoint.
#[derive(Clone, Debug, Serialize)]
pub struct CacheStats {
    /// Number of companies in the current snapshot (0 before first fetch).
    pub company_count: usize,
    /// When the current snapshot was fetched, if one exists.
    pub fetched_at: Option<DateTime<Utc>>,
    /// Origin of the current snapshot, if one exists.
    pub source: Option<SnapshotSource>,
}

/// The directory cache service.
///
/// Owned explicitly and injected into whatever serves requests; created at
/// startup, replaced-on-refresh internally, dropped at shutdown. No globals.
///
/// # Thread safety
///
/// The snapshot slot is guarded by an `RwLock` held only long enough to clone
/// or swap; the record list itself is behind an `Arc`, so replacement is a
/// pointer swap and readers never observe a partially-updated list.
pub struct DirectoryCache {
    source: Arc<dyn CompanySource>,
    snapshot: RwLock<Option<CacheSnapshot>>,
    config: CacheConfig,
}

impl DirectoryCache {
    /// Creates a cache with the default freshness window.
    pub fn new(source: Arc<dyn CompanySource>) -> Self {
        Self::with_config(source, CacheConfig::default())
    }

    /// Creates a cache with custom configuration.
    pub fn with_config(source: Arc<dyn CompanySource>, config: CacheConfig) -> Self {
        Self {
            source,
            snapshot: RwLock::new(None),
            config,
        }
    }

    /// The current snapshot, if any fetch has ever completed.
    fn current(&self) -> Option<CacheSnapshot> {
        self.snapshot.read().clone()
    }

    /// Returns a fresh-enough snapshot, fetching only when needed.
    ///
    /// A non-empty snapshot younger than the freshness window is returned
    /// as-is, retagged [`SnapshotSource::Cache`]. Anything else (no snapshot
    /// yet, stale, or empty) goes through [`refresh`](Self::refresh). Never
    /// returns an error: the refresh path degrades to fallback data.
    pub async fn get_snapshot(&self) -> CacheSnapshot {
        if let Some(snapshot) = self.current() {
            if snapshot.is_fresh(self.config.freshness()) {
                debug!(
                    age_secs = snapshot.age().as_secs(),
                    count = snapshot.len(),
                    "Serving snapshot from cache"
                );
                return snapshot.served_from_cache();
            }
        }

        self.refresh().await
    }

    /// Fetches a new snapshot and replaces the current one unconditionally.
    ///
    /// One attempt against the primary source, bounded by the source's own
    /// timeout. Any failure — and an empty-but-successful result — degrades
    /// to the curated fallback list, so the directory is never empty.
    #[instrument(skip(self))]
    pub async fn refresh(&self) -> CacheSnapshot {
        let (records, source) = match self.source.fetch().await {
            Ok(records) if !records.is_empty() => {
                let records = Self::keep_valid(records);
                if records.is_empty() {
                    warn!("Primary source returned only invalid records, using fallback");
                    (fallback::curated_companies(), SnapshotSource::Fallback)
                } else {
                    (records, SnapshotSource::Primary)
                }
            }
            Ok(_) => {
                warn!("Primary source returned no records, using fallback");
                (fallback::curated_companies(), SnapshotSource::Fallback)
            }
            Err(err) => {
                warn!(error = %err, "Primary source failed, using fallback");
                (fallback::curated_companies(), SnapshotSource::Fallback)
            }
        };

        let snapshot = CacheSnapshot::new(records, source);
        *self.snapshot.write() = Some(snapshot.clone());

        info!(
            count = snapshot.len(),
            source = %snapshot.source,
            "Snapshot replaced"
        );
        snapshot
    }

    /// Looks up a company by id in the current snapshot.
    ///
    /// Refreshes first only if no snapshot has ever been produced; a stale
    /// snapshot is used as-is. Not-found is a distinct, expected outcome.
    pub async fn get_by_id(&self, id: u32) -> Result<CompanyRecord> {
        let snapshot = match self.current() {
            Some(snapshot) => snapshot,
            None => self.refresh().await,
        };

        snapshot
            .get(id)
            .cloned()
            .ok_or(DirectoryError::CompanyNotFound(id))
    }

    /// Current cache statistics.
    pub fn stats(&self) -> CacheStats {
        match self.current() {
            Some(snapshot) => CacheStats {
                company_count: snapshot.len(),
                fetched_at: Some(snapshot.fetched_at),
                source: Some(snapshot.source),
            },
            None => CacheStats {
                company_count: 0,
                fetched_at: None,
                source: None,
            },
        }
    }

    /// Drops records that fail defensive validation.
    fn keep_valid(records: Vec<CompanyRecord>) -> Vec<CompanyRecord> {
        let total = records.len();
        let kept: Vec<CompanyRecord> = records
            .into_iter()
            .filter(|record| match record.validate() {
                Ok(()) => true,
                Err(err) => {
                    warn!(id = record.id, error = %err, "Dropping invalid record");
                    false
                }
            })
            .collect();

        if kept.len() < total {
            warn!(dropped = total - kept.len(), "Dropped invalid records");
        }
        kept
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;

    /// Source serving a fixed list, counting fetches.
    struct StaticSource {
        records: Vec<CompanyRecord>,
        calls: AtomicUsize,
    }

    impl StaticSource {
        fn new(records: Vec<CompanyRecord>) -> Self {
            Self {
                records,
                calls: AtomicUsize::new(0),
            }
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl CompanySource for StaticSource {
        async fn fetch(&self) -> Result<Vec<CompanyRecord>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(self.records.clone())
        }
    }

    /// Source that always fails like a dead network.
    struct FailingSource;

    #[async_trait]
    impl CompanySource for FailingSource {
        async fn fetch(&self) -> Result<Vec<CompanyRecord>> {
            Err(DirectoryError::SourceUnavailable("connection refused".into()))
        }
    }

    fn sample_records() -> Vec<CompanyRecord> {
        vec![
            CompanyRecord::public(1, "Acme", "NY", "Tech", 100, 2000, "ACME"),
            CompanyRecord::private(2, "Zenith", "NY", "Finance", 50, 1990),
        ]
    }

    #[tokio::test]
    async fn test_refresh_from_primary() {
        let source = Arc::new(StaticSource::new(sample_records()));
        let cache = DirectoryCache::new(source.clone());

        let snapshot = cache.refresh().await;
        assert_eq!(snapshot.source, SnapshotSource::Primary);
        assert_eq!(snapshot.len(), 2);
        assert_eq!(source.calls(), 1);
    }

    #[tokio::test]
    async fn test_fresh_read_does_not_refetch() {
        let source = Arc::new(StaticSource::new(sample_records()));
        let cache = DirectoryCache::new(source.clone());

        let first = cache.get_snapshot().await;
        let second = cache.get_snapshot().await;

        assert_eq!(first.source, SnapshotSource::Primary);
        assert_eq!(second.source, SnapshotSource::Cache);
        assert_eq!(second.fetched_at, first.fetched_at);
        assert_eq!(source.calls(), 1);
    }

    #[tokio::test]
    async fn test_stale_read_refetches() {
        let source = Arc::new(StaticSource::new(sample_records()));
        let config = CacheConfig {
            freshness_seconds: 0,
        };
        let cache = DirectoryCache::with_config(source.clone(), config);

        let first = cache.get_snapshot().await;
        let second = cache.get_snapshot().await;

        assert_eq!(first.source, SnapshotSource::Primary);
        assert_eq!(second.source, SnapshotSource::Primary);
        assert_eq!(source.calls(), 2);
    }

    #[tokio::test]
    async fn test_failing_source_degrades_to_fallback() {
        let cache = DirectoryCache::new(Arc::new(FailingSource));

        let snapshot = cache.get_snapshot().await;
        assert_eq!(snapshot.source, SnapshotSource::Fallback);
        assert_eq!(snapshot.len(), fallback::CURATED_COUNT);
        // Exactly the curated list.
        assert_eq!(*snapshot.records, fallback::curated_companies());
    }

    #[tokio::test]
    async fn test_empty_primary_result_degrades_to_fallback() {
        let cache = DirectoryCache::new(Arc::new(StaticSource::new(vec![])));

        let snapshot = cache.refresh().await;
        assert_eq!(snapshot.source, SnapshotSource::Fallback);
        assert_eq!(snapshot.len(), fallback::CURATED_COUNT);
    }

    #[tokio::test]
    async fn test_invalid_records_are_dropped() {
        let mut records = sample_records();
        records.push(CompanyRecord::private(3, "", "Nowhere", "Tech", 1, 2000));
        let cache = DirectoryCache::new(Arc::new(StaticSource::new(records)));

        let snapshot = cache.refresh().await;
        assert_eq!(snapshot.source, SnapshotSource::Primary);
        assert_eq!(snapshot.len(), 2);
    }

    #[tokio::test]
    async fn test_get_by_id_found_and_not_found() {
        let cache = DirectoryCache::new(Arc::new(StaticSource::new(sample_records())));

        let company = cache.get_by_id(2).await.unwrap();
        assert_eq!(company.name, "Zenith");

        let err = cache.get_by_id(99).await.unwrap_err();
        assert!(matches!(err, DirectoryError::CompanyNotFound(99)));
    }

    #[tokio::test]
    async fn test_get_by_id_triggers_initial_fetch_only() {
        let source = Arc::new(StaticSource::new(sample_records()));
        let config = CacheConfig {
            freshness_seconds: 0,
        };
        let cache = DirectoryCache::with_config(source.clone(), config);

        // Cold cache: the lookup must populate it.
        cache.get_by_id(1).await.unwrap();
        assert_eq!(source.calls(), 1);

        // Stale-but-present snapshot is used as-is.
        cache.get_by_id(1).await.unwrap();
        assert_eq!(source.calls(), 1);
    }

    #[tokio::test]
    async fn test_refresh_replaces_snapshot_wholesale() {
        let source = Arc::new(StaticSource::new(sample_records()));
        let cache = DirectoryCache::new(source.clone());

        let first = cache.refresh().await;
        let second = cache.refresh().await;

        assert!(second.fetched_at >= first.fetched_at);
        assert!(!Arc::ptr_eq(&first.records, &second.records));
        assert_eq!(cache.stats().company_count, 2);
    }

    #[tokio::test]
    async fn test_stats_before_and_after_fetch() {
        let cache = DirectoryCache::new(Arc::new(StaticSource::new(sample_records())));

        let stats = cache.stats();
        assert_eq!(stats.company_count, 0);
        assert!(stats.fetched_at.is_none());
        assert!(stats.source.is_none());

        cache.refresh().await;
        let stats = cache.stats();
        assert_eq!(stats.company_count, 2);
        assert_eq!(stats.source, Some(SnapshotSource::Primary));
        assert!(stats.fetched_at.is_some());
    }
}
