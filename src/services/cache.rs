use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;

use crate::models::JobPosting;
use crate::services::store::{JobStore, StoreError};

/// In-memory cache in front of the job listing
///
/// Jobs change rarely compared to how often profiles are matched against
/// them, so the listing is kept for `ttl_secs` before the store is asked again.
pub struct JobCache {
    cache: moka::future::Cache<String, Arc<Vec<JobPosting>>>,
    ttl_secs: u64,
}

impl JobCache {
    /// Create a new job cache
    pub fn new(max_entries: u64, ttl_secs: u64) -> Self {
        let cache = moka::future::CacheBuilder::new(max_entries)
            .time_to_live(Duration::from_secs(ttl_secs))
            .build();

        Self { cache, ttl_secs }
    }

    /// Return the cached job listing, fetching it from the store on a miss
    ///
    /// With `refresh` set the cached entry is ignored and replaced.
    pub async fn jobs(
        &self,
        store: &dyn JobStore,
        refresh: bool,
    ) -> Result<Arc<Vec<JobPosting>>, StoreError> {
        let key = CacheKey::jobs();

        if !refresh {
            if let Some(jobs) = self.cache.get(&key).await {
                tracing::trace!("Cache hit: {}", key);
                return Ok(jobs);
            }
        }

        tracing::trace!("Cache miss: {}", key);

        let jobs = Arc::new(store.list_jobs().await?);
        self.cache.insert(key, Arc::clone(&jobs)).await;

        Ok(jobs)
    }

    /// Drop the cached job listing
    pub async fn invalidate_jobs(&self) {
        self.cache.invalidate(&CacheKey::jobs()).await;
    }

    /// Get cache statistics
    ///
    /// Pending inserts and invalidations are applied first so the entry
    /// count reflects them.
    pub async fn stats(&self) -> CacheStats {
        self.cache.run_pending_tasks().await;

        CacheStats {
            entries: self.cache.entry_count(),
            ttl_secs: self.ttl_secs,
        }
    }
}

/// Cache statistics
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheStats {
    pub entries: u64,
    pub ttl_secs: u64,
}

/// Cache key builder
pub struct CacheKey;

impl CacheKey {
    /// Build the cache key for the full job listing
    pub fn jobs() -> String {
        "jobs:all".to_string()
    }
}
