//! Caching layer for route queries.
//!
//! Route searches are deterministic for a given network, so results can
//! be reused until the network changes. Each loaded network gets a new
//! generation number, and the generation is part of the cache key, so a
//! reload can never serve a route computed against the old network.

use std::sync::Arc;
use std::time::Duration;

use moka::future::Cache as MokaCache;

use crate::domain::StationId;
use crate::planner::RoutePlan;

/// Cache key: (network generation, start, end).
type RouteKey = (u64, StationId, StationId);

/// Configuration for the cache.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheConfig {
    /// TTL for cached entries.
    pub ttl: Duration,

    /// Maximum number of cached entries.
    pub max_capacity: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            ttl: Duration::from_secs(600),
            max_capacity: 10_000,
        }
    }
}

/// Cache of route plans.
pub struct RouteCache {
    routes: MokaCache<RouteKey, Arc<RoutePlan>>,
}

impl RouteCache {
    /// Create a new cache with the given configuration.
    pub fn new(config: &CacheConfig) -> Self {
        let routes = MokaCache::builder()
            .time_to_live(config.ttl)
            .max_capacity(config.max_capacity)
            .build();

        Self { routes }
    }

    /// Get a cached plan.
    pub async fn get(&self, generation: u64, start: StationId, end: StationId) -> Option<Arc<RoutePlan>> {
        self.routes.get(&(generation, start, end)).await
    }

    /// Insert a plan into the cache.
    pub async fn insert(&self, generation: u64, start: StationId, end: StationId, plan: Arc<RoutePlan>) {
        self.routes.insert((generation, start, end), plan).await;
    }

    /// Get cache statistics (for monitoring).
    pub fn entry_count(&self) -> u64 {
        self.routes.entry_count()
    }

    /// Invalidate all cached entries.
    pub fn invalidate_all(&self) {
        self.routes.invalidate_all();
    }
}
