//! Application state for the web layer.

use std::path::PathBuf;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use tokio::sync::RwLock;

use crate::cache::{CacheConfig, RouteCache};
use crate::domain::Network;

/// One loaded version of the network.
///
/// Snapshots are never mutated. A reload builds a new snapshot and swaps
/// it in, so a search that already holds the old one keeps a consistent
/// view until it finishes.
#[derive(Debug)]
pub struct NetworkSnapshot {
    /// The network itself
    pub network: Arc<Network>,

    /// Incremented on every reload; part of the route cache key
    pub generation: u64,

    /// When this snapshot was installed
    pub loaded_at: DateTime<Utc>,
}

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Current network snapshot
    network: Arc<RwLock<Arc<NetworkSnapshot>>>,

    /// Cached route plans
    pub cache: Arc<RouteCache>,

    /// File the network was loaded from, if any
    pub source: Option<Arc<PathBuf>>,
}

impl AppState {
    /// Create a new app state serving `network`.
    pub fn new(network: Network, cache_config: &CacheConfig, source: Option<PathBuf>) -> Self {
        let snapshot = NetworkSnapshot {
            network: Arc::new(network),
            generation: 1,
            loaded_at: Utc::now(),
        };
        Self {
            network: Arc::new(RwLock::new(Arc::new(snapshot))),
            cache: Arc::new(RouteCache::new(cache_config)),
            source: source.map(Arc::new),
        }
    }

    /// The current snapshot.
    pub async fn snapshot(&self) -> Arc<NetworkSnapshot> {
        self.network.read().await.clone()
    }

    /// Swap in a new network and drop every cached route.
    pub async fn replace(&self, network: Network) -> Arc<NetworkSnapshot> {
        let mut guard = self.network.write().await;
        let snapshot = Arc::new(NetworkSnapshot {
            network: Arc::new(network),
            generation: guard.generation + 1,
            loaded_at: Utc::now(),
        });
        *guard = snapshot.clone();
        drop(guard);

        self.cache.invalidate_all();
        snapshot
    }
}
