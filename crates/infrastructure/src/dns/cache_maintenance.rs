use super::cache::DnsResponseCache;

use async_trait::async_trait;
use ironzone_application::ports::{CacheCompactionOutcome, CacheMaintenancePort};
use ironzone_domain::DomainError;
use std::sync::Arc;
use tracing::debug;

/// Infrastructure adapter implementing `CacheMaintenancePort`.
pub struct DnsCacheMaintenance {
    cache: Arc<DnsResponseCache>,
}

impl DnsCacheMaintenance {
    pub fn new(cache: Arc<DnsResponseCache>) -> Self {
        Self { cache }
    }
}

#[async_trait]
impl CacheMaintenancePort for DnsCacheMaintenance {
    async fn run_compaction_cycle(&self) -> Result<CacheCompactionOutcome, DomainError> {
        let entries_removed = self.cache.compact();
        let cache_size = self.cache.len();

        debug!(
            entries_removed,
            cache_size,
            hit_rate = self.cache.metrics().hit_rate(),
            "Compaction cycle finished"
        );

        Ok(CacheCompactionOutcome {
            entries_removed,
            cache_size,
        })
    }
}
