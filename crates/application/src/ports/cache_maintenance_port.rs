use async_trait::async_trait;
use ironzone_domain::DomainError;

/// Outcome of a cache compaction cycle.
#[derive(Debug, Default, Clone)]
pub struct CacheCompactionOutcome {
    pub entries_removed: usize,
    pub cache_size: usize,
}

/// Port for periodic cache maintenance.
///
/// Expiry is enforced lazily on read; compaction only reclaims memory held by
/// entries nobody asked for again.
#[async_trait]
pub trait CacheMaintenancePort: Send + Sync {
    async fn run_compaction_cycle(&self) -> Result<CacheCompactionOutcome, DomainError>;
}
