use super::storage::DnsResponseCache;
use std::sync::atomic::Ordering as AtomicOrdering;
use tracing::debug;

impl DnsResponseCache {
    /// Drops every expired entry. Returns the number removed.
    pub fn compact(&self) -> usize {
        let now = self.clock.now();
        let before = self.cache.len();
        self.cache.retain(|_, record| !record.is_expired_at(now));
        let removed = before.saturating_sub(self.cache.len());

        self.metrics
            .compactions
            .fetch_add(1, AtomicOrdering::Relaxed);

        if removed > 0 {
            debug!(
                removed,
                cache_size = self.cache.len(),
                "Cache compaction completed"
            );
        }

        removed
    }
}
