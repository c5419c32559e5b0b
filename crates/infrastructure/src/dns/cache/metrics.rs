use ironzone_application::ports::CacheMetricsSnapshot;
use std::sync::atomic::{AtomicU64, Ordering as AtomicOrdering};

#[derive(Default)]
pub struct CacheMetrics {
    pub hits: AtomicU64,
    pub misses: AtomicU64,
    pub insertions: AtomicU64,
    pub lazy_deletions: AtomicU64,
    pub compactions: AtomicU64,
}

impl CacheMetrics {
    pub fn hit_rate(&self) -> f64 {
        let hits = self.hits.load(AtomicOrdering::Relaxed) as f64;
        let total = hits + self.misses.load(AtomicOrdering::Relaxed) as f64;

        if total > 0.0 {
            (hits / total) * 100.0
        } else {
            0.0
        }
    }

    pub fn snapshot(&self, total_entries: usize) -> CacheMetricsSnapshot {
        CacheMetricsSnapshot {
            total_entries,
            hits: self.hits.load(AtomicOrdering::Relaxed),
            misses: self.misses.load(AtomicOrdering::Relaxed),
            insertions: self.insertions.load(AtomicOrdering::Relaxed),
            lazy_deletions: self.lazy_deletions.load(AtomicOrdering::Relaxed),
            compactions: self.compactions.load(AtomicOrdering::Relaxed),
        }
    }
}
