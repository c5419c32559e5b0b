use super::clock::SystemClock;
use super::key::CacheKey;
use super::{CacheMetrics, CachedResponse};
use dashmap::DashMap;
use ironzone_application::ports::Clock;
use ironzone_domain::{DnsResponse, RecordType};
use rustc_hash::FxBuildHasher;
use std::sync::atomic::Ordering as AtomicOrdering;
use std::sync::Arc;
use tracing::debug;

/// TTL-bounded response cache.
///
/// Entries live until `insert time + min(answer TTLs)`. Expiry is checked on
/// read; an expired entry is removed by the read that finds it. There is no
/// size bound.
pub struct DnsResponseCache {
    pub(super) cache: DashMap<CacheKey, CachedResponse, FxBuildHasher>,
    pub(super) clock: Arc<dyn Clock>,
    pub(super) metrics: Arc<CacheMetrics>,
}

impl DnsResponseCache {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            cache: DashMap::with_hasher(FxBuildHasher),
            clock,
            metrics: Arc::new(CacheMetrics::default()),
        }
    }

    pub fn with_system_clock() -> Self {
        Self::new(Arc::new(SystemClock))
    }

    pub fn len(&self) -> usize {
        self.cache.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }

    pub fn metrics(&self) -> &CacheMetrics {
        &self.metrics
    }

    pub fn get(&self, domain: &str, record_type: RecordType) -> Option<Arc<DnsResponse>> {
        let key = CacheKey::new(domain, record_type);
        let now = self.clock.now();

        if let Some(entry) = self.cache.get(&key) {
            if !entry.is_expired_at(now) {
                self.metrics.hits.fetch_add(1, AtomicOrdering::Relaxed);
                return Some(Arc::clone(&entry.response));
            }
            drop(entry);

            // A concurrent put may have refreshed the entry since the read.
            if self
                .cache
                .remove_if(&key, |_, cached| cached.is_expired_at(now))
                .is_some()
            {
                self.metrics
                    .lazy_deletions
                    .fetch_add(1, AtomicOrdering::Relaxed);
                debug!(domain = %domain, record_type = %record_type, "Expired cache entry removed");
            }
        }

        self.metrics.misses.fetch_add(1, AtomicOrdering::Relaxed);
        None
    }

    /// Stores `response` under (domain, type) with the weakest-link TTL of
    /// its answer section. Returns false, storing nothing, when there are no
    /// answers.
    pub fn insert(&self, domain: &str, record_type: RecordType, response: DnsResponse) -> bool {
        let Some(ttl) = response.min_answer_ttl() else {
            return false;
        };

        let key = CacheKey::new(domain, record_type);
        let record = CachedResponse::new(response, ttl, self.clock.now());
        self.cache.insert(key, record);
        self.metrics.insertions.fetch_add(1, AtomicOrdering::Relaxed);

        debug!(
            domain = %domain,
            record_type = %record_type,
            ttl,
            "Inserted response into cache"
        );
        true
    }

    /// Seconds left on a live entry, without counting as a hit or miss.
    pub fn remaining_ttl(&self, domain: &str, record_type: RecordType) -> Option<u64> {
        let now = self.clock.now();
        self.cache
            .get(&CacheKey::new(domain, record_type))
            .filter(|entry| !entry.is_expired_at(now))
            .map(|entry| entry.remaining_ttl(now).as_secs())
    }
}
