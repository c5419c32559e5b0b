use ironzone_domain::{DnsResponse, RecordType};
use std::sync::Arc;

/// Snapshot of response cache counters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CacheMetricsSnapshot {
    pub total_entries: usize,
    pub hits: u64,
    pub misses: u64,
    pub insertions: u64,
    pub lazy_deletions: u64,
    /// Compaction sweeps run, whether or not they removed anything.
    pub compactions: u64,
}

/// Time-bounded store of recursive answers keyed by (name, type).
///
/// Each call is individually atomic; no transaction spans several calls, so
/// two concurrent lookups of the same key may both miss and both `put`.
pub trait DnsCachePort: Send + Sync {
    /// Live entry for the key. An entry found past its expiry is removed and
    /// reported as a miss.
    fn get(&self, domain: &str, record_type: RecordType) -> Option<Arc<DnsResponse>>;

    /// Stores `response` with expiry `now + min(answer TTLs)`, replacing any
    /// existing entry. Responses without answer records are not stored;
    /// returns whether an entry was written.
    fn put(&self, domain: &str, record_type: RecordType, response: DnsResponse) -> bool;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn metrics_snapshot(&self) -> CacheMetricsSnapshot;
}
