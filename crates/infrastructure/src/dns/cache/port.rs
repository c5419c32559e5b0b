use super::storage::DnsResponseCache;
use ironzone_application::ports::{CacheMetricsSnapshot, DnsCachePort};
use ironzone_domain::{DnsResponse, RecordType};
use std::sync::Arc;

impl DnsCachePort for DnsResponseCache {
    fn get(&self, domain: &str, record_type: RecordType) -> Option<Arc<DnsResponse>> {
        DnsResponseCache::get(self, domain, record_type)
    }

    fn put(&self, domain: &str, record_type: RecordType, response: DnsResponse) -> bool {
        self.insert(domain, record_type, response)
    }

    fn len(&self) -> usize {
        DnsResponseCache::len(self)
    }

    fn metrics_snapshot(&self) -> CacheMetricsSnapshot {
        self.metrics.snapshot(self.cache.len())
    }
}
