pub mod clock;
pub mod compaction;
pub mod key;
pub mod metrics;
pub mod port;
pub mod record;
pub mod storage;

pub use clock::SystemClock;
pub use key::CacheKey;
pub use metrics::CacheMetrics;
pub use record::CachedResponse;
pub use storage::DnsResponseCache;
