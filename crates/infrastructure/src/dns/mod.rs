pub mod cache;
pub mod cache_maintenance;
pub mod forwarding;
pub mod server;
pub mod transport;
pub mod upstream;

pub use cache::{CacheKey, CacheMetrics, CachedResponse, DnsResponseCache, SystemClock};
pub use cache_maintenance::DnsCacheMaintenance;
pub use server::DnsServerHandler;
pub use upstream::UdpUpstreamExchange;
