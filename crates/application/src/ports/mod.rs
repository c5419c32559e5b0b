mod cache_maintenance_port;
mod clock;
mod dns_cache_port;
mod hostname_resolver;
mod upstream_exchange;

pub use cache_maintenance_port::{CacheCompactionOutcome, CacheMaintenancePort};
pub use clock::Clock;
pub use dns_cache_port::{CacheMetricsSnapshot, DnsCachePort};
pub use hostname_resolver::HostnameResolver;
pub use upstream_exchange::UpstreamExchange;

// Re-export for convenience
pub use ironzone_domain::{DnsQuery, DnsResponse};
