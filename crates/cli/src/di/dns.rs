use anyhow::Context;
use ironzone_application::ports::CacheMaintenancePort;
use ironzone_application::use_cases::{
    AuthoritativeResolver, HandleDnsQueryUseCase, RecursiveResolver,
};
use ironzone_domain::Config;
use ironzone_infrastructure::dns::{
    DnsCacheMaintenance, DnsResponseCache, DnsServerHandler, UdpUpstreamExchange,
};
use ironzone_infrastructure::system::SystemHostnameResolver;
use ironzone_infrastructure::zone::load_zone_file;
use std::sync::Arc;
use tracing::info;

pub struct DnsServices {
    pub cache: Arc<DnsResponseCache>,
    pub handler: Arc<DnsServerHandler>,
    pub cache_maintenance: Arc<dyn CacheMaintenancePort>,
}

impl DnsServices {
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let zone_path = config
            .zone
            .path
            .as_deref()
            .context("No zone file configured")?;
        let zone = Arc::new(load_zone_file(zone_path)?);

        let root = config.recursion.root_address().with_context(|| {
            format!(
                "Root server '{}' is not an IPv4 address",
                config.recursion.root_server
            )
        })?;

        info!(
            origin = %zone.origin(),
            root = %root,
            "Initializing DNS services"
        );

        let cache = Arc::new(DnsResponseCache::with_system_clock());
        let timeout = config.recursion.query_timeout();

        let recursive = RecursiveResolver::new(
            Arc::new(UdpUpstreamExchange::new()),
            Arc::new(SystemHostnameResolver::new(timeout)),
            cache.clone(),
            root,
        )
        .with_timeout(timeout)
        .with_max_hops(config.recursion.max_hops);

        let use_case = Arc::new(HandleDnsQueryUseCase::new(
            AuthoritativeResolver::new(zone),
            cache.clone(),
            recursive,
        ));

        let cache_maintenance: Arc<dyn CacheMaintenancePort> =
            Arc::new(DnsCacheMaintenance::new(cache.clone()));

        Ok(Self {
            cache,
            handler: Arc::new(DnsServerHandler::new(use_case)),
            cache_maintenance,
        })
    }
}
