use async_trait::async_trait;
use ironzone_application::ports::HostnameResolver;
use ironzone_domain::DomainError;
use std::net::{IpAddr, Ipv4Addr};
use std::time::Duration;
use tokio::net::lookup_host;
use tracing::debug;

/// Host lookup through the operating system resolver, used for name servers
/// that arrive without glue.
pub struct SystemHostnameResolver {
    timeout: Duration,
}

impl SystemHostnameResolver {
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }
}

#[async_trait]
impl HostnameResolver for SystemHostnameResolver {
    async fn resolve_ipv4(&self, hostname: &str) -> Result<Option<Ipv4Addr>, DomainError> {
        debug!(hostname = %hostname, "Looking up name server address");

        let addresses = tokio::time::timeout(self.timeout, lookup_host((hostname, 0)))
            .await
            .map_err(|_| DomainError::TransportTimeout {
                server: hostname.to_string(),
            })?
            .map_err(|e| DomainError::IoError(format!("Lookup of {} failed: {}", hostname, e)))?;

        let ipv4 = addresses.map(|addr| addr.ip()).find_map(|ip| match ip {
            IpAddr::V4(v4) => Some(v4),
            IpAddr::V6(_) => None,
        });

        debug!(hostname = %hostname, address = ?ipv4, "Name server lookup finished");
        Ok(ipv4)
    }
}
