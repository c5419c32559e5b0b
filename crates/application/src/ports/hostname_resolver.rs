use async_trait::async_trait;
use ironzone_domain::DomainError;
use std::net::Ipv4Addr;

/// Name-to-address lookup used when a referral carries no glue.
#[async_trait]
pub trait HostnameResolver: Send + Sync {
    async fn resolve_ipv4(&self, hostname: &str) -> Result<Option<Ipv4Addr>, DomainError>;
}
