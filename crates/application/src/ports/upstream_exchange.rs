use async_trait::async_trait;
use ironzone_domain::{DnsQuery, DnsResponse, DomainError};
use std::net::SocketAddr;
use std::time::Duration;

/// One query/reply round trip with a single upstream server.
#[async_trait]
pub trait UpstreamExchange: Send + Sync {
    /// Sends `query` to `server` and waits at most `timeout` for its reply.
    ///
    /// Returns `DomainError::TransportTimeout` when the deadline passes.
    async fn exchange(
        &self,
        server: SocketAddr,
        query: &DnsQuery,
        timeout: Duration,
    ) -> Result<DnsResponse, DomainError>;
}
