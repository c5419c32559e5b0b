use super::forwarding::{MessageBuilder, ResponseParser};
use super::transport::UdpTransport;
use async_trait::async_trait;
use ironzone_application::ports::UpstreamExchange;
use ironzone_domain::{DnsQuery, DnsResponse, DomainError};
use std::net::SocketAddr;
use std::time::Duration;
use tracing::debug;

/// `UpstreamExchange` over plain UDP.
#[derive(Debug, Default, Clone, Copy)]
pub struct UdpUpstreamExchange;

impl UdpUpstreamExchange {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl UpstreamExchange for UdpUpstreamExchange {
    async fn exchange(
        &self,
        server: SocketAddr,
        query: &DnsQuery,
        timeout: Duration,
    ) -> Result<DnsResponse, DomainError> {
        let (id, bytes) = MessageBuilder::build_query(query)?;
        let reply = UdpTransport::new(server).exchange(&bytes, id, timeout).await?;
        let parsed = ResponseParser::parse(&reply)?;

        if parsed.truncated {
            debug!(
                server = %server,
                domain = %query.domain,
                "Truncated reply, using the records that fit"
            );
        }

        Ok(parsed.response)
    }
}
