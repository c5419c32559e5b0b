use ironzone_infrastructure::dns::DnsServerHandler;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::UdpSocket;
use tracing::{debug, error, info, warn};

const MAX_QUERY_SIZE: usize = 4096;

/// Receives queries on `bind_addr` and answers each one from its own task.
///
/// A handler task that panics still gets a SERVFAIL sent back, so every
/// readable query receives exactly one reply.
pub async fn start_dns_server(
    bind_addr: SocketAddr,
    handler: Arc<DnsServerHandler>,
) -> anyhow::Result<()> {
    let socket = Arc::new(UdpSocket::bind(bind_addr).await?);
    info!(bind_address = %socket.local_addr()?, "DNS server listening");

    let mut recv_buf = vec![0u8; MAX_QUERY_SIZE];

    loop {
        let (n, from) = match socket.recv_from(&mut recv_buf).await {
            Ok(received) => received,
            Err(e) => {
                // ICMP port-unreachable from an earlier reply surfaces here on
                // some platforms; the socket itself is still usable.
                warn!(error = %e, "UDP recv error");
                continue;
            }
        };

        let query: Arc<[u8]> = Arc::from(&recv_buf[..n]);
        let handler = handler.clone();
        let socket = socket.clone();

        tokio::spawn(async move {
            let worker = {
                let handler = handler.clone();
                let query = query.clone();
                tokio::spawn(async move { handler.handle_raw(&query).await })
            };

            let response = match worker.await {
                Ok(response) => response,
                Err(e) => {
                    error!(client = %from, error = %e, "Query handler failed");
                    DnsServerHandler::servfail_for(&query)
                }
            };

            let Some(bytes) = response else {
                debug!(client = %from, "No reply for datagram");
                return;
            };

            if let Err(e) = socket.send_to(&bytes, from).await {
                warn!(client = %from, error = %e, "Failed to send response");
            }
        });
    }
}
