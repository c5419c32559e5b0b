use serde::{Deserialize, Serialize};
use std::net::{Ipv4Addr, SocketAddr};
use std::time::Duration;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RecursionConfig {
    /// IPv4 literal of the server every recursive lookup starts from.
    #[serde(default = "default_root_server")]
    pub root_server: String,

    #[serde(default = "default_upstream_port")]
    pub upstream_port: u16,

    /// Per-hop deadline in milliseconds.
    #[serde(default = "default_query_timeout_ms")]
    pub query_timeout_ms: u64,

    #[serde(default = "default_max_hops")]
    pub max_hops: usize,
}

impl RecursionConfig {
    pub fn root_address(&self) -> Option<SocketAddr> {
        let ip: Ipv4Addr = self.root_server.trim().parse().ok()?;
        Some(SocketAddr::from((ip, self.upstream_port)))
    }

    pub fn query_timeout(&self) -> Duration {
        Duration::from_millis(self.query_timeout_ms)
    }
}

impl Default for RecursionConfig {
    fn default() -> Self {
        Self {
            root_server: default_root_server(),
            upstream_port: default_upstream_port(),
            query_timeout_ms: default_query_timeout_ms(),
            max_hops: default_max_hops(),
        }
    }
}

fn default_root_server() -> String {
    // a.root-servers.net
    "198.41.0.4".to_string()
}

fn default_upstream_port() -> u16 {
    53
}

fn default_query_timeout_ms() -> u64 {
    2000
}

fn default_max_hops() -> usize {
    16
}
