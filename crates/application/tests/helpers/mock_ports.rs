use async_trait::async_trait;
use ironzone_application::ports::{
    CacheMetricsSnapshot, DnsCachePort, HostnameResolver, UpstreamExchange,
};
use ironzone_domain::{DnsQuery, DnsResponse, DomainError, RecordType};
use std::collections::{HashMap, HashSet, VecDeque};
use std::net::{Ipv4Addr, SocketAddr};
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Upstream exchange answering from a per-server script.
///
/// Each server has a queue of replies; the last reply repeats once the queue
/// is down to one entry. Servers marked silent wait out the deadline and time
/// out, like a real server that never answers.
#[derive(Default)]
pub struct ScriptedUpstream {
    replies: Mutex<HashMap<SocketAddr, VecDeque<Result<DnsResponse, DomainError>>>>,
    silent: Mutex<HashSet<SocketAddr>>,
    calls: Mutex<Vec<SocketAddr>>,
}

impl ScriptedUpstream {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reply(&self, server: SocketAddr, response: DnsResponse) -> &Self {
        self.replies
            .lock()
            .unwrap()
            .entry(server)
            .or_default()
            .push_back(Ok(response));
        self
    }

    pub fn fail(&self, server: SocketAddr, error: DomainError) -> &Self {
        self.replies
            .lock()
            .unwrap()
            .entry(server)
            .or_default()
            .push_back(Err(error));
        self
    }

    pub fn silent(&self, server: SocketAddr) -> &Self {
        self.silent.lock().unwrap().insert(server);
        self
    }

    pub fn calls(&self) -> Vec<SocketAddr> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl UpstreamExchange for ScriptedUpstream {
    async fn exchange(
        &self,
        server: SocketAddr,
        _query: &DnsQuery,
        timeout: Duration,
    ) -> Result<DnsResponse, DomainError> {
        self.calls.lock().unwrap().push(server);
        let is_silent = self.silent.lock().unwrap().contains(&server);

        if is_silent {
            tokio::time::sleep(timeout).await;
            return Err(DomainError::TransportTimeout {
                server: server.to_string(),
            });
        }

        let mut replies = self.replies.lock().unwrap();
        let queue = replies.get_mut(&server).ok_or_else(|| {
            DomainError::IoError(format!("No scripted reply for {}", server))
        })?;

        if queue.len() > 1 {
            queue.pop_front().unwrap()
        } else {
            queue
                .front()
                .cloned()
                .unwrap_or_else(|| Err(DomainError::IoError("Empty script".to_string())))
        }
    }
}

#[derive(Default)]
pub struct MockHostnameResolver {
    addresses: Mutex<HashMap<String, Ipv4Addr>>,
    lookups: Mutex<Vec<String>>,
}

impl MockHostnameResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_address(&self, hostname: &str, ip: &str) {
        self.addresses
            .lock()
            .unwrap()
            .insert(hostname.to_string(), ip.parse().unwrap());
    }

    pub fn lookups(&self) -> Vec<String> {
        self.lookups.lock().unwrap().clone()
    }
}

#[async_trait]
impl HostnameResolver for MockHostnameResolver {
    async fn resolve_ipv4(&self, hostname: &str) -> Result<Option<Ipv4Addr>, DomainError> {
        self.lookups.lock().unwrap().push(hostname.to_string());
        Ok(self.addresses.lock().unwrap().get(hostname).copied())
    }
}

/// Cache without expiry; TTL behaviour is covered by the infrastructure
/// cache tests.
#[derive(Default)]
pub struct InMemoryCache {
    entries: Mutex<HashMap<(String, RecordType), Arc<DnsResponse>>>,
    puts: Mutex<u64>,
}

impl InMemoryCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn preload(&self, domain: &str, record_type: RecordType, response: DnsResponse) {
        self.entries
            .lock()
            .unwrap()
            .insert((domain.to_string(), record_type), Arc::new(response));
    }

    pub fn peek(&self, domain: &str, record_type: RecordType) -> Option<Arc<DnsResponse>> {
        self.entries
            .lock()
            .unwrap()
            .get(&(domain.to_string(), record_type))
            .cloned()
    }

    pub fn put_count(&self) -> u64 {
        *self.puts.lock().unwrap()
    }
}

impl DnsCachePort for InMemoryCache {
    fn get(&self, domain: &str, record_type: RecordType) -> Option<Arc<DnsResponse>> {
        self.peek(domain, record_type)
    }

    fn put(&self, domain: &str, record_type: RecordType, response: DnsResponse) -> bool {
        if !response.has_answers() {
            return false;
        }
        *self.puts.lock().unwrap() += 1;
        self.preload(domain, record_type, response);
        true
    }

    fn len(&self) -> usize {
        self.entries.lock().unwrap().len()
    }

    fn metrics_snapshot(&self) -> CacheMetricsSnapshot {
        CacheMetricsSnapshot {
            total_entries: self.len(),
            insertions: self.put_count(),
            ..CacheMetricsSnapshot::default()
        }
    }
}
