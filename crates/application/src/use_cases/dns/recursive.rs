use crate::ports::{DnsCachePort, HostnameResolver, UpstreamExchange};
use ironzone_domain::dns_query::normalize_name;
use ironzone_domain::{DnsQuery, DnsResponse, DomainError, RecordType};
use std::net::{Ipv4Addr, SocketAddr};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{debug, warn};

pub const DEFAULT_QUERY_TIMEOUT: Duration = Duration::from_secs(2);
pub const DEFAULT_MAX_HOPS: usize = 16;

/// Iterative resolver: asks the root, follows referrals, stops at the first
/// answer.
///
/// Every hop talks to the same port as the root address.
pub struct RecursiveResolver {
    upstream: Arc<dyn UpstreamExchange>,
    hostnames: Arc<dyn HostnameResolver>,
    cache: Arc<dyn DnsCachePort>,
    root: SocketAddr,
    timeout: Duration,
    max_hops: usize,
}

impl RecursiveResolver {
    pub fn new(
        upstream: Arc<dyn UpstreamExchange>,
        hostnames: Arc<dyn HostnameResolver>,
        cache: Arc<dyn DnsCachePort>,
        root: SocketAddr,
    ) -> Self {
        Self {
            upstream,
            hostnames,
            cache,
            root,
            timeout: DEFAULT_QUERY_TIMEOUT,
            max_hops: DEFAULT_MAX_HOPS,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_max_hops(mut self, max_hops: usize) -> Self {
        self.max_hops = max_hops;
        self
    }

    /// Resolves `query`, converting every failure into SERVFAIL.
    pub async fn resolve(&self, query: &DnsQuery) -> DnsResponse {
        match self.resolve_iteratively(query).await {
            Ok(response) => response,
            Err(e) => {
                if e.is_timeout() {
                    warn!(domain = %query.domain, error = %e, "Upstream timed out");
                } else {
                    warn!(
                        domain = %query.domain,
                        record_type = %query.record_type,
                        error = %e,
                        "Recursive resolution failed"
                    );
                }
                DnsResponse::servfail()
            }
        }
    }

    pub async fn resolve_iteratively(&self, query: &DnsQuery) -> Result<DnsResponse, DomainError> {
        let start = Instant::now();
        let mut server = self.root;

        for hop in 1..=self.max_hops {
            debug!(
                domain = %query.domain,
                record_type = %query.record_type,
                server = %server,
                hop,
                "Querying upstream"
            );

            let reply = self.upstream.exchange(server, query, self.timeout).await?;

            if reply.has_answers() {
                let answer = Self::answer_of(&reply);
                self.cache
                    .put(&query.domain, query.record_type, answer.clone());

                if answer.is_success() {
                    debug!(
                        domain = %query.domain,
                        hops = hop,
                        answers = answer.answers.len(),
                        elapsed_us = start.elapsed().as_micros() as u64,
                        "Recursive resolution complete"
                    );
                    return Ok(answer);
                }
            }

            server = self.next_server(query, &reply).await?;
        }

        Err(DomainError::ReferralLoop {
            hops: self.max_hops,
        })
    }

    /// Rcode and answer section of an upstream reply, without its AA bit or
    /// referral sections. The same value is returned and cached.
    fn answer_of(reply: &DnsResponse) -> DnsResponse {
        DnsResponse {
            answers: reply.answers.clone(),
            ..DnsResponse::new(reply.rcode)
        }
    }

    /// Picks the next server from a referral: glue for any delegated name
    /// first, then a host lookup for each name in order.
    async fn next_server(
        &self,
        query: &DnsQuery,
        reply: &DnsResponse,
    ) -> Result<SocketAddr, DomainError> {
        let delegations: Vec<String> = reply
            .authority
            .iter()
            .filter(|r| r.is_type(RecordType::NS))
            .map(|r| normalize_name(&r.data))
            .collect();

        if delegations.is_empty() {
            return Err(DomainError::UnresolvableDelegation(query.domain.to_string()));
        }

        for ns in &delegations {
            if let Some(ip) = Self::glue_for(reply, ns) {
                debug!(ns = %ns, address = %ip, "Following referral with glue");
                return Ok(self.upstream_addr(ip));
            }
        }

        for ns in &delegations {
            match self.hostnames.resolve_ipv4(ns).await {
                Ok(Some(ip)) => {
                    debug!(ns = %ns, address = %ip, "Following referral via host lookup");
                    return Ok(self.upstream_addr(ip));
                }
                Ok(None) => debug!(ns = %ns, "Name server has no IPv4 address"),
                Err(e) => warn!(ns = %ns, error = %e, "Name server lookup failed"),
            }
        }

        Err(DomainError::UnresolvableDelegation(query.domain.to_string()))
    }

    fn glue_for(reply: &DnsResponse, ns: &str) -> Option<Ipv4Addr> {
        reply
            .additional
            .iter()
            .filter(|r| r.is_type(RecordType::A) && normalize_name(&r.name) == ns)
            .find_map(|r| r.ipv4())
    }

    fn upstream_addr(&self, ip: Ipv4Addr) -> SocketAddr {
        SocketAddr::from((ip, self.root.port()))
    }
}
