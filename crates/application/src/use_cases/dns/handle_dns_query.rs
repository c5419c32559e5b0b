use super::{AuthoritativeResolver, RecursiveResolver};
use crate::ports::DnsCachePort;
use ironzone_domain::{DnsQuery, DnsResponse};
use std::sync::Arc;
use std::time::Instant;
use tracing::debug;

/// Which path produced a response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolutionSource {
    Authoritative,
    Cache,
    Recursive,
}

impl ResolutionSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Authoritative => "authoritative",
            Self::Cache => "cache",
            Self::Recursive => "recursive",
        }
    }
}

#[derive(Debug, Clone)]
pub struct Resolution {
    pub response: Arc<DnsResponse>,
    pub source: ResolutionSource,
}

/// Routes a query: local zone first, then the cache, then recursion.
pub struct HandleDnsQueryUseCase {
    authoritative: AuthoritativeResolver,
    cache: Arc<dyn DnsCachePort>,
    recursive: RecursiveResolver,
}

impl HandleDnsQueryUseCase {
    pub fn new(
        authoritative: AuthoritativeResolver,
        cache: Arc<dyn DnsCachePort>,
        recursive: RecursiveResolver,
    ) -> Self {
        Self {
            authoritative,
            cache,
            recursive,
        }
    }

    pub async fn execute(&self, query: &DnsQuery) -> Resolution {
        let start = Instant::now();

        let (response, source) = if self.authoritative.is_hosted(&query.domain) {
            (
                Arc::new(self.authoritative.answer(query)),
                ResolutionSource::Authoritative,
            )
        } else if let Some(cached) = self.cache.get(&query.domain, query.record_type) {
            (cached, ResolutionSource::Cache)
        } else {
            (
                Arc::new(self.recursive.resolve(query).await),
                ResolutionSource::Recursive,
            )
        };

        debug!(
            domain = %query.domain,
            record_type = %query.record_type,
            rcode = %response.rcode,
            source = source.as_str(),
            answers = response.answers.len(),
            elapsed_us = start.elapsed().as_micros() as u64,
            "Query resolved"
        );

        Resolution { response, source }
    }
}
