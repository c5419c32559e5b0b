use ironzone_domain::DnsResponse;
use std::sync::Arc;
use std::time::{Duration, Instant};

pub struct CachedResponse {
    pub response: Arc<DnsResponse>,
    pub expires_at: Instant,
}

impl CachedResponse {
    /// Wraps `response` with an expiry of `now + ttl` seconds.
    pub fn new(response: DnsResponse, ttl: u32, now: Instant) -> Self {
        Self {
            response: Arc::new(response),
            expires_at: now + Duration::from_secs(u64::from(ttl)),
        }
    }

    /// An entry stays usable up to and including its expiry instant.
    #[inline]
    pub fn is_expired_at(&self, now: Instant) -> bool {
        now > self.expires_at
    }

    pub fn remaining_ttl(&self, now: Instant) -> Duration {
        self.expires_at.saturating_duration_since(now)
    }
}
