use super::DnsRecord;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResponseCode {
    NoError,
    NxDomain,
    ServFail,
}

impl ResponseCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResponseCode::NoError => "NOERROR",
            ResponseCode::NxDomain => "NXDOMAIN",
            ResponseCode::ServFail => "SERVFAIL",
        }
    }
}

impl fmt::Display for ResponseCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Structured answer to one query.
///
/// Built fresh on the authoritative and recursive paths; shared read-only
/// through an `Arc` when served from the cache.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DnsResponse {
    pub answers: Vec<DnsRecord>,

    pub authority: Vec<DnsRecord>,

    pub additional: Vec<DnsRecord>,

    pub rcode: ResponseCode,

    pub authoritative: bool,
}

impl DnsResponse {
    pub fn new(rcode: ResponseCode) -> Self {
        Self {
            answers: Vec::new(),
            authority: Vec::new(),
            additional: Vec::new(),
            rcode,
            authoritative: false,
        }
    }

    pub fn servfail() -> Self {
        Self::new(ResponseCode::ServFail)
    }

    pub fn nxdomain() -> Self {
        Self::new(ResponseCode::NxDomain)
    }

    pub fn with_answers(answers: Vec<DnsRecord>) -> Self {
        Self {
            answers,
            ..Self::new(ResponseCode::NoError)
        }
    }

    pub fn has_answers(&self) -> bool {
        !self.answers.is_empty()
    }

    /// Minimum TTL across the answer section: the whole answer is only as
    /// fresh as its least-fresh record.
    pub fn min_answer_ttl(&self) -> Option<u32> {
        self.answers.iter().map(|r| r.ttl).min()
    }

    pub fn is_success(&self) -> bool {
        self.rcode == ResponseCode::NoError
    }
}
