use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid domain name: {0}")]
    InvalidDomainName(String),

    #[error("Failed to read zone file {path}: {reason}")]
    ZoneFileRead { path: String, reason: String },

    #[error("Zone file line {line}: {reason}")]
    ZoneParse { line: usize, reason: String },

    #[error("Zone file has no $ORIGIN directive")]
    MissingOrigin,

    #[error("Unsupported record type: {0}")]
    UnsupportedRecordType(String),

    #[error("Transport timeout waiting for {server}")]
    TransportTimeout { server: String },

    #[error("No answer and no usable delegation for {0}")]
    UnresolvableDelegation(String),

    #[error("Referral chain exceeded {hops} hops")]
    ReferralLoop { hops: usize },

    #[error("Alias cycle detected at {0}")]
    AliasCycle(String),

    #[error("Invalid DNS response: {0}")]
    InvalidDnsResponse(String),

    #[error("I/O error: {0}")]
    IoError(String),

    #[error("Internal processing error: {0}")]
    Internal(String),
}

impl DomainError {
    /// Timeouts are reported separately from other upstream failures in logs.
    pub fn is_timeout(&self) -> bool {
        matches!(self, DomainError::TransportTimeout { .. })
    }
}
