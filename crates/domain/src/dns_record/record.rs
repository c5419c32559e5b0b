use super::RecordType;
use std::net::Ipv4Addr;
use std::sync::Arc;

/// One fact about a name: kind, kind-specific data and time-to-live.
///
/// The owner name travels with the record so the same value can be placed in
/// any response section. Data is kept in presentation form: an IPv4 literal
/// for `A`, a target name for `CNAME`/`NS`/`PTR`, `"<priority> <target>"` for
/// `MX`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DnsRecord {
    pub name: Arc<str>,

    pub record_type: RecordType,

    pub data: String,

    pub ttl: u32,
}

impl DnsRecord {
    pub fn new(
        name: impl Into<Arc<str>>,
        record_type: RecordType,
        data: impl Into<String>,
        ttl: u32,
    ) -> Self {
        Self {
            name: name.into(),
            record_type,
            data: data.into(),
            ttl,
        }
    }

    pub fn is_type(&self, record_type: RecordType) -> bool {
        self.record_type == record_type
    }

    /// Target name of an `MX` record, `None` for other kinds or malformed data.
    pub fn mx_target(&self) -> Option<&str> {
        if self.record_type != RecordType::MX {
            return None;
        }
        let mut parts = self.data.split_whitespace();
        parts.next()?;
        parts.next()
    }

    pub fn mx_priority(&self) -> Option<u16> {
        if self.record_type != RecordType::MX {
            return None;
        }
        self.data.split_whitespace().next()?.parse().ok()
    }

    /// Address carried by an `A` record.
    pub fn ipv4(&self) -> Option<Ipv4Addr> {
        if self.record_type != RecordType::A {
            return None;
        }
        self.data.trim().parse().ok()
    }
}
