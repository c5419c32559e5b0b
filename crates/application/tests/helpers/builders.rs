use ironzone_domain::{DnsRecord, DnsResponse, RecordType, ResponseCode, Zone};
use std::net::SocketAddr;

pub fn record(name: &str, record_type: RecordType, data: &str, ttl: u32) -> DnsRecord {
    DnsRecord::new(name, record_type, data, ttl)
}

pub fn a(name: &str, ip: &str, ttl: u32) -> DnsRecord {
    record(name, RecordType::A, ip, ttl)
}

pub fn ns(name: &str, target: &str) -> DnsRecord {
    record(name, RecordType::NS, target, 172_800)
}

pub fn addr(ip: &str) -> SocketAddr {
    format!("{}:53", ip).parse().unwrap()
}

/// Builds a zone from `(name, type, data)` triples with a fixed TTL.
pub fn zone(origin: &str, records: &[(&str, RecordType, &str)]) -> Zone {
    let mut zone = Zone::new(origin);
    for (name, record_type, data) in records {
        zone.push(record(name, *record_type, data, 3600));
    }
    zone
}

/// Upstream reply carrying a final answer.
pub fn answer_reply(answers: Vec<DnsRecord>) -> DnsResponse {
    DnsResponse::with_answers(answers)
}

/// Upstream referral: NS records in authority, optional glue in additional.
pub fn referral(zone: &str, ns_names: &[&str], glue: &[(&str, &str)]) -> DnsResponse {
    let mut response = DnsResponse::new(ResponseCode::NoError);
    response.authority = ns_names.iter().map(|target| ns(zone, target)).collect();
    response.additional = glue.iter().map(|(name, ip)| a(name, ip, 172_800)).collect();
    response
}
