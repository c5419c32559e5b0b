use hickory_proto::op::{Message, MessageType, ResponseCode};
use hickory_proto::rr::rdata::{A, NS};
use hickory_proto::rr::{Name, RData, Record};
use ironzone_domain::{DnsRecord, DnsResponse, RecordType};
use std::net::Ipv4Addr;

pub fn name(value: &str) -> Name {
    Name::from_ascii(value).unwrap()
}

pub fn a_record(owner: &str, ip: &str, ttl: u32) -> Record {
    let ip: Ipv4Addr = ip.parse().unwrap();
    Record::from_rdata(name(owner), ttl, RData::A(A(ip)))
}

pub fn ns_record(owner: &str, target: &str) -> Record {
    Record::from_rdata(name(owner), 172_800, RData::NS(NS(name(target))))
}

/// Empty NOERROR reply echoing the request's ID and question.
pub fn reply_to(request: &Message) -> Message {
    let mut reply = Message::new();
    reply
        .set_id(request.id())
        .set_message_type(MessageType::Response)
        .set_op_code(request.op_code())
        .set_response_code(ResponseCode::NoError);
    reply.add_queries(request.queries().to_vec());
    reply
}

pub fn domain_a(owner: &str, ip: &str, ttl: u32) -> DnsRecord {
    DnsRecord::new(owner, RecordType::A, ip, ttl)
}

/// Recursive answer whose records carry the given TTLs.
pub fn answer_with_ttls(owner: &str, ttls: &[u32]) -> DnsResponse {
    DnsResponse::with_answers(
        ttls.iter()
            .enumerate()
            .map(|(i, ttl)| domain_a(owner, &format!("192.0.2.{}", i + 1), *ttl))
            .collect(),
    )
}
