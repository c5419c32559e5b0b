//! DNS message construction in wire format using `hickory-proto`.

use super::record_data::{fqdn, RecordConverter};
use super::record_type_map::RecordTypeMapper;
use hickory_proto::op::{Message, MessageType, OpCode, Query, ResponseCode as HickoryResponseCode};
use hickory_proto::rr::{DNSClass, Record};
use hickory_proto::serialize::binary::{BinEncodable, BinEncoder};
use ironzone_domain::{DnsQuery, DnsRecord, DnsResponse, DomainError, ResponseCode};
use tracing::warn;

pub struct MessageBuilder;

impl MessageBuilder {
    /// Builds an iterative query (RD clear) with a random ID.
    ///
    /// Returns the ID alongside the bytes for reply matching.
    pub fn build_query(query: &DnsQuery) -> Result<(u16, Vec<u8>), DomainError> {
        let mut question = Query::query(
            fqdn(&query.domain)?,
            RecordTypeMapper::to_hickory(&query.record_type),
        );
        question.set_query_class(DNSClass::IN);

        let id = fastrand::u16(..);

        let mut message = Message::new();
        message
            .set_id(id)
            .set_message_type(MessageType::Query)
            .set_op_code(OpCode::Query)
            .set_recursion_desired(false);
        message.add_query(question);

        let bytes = Self::serialize_message(&message)?;
        Ok((id, bytes))
    }

    /// Builds the reply to `request` carrying every section of `response`.
    ///
    /// Records that cannot be encoded are dropped with a warning.
    pub fn build_response(request: &Message, response: &DnsResponse) -> Result<Vec<u8>, DomainError> {
        let mut message = Self::reply_header(request, Self::to_hickory_rcode(response.rcode));
        message.set_authoritative(response.authoritative);
        message.add_answers(Self::encode_section(&response.answers));
        message.add_name_servers(Self::encode_section(&response.authority));
        message.add_additionals(Self::encode_section(&response.additional));

        Self::serialize_message(&message)
    }

    /// Builds an empty reply to `request` with the given result code.
    pub fn build_error(request: &Message, rcode: HickoryResponseCode) -> Result<Vec<u8>, DomainError> {
        Self::serialize_message(&Self::reply_header(request, rcode))
    }

    /// Error reply for a request whose body could not be decoded: only the
    /// ID is echoed.
    pub fn build_bare_error(id: u16, rcode: HickoryResponseCode) -> Result<Vec<u8>, DomainError> {
        let mut message = Message::new();
        message
            .set_id(id)
            .set_message_type(MessageType::Response)
            .set_op_code(OpCode::Query)
            .set_recursion_available(true)
            .set_response_code(rcode);
        Self::serialize_message(&message)
    }

    pub fn to_hickory_rcode(rcode: ResponseCode) -> HickoryResponseCode {
        match rcode {
            ResponseCode::NoError => HickoryResponseCode::NoError,
            ResponseCode::NxDomain => HickoryResponseCode::NXDomain,
            ResponseCode::ServFail => HickoryResponseCode::ServFail,
        }
    }

    fn reply_header(request: &Message, rcode: HickoryResponseCode) -> Message {
        let mut message = Message::new();
        message
            .set_id(request.id())
            .set_message_type(MessageType::Response)
            .set_op_code(request.op_code())
            .set_recursion_desired(request.recursion_desired())
            .set_recursion_available(true)
            .set_response_code(rcode);
        message.add_queries(request.queries().to_vec());
        message
    }

    fn encode_section(records: &[DnsRecord]) -> Vec<Record> {
        records
            .iter()
            .filter_map(|record| match RecordConverter::to_hickory(record) {
                Ok(wire) => Some(wire),
                Err(e) => {
                    warn!(error = %e, "Dropping record that cannot be encoded");
                    None
                }
            })
            .collect()
    }

    fn serialize_message(message: &Message) -> Result<Vec<u8>, DomainError> {
        let mut buf = Vec::with_capacity(512);
        let mut encoder = BinEncoder::new(&mut buf);

        message.emit(&mut encoder).map_err(|e| {
            DomainError::Internal(format!("Failed to serialize DNS message: {}", e))
        })?;

        Ok(buf)
    }
}
