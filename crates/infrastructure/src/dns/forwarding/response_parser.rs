use super::record_data::RecordConverter;
use hickory_proto::op::{Message, MessageType, ResponseCode as HickoryResponseCode};
use hickory_proto::rr::Record;
use ironzone_domain::{DnsRecord, DnsResponse, DomainError, ResponseCode};
use tracing::debug;

/// Decoded upstream reply.
#[derive(Debug, Clone)]
pub struct ParsedResponse {
    pub truncated: bool,
    pub response: DnsResponse,
}

pub struct ResponseParser;

impl ResponseParser {
    pub fn parse(response_bytes: &[u8]) -> Result<ParsedResponse, DomainError> {
        let message = Message::from_vec(response_bytes).map_err(|e| {
            DomainError::InvalidDnsResponse(format!("Failed to parse DNS response: {}", e))
        })?;

        if message.message_type() != MessageType::Response {
            return Err(DomainError::InvalidDnsResponse(
                "Message is not a response".to_string(),
            ));
        }

        let mut response = DnsResponse::new(Self::from_hickory_rcode(message.response_code()));
        response.authoritative = message.authoritative();
        response.answers = Self::decode_section(message.answers());
        response.authority = Self::decode_section(message.name_servers());
        response.additional = Self::decode_section(message.additionals());

        debug!(
            rcode = ?message.response_code(),
            answers = response.answers.len(),
            authority = response.authority.len(),
            additional = response.additional.len(),
            truncated = message.truncated(),
            "DNS response parsed"
        );

        Ok(ParsedResponse {
            truncated: message.truncated(),
            response,
        })
    }

    /// Anything other than NOERROR and NXDOMAIN is a server failure from the
    /// resolver's point of view.
    pub fn from_hickory_rcode(rcode: HickoryResponseCode) -> ResponseCode {
        match rcode {
            HickoryResponseCode::NoError => ResponseCode::NoError,
            HickoryResponseCode::NXDomain => ResponseCode::NxDomain,
            _ => ResponseCode::ServFail,
        }
    }

    fn decode_section(records: &[Record]) -> Vec<DnsRecord> {
        records
            .iter()
            .filter_map(RecordConverter::from_hickory)
            .collect()
    }
}
