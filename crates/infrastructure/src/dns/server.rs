use crate::dns::forwarding::{MessageBuilder, RecordTypeMapper};
use hickory_proto::op::{Message, MessageType, OpCode, ResponseCode};
use ironzone_application::use_cases::HandleDnsQueryUseCase;
use ironzone_domain::dns_query::normalize_name;
use ironzone_domain::DnsQuery;
use std::sync::Arc;
use tracing::{debug, error, info, warn};

/// Turns raw query datagrams into raw reply datagrams.
///
/// Every decodable query gets exactly one reply. `None` means there is
/// nothing to answer (not even a readable ID, or the datagram is itself a
/// response).
pub struct DnsServerHandler {
    use_case: Arc<HandleDnsQueryUseCase>,
}

impl DnsServerHandler {
    pub fn new(use_case: Arc<HandleDnsQueryUseCase>) -> Self {
        Self { use_case }
    }

    pub async fn handle_raw(&self, request_bytes: &[u8]) -> Option<Vec<u8>> {
        let request = match Message::from_vec(request_bytes) {
            Ok(message) => message,
            Err(e) => {
                warn!(error = %e, bytes = request_bytes.len(), "Failed to parse request");
                let id = read_id(request_bytes)?;
                return encode(MessageBuilder::build_bare_error(id, ResponseCode::FormErr));
            }
        };

        if request.message_type() != MessageType::Query {
            debug!(id = request.id(), "Ignoring datagram that is not a query");
            return None;
        }

        if request.op_code() != OpCode::Query {
            debug!(op_code = ?request.op_code(), "Unsupported opcode");
            return encode(MessageBuilder::build_error(&request, ResponseCode::NotImp));
        }

        let Some(question) = request.queries().first() else {
            warn!(id = request.id(), "Query without a question");
            return encode(MessageBuilder::build_error(&request, ResponseCode::FormErr));
        };

        let domain = normalize_name(&question.name().to_utf8());
        let hickory_record_type = question.query_type();

        info!(domain = %domain, record_type = ?hickory_record_type, "DNS query received");

        let Some(record_type) = RecordTypeMapper::from_hickory(hickory_record_type) else {
            warn!(record_type = ?hickory_record_type, "Unsupported record type");
            return encode(MessageBuilder::build_error(&request, ResponseCode::NotImp));
        };

        let query = DnsQuery::new(&domain, record_type);
        let resolution = self.use_case.execute(&query).await;

        debug!(
            domain = %domain,
            rcode = %resolution.response.rcode,
            source = resolution.source.as_str(),
            answers = resolution.response.answers.len(),
            "Sending response"
        );

        match MessageBuilder::build_response(&request, &resolution.response) {
            Ok(bytes) => Some(bytes),
            Err(e) => {
                error!(domain = %domain, error = %e, "Failed to encode response");
                encode(MessageBuilder::build_error(&request, ResponseCode::ServFail))
            }
        }
    }

    /// SERVFAIL reply for `request_bytes`, used when handling a query
    /// failed before a reply could be built.
    pub fn servfail_for(request_bytes: &[u8]) -> Option<Vec<u8>> {
        match Message::from_vec(request_bytes) {
            Ok(request) => encode(MessageBuilder::build_error(&request, ResponseCode::ServFail)),
            Err(_) => encode(MessageBuilder::build_bare_error(
                read_id(request_bytes)?,
                ResponseCode::ServFail,
            )),
        }
    }
}

fn read_id(bytes: &[u8]) -> Option<u16> {
    match bytes {
        [hi, lo, ..] => Some(u16::from_be_bytes([*hi, *lo])),
        _ => None,
    }
}

fn encode(result: Result<Vec<u8>, ironzone_domain::DomainError>) -> Option<Vec<u8>> {
    match result {
        Ok(bytes) => Some(bytes),
        Err(e) => {
            error!(error = %e, "Failed to encode error response");
            None
        }
    }
}
