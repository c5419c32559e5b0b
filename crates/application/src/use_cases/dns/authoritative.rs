use ironzone_domain::dns_query::normalize_name;
use ironzone_domain::{DnsQuery, DnsRecord, DnsResponse, DomainError, RecordType, Zone};
use std::collections::HashSet;
use std::sync::Arc;
use tracing::{debug, warn};

/// Maximum number of nested alias or mail-exchange targets followed while
/// building one answer.
pub const MAX_CHAIN_DEPTH: usize = 16;

/// Builds complete answers for names held in the local zone.
pub struct AuthoritativeResolver {
    zone: Arc<Zone>,
}

struct ChainFrame {
    name: String,
    record_type: RecordType,
    next: usize,
}

impl AuthoritativeResolver {
    pub fn new(zone: Arc<Zone>) -> Self {
        Self { zone }
    }

    pub fn is_hosted(&self, name: &str) -> bool {
        self.zone.contains(name)
    }

    /// Answers `query` from the zone. Never fails: a broken alias chain is
    /// reported as SERVFAIL.
    pub fn answer(&self, query: &DnsQuery) -> DnsResponse {
        if !self.is_hosted(&query.domain) {
            let mut response = DnsResponse::nxdomain();
            response.authoritative = true;
            return response;
        }

        match self.build_answer(query) {
            Ok(response) => response,
            Err(e) => {
                warn!(
                    domain = %query.domain,
                    record_type = %query.record_type,
                    error = %e,
                    "Authoritative answer failed"
                );
                DnsResponse::servfail()
            }
        }
    }

    pub fn build_answer(&self, query: &DnsQuery) -> Result<DnsResponse, DomainError> {
        let answers = self.collect_answers(&query.domain, query.record_type)?;

        let mut response = DnsResponse::with_answers(answers);
        response.authoritative = true;
        self.attach_delegation_glue(&mut response);

        debug!(
            domain = %query.domain,
            record_type = %query.record_type,
            answers = response.answers.len(),
            authority = response.authority.len(),
            additional = response.additional.len(),
            "Authoritative answer built"
        );

        Ok(response)
    }

    /// Walks the records under `name`, splicing in the answers for every
    /// CNAME target (same type) and MX target (A records) right after the
    /// record that points at them. Targets are already fully qualified by
    /// the zone parser.
    fn collect_answers(
        &self,
        name: &str,
        record_type: RecordType,
    ) -> Result<Vec<DnsRecord>, DomainError> {
        let mut answers = Vec::new();
        let mut on_path: HashSet<(String, RecordType)> = HashSet::new();
        on_path.insert((name.to_string(), record_type));

        let mut stack = vec![ChainFrame {
            name: name.to_string(),
            record_type,
            next: 0,
        }];

        while let Some(frame) = stack.last_mut() {
            let Some(record) = self.zone.lookup(&frame.name).get(frame.next) else {
                if let Some(done) = stack.pop() {
                    on_path.remove(&(done.name, done.record_type));
                }
                continue;
            };
            frame.next += 1;
            let wanted = frame.record_type;

            let target = match record.record_type {
                RecordType::CNAME => {
                    answers.push(record.clone());
                    (wanted != RecordType::CNAME).then(|| (normalize_name(&record.data), wanted))
                }
                RecordType::MX if wanted == RecordType::MX => {
                    answers.push(record.clone());
                    record
                        .mx_target()
                        .map(|target| (normalize_name(target), RecordType::A))
                }
                kind if kind == wanted => {
                    answers.push(record.clone());
                    None
                }
                _ => None,
            };

            let Some((target, target_type)) = target else {
                continue;
            };

            if stack.len() >= MAX_CHAIN_DEPTH || !on_path.insert((target.clone(), target_type)) {
                return Err(DomainError::AliasCycle(target));
            }

            debug!(target = %target, record_type = %target_type, "Following chain target");
            stack.push(ChainFrame {
                name: target,
                record_type: target_type,
                next: 0,
            });
        }

        Ok(answers)
    }

    /// Adds the origin's NS records to the authority section and, for every
    /// NS target hosted here, its A records to the additional section.
    fn attach_delegation_glue(&self, response: &mut DnsResponse) {
        response.authority.extend(
            self.zone
                .lookup_type(self.zone.origin(), RecordType::NS)
                .cloned(),
        );

        for ns in &response.authority {
            let target = normalize_name(&ns.data);
            response
                .additional
                .extend(self.zone.lookup_type(&target, RecordType::A).cloned());
        }
    }
}
