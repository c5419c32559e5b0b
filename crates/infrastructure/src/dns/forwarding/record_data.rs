//! Conversion between `DnsRecord` presentation data and hickory `Record`s.

use hickory_proto::rr::rdata::{A, AAAA, CNAME, MX, NS, PTR, SOA, TXT};
use hickory_proto::rr::{Name, RData, Record};
use ironzone_domain::dns_query::normalize_name;
use ironzone_domain::{DnsRecord, DomainError, RecordType};
use std::net::{Ipv4Addr, Ipv6Addr};

pub struct RecordConverter;

impl RecordConverter {
    pub fn to_hickory(record: &DnsRecord) -> Result<Record, DomainError> {
        let rdata = Self::rdata(record)?;
        Ok(Record::from_rdata(fqdn(&record.name)?, record.ttl, rdata))
    }

    /// Converts a wire record back into presentation form. `None` for
    /// record kinds the domain model does not carry (OPT, RRSIG, ...).
    pub fn from_hickory(record: &Record) -> Option<DnsRecord> {
        let name = normalize_name(&record.name().to_utf8());

        let (record_type, data) = match record.data()? {
            RData::A(a) => (RecordType::A, a.0.to_string()),
            RData::AAAA(aaaa) => (RecordType::AAAA, aaaa.0.to_string()),
            RData::CNAME(cname) => (RecordType::CNAME, name_data(&cname.0)),
            RData::NS(ns) => (RecordType::NS, name_data(&ns.0)),
            RData::PTR(ptr) => (RecordType::PTR, name_data(&ptr.0)),
            RData::MX(mx) => (
                RecordType::MX,
                format!("{} {}", mx.preference(), name_data(mx.exchange())),
            ),
            RData::TXT(txt) => (
                RecordType::TXT,
                txt.txt_data()
                    .iter()
                    .map(|part| String::from_utf8_lossy(part).into_owned())
                    .collect::<Vec<_>>()
                    .join(" "),
            ),
            RData::SOA(soa) => (
                RecordType::SOA,
                format!(
                    "{} {} {} {} {} {} {}",
                    name_data(soa.mname()),
                    name_data(soa.rname()),
                    soa.serial(),
                    soa.refresh(),
                    soa.retry(),
                    soa.expire(),
                    soa.minimum()
                ),
            ),
            _ => return None,
        };

        Some(DnsRecord::new(name, record_type, data, record.ttl()))
    }

    fn rdata(record: &DnsRecord) -> Result<RData, DomainError> {
        let invalid = || {
            DomainError::InvalidDnsResponse(format!(
                "Cannot encode {} data '{}' for {}",
                record.record_type, record.data, record.name
            ))
        };

        let rdata = match record.record_type {
            RecordType::A => {
                let ip: Ipv4Addr = record.data.trim().parse().map_err(|_| invalid())?;
                RData::A(A(ip))
            }
            RecordType::AAAA => {
                let ip: Ipv6Addr = record.data.trim().parse().map_err(|_| invalid())?;
                RData::AAAA(AAAA(ip))
            }
            RecordType::CNAME => RData::CNAME(CNAME(fqdn(&record.data)?)),
            RecordType::NS => RData::NS(NS(fqdn(&record.data)?)),
            RecordType::PTR => RData::PTR(PTR(fqdn(&record.data)?)),
            RecordType::MX => {
                let priority = record.mx_priority().ok_or_else(invalid)?;
                let target = record.mx_target().ok_or_else(invalid)?;
                RData::MX(MX::new(priority, fqdn(target)?))
            }
            RecordType::TXT => RData::TXT(TXT::new(vec![record.data.clone()])),
            RecordType::SOA => {
                let fields: Vec<&str> = record.data.split_whitespace().collect();
                let &[mname, rname, serial, refresh, retry, expire, minimum] = fields.as_slice() else {
                    return Err(invalid());
                };
                let number = |value: &str| value.parse::<u32>().map_err(|_| invalid());
                RData::SOA(SOA::new(
                    fqdn(mname)?,
                    fqdn(rname)?,
                    number(serial)?,
                    signed(number(refresh)?),
                    signed(number(retry)?),
                    signed(number(expire)?),
                    number(minimum)?,
                ))
            }
        };
        Ok(rdata)
    }
}

/// Builds a fully-qualified wire name from a normalised name.
pub fn fqdn(name: &str) -> Result<Name, DomainError> {
    if name.is_empty() || name == "." {
        return Ok(Name::root());
    }
    let mut parsed = Name::from_ascii(name)
        .map_err(|e| DomainError::InvalidDomainName(format!("{}: {}", name, e)))?;
    parsed.set_fqdn(true);
    Ok(parsed)
}

fn name_data(name: &Name) -> String {
    normalize_name(&name.to_utf8())
}

fn signed(value: u32) -> i32 {
    i32::try_from(value).unwrap_or(i32::MAX)
}
