use crate::errors::DomainError;
use std::fmt;
use std::str::FromStr;

/// Record kinds the zone store and resolvers understand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordType {
    A,
    NS,
    CNAME,
    SOA,
    PTR,
    MX,
    TXT,
    AAAA,
}

/// Mnemonic and wire code of every supported kind.
const KINDS: [(RecordType, &str, u16); 8] = [
    (RecordType::A, "A", 1),
    (RecordType::NS, "NS", 2),
    (RecordType::CNAME, "CNAME", 5),
    (RecordType::SOA, "SOA", 6),
    (RecordType::PTR, "PTR", 12),
    (RecordType::MX, "MX", 15),
    (RecordType::TXT, "TXT", 16),
    (RecordType::AAAA, "AAAA", 28),
];

impl RecordType {
    pub const ALL: [RecordType; 8] = [
        RecordType::A,
        RecordType::NS,
        RecordType::CNAME,
        RecordType::SOA,
        RecordType::PTR,
        RecordType::MX,
        RecordType::TXT,
        RecordType::AAAA,
    ];

    fn entry(&self) -> (RecordType, &'static str, u16) {
        KINDS[*self as usize]
    }

    pub fn as_str(&self) -> &'static str {
        self.entry().1
    }

    pub fn to_u16(&self) -> u16 {
        self.entry().2
    }

    pub fn from_u16(code: u16) -> Option<Self> {
        KINDS
            .iter()
            .find(|(_, _, wire)| *wire == code)
            .map(|(kind, _, _)| *kind)
    }

    /// Kinds whose data is a single domain name.
    pub fn has_name_data(&self) -> bool {
        matches!(self, RecordType::NS | RecordType::CNAME | RecordType::PTR)
    }
}

impl fmt::Display for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RecordType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        KINDS
            .iter()
            .find(|(_, mnemonic, _)| mnemonic.eq_ignore_ascii_case(s))
            .map(|(kind, _, _)| *kind)
            .ok_or_else(|| DomainError::UnsupportedRecordType(s.to_string()))
    }
}
