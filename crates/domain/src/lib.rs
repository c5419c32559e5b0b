//! Ironzone Domain Layer
pub mod config;
pub mod dns_query;
pub mod dns_record;
pub mod dns_response;
pub mod errors;
pub mod zone;

pub use config::{CliOverrides, Config, ConfigError};
pub use dns_query::DnsQuery;
pub use dns_record::{DnsRecord, RecordType};
pub use dns_response::{DnsResponse, ResponseCode};
pub use errors::DomainError;
pub use zone::Zone;
