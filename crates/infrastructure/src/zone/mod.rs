pub mod loader;
pub mod parser;
pub mod ttl;

pub use loader::load_zone_file;
pub use parser::{ParsedZone, ZoneFileParser, DEFAULT_TTL};
pub use ttl::parse_ttl;
