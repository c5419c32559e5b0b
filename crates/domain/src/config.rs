pub mod cache;
pub mod errors;
pub mod logging;
pub mod recursion;
pub mod root;
pub mod server;
pub mod zone;

pub use cache::CacheConfig;
pub use errors::ConfigError;
pub use logging::LoggingConfig;
pub use recursion::RecursionConfig;
pub use root::{CliOverrides, Config};
pub use server::ServerConfig;
pub use zone::ZoneConfig;
