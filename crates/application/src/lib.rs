//! Ironzone Application Layer
//!
//! Ports the resolution engine depends on, and the engine itself: the
//! authoritative resolver, the iterative recursive resolver and the
//! query-handling use case that routes between them and the cache.
pub mod ports;
pub mod use_cases;
