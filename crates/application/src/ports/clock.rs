use std::time::Instant;

/// Source of "now" for expiry computations.
pub trait Clock: Send + Sync {
    fn now(&self) -> Instant;
}
