#![allow(dead_code)]

mod builders;
mod clock;
mod dns_server_mock;

pub use builders::*;
pub use clock::ManualClock;
pub use dns_server_mock::{encode, MockDnsServer};
