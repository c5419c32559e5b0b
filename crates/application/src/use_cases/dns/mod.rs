mod authoritative;
mod handle_dns_query;
mod recursive;

pub use authoritative::{AuthoritativeResolver, MAX_CHAIN_DEPTH};
pub use handle_dns_query::{HandleDnsQueryUseCase, Resolution, ResolutionSource};
pub use recursive::{RecursiveResolver, DEFAULT_MAX_HOPS, DEFAULT_QUERY_TIMEOUT};
