pub mod dns;

pub use dns::{
    AuthoritativeResolver, HandleDnsQueryUseCase, RecursiveResolver, Resolution,
    ResolutionSource,
};
