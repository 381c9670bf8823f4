pub mod auth;
pub mod client;
pub mod context;
pub mod endpoint;
pub mod params;
#[cfg(test)]
pub(crate) mod scripted;
pub mod transport;

pub use client::ClientIdentity;
pub use context::RequestContext;
pub use endpoint::EndpointKind;
pub use params::SearchFilter;
pub use transport::{InnerTubeTransport, Transport};
