//! Endpoint catalogue and the gateway abstraction that executes it.

mod endpoint;
mod gateway;

pub use endpoint::{Endpoint, HttpMethod};
pub use gateway::NetworkGateway;
