//! Concrete collaborators for the Vitesse client: token stores, network
//! gateways, filesystem paths and configuration loading.

pub mod canned_gateway;
pub mod config_service;
pub mod http_gateway;
pub mod paths;
pub mod storage;
pub mod token_store;

pub use canned_gateway::CannedGateway;
pub use config_service::ConfigService;
pub use http_gateway::HttpGateway;
pub use paths::{PathError, VitessePaths};
pub use token_store::{FileTokenStore, InMemoryTokenStore};
