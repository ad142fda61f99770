//! Domain layer for the Vitesse client.
//!
//! Holds the candidate and authentication models, the endpoint catalogue,
//! the collaborator traits (`TokenStore`, `NetworkGateway`) and the error
//! taxonomy shared by every other crate. Nothing in here performs I/O.

pub mod auth;
pub mod candidate;
pub mod config;
pub mod error;
pub mod network;
pub mod validation;

pub use error::{GatewayError, Result, VitesseError};
