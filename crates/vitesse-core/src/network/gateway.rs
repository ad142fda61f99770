use async_trait::async_trait;
use serde::de::DeserializeOwned;

use super::Endpoint;
use crate::error::GatewayError;

/// The only component allowed to perform network I/O.
///
/// Implementations resolve the endpoint, attach the bearer token when the
/// endpoint requires one, and translate every failure into a
/// [`GatewayError`]. Each call is attempted exactly once.
#[async_trait]
pub trait NetworkGateway: Send + Sync {
    /// Executes the request and returns the raw body of a successful response.
    async fn send(&self, endpoint: &Endpoint) -> Result<Vec<u8>, GatewayError>;
}

impl dyn NetworkGateway {
    /// Executes the request and decodes the JSON body as `T`.
    pub async fn request<T: DeserializeOwned>(
        &self,
        endpoint: &Endpoint,
    ) -> Result<T, GatewayError> {
        let body = self.send(endpoint).await?;
        serde_json::from_slice(&body).map_err(|e| {
            GatewayError::decoding(format!("{} response: {}", endpoint.name(), e))
        })
    }

    /// Executes the request and discards the body.
    pub async fn request_no_body(&self, endpoint: &Endpoint) -> Result<(), GatewayError> {
        self.send(endpoint).await.map(|_| ())
    }
}
