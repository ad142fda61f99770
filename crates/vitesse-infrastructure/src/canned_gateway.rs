//! In-process [`NetworkGateway`] that answers from canned responses.
//!
//! Mirrors the failure order of the HTTP gateway (unusable endpoint, then
//! missing token) before looking up a response, and records every call so
//! callers can assert on network traffic without a server.

use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};

use async_trait::async_trait;
use serde::Serialize;

use vitesse_core::GatewayError;
use vitesse_core::network::{Endpoint, HttpMethod, NetworkGateway};

type RouteKey = (HttpMethod, String);

#[derive(Default)]
pub struct CannedGateway {
    responses: Mutex<HashMap<RouteKey, Result<Vec<u8>, GatewayError>>>,
    token: Mutex<Option<String>>,
    calls: Mutex<Vec<Endpoint>>,
}

impl CannedGateway {
    /// Gateway without a token; authenticated endpoints fail with `MissingToken`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Gateway that behaves as if a session token were already stored.
    pub fn authenticated() -> Self {
        let gateway = Self::default();
        gateway.set_token(Some("canned-token".to_string()));
        gateway
    }

    pub fn set_token(&self, token: Option<String>) {
        *lock(&self.token) = token;
    }

    /// Answers `endpoint` with `value` encoded as JSON.
    pub fn respond_json<T: Serialize>(
        &self,
        endpoint: &Endpoint,
        value: &T,
    ) -> Result<(), GatewayError> {
        let body = serde_json::to_vec(value)?;
        self.respond_raw(endpoint, Ok(body))
    }

    /// Answers `endpoint` with an empty success body.
    pub fn respond_empty(&self, endpoint: &Endpoint) -> Result<(), GatewayError> {
        self.respond_raw(endpoint, Ok(Vec::new()))
    }

    /// Answers `endpoint` with `error`.
    pub fn respond_error(
        &self,
        endpoint: &Endpoint,
        error: GatewayError,
    ) -> Result<(), GatewayError> {
        self.respond_raw(endpoint, Err(error))
    }

    /// Replaces whatever response was registered for the endpoint's route.
    pub fn respond_raw(
        &self,
        endpoint: &Endpoint,
        response: Result<Vec<u8>, GatewayError>,
    ) -> Result<(), GatewayError> {
        let key = route_key(endpoint)?;
        lock(&self.responses).insert(key, response);
        Ok(())
    }

    /// Every endpoint passed to `send`, in call order.
    pub fn calls(&self) -> Vec<Endpoint> {
        lock(&self.calls).clone()
    }

    pub fn call_count(&self) -> usize {
        lock(&self.calls).len()
    }
}

#[async_trait]
impl NetworkGateway for CannedGateway {
    async fn send(&self, endpoint: &Endpoint) -> Result<Vec<u8>, GatewayError> {
        lock(&self.calls).push(endpoint.clone());

        let key = route_key(endpoint)?;
        if endpoint.requires_authentication() && lock(&self.token).is_none() {
            return Err(GatewayError::MissingToken);
        }

        lock(&self.responses)
            .get(&key)
            .cloned()
            .unwrap_or(Err(GatewayError::Unknown))
    }
}

fn route_key(endpoint: &Endpoint) -> Result<RouteKey, GatewayError> {
    Ok((endpoint.method(), endpoint.path()?))
}

fn lock<T>(mutex: &Mutex<T>) -> std::sync::MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use vitesse_core::auth::AuthResponse;
    use vitesse_core::candidate::Candidate;

    fn dyn_gateway(gateway: CannedGateway) -> (Arc<CannedGateway>, Arc<dyn NetworkGateway>) {
        let gateway = Arc::new(gateway);
        let as_dyn: Arc<dyn NetworkGateway> = gateway.clone();
        (gateway, as_dyn)
    }

    #[tokio::test]
    async fn test_unregistered_route_is_unknown() {
        let (canned, gateway) = dyn_gateway(CannedGateway::new());
        let result = gateway.request_no_body(&Endpoint::login("a@b.co", "pw")).await;
        assert_eq!(result, Err(GatewayError::Unknown));
        assert_eq!(canned.call_count(), 1);
    }

    #[tokio::test]
    async fn test_authenticated_route_without_token_is_missing_token() {
        let (canned, gateway) = dyn_gateway(CannedGateway::new());
        canned.respond_json(&Endpoint::Candidates, &Vec::<Candidate>::new()).unwrap();

        let result = gateway.request::<Vec<Candidate>>(&Endpoint::Candidates).await;
        assert_eq!(result, Err(GatewayError::MissingToken));

        canned.set_token(Some("t".to_string()));
        let result = gateway.request::<Vec<Candidate>>(&Endpoint::Candidates).await;
        assert_eq!(result, Ok(Vec::new()));
    }

    #[tokio::test]
    async fn test_invalid_endpoint_reported_before_token_check() {
        let (_canned, gateway) = dyn_gateway(CannedGateway::new());
        let result = gateway.request_no_body(&Endpoint::delete_candidate("")).await;
        assert!(matches!(result, Err(GatewayError::InvalidEndpoint(_))));
    }

    #[tokio::test]
    async fn test_schema_mismatch_is_decoding_error() {
        let (canned, gateway) = dyn_gateway(CannedGateway::new());
        let login = Endpoint::login("a@b.co", "pw");
        canned
            .respond_json(&login, &serde_json::json!({"unexpected": 1}))
            .unwrap();

        let result = gateway.request::<AuthResponse>(&login).await;
        assert!(matches!(result, Err(GatewayError::DecodingError(_))));
    }

    #[tokio::test]
    async fn test_routes_match_by_method_and_path_only() {
        let (canned, gateway) = dyn_gateway(CannedGateway::new());
        let response = AuthResponse {
            token: "tok".to_string(),
            is_admin: false,
        };
        canned
            .respond_json(&Endpoint::login("one@b.co", "pw"), &response)
            .unwrap();

        let decoded = gateway
            .request::<AuthResponse>(&Endpoint::login("other@b.co", "other"))
            .await
            .unwrap();
        assert_eq!(decoded, response);
        assert_eq!(canned.calls(), vec![Endpoint::login("other@b.co", "other")]);
    }
}
