//! reqwest-backed [`NetworkGateway`].

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Method, StatusCode, Url};
use serde::Deserialize;

use vitesse_core::auth::TokenStore;
use vitesse_core::config::ApiConfig;
use vitesse_core::network::{Endpoint, HttpMethod, NetworkGateway};
use vitesse_core::{GatewayError, VitesseError};

/// Error payload returned by the backend on non-success responses.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    reason: Option<String>,
    #[serde(default)]
    message: Option<String>,
}

/// Sends endpoint requests to the backend over HTTP.
///
/// The bearer token is read from the [`TokenStore`] on every authenticated
/// request, so a login performed after construction is picked up without
/// rebuilding the gateway.
pub struct HttpGateway {
    client: Client,
    base_url: Url,
    token_store: Arc<dyn TokenStore>,
}

impl HttpGateway {
    pub fn new(
        base_url: &str,
        timeout: Option<Duration>,
        token_store: Arc<dyn TokenStore>,
    ) -> Result<Self, VitesseError> {
        let mut base_url = Url::parse(base_url).map_err(|e| {
            GatewayError::invalid_endpoint(format!("base URL {base_url:?}: {e}"))
        })?;
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| VitesseError::internal(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url,
            token_store,
        })
    }

    pub fn from_config(
        config: &ApiConfig,
        token_store: Arc<dyn TokenStore>,
    ) -> Result<Self, VitesseError> {
        let timeout = (config.timeout_secs > 0).then(|| Duration::from_secs(config.timeout_secs));
        Self::new(&config.base_url, timeout, token_store)
    }

    fn resolve(&self, endpoint: &Endpoint) -> Result<Url, GatewayError> {
        let path = endpoint.path()?;
        self.base_url
            .join(path.trim_start_matches('/'))
            .map_err(|e| GatewayError::invalid_endpoint(format!("{path}: {e}")))
    }
}

#[async_trait]
impl NetworkGateway for HttpGateway {
    async fn send(&self, endpoint: &Endpoint) -> Result<Vec<u8>, GatewayError> {
        let url = self.resolve(endpoint)?;

        let mut request = self.client.request(to_reqwest_method(endpoint.method()), url);
        if endpoint.requires_authentication() {
            let token = self.token_store.get().ok_or(GatewayError::MissingToken)?;
            request = request.bearer_auth(token);
        }
        if let Some(body) = endpoint.body()? {
            request = request.json(&body);
        }

        tracing::debug!("[HttpGateway] {} {}", endpoint.method(), endpoint.name());

        let response = request.send().await.map_err(|err| {
            tracing::warn!("[HttpGateway] {} request failed: {}", endpoint.name(), err);
            GatewayError::transport(format!("Request failed: {err}"))
        })?;

        let status = response.status();
        if status == StatusCode::UNAUTHORIZED {
            return Err(GatewayError::Unauthorized);
        }
        if !status.is_success() {
            let body_text = response.text().await.unwrap_or_default();
            return Err(map_http_error(status, &body_text));
        }

        let bytes = response.bytes().await.map_err(|err| {
            GatewayError::transport(format!("Failed to read response body: {err}"))
        })?;
        Ok(bytes.to_vec())
    }
}

fn to_reqwest_method(method: HttpMethod) -> Method {
    match method {
        HttpMethod::Get => Method::GET,
        HttpMethod::Post => Method::POST,
        HttpMethod::Delete => Method::DELETE,
    }
}

fn map_http_error(status: StatusCode, body: &str) -> GatewayError {
    let message = serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|parsed| parsed.reason.or(parsed.message))
        .unwrap_or_else(|| body.trim().to_string());

    let message = if message.is_empty() {
        status
            .canonical_reason()
            .unwrap_or("Unexpected status")
            .to_string()
    } else {
        message
    };

    GatewayError::server(status.as_u16(), message)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token_store::InMemoryTokenStore;

    fn gateway(base: &str) -> HttpGateway {
        HttpGateway::new(base, None, Arc::new(InMemoryTokenStore::new())).unwrap()
    }

    #[test]
    fn test_resolve_keeps_base_path() {
        let gateway = gateway("https://api.example.com/vitesse");
        let url = gateway.resolve(&Endpoint::toggle_favorite("7")).unwrap();
        assert_eq!(url.as_str(), "https://api.example.com/vitesse/candidate/7/favorite");
    }

    #[test]
    fn test_resolve_rejects_bad_ids() {
        let gateway = gateway("http://localhost:8080");
        let err = gateway.resolve(&Endpoint::delete_candidate("a/b")).unwrap_err();
        assert!(matches!(err, GatewayError::InvalidEndpoint(_)));
    }

    #[test]
    fn test_bad_base_url_is_rejected() {
        let result = HttpGateway::new("not a url", None, Arc::new(InMemoryTokenStore::new()));
        assert!(matches!(
            result,
            Err(VitesseError::Gateway(GatewayError::InvalidEndpoint(_)))
        ));
    }

    #[test]
    fn test_map_http_error_prefers_reason() {
        let err = map_http_error(
            StatusCode::BAD_REQUEST,
            r#"{"error":true,"reason":"Email already used"}"#,
        );
        assert_eq!(err, GatewayError::server(400, "Email already used"));
    }

    #[test]
    fn test_map_http_error_falls_back_to_body_then_reason_phrase() {
        assert_eq!(
            map_http_error(StatusCode::INTERNAL_SERVER_ERROR, "database down\n"),
            GatewayError::server(500, "database down")
        );
        assert_eq!(
            map_http_error(StatusCode::NOT_FOUND, ""),
            GatewayError::server(404, "Not Found")
        );
    }
}
