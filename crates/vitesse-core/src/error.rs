//! Error types for the Vitesse client.

use thiserror::Error;

/// Failures produced by a [`NetworkGateway`](crate::network::NetworkGateway).
///
/// The set is closed: every way a request can fail maps onto exactly one
/// variant, and each failure is terminal for the call that produced it.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GatewayError {
    /// The endpoint could not be turned into a request URL.
    #[error("Invalid endpoint: {0}")]
    InvalidEndpoint(String),

    /// The endpoint requires authentication and no token is stored.
    #[error("Authentication token is missing")]
    MissingToken,

    /// The server rejected the credentials or token (HTTP 401).
    #[error("Unauthorized")]
    Unauthorized,

    /// Transport failure or non-success HTTP status.
    ///
    /// `status` is `None` when no response was received at all.
    #[error("Server error ({}): {message}", describe_status(.status))]
    ServerError { status: Option<u16>, message: String },

    /// The response body did not match the expected schema.
    #[error("Decoding error: {0}")]
    DecodingError(String),

    /// No response could be produced for the request.
    #[error("Unknown error")]
    Unknown,
}

impl GatewayError {
    /// Creates a ServerError with an HTTP status code
    pub fn server(status: u16, message: impl Into<String>) -> Self {
        Self::ServerError {
            status: Some(status),
            message: message.into(),
        }
    }

    /// Creates a ServerError for a request that never got a response
    pub fn transport(message: impl Into<String>) -> Self {
        Self::ServerError {
            status: None,
            message: message.into(),
        }
    }

    /// Creates an InvalidEndpoint error
    pub fn invalid_endpoint(message: impl Into<String>) -> Self {
        Self::InvalidEndpoint(message.into())
    }

    /// Creates a DecodingError
    pub fn decoding(message: impl Into<String>) -> Self {
        Self::DecodingError(message.into())
    }

    pub fn is_server_error(&self) -> bool {
        matches!(self, Self::ServerError { .. })
    }

    pub fn is_missing_token(&self) -> bool {
        matches!(self, Self::MissingToken)
    }

    /// HTTP status attached to the failure, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::ServerError { status, .. } => *status,
            Self::Unauthorized => Some(401),
            _ => None,
        }
    }
}

fn describe_status(status: &Option<u16>) -> String {
    match status {
        Some(code) => code.to_string(),
        None => "no response".to_string(),
    }
}

impl From<serde_json::Error> for GatewayError {
    fn from(err: serde_json::Error) -> Self {
        Self::DecodingError(err.to_string())
    }
}

/// Error type surfaced by the controllers.
///
/// Wraps gateway failures and adds the local validation failures that are
/// detected before any request is sent.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VitesseError {
    #[error(transparent)]
    Gateway(#[from] GatewayError),

    /// Login form rejected locally (malformed email or empty password).
    #[error("Invalid email or password")]
    InvalidInput,

    /// The session could not be established after a successful exchange,
    /// typically because the token did not survive persistence.
    #[error("Authentication failed")]
    Unauthorized,

    /// Registration form rejected locally.
    #[error("Registration fields are incomplete or invalid")]
    InvalidRegistration,

    /// Candidate draft rejected locally.
    #[error("Candidate draft is missing required fields")]
    InvalidCandidate,

    /// Any failure that does not belong to the taxonomy above.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl VitesseError {
    /// Creates an Internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    /// True for failures detected before the gateway was called.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::InvalidInput | Self::InvalidRegistration | Self::InvalidCandidate
        )
    }

    /// Returns the underlying gateway error, if this is one.
    pub fn as_gateway(&self) -> Option<&GatewayError> {
        match self {
            Self::Gateway(err) => Some(err),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, VitesseError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_error_display_with_and_without_status() {
        let with_status = GatewayError::server(500, "boom");
        assert_eq!(with_status.to_string(), "Server error (500): boom");

        let without_status = GatewayError::transport("connection refused");
        assert_eq!(
            without_status.to_string(),
            "Server error (no response): connection refused"
        );
    }

    #[test]
    fn test_status_accessor() {
        assert_eq!(GatewayError::server(404, "gone").status(), Some(404));
        assert_eq!(GatewayError::Unauthorized.status(), Some(401));
        assert_eq!(GatewayError::MissingToken.status(), None);
    }

    #[test]
    fn test_gateway_error_converts_into_vitesse_error() {
        let err: VitesseError = GatewayError::MissingToken.into();
        assert_eq!(err.as_gateway(), Some(&GatewayError::MissingToken));
        assert!(!err.is_validation());
        assert!(VitesseError::InvalidCandidate.is_validation());
    }

    #[test]
    fn test_kind_predicates() {
        assert!(GatewayError::transport("refused").is_server_error());
        assert!(GatewayError::server(500, "boom").is_server_error());
        assert!(!GatewayError::Unauthorized.is_server_error());
        assert!(GatewayError::MissingToken.is_missing_token());
        assert!(!GatewayError::Unknown.is_missing_token());
    }

    #[test]
    fn test_json_error_becomes_decoding_error() {
        let json_err = serde_json::from_str::<u32>("\"nope\"").unwrap_err();
        let err: GatewayError = json_err.into();
        assert!(matches!(err, GatewayError::DecodingError(_)));
    }
}
