//! User-facing error messages.
//!
//! Every error maps to a non-empty message, including errors from outside
//! the Vitesse taxonomy.

use vitesse_core::{GatewayError, VitesseError};

pub const INVALID_LOGIN: &str = "Please enter a valid email address and password.";
pub const AUTHENTICATION_FAILED: &str = "Authentication failed. Please try again.";
pub const UNAUTHORIZED: &str = "Unauthorized.";
pub const INVALID_REGISTRATION: &str = "Please fill in all fields correctly.";
pub const MISSING_REQUIRED_FIELDS: &str = "Please fill all required fields.";
pub const MISSING_TOKEN: &str = "Authentication token is missing.";
pub const SERVER_ERROR: &str = "Server error";
pub const UNEXPECTED_ERROR: &str = "An unexpected error occurred.";

/// Message shown by the session, registration and roster controllers.
pub fn user_message(err: &VitesseError) -> String {
    match err {
        VitesseError::InvalidInput => INVALID_LOGIN.to_string(),
        VitesseError::Unauthorized => AUTHENTICATION_FAILED.to_string(),
        VitesseError::InvalidRegistration => INVALID_REGISTRATION.to_string(),
        VitesseError::InvalidCandidate => MISSING_REQUIRED_FIELDS.to_string(),
        VitesseError::Gateway(gateway) => gateway_message(gateway),
        VitesseError::Internal(_) => UNEXPECTED_ERROR.to_string(),
    }
}

/// Message shown by the candidate creation form.
///
/// Server failures are reported generically there rather than echoing the
/// backend's text.
pub fn candidate_creation_message(err: &VitesseError) -> String {
    if matches!(err, VitesseError::InvalidCandidate) {
        return MISSING_REQUIRED_FIELDS.to_string();
    }
    match err.as_gateway() {
        Some(gateway) if gateway.is_server_error() => SERVER_ERROR.to_string(),
        Some(gateway) if gateway.is_missing_token() => MISSING_TOKEN.to_string(),
        _ => UNEXPECTED_ERROR.to_string(),
    }
}

/// Message for an arbitrary error, recognising Vitesse errors inside it.
pub fn describe(err: &anyhow::Error) -> String {
    if let Some(err) = err.downcast_ref::<VitesseError>() {
        return user_message(err);
    }
    if let Some(err) = err.downcast_ref::<GatewayError>() {
        return gateway_message(err);
    }
    UNEXPECTED_ERROR.to_string()
}

fn gateway_message(err: &GatewayError) -> String {
    match err {
        GatewayError::Unauthorized => UNAUTHORIZED.to_string(),
        GatewayError::MissingToken => MISSING_TOKEN.to_string(),
        GatewayError::ServerError { message, .. } if !message.trim().is_empty() => {
            message.clone()
        }
        GatewayError::ServerError { .. } => SERVER_ERROR.to_string(),
        GatewayError::InvalidEndpoint(_)
        | GatewayError::DecodingError(_)
        | GatewayError::Unknown => UNEXPECTED_ERROR.to_string(),
    }
}
