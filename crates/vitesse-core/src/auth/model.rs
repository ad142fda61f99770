use std::fmt;

use serde::{Deserialize, Serialize};

use crate::validation::is_valid_email;

/// Email/password pair sent to the login endpoint.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Account creation payload sent to the register endpoint.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Registration {
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
}

impl Registration {
    /// Credentials to use for the login that follows a successful registration.
    pub fn credentials(&self) -> Credentials {
        Credentials::new(self.email.clone(), self.password.clone())
    }
}

impl fmt::Debug for Registration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registration")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .field("first_name", &self.first_name)
            .field("last_name", &self.last_name)
            .finish()
    }
}

/// Raw registration form input, including the password confirmation.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct RegistrationForm {
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub first_name: String,
    pub last_name: String,
}

impl RegistrationForm {
    /// All fields filled, email well-formed, and both passwords identical.
    pub fn is_valid(&self) -> bool {
        !self.first_name.trim().is_empty()
            && !self.last_name.trim().is_empty()
            && !self.password.is_empty()
            && self.password == self.confirm_password
            && is_valid_email(&self.email)
    }

    pub fn into_registration(self) -> Registration {
        Registration {
            email: self.email,
            password: self.password,
            first_name: self.first_name,
            last_name: self.last_name,
        }
    }
}

impl fmt::Debug for RegistrationForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegistrationForm")
            .field("email", &self.email)
            .field("first_name", &self.first_name)
            .field("last_name", &self.last_name)
            .finish_non_exhaustive()
    }
}

/// Successful login response.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    pub token: String,
    pub is_admin: bool,
}

impl fmt::Debug for AuthResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthResponse")
            .field("token", &super::mask_token(&self.token))
            .field("is_admin", &self.is_admin)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_form() -> RegistrationForm {
        RegistrationForm {
            email: "test@example.com".to_string(),
            password: "password123".to_string(),
            confirm_password: "password123".to_string(),
            first_name: "John".to_string(),
            last_name: "Doe".to_string(),
        }
    }

    #[test]
    fn test_auth_response_uses_is_admin_key() {
        let response: AuthResponse =
            serde_json::from_str(r#"{"token":"abc","isAdmin":true}"#).unwrap();
        assert_eq!(response.token, "abc");
        assert!(response.is_admin);
    }

    #[test]
    fn test_registration_serializes_camel_case() {
        let value = serde_json::to_value(valid_form().into_registration()).unwrap();
        assert_eq!(value["firstName"], "John");
        assert_eq!(value["lastName"], "Doe");
        assert_eq!(value["email"], "test@example.com");
        assert!(value.get("confirmPassword").is_none());
    }

    #[test]
    fn test_registration_form_validation() {
        assert!(valid_form().is_valid());

        let mismatch = RegistrationForm {
            confirm_password: "different".to_string(),
            ..valid_form()
        };
        assert!(!mismatch.is_valid());

        let bad_email = RegistrationForm {
            email: "invalid-email".to_string(),
            ..valid_form()
        };
        assert!(!bad_email.is_valid());

        let empty_name = RegistrationForm {
            first_name: String::new(),
            ..valid_form()
        };
        assert!(!empty_name.is_valid());

        assert!(!RegistrationForm::default().is_valid());
    }

    #[test]
    fn test_debug_output_never_contains_password() {
        let credentials = Credentials::new("test@example.com", "hunter2");
        let registration = valid_form().into_registration();
        let form = valid_form();

        assert!(!format!("{credentials:?}").contains("hunter2"));
        assert!(!format!("{registration:?}").contains("password123"));
        assert!(!format!("{form:?}").contains("password123"));
    }
}
