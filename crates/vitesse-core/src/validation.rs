//! Input validation shared by the login, registration and candidate forms.

use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Z0-9a-z._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,64}$")
        .expect("email regex is valid")
});

/// True when the whole string has the shape `local@domain.tld`.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

/// Login form check: well-formed email and a non-empty password.
pub fn is_valid_login(email: &str, password: &str) -> bool {
    is_valid_email(email) && !password.is_empty()
}
