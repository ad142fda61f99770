//! Authentication domain: credentials, registration payloads and token storage.

mod model;
mod token_store;

pub use model::{AuthResponse, Credentials, Registration, RegistrationForm};
pub use token_store::{TOKEN_KEY, TokenStore, mask_token};
