use std::fmt;

use serde_json::Value;

use crate::auth::{Credentials, Registration};
use crate::candidate::CandidateDraft;
use crate::error::GatewayError;

/// HTTP verbs used by the backend API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum HttpMethod {
    Get,
    Post,
    Delete,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Delete => "DELETE",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Every request the client can make against the backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Endpoint {
    /// `POST /user/auth` → `{token, isAdmin}`
    Login(Credentials),
    /// `POST /user/register` → empty
    Register(Registration),
    /// `GET /candidate` → `[Candidate]`
    Candidates,
    /// `POST /candidate` → `Candidate`
    CreateCandidate(CandidateDraft),
    /// `DELETE /candidate/{id}` → empty
    DeleteCandidate { id: String },
    /// `POST /candidate/{id}/favorite` → `Candidate`
    ToggleFavorite { id: String },
}

impl Endpoint {
    pub fn login(email: impl Into<String>, password: impl Into<String>) -> Self {
        Endpoint::Login(Credentials::new(email, password))
    }

    pub fn delete_candidate(id: impl Into<String>) -> Self {
        Endpoint::DeleteCandidate { id: id.into() }
    }

    pub fn toggle_favorite(id: impl Into<String>) -> Self {
        Endpoint::ToggleFavorite { id: id.into() }
    }

    /// Short name used in log lines.
    pub fn name(&self) -> &'static str {
        match self {
            Endpoint::Login(_) => "login",
            Endpoint::Register(_) => "register",
            Endpoint::Candidates => "candidates",
            Endpoint::CreateCandidate(_) => "create_candidate",
            Endpoint::DeleteCandidate { .. } => "delete_candidate",
            Endpoint::ToggleFavorite { .. } => "toggle_favorite",
        }
    }

    pub fn method(&self) -> HttpMethod {
        match self {
            Endpoint::Candidates => HttpMethod::Get,
            Endpoint::DeleteCandidate { .. } => HttpMethod::Delete,
            Endpoint::Login(_)
            | Endpoint::Register(_)
            | Endpoint::CreateCandidate(_)
            | Endpoint::ToggleFavorite { .. } => HttpMethod::Post,
        }
    }

    /// Resource path, starting with `/`.
    ///
    /// Fails with `InvalidEndpoint` when a candidate id cannot be used as a
    /// single path segment.
    pub fn path(&self) -> Result<String, GatewayError> {
        match self {
            Endpoint::Login(_) => Ok("/user/auth".to_string()),
            Endpoint::Register(_) => Ok("/user/register".to_string()),
            Endpoint::Candidates | Endpoint::CreateCandidate(_) => Ok("/candidate".to_string()),
            Endpoint::DeleteCandidate { id } => Ok(format!("/candidate/{}", path_segment(id)?)),
            Endpoint::ToggleFavorite { id } => {
                Ok(format!("/candidate/{}/favorite", path_segment(id)?))
            }
        }
    }

    /// JSON body, if the endpoint carries one.
    pub fn body(&self) -> Result<Option<Value>, GatewayError> {
        let body = match self {
            Endpoint::Login(credentials) => serde_json::to_value(credentials),
            Endpoint::Register(registration) => serde_json::to_value(registration),
            Endpoint::CreateCandidate(draft) => serde_json::to_value(draft),
            Endpoint::Candidates
            | Endpoint::DeleteCandidate { .. }
            | Endpoint::ToggleFavorite { .. } => return Ok(None),
        };

        body.map(Some)
            .map_err(|e| GatewayError::invalid_endpoint(format!("unencodable body: {e}")))
    }

    /// Whether the request must carry the bearer token.
    pub fn requires_authentication(&self) -> bool {
        !matches!(self, Endpoint::Login(_) | Endpoint::Register(_))
    }
}

fn path_segment(id: &str) -> Result<&str, GatewayError> {
    let usable = !id.is_empty()
        && id != "."
        && id != ".."
        && id
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.' | '~'));

    if usable {
        Ok(id)
    } else {
        Err(GatewayError::invalid_endpoint(format!(
            "candidate id {id:?} is not a valid path segment"
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_routes() {
        let cases = [
            (Endpoint::login("a@b.co", "pw"), HttpMethod::Post, "/user/auth", false),
            (Endpoint::Candidates, HttpMethod::Get, "/candidate", true),
            (
                Endpoint::CreateCandidate(CandidateDraft::default()),
                HttpMethod::Post,
                "/candidate",
                true,
            ),
            (Endpoint::delete_candidate("42"), HttpMethod::Delete, "/candidate/42", true),
            (
                Endpoint::toggle_favorite("a1-b2"),
                HttpMethod::Post,
                "/candidate/a1-b2/favorite",
                true,
            ),
        ];

        for (endpoint, method, path, auth) in cases {
            assert_eq!(endpoint.method(), method, "{}", endpoint.name());
            assert_eq!(endpoint.path().unwrap(), path, "{}", endpoint.name());
            assert_eq!(endpoint.requires_authentication(), auth, "{}", endpoint.name());
        }
    }

    #[test]
    fn test_register_is_public() {
        let endpoint = Endpoint::Register(Registration {
            email: "a@b.co".to_string(),
            password: "pw".to_string(),
            first_name: "A".to_string(),
            last_name: "B".to_string(),
        });
        assert_eq!(endpoint.path().unwrap(), "/user/register");
        assert!(!endpoint.requires_authentication());
    }

    #[test]
    fn test_unusable_ids_are_invalid_endpoints() {
        for id in ["", "..", "a/b", "a b", "x?y=1", "#frag"] {
            let err = Endpoint::delete_candidate(id).path().unwrap_err();
            assert!(matches!(err, GatewayError::InvalidEndpoint(_)), "id {id:?}");
        }
    }

    #[test]
    fn test_bodies() {
        let login = Endpoint::login("a@b.co", "pw").body().unwrap().unwrap();
        assert_eq!(login["email"], "a@b.co");
        assert_eq!(login["password"], "pw");

        assert!(Endpoint::Candidates.body().unwrap().is_none());
        assert!(Endpoint::delete_candidate("1").body().unwrap().is_none());
    }
}
