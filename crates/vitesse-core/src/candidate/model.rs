use serde::{Deserialize, Serialize};

use crate::validation::is_valid_email;

/// A candidate as returned by the backend.
///
/// `id` is assigned by the server and is unique within a roster snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(
        default,
        rename = "linkedinURL",
        skip_serializing_if = "Option::is_none"
    )]
    pub linkedin_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    #[serde(default)]
    pub is_favorite: bool,
}

impl Candidate {
    /// Full display name ("First Last").
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Payload for creating a candidate; the server assigns `id` and `isFavorite`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CandidateDraft {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(rename = "linkedinURL", skip_serializing_if = "Option::is_none")]
    pub linkedin_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl CandidateDraft {
    /// Checks the required fields: first name, last name and a well-formed email.
    pub fn is_valid(&self) -> bool {
        !self.first_name.trim().is_empty()
            && !self.last_name.trim().is_empty()
            && is_valid_email(&self.email)
    }
}

/// Raw text captured by a candidate form.
///
/// Optional fields left blank become absent in the resulting draft.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CandidateForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub linkedin_url: String,
    pub note: String,
}

impl CandidateForm {
    pub fn into_draft(self) -> CandidateDraft {
        CandidateDraft {
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email,
            phone: non_blank(self.phone),
            linkedin_url: non_blank(self.linkedin_url),
            note: non_blank(self.note),
        }
    }
}

fn non_blank(value: String) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value)
    }
}
