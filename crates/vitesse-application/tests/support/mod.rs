//! Shared fixtures for controller tests.

#![allow(dead_code)]

use std::sync::Arc;

use vitesse_core::candidate::Candidate;
use vitesse_core::network::NetworkGateway;
use vitesse_infrastructure::CannedGateway;

pub fn candidate(id: &str, first_name: &str, last_name: &str, is_favorite: bool) -> Candidate {
    Candidate {
        id: id.to_string(),
        first_name: first_name.to_string(),
        last_name: last_name.to_string(),
        email: format!(
            "{}.{}@example.com",
            first_name.to_lowercase(),
            last_name.to_lowercase()
        ),
        phone: None,
        linkedin_url: None,
        note: None,
        is_favorite,
    }
}

/// Returns the canned gateway twice: concrete (for stubbing and call
/// assertions) and as the trait object the controllers take.
pub fn split(gateway: CannedGateway) -> (Arc<CannedGateway>, Arc<dyn NetworkGateway>) {
    let canned = Arc::new(gateway);
    let as_dyn: Arc<dyn NetworkGateway> = canned.clone();
    (canned, as_dyn)
}
