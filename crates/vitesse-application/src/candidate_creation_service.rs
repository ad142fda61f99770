//! Candidate creation form controller.

use std::sync::Arc;

use tokio::sync::watch;
use vitesse_core::VitesseError;
use vitesse_core::candidate::{Candidate, CandidateDraft, CandidateForm};
use vitesse_core::network::{Endpoint, NetworkGateway};

use crate::messages::candidate_creation_message;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CandidateFormState {
    pub is_saving: bool,
    pub error_message: String,
    pub show_error: bool,
}

pub struct CandidateCreationService {
    gateway: Arc<dyn NetworkGateway>,
    state: watch::Sender<CandidateFormState>,
}

impl CandidateCreationService {
    pub fn new(gateway: Arc<dyn NetworkGateway>) -> Self {
        let (state, _) = watch::channel(CandidateFormState::default());
        Self { gateway, state }
    }

    pub fn subscribe(&self) -> watch::Receiver<CandidateFormState> {
        self.state.subscribe()
    }

    pub fn snapshot(&self) -> CandidateFormState {
        self.state.borrow().clone()
    }

    /// Converts raw form input (blank optionals become absent) and creates it.
    pub async fn submit(&self, form: CandidateForm) -> Option<Candidate> {
        self.create(form.into_draft()).await
    }

    /// Posts the draft and returns the server's candidate.
    ///
    /// An incomplete draft is rejected without any request.
    pub async fn create(&self, draft: CandidateDraft) -> Option<Candidate> {
        if !draft.is_valid() {
            self.publish_error(&VitesseError::InvalidCandidate);
            return None;
        }

        self.state.send_modify(|state| state.is_saving = true);

        match self
            .gateway
            .request::<Candidate>(&Endpoint::CreateCandidate(draft))
            .await
        {
            Ok(candidate) => {
                tracing::info!("[CandidateForm] Created candidate {}", candidate.id);
                self.state.send_modify(|state| state.is_saving = false);
                Some(candidate)
            }
            Err(err) => {
                self.publish_error(&err.into());
                None
            }
        }
    }

    pub fn dismiss_error(&self) {
        self.state.send_modify(|state| state.show_error = false);
    }

    fn publish_error(&self, err: &VitesseError) {
        tracing::warn!("[CandidateForm] Create failed: {}", err);
        let message = candidate_creation_message(err);
        self.state.send_modify(|state| {
            state.is_saving = false;
            state.error_message = message;
            state.show_error = true;
        });
    }
}
