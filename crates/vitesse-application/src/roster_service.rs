//! Candidate roster: loading, deletion, favorites, search and selection.

use std::collections::BTreeSet;
use std::sync::Arc;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use vitesse_core::VitesseError;
use vitesse_core::candidate::{Candidate, filter_candidates};
use vitesse_core::network::{Endpoint, NetworkGateway};

use crate::messages::user_message;

/// Published roster state.
///
/// `candidates` keeps the server's order. `selected_ids` is ordered so bulk
/// operations walk it deterministically.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RosterViewState {
    pub candidates: Vec<Candidate>,
    pub search_text: String,
    pub show_only_favorites: bool,
    pub selected_ids: BTreeSet<String>,
    pub is_editing: bool,
    pub is_loading: bool,
    pub error_message: String,
    pub show_error: bool,
}

impl RosterViewState {
    /// Candidates matching the current search text and favorites toggle.
    pub fn filtered_candidates(&self) -> Vec<Candidate> {
        filter_candidates(&self.candidates, &self.search_text, self.show_only_favorites)
    }

    pub fn is_selected(&self, candidate: &Candidate) -> bool {
        self.selected_ids.contains(&candidate.id)
    }
}

/// Owns the roster view state and every mutation of it.
///
/// Operations take `&self` and may overlap; nothing de-duplicates or cancels
/// in-flight requests.
pub struct RosterService {
    gateway: Arc<dyn NetworkGateway>,
    is_admin: bool,
    state: watch::Sender<RosterViewState>,
}

impl RosterService {
    /// `is_admin` is fixed for the lifetime of the service.
    pub fn new(gateway: Arc<dyn NetworkGateway>, is_admin: bool) -> Self {
        let (state, _) = watch::channel(RosterViewState::default());
        Self {
            gateway,
            is_admin,
            state,
        }
    }

    /// Builds the service and kicks off the initial fetch on the current
    /// tokio runtime.
    pub fn start(
        gateway: Arc<dyn NetworkGateway>,
        is_admin: bool,
    ) -> (Arc<Self>, JoinHandle<bool>) {
        let service = Arc::new(Self::new(gateway, is_admin));
        let fetcher = Arc::clone(&service);
        let handle = tokio::spawn(async move { fetcher.fetch().await });
        (service, handle)
    }

    pub fn is_admin(&self) -> bool {
        self.is_admin
    }

    pub fn subscribe(&self) -> watch::Receiver<RosterViewState> {
        self.state.subscribe()
    }

    pub fn snapshot(&self) -> RosterViewState {
        self.state.borrow().clone()
    }

    pub fn filtered_candidates(&self) -> Vec<Candidate> {
        self.state.borrow().filtered_candidates()
    }

    /// Replaces the roster with the server's list.
    pub async fn fetch(&self) -> bool {
        self.state.send_modify(|state| state.is_loading = true);

        match self.gateway.request::<Vec<Candidate>>(&Endpoint::Candidates).await {
            Ok(candidates) => {
                tracing::debug!("[Roster] Fetched {} candidates", candidates.len());
                self.state.send_modify(|state| {
                    state.candidates = candidates;
                    state.is_loading = false;
                });
                true
            }
            Err(err) => {
                self.fail("fetch", err.into());
                false
            }
        }
    }

    /// Deletes one candidate, then reloads the whole roster.
    pub async fn delete(&self, candidate: &Candidate) -> bool {
        self.state.send_modify(|state| state.is_loading = true);

        let result = self
            .gateway
            .request_no_body(&Endpoint::delete_candidate(candidate.id.as_str()))
            .await;

        match result {
            Ok(()) => {
                tracing::info!("[Roster] Deleted candidate {}", candidate.id);
                self.fetch().await
            }
            Err(err) => {
                self.fail("delete", err.into());
                false
            }
        }
    }

    /// Deletes every selected candidate still present in the roster, one at
    /// a time in id order.
    ///
    /// A failed deletion is surfaced but does not stop the others. The
    /// selection is cleared and edit mode left regardless of the outcome.
    pub async fn delete_selected(&self) {
        let selected: Vec<String> = self.state.borrow().selected_ids.iter().cloned().collect();

        for id in selected {
            let candidate = self
                .state
                .borrow()
                .candidates
                .iter()
                .find(|candidate| candidate.id == id)
                .cloned();

            if let Some(candidate) = candidate {
                self.delete(&candidate).await;
            }
        }

        self.state.send_modify(|state| {
            state.selected_ids.clear();
            state.is_editing = false;
        });
    }

    pub fn spawn_delete_selected(self: &Arc<Self>) -> JoinHandle<()> {
        let service = Arc::clone(self);
        tokio::spawn(async move { service.delete_selected().await })
    }

    /// Adds the candidate to the selection, or removes it if already selected.
    pub fn toggle_selection(&self, candidate: &Candidate) {
        self.state.send_modify(|state| {
            if !state.selected_ids.remove(&candidate.id) {
                state.selected_ids.insert(candidate.id.clone());
            }
        });
    }

    /// Flips the favorite flag on the server and swaps in the returned
    /// candidate. Does nothing for non-admin users.
    pub async fn toggle_favorite(&self, candidate: &Candidate) {
        if !self.is_admin {
            tracing::debug!("[Roster] Ignoring favorite toggle for non-admin user");
            return;
        }

        self.state.send_modify(|state| state.is_loading = true);

        let result = self
            .gateway
            .request::<Candidate>(&Endpoint::toggle_favorite(candidate.id.as_str()))
            .await;

        match result {
            Ok(updated) => self.state.send_modify(|state| {
                if let Some(slot) = state.candidates.iter_mut().find(|c| c.id == candidate.id) {
                    *slot = updated;
                }
                state.is_loading = false;
            }),
            Err(err) => self.fail("toggle favorite", err.into()),
        }
    }

    pub fn spawn_toggle_favorite(self: &Arc<Self>, candidate: Candidate) -> JoinHandle<()> {
        let service = Arc::clone(self);
        tokio::spawn(async move { service.toggle_favorite(&candidate).await })
    }

    pub fn set_search_text(&self, text: impl Into<String>) {
        let text = text.into();
        self.state.send_modify(|state| state.search_text = text);
    }

    pub fn set_show_only_favorites(&self, enabled: bool) {
        self.state.send_modify(|state| state.show_only_favorites = enabled);
    }

    pub fn set_editing(&self, editing: bool) {
        self.state.send_modify(|state| state.is_editing = editing);
    }

    pub fn dismiss_error(&self) {
        self.state.send_modify(|state| state.show_error = false);
    }

    fn fail(&self, operation: &str, err: VitesseError) {
        tracing::warn!("[Roster] {} failed: {}", operation, err);
        let message = user_message(&err);
        self.state.send_modify(|state| {
            state.is_loading = false;
            state.error_message = message;
            state.show_error = true;
        });
    }
}
