//! Login flow and session lifecycle.

use std::sync::Arc;

use tokio::sync::watch;
use vitesse_core::auth::{AuthResponse, TokenStore};
use vitesse_core::network::{Endpoint, NetworkGateway};
use vitesse_core::validation::is_valid_login;
use vitesse_core::{Result, VitesseError};

use crate::messages::user_message;

/// Published session state.
///
/// The token itself is never part of the published state; it stays in the
/// [`TokenStore`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionState {
    pub is_authenticated: bool,
    pub is_admin: bool,
    pub is_loading: bool,
    pub error_message: String,
    pub show_error: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    Unauthenticated,
    Authenticating,
    Authenticated,
}

impl SessionState {
    pub fn phase(&self) -> SessionPhase {
        if self.is_loading {
            SessionPhase::Authenticating
        } else if self.is_authenticated {
            SessionPhase::Authenticated
        } else {
            SessionPhase::Unauthenticated
        }
    }
}

/// Exchanges credentials for a bearer token and tracks the resulting session.
pub struct SessionService {
    gateway: Arc<dyn NetworkGateway>,
    token_store: Arc<dyn TokenStore>,
    state: watch::Sender<SessionState>,
}

impl SessionService {
    pub fn new(gateway: Arc<dyn NetworkGateway>, token_store: Arc<dyn TokenStore>) -> Self {
        let (state, _) = watch::channel(SessionState::default());
        Self {
            gateway,
            token_store,
            state,
        }
    }

    pub fn subscribe(&self) -> watch::Receiver<SessionState> {
        self.state.subscribe()
    }

    pub fn snapshot(&self) -> SessionState {
        self.state.borrow().clone()
    }

    pub fn is_admin(&self) -> bool {
        self.state.borrow().is_admin
    }

    /// Logs in with the given credentials.
    ///
    /// Malformed input is rejected without touching the network. Returns
    /// whether the session is now authenticated; failures are published as
    /// an error message instead of being returned.
    pub async fn login(&self, email: &str, password: &str) -> bool {
        match self.try_login(email, password).await {
            Ok(()) => true,
            Err(err) => {
                self.publish_error(&err);
                false
            }
        }
    }

    async fn try_login(&self, email: &str, password: &str) -> Result<()> {
        if !is_valid_login(email, password) {
            return Err(VitesseError::InvalidInput);
        }

        self.state.send_modify(|state| state.is_loading = true);
        let result = self.exchange(email, password).await;
        self.state.send_modify(|state| state.is_loading = false);
        result
    }

    async fn exchange(&self, email: &str, password: &str) -> Result<()> {
        let response: AuthResponse = self
            .gateway
            .request(&Endpoint::login(email, password))
            .await?;
        self.establish_session(&response.token, response.is_admin)
    }

    /// Persists `token` and marks the session authenticated.
    ///
    /// Fails with [`VitesseError::Unauthorized`] when the store does not
    /// return this exact token after saving it. The session is then left
    /// unauthenticated.
    pub fn establish_session(&self, token: &str, is_admin: bool) -> Result<()> {
        self.token_store.save(token);
        if self.token_store.get().as_deref() != Some(token) {
            tracing::warn!("[Session] Token was not persisted, session not established");
            self.state.send_modify(|state| {
                state.is_authenticated = false;
                state.is_admin = false;
            });
            return Err(VitesseError::Unauthorized);
        }

        self.state.send_modify(|state| {
            state.is_authenticated = true;
            state.is_admin = is_admin;
        });
        tracing::info!("[Session] Authenticated (admin: {})", is_admin);
        Ok(())
    }

    /// Drops the stored token and resets the session.
    pub fn logout(&self) {
        self.token_store.clear();
        self.state.send_replace(SessionState::default());
        tracing::info!("[Session] Logged out");
    }

    /// Hides the current error once the user has acknowledged it.
    pub fn dismiss_error(&self) {
        self.state.send_modify(|state| state.show_error = false);
    }

    fn publish_error(&self, err: &VitesseError) {
        if err.is_validation() {
            tracing::debug!("[Session] Login rejected locally: {}", err);
        } else {
            tracing::warn!("[Session] Login failed: {}", err);
        }
        let message = user_message(err);
        self.state.send_modify(|state| {
            state.is_loading = false;
            state.error_message = message;
            state.show_error = true;
        });
    }
}
