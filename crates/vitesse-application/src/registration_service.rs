//! Account registration, followed by an automatic login.

use std::sync::Arc;

use tokio::sync::watch;
use vitesse_core::VitesseError;
use vitesse_core::auth::RegistrationForm;
use vitesse_core::network::{Endpoint, NetworkGateway};

use crate::messages::user_message;
use crate::session_service::SessionService;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegistrationState {
    pub is_registered: bool,
    pub is_loading: bool,
    pub error_message: String,
    pub show_error: bool,
}

pub struct RegistrationService {
    gateway: Arc<dyn NetworkGateway>,
    session: Arc<SessionService>,
    state: watch::Sender<RegistrationState>,
}

impl RegistrationService {
    pub fn new(gateway: Arc<dyn NetworkGateway>, session: Arc<SessionService>) -> Self {
        let (state, _) = watch::channel(RegistrationState::default());
        Self {
            gateway,
            session,
            state,
        }
    }

    pub fn subscribe(&self) -> watch::Receiver<RegistrationState> {
        self.state.subscribe()
    }

    pub fn snapshot(&self) -> RegistrationState {
        self.state.borrow().clone()
    }

    /// Creates the account, then logs in with the same credentials.
    ///
    /// Returns whether the account was created. The outcome of the chained
    /// login is published by the [`SessionService`].
    pub async fn register(&self, form: RegistrationForm) -> bool {
        if !form.is_valid() {
            self.publish_error(&VitesseError::InvalidRegistration);
            return false;
        }

        self.state.send_modify(|state| state.is_loading = true);

        let registration = form.into_registration();
        let credentials = registration.credentials();
        let result = self
            .gateway
            .request_no_body(&Endpoint::Register(registration))
            .await;

        if let Err(err) = result {
            self.publish_error(&err.into());
            return false;
        }

        self.state.send_modify(|state| state.is_registered = true);
        tracing::info!("[Registration] Account created for {}", credentials.email);

        self.session
            .login(&credentials.email, &credentials.password)
            .await;

        self.state.send_modify(|state| state.is_loading = false);
        true
    }

    pub fn dismiss_error(&self) {
        self.state.send_modify(|state| state.show_error = false);
    }

    fn publish_error(&self, err: &VitesseError) {
        tracing::warn!("[Registration] Registration failed: {}", err);
        let message = user_message(err);
        self.state.send_modify(|state| {
            state.is_loading = false;
            state.error_message = message;
            state.show_error = true;
        });
    }
}
