//! Composition root: builds the production collaborators and controllers.

use std::sync::Arc;

use anyhow::{Context, Result};
use tokio::task::JoinHandle;
use vitesse_core::auth::TokenStore;
use vitesse_core::config::RootConfig;
use vitesse_core::network::NetworkGateway;
use vitesse_infrastructure::{ConfigService, FileTokenStore, HttpGateway, VitessePaths};

use crate::candidate_creation_service::CandidateCreationService;
use crate::registration_service::RegistrationService;
use crate::roster_service::RosterService;
use crate::session_service::SessionService;

/// Everything a front end needs, wired together.
pub struct AppBootstrap {
    pub config: RootConfig,
    pub token_store: Arc<dyn TokenStore>,
    pub gateway: Arc<dyn NetworkGateway>,
    pub session: Arc<SessionService>,
    pub registration: Arc<RegistrationService>,
    pub candidate_creation: Arc<CandidateCreationService>,
}

impl AppBootstrap {
    /// Wires the app against the platform configuration directory.
    pub fn platform() -> Result<Self> {
        let paths = VitessePaths::platform().context("Failed to resolve config directory")?;
        Self::from_paths(&paths)
    }

    /// Loads `config.toml` (creating it if missing), then wires an HTTP
    /// gateway and a file-backed token store.
    pub fn from_paths(paths: &VitessePaths) -> Result<Self> {
        let config_service = ConfigService::new(paths);
        if let Err(e) = config_service.ensure_config_file() {
            tracing::warn!("[Bootstrap] Could not create default config: {}", e);
        }
        let config = config_service.get_config();
        tracing::info!("[Bootstrap] API base URL: {}", config.api.base_url);

        let token_store: Arc<dyn TokenStore> = Arc::new(FileTokenStore::from_paths(paths));
        let gateway: Arc<dyn NetworkGateway> = Arc::new(
            HttpGateway::from_config(&config.api, token_store.clone())
                .context("Failed to create HTTP gateway")?,
        );

        Ok(Self::with_collaborators(config, gateway, token_store))
    }

    /// Wires the controllers around caller-supplied collaborators.
    pub fn with_collaborators(
        config: RootConfig,
        gateway: Arc<dyn NetworkGateway>,
        token_store: Arc<dyn TokenStore>,
    ) -> Self {
        let session = Arc::new(SessionService::new(gateway.clone(), token_store.clone()));
        tracing::info!("[Bootstrap] SessionService initialized");

        let registration = Arc::new(RegistrationService::new(gateway.clone(), session.clone()));
        let candidate_creation = Arc::new(CandidateCreationService::new(gateway.clone()));
        tracing::info!("[Bootstrap] Registration and candidate form services initialized");

        Self {
            config,
            token_store,
            gateway,
            session,
            registration,
            candidate_creation,
        }
    }

    /// Roster for the current session; the admin flag is captured now.
    pub fn roster(&self) -> Arc<RosterService> {
        Arc::new(RosterService::new(self.gateway.clone(), self.session.is_admin()))
    }

    /// Like [`roster`](Self::roster), with the initial fetch already started.
    pub fn start_roster(&self) -> (Arc<RosterService>, JoinHandle<bool>) {
        RosterService::start(self.gateway.clone(), self.session.is_admin())
    }
}
