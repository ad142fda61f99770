//! Application layer for Vitesse.
//!
//! Controllers that drive the login/registration flow and the candidate
//! roster. Each controller owns a plain state struct and publishes every
//! change through a `tokio::sync::watch` channel; callers read a snapshot or
//! subscribe for updates. Errors never escape a controller: they are turned
//! into a user-facing message plus a "show error" flag.

pub mod bootstrap;
pub mod candidate_creation_service;
pub mod logging;
pub mod messages;
pub mod registration_service;
pub mod roster_service;
pub mod session_service;

pub use bootstrap::AppBootstrap;
pub use candidate_creation_service::{CandidateCreationService, CandidateFormState};
pub use registration_service::{RegistrationService, RegistrationState};
pub use roster_service::{RosterService, RosterViewState};
pub use session_service::{SessionPhase, SessionService, SessionState};
