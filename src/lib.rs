//! # Passkey Registration Client
//!
//! Client half of the WebAuthn passkey registration ceremony: fetch creation
//! options from a relying party, decode them for the platform credential API,
//! let the platform create the credential, encode the attestation and submit
//! it back for verification.
//!
//! The platform authenticator is not part of this crate. Callers plug it in
//! through [`authenticator::CredentialCreator`], and the surrounding form
//! through [`status::CeremonyView`].
//!
//! ## Example
//! ```no_run
//! # use std::sync::Arc;
//! # use passkey_register::authenticator::CredentialCreator;
//! # async fn demo(platform: Arc<dyn CredentialCreator>) -> anyhow::Result<()> {
//! use passkey_register::{ClientConfig, FormView, HttpRelyingParty, RegistrationCeremony, StatusBoard};
//!
//! let config = ClientConfig::from_env()?;
//! let view = Arc::new(FormView::new(StatusBoard::from_config(&config)));
//! let ceremony = RegistrationCeremony::new(
//!     Arc::new(HttpRelyingParty::new(&config)?),
//!     platform,
//!     view.clone(),
//! );
//!
//! view.set_username("alice");
//! let _ = ceremony.submit().await;
//! println!("{:?}", view.board().message());
//! # Ok(())
//! # }
//! ```

pub mod authenticator;
pub mod config;
pub mod encoding;
pub mod error;
pub mod relying_party;
pub mod status;
pub mod webauthn;

pub use config::ClientConfig;
pub use error::{CeremonyError, CeremonyResult};
pub use relying_party::{HttpRelyingParty, RelyingParty};
pub use status::{CeremonyView, FormView, StatusBoard, StatusMessage};
pub use webauthn::registration::RegistrationCeremony;
