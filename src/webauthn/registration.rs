//! # Passkey Registration Ceremony
//!
//! Client-side orchestration of a registration ceremony. One ceremony makes
//! at most two requests to the relying party and one call to the platform.
//!
//! ## Ceremony Flow
//! 1. Read and trim the username; stop if it is empty
//! 2. Request creation options from the relying party
//! 3. Decode the binary fields of the options
//! 4. Ask the platform to create a credential (may wait on the user)
//! 5. Encode the credential's binary fields
//! 6. Submit username + credential to the relying party
//! 7. Show exactly one success or error message
//!
//! Every step propagates with `?`; failures are caught once in
//! [`RegistrationCeremony::submit`] and turned into a status message.

use crate::authenticator::CredentialCreator;
use crate::error::{CeremonyError, CeremonyResult, SUCCESS_MESSAGE};
use crate::relying_party::RelyingParty;
use crate::status::{CeremonyView, StatusMessage};
use crate::webauthn::types::RegistrationPayload;
use crate::webauthn::{credential, options};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

/// A reusable registration form
///
/// Holds the three collaborators of a ceremony. A second `submit` while one
/// is still running is rejected with [`CeremonyError::InFlight`] and leaves
/// the view alone.
pub struct RegistrationCeremony {
    relying_party: Arc<dyn RelyingParty>,
    authenticator: Arc<dyn CredentialCreator>,
    view: Arc<dyn CeremonyView>,
    in_flight: AtomicBool,
}

/// Releases the in-flight flag when the ceremony ends, however it ends
struct InFlightGuard<'a>(&'a AtomicBool);

impl<'a> InFlightGuard<'a> {
    fn acquire(flag: &'a AtomicBool) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| InFlightGuard(flag))
    }
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

impl RegistrationCeremony {
    /// Wire up a ceremony
    ///
    /// ## Parameters
    /// - `relying_party`: The server side; usually an [`crate::HttpRelyingParty`]
    /// - `authenticator`: The platform's credential-creation operation
    /// - `view`: Where the username is read from and the outcome is shown
    ///
    /// Nothing runs until [`submit`](Self::submit) is called; the same
    /// ceremony can be submitted again after each outcome.
    pub fn new(
        relying_party: Arc<dyn RelyingParty>,
        authenticator: Arc<dyn CredentialCreator>,
        view: Arc<dyn CeremonyView>,
    ) -> Self {
        RegistrationCeremony {
            relying_party,
            authenticator,
            view,
            in_flight: AtomicBool::new(false),
        }
    }

    /// True between the start and the end of a `submit`
    pub fn is_in_flight(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }

    /// Run one ceremony for the username currently in the view
    ///
    /// The outcome is shown on the view exactly once and also returned.
    ///
    /// ## Errors
    /// - `Validation`: blank username, nothing was sent
    /// - `OptionsRequest`: options endpoint refused, platform never called
    /// - `CredentialCreation`: platform rejected, credential never submitted
    /// - `Registration`: relying party did not accept the credential
    /// - `Transport` / `Serialization` / `Decode`: anything unexpected
    /// - `InFlight`: another submit is still running; the view is untouched
    #[instrument(skip_all, fields(username = tracing::field::Empty))]
    pub async fn submit(&self) -> CeremonyResult<()> {
        let Some(_guard) = InFlightGuard::acquire(&self.in_flight) else {
            warn!("Submit ignored, a ceremony is already in progress");
            return Err(CeremonyError::InFlight);
        };

        self.view.clear();

        let result = self.run().await;
        match &result {
            Ok(()) => {
                info!("Passkey registration succeeded");
                self.view.show(StatusMessage::success(SUCCESS_MESSAGE));
            }
            Err(e) => {
                // user_message() logs the failure detail
                if matches!(e, CeremonyError::Validation) {
                    self.view.focus_username();
                }
                self.view.show(StatusMessage::error(e.user_message()));
            }
        }

        result
    }

    async fn run(&self) -> CeremonyResult<()> {
        let username = self.view.username().trim().to_string();
        if username.is_empty() {
            return Err(CeremonyError::Validation);
        }
        tracing::Span::current().record("username", username.as_str());
        info!("Starting passkey registration");

        let issued = self.relying_party.registration_options(&username).await?;
        let decoded = options::decode(issued)?;

        debug!("Invoking platform credential creation");
        let created = self.authenticator.create(&decoded).await?;

        let payload = RegistrationPayload {
            username,
            credential: credential::encode(&created),
        };
        self.relying_party.register(&payload).await
    }
}
