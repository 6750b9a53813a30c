//! # Credential Creation Boundary
//!
//! The client never creates credentials itself. Whatever embeds it (a browser
//! bridge, an OS passkey provider, a CTAP2 library talking to a security key)
//! implements [`CredentialCreator`] and the ceremony calls it exactly once.

use crate::webauthn::types::{Credential, DecodedOptions};
use async_trait::async_trait;
use thiserror::Error;

/// Rejection reported by the platform credential API
///
/// Variants follow the DOMException names browsers use for
/// `navigator.credentials.create()`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PlatformError {
    /// User cancelled, dismissed the prompt, or the operation timed out
    #[error("NotAllowedError: {0}")]
    NotAllowed(String),

    /// An authenticator already holds one of the excluded credentials
    #[error("InvalidStateError: {0}")]
    InvalidState(String),

    /// RP ID does not match the calling origin, or the context is insecure
    #[error("SecurityError: {0}")]
    Security(String),

    /// None of the requested algorithms or options are supported
    #[error("NotSupportedError: {0}")]
    NotSupported(String),

    #[error("AbortError: {0}")]
    Abort(String),

    #[error("{0}")]
    Other(String),
}

/// The platform's credential-creation operation
///
/// `create` may stay pending for as long as the user takes to answer a
/// biometric prompt or tap a key.
#[async_trait]
pub trait CredentialCreator: Send + Sync {
    async fn create(&self, options: &DecodedOptions) -> Result<Credential, PlatformError>;
}
