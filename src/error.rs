//! # Error Handling
//!
//! Every way a registration ceremony can end badly, and the text the user
//! sees for each.
//!
//! ## Taxonomy
//! - `Validation`: empty username, caught before any network call
//! - `OptionsRequest`: the options endpoint answered with a non-success status
//! - `CredentialCreation`: the platform rejected credential creation
//! - `Registration`: the registration endpoint reported a non-ok status
//! - `Transport` / `Serialization` / `Decode`: anything unexpected on the way
//! - `InFlight`: a ceremony is already running
//!
//! All of them end the current ceremony; the user resubmits from the start.

use crate::authenticator::PlatformError;
use thiserror::Error;

/// Fallback when the server gives no usable message
pub const UNKNOWN_ERROR: &str = "Unknown error";

/// Shown after a successful registration
pub const SUCCESS_MESSAGE: &str = "Passkey registered successfully!";

/// Ceremony error type
///
/// The `#[from]` conversions let each ceremony step use `?` and have the
/// error caught once, at the top of the ceremony.
#[derive(Error, Debug)]
pub enum CeremonyError {
    #[error("username is empty")]
    Validation,

    /// Non-success status from the options endpoint
    #[error("options request failed with {status}: {}", .message.as_deref().unwrap_or(UNKNOWN_ERROR))]
    OptionsRequest {
        status: u16,
        message: Option<String>,
    },

    /// The platform refused to create the credential
    #[error("credential creation rejected: {0}")]
    CredentialCreation(#[from] PlatformError),

    /// The relying party did not accept the credential
    #[error("registration rejected: {}", .message.as_deref().unwrap_or(UNKNOWN_ERROR))]
    Registration { message: Option<String> },

    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Binary field in the options was not valid base64url
    #[error("decode error: {0}")]
    Decode(#[from] base64::DecodeError),

    #[error("a registration ceremony is already in progress")]
    InFlight,
}

impl CeremonyError {
    /// Text for the status display
    ///
    /// Platform rejections are reported generically; the detail only goes to
    /// the log.
    pub fn user_message(&self) -> String {
        match self {
            CeremonyError::Validation => "Please enter a username.".to_string(),
            CeremonyError::OptionsRequest { status, message } => {
                tracing::warn!("Options request failed with {}: {:?}", status, message);
                format!("Server error: {}", message.as_deref().unwrap_or(UNKNOWN_ERROR))
            }
            CeremonyError::CredentialCreation(e) => {
                tracing::warn!("Credential creation rejected: {}", e);
                "Passkey creation failed. Please try again.".to_string()
            }
            CeremonyError::Registration { message } => {
                tracing::warn!("Registration rejected: {:?}", message);
                format!(
                    "Registration failed: {}",
                    message.as_deref().unwrap_or(UNKNOWN_ERROR)
                )
            }
            CeremonyError::Transport(e) => {
                tracing::error!("Transport error: {:?}", e);
                format!("Unexpected error: {}", e)
            }
            CeremonyError::Serialization(e) => {
                tracing::error!("Serialization error: {:?}", e);
                format!("Unexpected error: {}", e)
            }
            CeremonyError::Decode(e) => {
                tracing::error!("Decode error: {:?}", e);
                format!("Unexpected error: {}", e)
            }
            CeremonyError::InFlight => "Registration already in progress.".to_string(),
        }
    }
}

pub type CeremonyResult<T> = Result<T, CeremonyError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn options_failure_uses_server_message() {
        let err = CeremonyError::OptionsRequest {
            status: 400,
            message: Some("Username required".into()),
        };
        assert_eq!(err.user_message(), "Server error: Username required");

        let err = CeremonyError::OptionsRequest {
            status: 500,
            message: None,
        };
        assert_eq!(err.user_message(), "Server error: Unknown error");
    }

    #[test]
    fn platform_detail_stays_out_of_user_message() {
        let err = CeremonyError::from(PlatformError::InvalidState(
            "credential 0xdeadbeef already registered".into(),
        ));
        let message = err.user_message();

        assert_eq!(message, "Passkey creation failed. Please try again.");
        assert!(!message.contains("deadbeef"));
    }

    #[test]
    fn registration_failure_falls_back() {
        let err = CeremonyError::Registration { message: None };
        assert_eq!(err.user_message(), "Registration failed: Unknown error");

        let err = CeremonyError::Registration {
            message: Some("Challenge expired".into()),
        };
        assert_eq!(err.user_message(), "Registration failed: Challenge expired");
    }

    #[test]
    fn unexpected_errors_interpolate_detail() {
        let parse = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let detail = parse.to_string();
        let err = CeremonyError::from(parse);

        assert_eq!(err.user_message(), format!("Unexpected error: {}", detail));
    }
}
