//! # WebAuthn Client Types
//!
//! This module defines the shapes exchanged with the relying party and with
//! the platform credential API.
//!
//! ## Binary Fields
//! The relying party speaks JSON, so binary values travel as base64url text.
//! The platform speaks bytes. The option types are generic over the binary
//! representation `B`:
//! - `B = String`: as received from the server ([`RegistrationOptions`])
//! - `B = Vec<u8>`: as handed to the platform ([`DecodedOptions`])
//!
//! Fields this client does not need to touch are kept in `extra` maps so they
//! reach the platform exactly as the server sent them.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Public key credential creation options
///
/// Only the binary-bearing members are typed. Everything else (`rp`,
/// `pubKeyCredParams`, `timeout`, `authenticatorSelection`, `attestation`,
/// `extensions`, ...) is carried untouched in `extra`.
///
/// ## Example JSON
/// ```json
/// {
///   "rp": { "id": "localhost", "name": "Passkey Test Site" },
///   "user": { "id": "AQ", "name": "alice", "displayName": "alice" },
///   "challenge": "AAEC",
///   "pubKeyCredParams": [{ "type": "public-key", "alg": -7 }],
///   "timeout": 60000
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreationOptions<B> {
    pub challenge: B,
    pub user: UserEntity<B>,
    /// Absent stays absent: an empty list is not the same request
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exclude_credentials: Option<Vec<CredentialDescriptor<B>>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Options as issued by the relying party, binary fields still base64url text
pub type RegistrationOptions = CreationOptions<String>;

/// Options ready for the platform, binary fields decoded to bytes
pub type DecodedOptions = CreationOptions<Vec<u8>>;

/// The account the credential is created for
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserEntity<B> {
    /// User handle
    pub id: B,
    /// `name`, `displayName`
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A credential the authenticator must not register again
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CredentialDescriptor<B> {
    pub id: B,
    /// `type`, `transports`
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Credential produced by the platform credential API
///
/// Binary members are raw bytes here; [`crate::webauthn::credential::encode`]
/// turns them into an [`EncodedCredential`] before anything leaves the client.
#[derive(Debug, Clone, PartialEq)]
pub struct Credential {
    /// Credential ID, already base64url text
    pub id: String,
    /// Always `"public-key"` for WebAuthn
    pub credential_type: String,
    pub raw_id: Vec<u8>,
    pub response: AttestationResponse,
    /// `"platform"` or `"cross-platform"` when the platform reports it
    pub authenticator_attachment: Option<String>,
    pub client_extension_results: Option<Map<String, Value>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AttestationResponse {
    pub attestation_object: Vec<u8>,
    pub client_data_json: Vec<u8>,
}

/// Transport-safe form of [`Credential`]
///
/// ## Example JSON
/// ```json
/// {
///   "id": "CQk",
///   "type": "public-key",
///   "rawId": "CQk",
///   "response": {
///     "attestationObject": "o2NmbXRkbm9uZQ",
///     "clientDataJSON": "eyJ0eXBlIjoid2ViYXV0aG4uY3JlYXRlIn0"
///   }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EncodedCredential {
    pub id: String,
    #[serde(rename = "type")]
    pub credential_type: String,
    pub raw_id: String,
    pub response: EncodedAttestationResponse,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub authenticator_attachment: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_extension_results: Option<Map<String, Value>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EncodedAttestationResponse {
    pub attestation_object: String,
    #[serde(rename = "clientDataJSON")]
    pub client_data_json: String,
}

/// Body of the options request
///
/// ## Example JSON
/// ```json
/// { "username": "alice" }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptionsRequest {
    pub username: String,
}

/// Body of the registration request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegistrationPayload {
    pub username: String,
    pub credential: EncodedCredential,
}

/// Failure body of the options endpoint
///
/// Flask-style servers answer `{"message": ...}`, axum servers built on
/// webauthn-rs answer `{"error": ...}`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

impl ErrorBody {
    pub fn into_message(self) -> Option<String> {
        self.message.or(self.error)
    }
}

/// Reply of the registration endpoint
///
/// ## Example JSON
/// ```json
/// { "status": "ok" }
/// { "status": "failed", "message": "Challenge expired" }
/// { "success": true, "message": "Registration successful" }
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RegistrationReply {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub success: Option<bool>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

impl RegistrationReply {
    pub fn is_ok(&self) -> bool {
        self.status.as_deref() == Some("ok") || self.success == Some(true)
    }

    pub fn into_message(self) -> Option<String> {
        self.message.or(self.error)
    }
}
