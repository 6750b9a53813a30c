//! # Credential Encoder
//!
//! Converts the platform's credential into the JSON-safe shape the relying
//! party verifies. `rawId`, `attestationObject` and `clientDataJSON` become
//! base64url text; `id`, `type` and the optional members pass through.

use crate::encoding;
use crate::webauthn::types::{Credential, EncodedAttestationResponse, EncodedCredential};

/// Encode a platform credential for submission to the relying party
///
/// ## Flow
/// 1. Copy `id` and `type` as they are (already text)
/// 2. Base64url-encode `rawId`, `attestationObject` and `clientDataJSON`
/// 3. Carry `authenticatorAttachment` and `clientExtensionResults` over when present
///
/// ## Parameters
/// - `credential`: What the platform's credential-creation call resolved with
///
/// ## Returns
/// An [`EncodedCredential`] that serializes to the JSON shape servers built on
/// webauthn-rs or py_webauthn expect. Encoding cannot fail.
pub fn encode(credential: &Credential) -> EncodedCredential {
    EncodedCredential {
        id: credential.id.clone(),
        credential_type: credential.credential_type.clone(),
        raw_id: encoding::encode(&credential.raw_id),
        response: EncodedAttestationResponse {
            attestation_object: encoding::encode(&credential.response.attestation_object),
            client_data_json: encoding::encode(&credential.response.client_data_json),
        },
        authenticator_attachment: credential.authenticator_attachment.clone(),
        client_extension_results: credential.client_extension_results.clone(),
    }
}
