//! # Option Transcoder
//!
//! Turns the relying party's JSON creation options into the binary form the
//! platform credential API accepts. Only `challenge`, `user.id` and each
//! `excludeCredentials[].id` change; every other member is moved across as is.

use crate::encoding;
use crate::webauthn::types::{
    CredentialDescriptor, DecodedOptions, RegistrationOptions, UserEntity,
};
use base64::DecodeError;
use serde_json::Value;

/// Parse an options response body, unwrapping `publicKey` when present
///
/// webauthn-rs wraps the options as `{"publicKey": {...}}`, py_webauthn sends
/// them bare. Either way serde's own error (missing or mistyped field) is
/// returned as is.
pub fn from_json(mut body: Value) -> Result<RegistrationOptions, serde_json::Error> {
    let inner = body
        .as_object_mut()
        .and_then(|object| object.remove("publicKey"));

    serde_json::from_value(inner.unwrap_or(body))
}

/// Decode every binary-bearing field of the creation options
///
/// `excludeCredentials` keeps its length and order; a missing list stays
/// missing.
pub fn decode(options: RegistrationOptions) -> Result<DecodedOptions, DecodeError> {
    let RegistrationOptions {
        challenge,
        user,
        exclude_credentials,
        extra,
    } = options;

    let exclude_credentials = exclude_credentials
        .map(|descriptors| {
            descriptors
                .into_iter()
                .map(|descriptor| {
                    Ok(CredentialDescriptor {
                        id: encoding::decode(&descriptor.id)?,
                        extra: descriptor.extra,
                    })
                })
                .collect::<Result<Vec<_>, DecodeError>>()
        })
        .transpose()?;

    Ok(DecodedOptions {
        challenge: encoding::decode(&challenge)?,
        user: UserEntity {
            id: encoding::decode(&user.id)?,
            extra: user.extra,
        },
        exclude_credentials,
        extra,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn options(body: Value) -> RegistrationOptions {
        from_json(body).unwrap()
    }

    #[test]
    fn decodes_challenge_and_user_id() {
        let decoded = decode(options(json!({
            "challenge": "AAEC",
            "user": { "id": "AQ", "name": "alice" }
        })))
        .unwrap();

        assert_eq!(decoded.challenge, vec![0, 1, 2]);
        assert_eq!(decoded.user.id, vec![1]);
        assert_eq!(decoded.user.extra["name"], "alice");
        assert!(decoded.exclude_credentials.is_none());
    }

    #[test]
    fn passes_other_members_through() {
        let body = json!({
            "challenge": "AAEC",
            "user": { "id": "AQ", "name": "alice", "displayName": "alice" },
            "rp": { "id": "localhost", "name": "Passkey Test Site" },
            "pubKeyCredParams": [{ "type": "public-key", "alg": -7 }],
            "authenticatorSelection": { "userVerification": "preferred" },
            "timeout": 60000,
            "attestation": "none",
            "x-vendor": { "nested": [1, 2, 3] }
        });

        let decoded = decode(options(body.clone())).unwrap();

        let mut expected = body.as_object().unwrap().clone();
        expected.remove("challenge");
        expected.remove("user");
        assert_eq!(decoded.extra, expected);
        assert_eq!(decoded.user.extra["displayName"], "alice");
    }

    #[test]
    fn decodes_exclude_list_in_order() {
        let decoded = decode(options(json!({
            "challenge": "AAEC",
            "user": { "id": "AQ" },
            "excludeCredentials": [
                { "id": "CQk", "type": "public-key", "transports": ["usb"] },
                { "id": "-_8", "type": "public-key" },
                { "id": "", "type": "public-key" }
            ]
        })))
        .unwrap();

        let exclude = decoded.exclude_credentials.unwrap();
        assert_eq!(exclude.len(), 3);
        assert_eq!(exclude[0].id, vec![9, 9]);
        assert_eq!(exclude[0].extra["transports"], json!(["usb"]));
        assert_eq!(exclude[1].id, vec![0xfb, 0xff]);
        assert_eq!(exclude[1].extra["type"], "public-key");
        assert!(exclude[2].id.is_empty());
    }

    #[test]
    fn empty_exclude_list_stays_empty() {
        let decoded = decode(options(json!({
            "challenge": "AAEC",
            "user": { "id": "AQ" },
            "excludeCredentials": []
        })))
        .unwrap();

        assert_eq!(decoded.exclude_credentials, Some(vec![]));
    }

    #[test]
    fn unwraps_public_key_envelope() {
        let options = options(json!({
            "publicKey": {
                "challenge": "AAEC",
                "user": { "id": "AQ", "name": "alice" },
                "timeout": 60000
            }
        }));

        assert_eq!(options.challenge, "AAEC");
        assert_eq!(options.extra["timeout"], 60000);
        assert!(!options.extra.contains_key("publicKey"));
    }

    #[test]
    fn rejects_bad_binary_field() {
        let err = decode(options(json!({
            "challenge": "A",
            "user": { "id": "AQ" }
        })));
        assert!(err.is_err());

        let err = decode(options(json!({
            "challenge": "AAEC",
            "user": { "id": "AQ" },
            "excludeCredentials": [{ "id": "*" }]
        })));
        assert!(err.is_err());
    }

    #[test]
    fn rejects_options_without_challenge() {
        assert!(from_json(json!({ "user": { "id": "AQ" } })).is_err());
    }

    #[test]
    fn parse_errors_keep_serde_detail() {
        let err = from_json(json!({ "publicKey": { "user": { "id": "AQ" } } })).unwrap_err();
        assert!(err.to_string().contains("missing field `challenge`"), "{}", err);

        let err = from_json(json!({ "challenge": 5, "user": { "id": "AQ" } })).unwrap_err();
        assert!(err.to_string().contains("invalid type: integer `5`"), "{}", err);
    }
}
