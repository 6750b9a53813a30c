//! # Relying Party Client
//!
//! The two HTTP round-trips of a registration ceremony:
//! 1. `POST {options}` with `{"username"}` → creation options
//! 2. `POST {register}` with `{"username", "credential"}` → verification verdict
//!
//! The server is opaque; only its JSON contracts matter here.

use crate::config::ClientConfig;
use crate::error::{CeremonyError, CeremonyResult};
use crate::webauthn::options;
use crate::webauthn::types::{
    ErrorBody, OptionsRequest, RegistrationOptions, RegistrationPayload, RegistrationReply,
};
use async_trait::async_trait;
use serde_json::Value;
use tracing::debug;
use url::Url;

/// Server side of the ceremony
#[async_trait]
pub trait RelyingParty: Send + Sync {
    /// Request creation options for `username`
    ///
    /// ## Errors
    /// - `OptionsRequest` for a non-success status, with the server's
    ///   `message` (or `error`) when the body carries one
    /// - `Serialization` when a success body is not valid options JSON
    /// - `Transport` when the request itself fails
    async fn registration_options(&self, username: &str) -> CeremonyResult<RegistrationOptions>;

    /// Submit the encoded credential for verification
    ///
    /// Success is read from the reply body (`status: "ok"` or
    /// `success: true`), not from the transport status.
    ///
    /// ## Errors
    /// - `Registration` when the body reports anything else, or when a
    ///   non-success reply has no JSON body
    /// - `Serialization` when a success reply is not JSON
    /// - `Transport` when the request itself fails
    async fn register(&self, payload: &RegistrationPayload) -> CeremonyResult<()>;
}

/// [`RelyingParty`] over HTTP with JSON bodies
#[derive(Debug, Clone)]
pub struct HttpRelyingParty {
    http: reqwest::Client,
    options_url: Url,
    register_url: Url,
}

impl HttpRelyingParty {
    /// Client for the endpoints named in `config`, with a default HTTP client
    ///
    /// # Errors
    /// Fails if the server URL or an endpoint path does not form a valid URL.
    pub fn new(config: &ClientConfig) -> anyhow::Result<Self> {
        Self::with_client(reqwest::Client::new(), config)
    }

    /// Use a preconfigured client (proxies, TLS roots, timeouts, cookie store)
    ///
    /// Servers that keep the challenge in a session cookie need a client with
    /// a cookie store so both requests land in the same session.
    pub fn with_client(http: reqwest::Client, config: &ClientConfig) -> anyhow::Result<Self> {
        Ok(HttpRelyingParty {
            http,
            options_url: config.options_url()?,
            register_url: config.register_url()?,
        })
    }
}

#[async_trait]
impl RelyingParty for HttpRelyingParty {
    async fn registration_options(&self, username: &str) -> CeremonyResult<RegistrationOptions> {
        debug!(url = %self.options_url, "Requesting registration options");

        let response = self
            .http
            .post(self.options_url.clone())
            .json(&OptionsRequest {
                username: username.to_string(),
            })
            .send()
            .await?;

        let status = response.status();
        let body = response.bytes().await?;
        debug!(status = status.as_u16(), "Registration options response");

        if !status.is_success() {
            // A body that isn't JSON just means no server message
            let message = serde_json::from_slice::<ErrorBody>(&body)
                .ok()
                .and_then(ErrorBody::into_message);
            return Err(CeremonyError::OptionsRequest {
                status: status.as_u16(),
                message,
            });
        }

        let body: Value = serde_json::from_slice(&body)?;
        Ok(options::from_json(body)?)
    }

    async fn register(&self, payload: &RegistrationPayload) -> CeremonyResult<()> {
        debug!(url = %self.register_url, "Submitting credential");

        let response = self
            .http
            .post(self.register_url.clone())
            .json(payload)
            .send()
            .await?;

        let status = response.status();
        let body = response.bytes().await?;
        debug!(status = status.as_u16(), "Registration response");

        // Success is decided by the body, not the transport status
        let reply = match serde_json::from_slice::<RegistrationReply>(&body) {
            Ok(reply) => reply,
            Err(_) if !status.is_success() => RegistrationReply::default(),
            Err(e) => return Err(e.into()),
        };

        if reply.is_ok() {
            Ok(())
        } else {
            Err(CeremonyError::Registration {
                message: reply.into_message(),
            })
        }
    }
}
