//! # Configuration Management
//!
//! Where the relying party lives and how long a status message stays
//! highlighted. Values come from the environment, with a `.env` file loaded
//! first when one exists.
//!
//! ## Environment Variables
//! - `RP_SERVER_URL`: Relying party base URL (default: http://localhost:8000)
//! - `OPTIONS_PATH`: Registration options endpoint (default: /generate-registration-options)
//! - `REGISTER_PATH`: Registration endpoint (default: /register)
//! - `STATUS_HIGHLIGHT_MS`: How long a new status stays highlighted (default: 3000)

use anyhow::Result;
use std::env;
use std::time::Duration;
use url::Url;

pub const DEFAULT_SERVER_URL: &str = "http://localhost:8000";
pub const DEFAULT_OPTIONS_PATH: &str = "/generate-registration-options";
pub const DEFAULT_REGISTER_PATH: &str = "/register";
pub const DEFAULT_HIGHLIGHT_MS: u64 = 3000;

/// Client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Relying party base URL, scheme and host included
    /// For local development: "http://localhost:8000"
    pub server_url: String,

    /// Path of the endpoint that issues creation options
    pub options_path: String,

    /// Path of the endpoint that verifies the new credential
    pub register_path: String,

    /// Highlight duration for a freshly shown status message
    pub status_highlight: Duration,
}

impl ClientConfig {
    /// Configuration with default endpoint paths for the given server
    pub fn new(server_url: impl Into<String>) -> Self {
        ClientConfig {
            server_url: server_url.into(),
            options_path: DEFAULT_OPTIONS_PATH.to_string(),
            register_path: DEFAULT_REGISTER_PATH.to_string(),
            status_highlight: Duration::from_millis(DEFAULT_HIGHLIGHT_MS),
        }
    }

    /// Load configuration from environment variables
    ///
    /// ## Example .env file
    /// ```text
    /// RP_SERVER_URL=http://localhost:8000
    /// OPTIONS_PATH=/generate-registration-options
    /// REGISTER_PATH=/register
    /// STATUS_HIGHLIGHT_MS=3000
    /// ```
    ///
    /// # Errors
    /// Fails if `STATUS_HIGHLIGHT_MS` is not a number.
    pub fn from_env() -> Result<Self> {
        // Missing .env is fine
        dotenvy::dotenv().ok();

        Ok(ClientConfig {
            server_url: env::var("RP_SERVER_URL")
                .unwrap_or_else(|_| DEFAULT_SERVER_URL.to_string()),

            options_path: env::var("OPTIONS_PATH")
                .unwrap_or_else(|_| DEFAULT_OPTIONS_PATH.to_string()),

            register_path: env::var("REGISTER_PATH")
                .unwrap_or_else(|_| DEFAULT_REGISTER_PATH.to_string()),

            status_highlight: Duration::from_millis(
                env::var("STATUS_HIGHLIGHT_MS")
                    .unwrap_or_else(|_| DEFAULT_HIGHLIGHT_MS.to_string())
                    .parse()?,
            ),
        })
    }

    /// Absolute URL of the options endpoint
    pub fn options_url(&self) -> Result<Url> {
        self.endpoint(&self.options_path)
    }

    /// Absolute URL of the registration endpoint
    pub fn register_url(&self) -> Result<Url> {
        self.endpoint(&self.register_path)
    }

    fn endpoint(&self, path: &str) -> Result<Url> {
        Ok(Url::parse(&self.server_url)?.join(path)?)
    }
}
