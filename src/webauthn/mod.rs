//! # WebAuthn Module
//!
//! Client side of passkey registration.
//!
//! ## Submodules
//! - `types`: Wire and platform shapes of options and credentials
//! - `options`: Decoding server options for the platform
//! - `credential`: Encoding the platform's credential for the server
//! - `registration`: The ceremony that ties them together
//!
//! ## Registration Flow
//! 1. Client posts the username → server answers with creation options
//! 2. `options::decode()` turns base64url fields into bytes
//! 3. Platform creates the credential with the user's authenticator
//! 4. `credential::encode()` turns binary fields back into base64url
//! 5. Client posts username + credential → server verifies and stores it

pub mod credential;
pub mod options;
pub mod registration;
pub mod types;
