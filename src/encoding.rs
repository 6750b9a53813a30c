//! # Base64url Codec
//!
//! WebAuthn moves binary values (challenges, user handles, credential IDs,
//! attestation objects) through JSON as URL-safe base64 without padding.
//! The platform credential API wants raw bytes, so every binary field crosses
//! this module twice per ceremony: once decoded on the way in, once encoded on
//! the way out.
//!
//! ## Format
//! - Alphabet: standard base64 with `-` in place of `+` and `_` in place of `/`
//! - Padding: omitted on output, tolerated on input

use base64::alphabet;
use base64::engine::general_purpose::{GeneralPurpose, PAD, URL_SAFE_NO_PAD};
use base64::prelude::*;
use base64::DecodeError;

/// Standard alphabet decoder that, like browser `atob()`, ignores stray bits
/// in the final symbol instead of rejecting the input.
const LENIENT_STANDARD: GeneralPurpose =
    GeneralPurpose::new(&alphabet::STANDARD, PAD.with_decode_allow_trailing_bits(true));

/// Decode a base64url string into bytes
///
/// The omitted padding is restored (`(4 - len % 4) % 4` `=` characters), the
/// URL-safe symbols are mapped back onto the standard alphabet, and the
/// result goes through a standard base64 decode.
///
/// ## Errors
/// Returns the underlying [`DecodeError`] for characters outside both
/// alphabets or for a length that no base64 string can have (`len % 4 == 1`).
pub fn decode(text: &str) -> Result<Vec<u8>, DecodeError> {
    let padding = (4 - text.len() % 4) % 4;

    let mut standard = String::with_capacity(text.len() + padding);
    standard.extend(text.chars().map(|c| match c {
        '-' => '+',
        '_' => '/',
        other => other,
    }));
    standard.extend(std::iter::repeat('=').take(padding));

    LENIENT_STANDARD.decode(standard.as_bytes())
}

/// Encode bytes as base64url with the trailing padding stripped
pub fn encode(bytes: &[u8]) -> String {
    URL_SAFE_NO_PAD.encode(bytes)
}
