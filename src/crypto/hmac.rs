// src/crypto/hmac.rs

//! HMAC-SHA256 primitives (re-exports from `hmac` + `sha2`).

use hmac::{Hmac, Mac};
use sha2::Sha256;

use crate::error::SignError;
use crate::secret::Secret;

/// The keyed-hash engine every token signature is computed with.
pub type HmacSha256 = Hmac<Sha256>;

/// Key a fresh HMAC-SHA256 engine with `secret`.
///
/// The returned engine has been fed no input yet. Empty secrets are rejected
/// with [`SignError::MissingSecret`]; every other key length is accepted.
pub fn keyed_engine(secret: &Secret<'_>) -> Result<HmacSha256, SignError> {
    if secret.is_empty() {
        return Err(SignError::MissingSecret);
    }
    Ok(<HmacSha256 as Mac>::new_from_slice(secret.key_bytes())
        .expect("HMAC-SHA256 accepts keys of any length"))
}
