// src/signer.rs

//! Token signing — produces `value + "." + signature`.

use hmac::Mac;

use crate::consts::{ENCODED_SIGNATURE_LEN, SIGNATURE_SEPARATOR};
use crate::crypto::cache::{self, HmacCache};
use crate::crypto::hmac::HmacSha256;
use crate::error::SignError;
use crate::secret::Secret;
use crate::utils::encode_signature;

/// Sign `value` with `secret`, producing a tamper-evident token.
///
/// The token is `value` followed by `.` and the unpadded base64 encoding of
/// the HMAC-SHA256 digest of `value` under `secret`. Signing is
/// deterministic: identical `(value, secret)` pairs always yield the same
/// token, no matter what was signed before.
///
/// Textual secrets reuse a keyed engine from the process-wide cache; byte
/// and [`KeyMaterial`](crate::KeyMaterial) secrets are keyed fresh per call.
///
/// # Errors
///
/// - [`SignError::InvalidValue`] if `value` contains an embedded NUL byte.
/// - [`SignError::MissingSecret`] if `secret` is empty.
///
/// # Example
///
/// ```
/// use cookiesig_rs::sign;
///
/// let token = sign("hello", "tobiiscool")?;
/// assert_eq!(token, "hello.DGDUkGlIkCzPz+C0B064FNgHdEjox7ch8tOBGslZ5QI");
/// # Ok::<(), cookiesig_rs::SignError>(())
/// ```
pub fn sign<'s>(value: &str, secret: impl Into<Secret<'s>>) -> Result<String, SignError> {
    let secret = secret.into();
    ensure_signable(value)?;
    let engine = cache::shared().provision(&secret)?;
    Ok(compose_token(value, engine))
}

/// [`sign`] against a caller-owned [`HmacCache`] instead of the shared one.
pub fn sign_with<'s>(
    cache: &mut HmacCache,
    value: &str,
    secret: impl Into<Secret<'s>>,
) -> Result<String, SignError> {
    let secret = secret.into();
    ensure_signable(value)?;
    let engine = cache.provision(&secret)?;
    Ok(compose_token(value, engine))
}

/// Reject values the token wire format cannot carry.
fn ensure_signable(value: &str) -> Result<(), SignError> {
    if value.as_bytes().contains(&0) {
        return Err(SignError::InvalidValue);
    }
    Ok(())
}

/// Feed `value` into a keyed engine and assemble the wire token.
fn compose_token(value: &str, mut engine: HmacSha256) -> String {
    engine.update(value.as_bytes());
    let digest = engine.finalize().into_bytes();

    let mut token = String::with_capacity(value.len() + 1 + ENCODED_SIGNATURE_LEN);
    token.push_str(value);
    token.push(SIGNATURE_SEPARATOR);
    token.push_str(&encode_signature(&digest));
    token
}
