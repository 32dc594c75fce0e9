// src/verifier.rs

//! Token verification — recompute the expected token, compare in constant
//! time.
//!
//! Verification failure is a normal outcome (`Ok(None)`), never an error:
//! tokens arrive from untrusted callers and tampering is anticipated. Only
//! argument misuse (empty secret) surfaces as [`SignError`].

use crate::consts::SIGNATURE_SEPARATOR;
use crate::crypto::cache::HmacCache;
use crate::error::SignError;
use crate::secret::Secret;
use crate::signer;
use crate::utils::constant_time_eq;

/// Verify a signed token, recovering the original value.
///
/// Splits on the **last** `.` (a value may contain `.` itself), recomputes
/// the expected token for the candidate value, and accepts only on a
/// constant-time match of the full token. Returns:
///
/// - `Ok(Some(value))` — signature intact; `value` borrows from `token`.
/// - `Ok(None)` — no separator, or the signature does not verify.
///
/// # Errors
///
/// [`SignError::MissingSecret`] if `secret` is empty.
///
/// # Example
///
/// ```
/// use cookiesig_rs::{sign, unsign};
///
/// let token = sign("hello", "tobiiscool")?;
/// assert_eq!(unsign(&token, "tobiiscool")?, Some("hello"));
/// assert_eq!(unsign(&token, "wrong secret")?, None);
/// # Ok::<(), cookiesig_rs::SignError>(())
/// ```
pub fn unsign<'t, 's>(
    token: &'t str,
    secret: impl Into<Secret<'s>>,
) -> Result<Option<&'t str>, SignError> {
    let secret = secret.into();
    if secret.is_empty() {
        return Err(SignError::MissingSecret);
    }
    let Some(candidate) = split_candidate(token) else {
        return Ok(None);
    };
    verdict(token, candidate, signer::sign(candidate, secret))
}

/// [`unsign`] against a caller-owned [`HmacCache`] instead of the shared one.
pub fn unsign_with<'t, 's>(
    cache: &mut HmacCache,
    token: &'t str,
    secret: impl Into<Secret<'s>>,
) -> Result<Option<&'t str>, SignError> {
    let secret = secret.into();
    if secret.is_empty() {
        return Err(SignError::MissingSecret);
    }
    let Some(candidate) = split_candidate(token) else {
        return Ok(None);
    };
    verdict(token, candidate, signer::sign_with(cache, candidate, secret))
}

/// Everything before the last separator, or `None` when there is no
/// signature to check.
fn split_candidate(token: &str) -> Option<&str> {
    token
        .rfind(SIGNATURE_SEPARATOR)
        .map(|position| &token[..position])
}

/// Turn a recomputed token into the verification result.
///
/// A candidate value the signer refuses to carry (embedded NUL) can only
/// come from a malformed token, so it maps to `Ok(None)` rather than to the
/// caller-misuse error it would be on the signing side.
fn verdict<'t>(
    token: &'t str,
    candidate: &'t str,
    expected: Result<String, SignError>,
) -> Result<Option<&'t str>, SignError> {
    let expected = match expected {
        Ok(expected) => expected,
        Err(SignError::InvalidValue) => return Ok(None),
        Err(err) => return Err(err),
    };
    if expected.len() != token.len() {
        return Ok(None);
    }
    Ok(constant_time_eq(expected.as_bytes(), token.as_bytes()).then_some(candidate))
}
