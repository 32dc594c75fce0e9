//! # Error Types
//!
//! This module defines the error type used throughout the library.
//! Fallible operations return [`Result<T, SignError>`](SignError).
//!
//! Only caller misuse is an error. A token that fails verification is a
//! normal outcome and is reported as `Ok(None)` by the verifier, never as
//! a `SignError`.

use thiserror::Error;

/// The error type for signing and verification operations.
///
/// Both variants indicate an invalid argument detected before any keyed-hash
/// computation runs. Tampered or malformed tokens are **not** covered here;
/// see [`unsign`](crate::unsign).
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignError {
    /// The value to sign contains an embedded NUL byte.
    ///
    /// The token wire format cannot carry NUL; every other character,
    /// including the `.` separator itself, is allowed in a value.
    #[error("value must not contain an embedded NUL byte")]
    InvalidValue,

    /// The secret is empty.
    ///
    /// Returned for an empty textual secret, an empty byte-slice secret,
    /// and empty [`KeyMaterial`](crate::KeyMaterial) alike. HMAC-SHA256
    /// would accept a zero-length key, but signing with one provides no
    /// authenticity, so it is rejected up front.
    #[error("secret must be provided")]
    MissingSecret,
}
