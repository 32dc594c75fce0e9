//! # Constants
//!
//! This module defines constants used throughout the library for the token
//! wire format and the keyed-hash engine cache.

/// Default capacity of the keyed-hash engine cache.
///
/// The process-wide cache backing [`sign`](crate::sign)/[`unsign`](crate::unsign)
/// holds at most this many textual secrets; inserting a 101st distinct secret
/// evicts the oldest-inserted entry. Eviction only costs a re-keying on the
/// next use of the evicted secret, never correctness.
pub const DEFAULT_HMAC_CACHE_CAPACITY: usize = 100;

/// Separator between the value and its signature in the wire format.
///
/// A value may itself contain `.`, so the verifier splits on the **last**
/// occurrence. The signature side is unambiguous: `.` is not in the standard
/// base64 alphabet.
pub const SIGNATURE_SEPARATOR: char = '.';

/// Length in characters of an encoded signature.
///
/// A 32-byte HMAC-SHA256 digest encodes to 44 base64 characters, the last of
/// which is `=` padding; stripping it leaves exactly 43.
pub const ENCODED_SIGNATURE_LEN: usize = 43;
