// ============================================================================
// FILE: src/utils.rs
// ============================================================================

//! Utility functions used across the library.

use base64::engine::general_purpose::STANDARD_NO_PAD;
use base64::Engine as _;
use subtle::ConstantTimeEq;

/// Encode a digest with the standard base64 alphabet, trailing `=` stripped.
///
/// This is the only encoding the token format uses. Verification recomputes
/// the same unpadded string rather than decoding, so no re-padding path
/// exists anywhere in the library.
#[must_use]
pub fn encode_signature(digest: &[u8]) -> String {
    STANDARD_NO_PAD.encode(digest)
}

/// Constant-time equality over byte buffers.
///
/// Returns `false` immediately on a length mismatch (lengths are public).
/// For equal lengths the comparison touches every byte; its duration depends
/// only on the length, never on where a mismatch sits.
#[must_use]
pub fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    a.ct_eq(b).into()
}
