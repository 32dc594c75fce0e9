// src/crypto/mod.rs

//! Low-level crypto plumbing (keyed-hash engine + reuse cache).
//!
//! Sub-modules for primitives; see crate root for the high-level
//! `sign`/`unsign` API.

pub mod cache;
pub mod hmac;
