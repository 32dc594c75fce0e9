// src/secret.rs

//! Secret shapes accepted by [`sign`](crate::sign) and [`unsign`](crate::unsign).
//!
//! A secret is borrowed for the duration of a single call; the library never
//! stores caller key material, with one exception: a textual secret is copied
//! as the cache key when its keyed engine is inserted into the reuse cache.

use std::fmt;

use zeroize::{Zeroize, ZeroizeOnDrop};

/// A caller-supplied signing secret.
///
/// Only the [`Text`](Secret::Text) variant participates in engine caching —
/// textual secrets compare by value and make safe cache keys. Byte-slice and
/// [`KeyMaterial`] secrets get a freshly keyed engine on every call.
#[derive(Clone, Copy)]
pub enum Secret<'a> {
    /// Textual secret. Eligible for keyed-engine reuse.
    Text(&'a str),
    /// Raw key bytes. Never cached.
    Bytes(&'a [u8]),
    /// Opaque prebuilt key material. Never cached.
    Key(&'a KeyMaterial),
}

impl<'a> Secret<'a> {
    /// Raw bytes used to key the HMAC engine.
    pub(crate) fn key_bytes(&self) -> &'a [u8] {
        match *self {
            Secret::Text(text) => text.as_bytes(),
            Secret::Bytes(bytes) => bytes,
            Secret::Key(material) => material.as_bytes(),
        }
    }

    /// Whether the secret holds no key bytes at all.
    ///
    /// Empty secrets are rejected by every signing operation.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.key_bytes().is_empty()
    }
}

impl<'a> From<&'a str> for Secret<'a> {
    fn from(text: &'a str) -> Self {
        Secret::Text(text)
    }
}

impl<'a> From<&'a String> for Secret<'a> {
    fn from(text: &'a String) -> Self {
        Secret::Text(text)
    }
}

impl<'a> From<&'a [u8]> for Secret<'a> {
    fn from(bytes: &'a [u8]) -> Self {
        Secret::Bytes(bytes)
    }
}

impl<'a, const N: usize> From<&'a [u8; N]> for Secret<'a> {
    fn from(bytes: &'a [u8; N]) -> Self {
        Secret::Bytes(bytes)
    }
}

impl<'a> From<&'a Vec<u8>> for Secret<'a> {
    fn from(bytes: &'a Vec<u8>) -> Self {
        Secret::Bytes(bytes)
    }
}

impl<'a> From<&'a KeyMaterial> for Secret<'a> {
    fn from(material: &'a KeyMaterial) -> Self {
        Secret::Key(material)
    }
}

// Key bytes must never leak through Debug output.
impl fmt::Debug for Secret<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Secret::Text(_) => f.write_str("Secret::Text(..)"),
            Secret::Bytes(_) => f.write_str("Secret::Bytes(..)"),
            Secret::Key(_) => f.write_str("Secret::Key(..)"),
        }
    }
}

/// Owned, opaque key material.
///
/// Construct once, reuse across calls. The backing bytes are wiped when the
/// handle is dropped.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct KeyMaterial {
    key: Vec<u8>,
}

impl KeyMaterial {
    /// Wrap raw key bytes.
    #[must_use]
    pub fn new(key: impl Into<Vec<u8>>) -> Self {
        Self { key: key.into() }
    }

    /// Key length in bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.key.len()
    }

    /// Whether the key is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.key.is_empty()
    }

    pub(crate) fn as_bytes(&self) -> &[u8] {
        &self.key
    }
}

impl fmt::Debug for KeyMaterial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyMaterial")
            .field("len", &self.key.len())
            .finish_non_exhaustive()
    }
}
