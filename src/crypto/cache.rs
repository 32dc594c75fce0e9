// src/crypto/cache.rs

//! Bounded reuse cache for keyed HMAC engines.
//!
//! Keying an HMAC-SHA256 engine hashes the secret twice (ipad/opad), which
//! dominates the cost of signing short values. Textual secrets therefore get
//! their keyed-but-unfed engine cached and **cloned** per use; the stored
//! state is never fed input, so reuse cannot bleed between calls.
//!
//! Eviction is strict FIFO over insertion order. A cache hit does not
//! refresh an entry's position — a secret inserted first is evicted first no
//! matter how recently it was used.

use std::collections::{HashMap, VecDeque};
use std::fmt;
use std::sync::{LazyLock, Mutex, MutexGuard, PoisonError};

use crate::consts::DEFAULT_HMAC_CACHE_CAPACITY;
use crate::crypto::hmac::{keyed_engine, HmacSha256};
use crate::error::SignError;
use crate::secret::Secret;

/// Bounded FIFO cache mapping textual secrets to keyed HMAC engines.
///
/// The top-level [`sign`](crate::sign)/[`unsign`](crate::unsign) functions
/// share one process-wide instance; tests and embedders that need isolation
/// construct their own and go through [`sign_with`](crate::sign_with)/
/// [`unsign_with`](crate::unsign_with).
///
/// The cache is advisory: a full, empty, or zero-capacity cache changes how
/// often engines are re-keyed, never what any operation returns.
pub struct HmacCache {
    capacity: usize,
    engines: HashMap<String, HmacSha256>,
    order: VecDeque<String>,
}

impl HmacCache {
    /// Create a cache with [`DEFAULT_HMAC_CACHE_CAPACITY`].
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_HMAC_CACHE_CAPACITY)
    }

    /// Create a cache bounded to `capacity` textual secrets.
    ///
    /// A capacity of `0` yields a pass-through cache that never retains an
    /// engine.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            capacity,
            engines: HashMap::with_capacity(capacity),
            order: VecDeque::with_capacity(capacity),
        }
    }

    /// Produce an HMAC engine keyed with `secret`, ready to feed input.
    ///
    /// Textual secrets are looked up by exact string equality; on a miss the
    /// freshly keyed engine is inserted, evicting the oldest-inserted entry
    /// if the cache is at capacity. Byte-slice and key-material secrets are
    /// keyed fresh on every call and never touch the cache.
    ///
    /// # Errors
    ///
    /// [`SignError::MissingSecret`] if the secret is empty; the cache is not
    /// consulted in that case.
    pub fn provision(&mut self, secret: &Secret<'_>) -> Result<HmacSha256, SignError> {
        let Secret::Text(text) = *secret else {
            return keyed_engine(secret);
        };
        if text.is_empty() {
            return Err(SignError::MissingSecret);
        }
        if let Some(engine) = self.engines.get(text) {
            return Ok(engine.clone());
        }
        let engine = keyed_engine(secret)?;
        if self.capacity == 0 {
            return Ok(engine);
        }
        if self.engines.len() >= self.capacity {
            if let Some(oldest) = self.order.pop_front() {
                self.engines.remove(&oldest);
            }
        }
        self.engines.insert(text.to_owned(), engine.clone());
        self.order.push_back(text.to_owned());
        Ok(engine)
    }

    /// Number of cached secrets.
    #[must_use]
    pub fn len(&self) -> usize {
        self.engines.len()
    }

    /// Whether the cache holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.engines.is_empty()
    }

    /// Configured capacity bound.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Whether an engine for this textual secret is currently resident.
    #[must_use]
    pub fn contains(&self, secret: &str) -> bool {
        self.engines.contains_key(secret)
    }
}

impl Default for HmacCache {
    fn default() -> Self {
        Self::new()
    }
}

// Engines hold key-derived state; Debug reports shape only.
impl fmt::Debug for HmacCache {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HmacCache")
            .field("capacity", &self.capacity)
            .field("len", &self.engines.len())
            .finish_non_exhaustive()
    }
}

static SHARED: LazyLock<Mutex<HmacCache>> = LazyLock::new(|| Mutex::new(HmacCache::new()));

/// Lock the process-wide cache backing the top-level API.
///
/// Lookup-check-insert-evict runs as one atomic unit under this lock; the
/// digest computation itself happens on the cloned engine after the guard is
/// released. A poisoned lock is recovered: the cache never holds a partially
/// applied update.
pub(crate) fn shared() -> MutexGuard<'static, HmacCache> {
    SHARED.lock().unwrap_or_else(PoisonError::into_inner)
}
