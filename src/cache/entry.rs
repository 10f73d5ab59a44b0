//! Cache Entry Module
//!
//! Defines the structure for individual cache entries with an expiration instant.

// == Cache Entry ==
/// A stored value together with the instant after which it is stale.
#[derive(Debug, Clone, PartialEq)]
pub struct CacheEntry<V> {
    /// The stored value
    pub value: V,
    /// Expiration timestamp (Unix milliseconds)
    pub expires_at: u64,
}

impl<V> CacheEntry<V> {
    // == Constructor ==
    /// Creates an entry that expires `ttl_ms` milliseconds after `now_ms`.
    pub fn new(value: V, now_ms: u64, ttl_ms: u64) -> Self {
        Self {
            value,
            expires_at: now_ms.saturating_add(ttl_ms),
        }
    }

    // == Is Expired ==
    /// Checks if the entry is stale at `now_ms`.
    ///
    /// Boundary condition: the comparison is strict, so an entry read at
    /// exactly `expires_at` is still valid.
    pub fn is_expired(&self, now_ms: u64) -> bool {
        now_ms > self.expires_at
    }
}
