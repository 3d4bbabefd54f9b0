//! The [`KeyedStore`] trait defining the keyed storage interface.

use std::sync::Arc;

use crate::error::StoreResult;
use crate::keyed::Keyed;

/// Storage backend for self-keying entities.
///
/// Implementations must be thread-safe (`Send + Sync`). Entities are held
/// by shared handle: `get`, `lookup` and `search` return the same `Arc` that
/// was stored, never a copy. Callers must treat returned entities as
/// read-only and go through `put` again to change what is stored.
pub trait KeyedStore<T: Keyed + ?Sized>: Send + Sync {
    /// Store an entity under its derived key, replacing any entity already
    /// stored there.
    ///
    /// Fails only if the entity violates the [`Keyed`] contract.
    fn put(&self, entity: Arc<T>) -> StoreResult<()>;

    /// Fetch the entity stored under `key`.
    ///
    /// Returns `None` if nothing is stored there. Never fails.
    fn get(&self, key: &str) -> Option<Arc<T>>;

    /// Fetch the entity stored under `key`, reporting absence as
    /// [`StoreError::NotFound`](crate::StoreError::NotFound).
    fn lookup(&self, key: &str) -> StoreResult<Arc<T>>;

    /// Delete the entity stored under `key`.
    ///
    /// Returns `true` if an entity existed. Removing an absent key is a no-op.
    fn remove(&self, key: &str) -> bool;

    /// Return every entity whose key contains `query`.
    ///
    /// An empty query matches every entity. Result order is unspecified.
    fn search(&self, query: &str) -> Vec<Arc<T>>;

    /// Returns `true` if an entity is stored under `key`.
    fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }
}
