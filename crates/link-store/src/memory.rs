//! In-memory keyed store shared between request handlers.
//!
//! [`InMemoryStore`] keeps every entity in a `HashMap` behind a single
//! `RwLock`. Mutations take the write lock; reads, including the full
//! substring scan of [`search`](KeyedStore::search), take the read lock for
//! their entire duration so they never observe a half-applied mutation.

use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use tracing::debug;

use crate::error::{StoreError, StoreResult};
use crate::keyed::Keyed;
use crate::traits::KeyedStore;

/// An in-memory implementation of [`KeyedStore`].
///
/// The type parameter defaults to `dyn Keyed`, so a single store can hold
/// any mix of keyed entities. Data is lost when the store is dropped.
pub struct InMemoryStore<T: Keyed + ?Sized = dyn Keyed> {
    entries: RwLock<HashMap<String, Arc<T>>>,
}

impl<T: Keyed + ?Sized> InMemoryStore<T> {
    /// Create a new empty store. Nothing is allocated until the first `put`.
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
        }
    }

    /// Number of entities currently stored.
    pub fn len(&self) -> usize {
        self.read_entries().len()
    }

    /// Returns `true` if the store is empty.
    pub fn is_empty(&self) -> bool {
        self.read_entries().is_empty()
    }

    /// Return a sorted list of all keys in the store.
    pub fn keys(&self) -> Vec<String> {
        let entries = self.read_entries();
        let mut keys: Vec<String> = entries.keys().cloned().collect();
        keys.sort();
        keys
    }

    /// Remove all entities from the store.
    pub fn clear(&self) {
        debug!("clearing store");
        self.write_entries().clear();
    }

    // Every critical section is a single map operation, so a writer that
    // panicked cannot have left a torn entry behind and the map is still
    // consistent.
    fn read_entries(&self) -> RwLockReadGuard<'_, HashMap<String, Arc<T>>> {
        self.entries.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write_entries(&self) -> RwLockWriteGuard<'_, HashMap<String, Arc<T>>> {
        self.entries.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<T: Keyed + ?Sized> Default for InMemoryStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Keyed + ?Sized> KeyedStore<T> for InMemoryStore<T> {
    fn put(&self, entity: Arc<T>) -> StoreResult<()> {
        let key = entity.key();
        if key.is_empty() {
            return Err(StoreError::EmptyKey);
        }
        let again = entity.key();
        if again != key {
            return Err(StoreError::UnstableKey {
                first: key,
                second: again,
            });
        }

        debug!(key = %key, "storing entity");
        self.write_entries().insert(key, entity);
        Ok(())
    }

    fn get(&self, key: &str) -> Option<Arc<T>> {
        debug!(key = %key, "getting stored entity");
        self.read_entries().get(key).cloned()
    }

    fn lookup(&self, key: &str) -> StoreResult<Arc<T>> {
        debug!(key = %key, "looking up stored entity");
        self.read_entries()
            .get(key)
            .cloned()
            .ok_or_else(|| StoreError::NotFound {
                key: key.to_string(),
            })
    }

    fn remove(&self, key: &str) -> bool {
        debug!(key = %key, "deleting stored entity");
        self.write_entries().remove(key).is_some()
    }

    fn search(&self, query: &str) -> Vec<Arc<T>> {
        debug!(query = %query, "searching stored entities");
        let entries = self.read_entries();
        entries
            .iter()
            .filter(|(key, _)| key.contains(query))
            .map(|(_, entity)| Arc::clone(entity))
            .collect()
    }

    fn contains(&self, key: &str) -> bool {
        debug!(key = %key, "checking for stored entity");
        self.read_entries().contains_key(key)
    }
}

impl<T: Keyed + ?Sized> fmt::Debug for InMemoryStore<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InMemoryStore")
            .field("entry_count", &self.len())
            .finish()
    }
}
