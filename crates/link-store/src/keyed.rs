//! The [`Keyed`] capability required to live in a store.

use std::sync::Arc;

/// A value that derives its own storage key.
///
/// Implementations must guarantee:
/// - `key()` is deterministic and side-effect-free, depending only on the
///   value's own fields.
/// - `key()` is stable for the lifetime of the value.
/// - `key()` never returns the empty string. Stores reject empty keys.
///
/// The trait is object-safe, so heterogeneous stores can hold
/// `Arc<dyn Keyed>`.
pub trait Keyed: Send + Sync {
    /// The key this value is stored and looked up under.
    fn key(&self) -> String;
}

impl<T: Keyed + ?Sized> Keyed for Box<T> {
    fn key(&self) -> String {
        (**self).key()
    }
}

impl<T: Keyed + ?Sized> Keyed for Arc<T> {
    fn key(&self) -> String {
        (**self).key()
    }
}
