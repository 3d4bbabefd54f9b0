//! Error types for keyed store operations.

use thiserror::Error;

/// Errors from keyed store operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// No entity is stored under the requested key.
    #[error("no entity stored under key: {key}")]
    NotFound { key: String },

    /// The entity derived an empty key, which is reserved as "no key".
    #[error("cannot store entity with an empty key")]
    EmptyKey,

    /// The entity derived two different keys on successive calls.
    #[error("entity key is unstable: derived {first:?} then {second:?}")]
    UnstableKey { first: String, second: String },
}

/// Result alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
