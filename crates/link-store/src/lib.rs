//! Keyed entity storage for the Identbase link service.
//!
//! This crate stands in for durable persistence: a process-lifetime,
//! in-memory table from string keys to self-keying entities, shared by every
//! request handler of the service.
//!
//! # Entities
//!
//! Anything implementing [`Keyed`] can be stored. The entity derives its own
//! key; callers never pass one to [`KeyedStore::put`]. [`PublicKey`] is the
//! signing key record published by the identity server and is keyed as
//! `algorithm:identifier`.
//!
//! # Storage Backends
//!
//! All backends implement the [`KeyedStore`] trait:
//!
//! - [`InMemoryStore`] -- `HashMap` behind a single `RwLock`
//!
//! # Design Rules
//!
//! 1. Storing under an existing key replaces the previous entity.
//! 2. Empty or unstable keys are rejected at `put` time.
//! 3. `get` reports absence as `None`; `lookup` reports it as an error.
//! 4. `search` is a linear scan over keys, run under one read lock.
//! 5. Entities are shared by `Arc`, never deep-copied.

pub mod error;
pub mod keyed;
pub mod memory;
pub mod pubkey;
pub mod traits;

pub use error::{StoreError, StoreResult};
pub use keyed::Keyed;
pub use memory::InMemoryStore;
pub use pubkey::PublicKey;
pub use traits::KeyedStore;
