//! Long-term public signing keys held by the identity service.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::keyed::Keyed;

/// A public key published by the identity server.
///
/// An identity server has some long-term public/private keypairs, named in
/// the scheme `algorithm:identifier` (e.g. `ed25519:0`). It may also track
/// short-term keypairs with different usage and lifetime characteristics;
/// both kinds are stored as a `PublicKey`.
///
/// Two keys with the same algorithm and identifier share a storage key, so
/// storing the second replaces the first.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PublicKey {
    /// Signing algorithm, e.g. `ed25519`.
    pub algorithm: String,
    /// Identifier distinguishing keys of the same algorithm.
    pub identifier: String,
    /// Encoded key material (typically unpadded base64).
    #[serde(rename = "public_key")]
    pub content: String,
}

impl PublicKey {
    /// Create a new public key record.
    pub fn new(
        algorithm: impl Into<String>,
        identifier: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            algorithm: algorithm.into(),
            identifier: identifier.into(),
            content: content.into(),
        }
    }
}

impl Keyed for PublicKey {
    fn key(&self) -> String {
        format!("{}:{}", self.algorithm, self.identifier)
    }
}

impl fmt::Display for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.algorithm, self.identifier)
    }
}
