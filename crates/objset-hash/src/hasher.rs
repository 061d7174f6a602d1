use objset_types::ContentHash;
use serde::Serialize;

use crate::error::{HashError, HashResult};

/// Capability for deriving a [`ContentHash`] from structural content.
///
/// Implementations must be pure: the same structural content always
/// produces the same digest within a process, and distinct contents should
/// collide only with overwhelming improbability. Beyond that, the digest
/// algorithm is an implementation detail of the hasher, not of any
/// collection built on it.
pub trait Hasher {
    /// Hash a serializable value by its structural content.
    fn content_hash<T: Serialize + ?Sized>(&self, value: &T) -> HashResult<ContentHash>;
}

/// Domain-separated BLAKE3 hasher over a canonical JSON encoding.
///
/// The domain tag is prepended to every computation, so identical canonical
/// bytes hashed under different tags produce different digests. Values are
/// reduced to `serde_json::Value` before encoding: its map type keeps keys
/// in sorted order, so two structurally equal values yield identical bytes
/// regardless of the order their fields were built in. Sequence elements
/// keep their order; that order *is* structural content.
#[derive(Clone, Copy, Debug)]
pub struct CanonicalHasher {
    domain: &'static str,
}

impl CanonicalHasher {
    /// Hasher for set member values.
    pub const VALUE: Self = Self {
        domain: "objset-value-v1",
    };

    /// Create a hasher with a custom domain tag.
    pub const fn new(domain: &'static str) -> Self {
        Self { domain }
    }

    /// Hash raw bytes with domain separation.
    pub fn hash_bytes(&self, data: &[u8]) -> ContentHash {
        let mut hasher = blake3::Hasher::new();
        hasher.update(self.domain.as_bytes());
        hasher.update(b":");
        hasher.update(data);
        ContentHash::from_digest(*hasher.finalize().as_bytes())
    }

    /// Check that a value still hashes to `expected`.
    pub fn verify<T: Serialize + ?Sized>(
        &self,
        value: &T,
        expected: &ContentHash,
    ) -> HashResult<bool> {
        Ok(self.content_hash(value)? == *expected)
    }

    /// The domain tag used by this hasher.
    pub fn domain(&self) -> &str {
        self.domain
    }
}

impl Hasher for CanonicalHasher {
    fn content_hash<T: Serialize + ?Sized>(&self, value: &T) -> HashResult<ContentHash> {
        let canonical =
            serde_json::to_value(value).map_err(|e| HashError::Serialization(e.to_string()))?;
        let bytes =
            serde_json::to_vec(&canonical).map_err(|e| HashError::Serialization(e.to_string()))?;
        Ok(self.hash_bytes(&bytes))
    }
}

impl Default for CanonicalHasher {
    fn default() -> Self {
        Self::VALUE
    }
}
