//! The core set structure and its algebra.
//!
//! [`HashedSet`] composes two structures: an insertion-ordered sequence of
//! content digests and a digest-keyed store of the values themselves. All
//! operations keep the pair in sync.
//!
//! # Invariants
//!
//! - The key sequence contains no duplicate digests.
//! - The key sequence and the entry store hold exactly the same digests.
//! - `len()` equals the key sequence length.

use std::collections::HashMap;
use std::fmt;

use serde::Serialize;
use tracing::debug;

use objset_hash::{CanonicalHasher, HashResult, Hasher};
use objset_types::ContentHash;

use crate::iter::{Entries, IntoIter, Iter};
use crate::traits::ValueSet;

/// A set keyed by structural content instead of identity.
///
/// Each value is stored under the [`ContentHash`] of its canonical
/// encoding, so a freshly built value with the same fields and contents as
/// a stored one counts as the same member. Iteration yields values in
/// first-insertion order. The hashing collaborator is a type parameter;
/// [`CanonicalHasher`] is the default.
///
/// Operations that need a digest (`insert`, `remove`, `contains`, the
/// algebra methods) are fallible: a value the hasher cannot canonically
/// serialize surfaces as a [`HashError`](objset_hash::HashError), and the
/// set is left untouched.
#[derive(Clone)]
pub struct HashedSet<T, H = CanonicalHasher> {
    /// Insertion-ordered content digests, no duplicates.
    order: Vec<ContentHash>,
    /// Stored values, keyed by content digest.
    entries: HashMap<ContentHash, T>,
    /// The hashing collaborator.
    hasher: H,
}

impl<T> HashedSet<T> {
    /// Create an empty set with the default canonical hasher.
    pub fn new() -> Self {
        Self::with_hasher(CanonicalHasher::default())
    }
}

impl<T: Serialize> HashedSet<T> {
    /// Build a set from an iterable source, inserting each value in
    /// traversal order. Content duplicates collapse to their first
    /// occurrence. An empty source is valid and yields an empty set.
    pub fn from_values<I>(values: I) -> HashResult<Self>
    where
        I: IntoIterator<Item = T>,
    {
        let mut set = Self::new();
        for value in values {
            set.insert(value)?;
        }
        Ok(set)
    }
}

impl<T, H> HashedSet<T, H> {
    /// Create an empty set with an explicit hasher.
    pub fn with_hasher(hasher: H) -> Self {
        Self {
            order: Vec::new(),
            entries: HashMap::new(),
            hasher,
        }
    }

    /// Number of distinct stored values.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Returns `true` if the set holds no values.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Remove all values from the set.
    pub fn clear(&mut self) {
        debug!(removed = self.order.len(), "cleared set");
        self.order.clear();
        self.entries.clear();
    }

    /// Iterate the stored values in insertion order.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            order: self.order.iter(),
            entries: &self.entries,
        }
    }

    /// Same sequence as [`iter`](Self::iter). The set iterates by value;
    /// internal digests are not exposed as a key type.
    pub fn values(&self) -> Iter<'_, T> {
        self.iter()
    }

    /// Same sequence as [`values`](Self::values), for parity with
    /// associative containers.
    pub fn keys(&self) -> Iter<'_, T> {
        self.iter()
    }

    /// Iterate `(value, value)` pairs in insertion order, one per stored
    /// value.
    pub fn entries(&self) -> Entries<'_, T> {
        Entries { inner: self.iter() }
    }

    /// Invoke `f` once per stored value, in insertion order.
    pub fn for_each<F: FnMut(&T)>(&self, f: F) {
        self.iter().for_each(f);
    }

    /// The hashing collaborator in use.
    pub fn hasher(&self) -> &H {
        &self.hasher
    }
}

impl<T: Serialize, H: Hasher> HashedSet<T, H> {
    /// Insert a value by content.
    ///
    /// If no stored value has the same content hash, the digest is appended
    /// to the key sequence and the value stored. If the content is already
    /// present the call is a no-op: the existing entry and its position are
    /// kept. Returns the set for `?`-chaining.
    pub fn insert(&mut self, value: T) -> HashResult<&mut Self> {
        let key = self.hasher.content_hash(&value)?;
        if !self.entries.contains_key(&key) {
            self.order.push(key);
            self.entries.insert(key, value);
            debug!(hash = %key.short_hex(), len = self.order.len(), "inserted value");
        }
        Ok(self)
    }

    /// Remove the value with this content from the set.
    ///
    /// Returns what [`contains`](Self::contains) would have answered just
    /// before the call: `true` if the content was present, `false`
    /// otherwise. A second removal of the same content returns `false`.
    pub fn remove(&mut self, value: &T) -> HashResult<bool> {
        let key = self.hasher.content_hash(value)?;
        if self.entries.remove(&key).is_none() {
            return Ok(false);
        }
        self.order.retain(|k| *k != key);
        debug!(hash = %key.short_hex(), len = self.order.len(), "removed value");
        Ok(true)
    }

    /// Membership by structural content.
    pub fn contains(&self, value: &T) -> HashResult<bool> {
        let key = self.hasher.content_hash(value)?;
        Ok(self.entries.contains_key(&key))
    }

    /// New set holding the values of both collections.
    ///
    /// Order is this set's values first, then `other`'s novel values in
    /// `other`'s order; content duplicates collapse to the first-seen
    /// entry.
    pub fn union<S>(&self, other: &S) -> HashResult<Self>
    where
        S: ValueSet<T> + ?Sized,
        T: Clone,
        H: Clone,
    {
        let mut result = Self::with_hasher(self.hasher.clone());
        for value in self.iter() {
            result.insert(value.clone())?;
        }
        for value in other.values() {
            result.insert(value.clone())?;
        }
        Ok(result)
    }

    /// New set holding this set's values whose content is also in `other`,
    /// in this set's order. The stored values are this set's copies.
    pub fn intersection<S>(&self, other: &S) -> HashResult<Self>
    where
        S: ValueSet<T> + ?Sized,
        T: Clone,
        H: Clone,
    {
        let mut result = Self::with_hasher(self.hasher.clone());
        for value in self.iter() {
            if other.contains(value)? {
                result.insert(value.clone())?;
            }
        }
        Ok(result)
    }

    /// New set holding this set's values whose content is absent from
    /// `other`, in this set's order.
    pub fn difference<S>(&self, other: &S) -> HashResult<Self>
    where
        S: ValueSet<T> + ?Sized,
        T: Clone,
        H: Clone,
    {
        let mut result = Self::with_hasher(self.hasher.clone());
        for value in self.iter() {
            if !other.contains(value)? {
                result.insert(value.clone())?;
            }
        }
        Ok(result)
    }
}

impl<T: Serialize, H: Hasher> ValueSet<T> for HashedSet<T, H> {
    fn contains(&self, value: &T) -> HashResult<bool> {
        HashedSet::contains(self, value)
    }

    fn values(&self) -> Box<dyn Iterator<Item = &T> + '_> {
        Box::new(self.iter())
    }
}

impl<T, H: Default> Default for HashedSet<T, H> {
    fn default() -> Self {
        Self::with_hasher(H::default())
    }
}

impl<'a, T, H> IntoIterator for &'a HashedSet<T, H> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T, H> IntoIterator for HashedSet<T, H> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            order: self.order.into_iter(),
            entries: self.entries,
        }
    }
}

impl<T, H> fmt::Debug for HashedSet<T, H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HashedSet").field("len", &self.len()).finish()
    }
}
