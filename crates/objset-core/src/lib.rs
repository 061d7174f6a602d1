//! A set that compares members by structural content instead of identity.
//!
//! [`HashedSet`] stores each value under the
//! [`ContentHash`](objset_types::ContentHash) of its canonical encoding.
//! Membership, removal, and the set algebra all go through that digest, so
//! a freshly built record with the same fields and contents as a stored one
//! counts as the same member. Iteration yields values in first-insertion
//! order.
//!
//! # Key Types
//!
//! - [`HashedSet`] — the collection
//! - [`ValueSet`] — minimal membership + iteration capability accepted by
//!   `union` / `intersection` / `difference`
//! - [`Iter`], [`Entries`], [`IntoIter`] — insertion-order iterators
//!
//! # Design Rules
//!
//! 1. Two internal structures, one truth: the ordered key sequence and the
//!    hash-keyed store always hold exactly the same digests.
//! 2. Re-inserting present content is a no-op; first-insertion order wins.
//! 3. Hashing failures are never swallowed: they surface unchanged from any
//!    operation that needed a digest.
//! 4. Internal digests are never exposed through iteration; the set
//!    iterates values.

pub mod iter;
pub mod set;
pub mod traits;

pub use iter::{Entries, IntoIter, Iter};
pub use set::HashedSet;
pub use traits::ValueSet;
