use objset_hash::HashResult;

/// Minimal capability a collection needs to take part in set algebra.
///
/// `union`, `intersection`, and `difference` on
/// [`HashedSet`](crate::HashedSet) accept any implementer, not specifically
/// another `HashedSet`: membership by content plus ordered iteration is all
/// the algebra requires.
pub trait ValueSet<T> {
    /// Membership by structural content.
    ///
    /// Fallible because the implementer may need to hash the probe value.
    fn contains(&self, value: &T) -> HashResult<bool>;

    /// Iterate the stored values in the collection's own order.
    fn values(&self) -> Box<dyn Iterator<Item = &T> + '_>;
}
