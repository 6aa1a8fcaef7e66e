use super::{Edge, Iter, RedBlackMap};
use crate::compare::{Compare, Natural};
use crate::error::InvariantError;
use std::fmt::{Debug, Formatter};
use std::io;
use std::iter::FusedIterator;

/// A sorted set of keys.
///
/// The implementation is a thin wrapper around [`RedBlackMap`] with `()`
/// values, so it shares the map's balancing and order statistics.
///
/// # Examples
/// ```
/// use ordered_collections::RedBlackSet;
///
/// let mut s = RedBlackSet::new();
/// assert!(!s.put(3));
/// assert!(!s.put(1));
/// assert!(s.put(3));
///
/// assert_eq!(s.size(), 2);
/// assert_eq!(s.select(1), Some(&3));
/// assert!(s.delete(&1));
/// assert!(!s.delete(&1));
/// ```
#[derive(Clone)]
pub struct RedBlackSet<K, C = Natural> {
    map: RedBlackMap<K, (), C>,
}

impl<K: Ord> RedBlackSet<K> {
    /// Returns a new, empty set ordered by the keys' `Ord`.
    pub fn new() -> Self {
        Self {
            map: RedBlackMap::new(),
        }
    }
}

impl<K, C> RedBlackSet<K, C> {
    /// Returns a new, empty set ordered by `cmp`.
    pub fn with_comparator(cmp: C) -> Self {
        Self {
            map: RedBlackMap::with_comparator(cmp),
        }
    }

    /// Removes all the keys from self.
    pub fn clear(&mut self) {
        self.map.clear();
    }

    /// Returns true if self is the empty set, false otherwise.
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Returns the number of keys in self.
    pub fn size(&self) -> usize {
        self.map.size()
    }

    /// Returns the number of keys in self.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Returns the least key in the set.
    pub fn min(&self) -> Option<&K> {
        self.map.min().map(|e| e.0)
    }

    /// Returns the greatest key in the set.
    pub fn max(&self) -> Option<&K> {
        self.map.max().map(|e| e.0)
    }

    /// Returns the key with exactly `rank` smaller keys in the set.
    pub fn select(&self, rank: usize) -> Option<&K> {
        self.map.select(rank).map(|e| e.0)
    }

    /// Visits every key in order until `visit` returns false.
    pub fn keys<F>(&self, mut visit: F)
    where
        F: FnMut(&K) -> bool,
    {
        self.map.keys(|k, _| visit(k));
    }

    /// Returns an iterator over self's keys in sorted order.
    pub fn iter(&self) -> SetIter<'_, K> {
        SetIter {
            iter: self.map.iter(),
        }
    }

    /// Returns the parent/child links of the tree in pre-order.
    pub fn edges(&self) -> Vec<Edge<'_, K>> {
        self.map.edges()
    }
}

impl<K, C: Compare<K>> RedBlackSet<K, C> {
    /// Adds `key` to the set and returns true if it was already present.
    pub fn put(&mut self, key: K) -> bool {
        self.map.put(key, ()).1
    }

    /// Tests if self contains `key`.
    pub fn contains(&self, key: &K) -> bool {
        self.map.has(key)
    }

    /// Tests if self contains `key`; same as [`contains`](#method.contains).
    pub fn has(&self, key: &K) -> bool {
        self.map.has(key)
    }

    /// Removes `key` from self, returning true if it was present.
    pub fn delete(&mut self, key: &K) -> bool {
        self.map.delete(key).is_some()
    }

    /// Removes and returns the least key.
    pub fn delete_min(&mut self) -> Option<K> {
        self.map.delete_min().map(|e| e.0)
    }

    /// Removes and returns the greatest key.
    pub fn delete_max(&mut self) -> Option<K> {
        self.map.delete_max().map(|e| e.0)
    }

    /// Returns the greatest key less than or equal to `key`.
    pub fn floor(&self, key: &K) -> Option<&K> {
        self.map.floor(key).map(|e| e.0)
    }

    /// Returns the least key greater than or equal to `key`.
    pub fn ceiling(&self, key: &K) -> Option<&K> {
        self.map.ceiling(key).map(|e| e.0)
    }

    /// Returns the number of keys in self strictly less than `key`.
    pub fn rank(&self, key: &K) -> usize {
        self.map.rank(key)
    }

    /// Visits the keys in `[lo, hi]`, in order, until `visit` returns false.
    pub fn ranged_keys<F>(&self, lo: &K, hi: &K, mut visit: F)
    where
        F: FnMut(&K) -> bool,
    {
        self.map.ranged_keys(lo, hi, |k, _| visit(k));
    }

    /// Checks the red-black invariants of the underlying tree and returns
    /// its black height.
    pub fn validate(&self) -> Result<usize, InvariantError<&K>> {
        self.map.validate()
    }

    /// Writes the underlying tree as a DOT digraph named `name`.
    pub fn write_dot<W: io::Write>(&self, out: W, name: &str) -> io::Result<()>
    where
        K: Debug,
    {
        self.map.write_dot(out, name)
    }
}

impl<K: Debug, C> Debug for RedBlackSet<K, C> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<K, C: Default> Default for RedBlackSet<K, C> {
    fn default() -> Self {
        Self::with_comparator(C::default())
    }
}

impl<K: PartialEq, C> PartialEq for RedBlackSet<K, C> {
    fn eq(&self, other: &Self) -> bool {
        self.map == other.map
    }
}

impl<K: Eq, C> Eq for RedBlackSet<K, C> {}

impl<K, C: Compare<K>> Extend<K> for RedBlackSet<K, C> {
    fn extend<I: IntoIterator<Item = K>>(&mut self, iter: I) {
        for k in iter {
            self.put(k);
        }
    }
}

impl<K, C: Compare<K> + Default> FromIterator<K> for RedBlackSet<K, C> {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut s = Self::with_comparator(C::default());
        s.extend(iter);
        s
    }
}

impl<K: Ord, const N: usize> From<[K; N]> for RedBlackSet<K> {
    fn from(ks: [K; N]) -> Self {
        ks.into_iter().collect()
    }
}

impl<'a, K, C> IntoIterator for &'a RedBlackSet<K, C> {
    type Item = &'a K;
    type IntoIter = SetIter<'a, K>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// In-order iterator over the keys of a [`RedBlackSet`].
pub struct SetIter<'a, K> {
    iter: Iter<'a, K, ()>,
}

impl<'a, K> Iterator for SetIter<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        self.iter.next().map(|e| e.0)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

impl<'a, K> ExactSizeIterator for SetIter<'a, K> {}

impl<'a, K> FusedIterator for SetIter<'a, K> {}

#[cfg(test)]
mod test {
    extern crate quickcheck;
    use super::*;
    use crate::compare::Reversed;
    use quickcheck::quickcheck;
    use std::collections::BTreeSet;

    fn set_test(vs: Vec<i8>) {
        let mut s = RedBlackSet::new();
        let mut t = BTreeSet::new();

        for x in vs {
            if x >= 0 {
                assert_eq!(s.put(x), !t.insert(x));
            } else {
                let x = -(x + 1);
                assert_eq!(s.delete(&x), t.remove(&x));
            }

            assert_eq!(s.len(), t.len());
            assert!(s.iter().eq(t.iter()));
            assert!(s.validate().is_ok());
        }
    }

    #[test]
    fn set_test_regr1() {
        set_test(vec![0, 1, 2, -2, -1, -3]);
    }

    // edges never compares keys, so it is available without a comparator
    fn link_count<K, C>(s: &RedBlackSet<K, C>) -> usize {
        s.edges().len()
    }

    #[test]
    fn edges_without_compare_bound() {
        let s: RedBlackSet<_> = (0..10).collect();
        assert_eq!(link_count(&s), 9);
        assert_eq!(link_count(&RedBlackSet::<u8>::new()), 0);
    }

    #[test]
    fn reversed_set() {
        let mut s = RedBlackSet::with_comparator(Reversed(Natural));
        s.extend(["a", "c", "b"]);
        assert_eq!(s.min(), Some(&"c"));
        assert_eq!(s.delete_min(), Some("c"));
        assert_eq!(s.delete_max(), Some("a"));
        assert_eq!(s.size(), 1);
    }

    #[test]
    fn ranged_keys_and_debug() {
        let s: RedBlackSet<_> = (0..10).collect();
        let mut got = vec![];
        s.ranged_keys(&2, &4, |k| {
            got.push(*k);
            true
        });
        assert_eq!(got, vec![2, 3, 4]);
        assert_eq!(format!("{:?}", RedBlackSet::from([2, 1])), "{1, 2}");
    }

    quickcheck! {
        fn qc_set_test(vs: Vec<i8>) -> () {
            set_test(vs);
        }
    }
}
