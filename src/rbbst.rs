//! Left-leaning red-black search trees: [`RedBlackMap`], [`RedBlackSet`]
//! and their iterators and diagnostics.

#![warn(missing_docs)]
use crate::compare::{Compare, Natural};
use std::cmp::Ordering::*;
use std::fmt::{Debug, Formatter};
use std::iter::FusedIterator;
use std::mem::replace;

mod diagnostics;
mod rbbst_set;

pub use diagnostics::{Color, Edge, Side};
pub use rbbst_set::{RedBlackSet, SetIter};

type OptNode<K, V> = Option<Box<Node<K, V>>>;

#[derive(Clone)]
struct Node<K, V> {
    key: K,
    val: V,
    left: OptNode<K, V>,
    right: OptNode<K, V>,
    size: usize, // nodes in this subtree, including self
    red: bool,   // color of the link from the parent
}

impl<K, V> Node<K, V> {
    fn new(key: K, val: V) -> Box<Self> {
        Box::new(Node {
            key,
            val,
            left: None,
            right: None,
            size: 1,
            red: true,
        })
    }

    fn resize(&mut self) {
        self.size = size(&self.left) + size(&self.right) + 1;
    }

    fn for_each<F>(&self, f: &mut F) -> bool
    where
        F: FnMut(&K, &V) -> bool,
    {
        if let Some(lf) = self.left.as_ref() {
            if !lf.for_each(f) {
                return false;
            }
        }

        if !f(&self.key, &self.val) {
            return false;
        }

        match self.right.as_ref() {
            Some(rt) => rt.for_each(f),
            None => true,
        }
    }
}

impl<K: Debug, V: Debug> Debug for Node<K, V> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let color = if self.red { 'R' } else { 'B' };
        f.write_fmt(format_args!(
            "({} {{{:?}: {:?}}} ",
            color, self.key, self.val
        ))?;

        match &self.left {
            None => f.write_str(".")?,
            Some(lf) => lf.fmt(f)?,
        }

        f.write_str(" ")?;

        match &self.right {
            None => f.write_str(".")?,
            Some(rt) => rt.fmt(f)?,
        }

        f.write_str(")")
    }
}

fn is_red<K, V>(opt_node: &OptNode<K, V>) -> bool {
    opt_node.as_ref().map_or(false, |n| n.red)
}

// Is the left child of opt_node red?
fn left_is_red<K, V>(opt_node: &OptNode<K, V>) -> bool {
    opt_node.as_ref().map_or(false, |n| is_red(&n.left))
}

fn size<K, V>(opt_node: &OptNode<K, V>) -> usize {
    opt_node.as_ref().map_or(0, |n| n.size)
}

fn rot_lf<K, V>(mut a: Box<Node<K, V>>) -> Box<Node<K, V>> {
    // We want the following transformation:
    //    a(x, b(y, z))   =>   b(a(x, y), z)
    // b takes over a's incoming color and a hangs off b by a red link.

    let Some(mut b) = a.right.take() else {
        return a;
    };

    a.right = b.left.take();

    b.red = a.red;
    a.red = true;

    b.size = a.size;
    a.resize();

    b.left = Some(a);
    b
}

fn rot_rt<K, V>(mut a: Box<Node<K, V>>) -> Box<Node<K, V>> {
    // We want the following transformation:
    //    a(b(x, y), z)   =>   b(x, a(y, z))

    let Some(mut b) = a.left.take() else {
        return a;
    };

    a.left = b.right.take();

    b.red = a.red;
    a.red = true;

    b.size = a.size;
    a.resize();

    b.right = Some(a);
    b
}

// Toggles the color of n and both its children: splits a temporary 4-node on
// the way up from an insert, or merges a 3-node downward during delete.
fn flip<K, V>(n: &mut Node<K, V>) {
    n.red = !n.red;
    if let Some(lf) = n.left.as_mut() {
        lf.red = !lf.red;
    }
    if let Some(rt) = n.right.as_mut() {
        rt.red = !rt.red;
    }
}

// Restores the left-leaning invariants at h on the way back up from an insert
// or a delete, and recomputes h's size.  The order of the checks matters.
fn balance<K, V>(mut h: Box<Node<K, V>>) -> Box<Node<K, V>> {
    if is_red(&h.right) && !is_red(&h.left) {
        h = rot_lf(h);
    }

    if is_red(&h.left) && left_is_red(&h.left) {
        h = rot_rt(h);
    }

    if is_red(&h.left) && is_red(&h.right) {
        flip(&mut h);
    }

    h.resize();
    h
}

// Assuming h is red and both h.left and h.left.left are black, make h.left or
// one of its children red.
fn move_red_lf<K, V>(mut h: Box<Node<K, V>>) -> Box<Node<K, V>> {
    flip(&mut h);
    if left_is_red(&h.right) {
        if let Some(rt) = h.right.take() {
            h.right = Some(rot_rt(rt));
        }
        h = rot_lf(h);
        flip(&mut h);
    }
    h
}

// Assuming h is red and both h.right and h.right.left are black, make h.right
// or one of its children red.
fn move_red_rt<K, V>(mut h: Box<Node<K, V>>) -> Box<Node<K, V>> {
    flip(&mut h);
    if left_is_red(&h.left) {
        h = rot_rt(h);
        flip(&mut h);
    }
    h
}

// Inserts (k,v) into the tree rooted at h and returns the new root of the
// subtree along with the replaced value.
fn ins<K, V, C>(
    h: OptNode<K, V>,
    k: K,
    v: V,
    cmp: &C,
) -> (Box<Node<K, V>>, Option<V>)
where
    C: Compare<K>,
{
    let mut h = match h {
        None => return (Node::new(k, v), None), // *** EARLY RETURN ***
        Some(h) => h,
    };

    let old_v = match cmp.compare(&k, &h.key) {
        Less => {
            let (lf, old_v) = ins(h.left.take(), k, v, cmp);
            h.left = Some(lf);
            old_v
        }

        Greater => {
            let (rt, old_v) = ins(h.right.take(), k, v, cmp);
            h.right = Some(rt);
            old_v
        }

        Equal => Some(replace(&mut h.val, v)),
    };

    (balance(h), old_v)
}

// Removes the leftmost node below h, returning the new subtree root and the
// removed entry.
fn rm_min<K, V>(mut h: Box<Node<K, V>>) -> (OptNode<K, V>, (K, V)) {
    if h.left.is_none() {
        // a left-leaning node without a left child has no right child either
        let Node { key, val, right, .. } = *h;
        return (right, (key, val)); // *** EARLY RETURN ***
    }

    if !is_red(&h.left) && !left_is_red(&h.left) {
        h = move_red_lf(h);
    }

    // move_red_lf always leaves a left child in place
    let (lf, kv) = rm_min(h.left.take().unwrap());
    h.left = lf;
    (Some(balance(h)), kv)
}

// Removes the rightmost node below h, returning the new subtree root and the
// removed entry.
fn rm_max<K, V>(mut h: Box<Node<K, V>>) -> (OptNode<K, V>, (K, V)) {
    if is_red(&h.left) {
        h = rot_rt(h);
    }

    if h.right.is_none() {
        let Node { key, val, left, .. } = *h;
        return (left, (key, val)); // *** EARLY RETURN ***
    }

    if !is_red(&h.right) && !left_is_red(&h.right) {
        h = move_red_rt(h);
    }

    // move_red_rt always leaves a right child in place
    let (rt, kv) = rm_max(h.right.take().unwrap());
    h.right = rt;
    (Some(balance(h)), kv)
}

// Removes k from the tree rooted at h.  Prerequisite: k is in the tree.  The
// red links pushed down on the way to k are only sound if the descent ends at
// a matching node.
fn rm<K, V, C>(
    mut h: Box<Node<K, V>>,
    k: &K,
    cmp: &C,
) -> (OptNode<K, V>, Option<V>)
where
    C: Compare<K>,
{
    if cmp.compare(k, &h.key) == Less {
        if h.left.is_none() {
            return (Some(h), None); // *** EARLY RETURN ***
        }

        if !is_red(&h.left) && !left_is_red(&h.left) {
            h = move_red_lf(h);
        }

        let (lf, old_v) = rm(h.left.take().unwrap(), k, cmp);
        h.left = lf;
        return (Some(balance(h)), old_v);
    }

    if is_red(&h.left) {
        h = rot_rt(h);
    }

    if h.right.is_none() {
        if cmp.compare(k, &h.key) == Equal {
            let Node { val, left, .. } = *h;
            return (left, Some(val)); // *** EARLY RETURN ***
        }
        return (Some(balance(h)), None); // *** EARLY RETURN ***
    }

    if !is_red(&h.right) && !left_is_red(&h.right) {
        h = move_red_rt(h);
    }

    let old_v = if cmp.compare(k, &h.key) == Equal {
        // replace h's entry with its successor and drop the successor's node
        let (rt, (succ_key, succ_val)) = rm_min(h.right.take().unwrap());
        h.right = rt;
        h.key = succ_key;
        Some(replace(&mut h.val, succ_val))
    } else {
        let (rt, old_v) = rm(h.right.take().unwrap(), k, cmp);
        h.right = rt;
        old_v
    };

    (Some(balance(h)), old_v)
}

fn visit_range<K, V, C, F>(
    opt_node: &OptNode<K, V>,
    lo: &K,
    hi: &K,
    cmp: &C,
    f: &mut F,
) -> bool
where
    C: Compare<K>,
    F: FnMut(&K, &V) -> bool,
{
    let Some(n) = opt_node else {
        return true;
    };

    let cmp_lo = cmp.compare(lo, &n.key);
    let cmp_hi = cmp.compare(hi, &n.key);

    // only descend into subtrees that can hold keys in [lo, hi]
    if cmp_lo == Less && !visit_range(&n.left, lo, hi, cmp, f) {
        return false;
    }

    if cmp_lo != Greater && cmp_hi != Less && !f(&n.key, &n.val) {
        return false;
    }

    if cmp_hi == Greater && !visit_range(&n.right, lo, hi, cmp, f) {
        return false;
    }

    true
}

/// A map from keys to values sorted by key, stored in a left-leaning
/// red-black balanced search tree.
///
/// Keys are ordered by the comparator `C`, which defaults to [`Natural`]
/// (the key's `Ord`).  Every node records the size of its subtree, so the
/// order-statistics operations [`select`](#method.select) and
/// [`rank`](#method.rank) run in O(log n) next to the usual lookups.
///
/// The set flavor, [`RedBlackSet`], is this map with `()` values.
///
/// The tree is a plain single-threaded value: it holds no locks, and
/// callers sharing it between threads must provide their own mutual
/// exclusion.
///
/// # Examples
/// ```
/// use ordered_collections::RedBlackMap;
///
/// let mut m = RedBlackMap::new();
/// assert_eq!(m.put("b", "B"), (None, false));
/// assert_eq!(m.put("a", "A"), (None, false));
/// assert_eq!(m.put("b", "BB"), (Some("B"), true));
///
/// assert_eq!(m.get(&"b"), Some(&"BB"));
/// assert_eq!(m.select(0), Some((&"a", &"A")));
/// assert_eq!(m.rank(&"b"), 1);
/// ```
#[derive(Clone)]
pub struct RedBlackMap<K, V, C = Natural> {
    root: OptNode<K, V>,
    cmp: C,
}

impl<K: Debug, V: Debug, C> Debug for RedBlackMap<K, V, C> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match &self.root {
            None => f.write_str("RedBlackMap(EMPTY)"),
            Some(n) => {
                // use Node's Debug formatter
                f.write_fmt(format_args!("RedBlackMap(#{}, {:?})", n.size, n))
            }
        }
    }
}

impl<K, V, C> PartialEq for RedBlackMap<K, V, C>
where
    K: PartialEq,
    V: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.size() == other.size()
            && self.iter().zip(other.iter()).all(|(x, y)| x == y)
    }
}

impl<K: Eq, V: Eq, C> Eq for RedBlackMap<K, V, C> {}

impl<K, V, C> std::ops::Index<&K> for RedBlackMap<K, V, C>
where
    C: Compare<K>,
{
    type Output = V;

    fn index(&self, index: &K) -> &Self::Output {
        match self.get(index) {
            Some(v) => v,
            None => panic!("Key not found in RedBlackMap"),
        }
    }
}

impl<K: Ord, V> RedBlackMap<K, V> {
    /// Creates a new, empty map ordered by the keys' `Ord`.
    ///
    /// # Examples
    /// ```
    /// use ordered_collections::RedBlackMap;
    /// let m: RedBlackMap<usize, usize> = RedBlackMap::new();
    /// assert!(m.is_empty());
    /// ```
    pub fn new() -> Self {
        RedBlackMap {
            root: None,
            cmp: Natural,
        }
    }
}

impl<K, V, C> RedBlackMap<K, V, C> {
    /// Creates a new, empty map ordered by `cmp`.
    ///
    /// # Examples
    /// ```
    /// use ordered_collections::RedBlackMap;
    ///
    /// let mut m = RedBlackMap::with_comparator(|a: &i32, b: &i32| b.cmp(a));
    /// m.extend([(1, 'a'), (3, 'c'), (2, 'b')]);
    /// assert_eq!(m.min(), Some((&3, &'c')));
    /// ```
    pub fn with_comparator(cmp: C) -> Self {
        RedBlackMap { root: None, cmp }
    }

    /// The comparator ordering this map.
    pub fn comparator(&self) -> &C {
        &self.cmp
    }

    /// Returns true if the map holds no entries.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Returns the number of entries in the map.
    pub fn size(&self) -> usize {
        size(&self.root)
    }

    /// Returns the number of entries in the map; same as
    /// [`size`](#method.size).
    pub fn len(&self) -> usize {
        self.size()
    }

    /// Drops all entries from the map.
    pub fn clear(&mut self) {
        self.root = None;
    }

    /// Returns the entry with the least key.
    ///
    /// # Examples
    /// ```
    /// use ordered_collections::RedBlackMap;
    ///
    /// let m = RedBlackMap::from([(2, 0), (1, 0)]);
    /// assert_eq!(m.min(), Some((&1, &0)));
    /// ```
    pub fn min(&self) -> Option<(&K, &V)> {
        let mut n = self.root.as_deref()?;
        while let Some(lf) = n.left.as_deref() {
            n = lf;
        }
        Some((&n.key, &n.val))
    }

    /// Returns the entry with the greatest key.
    ///
    /// # Examples
    /// ```
    /// use ordered_collections::RedBlackMap;
    ///
    /// let m = RedBlackMap::from([(2, 0), (1, 0)]);
    /// assert_eq!(m.max(), Some((&2, &0)));
    /// ```
    pub fn max(&self) -> Option<(&K, &V)> {
        let mut n = self.root.as_deref()?;
        while let Some(rt) = n.right.as_deref() {
            n = rt;
        }
        Some((&n.key, &n.val))
    }

    /// Returns the entry with exactly `rank` smaller keys, or `None` if
    /// `rank >= self.size()`.
    ///
    /// # Examples
    /// ```
    /// use ordered_collections::RedBlackMap;
    ///
    /// let m: RedBlackMap<_, _> = (10..20).map(|k| (k, k * 2)).collect();
    /// assert_eq!(m.select(3), Some((&13, &26)));
    /// assert_eq!(m.select(10), None);
    /// ```
    pub fn select(&self, mut rank: usize) -> Option<(&K, &V)> {
        let mut curr = self.root.as_deref();
        while let Some(n) = curr {
            let lf_size = size(&n.left);
            match rank.cmp(&lf_size) {
                Less => curr = n.left.as_deref(),
                Equal => return Some((&n.key, &n.val)),
                Greater => {
                    rank -= lf_size + 1;
                    curr = n.right.as_deref();
                }
            }
        }

        None
    }

    /// Visits every entry in key order until `visit` returns false.
    ///
    /// # Examples
    /// ```
    /// use ordered_collections::RedBlackMap;
    ///
    /// let m: RedBlackMap<_, _> = (0..10).map(|k| (k, ())).collect();
    /// let mut seen = Vec::new();
    /// m.keys(|k, _| {
    ///     seen.push(*k);
    ///     *k < 3
    /// });
    /// assert_eq!(seen, vec![0, 1, 2, 3]);
    /// ```
    pub fn keys<F>(&self, mut visit: F)
    where
        F: FnMut(&K, &V) -> bool,
    {
        if let Some(n) = self.root.as_ref() {
            n.for_each(&mut visit);
        }
    }

    /// Creates an iterator over the map entries, sorted by key.
    ///
    /// # Examples
    /// ```
    /// use ordered_collections::RedBlackMap;
    ///
    /// let m = RedBlackMap::from([(0, 1), (1, 2), (2, 3)]);
    /// for (i, (k, v)) in m.iter().enumerate() {
    ///     assert_eq!(&i, k);
    ///     assert_eq!(&(i + 1), v);
    /// }
    /// ```
    pub fn iter(&self) -> Iter<'_, K, V> {
        let mut work = Vec::new();
        let mut curr = self.root.as_deref();
        while let Some(n) = curr {
            work.push(n);
            curr = n.left.as_deref();
        }

        Iter {
            work,
            len: self.size(),
        }
    }

    fn blacken_root(&mut self) {
        if let Some(n) = self.root.as_mut() {
            n.red = false;
        }
    }

    // Delete descents need a red link to push down.  If the root is a
    // 2-node, borrow one by coloring the root red; blacken_root undoes it.
    fn take_root_for_delete(&mut self) -> Option<Box<Node<K, V>>> {
        let mut root = self.root.take()?;
        if !is_red(&root.left) && !is_red(&root.right) {
            root.red = true;
        }
        Some(root)
    }
}

impl<K, V, C: Compare<K>> RedBlackMap<K, V, C> {
    /// Inserts or overwrites the value at `key`.
    ///
    /// Returns the previous value, if any, and whether this was an
    /// overwrite.
    ///
    /// # Examples
    /// ```
    /// use ordered_collections::RedBlackMap;
    ///
    /// let mut m = RedBlackMap::new();
    /// assert_eq!(m.put(7, "x"), (None, false));
    /// assert_eq!(m.put(7, "y"), (Some("x"), true));
    /// ```
    pub fn put(&mut self, key: K, val: V) -> (Option<V>, bool) {
        let (root, old_v) = ins(self.root.take(), key, val, &self.cmp);
        self.root = Some(root);
        self.blacken_root();
        let overwrite = old_v.is_some();
        (old_v, overwrite)
    }

    /// Inserts a key-value pair and returns the replaced value, in the
    /// manner of [`std::collections::BTreeMap::insert`].
    pub fn insert(&mut self, key: K, val: V) -> Option<V> {
        self.put(key, val).0
    }

    /// Creates the value at `key` with `create` if it is absent, otherwise
    /// applies `update` to the stored value in place.
    ///
    /// # Examples
    /// ```
    /// use ordered_collections::RedBlackMap;
    ///
    /// let mut counts = RedBlackMap::new();
    /// for w in ["a", "b", "a"] {
    ///     counts.mutate(w, || 1, |n| *n += 1);
    /// }
    /// assert_eq!(counts.get(&"a"), Some(&2));
    /// assert_eq!(counts.get(&"b"), Some(&1));
    /// ```
    pub fn mutate<F, G>(&mut self, key: K, create: F, update: G)
    where
        F: FnOnce() -> V,
        G: FnOnce(&mut V),
    {
        match self.get_mut(&key) {
            Some(v) => update(v),
            None => {
                self.put(key, create());
            }
        }
    }

    /// Returns a reference to the value associated with `key`.
    pub fn get(&self, key: &K) -> Option<&V> {
        let mut curr = self.root.as_deref();
        while let Some(n) = curr {
            match self.cmp.compare(key, &n.key) {
                Less => curr = n.left.as_deref(),
                Equal => return Some(&n.val),
                Greater => curr = n.right.as_deref(),
            }
        }

        None
    }

    /// Returns a mutable reference to the value associated with `key`.
    ///
    /// # Example
    /// ```
    /// use ordered_collections::RedBlackMap;
    ///
    /// let mut m = RedBlackMap::new();
    /// m.put(1, 7);
    ///
    /// *m.get_mut(&1).unwrap() = 2;
    /// assert_eq!(m.get(&1), Some(&2));
    /// ```
    pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        let mut curr = self.root.as_deref_mut();
        while let Some(n) = curr {
            match self.cmp.compare(key, &n.key) {
                Less => curr = n.left.as_deref_mut(),
                Equal => return Some(&mut n.val),
                Greater => curr = n.right.as_deref_mut(),
            }
        }

        None
    }

    /// Tests if the map has an entry for `key`.
    pub fn has(&self, key: &K) -> bool {
        self.get(key).is_some()
    }

    /// Tests if the map has an entry for `key`; same as
    /// [`has`](#method.has).
    pub fn contains(&self, key: &K) -> bool {
        self.has(key)
    }

    /// Returns the entry with the greatest key less than or equal to `key`.
    ///
    /// # Examples
    /// ```
    /// use ordered_collections::RedBlackMap;
    ///
    /// let m = RedBlackMap::from([(10, 'a'), (20, 'b')]);
    /// assert_eq!(m.floor(&15), Some((&10, &'a')));
    /// assert_eq!(m.floor(&20), Some((&20, &'b')));
    /// assert_eq!(m.floor(&5), None);
    /// ```
    pub fn floor(&self, key: &K) -> Option<(&K, &V)> {
        let mut best = None;
        let mut curr = self.root.as_deref();
        while let Some(n) = curr {
            match self.cmp.compare(key, &n.key) {
                Less => curr = n.left.as_deref(),
                Equal => return Some((&n.key, &n.val)),
                Greater => {
                    best = Some((&n.key, &n.val));
                    curr = n.right.as_deref();
                }
            }
        }

        best
    }

    /// Returns the entry with the least key greater than or equal to `key`.
    ///
    /// # Examples
    /// ```
    /// use ordered_collections::RedBlackMap;
    ///
    /// let m = RedBlackMap::from([(10, 'a'), (20, 'b')]);
    /// assert_eq!(m.ceiling(&15), Some((&20, &'b')));
    /// assert_eq!(m.ceiling(&25), None);
    /// ```
    pub fn ceiling(&self, key: &K) -> Option<(&K, &V)> {
        let mut best = None;
        let mut curr = self.root.as_deref();
        while let Some(n) = curr {
            match self.cmp.compare(key, &n.key) {
                Less => {
                    best = Some((&n.key, &n.val));
                    curr = n.left.as_deref();
                }
                Equal => return Some((&n.key, &n.val)),
                Greater => curr = n.right.as_deref(),
            }
        }

        best
    }

    /// Returns the number of keys strictly less than `key`.
    ///
    /// For every `r < self.size()`, `rank(select(r).0) == r`.
    pub fn rank(&self, key: &K) -> usize {
        let mut rank = 0;
        let mut curr = self.root.as_deref();
        while let Some(n) = curr {
            match self.cmp.compare(key, &n.key) {
                Less => curr = n.left.as_deref(),
                Equal => return rank + size(&n.left),
                Greater => {
                    rank += size(&n.left) + 1;
                    curr = n.right.as_deref();
                }
            }
        }

        rank
    }

    /// Visits the entries with keys in `[lo, hi]`, in key order, until
    /// `visit` returns false.
    ///
    /// Subtrees entirely outside the range are never entered.
    ///
    /// # Examples
    /// ```
    /// use ordered_collections::RedBlackMap;
    ///
    /// let m: RedBlackMap<_, _> = (0..100).map(|k| (k, k * k)).collect();
    /// let mut sum = 0;
    /// m.ranged_keys(&3, &5, |_, v| {
    ///     sum += v;
    ///     true
    /// });
    /// assert_eq!(sum, 9 + 16 + 25);
    /// ```
    pub fn ranged_keys<F>(&self, lo: &K, hi: &K, mut visit: F)
    where
        F: FnMut(&K, &V) -> bool,
    {
        visit_range(&self.root, lo, hi, &self.cmp, &mut visit);
    }

    /// Removes and returns the entry with the least key.
    ///
    /// # Examples
    /// ```
    /// use ordered_collections::RedBlackMap;
    ///
    /// let mut m = RedBlackMap::from([(1, 'a'), (2, 'b')]);
    /// assert_eq!(m.delete_min(), Some((1, 'a')));
    /// assert_eq!(m.delete_min(), Some((2, 'b')));
    /// assert_eq!(m.delete_min(), None);
    /// ```
    pub fn delete_min(&mut self) -> Option<(K, V)> {
        let root = self.take_root_for_delete()?;
        let (root, kv) = rm_min(root);
        self.root = root;
        self.blacken_root();
        Some(kv)
    }

    /// Removes and returns the entry with the greatest key.
    pub fn delete_max(&mut self) -> Option<(K, V)> {
        let root = self.take_root_for_delete()?;
        let (root, kv) = rm_max(root);
        self.root = root;
        self.blacken_root();
        Some(kv)
    }

    /// Removes `key` from the map and returns its value, if it was present.
    ///
    /// # Examples
    /// ```
    /// use ordered_collections::RedBlackMap;
    ///
    /// let mut m = RedBlackMap::new();
    /// m.put(1, 2);
    /// m.put(2, 3);
    /// assert_eq!(m.delete(&2), Some(3));
    /// assert_eq!(m.delete(&2), None);
    /// assert_eq!(m.size(), 1);
    /// ```
    pub fn delete(&mut self, key: &K) -> Option<V> {
        if !self.has(key) {
            return None;
        }

        let root = self.take_root_for_delete()?;
        let (root, old_v) = rm(root, key, &self.cmp);
        self.root = root;
        self.blacken_root();
        old_v
    }

    /// Removes `key` from the map; same as [`delete`](#method.delete).
    pub fn remove(&mut self, key: &K) -> Option<V> {
        self.delete(key)
    }
}

impl<K, V, C: Default> Default for RedBlackMap<K, V, C> {
    fn default() -> Self {
        Self::with_comparator(C::default())
    }
}

impl<K, V, C: Compare<K>> Extend<(K, V)> for RedBlackMap<K, V, C> {
    fn extend<T: IntoIterator<Item = (K, V)>>(&mut self, iter: T) {
        for (k, v) in iter {
            self.put(k, v);
        }
    }
}

impl<K: Ord, V, const N: usize> From<[(K, V); N]> for RedBlackMap<K, V> {
    fn from(vs: [(K, V); N]) -> Self {
        RedBlackMap::from_iter(vs)
    }
}

impl<K, V, C> FromIterator<(K, V)> for RedBlackMap<K, V, C>
where
    C: Compare<K> + Default,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut m = RedBlackMap::default();
        m.extend(iter);
        m
    }
}

impl<'a, K, V, C> IntoIterator for &'a RedBlackMap<K, V, C> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// In-order iterator over the entries of a [`RedBlackMap`].
pub struct Iter<'a, K, V> {
    work: Vec<&'a Node<K, V>>,
    len: usize,
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        self.work.pop().map(|n| {
            self.len -= 1;
            let entry = (&n.key, &n.val);
            let mut curr = n.right.as_deref();
            while let Some(m) = curr {
                self.work.push(m);
                curr = m.left.as_deref();
            }
            entry
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<'a, K, V> ExactSizeIterator for Iter<'a, K, V> {
    fn len(&self) -> usize {
        self.len
    }
}

impl<'a, K, V> FusedIterator for Iter<'a, K, V> {}
