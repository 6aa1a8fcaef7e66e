use crate::compare::{Compare, Natural};
use std::cmp::Ordering::*;
use std::fmt;
use std::fmt::{Debug, Formatter};

/// A priority queue that hands back its elements greatest first.
///
/// "Greatest" is decided by the comparator `C`, which defaults to
/// [`Natural`].  Wrap a comparator in [`Reversed`](crate::Reversed) to get a
/// min-heap.
///
/// The elements live in one `Vec` laid out as an implicit binary tree: with
/// 1-based positions, the parent of `k` is `k / 2` and its children are
/// `2 * k` and `2 * k + 1`.
///
/// # Examples
/// ```
/// use ordered_collections::Heap;
///
/// let mut h = Heap::new([3, 1, 4, 1, 5]);
/// h.push(9);
/// assert_eq!(h.len(), 6);
/// assert_eq!(*h.peek(), 9);
/// assert_eq!(h.pop(), 9);
/// assert_eq!(h.pop(), 5);
/// ```
#[derive(Clone)]
pub struct Heap<K, C = Natural> {
    pq: Vec<K>,
    cmp: C,
}

impl<K: Ord> Heap<K> {
    /// Creates a max-heap holding the elements of `initial`.
    ///
    /// The elements are loaded in bulk and ordered with a single
    /// [`fix`](#method.fix), which is O(n).
    pub fn new<I: IntoIterator<Item = K>>(initial: I) -> Self {
        Self::with_comparator(initial, Natural)
    }
}

impl<K, C> Heap<K, C> {
    /// Returns the number of elements in the heap.
    pub fn len(&self) -> usize {
        self.pq.len()
    }

    /// Returns true if the heap holds no elements.
    pub fn is_empty(&self) -> bool {
        self.pq.is_empty()
    }

    /// Drops every element of the heap.
    pub fn clear(&mut self) {
        self.pq.clear();
    }

    /// Returns the greatest element.
    ///
    /// # Panics
    /// Panics if the heap is empty.
    pub fn peek(&self) -> &K {
        match self.try_peek() {
            Some(k) => k,
            None => panic!("heap: empty heap"),
        }
    }

    /// Returns the greatest element, or `None` if the heap is empty.
    pub fn try_peek(&self) -> Option<&K> {
        self.pq.first()
    }

    /// Iterates over the elements in their internal (unsorted) order.
    pub fn iter(&self) -> std::slice::Iter<'_, K> {
        self.pq.iter()
    }

    /// Iterates mutably over the elements in their internal order.
    ///
    /// Changing an element's priority through this iterator breaks the
    /// heap order until [`fix`](#method.fix) is called.
    ///
    /// # Examples
    /// ```
    /// use ordered_collections::Heap;
    ///
    /// let mut h = Heap::new([1, 2, 3]);
    /// for k in h.iter_mut() {
    ///     *k = 10 - *k;
    /// }
    /// h.fix();
    /// assert_eq!(h.pop(), 9);
    /// ```
    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, K> {
        self.pq.iter_mut()
    }

    /// Consumes the heap and returns its elements in their internal order.
    pub fn into_vec(self) -> Vec<K> {
        self.pq
    }
}

impl<K, C: Compare<K>> Heap<K, C> {
    /// Creates a heap holding the elements of `initial`, ordered by `cmp`.
    pub fn with_comparator<I: IntoIterator<Item = K>>(initial: I, cmp: C) -> Self {
        let mut h = Heap {
            pq: initial.into_iter().collect(),
            cmp,
        };
        h.fix();
        h
    }

    // i and j are 1-based positions
    fn less(&self, i: usize, j: usize) -> bool {
        self.cmp.compare(&self.pq[i - 1], &self.pq[j - 1]) == Less
    }

    fn swap(&mut self, i: usize, j: usize) {
        self.pq.swap(i - 1, j - 1);
    }

    fn swim(&mut self, mut k: usize) {
        while k > 1 && self.less(k / 2, k) {
            self.swap(k / 2, k);
            k /= 2;
        }
    }

    fn sink(&mut self, mut k: usize) {
        let n = self.pq.len();
        while 2 * k <= n {
            let mut j = 2 * k;
            if j < n && self.less(j, j + 1) {
                j += 1;
            }

            if !self.less(k, j) {
                break;
            }

            self.swap(k, j);
            k = j;
        }
    }

    /// Re-establishes the heap order in O(n).
    ///
    /// Use this after changing priorities through
    /// [`iter_mut`](#method.iter_mut); it is cheaper than popping every
    /// element and pushing it back.
    pub fn fix(&mut self) {
        log::trace!("heap: fix over {} elements", self.pq.len());
        for k in (1..=self.pq.len() / 2).rev() {
            self.sink(k);
        }
    }

    /// Adds `k` to the heap in O(log n).
    pub fn push(&mut self, k: K) {
        self.pq.push(k);
        self.swim(self.pq.len());
    }

    /// Removes and returns the greatest element in O(log n).
    ///
    /// # Panics
    /// Panics if the heap is empty.
    pub fn pop(&mut self) -> K {
        match self.try_pop() {
            Some(k) => k,
            None => panic!("heap: empty heap"),
        }
    }

    /// Removes and returns the greatest element, or `None` if the heap is
    /// empty.
    pub fn try_pop(&mut self) -> Option<K> {
        self.take_at(1)
    }

    // Removes the element at 1-based position i by moving the last element
    // into its slot.  The moved element may belong above or below the slot.
    fn take_at(&mut self, i: usize) -> Option<K> {
        let last = self.pq.len();
        if i == 0 || i > last {
            return None;
        }

        self.swap(i, last);
        let k = self.pq.pop();
        if i < last {
            self.sink(i);
            self.swim(i);
        }
        k
    }

    /// Removes one element comparing equal to `k`, if there is one, and
    /// reports whether it found one.
    ///
    /// This is a linear scan, O(n).
    ///
    /// # Examples
    /// ```
    /// use ordered_collections::Heap;
    ///
    /// let mut h = Heap::new([5, 7, 1]);
    /// assert!(h.remove(&5));
    /// assert!(!h.remove(&5));
    /// assert!(!h.remove(&8));
    /// assert_eq!(h.into_vec().len(), 2);
    /// ```
    pub fn remove(&mut self, k: &K) -> bool {
        let Some(top) = self.pq.first() else {
            return false;
        };

        // nothing in the heap outranks the top, so a greater k is absent
        if self.cmp.compare(top, k) == Less {
            return false;
        }

        let found = self.pq.iter().position(|x| self.cmp.compare(x, k) == Equal);
        match found {
            Some(i) => self.take_at(i + 1).is_some(),
            None => false,
        }
    }
}

impl<K: Debug, C> Debug for Heap<K, C> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.pq.iter()).finish()
    }
}

impl<K, C: Default> Default for Heap<K, C> {
    fn default() -> Self {
        Heap {
            pq: Vec::new(),
            cmp: C::default(),
        }
    }
}

impl<K, C: Compare<K>> Extend<K> for Heap<K, C> {
    fn extend<I: IntoIterator<Item = K>>(&mut self, iter: I) {
        for k in iter {
            self.push(k);
        }
    }
}

impl<K, C: Compare<K> + Default> FromIterator<K> for Heap<K, C> {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        Self::with_comparator(iter, C::default())
    }
}

impl<'a, K, C> IntoIterator for &'a Heap<K, C> {
    type Item = &'a K;
    type IntoIter = std::slice::Iter<'a, K>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod test {
    extern crate quickcheck;
    use super::*;
    use crate::compare::Reversed;
    use quickcheck::quickcheck;
    use std::collections::BinaryHeap;

    fn chk<K, C: Compare<K>>(h: &Heap<K, C>) {
        for k in 2..=h.len() {
            assert!(!h.less(k / 2, k), "heap order broken at {k}");
        }
    }

    fn heap_test(vs: Vec<(u8, i16)>) {
        let mut h = Heap::new(vec![]);
        let mut other = BinaryHeap::new();

        for (op, v) in vs {
            match op % 3 {
                0 | 1 => {
                    h.push(v);
                    other.push(v);
                }

                _ => {
                    assert_eq!(h.try_pop(), other.pop());
                }
            }

            chk(&h);
            assert_eq!(h.len(), other.len());
            assert_eq!(h.try_peek(), other.peek());
        }
    }

    fn remove_test(vs: Vec<u8>, gone: Vec<u8>) {
        let mut h = Heap::new(vs.clone());
        let mut rest = vs;
        chk(&h);

        for g in gone {
            let pos = rest.iter().position(|&x| x == g);
            assert_eq!(h.remove(&g), pos.is_some());
            if let Some(p) = pos {
                rest.swap_remove(p);
            }
            chk(&h);
        }

        rest.sort_unstable_by(|a, b| b.cmp(a));
        let mut drained = vec![];
        while let Some(x) = h.try_pop() {
            drained.push(x);
        }
        assert_eq!(drained, rest);
    }

    #[test]
    fn pushes_pop_greatest_first() {
        let mut h: Heap<_> = Heap::default();
        for k in [5, 3, 8, 1] {
            h.push(k);
            chk(&h);
        }
        assert_eq!(*h.peek(), 8);
        assert_eq!([h.pop(), h.pop(), h.pop(), h.pop()], [8, 5, 3, 1]);
        assert!(h.is_empty());
    }

    #[test]
    fn bulk_load_pops_in_order() {
        let mut h = Heap::new([2, 9, 4, 7, 1, 8]);
        chk(&h);
        let popped: Vec<_> = std::iter::from_fn(|| h.try_pop()).collect();
        assert_eq!(popped, vec![9, 8, 7, 4, 2, 1]);
    }

    #[test]
    fn min_heap_via_reversed() {
        let mut h: Heap<_, Reversed<Natural>> = (0..10).rev().collect();
        chk(&h);
        assert_eq!(*h.peek(), 0);
        h.push(-1);
        assert_eq!(h.pop(), -1);
        assert_eq!(h.pop(), 0);
    }

    #[test]
    #[should_panic(expected = "heap: empty heap")]
    fn pop_empty_panics() {
        let mut h: Heap<i32> = Heap::default();
        h.pop();
    }

    #[test]
    fn remove_moved_element_swims_up() {
        // Removing 1 moves the last element (7) under 2, so it has to swim.
        let mut h = Heap::new([10, 2, 9, 1, 0, 8, 7]);
        assert_eq!(h.clone().into_vec(), vec![10, 2, 9, 1, 0, 8, 7]);
        assert!(h.remove(&1));
        chk(&h);
        assert_eq!(h.clone().into_vec(), vec![10, 7, 9, 2, 0, 8]);
        assert!(h.remove(&0));
        chk(&h);
        assert_eq!(h.len(), 5);
    }

    #[test]
    fn fix_after_iter_mut() {
        let mut h = Heap::new(0..20);
        for k in h.iter_mut() {
            *k = (*k * 7) % 20;
        }
        h.fix();
        chk(&h);
        assert_eq!(h.pop(), 19);
    }

    quickcheck! {
        fn qc_heap_test(vs: Vec<(u8, i16)>) -> () {
            heap_test(vs);
        }

        fn qc_remove_test(vs: Vec<u8>, gone: Vec<u8>) -> () {
            remove_test(vs, gone);
        }
    }
}
