//! Ordering policies for the sorted containers.
//!
//! Every container in this crate takes its ordering from a [`Compare`]
//! value rather than hard-coding `Ord`.  The default, [`Natural`], simply
//! defers to `Ord`, so most users never name a comparator at all.

use std::cmp::Ordering;

/// A total order over `T`, supplied by the caller.
///
/// Implementations must be antisymmetric, transitive and consistent across
/// calls.  Two values that compare `Equal` are treated as the same key.  A
/// comparator that breaks these rules does not cause memory unsafety, but
/// the containers may lose entries or report wrong answers.
pub trait Compare<T: ?Sized> {
    /// Compares `a` with `b`.
    fn compare(&self, a: &T, b: &T) -> Ordering;
}

/// Orders values by their `Ord` implementation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Natural;

impl<T: Ord + ?Sized> Compare<T> for Natural {
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        a.cmp(b)
    }
}

/// Inverts another comparator.
///
/// [`Heap`](crate::Heap) is a max-heap with respect to its comparator, so
/// `Heap<K, Reversed<Natural>>` pops the smallest element first.
///
/// # Examples
/// ```
/// use ordered_collections::{Heap, Natural, Reversed};
///
/// let mut h = Heap::with_comparator([5, 3, 8, 1], Reversed(Natural));
/// assert_eq!(h.pop(), 1);
/// assert_eq!(h.pop(), 3);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Reversed<C>(pub C);

impl<T: ?Sized, C: Compare<T>> Compare<T> for Reversed<C> {
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self.0.compare(b, a)
    }
}

/// Approximate comparison of floating point keys.
///
/// Values whose difference is at most `epsilon` compare `Equal`; everything
/// else is ordered by `total_cmp`.
///
/// This is an opt-in policy and it is *not* a strict total order: equality
/// is not transitive, so two distinct keys within `epsilon` of each other
/// are indistinguishable, and putting the second silently overwrites the
/// first.
///
/// # Examples
/// ```
/// use ordered_collections::{Epsilon, RedBlackMap};
///
/// let mut m = RedBlackMap::with_comparator(Epsilon::new(1e-6));
/// m.put(1.0_f64, "a");
/// let (old, overwrite) = m.put(1.0 + 1e-9, "b");
/// assert_eq!((old, overwrite), (Some("a"), true));
/// assert_eq!(m.size(), 1);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Epsilon {
    epsilon: f64,
}

impl Epsilon {
    /// Creates a policy treating values within `epsilon` of each other as
    /// equal.
    pub fn new(epsilon: f64) -> Self {
        Epsilon {
            epsilon: epsilon.abs(),
        }
    }

    /// The tolerance of this policy.
    pub fn epsilon(&self) -> f64 {
        self.epsilon
    }
}

impl Compare<f64> for Epsilon {
    fn compare(&self, a: &f64, b: &f64) -> Ordering {
        if (a - b).abs() <= self.epsilon {
            Ordering::Equal
        } else {
            a.total_cmp(b)
        }
    }
}

impl Compare<f32> for Epsilon {
    fn compare(&self, a: &f32, b: &f32) -> Ordering {
        if f64::from(a - b).abs() <= self.epsilon {
            Ordering::Equal
        } else {
            a.total_cmp(b)
        }
    }
}

impl<T: ?Sized, F> Compare<T> for F
where
    F: Fn(&T, &T) -> Ordering,
{
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self(a, b)
    }
}
