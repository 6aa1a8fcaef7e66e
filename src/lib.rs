//! # Ordered and priority collections
//!
//! `ordered_collections` provides three generic containers:
//!
//! * [`RedBlackMap`] and [`RedBlackSet`], sorted collections backed by a
//!   left-leaning red-black tree with subtree sizes, so besides lookups they
//!   answer order-statistics queries ([`select`](RedBlackMap::select),
//!   [`rank`](RedBlackMap::rank)) and range walks in O(log n).
//! * [`Heap`], an array-backed binary max-heap.
//! * [`Queue`], a FIFO ring buffer that grows and shrinks with its contents.
//!
//! The sorted containers and the heap take their ordering from a
//! [`Compare`] policy, which defaults to the element type's `Ord`.
//!
//! None of the containers do any locking.  Share them between threads
//! behind your own mutex.

mod compare;
pub use compare::{Compare, Epsilon, Natural, Reversed};

mod error;
pub use error::InvariantError;

pub mod rbbst;
pub use rbbst::{Color, Edge, RedBlackMap, RedBlackSet, Side};

mod heap;
pub use heap::Heap;

pub mod queue;
pub use queue::Queue;
