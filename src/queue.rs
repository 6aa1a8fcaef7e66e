//! [`Queue`], a FIFO ring buffer, and its iterators.

use std::fmt;
use std::fmt::{Debug, Formatter};
use std::iter::FusedIterator;

const MIN_CAPACITY: usize = 16;

/// A FIFO queue stored in a growable ring buffer.
///
/// The buffer doubles when a push finds it full and halves once it is at
/// most a quarter occupied, but it never shrinks below the capacity the
/// queue was created with (at least 16).
///
/// # Examples
/// ```
/// use ordered_collections::Queue;
///
/// let mut q = Queue::new();
/// q.push('a');
/// q.push('b');
/// assert_eq!(*q.peek(), 'a');
/// assert_eq!(*q.get(1), 'b');
/// assert_eq!(q.pop(), 'a');
/// assert_eq!(q.len(), 1);
/// ```
#[derive(Clone)]
pub struct Queue<T> {
    buf: Vec<Option<T>>,
    head: usize,
    tail: usize,
    count: usize,
    minlen: usize,
}

fn empty_buf<T>(capacity: usize) -> Vec<Option<T>> {
    std::iter::repeat_with(|| None).take(capacity).collect()
}

impl<T> Queue<T> {
    /// Creates an empty queue with the default capacity of 16.
    pub fn new() -> Self {
        Self::with_capacity(MIN_CAPACITY)
    }

    /// Creates an empty queue with room for `capacity` elements.
    ///
    /// Capacities below 16 are rounded up to 16.  The queue never shrinks
    /// below its starting capacity.
    ///
    /// # Examples
    /// ```
    /// use ordered_collections::Queue;
    ///
    /// let q: Queue<u8> = Queue::with_capacity(3);
    /// assert_eq!(q.capacity(), 16);
    /// ```
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(MIN_CAPACITY);
        Queue {
            buf: empty_buf(capacity),
            head: 0,
            tail: 0,
            count: 0,
            minlen: capacity,
        }
    }

    /// Returns the number of elements in the queue.
    pub fn len(&self) -> usize {
        self.count
    }

    /// Returns true if the queue holds no elements.
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Returns the number of slots in the ring buffer.
    pub fn capacity(&self) -> usize {
        self.buf.len()
    }

    /// Drops every element and returns the buffer to its starting capacity.
    pub fn clear(&mut self) {
        self.buf = empty_buf(self.minlen);
        self.head = 0;
        self.tail = 0;
        self.count = 0;
    }

    // Moves the elements into a new buffer of twice their number, starting
    // at slot 0.
    fn resize(&mut self) {
        let new_cap = (self.count * 2).max(self.minlen);
        log::trace!(
            "queue: resize {} -> {} slots ({} elements)",
            self.buf.len(),
            new_cap,
            self.count
        );

        let mut buf = empty_buf(new_cap);
        let old_cap = self.buf.len();
        for (i, slot) in buf.iter_mut().take(self.count).enumerate() {
            *slot = self.buf[(self.head + i) % old_cap].take();
        }

        self.buf = buf;
        self.head = 0;
        self.tail = self.count;
    }

    /// Appends `v` to the back of the queue.
    ///
    /// # Examples
    /// ```
    /// use ordered_collections::Queue;
    ///
    /// let mut q: Queue<_> = (0..16).collect();
    /// assert_eq!(q.capacity(), 16);
    /// q.push(16);
    /// assert_eq!(q.capacity(), 32);
    /// assert!(q.iter().copied().eq(0..17));
    /// ```
    pub fn push(&mut self, v: T) {
        if self.count == self.buf.len() {
            self.resize();
        }

        self.buf[self.tail] = Some(v);
        self.tail = (self.tail + 1) % self.buf.len();
        self.count += 1;
    }

    /// Removes and returns the front element.
    ///
    /// # Panics
    /// Panics if the queue is empty.
    pub fn pop(&mut self) -> T {
        match self.try_pop() {
            Some(v) => v,
            None => panic!("queue: empty queue"),
        }
    }

    /// Removes and returns the front element, or `None` if the queue is
    /// empty.
    pub fn try_pop(&mut self) -> Option<T> {
        if self.count == 0 {
            return None;
        }

        let v = self.buf[self.head].take();
        self.head = (self.head + 1) % self.buf.len();
        self.count -= 1;

        if self.buf.len() > self.minlen && self.count * 4 <= self.buf.len() {
            self.resize();
        }

        v
    }

    /// Returns the front element without removing it.
    ///
    /// # Panics
    /// Panics if the queue is empty.
    pub fn peek(&self) -> &T {
        match self.try_peek() {
            Some(v) => v,
            None => panic!("queue: empty queue"),
        }
    }

    /// Returns the front element, or `None` if the queue is empty.
    pub fn try_peek(&self) -> Option<&T> {
        self.try_get(0)
    }

    /// Returns the element `i` places behind the front of the queue.
    ///
    /// # Panics
    /// Panics if `i >= self.len()`.
    pub fn get(&self, i: usize) -> &T {
        match self.try_get(i) {
            Some(v) => v,
            None => panic!("queue: index out of range"),
        }
    }

    /// Returns the element `i` places behind the front, or `None` if `i` is
    /// out of range.
    pub fn try_get(&self, i: usize) -> Option<&T> {
        if i >= self.count {
            return None;
        }

        self.buf[(self.head + i) % self.buf.len()].as_ref()
    }

    /// Iterates from the front of the queue to the back.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter { q: self, next: 0 }
    }
}

impl<T: Debug> Debug for Queue<T> {
    /// Prints the `Queue` front to back.
    ///
    /// # Examples
    /// ```
    /// use ordered_collections::Queue;
    ///
    /// let q: Queue<_> = (0..3).collect();
    /// assert_eq!(format!("{:?}", q),
    ///     "Queue { len: 3, elems: HEAD[0, 1, 2]TAIL }");
    /// ```
    fn fmt(&self, fmt: &mut Formatter<'_>) -> Result<(), fmt::Error> {
        fmt.write_fmt(format_args!("Queue {{ len: {}, elems: HEAD", self.count))?;
        fmt.debug_list().entries(self.iter()).finish()?;
        fmt.write_str("TAIL }")
    }
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Queue::new()
    }
}

impl<T: PartialEq> PartialEq for Queue<T> {
    fn eq(&self, rhs: &Self) -> bool {
        self.count == rhs.count && self.iter().zip(rhs.iter()).all(|(a, b)| a == b)
    }
}

impl<T: Eq> Eq for Queue<T> {}

impl<T> Extend<T> for Queue<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for v in iter {
            self.push(v);
        }
    }
}

impl<T> FromIterator<T> for Queue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut q = Queue::new();
        q.extend(iter);
        q
    }
}

/// Front-to-back iterator over a borrowed [`Queue`].
pub struct Iter<'a, T> {
    q: &'a Queue<T>,
    next: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let v = self.q.try_get(self.next)?;
        self.next += 1;
        Some(v)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let rest = self.q.len() - self.next;
        (rest, Some(rest))
    }
}

impl<'a, T> ExactSizeIterator for Iter<'a, T> {}

impl<'a, T> FusedIterator for Iter<'a, T> {}

impl<'a, T> IntoIterator for &'a Queue<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Owning front-to-back iterator over a [`Queue`].
pub struct IntoIter<T> {
    q: Queue<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.q.try_pop()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.q.len(), Some(self.q.len()))
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> IntoIterator for Queue<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter { q: self }
    }
}
