//! Fixed-capacity circular buffer backing the command history.

use std::iter::FusedIterator;

/// A fixed-capacity circular buffer with O(1) push.
///
/// Once full, each push evicts the oldest element. Logical index 0 is always
/// the oldest element still held.
#[derive(Clone)]
pub struct RingBuffer<T> {
    slots: Vec<Option<T>>,
    head: usize,
    len: usize,
}

impl<T> RingBuffer<T> {
    /// Creates an empty buffer holding at most `capacity` elements.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is zero.
    pub fn new(capacity: usize) -> Self {
        assert!(capacity > 0, "RingBuffer capacity must be greater than 0");
        Self {
            slots: (0..capacity).map(|_| None).collect(),
            head: 0,
            len: 0,
        }
    }

    /// Appends an element, returning the evicted oldest element when full.
    pub fn push(&mut self, item: T) -> Option<T> {
        let capacity = self.capacity();
        let tail = (self.head + self.len) % capacity;
        let evicted = self.slots[tail].replace(item);

        if self.len == capacity {
            self.head = (self.head + 1) % capacity;
        } else {
            self.len += 1;
        }
        evicted
    }

    /// Element at logical `index` (0 = oldest).
    #[inline]
    pub fn get(&self, index: usize) -> Option<&T> {
        if index >= self.len {
            return None;
        }
        self.slots[(self.head + index) % self.capacity()].as_ref()
    }

    /// Most recently pushed element.
    #[inline]
    pub fn last(&self) -> Option<&T> {
        self.len.checked_sub(1).and_then(|i| self.get(i))
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    pub fn clear(&mut self) {
        self.slots.iter_mut().for_each(|slot| *slot = None);
        self.head = 0;
        self.len = 0;
    }

    /// Iterates from oldest to newest.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            buffer: self,
            front: 0,
            back: self.len,
        }
    }

    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }
}

impl<T> Extend<T> for RingBuffer<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.push(item);
        }
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for RingBuffer<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// Borrowing iterator over a [`RingBuffer`], oldest first.
pub struct Iter<'a, T> {
    buffer: &'a RingBuffer<T>,
    front: usize,
    back: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }
        let item = self.buffer.get(self.front);
        self.front += 1;
        item
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back - self.front;
        (remaining, Some(remaining))
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }
        self.back -= 1;
        self.buffer.get(self.back)
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}
impl<T> FusedIterator for Iter<'_, T> {}

impl<'a, T> IntoIterator for &'a RingBuffer<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_until_full() {
        let mut buf = RingBuffer::new(3);
        assert!(buf.is_empty());
        assert_eq!(buf.push(1), None);
        assert_eq!(buf.push(2), None);
        assert_eq!(buf.push(3), None);
        assert_eq!(buf.len(), 3);
        assert_eq!(buf.to_vec(), vec![1, 2, 3]);
    }

    #[test]
    fn test_push_evicts_oldest() {
        let mut buf = RingBuffer::new(3);
        buf.extend([1, 2, 3]);
        assert_eq!(buf.push(4), Some(1));
        assert_eq!(buf.push(5), Some(2));
        assert_eq!(buf.to_vec(), vec![3, 4, 5]);
        assert_eq!(buf.get(0), Some(&3));
        assert_eq!(buf.last(), Some(&5));
        assert_eq!(buf.len(), 3);
    }

    #[test]
    fn test_get_out_of_range() {
        let mut buf = RingBuffer::new(2);
        buf.push("a");
        assert_eq!(buf.get(1), None);
        assert_eq!(RingBuffer::<u8>::new(1).last(), None);
    }

    #[test]
    fn test_clear_then_reuse() {
        let mut buf = RingBuffer::new(2);
        buf.extend([1, 2, 3]);
        buf.clear();
        assert!(buf.is_empty());
        assert_eq!(buf.last(), None);
        buf.push(9);
        assert_eq!(buf.to_vec(), vec![9]);
    }

    #[test]
    fn test_iter_both_ends() {
        let mut buf = RingBuffer::new(4);
        buf.extend(1..=6);
        let forward: Vec<_> = buf.iter().copied().collect();
        let backward: Vec<_> = buf.iter().rev().copied().collect();
        assert_eq!(forward, vec![3, 4, 5, 6]);
        assert_eq!(backward, vec![6, 5, 4, 3]);
        assert_eq!(buf.iter().len(), 4);
    }

    #[test]
    #[should_panic(expected = "capacity must be greater than 0")]
    fn test_zero_capacity_panics() {
        let _ = RingBuffer::<u8>::new(0);
    }
}
