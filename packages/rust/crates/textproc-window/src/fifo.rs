//! Trailing window: bounded FIFO of the most recent items.

use std::collections::VecDeque;

/// Bounded trailing window. Appending past capacity evicts the oldest items
/// and returns them from [`FifoBuffer::filter`].
///
/// A capacity of zero disables buffering entirely: every input is passed
/// straight through.
#[derive(Debug, Clone)]
pub struct FifoBuffer<T> {
    ring: VecDeque<T>,
    capacity: usize,
}

impl<T> Default for FifoBuffer<T> {
    fn default() -> Self {
        Self::with_capacity(0)
    }
}

impl<T> FifoBuffer<T> {
    /// Create a window holding up to `|size|` items. The sign is ignored.
    #[must_use]
    pub fn new(size: isize) -> Self {
        Self::with_capacity(size.unsigned_abs())
    }

    /// Create a window holding up to `capacity` items.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            ring: VecDeque::with_capacity(capacity.min(4096)),
            capacity,
        }
    }

    /// Append `data` and return whatever no longer fits, oldest first.
    ///
    /// With zero capacity the input is returned as-is and the window is left untouched.
    pub fn filter<I>(&mut self, data: I) -> Vec<T>
    where
        I: IntoIterator<Item = T>,
    {
        if self.capacity == 0 {
            return data.into_iter().collect();
        }

        self.ring.extend(data);
        if self.ring.len() <= self.capacity {
            return Vec::new();
        }

        let overflow = self.ring.len() - self.capacity;
        self.ring.drain(..overflow).collect()
    }

    /// Maximum number of items retained.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of items currently held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.ring.len()
    }

    /// True when nothing is buffered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ring.is_empty()
    }

    /// Borrowing view over the window, oldest to newest.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &T> {
        self.ring.iter().take(self.capacity)
    }

    /// Consume the window and return its contents, oldest to newest.
    #[must_use]
    pub fn into_inner(self) -> Vec<T> {
        let mut ring = self.ring;
        ring.truncate(self.capacity);
        ring.into()
    }
}

impl<T: Clone> FifoBuffer<T> {
    /// Snapshot of the window, oldest to newest.
    #[must_use]
    pub fn get_buffer(&self) -> Vec<T> {
        self.iter().cloned().collect()
    }
}
