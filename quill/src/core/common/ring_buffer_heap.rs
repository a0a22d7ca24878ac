// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! A fixed-size ring buffer implementation using heap allocation. Storage is allocated
//! lazily, one slot per added item, up to `N` slots.

use std::fmt::Debug;

use super::RingBuffer;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RingBufferHeap<T, const N: usize> {
    internal_storage: Vec<Option<T>>,
    head: usize,
    tail: usize,
    count: usize,
}

impl<T, const N: usize> Default for RingBufferHeap<T, N> {
    fn default() -> Self { Self::new() }
}

impl<T, const N: usize> RingBufferHeap<T, N> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            internal_storage: Vec::new(),
            head: 0,
            tail: 0,
            count: 0,
        }
    }

    fn storage_index(&self, index: usize) -> Option<usize> {
        (index < self.count).then(|| (self.tail + index) % N)
    }
}

impl<T, const N: usize> RingBuffer<T, N> for RingBufferHeap<T, N> {
    fn clear(&mut self) {
        self.head = 0;
        self.tail = 0;
        self.count = 0;
        self.internal_storage.clear();
    }

    fn get(&self, index: usize) -> Option<&T> {
        let actual_index = self.storage_index(index)?;
        self.internal_storage
            .get(actual_index)
            .and_then(|item| item.as_ref())
    }

    fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        let actual_index = self.storage_index(index)?;
        self.internal_storage
            .get_mut(actual_index)
            .and_then(|item| item.as_mut())
    }

    fn len(&self) -> usize { self.count }

    /// Insert at head (ie, insert the newest item).
    fn add(&mut self, value: T) {
        if N == 0 {
            return;
        }
        if self.count == N {
            let _unused: Option<_> = self.remove();
        }
        // Slots before `head` may have been vacated by `remove_head`, so reuse them
        // before growing the storage.
        match self.internal_storage.get_mut(self.head) {
            Some(slot) => *slot = Some(value),
            None => self.internal_storage.push(Some(value)),
        }
        self.head = (self.head + 1) % N;
        self.count = std::cmp::min(self.count + 1, N);
    }

    /// Remove from tail (ie, remove the oldest item).
    fn remove(&mut self) -> Option<T> {
        if self.count == 0 || self.internal_storage.is_empty() {
            return None;
        }

        let value = self.internal_storage[self.tail].take();
        self.tail = (self.tail + 1) % N;
        self.count -= 1;
        value
    }

    /// Remove from head (ie, remove the newest item). This is the opposite of
    /// [`Self::remove`].
    fn remove_head(&mut self) -> Option<T> {
        if self.count == 0 || self.internal_storage.is_empty() {
            return None;
        }

        self.head = (self.head + N - 1) % N;
        let value = self.internal_storage[self.head].take();
        self.count -= 1;
        value
    }
}

impl<T, const N: usize> RingBufferHeap<T, N> {
    #[must_use]
    pub fn iter(&self) -> RingBufferHeapIterator<'_, T, N> {
        RingBufferHeapIterator {
            ring_buffer: self,
            iterator_index: 0,
        }
    }
}

/// This implementation allows the ring buffer to be used in a for loop directly.
impl<'a, T, const N: usize> IntoIterator for &'a RingBufferHeap<T, N> {
    type Item = &'a T;
    type IntoIter = RingBufferHeapIterator<'a, T, N>;

    fn into_iter(self) -> Self::IntoIter { self.iter() }
}

/// Iterates from the oldest item to the newest.
#[derive(Debug)]
pub struct RingBufferHeapIterator<'a, T, const N: usize> {
    ring_buffer: &'a RingBufferHeap<T, N>,
    iterator_index: usize,
}

impl<'a, T, const N: usize> Iterator for RingBufferHeapIterator<'a, T, N> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let item = self.ring_buffer.get(self.iterator_index)?;
        self.iterator_index += 1;
        Some(item)
    }
}
