// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

/// A bounded buffer that evicts its oldest item when a new one is added at capacity.
/// [`super::RingBufferHeap`] is the implementation used by the undo/redo stacks.
///
/// Indices are logical: `0` is the oldest item and `len() - 1` the newest.
pub trait RingBuffer<T, const N: usize> {
    fn len(&self) -> usize;

    fn clear(&mut self);

    fn get(&self, index: usize) -> Option<&T>;

    fn get_mut(&mut self, index: usize) -> Option<&mut T>;

    fn is_empty(&self) -> bool { self.len() == 0 }

    fn last(&self) -> Option<&T> { self.get(self.len().checked_sub(1)?) }

    fn last_mut(&mut self) -> Option<&mut T> {
        let index = self.len().checked_sub(1)?;
        self.get_mut(index)
    }

    /// Insert the newest item, evicting the oldest one if full.
    fn add(&mut self, value: T);

    /// Remove the oldest item.
    fn remove(&mut self) -> Option<T>;

    /// Remove the newest item.
    fn remove_head(&mut self) -> Option<T>;

    fn push(&mut self, value: T) { self.add(value); }

    fn pop(&mut self) -> Option<T> { self.remove_head() }
}
