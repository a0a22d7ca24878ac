// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! A generic gap buffer. The storage is a [`Vec<Option<T>>`] whose length is the
//! capacity. The gap is the run of [None] slots `[front_index, back_index)`.
//!
//! ```text
//!                front_index      back_index
//!                     ▼               ▼
//! storage: [ a | b | ░ | ░ | ░ | ░ | c | d ]
//! logical:   0   1                   2   3
//! ```
//!
//! Inserting and removing at the gap is O(1). Moving the gap costs one element shift per
//! position moved. One slot of gap is always kept free, so growth happens when the gap
//! shrinks to a single slot, and it doubles the capacity (the first allocation uses
//! [`crate::DEFAULT_GAP_BUFFER_CAPACITY`]).

use std::{fmt::{Debug, Formatter, Result},
          iter::repeat_with,
          ops::Index};

use crate::{DEFAULT_GAP_BUFFER_CAPACITY, GapBufferError};

#[derive(Clone)]
pub struct GapBuffer<T> {
    storage: Vec<Option<T>>,
    front_index: usize,
    back_index: usize,
}

impl<T> Default for GapBuffer<T> {
    fn default() -> Self { Self::new() }
}

impl<T> GapBuffer<T> {
    /// An empty buffer with no allocation. Storage is allocated on the first insert.
    #[must_use]
    pub fn new() -> Self {
        Self {
            storage: Vec::new(),
            front_index: 0,
            back_index: 0,
        }
    }

    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            storage: repeat_with(|| None).take(capacity).collect(),
            front_index: 0,
            back_index: capacity,
        }
    }

    #[must_use]
    pub fn len(&self) -> usize { self.front_index + self.capacity() - self.back_index }

    #[must_use]
    pub fn is_empty(&self) -> bool { self.len() == 0 }

    #[must_use]
    pub fn capacity(&self) -> usize { self.storage.len() }

    /// Logical index where the next [`Self::insert_at_gap`] lands.
    #[must_use]
    pub fn gap_position(&self) -> usize { self.front_index }

    fn gap_len(&self) -> usize { self.back_index - self.front_index }

    fn physical_index(&self, index: usize) -> usize {
        if index < self.front_index {
            index
        } else {
            index + self.gap_len()
        }
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&T> {
        if index >= self.len() {
            return None;
        }
        self.storage[self.physical_index(index)].as_ref()
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        if index >= self.len() {
            return None;
        }
        let physical_index = self.physical_index(index);
        self.storage[physical_index].as_mut()
    }

    /// Insert `value` just before the gap and advance the gap past it.
    pub fn insert_at_gap(&mut self, value: T) {
        if self.gap_len() <= 1 {
            self.grow();
        }
        self.storage[self.front_index] = Some(value);
        self.front_index += 1;
    }

    /// Remove and return the element immediately before the gap.
    pub fn remove_at_gap(&mut self) -> Option<T> {
        if self.front_index == 0 {
            return None;
        }
        self.front_index -= 1;
        self.storage[self.front_index].take()
    }

    /// Reposition the gap so that it starts at logical `index`.
    ///
    /// # Errors
    ///
    /// [`GapBufferError::OutOfRange`] if `index > len()`.
    pub fn try_move_gap_to(&mut self, index: usize) -> std::result::Result<(), GapBufferError> {
        let len = self.len();
        if index > len {
            return Err(GapBufferError::OutOfRange { index, len });
        }

        while self.front_index > index {
            self.front_index -= 1;
            self.back_index -= 1;
            self.storage[self.back_index] = self.storage[self.front_index].take();
        }

        while self.front_index < index {
            self.storage[self.front_index] = self.storage[self.back_index].take();
            self.front_index += 1;
            self.back_index += 1;
        }

        Ok(())
    }

    /// # Panics
    ///
    /// If `index > len()`.
    #[track_caller]
    pub fn move_gap_to(&mut self, index: usize) {
        self.try_move_gap_to(index)
            .unwrap_or_else(|err| panic!("{err}"));
    }

    /// # Panics
    ///
    /// If `index > len()`.
    #[track_caller]
    pub fn insert_at(&mut self, index: usize, value: T) {
        self.move_gap_to(index);
        self.insert_at_gap(value);
    }

    /// Remove the element at logical `index`, by moving the gap just past it.
    ///
    /// # Errors
    ///
    /// [`GapBufferError::OutOfRange`] if `index >= len()`.
    pub fn try_remove_at(&mut self, index: usize) -> std::result::Result<T, GapBufferError> {
        let len = self.len();
        let out_of_range = GapBufferError::OutOfRange { index, len };
        if index >= len {
            return Err(out_of_range);
        }
        self.try_move_gap_to(index + 1)?;
        self.remove_at_gap().ok_or(out_of_range)
    }

    /// # Panics
    ///
    /// If `index >= len()`.
    #[track_caller]
    pub fn remove_at(&mut self, index: usize) -> T {
        self.try_remove_at(index)
            .unwrap_or_else(|err| panic!("{err}"))
    }

    /// Drop every element. The capacity is kept.
    pub fn clear(&mut self) {
        self.storage.iter_mut().for_each(|slot| *slot = None);
        self.front_index = 0;
        self.back_index = self.capacity();
    }

    /// Discard the elements in `[0, index)`.
    ///
    /// # Panics
    ///
    /// If `index > len()`.
    #[track_caller]
    pub fn truncate_front(&mut self, index: usize) {
        self.move_gap_to(index);
        self.storage[..self.front_index]
            .iter_mut()
            .for_each(|slot| *slot = None);
        self.front_index = 0;
    }

    /// Discard the elements in `[index, len)`.
    ///
    /// # Panics
    ///
    /// If `index > len()`.
    #[track_caller]
    pub fn truncate(&mut self, index: usize) {
        self.move_gap_to(index);
        self.storage[self.back_index..]
            .iter_mut()
            .for_each(|slot| *slot = None);
        self.back_index = self.capacity();
    }

    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &T> + '_ {
        let (front, back) = (
            &self.storage[..self.front_index],
            &self.storage[self.back_index..],
        );
        front.iter().chain(back.iter()).filter_map(Option::as_ref)
    }

    /// Widen the gap to double the capacity. The segment after the gap ends up
    /// at the end of the new storage.
    fn grow(&mut self) {
        let old_capacity = self.capacity();
        let new_capacity = if old_capacity == 0 {
            DEFAULT_GAP_BUFFER_CAPACITY
        } else {
            old_capacity * 2
        };
        let back_segment = self.storage.split_off(self.back_index);
        self.storage
            .resize_with(new_capacity - back_segment.len(), || None);
        self.back_index = self.storage.len();
        self.storage.extend(back_segment);
    }
}

impl<T> Index<usize> for GapBuffer<T> {
    type Output = T;

    #[track_caller]
    fn index(&self, index: usize) -> &Self::Output {
        match self.get(index) {
            Some(it) => it,
            None => panic!(
                "{}",
                GapBufferError::OutOfRange {
                    index,
                    len: self.len()
                }
            ),
        }
    }
}

impl<T> Extend<T> for GapBuffer<T> {
    /// Append to the end.
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.move_gap_to(self.len());
        iter.into_iter().for_each(|it| self.insert_at_gap(it));
    }
}

impl<T> FromIterator<T> for GapBuffer<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut it = Self::new();
        it.extend(iter);
        it
    }
}

/// Equality is on content only. Where the gap sits doesn't matter.
impl<T: PartialEq> PartialEq for GapBuffer<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for GapBuffer<T> {}

impl<T: Debug> Debug for GapBuffer<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        f.debug_struct("GapBuffer")
            .field("front_index", &self.front_index)
            .field("back_index", &self.back_index)
            .field("items", &self.iter().collect::<Vec<_>>())
            .finish()
    }
}
