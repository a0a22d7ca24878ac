// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::fmt::{Display, Formatter, Result};

use crate::GapBuffer;

/// One row of text. The line terminator is never stored.
///
/// Indices are byte offsets into the row. Out of range indices are caller bugs and
/// panic, see [`GapBuffer::move_gap_to`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Line {
    buffer: GapBuffer<u8>,
}

impl Line {
    #[must_use]
    pub fn new() -> Self { Self::default() }

    #[must_use]
    pub fn from_bytes(bytes: &[u8]) -> Self {
        Self {
            buffer: bytes.iter().copied().collect(),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize { self.buffer.len() }

    #[must_use]
    pub fn is_empty(&self) -> bool { self.buffer.is_empty() }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<u8> { self.buffer.get(index).copied() }

    /// # Panics
    ///
    /// If `index >= len()`.
    #[must_use]
    #[track_caller]
    pub fn byte_at(&self, index: usize) -> u8 { self.buffer[index] }

    /// Insert at the gap, which is wherever the last edit happened.
    pub fn insert(&mut self, byte: u8) { self.buffer.insert_at_gap(byte); }

    /// # Panics
    ///
    /// If `index > len()`.
    #[track_caller]
    pub fn insert_at(&mut self, index: usize, byte: u8) {
        self.buffer.insert_at(index, byte);
    }

    /// # Panics
    ///
    /// If `index >= len()`.
    #[track_caller]
    pub fn remove_at(&mut self, index: usize) -> u8 { self.buffer.remove_at(index) }

    /// Remove the bytes in `[start, end)`.
    ///
    /// # Panics
    ///
    /// If `end > len()` or `start > end`.
    #[track_caller]
    pub fn remove_range(&mut self, start: usize, end: usize) {
        assert!(start <= end, "Range start {start} is past its end {end}");
        self.buffer.move_gap_to(end);
        for _ in start..end {
            self.buffer.remove_at_gap();
        }
    }

    /// Discard every byte before `index`. The suffix stays in this line.
    ///
    /// # Panics
    ///
    /// If `index > len()`.
    #[track_caller]
    pub fn remove_from_front_through(&mut self, index: usize) {
        self.buffer.truncate_front(index);
    }

    /// Discard every byte from `index` onward.
    ///
    /// # Panics
    ///
    /// If `index > len()`.
    #[track_caller]
    pub fn truncate(&mut self, index: usize) { self.buffer.truncate(index); }

    /// Append the first `count` bytes of this line onto the end of `dst`.
    ///
    /// # Panics
    ///
    /// If `count > len()`.
    #[track_caller]
    pub fn copy_into(&self, dst: &mut Line, count: usize) {
        self.copy_into_at(dst, count, dst.len());
    }

    /// Copy the first `count` bytes of this line into `dst`, starting at `index`.
    ///
    /// # Panics
    ///
    /// If `count > len()` or `index > dst.len()`.
    #[track_caller]
    pub fn copy_into_at(&self, dst: &mut Line, count: usize, index: usize) {
        assert!(
            count <= self.len(),
            "Can't copy {count} bytes out of a line of length {}",
            self.len()
        );
        dst.buffer.move_gap_to(index);
        for byte in self.buffer.iter().take(count) {
            dst.insert(*byte);
        }
    }

    /// Empty the line, keeping its allocation for reuse.
    pub fn reset(&mut self) { self.buffer.clear(); }

    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &u8> + '_ { self.buffer.iter() }

    #[must_use]
    pub fn to_bytes(&self) -> Vec<u8> { self.buffer.iter().copied().collect() }

    /// Capacity of the backing storage.
    #[must_use]
    pub fn capacity(&self) -> usize { self.buffer.capacity() }
}

impl Display for Line {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{}", String::from_utf8_lossy(&self.to_bytes()))
    }
}

impl From<&str> for Line {
    fn from(value: &str) -> Self { Self::from_bytes(value.as_bytes()) }
}
