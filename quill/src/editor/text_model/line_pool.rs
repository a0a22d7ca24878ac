// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{DEBUG_QUILL_LINE_POOL, Line};

/// Retired [`Line`]s waiting to be reused. Splitting and joining lines is the bread and
/// butter of editing, and recycling keeps their storage around instead of reallocating
/// it on every cycle.
#[derive(Debug, Clone, Default)]
pub struct LinePool {
    free: Vec<Line>,
}

impl LinePool {
    /// Hand out an empty line, recycled if one is available.
    pub fn acquire(&mut self) -> Line {
        match self.free.pop() {
            Some(mut line) => {
                line.reset();
                DEBUG_QUILL_LINE_POOL.then(|| {
                    tracing::trace!(
                        message = "LinePool::acquire -> recycled",
                        capacity = %line.capacity(),
                        remaining = %self.free.len()
                    );
                });
                line
            }
            None => Line::new(),
        }
    }

    pub fn release(&mut self, line: Line) {
        self.free.push(line);
        DEBUG_QUILL_LINE_POOL.then(|| {
            tracing::trace!(
                message = "LinePool::release",
                pooled = %self.free.len()
            );
        });
    }

    #[must_use]
    pub fn len(&self) -> usize { self.free.len() }

    #[must_use]
    pub fn is_empty(&self) -> bool { self.free.is_empty() }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_eq2;

    #[test]
    fn test_acquire_reuses_released_storage() {
        let mut pool = LinePool::default();
        assert!(pool.acquire().is_empty());

        let line = Line::from("a line that needed a few doublings");
        let capacity = line.capacity();
        pool.release(line);
        assert_eq2!(pool.len(), 1);

        let recycled = pool.acquire();
        assert!(recycled.is_empty());
        assert_eq2!(recycled.capacity(), capacity);
        assert!(pool.is_empty());
    }
}
