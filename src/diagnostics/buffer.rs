// SPDX-License-Identifier: MPL-2.0
//! Memory-bounded ring buffer for activity events.

use std::collections::VecDeque;

/// Bounds for the activity buffer capacity.
pub mod capacity_bounds {
    /// Minimum number of retained events.
    pub const MIN: usize = 16;
    /// Maximum number of retained events.
    pub const MAX: usize = 65_536;
    /// Default number of retained events.
    pub const DEFAULT: usize = 512;
}

/// Validated buffer capacity, clamped to [`capacity_bounds`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BufferCapacity(usize);

impl BufferCapacity {
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self(capacity.clamp(capacity_bounds::MIN, capacity_bounds::MAX))
    }

    #[must_use]
    pub fn value(self) -> usize {
        self.0
    }
}

impl Default for BufferCapacity {
    fn default() -> Self {
        Self(capacity_bounds::DEFAULT)
    }
}

/// Ring buffer that evicts the oldest entry when full.
///
/// Elements iterate in chronological order, oldest first.
#[derive(Debug, Clone)]
pub struct ActivityBuffer<T> {
    data: VecDeque<T>,
    capacity: usize,
}

impl<T> ActivityBuffer<T> {
    #[must_use]
    pub fn new(capacity: BufferCapacity) -> Self {
        Self {
            data: VecDeque::with_capacity(capacity.value()),
            capacity: capacity.value(),
        }
    }

    /// Pushes an element, evicting the oldest if at capacity.
    pub fn push(&mut self, item: T) {
        if self.data.len() >= self.capacity {
            self.data.pop_front();
        }
        self.data.push_back(item);
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.data.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn clear(&mut self) {
        self.data.clear();
    }
}

impl<T> Default for ActivityBuffer<T> {
    fn default() -> Self {
        Self::new(BufferCapacity::default())
    }
}
