//! Bounded FIFO history of past positions.

use std::collections::VecDeque;
use std::num::NonZeroUsize;

use crate::math::Vector;

/// Ring buffer of recent positions, oldest first.
///
/// Owned by exactly one body; the renderer only ever sees it through `&`.
#[derive(Clone, Debug)]
pub struct Trail {
    points: VecDeque<Vector>,
    capacity: NonZeroUsize,
}

impl Trail {
    pub fn new(capacity: NonZeroUsize) -> Self {
        Self {
            points: VecDeque::with_capacity(capacity.get()),
            capacity,
        }
    }

    /// Append a point, evicting from the front when over capacity.
    pub fn push(&mut self, point: Vector) {
        self.points.push_back(point);
        while self.points.len() > self.capacity.get() {
            self.points.pop_front();
        }
    }

    pub fn clear(&mut self) {
        self.points.clear();
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity.get()
    }

    /// Points from oldest to newest.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = Vector> + '_ {
        self.points.iter().copied()
    }

    pub fn newest(&self) -> Option<Vector> {
        self.points.back().copied()
    }

    pub fn oldest(&self) -> Option<Vector> {
        self.points.front().copied()
    }
}
