use std::collections::VecDeque;

use crate::config::GridSize;
use crate::direction::Direction;

/// Grid position in logical cell coordinates.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    /// Returns the neighboring cell one step away in `direction`.
    #[must_use]
    pub fn step(self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Returns true when the cell lies inside the bounds.
    #[must_use]
    pub fn is_within_bounds(self, bounds: GridSize) -> bool {
        self.x >= 0
            && self.y >= 0
            && self.x < i32::from(bounds.width)
            && self.y < i32::from(bounds.height)
    }
}

/// Snake body as an ordered head-first sequence of cells.
///
/// The deque replaces a per-segment ownership chain: shifting the body is a
/// push at the front and a pop at the back, both O(1), with no recursion
/// through segments.
#[derive(Debug, Clone)]
pub struct Snake {
    body: VecDeque<Cell>,
}

impl Snake {
    /// Creates a one-cell snake at `start`.
    #[must_use]
    pub fn new(start: Cell) -> Self {
        let mut body = VecDeque::new();
        body.push_front(start);

        Self { body }
    }

    /// Creates a snake from explicit body segments (front is head).
    #[must_use]
    pub fn from_segments(segments: Vec<Cell>) -> Self {
        Self {
            body: VecDeque::from(segments),
        }
    }

    /// Shifts the whole body one cell: `new_head` becomes the head, every
    /// other segment takes its predecessor's place, and the old tail cell is
    /// discarded.
    pub fn advance(&mut self, new_head: Cell) {
        self.body.push_front(new_head);
        let _ = self.body.pop_back();
    }

    /// Prepends `new_head` without dropping the tail; length grows by one.
    pub fn grow_to(&mut self, new_head: Cell) {
        self.body.push_front(new_head);
    }

    /// Returns true if any segment occupies `cell`.
    #[must_use]
    pub fn occupies(&self, cell: Cell) -> bool {
        self.body.contains(&cell)
    }

    /// Returns the current head position.
    #[must_use]
    pub fn head(&self) -> Cell {
        *self
            .body
            .front()
            .expect("snake body must always contain at least one segment")
    }

    /// Returns current segment count.
    #[must_use]
    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Returns true when there are no segments.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// Iterates over body segments from head to tail.
    pub fn segments(&self) -> impl Iterator<Item = &Cell> {
        self.body.iter()
    }
}
