/// Canonical movement directions for snake input.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Returns the unit movement vector (dx, dy).
    ///
    /// Exactly one axis is nonzero; the vector is never (0, 0).
    #[must_use]
    pub fn delta(self) -> (i32, i32) {
        match self {
            Self::Up => (0, -1),
            Self::Down => (0, 1),
            Self::Left => (-1, 0),
            Self::Right => (1, 0),
        }
    }

    /// Returns true when movement is along the x axis.
    #[must_use]
    pub fn is_horizontal(self) -> bool {
        matches!(self, Self::Left | Self::Right)
    }
}

/// Holds the current movement vector between ticks.
///
/// Inputs may arrive at any time; the game reads the direction exactly once
/// per tick, so no buffering or snapshotting is needed.
#[derive(Debug, Clone, Copy)]
pub struct DirectionTracker {
    current: Direction,
}

impl Default for DirectionTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl DirectionTracker {
    /// Creates a tracker moving rightward, the starting direction.
    #[must_use]
    pub fn new() -> Self {
        Self {
            current: Direction::Right,
        }
    }

    /// Applies one directional input.
    ///
    /// A request is accepted only when its moving axis is the axis that is
    /// currently zero. Turns pass; 180° reversals and restatements of the
    /// current direction both fail the axis check and are ignored, which is
    /// what keeps the snake from turning back into its own neck.
    ///
    /// Returns true when the input was consumed, so the caller can mark the
    /// originating event as handled.
    pub fn steer(&mut self, requested: Direction) -> bool {
        if requested.is_horizontal() == self.current.is_horizontal() {
            return false;
        }

        self.current = requested;
        true
    }

    /// Returns the current movement direction.
    #[must_use]
    pub fn direction(&self) -> Direction {
        self.current
    }
}

#[cfg(test)]
mod tests {
    use super::{Direction, DirectionTracker};

    #[test]
    fn tracker_starts_moving_right() {
        let tracker = DirectionTracker::new();
        assert_eq!(tracker.direction(), Direction::Right);
        assert_eq!(tracker.direction().delta(), (1, 0));
    }

    #[test]
    fn perpendicular_turn_is_accepted() {
        let mut tracker = DirectionTracker::new();

        assert!(tracker.steer(Direction::Up));
        assert_eq!(tracker.direction(), Direction::Up);

        assert!(tracker.steer(Direction::Left));
        assert_eq!(tracker.direction(), Direction::Left);
    }

    #[test]
    fn reversal_into_own_axis_is_ignored() {
        let mut tracker = DirectionTracker::new();

        // Moving right; Left shares the x axis and must be dropped.
        assert!(!tracker.steer(Direction::Left));
        assert_eq!(tracker.direction(), Direction::Right);
    }

    #[test]
    fn guard_is_keyed_on_axis_not_literal_opposite() {
        let mut tracker = DirectionTracker::new();

        // Restating the current direction also fails the axis-zero check.
        assert!(!tracker.steer(Direction::Right));
        assert_eq!(tracker.direction(), Direction::Right);

        tracker.steer(Direction::Down);
        assert!(!tracker.steer(Direction::Down));
        assert!(!tracker.steer(Direction::Up));
        assert_eq!(tracker.direction(), Direction::Down);
    }

    #[test]
    fn every_delta_is_a_unit_vector() {
        for direction in [
            Direction::Up,
            Direction::Down,
            Direction::Left,
            Direction::Right,
        ] {
            let (dx, dy) = direction.delta();
            assert_eq!(dx.abs() + dy.abs(), 1);
        }
    }
}
