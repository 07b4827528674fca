use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::config::{GameConfig, GridSize};
use crate::direction::Direction;
use crate::food::Food;
use crate::snake::{Cell, Snake};

/// What a single tick did, for callers that want to observe the transition.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum TickOutcome {
    /// The snake shifted one cell.
    Moved,
    /// The snake grew onto the food cell; food respawned, score incremented.
    Ate,
    /// The candidate head left the grid or hit the body; the session reset.
    Collided,
}

/// Complete mutable game state for one session.
///
/// There is no game-over status: a collision resets the session synchronously
/// inside the same tick, so from the caller's perspective the game is a
/// single self-healing playing state.
#[derive(Debug, Clone)]
pub struct GameState {
    pub snake: Snake,
    pub food: Food,
    pub score: u32,
    config: GameConfig,
    rng: StdRng,
}

impl GameState {
    /// Creates a state seeded from entropy.
    #[must_use]
    pub fn new(config: GameConfig) -> Self {
        Self::new_with_seed(config, rand::random())
    }

    /// Creates a deterministic state for tests and reproducible simulations.
    #[must_use]
    pub fn new_with_seed(config: GameConfig, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let snake = Snake::new(start_cell(config.grid));
        let food = Food::spawn(&mut rng, config.grid);

        Self {
            snake,
            food,
            score: 0,
            config,
            rng,
        }
    }

    /// Advances the simulation by one discrete tick.
    ///
    /// `direction` is the tracker value, read exactly once per tick. The
    /// candidate head cell decides everything: out of bounds or on the body
    /// is a collision (full reset), on the food cell is an eat (growth and
    /// respawn happen atomically with the move), anything else is a plain
    /// shift.
    pub fn update(&mut self, direction: Direction) -> TickOutcome {
        let candidate = self.snake.head().step(direction);

        if !candidate.is_within_bounds(self.config.grid) || self.snake.occupies(candidate) {
            self.reset();
            return TickOutcome::Collided;
        }

        if candidate == self.food.cell {
            self.snake.grow_to(candidate);
            self.food = Food::spawn(&mut self.rng, self.config.grid);
            self.score += 1;
            return TickOutcome::Ate;
        }

        self.snake.advance(candidate);
        TickOutcome::Moved
    }

    /// Discards and reconstructs snake, food, and score.
    pub fn reset(&mut self) {
        self.snake = Snake::new(start_cell(self.config.grid));
        self.food = Food::spawn(&mut self.rng, self.config.grid);
        self.score = 0;
    }

    /// Returns the session grid.
    #[must_use]
    pub fn grid(&self) -> GridSize {
        self.config.grid
    }
}

/// The snake always starts at the grid center.
fn start_cell(grid: GridSize) -> Cell {
    Cell {
        x: i32::from(grid.width / 2),
        y: i32::from(grid.height / 2),
    }
}
