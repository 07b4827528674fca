use rand::Rng;

use crate::config::GridSize;
use crate::snake::Cell;

/// The single active pellet on the board.
///
/// A pellet is replaced, not mutated: eating discards it and the game spawns
/// a fresh one.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Food {
    pub cell: Cell,
}

impl Food {
    /// Creates food at a fixed cell, for tests and scripted scenarios.
    #[must_use]
    pub fn at(cell: Cell) -> Self {
        Self { cell }
    }

    /// Places food on a uniformly random cell of the grid.
    ///
    /// Placement does not consult snake occupancy: a pellet may land under
    /// the body, where it sits unreachable until the body moves off it.
    #[must_use]
    pub fn spawn<R: Rng + ?Sized>(rng: &mut R, grid: GridSize) -> Self {
        Self {
            cell: Cell {
                x: rng.gen_range(0..i32::from(grid.width)),
                y: rng.gen_range(0..i32::from(grid.height)),
            },
        }
    }
}
