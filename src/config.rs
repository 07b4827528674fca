use thiserror::Error;

/// Default grid width in cells.
pub const DEFAULT_GRID_WIDTH: u16 = 20;

/// Default grid height in cells.
pub const DEFAULT_GRID_HEIGHT: u16 = 20;

/// Default game speed in ticks per second.
pub const DEFAULT_TICKS_PER_SECOND: u32 = 10;

/// Logical grid dimensions passed through the game as a named type.
///
/// The grid is the bounds-checking authority: every candidate head cell is
/// validated against it before use.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct GridSize {
    pub width: u16,
    pub height: u16,
}

impl GridSize {
    /// Returns the total number of cells in the grid.
    #[must_use]
    pub fn total_cells(self) -> usize {
        usize::from(self.width) * usize::from(self.height)
    }
}

/// Immutable per-session configuration, assembled once at startup.
#[derive(Debug, Clone, Copy)]
pub struct GameConfig {
    pub grid: GridSize,
    pub ticks_per_second: u32,
}

impl GameConfig {
    /// Validates and builds a session configuration.
    pub fn new(grid: GridSize, ticks_per_second: u32) -> Result<Self, ConfigError> {
        if grid.width == 0 || grid.height == 0 {
            return Err(ConfigError::EmptyGrid {
                width: grid.width,
                height: grid.height,
            });
        }
        if ticks_per_second == 0 {
            return Err(ConfigError::ZeroTickRate);
        }

        Ok(Self {
            grid,
            ticks_per_second,
        })
    }
}

/// Rejected startup configuration values.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("grid dimensions must be nonzero, got {width}x{height}")]
    EmptyGrid { width: u16, height: u16 },
    #[error("ticks per second must be nonzero")]
    ZeroTickRate,
}

#[cfg(test)]
mod tests {
    use super::{ConfigError, GameConfig, GridSize};

    #[test]
    fn valid_configuration_is_accepted() {
        let config = GameConfig::new(
            GridSize {
                width: 20,
                height: 20,
            },
            10,
        )
        .expect("default-shaped config should validate");

        assert_eq!(config.grid.total_cells(), 400);
        assert_eq!(config.ticks_per_second, 10);
    }

    #[test]
    fn zero_sized_grid_is_rejected() {
        let result = GameConfig::new(
            GridSize {
                width: 0,
                height: 20,
            },
            10,
        );

        assert!(matches!(result, Err(ConfigError::EmptyGrid { .. })));
    }

    #[test]
    fn zero_tick_rate_is_rejected() {
        let result = GameConfig::new(
            GridSize {
                width: 20,
                height: 20,
            },
            0,
        );

        assert!(matches!(result, Err(ConfigError::ZeroTickRate)));
    }
}
