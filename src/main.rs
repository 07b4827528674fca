use std::io;
use std::thread;
use std::time::{Duration, Instant};

use clap::Parser;
use thiserror::Error;

use gridsnake::config::{
    ConfigError, DEFAULT_GRID_HEIGHT, DEFAULT_GRID_WIDTH, DEFAULT_TICKS_PER_SECOND, GameConfig,
    GridSize,
};
use gridsnake::direction::DirectionTracker;
use gridsnake::game::GameState;
use gridsnake::input::{self, GameInput};
use gridsnake::renderer;
use gridsnake::stepper::Stepper;
use gridsnake::terminal::{TerminalSession, install_panic_hook};

/// Sleep between loop iterations; rendering runs at roughly 60 fps while the
/// stepper paces game ticks independently.
const FRAME_SLEEP: Duration = Duration::from_millis(16);

#[derive(Debug, Parser)]
#[command(version, about = "Grid Snake with a fixed-tick core")]
struct Cli {
    /// Grid width in cells.
    #[arg(long, default_value_t = DEFAULT_GRID_WIDTH)]
    width: u16,

    /// Grid height in cells.
    #[arg(long, default_value_t = DEFAULT_GRID_HEIGHT)]
    height: u16,

    /// Game speed in ticks per second.
    #[arg(long = "speed", default_value_t = DEFAULT_TICKS_PER_SECOND)]
    ticks_per_second: u32,
}

#[derive(Debug, Error)]
enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("terminal error: {0}")]
    Terminal(#[from] io::Error),
}

fn main() -> Result<(), AppError> {
    let cli = Cli::parse();
    let config = GameConfig::new(
        GridSize {
            width: cli.width,
            height: cli.height,
        },
        cli.ticks_per_second,
    )?;

    install_panic_hook();
    run(config)
}

fn run(config: GameConfig) -> Result<(), AppError> {
    let mut session = TerminalSession::enter()?;
    let mut state = GameState::new(config);
    let mut tracker = DirectionTracker::new();
    let mut stepper = Stepper::new(config.ticks_per_second);

    loop {
        session
            .terminal_mut()
            .draw(|frame| renderer::render(frame, &state))?;

        if let Some(game_input) = input::poll_input()? {
            match game_input {
                GameInput::Quit => break,
                GameInput::Direction(direction) => {
                    tracker.steer(direction);
                }
            }
        }

        if stepper.frame(Instant::now()) {
            state.update(tracker.direction());
        }

        thread::sleep(FRAME_SLEEP);
    }

    Ok(())
}
