//! Grid Snake: a fixed-size grid, a player-steered snake that grows by
//! eating, and a fixed-tick update loop decoupled from the render rate.
//!
//! The simulation core ([`game`], [`snake`], [`food`], [`direction`],
//! [`stepper`]) is pure and deterministic under a seed; the terminal
//! presentation and input layers ([`renderer`], [`input`], [`terminal`])
//! only observe it.

pub mod config;
pub mod direction;
pub mod food;
pub mod game;
pub mod input;
pub mod renderer;
pub mod snake;
pub mod stepper;
pub mod terminal;
