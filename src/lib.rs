pub mod app;
pub mod cli;
pub mod config;

pub mod core {
    pub mod engine;
    pub mod game;
    pub mod menu;
}

pub mod games;

// Re-export for convenience
pub use crate::core::game::{GameStatus, GameView, PuzzleGame};
