pub mod macros;
pub mod hangman;
pub mod liquid_sort;
pub mod memory;
pub mod sudoku;

use crate::register_games;
use crate::games::hangman::{HangmanGame, HangmanView};
use crate::games::liquid_sort::{LiquidSortGame, LiquidSortView};
use crate::games::memory::{MemoryGame, MemoryView};
use crate::games::sudoku::{SudokuGame, SudokuView};

/// Metadata about a game
#[derive(Clone, Debug)]
pub struct GameInfo {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
}

// Register all games here - adding a game only needs a new entry
register_games! {
    Sudoku => {
        types: (SudokuGame, SudokuView),
        id: "sudoku",
        settings: |config| config.sudoku.clone()
    },
    Memory => {
        types: (MemoryGame, MemoryView),
        id: "memory",
        settings: |config| config.memory.clone()
    },
    WordGuess => {
        types: (HangmanGame, HangmanView),
        id: "word-guess",
        settings: |config| config.hangman.clone()
    },
    LiquidSort => {
        types: (LiquidSortGame, LiquidSortView),
        id: "liquid-sort",
        settings: |_| ()
    },
}
