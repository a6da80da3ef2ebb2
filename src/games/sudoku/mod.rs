/// Sudoku: band-shuffled puzzle generation and fill-in validation
pub mod game;
pub mod renderer;

pub use game::{SudokuGame, SudokuInput, SudokuPuzzle, SudokuSettings, SudokuState};
pub use renderer::SudokuView;
