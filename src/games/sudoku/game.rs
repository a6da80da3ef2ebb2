use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::core::game::{GameStatus, PuzzleGame};

pub const SIZE: usize = 9;
pub const CELLS: usize = SIZE * SIZE;

/// Default number of removal attempts when carving the puzzle
pub const DEFAULT_BLANKS: usize = 40;

/// Solved grid every puzzle is derived from
const BASE_GRID: &str =
    "123456789456789123789123456214365897365897214897214365531642978642978531978531642";

fn idx(row: usize, col: usize) -> usize {
    row * SIZE + col
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SudokuPuzzle {
    /// Complete solution, row-major, values 1-9
    pub solved: Vec<u8>,
    /// `solved` with some cells zeroed; zero cells are the editable ones
    pub puzzle: Vec<u8>,
}

impl SudokuPuzzle {
    pub fn generate<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::generate_with_blanks(rng, DEFAULT_BLANKS)
    }

    /// Shuffle the base grid within bands, then blank `attempts` random cells.
    ///
    /// Cells are sampled independently, so a cell picked twice is only blanked
    /// once and the puzzle may end up with fewer than `attempts` blanks.
    pub fn generate_with_blanks<R: Rng + ?Sized>(rng: &mut R, attempts: usize) -> Self {
        let mut solved: Vec<u8> = BASE_GRID.bytes().map(|b| b - b'0').collect();

        for band in 0..3 {
            let (a, b) = pick_two(rng);
            let (r1, r2) = (band * 3 + a, band * 3 + b);
            for col in 0..SIZE {
                solved.swap(idx(r1, col), idx(r2, col));
            }
        }

        for band in 0..3 {
            let (a, b) = pick_two(rng);
            let (c1, c2) = (band * 3 + a, band * 3 + b);
            for row in 0..SIZE {
                solved.swap(idx(row, c1), idx(row, c2));
            }
        }

        let mut puzzle = solved.clone();
        for _ in 0..attempts {
            let row = rng.random_range(0..SIZE);
            let col = rng.random_range(0..SIZE);
            puzzle[idx(row, col)] = 0;
        }

        debug!(
            blanks = puzzle.iter().filter(|&&v| v == 0).count(),
            attempts,
            "sudoku puzzle carved"
        );
        Self { solved, puzzle }
    }

    /// True if every row, column and 3×3 box is a permutation of 1-9.
    pub fn is_valid_solution(grid: &[u8]) -> bool {
        if grid.len() != CELLS {
            return false;
        }

        (0..SIZE).all(|r| group_ok(grid, (0..SIZE).map(|c| idx(r, c))))
            && (0..SIZE).all(|c| group_ok(grid, (0..SIZE).map(|r| idx(r, c))))
            && (0..SIZE).all(|b| {
                let (br, bc) = ((b / 3) * 3, (b % 3) * 3);
                group_ok(grid, (0..SIZE).map(|k| idx(br + k / 3, bc + k % 3)))
            })
    }
}

fn group_ok(grid: &[u8], cells: impl Iterator<Item = usize>) -> bool {
    let mut seen = [false; SIZE + 1];
    for i in cells {
        let v = grid[i] as usize;
        if v == 0 || v > SIZE || seen[v] {
            return false;
        }
        seen[v] = true;
    }
    true
}

/// Two distinct offsets within a band of three
fn pick_two<R: Rng + ?Sized>(rng: &mut R) -> (usize, usize) {
    let a = rng.random_range(0..3);
    let b = (a + rng.random_range(1..3)) % 3;
    (a, b)
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SudokuState {
    pub puzzle: SudokuPuzzle,
    pub current_board: Vec<u8>,
    pub selected_cell: Option<usize>,
    pub status: GameStatus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SudokuInput {
    SelectCell(usize),
    /// 1-9 writes a digit, 0 clears the cell
    EnterDigit(u8),
}

impl SudokuState {
    pub fn new(puzzle: SudokuPuzzle) -> Self {
        let current_board = puzzle.puzzle.clone();
        let mut state = Self {
            puzzle,
            current_board,
            selected_cell: None,
            status: GameStatus::Playing,
        };
        // nothing left to fill in
        if state.is_solved() {
            state.status = GameStatus::Won;
        }
        state
    }

    pub fn is_given(&self, index: usize) -> bool {
        self.puzzle.puzzle.get(index).is_some_and(|&v| v != 0)
    }

    /// A player-entered digit that disagrees with the solution.
    pub fn is_error(&self, index: usize) -> bool {
        match self.current_board.get(index) {
            Some(&v) => v != 0 && !self.is_given(index) && v != self.puzzle.solved[index],
            None => false,
        }
    }

    /// Selecting a given cell clears the selection; selecting the selected cell
    /// deselects it.
    pub fn select_cell(&mut self, index: usize) {
        if index >= CELLS || self.is_given(index) || self.selected_cell == Some(index) {
            self.selected_cell = None;
        } else {
            self.selected_cell = Some(index);
        }
    }

    pub fn enter_digit(&mut self, value: u8) -> GameStatus {
        if self.status.is_terminal() || value > 9 {
            return self.status;
        }
        let Some(cell) = self.selected_cell else {
            return self.status;
        };

        self.current_board[cell] = value;
        if self.is_solved() {
            self.status = GameStatus::Won;
            info!("sudoku solved");
        }
        self.status
    }

    pub fn is_solved(&self) -> bool {
        !self.current_board.contains(&0) && self.current_board == self.puzzle.solved
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SudokuSettings {
    pub blanks: usize,
}

impl Default for SudokuSettings {
    fn default() -> Self {
        Self { blanks: DEFAULT_BLANKS }
    }
}

#[derive(Clone)]
pub struct SudokuGame;

impl PuzzleGame for SudokuGame {
    type State = SudokuState;
    type Input = SudokuInput;
    type Settings = SudokuSettings;

    const NAME: &'static str = "Sudoku";
    const DESCRIPTION: &'static str = "Place 1-9 without repeats in any row, column or box";

    fn new_game<R: Rng + ?Sized>(settings: &Self::Settings, rng: &mut R) -> Self::State {
        SudokuState::new(SudokuPuzzle::generate_with_blanks(rng, settings.blanks))
    }

    fn handle_input(state: &mut Self::State, input: Self::Input) -> GameStatus {
        match input {
            SudokuInput::SelectCell(index) => {
                state.select_cell(index);
                state.status
            }
            SudokuInput::EnterDigit(value) => state.enter_digit(value),
        }
    }

    fn status(state: &Self::State) -> GameStatus {
        state.status
    }
}
