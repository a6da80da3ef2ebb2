/// Word guess (hangman) over a Persian physics vocabulary
pub mod game;
pub mod renderer;

pub use game::{HangmanGame, HangmanInput, HangmanSettings, HangmanState};
pub use renderer::HangmanView;
