/// Core game interface for the lab-arcade puzzle engines
use crossterm::event::KeyEvent;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Where a round currently stands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GameStatus {
    #[default]
    Playing,
    Won,
    Lost,
}

impl GameStatus {
    /// Won and Lost are one-way: no action leaves them.
    pub fn is_terminal(self) -> bool {
        !matches!(self, GameStatus::Playing)
    }
}

/// Main game trait that all puzzle engines implement.
///
/// Engines are pure state machines: `handle_input` takes the current state and a
/// player action, mutates the state in place and reports the resulting status.
/// Invalid actions are ignored and leave the state untouched.
pub trait PuzzleGame: 'static {
    /// Per-round state, created fresh by `new_game` and dropped when the player leaves
    type State: Serialize + for<'de> Deserialize<'de> + Clone + Send + 'static;

    /// Discrete player actions
    type Input: Clone + std::fmt::Debug + Send + 'static;

    /// Tunables read from the arcade config
    type Settings: Default + Clone + for<'de> Deserialize<'de> + Send + 'static;

    const NAME: &'static str;
    const DESCRIPTION: &'static str;

    /// Start a fresh round. All randomness comes from `rng`.
    fn new_game<R: Rng + ?Sized>(settings: &Self::Settings, rng: &mut R) -> Self::State;

    /// Apply one player action
    fn handle_input(state: &mut Self::State, input: Self::Input) -> GameStatus;

    fn status(state: &Self::State) -> GameStatus;

    /// Advance timed transitions by `dt_ms` milliseconds
    fn on_tick(_state: &mut Self::State, _dt_ms: u64) {}

    fn is_won(state: &Self::State) -> bool {
        Self::status(state) == GameStatus::Won
    }

    fn is_lost(state: &Self::State) -> bool {
        Self::status(state) == GameStatus::Lost
    }
}

/// Presentation adapter for a game: owns cursor state, turns keys into actions
/// and draws the state. Never touches game rules.
pub trait GameView<G: PuzzleGame> {
    fn new() -> Self
    where
        Self: Sized;

    /// Map a key press to an action. `None` means the key only moved the cursor
    /// or was ignored.
    fn handle_key(&mut self, key: KeyEvent, state: &G::State) -> Option<G::Input>;

    fn render(&self, frame: &mut ratatui::Frame, state: &G::State);
}
